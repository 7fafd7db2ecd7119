//! Platform-neutral dashboard logic: datasets, filters, derivation, table
//! view, export payloads and the small helpers the views share.

pub mod animation;
pub mod breakdowns;
pub mod campaigns;
pub mod dataset;
pub mod derive;
pub mod export;
pub mod filters;
pub mod format;
pub mod notifications;
pub mod period;
pub mod platform;
pub mod table;
pub mod timing;

pub use dataset::DatasetStore;
pub use derive::{derive, DerivedView};
pub use filters::FilterState;
pub use period::Period;
