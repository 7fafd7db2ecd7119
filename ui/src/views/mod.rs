mod analytics;
pub use analytics::Analytics;

mod campaigns;
pub use campaigns::Campaigns;

mod dashboard;
pub use dashboard::Dashboard;

mod not_found;
pub use not_found::NotFound;

mod revenue;
pub use revenue::Revenue;
