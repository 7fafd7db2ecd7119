//! Platform detection helpers.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Desktop => "desktop",
        }
    }
}

/// Runs a fire-and-forget future on the active dioxus runtime. The task is
/// dropped together with the component scope that spawned it.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    let _ = dioxus::prelude::spawn(future);
}
