use dioxus::prelude::*;

use crate::t;

/// Catch-all page. `segments` is the unmatched path as split by the router.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(%path, "no route matched");

    rsx! {
        section { class: "page page-not-found",
            h1 { class: "page-not-found__code", "404" }
            h2 { {t!("not-found-title")} }
            p { {t!("not-found-body", path = path.clone())} }
        }
    }
}
