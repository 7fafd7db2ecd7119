use dioxus::prelude::*;

use crate::core::notifications::NotificationCenter;
use crate::t;

#[component]
pub fn NotificationBell() -> Element {
    let mut center = use_signal(NotificationCenter::seeded);
    let mut open = use_signal(|| false);

    let badge = center.read().badge_label();
    let items = center.read().items().to_vec();
    let has_unread = center.read().unread_count() > 0;

    rsx! {
        div { class: "notification-bell",
            button {
                r#type: "button",
                class: "notification-bell__trigger",
                aria_expanded: "{open}",
                onclick: move |_| open.toggle(),
                span { aria_hidden: "true", "🔔" }
                if let Some(label) = badge {
                    span { class: "notification-bell__badge", "{label}" }
                }
            }

            if open() {
                div { class: "notification-bell__panel",
                    div { class: "notification-bell__header",
                        strong { {t!("notifications-title")} }
                        if has_unread {
                            button {
                                r#type: "button",
                                class: "button button--ghost",
                                onclick: move |_| center.write().mark_all_read(),
                                {t!("notifications-mark-all")}
                            }
                        }
                    }
                    if items.is_empty() {
                        p { class: "notification-bell__empty", {t!("notifications-empty")} }
                    }
                    ul { class: "notification-bell__list",
                        for item in items {
                            li {
                                key: "{item.id}",
                                class: if item.read { "notification" } else { "notification notification--unread" },
                                onclick: move |_| {
                                    center.write().mark_read(item.id);
                                },
                                strong { class: "notification__title", "{item.title}" }
                                p { class: "notification__message", "{item.message}" }
                                span { class: "notification__time", "{item.time}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
