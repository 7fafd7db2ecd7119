//! Header notification feed with read/unread tracking.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    /// Relative, preformatted ("2 min ago").
    pub time: String,
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    /// Feed shown on first load.
    pub fn seeded() -> Self {
        let entry = |id, title: &str, message: &str, time: &str, read| Notification {
            id,
            title: title.to_string(),
            message: message.to_string(),
            time: time.to_string(),
            read,
        };
        Self::new(vec![
            entry(1, "New user registered", "Sarah Johnson joined the platform", "2 min ago", false),
            entry(2, "Revenue milestone", "You've reached $50k this month", "1 hour ago", false),
            entry(3, "Campaign completed", "Instagram campaign finished successfully", "3 hours ago", true),
        ])
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Text for the bell badge; `None` hides the badge.
    pub fn badge_label(&self) -> Option<String> {
        match self.unread_count() {
            0 => None,
            n if n > 9 => Some("9+".to_string()),
            n => Some(n.to_string()),
        }
    }

    /// Returns whether a notification with `id` exists.
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(item) => {
                item.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_feed_has_two_unread() {
        let center = NotificationCenter::seeded();
        assert_eq!(center.items().len(), 3);
        assert_eq!(center.unread_count(), 2);
        assert_eq!(center.badge_label().as_deref(), Some("2"));
    }

    #[test]
    fn badge_caps_at_nine_plus() {
        let items = (0..12)
            .map(|id| Notification {
                id,
                title: format!("n{id}"),
                message: String::new(),
                time: "now".into(),
                read: false,
            })
            .collect();
        let center = NotificationCenter::new(items);
        assert_eq!(center.badge_label().as_deref(), Some("9+"));
    }

    #[test]
    fn marking_read_updates_badge() {
        let mut center = NotificationCenter::seeded();
        assert!(center.mark_read(1));
        assert!(!center.mark_read(42));
        assert_eq!(center.unread_count(), 1);

        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
        assert_eq!(center.badge_label(), None);
    }
}
