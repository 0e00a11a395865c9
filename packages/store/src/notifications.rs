//! In-process notification list. Newest entries come first; nothing is
//! persisted and entries never expire on their own.

use chrono::{DateTime, Utc};

use crate::models::{Notification, NotificationKind, RelatedTo};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Newest first.
    pub fn list(&self) -> &[Notification] {
        &self.items
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        related_to: Option<RelatedTo>,
    ) -> &Notification {
        self.push_at(title, message, kind, related_to, Utc::now())
    }

    pub fn push_at(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        related_to: Option<RelatedTo>,
        created_at: DateTime<Utc>,
    ) -> &Notification {
        let notification = Notification {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            message: message.into(),
            kind,
            related_to,
            created_at,
            read: false,
        };
        tracing::debug!(title = %notification.title, "notification pushed");
        self.items.insert(0, notification);
        &self.items[0]
    }

    /// Returns false when no notification has that id.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Notification> {
        let index = self.items.iter().position(|n| n.id == id)?;
        Some(self.items.remove(index))
    }

    /// Drop everything, e.g. when the session ends.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }
}

/// Text for the header badge: `None` when there is nothing unread,
/// `"<cap>+"` once the count exceeds `cap`.
pub fn badge_label(unread: usize, cap: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > cap => Some(format!("{cap}+")),
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityType;
    use chrono::Duration;

    fn center_with(count: usize) -> NotificationCenter {
        let mut center = NotificationCenter::new();
        let start = Utc::now() - Duration::hours(count as i64);
        for i in 0..count {
            center.push_at(
                format!("n{i}"),
                "msg",
                NotificationKind::Info,
                None,
                start + Duration::hours(i as i64),
            );
        }
        center
    }

    #[test]
    fn test_newest_first() {
        let center = center_with(3);
        let titles: Vec<_> = center.list().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["n2", "n1", "n0"]);
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let mut center = center_with(2);
        let id = center.list()[0].id.clone();
        assert!(center.mark_read(&id));
        let after_first = center.clone();
        assert!(center.mark_read(&id));
        assert_eq!(center, after_first);
        assert_eq!(center.unread_count(), 1);
        assert!(!center.mark_read("missing"));
    }

    #[test]
    fn test_unread_count_tracks_operations() {
        let mut center = center_with(5);
        let ids: Vec<_> = center.list().iter().map(|n| n.id.clone()).collect();
        center.mark_read(&ids[0]);
        center.remove(&ids[1]);
        center.mark_read(&ids[2]);
        center.remove(&ids[2]);
        let expected = center.list().iter().filter(|n| !n.read).count();
        assert_eq!(center.unread_count(), expected);
        assert_eq!(center.unread_count(), 2);

        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
        assert!(center.remove("missing").is_none());
    }

    #[test]
    fn test_push_keeps_related_entity() {
        let mut center = NotificationCenter::new();
        let id = center
            .push(
                "Claim filed",
                "CLM-2026-0001 was submitted",
                NotificationKind::Success,
                Some(RelatedTo::new(EntityType::Claim, "claim-1")),
            )
            .id
            .clone();
        let n = center.get(&id).unwrap();
        assert!(!n.read);
        assert_eq!(n.related_to.as_ref().unwrap().target_path(), "/customer/claims/claim-1");
    }

    #[test]
    fn test_clear_resets_unread_count() {
        let mut center = center_with(3);
        let first = center.list()[0].id.clone();
        center.mark_read(&first);
        center.clear();
        assert!(center.list().is_empty());
        assert_eq!(center.unread_count(), 0);
        assert_eq!(badge_label(center.unread_count(), 9), None);
    }

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(0, 9), None);
        assert_eq!(badge_label(3, 9).as_deref(), Some("3"));
        assert_eq!(badge_label(9, 9).as_deref(), Some("9"));
        assert_eq!(badge_label(12, 9).as_deref(), Some("9+"));
    }
}
