#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// A message for the user that has not been queued yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub notice: Notice,
}

/// Queue of the notifications that are currently displayed.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    next_id: u64,
    items: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, notice: Notice) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.items.push(Notification { id, notice });
        id
    }

    /// Returns `false` if the notification has already been dismissed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let len = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() < len
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let mut queue = Notifications::default();
        let first = queue.push(Notice::success("Saved"));
        let second = queue.push(Notice::error("Failed"));
        assert_ne!(first, second);
        assert_eq!(queue.iter().count(), 2);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        let remaining = queue.iter().collect::<Vec<_>>();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
        assert_eq!(remaining[0].notice.level, Level::Error);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut queue = Notifications::default();
        let first = queue.push(Notice::success("a"));
        queue.dismiss(first);
        assert!(queue.is_empty());
        let second = queue.push(Notice::success("b"));
        assert!(second > first);
        assert!(!queue.is_empty());
    }
}
