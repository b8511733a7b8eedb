//! Toast notifications shown over the top-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

/// What a view wants to tell the user. Becomes a [`Toast`] once queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Instant,
}

/// Bounded toast queue; the oldest toast is dropped first.
#[derive(Debug)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
    capacity: usize,
}

impl Notifications {
    pub fn new(capacity: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, notice: Notice, now: Instant) {
        tracing::debug!(kind = ?notice.kind, title = %notice.title, "toast shown");
        if self.toasts.len() == self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            kind: notice.kind,
            title: notice.title,
            description: notice.description,
            created_at: now,
        });
    }

    /// Drop toasts older than `ttl`. Returns whether anything was removed.
    pub fn expire(&mut self, now: Instant, ttl: Duration) -> bool {
        let before = self.toasts.len();
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.created_at) < ttl);
        self.toasts.len() != before
    }

    /// Newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_drops_oldest() {
        let now = Instant::now();
        let mut queue = Notifications::new(2);
        queue.push(Notice::info("one"), now);
        queue.push(Notice::info("two"), now);
        queue.push(Notice::success("three"), now);
        let titles: Vec<_> = queue.visible().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["three", "two"]);
    }

    #[test]
    fn test_expire_by_age() {
        let start = Instant::now();
        let mut queue = Notifications::new(3);
        queue.push(Notice::error("old"), start);
        queue.push(
            Notice::success("new").with_description("details"),
            start + Duration::from_secs(3),
        );
        assert!(queue.expire(start + Duration::from_secs(4), Duration::from_secs(4)));
        let remaining: Vec<_> = queue.visible().collect();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].description.as_deref(), Some("details"));
        assert!(!queue.expire(start + Duration::from_secs(5), Duration::from_secs(4)));
    }
}
