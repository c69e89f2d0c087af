use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A transient snackbar-style notice for the renderer.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Queues notices until the renderer drains them. Every notice is also
/// traced so failures show up in logs even without a UI attached.
#[derive(Debug, Default)]
pub struct Notifier {
    pending: Vec<Notice>,
}

impl Notifier {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Severity::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Severity::Info, message.into());
    }

    /// Take all pending notices, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[Notice] {
        &self.pending
    }

    fn push(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Error => tracing::warn!(%message, "notice"),
            _ => tracing::debug!(%message, "notice"),
        }
        self.pending.push(Notice {
            severity,
            message,
            at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue_in_order() {
        let mut notifier = Notifier::default();
        notifier.success("saved");
        notifier.error("failed");

        let notices = notifier.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].severity, Severity::Success);
        assert_eq!(notices[1].severity, Severity::Error);
        assert!(notifier.pending().is_empty());
    }
}
