use std::fmt;

/// Severity of a transient status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Error,
    Info,
}

impl StatusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Error => "error",
            StatusKind::Info => "info",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fire-and-forget channel for transient status messages. The core
/// never reads anything back from it.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn show(&self, kind: StatusKind, message: &str);
    fn dismiss(&self);
}

/// Routes status messages to the log when no UI is attached.
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn show(&self, kind: StatusKind, message: &str) {
        match kind {
            StatusKind::Error => log::error!("{}", message),
            StatusKind::Info => log::info!("{}", message),
        }
    }

    fn dismiss(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_kind_as_str() {
        assert_eq!(StatusKind::Error.as_str(), "error");
        assert_eq!(StatusKind::Info.to_string(), "info");
    }

    #[test]
    fn test_log_sink_accepts_both_kinds() {
        let sink = LogNotificationSink;
        sink.show(StatusKind::Error, "something failed");
        sink.show(StatusKind::Info, "all good");
        sink.dismiss();
    }
}
