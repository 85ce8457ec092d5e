//! User-visible notices ("toasts").

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    /// CSS modifier used by the toast template.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
        }
    }
}

/// A single notice shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Fire-and-forget notice sink.
pub trait Notifier {
    fn notify_success(&mut self, message: &str);
    fn notify_error(&mut self, message: &str);
}

/// Notices collected during one request, rendered as an out-of-band
/// fragment alongside the response.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    toasts: Vec<Toast>,
}

impl Toasts {
    /// Collected notices in the order they were raised.
    #[must_use]
    pub fn as_slice(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Toast> {
        self.toasts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for Toasts {
    fn notify_success(&mut self, message: &str) {
        tracing::debug!(message, "success notice");
        self.toasts.push(Toast {
            level: ToastLevel::Success,
            message: message.to_string(),
        });
    }

    fn notify_error(&mut self, message: &str) {
        tracing::debug!(message, "error notice");
        self.toasts.push(Toast {
            level: ToastLevel::Error,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_keep_order_and_level() {
        let mut toasts = Toasts::default();
        assert!(toasts.is_empty());

        toasts.notify_error("first");
        toasts.notify_success("second");

        let collected = toasts.into_vec();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].level, ToastLevel::Error);
        assert_eq!(collected[0].message, "first");
        assert_eq!(collected[1].level.css_class(), "toast-success");
    }
}
