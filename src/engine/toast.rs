use crate::config::NotificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("success") => ToastKind::Success,
            Some("error") => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    pub fn class_name(&self) -> String {
        format!("factory-notification factory-notification-{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStage {
    /// Appended, not yet showing.
    Entering,
    /// Carries the `show` class.
    Shown,
    /// `show` removed, waiting to be detached.
    Leaving,
}

impl ToastStage {
    /// Milliseconds spent in this stage before moving on.
    pub fn delay(&self, timings: &NotificationConfig) -> u32 {
        match self {
            ToastStage::Entering => timings.show_delay_ms,
            ToastStage::Shown => timings.display_ms.saturating_sub(timings.show_delay_ms),
            ToastStage::Leaving => timings.exit_ms,
        }
    }

    /// `None` means the element should be detached.
    pub fn next(&self) -> Option<ToastStage> {
        match self {
            ToastStage::Entering => Some(ToastStage::Shown),
            ToastStage::Shown => Some(ToastStage::Leaving),
            ToastStage::Leaving => None,
        }
    }

    pub fn shows(&self) -> bool {
        matches!(self, ToastStage::Shown)
    }
}
