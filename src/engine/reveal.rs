/// Visibility flag that latches on the first intersection and never reverts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    visible: bool,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection notification. Returns `true` only on the transition to visible.
    pub fn record(&mut self, is_intersecting: bool) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        self.visible = true;
        true
    }

    /// Used when intersection observation is unavailable.
    pub fn force(&mut self) -> bool {
        self.record(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_on_first_intersection() {
        let mut latch = VisibilityLatch::new();
        assert!(!latch.record(false));
        assert!(!latch.is_visible());
        assert!(latch.record(true));
        assert!(latch.is_visible());
    }

    #[test]
    fn later_notifications_are_no_ops() {
        let mut latch = VisibilityLatch::new();
        latch.record(true);
        assert!(!latch.record(false));
        assert!(!latch.record(true));
        assert!(latch.is_visible());
    }

    #[test]
    fn force_behaves_like_intersection() {
        let mut latch = VisibilityLatch::new();
        assert!(latch.force());
        assert!(!latch.force());
    }
}
