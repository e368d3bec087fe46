use crate::config::HeaderConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Default,
    Scrolled,
    Hidden,
}

/// The two independent header flags recomputed on every scroll sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderFlags {
    /// Cosmetic `scrolled` class.
    pub scrolled: bool,
    /// Header translated out of view.
    pub hidden: bool,
}

impl HeaderFlags {
    pub fn state(&self) -> HeaderState {
        if self.hidden {
            HeaderState::Hidden
        } else if self.scrolled {
            HeaderState::Scrolled
        } else {
            HeaderState::Default
        }
    }

    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Remembers exactly one prior offset.
#[derive(Debug, Clone)]
pub struct HeaderTracker {
    config: HeaderConfig,
    previous: f64,
}

impl HeaderTracker {
    pub fn new(config: HeaderConfig) -> Self {
        Self {
            config,
            previous: 0.0,
        }
    }

    /// Seeds the prior offset, so a restored scroll position never reads as scrolling down.
    pub fn starting_at(config: HeaderConfig, offset: f64) -> Self {
        Self {
            config,
            previous: offset,
        }
    }

    pub fn advance(&mut self, offset: f64) -> HeaderFlags {
        let flags = HeaderFlags {
            scrolled: offset > self.config.scrolled_after,
            hidden: offset > self.previous && offset > self.config.hide_after,
        };
        self.previous = offset;
        flags
    }

    pub fn previous(&self) -> f64 {
        self.previous
    }
}
