//! Property tests for the scroll-driven state logic.
//!
//! Run with: cargo test --test properties

#![cfg(not(target_arch = "wasm32"))]

use factory_theme::config::HeaderConfig;
use factory_theme::engine::header::HeaderTracker;
use factory_theme::engine::nav::{self, NavLink};
use factory_theme::engine::reveal::VisibilityLatch;
use factory_theme::engine::sections::{self, Section};
use proptest::prelude::*;

const LOOKAHEAD: f64 = 100.0;

/// Sections with strictly increasing tops, as laid out on a page.
fn page_sections() -> impl Strategy<Value = Vec<Section>> {
    prop::collection::vec(1u32..2_000, 0..12).prop_map(|heights| {
        let mut top = 0.0;
        heights
            .into_iter()
            .enumerate()
            .map(|(i, height)| {
                let section = Section::new(format!("section-{i}"), top, height as f64);
                top += height as f64;
                section
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn locator_picks_greatest_top_within_lookahead(
        sections in page_sections(),
        offset in 0.0f64..30_000.0,
    ) {
        let expected = sections
            .iter()
            .filter(|s| s.top_offset - LOOKAHEAD <= offset)
            .max_by(|a, b| a.top_offset.total_cmp(&b.top_offset));
        prop_assert_eq!(sections::locate_current(&sections, offset, LOOKAHEAD), expected);
    }

    #[test]
    fn single_section_activates_within_lookahead(
        first_top in 200.0f64..5_000.0,
        offset in 0.0f64..5_000.0,
    ) {
        let sections = vec![Section::new("only", first_top, 300.0)];
        let within = first_top - LOOKAHEAD <= offset;
        prop_assert_eq!(sections::locate_current(&sections, offset, LOOKAHEAD).is_some(), within);
    }

    #[test]
    fn at_most_one_link_is_active(
        targets in prop::collection::vec("[a-c]{1,3}", 0..8),
        current in prop::option::of("[a-c]{0,3}"),
    ) {
        let mut links: Vec<NavLink> = targets.iter().map(|t| NavLink::from_href(&format!("#{t}"))).collect();
        nav::synchronize(&mut links, current.as_deref());

        let active = links.iter().filter(|l| l.is_active).count();
        let any_match = current
            .as_deref()
            .map(|c| targets.iter().any(|t| t == c))
            .unwrap_or(false);
        prop_assert_eq!(active, usize::from(any_match));
        for link in links.iter().filter(|l| l.is_active) {
            prop_assert_eq!(link.target_identifier.as_deref(), current.as_deref());
        }
    }

    #[test]
    fn visibility_never_reverts(notifications in prop::collection::vec(any::<bool>(), 0..32)) {
        let mut latch = VisibilityLatch::new();
        let mut transitions = 0;
        let mut was_visible = false;
        for intersecting in notifications {
            if latch.record(intersecting) {
                transitions += 1;
            }
            prop_assert!(!was_visible || latch.is_visible());
            was_visible = latch.is_visible();
        }
        prop_assert!(transitions <= 1);
    }

    #[test]
    fn header_hides_only_when_scrolling_down_past_threshold(
        offsets in prop::collection::vec(0.0f64..3_000.0, 1..40),
    ) {
        let config = HeaderConfig::default();
        let mut tracker = HeaderTracker::new(config);
        let mut previous = 0.0;
        for offset in offsets {
            let flags = tracker.advance(offset);
            prop_assert_eq!(flags.hidden, offset > previous && offset > config.hide_after);
            prop_assert_eq!(flags.scrolled, offset > config.scrolled_after);
            previous = offset;
        }
    }
}
