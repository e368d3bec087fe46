#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub identifier: String,
    pub top_offset: f64,
    pub height: f64,
}

impl Section {
    pub fn new(identifier: impl Into<String>, top_offset: f64, height: f64) -> Self {
        Self {
            identifier: identifier.into(),
            top_offset,
            height,
        }
    }
}

/// Picks the last section, in document order, whose top minus `lookahead` is at or above `offset`.
pub fn locate_current(sections: &[Section], offset: f64, lookahead: f64) -> Option<&Section> {
    sections
        .iter()
        .rev()
        .find(|section| section.top_offset - lookahead <= offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<Section> {
        vec![
            Section::new("hero", 0.0, 600.0),
            Section::new("about", 600.0, 800.0),
            Section::new("services", 1400.0, 900.0),
            Section::new("contact", 2300.0, 500.0),
        ]
    }

    fn current(offset: f64) -> Option<String> {
        locate_current(&page(), offset, 100.0).map(|s| s.identifier.clone())
    }

    #[test]
    fn top_of_page_is_first_section() {
        assert_eq!(current(0.0).as_deref(), Some("hero"));
    }

    #[test]
    fn section_activates_within_lookahead() {
        assert_eq!(current(499.0).as_deref(), Some("hero"));
        assert_eq!(current(500.0).as_deref(), Some("about"));
        assert_eq!(current(1299.5).as_deref(), Some("about"));
        assert_eq!(current(1300.0).as_deref(), Some("services"));
    }

    #[test]
    fn past_last_section_stays_on_last() {
        assert_eq!(current(10_000.0).as_deref(), Some("contact"));
    }

    #[test]
    fn nothing_before_first_section() {
        let sections = vec![Section::new("intro", 400.0, 300.0)];
        assert!(locate_current(&sections, 299.0, 100.0).is_none());
        assert!(locate_current(&sections, 300.0, 100.0).is_some());
    }

    #[test]
    fn empty_page_has_no_section() {
        assert!(locate_current(&[], 250.0, 100.0).is_none());
    }
}
