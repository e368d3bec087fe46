//! Active-link bookkeeping for scroll-spy navigation.

/// Extracts the section identifier an in-page `href` points at.
///
/// `#about`, `#/about` and `/index.html#about` all target `about`.
/// A bare `#` or `#/`, or an href without a fragment, targets nothing.
pub fn target_identifier(href: &str) -> Option<&str> {
    let (_, fragment) = href.split_once('#')?;
    let identifier = fragment.strip_prefix('/').unwrap_or(fragment);
    if identifier.is_empty() {
        None
    } else {
        Some(identifier)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub target_identifier: Option<String>,
    pub is_active: bool,
}

impl NavLink {
    pub fn from_href(href: &str) -> Self {
        Self {
            target_identifier: target_identifier(href).map(str::to_string),
            is_active: false,
        }
    }

    pub fn targets(&self, identifier: &str) -> bool {
        self.target_identifier.as_deref() == Some(identifier)
    }
}

/// Marks the first link targeting `current` active and every other link inactive.
///
/// Returns the index of the active link.
pub fn synchronize(links: &mut [NavLink], current: Option<&str>) -> Option<usize> {
    let active = current.and_then(|id| links.iter().position(|link| link.targets(id)));
    for (index, link) in links.iter_mut().enumerate() {
        link.is_active = Some(index) == active;
    }
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(hrefs: &[&str]) -> Vec<NavLink> {
        hrefs.iter().map(|href| NavLink::from_href(href)).collect()
    }

    fn active(links: &[NavLink]) -> Vec<bool> {
        links.iter().map(|l| l.is_active).collect()
    }

    #[test]
    fn parses_fragment_forms() {
        assert_eq!(target_identifier("#about"), Some("about"));
        assert_eq!(target_identifier("#/about"), Some("about"));
        assert_eq!(target_identifier("/index.html#about"), Some("about"));
        assert_eq!(target_identifier("#"), None);
        assert_eq!(target_identifier("#/"), None);
        assert_eq!(target_identifier("/contact"), None);
    }

    #[test]
    fn activates_only_matching_link() {
        let mut nav = links(&["#home", "#about", "#/contact"]);
        assert_eq!(synchronize(&mut nav, Some("contact")), Some(2));
        assert_eq!(active(&nav), vec![false, false, true]);

        assert_eq!(synchronize(&mut nav, Some("home")), Some(0));
        assert_eq!(active(&nav), vec![true, false, false]);
    }

    #[test]
    fn substring_identifiers_do_not_match() {
        let mut nav = links(&["#team", "#teammates"]);
        synchronize(&mut nav, Some("team"));
        assert_eq!(active(&nav), vec![true, false]);

        synchronize(&mut nav, Some("mates"));
        assert_eq!(active(&nav), vec![false, false]);
    }

    #[test]
    fn no_current_section_clears_everything() {
        let mut nav = links(&["#home", "#about"]);
        synchronize(&mut nav, Some("about"));
        assert_eq!(synchronize(&mut nav, None), None);
        assert_eq!(active(&nav), vec![false, false]);
    }

    #[test]
    fn empty_identifier_matches_nothing() {
        let mut nav = links(&["#", "#about"]);
        assert_eq!(synchronize(&mut nav, Some("")), None);
        assert_eq!(active(&nav), vec![false, false]);
    }

    #[test]
    fn duplicate_targets_activate_first_only() {
        let mut nav = links(&["#pricing", "/#pricing"]);
        assert_eq!(synchronize(&mut nav, Some("pricing")), Some(0));
        assert_eq!(active(&nav), vec![true, false]);
    }
}
