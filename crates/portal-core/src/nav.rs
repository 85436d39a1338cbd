//! Navigation / tab switching.
//!
//! Exactly one section is visible and exactly one nav item is active.
//! Nav items and sections share identifiers.

use crate::error::{PortalError, PortalResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    sections: Vec<String>,
    active: String,
}

impl NavState {
    /// Start with `initial` visible; it must be one of `sections`
    pub fn new<I, S>(sections: I, initial: &str) -> PortalResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        if !sections.iter().any(|s| s == initial) {
            return Err(PortalError::UnknownSection(initial.to_string()));
        }
        Ok(Self { sections, active: initial.to_string() })
    }

    /// Like `new`, but falls back to the first section when `preferred`
    /// is not among them. With no sections at all, `preferred` becomes the
    /// only one.
    pub fn starting_at<I, S>(sections: I, preferred: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        let active = if sections.iter().any(|s| s == preferred) {
            preferred.to_string()
        } else if let Some(first) = sections.first() {
            log::debug!("Section {} not on this page, starting at {}", preferred, first);
            first.clone()
        } else {
            sections.push(preferred.to_string());
            preferred.to_string()
        };
        Self { sections, active }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_visible(&self, section: &str) -> bool {
        self.active == section
    }

    /// Switch to `section`. Unknown targets leave the state unchanged.
    pub fn select(&mut self, section: &str) -> PortalResult<()> {
        if !self.sections.iter().any(|s| s == section) {
            return Err(PortalError::UnknownSection(section.to_string()));
        }
        self.active = section.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> NavState {
        NavState::new(["Home", "Courses", "Profile"], "Home").unwrap()
    }

    #[test]
    fn test_initial_section() {
        let nav = nav();
        assert_eq!(nav.active(), "Home");
        assert_eq!(nav.sections().iter().filter(|s| nav.is_visible(s)).count(), 1);
    }

    #[test]
    fn test_select_switches_exactly_one() {
        let mut nav = nav();
        nav.select("Courses").unwrap();
        assert!(nav.is_visible("Courses"));
        assert!(!nav.is_visible("Home"));
        assert_eq!(nav.sections().iter().filter(|s| nav.is_visible(s)).count(), 1);
    }

    #[test]
    fn test_unknown_section_keeps_state() {
        let mut nav = nav();
        nav.select("Profile").unwrap();
        let err = nav.select("Settings").unwrap_err();
        assert_eq!(err, PortalError::UnknownSection("Settings".to_string()));
        assert_eq!(nav.active(), "Profile");
    }

    #[test]
    fn test_starting_at_falls_back_to_first() {
        let nav = NavState::starting_at(["Dashboard", "Assignments"], "Home");
        assert_eq!(nav.active(), "Dashboard");
        let nav = NavState::starting_at(["Dashboard", "Assignments"], "Assignments");
        assert_eq!(nav.active(), "Assignments");
        let nav = NavState::starting_at(Vec::<String>::new(), "Home");
        assert_eq!(nav.sections(), ["Home".to_string()]);
    }

    #[test]
    fn test_initial_must_exist() {
        assert!(NavState::new(["Home"], "Courses").is_err());
    }
}
