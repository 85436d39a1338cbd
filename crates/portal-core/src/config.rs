//! Portal Configuration
//!
//! Settings injected into the frontend through context. Every field has a
//! default so a page without an inline config block still works.

use std::time::Duration;

use serde::Deserialize;

use crate::catalog::{default_catalog, Course};
use crate::error::{PortalError, PortalResult};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Seconds between countdown refreshes
    pub refresh_interval_secs: u64,
    /// Remaining days below this count are rendered as urgent
    pub urgent_threshold_days: i64,
    /// Local storage key holding the sidebar preference
    pub sidebar_storage_key: String,
    /// Section shown before any navigation click
    pub initial_section: String,
    /// Catalog override; `None` keeps the built-in courses
    pub courses: Option<Vec<Course>>,
    /// Assignments listed on the teacher portal
    pub assignments: Vec<Assignment>,
}

/// Assignment row supplied by the surrounding page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Assignment {
    pub title: String,
    pub course_code: String,
    /// Raw due-date string, rendered as a countdown
    pub due_date: String,
    #[serde(default = "default_total_points")]
    pub total_points: u32,
}

fn default_total_points() -> u32 {
    100
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 60,
            urgent_threshold_days: 3,
            sidebar_storage_key: "sidebarState".to_string(),
            initial_section: "Home".to_string(),
            courses: None,
            assignments: Vec::new(),
        }
    }
}

impl PortalConfig {
    /// Parse and validate a JSON config block
    pub fn from_json(raw: &str) -> PortalResult<Self> {
        let config: PortalConfig =
            serde_json::from_str(raw).map_err(|e| PortalError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PortalResult<()> {
        if self.refresh_interval_secs == 0 {
            return Err(PortalError::InvalidConfig(
                "refresh_interval_secs must be positive".to_string(),
            ));
        }
        if self.sidebar_storage_key.trim().is_empty() {
            return Err(PortalError::InvalidConfig(
                "sidebar_storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Courses shown in the catalog
    pub fn catalog(&self) -> Vec<Course> {
        self.courses.clone().unwrap_or_else(default_catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.refresh_interval(), Duration::from_secs(60));
        assert_eq!(config.urgent_threshold_days, 3);
        assert_eq!(config.sidebar_storage_key, "sidebarState");
        assert_eq!(config.initial_section, "Home");
        assert_eq!(config.catalog().len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PortalConfig::from_json(r#"{"refresh_interval_secs": 30}"#).unwrap();
        assert_eq!(config.refresh_interval_secs, 30);
        assert_eq!(config.sidebar_storage_key, "sidebarState");
    }

    #[test]
    fn test_course_override() {
        let raw = r#"{"courses": [{"title": "Rust", "description": "Ownership", "image": "rust.png", "levels": ["advanced"], "rating": 4.5}]}"#;
        let config = PortalConfig::from_json(raw).unwrap();
        let courses = config.catalog();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].title, "Rust");
    }

    #[test]
    fn test_assignments_from_json() {
        let raw = r#"{"assignments": [{"title": "Essay", "course_code": "ENG101", "due_date": "2024-06-01"}]}"#;
        let config = PortalConfig::from_json(raw).unwrap();
        assert_eq!(config.assignments.len(), 1);
        assert_eq!(config.assignments[0].total_points, 100);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let err = PortalConfig::from_json(r#"{"refresh_interval_secs": 0}"#).unwrap_err();
        assert!(matches!(err, PortalError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(PortalConfig::from_json("{not json").is_err());
    }

    #[test]
    fn test_rejects_blank_storage_key() {
        let err = PortalConfig::from_json(r#"{"sidebar_storage_key": "  "}"#).unwrap_err();
        assert!(matches!(err, PortalError::InvalidConfig(_)));
    }
}
