//! Course Catalog
//!
//! Built-in course list and level filtering for the student dashboard.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shown when a level matches no course
pub const EMPTY_CATALOG_MESSAGE: &str = "No courses found for this level.";

/// Difficulty level a course applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL.into_iter().find(|level| level.as_str() == s).ok_or(())
    }
}

/// A course card entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub description: String,
    /// Image path relative to the static asset root
    pub image: String,
    pub levels: Vec<Level>,
    /// 0.0 ..= 5.0
    pub rating: f32,
}

impl Course {
    fn new(title: &str, description: &str, image: &str, levels: &[Level], rating: f32) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            levels: levels.to_vec(),
            rating,
        }
    }

    pub fn has_level(&self, level: &str) -> bool {
        self.levels.iter().any(|l| l.as_str() == level)
    }
}

pub fn default_catalog() -> Vec<Course> {
    use Level::*;
    vec![
        Course::new("Intro to HTML", "Learn the basics of HTML to build web pages.", "HTML.jpg", &[Beginner], 4.0),
        Course::new("CSS Essentials", "Master styling and responsive design.", "Css.jpg", &[Beginner, Intermediate], 4.0),
        Course::new("JavaScript Basics", "Make your websites interactive.", "Java.jpg", &[Beginner, Intermediate], 4.0),
        Course::new("Python Basic", "Build your foundation in Python.", "Python.jpg", &[Beginner], 4.0),
        Course::new("Advanced JavaScript", "Deep dive into JS frameworks.", "Java.jpg", &[Intermediate, Advanced], 5.0),
    ]
}

/// What the catalog panel shows for a selected level
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    Cards(Vec<Course>),
    Empty,
}

impl CatalogView {
    pub fn len(&self) -> usize {
        match self {
            CatalogView::Cards(courses) => courses.len(),
            CatalogView::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CatalogView::Empty)
    }
}

/// Courses whose level set contains `level`, in catalog order.
/// Unknown level strings simply match nothing.
pub fn filter_by_level(courses: &[Course], level: &str) -> CatalogView {
    let matches: Vec<Course> = courses.iter().filter(|c| c.has_level(level)).cloned().collect();
    if matches.is_empty() {
        CatalogView::Empty
    } else {
        CatalogView::Cards(matches)
    }
}

/// Acknowledgment shown when a course's Start button is pressed
pub fn start_course_message(name: &str) -> String {
    format!("Now starting: {}", name)
}
