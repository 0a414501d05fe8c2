//! Project field rules: defaults, list ordering, and set normalization.

use std::collections::HashSet;

use crate::error::CoreError;

/// Status given to projects created without one.
pub const DEFAULT_PROJECT_STATUS: &str = "completed";

/// Maximum title length (matches the `projects.title` column).
pub const MAX_TITLE_LEN: usize = 200;

/// Ordering for the public project list (`?sort_by=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectSort {
    /// Display order, then insertion order.
    #[default]
    Order,
    /// Newest first.
    Date,
    /// Most viewed first.
    Views,
}

impl ProjectSort {
    /// Parse a `sort_by` value. Unknown or absent values use the default.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("date") => ProjectSort::Date,
            Some("views") => ProjectSort::Views,
            _ => ProjectSort::Order,
        }
    }

    /// SQL `ORDER BY` clause for this sort.
    pub fn order_by(self) -> &'static str {
        match self {
            ProjectSort::Order => "sort_order ASC, id ASC",
            ProjectSort::Date => "created_at DESC, id DESC",
            ProjectSort::Views => "views DESC, id ASC",
        }
    }
}

/// A title must be present, non-blank, and fit the column.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("title is required".into()));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Treat a list of labels as a set: trim, drop blanks and duplicates, keep
/// first-seen order.
pub fn normalize_labels(labels: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && seen.insert(l.clone()))
        .collect()
}
