//! Favorites: categories and tier grouping.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::CoreError;

/// What kind of thing a favorite is. Drives the response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteCategory {
    Film,
    Athlete,
}

pub const VALID_FAVORITE_CATEGORIES: &[&str] = &["film", "athlete"];

impl FavoriteCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FavoriteCategory::Film => "film",
            FavoriteCategory::Athlete => "athlete",
        }
    }

    /// Key of the group this category is listed under (`films` / `athletes`).
    pub fn group_key(self) -> &'static str {
        match self {
            FavoriteCategory::Film => "films",
            FavoriteCategory::Athlete => "athletes",
        }
    }
}

impl fmt::Display for FavoriteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "film" => Ok(FavoriteCategory::Film),
            "athlete" => Ok(FavoriteCategory::Athlete),
            other => Err(CoreError::Validation(format!(
                "Invalid category '{other}'. Must be one of: {}",
                VALID_FAVORITE_CATEGORIES.join(", ")
            ))),
        }
    }
}

/// Group `(tier, entry)` pairs by tier.
///
/// Tiers appear in first-seen order and entries keep their input order
/// within a tier, so callers sort before grouping.
pub fn group_by_tier<T>(entries: impl IntoIterator<Item = (String, T)>) -> IndexMap<String, Vec<T>> {
    let mut groups: IndexMap<String, Vec<T>> = IndexMap::new();
    for (tier, entry) in entries {
        groups.entry(tier).or_default().push(entry);
    }
    groups
}
