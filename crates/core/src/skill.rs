//! Skill defaults and proficiency bounds.

use crate::error::CoreError;

pub const DEFAULT_SKILL_CATEGORY: &str = "Other";

pub const DEFAULT_PROFICIENCY: i32 = 50;

pub const MIN_PROFICIENCY: i32 = 0;

pub const MAX_PROFICIENCY: i32 = 100;

/// Proficiency is a percentage-style scale.
pub fn validate_proficiency(value: i32) -> Result<(), CoreError> {
    if (MIN_PROFICIENCY..=MAX_PROFICIENCY).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "proficiency must be between {MIN_PROFICIENCY} and {MAX_PROFICIENCY}, got {value}"
        )))
    }
}
