//! Range checks applied to path parameters before any database call.

use std::ops::RangeInclusive;

use crate::error::ApiError;

/// Chapters 1 to 14 make up the main body of the constitution.
pub const CHAPTER_IDS: RangeInclusive<i32> = 1..=14;

/// Numbered sections of the main body.
pub const SECTION_IDS: RangeInclusive<i32> = 1..=243;

/// Section 230A is stored as `230` followed by the ASCII code of `A`.
pub const SECTION_230A_ID: i32 = 23065;

pub fn chapter_id(id: i32) -> Result<i32, ApiError> {
    if CHAPTER_IDS.contains(&id) {
        Ok(id)
    } else {
        Err(invalid("chapter", id))
    }
}

pub fn section_id(id: i32) -> Result<i32, ApiError> {
    if SECTION_IDS.contains(&id) || id == SECTION_230A_ID {
        Ok(id)
    } else {
        Err(invalid("section", id))
    }
}

/// Annexure IDs are single letters; lookups use the upper-case form.
pub fn annexure_id(raw: &str) -> Result<String, ApiError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => {
            Ok(letter.to_ascii_uppercase().to_string())
        }
        _ => Err(invalid("annexure", raw)),
    }
}

fn invalid(kind: &'static str, id: impl ToString) -> ApiError {
    ApiError::InvalidId {
        kind,
        id: id.to_string(),
    }
}
