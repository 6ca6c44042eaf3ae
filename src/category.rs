//! Annotation category codes
//!
//! A code string lists one `top,second,frequency` triple per line, e.g.
//! `"1,1,2\n3,7,2\n4,1,2"`: top-level group, second-level category, and how
//! many annotators assigned it.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

static CODE_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*(?:,\s*(\d+)\s*)?(?:,\s*(\d+)\s*)?$").unwrap()
});

/// Top-level category groups used by the annotation scheme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CategoryGroup {
    CoarseGenre,
    /// Included or forwarded information
    Included,
    /// Only assigned when the coarse genre is 1.1
    PrimaryTopic,
    /// Absent when the tone is neutral
    EmotionalTone,
}

impl CategoryGroup {
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::CoarseGenre),
            2 => Some(Self::Included),
            3 => Some(Self::PrimaryTopic),
            4 => Some(Self::EmotionalTone),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::CoarseGenre => 1,
            Self::Included => 2,
            Self::PrimaryTopic => 3,
            Self::EmotionalTone => 4,
        }
    }
}

/// One line of a code string
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCode {
    pub top: u32,
    pub second: Option<u32>,
    pub frequency: Option<u32>,
}

impl CategoryCode {
    /// Parse a single `top,second,frequency` line
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let caps = CODE_REGEX.captures(line)?;
        let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse().ok());

        Some(Self {
            top: number(1)?,
            second: number(2),
            frequency: number(3),
        })
    }

    #[must_use]
    pub const fn group(&self) -> Option<CategoryGroup> {
        CategoryGroup::from_code(self.top)
    }
}

/// Parse every well-formed line of a code string
#[must_use]
pub fn parse_category_codes(text: &str) -> Vec<CategoryCode> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let code = CategoryCode::parse_line(line);
            if code.is_none() {
                trace!(line, "Skipping malformed category code");
            }
            code
        })
        .collect()
}

/// Second-level category of the first line in group `top`.
///
/// `None` when no line belongs to the group or the first matching line has no
/// second component.
#[must_use]
pub fn second_level_category(text: &str, top: u32) -> Option<u32> {
    parse_category_codes(text)
        .into_iter()
        .find(|code| code.top == top)
        .and_then(|code| code.second)
}
