//! Accessibility preference record.

use serde::{Deserialize, Serialize};

/// Accessibility preferences, stored as a singleton.
///
/// Orthogonal to promotions; both values are 0-100 slider positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub contrast: u8,
    pub font_size: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            contrast: 50,
            font_size: 50,
        }
    }
}
