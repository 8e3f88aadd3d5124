//! Promotion display status and list filters.

use serde::{Deserialize, Serialize};

/// Display status of a promotion, derived from its trash flag and date range.
///
/// This status is never persisted: the stored record carries only `isActive`
/// plus the start/end dates, and the status is recomputed against a reference
/// date whenever a list view needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionStatus {
    /// Live today: not trashed, started, not yet ended.
    Active,
    /// Not trashed, but the start date is still in the future.
    Scheduled,
    /// Not trashed, but the end date has passed.
    Expired,
    /// Soft-deleted (`isActive == false`).
    Trash,
}

impl std::fmt::Display for PromotionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Scheduled => write!(f, "scheduled"),
            Self::Expired => write!(f, "expired"),
            Self::Trash => write!(f, "trash"),
        }
    }
}

/// List-page filter over derived promotion statuses.
///
/// `All` matches everything except the trash: trashed promotions only show
/// up in the dedicated trash view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PromotionFilter {
    #[default]
    All,
    Active,
    Scheduled,
    Expired,
    Trash,
}

impl PromotionFilter {
    /// Whether a promotion with the given derived status passes this filter.
    #[must_use]
    pub fn matches(self, status: PromotionStatus) -> bool {
        match self {
            Self::All => status != PromotionStatus::Trash,
            Self::Active => status == PromotionStatus::Active,
            Self::Scheduled => status == PromotionStatus::Scheduled,
            Self::Expired => status == PromotionStatus::Expired,
            Self::Trash => status == PromotionStatus::Trash,
        }
    }
}

impl std::fmt::Display for PromotionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Active => write!(f, "active"),
            Self::Scheduled => write!(f, "scheduled"),
            Self::Expired => write!(f, "expired"),
            Self::Trash => write!(f, "trash"),
        }
    }
}

impl std::str::FromStr for PromotionFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "scheduled" => Ok(Self::Scheduled),
            "expired" => Ok(Self::Expired),
            "trash" => Ok(Self::Trash),
            _ => Err(format!("invalid promotion filter: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_excludes_trash() {
        assert!(PromotionFilter::All.matches(PromotionStatus::Active));
        assert!(PromotionFilter::All.matches(PromotionStatus::Scheduled));
        assert!(PromotionFilter::All.matches(PromotionStatus::Expired));
        assert!(!PromotionFilter::All.matches(PromotionStatus::Trash));
    }

    #[test]
    fn test_trash_filter_only_matches_trash() {
        assert!(PromotionFilter::Trash.matches(PromotionStatus::Trash));
        assert!(!PromotionFilter::Trash.matches(PromotionStatus::Active));
    }

    #[test]
    fn test_status_filters_are_exact() {
        assert!(PromotionFilter::Scheduled.matches(PromotionStatus::Scheduled));
        assert!(!PromotionFilter::Scheduled.matches(PromotionStatus::Expired));
        assert!(PromotionFilter::Expired.matches(PromotionStatus::Expired));
        assert!(!PromotionFilter::Expired.matches(PromotionStatus::Active));
    }

    #[test]
    fn test_filter_from_str() {
        let filter: PromotionFilter = "trash".parse().unwrap();
        assert_eq!(filter, PromotionFilter::Trash);
        assert!("papelera".parse::<PromotionFilter>().is_err());
    }

    #[test]
    fn test_filter_display_roundtrip() {
        for filter in [
            PromotionFilter::All,
            PromotionFilter::Active,
            PromotionFilter::Scheduled,
            PromotionFilter::Expired,
            PromotionFilter::Trash,
        ] {
            let parsed: PromotionFilter = filter.to_string().parse().unwrap();
            assert_eq!(parsed, filter);
        }
    }
}
