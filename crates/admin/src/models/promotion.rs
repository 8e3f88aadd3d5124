//! Promotion record, creation draft, and partial update.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use petstore_core::{Category, ProductId, PromotionId, PromotionStatus};

/// A promotional campaign over a set of catalog products.
///
/// `is_active == false` means "in the trash": the record stays in the
/// collection at its position until it is permanently deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    /// Opaque unique identifier, generated at creation.
    pub id: PromotionId,
    pub name: String,
    pub description: String,
    /// Category the promoted products belong to.
    pub category: Category,
    /// Integer discount percentage. The wizard keeps this in `1..=100`;
    /// the storage layer does not re-check it.
    pub discount: u8,
    /// First day the promotion applies (ISO calendar date on disk).
    pub start_date: NaiveDate,
    /// Last day the promotion applies.
    pub end_date: NaiveDate,
    /// Symbolic image reference (e.g. `dog-products`), not a URL.
    pub image: String,
    /// `false` = in trash.
    pub is_active: bool,
    /// Products the promotion covers, scoped to `category`. The wizard
    /// guarantees this is non-empty at save time; the storage layer accepts
    /// whatever it is handed.
    pub selected_products: Vec<ProductId>,
}

impl Promotion {
    /// Derived display status against a reference date.
    ///
    /// The trash flag wins over the date range: a trashed promotion is
    /// `Trash` no matter its dates.
    #[must_use]
    pub fn status_on(&self, today: NaiveDate) -> PromotionStatus {
        if !self.is_active {
            PromotionStatus::Trash
        } else if self.start_date > today {
            PromotionStatus::Scheduled
        } else if self.end_date < today {
            PromotionStatus::Expired
        } else {
            PromotionStatus::Active
        }
    }

    /// Merge a partial update onto this record, leaving `None` fields
    /// untouched.
    pub fn apply(&mut self, update: PromotionUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(discount) = update.discount {
            self.discount = discount;
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(selected_products) = update.selected_products {
            self.selected_products = selected_products;
        }
    }
}

/// A promotion payload lacking store-assigned fields (`id`, `is_active`)
/// prior to creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionDraft {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub discount: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub image: String,
    /// Absent selection normalizes to an empty list at creation.
    #[serde(default)]
    pub selected_products: Option<Vec<ProductId>>,
}

/// Partial field replacement for [`Promotion::apply`]. Every field is
/// optional; `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub discount: Option<u8>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub image: Option<String>,
    pub is_active: Option<bool>,
    pub selected_products: Option<Vec<ProductId>>,
}
