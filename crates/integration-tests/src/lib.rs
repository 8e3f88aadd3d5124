//! Integration tests for the pet store admin.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p petstore-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Registration, login, logout scenarios
//! - `promotion_lifecycle` - Create/update/trash/restore/permanent-delete
//! - `promotion_wizard` - Wizard step gating and validation messages
//! - `store_defaults` - Bootstrap, defaults, and corruption behavior
//!
//! Scenarios run over an in-memory store so tests are hermetic; the file
//! backend's persistence has its own coverage in `petstore-admin`.

use chrono::NaiveDate;

use petstore_admin::models::PromotionDraft;
use petstore_admin::store::Store;
use petstore_core::{Category, ProductId};

/// Shared scenario context: a fresh in-memory store.
pub struct TestContext {
    pub store: Store,
}

impl TestContext {
    /// A context over empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Store::in_memory(),
        }
    }

    /// A context with defaults already seeded.
    ///
    /// # Panics
    ///
    /// Panics if seeding fails (in-memory backends cannot fail).
    #[must_use]
    pub fn seeded() -> Self {
        let ctx = Self::new();
        ctx.store
            .initialize_defaults()
            .expect("in-memory seed cannot fail");
        ctx
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A well-formed draft for lifecycle tests.
///
/// # Panics
///
/// Panics if the literal dates are invalid.
#[must_use]
pub fn sample_draft() -> PromotionDraft {
    PromotionDraft {
        name: "Promoción de Prueba".to_owned(),
        description: "Descripción de prueba".to_owned(),
        category: Category::Alimento,
        discount: 20,
        start_date: date(2025, 1, 1),
        end_date: date(2025, 12, 31),
        image: "dog-products".to_owned(),
        selected_products: Some(vec![ProductId::new("1"), ProductId::new("2")]),
    }
}

/// Build a calendar date from literals.
///
/// # Panics
///
/// Panics if the literals are not a valid calendar date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
