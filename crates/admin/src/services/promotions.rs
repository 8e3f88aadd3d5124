//! Promotion collection manager.
//!
//! Every mutation computes the new full collection from the in-memory copy,
//! replaces it, and persists the whole collection back through the store:
//! there is no per-record write, so each operation is linear in collection
//! size regardless of how many records changed.
//!
//! Lifecycle operations on unknown ids are silent no-ops by contract; the
//! persist still runs, and callers must not assume a changed-row count.

use chrono::NaiveDate;

use petstore_core::{PromotionFilter, PromotionId};

use crate::models::{Promotion, PromotionDraft, PromotionUpdate};
use crate::store::{Store, StoreError};

/// Promotion collection state over the local store.
pub struct PromotionManager<'a> {
    store: &'a Store,
    promotions: Vec<Promotion>,
    is_loading: bool,
}

impl<'a> PromotionManager<'a> {
    /// Create an uninitialized manager. `is_loading` stays `true` and the
    /// collection is empty until [`initialize`](Self::initialize) runs.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self {
            store,
            promotions: Vec::new(),
            is_loading: true,
        }
    }

    /// Bootstrap defaults, load the full collection, and clear the loading
    /// flag.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read or seeded.
    pub fn initialize(&mut self) -> Result<(), StoreError> {
        self.store.initialize_defaults()?;
        self.promotions = self.store.promotions()?;
        self.is_loading = false;
        Ok(())
    }

    /// The current in-memory collection, in storage order.
    #[must_use]
    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    /// Whether [`initialize`](Self::initialize) has not completed yet.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Promotions whose derived status on `today` passes `filter`.
    #[must_use]
    pub fn filtered(&self, filter: PromotionFilter, today: NaiveDate) -> Vec<&Promotion> {
        self.promotions
            .iter()
            .filter(|p| filter.matches(p.status_on(today)))
            .collect()
    }

    /// Create a promotion from a draft and append it to the collection.
    ///
    /// Assigns a fresh unique id, forces `is_active = true`, and normalizes
    /// an absent product selection to an empty list. Returns the generated
    /// id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be persisted.
    pub fn add_promotion(&mut self, draft: PromotionDraft) -> Result<PromotionId, StoreError> {
        let promotion = Promotion {
            id: PromotionId::generate(),
            name: draft.name,
            description: draft.description,
            category: draft.category,
            discount: draft.discount,
            start_date: draft.start_date,
            end_date: draft.end_date,
            image: draft.image,
            is_active: true,
            selected_products: draft.selected_products.unwrap_or_default(),
        };
        let id = promotion.id.clone();

        self.promotions.push(promotion);
        self.persist()?;
        tracing::info!(promotion_id = %id, "Promotion created");
        Ok(id)
    }

    /// Merge a partial update onto the promotion matching `id`.
    ///
    /// Unknown ids are silently absorbed; the collection is persisted either
    /// way.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be persisted.
    pub fn update_promotion(
        &mut self,
        id: &PromotionId,
        update: PromotionUpdate,
    ) -> Result<(), StoreError> {
        if let Some(promotion) = self.promotions.iter_mut().find(|p| &p.id == id) {
            promotion.apply(update);
            tracing::info!(promotion_id = %id, "Promotion updated");
        }
        self.persist()
    }

    /// Move the promotion matching `id` to the trash (soft delete).
    ///
    /// The record keeps its position in the collection. Unknown ids are
    /// silently absorbed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be persisted.
    pub fn delete_promotion(&mut self, id: &PromotionId) -> Result<(), StoreError> {
        if let Some(promotion) = self.promotions.iter_mut().find(|p| &p.id == id) {
            promotion.is_active = false;
            tracing::info!(promotion_id = %id, "Promotion moved to trash");
        }
        self.persist()
    }

    /// Restore the promotion matching `id` from the trash.
    ///
    /// Unknown ids are silently absorbed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be persisted.
    pub fn restore_promotion(&mut self, id: &PromotionId) -> Result<(), StoreError> {
        if let Some(promotion) = self.promotions.iter_mut().find(|p| &p.id == id) {
            promotion.is_active = true;
            tracing::info!(promotion_id = %id, "Promotion restored");
        }
        self.persist()
    }

    /// Remove the promotion matching `id` from the collection entirely.
    ///
    /// Unknown ids are silently absorbed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the collection cannot be persisted.
    pub fn permanently_delete_promotion(&mut self, id: &PromotionId) -> Result<(), StoreError> {
        let before = self.promotions.len();
        self.promotions.retain(|p| &p.id != id);
        if self.promotions.len() < before {
            tracing::info!(promotion_id = %id, "Promotion permanently deleted");
        }
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save_promotions(&self.promotions)
    }
}
