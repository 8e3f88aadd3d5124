//! First-run seed data.
//!
//! Consumed by [`Store::initialize_defaults`](crate::store::Store::initialize_defaults):
//! one administrator credential and a small set of sample promotions so a
//! fresh install has something to show on the list page.

use chrono::NaiveDate;

use petstore_core::{Category, ProductId, PromotionId};

use crate::models::{Promotion, User};

/// Email of the seeded administrator.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@petstore.com";

/// Password of the seeded administrator.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// The administrator credential seeded when no users exist.
#[must_use]
pub fn default_admin() -> User {
    User::new(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
}

/// Sample promotions seeded when no promotions exist.
///
/// Illustrative data, not a contract: the only guarantees are that the set
/// is non-empty and every record is well-formed (valid category, discount in
/// range, non-empty product selection).
#[must_use]
pub fn sample_promotions() -> Vec<Promotion> {
    vec![
        Promotion {
            id: PromotionId::new("1"),
            name: "Descuento en Alimento Premium".to_owned(),
            description: "Rebaja en alimento premium para perros y gatos".to_owned(),
            category: Category::Alimento,
            discount: 20,
            start_date: date(2025, 1, 1),
            end_date: date(2025, 12, 31),
            image: "dog-products".to_owned(),
            is_active: true,
            selected_products: vec![ProductId::new("1"), ProductId::new("2")],
        },
        Promotion {
            id: PromotionId::new("2"),
            name: "Semana del Juguete".to_owned(),
            description: "Juguetes seleccionados con descuento por temporada".to_owned(),
            category: Category::Juguetes,
            discount: 15,
            start_date: date(2025, 6, 1),
            end_date: date(2025, 6, 30),
            image: "cat-products".to_owned(),
            is_active: true,
            selected_products: vec![ProductId::new("5"), ProductId::new("6")],
        },
        Promotion {
            id: PromotionId::new("3"),
            name: "Cuidado e Higiene".to_owned(),
            description: "Productos de cuidado con precio rebajado".to_owned(),
            category: Category::Cuidado,
            discount: 10,
            start_date: date(2025, 3, 1),
            end_date: date(2025, 9, 30),
            image: "dog-products".to_owned(),
            is_active: true,
            selected_products: vec![ProductId::new("9")],
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_sample_promotions_are_well_formed() {
        let samples = sample_promotions();
        assert!(!samples.is_empty());

        for promotion in &samples {
            assert!((1..=100).contains(&promotion.discount));
            assert!(promotion.start_date <= promotion.end_date);
            assert!(promotion.is_active);
            assert!(!promotion.selected_products.is_empty());
        }
    }

    #[test]
    fn test_sample_promotion_ids_are_unique() {
        let samples = sample_promotions();
        let mut ids: Vec<_> = samples.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), samples.len());
    }

    #[test]
    fn test_sample_products_belong_to_the_promotion_category() {
        for promotion in sample_promotions() {
            for product_id in &promotion.selected_products {
                let product = catalog::product_by_id(product_id).unwrap();
                assert_eq!(product.category, promotion.category);
            }
        }
    }
}
