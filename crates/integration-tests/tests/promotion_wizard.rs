//! Integration tests for the two-step promotion wizard against the
//! promotion manager.

use petstore_admin::forms::{FormField, PromotionWizard, WizardStep, promotion::messages};
use petstore_admin::services::PromotionManager;
use petstore_core::{Category, ProductId};

use petstore_integration_tests::TestContext;

fn filled_wizard() -> PromotionWizard {
    let mut wizard = PromotionWizard::new();
    wizard.form.name = "Semana del Gato".to_owned();
    wizard.form.description = "Todo para gatos con descuento".to_owned();
    wizard.form.set_category(Category::Alimento);
    wizard.form.discount = 30;
    wizard.form.start_date = "2025-09-01".to_owned();
    wizard.form.end_date = "2025-09-07".to_owned();
    wizard.form.image = "cat-products".to_owned();
    wizard
}

// =============================================================================
// Step gating
// =============================================================================

#[test]
fn test_empty_wizard_reports_all_step1_messages_and_stays_on_step1() {
    let mut wizard = PromotionWizard::new();

    let errors = wizard.advance().expect_err("validation should fail");
    assert_eq!(wizard.step(), WizardStep::BasicInfo);
    assert_eq!(errors.get(FormField::Name), Some(messages::NAME_REQUIRED));
    assert_eq!(
        errors.get(FormField::Description),
        Some(messages::DESCRIPTION_REQUIRED)
    );
    assert_eq!(
        errors.get(FormField::Category),
        Some(messages::CATEGORY_REQUIRED)
    );
    assert_eq!(
        errors.get(FormField::Discount),
        Some(messages::DISCOUNT_TOO_LOW)
    );
    assert_eq!(
        errors.get(FormField::StartDate),
        Some(messages::START_DATE_REQUIRED)
    );
    assert_eq!(
        errors.get(FormField::EndDate),
        Some(messages::END_DATE_REQUIRED)
    );
}

#[test]
fn test_discount_bound_messages_are_distinct() {
    let mut wizard = filled_wizard();

    wizard.form.discount = 0;
    let errors = wizard.advance().expect_err("0 is below the lower bound");
    assert_eq!(
        errors.get(FormField::Discount),
        Some(messages::DISCOUNT_TOO_LOW)
    );

    wizard.form.discount = 101;
    let errors = wizard.advance().expect_err("101 is above the upper bound");
    assert_eq!(
        errors.get(FormField::Discount),
        Some(messages::DISCOUNT_TOO_HIGH)
    );

    wizard.form.discount = 50;
    wizard.advance().expect("50 is in range");
}

#[test]
fn test_back_from_products_keeps_step1_data() {
    let mut wizard = filled_wizard();
    wizard.advance().expect("advance");
    assert_eq!(wizard.step(), WizardStep::Products);

    wizard.back();
    assert_eq!(wizard.step(), WizardStep::BasicInfo);
    assert_eq!(wizard.form.name, "Semana del Gato");
    assert_eq!(wizard.form.category, Some(Category::Alimento));
}

// =============================================================================
// Category-scoped selection
// =============================================================================

#[test]
fn test_category_change_discards_selection() {
    let mut wizard = filled_wizard();
    wizard.advance().expect("advance");
    wizard.form.toggle_product(ProductId::new("1"));
    wizard.form.toggle_product(ProductId::new("2"));

    wizard.back();
    wizard.form.set_category(Category::Juguetes);
    assert!(wizard.form.selected_products().is_empty());
}

#[test]
fn test_same_category_keeps_selection() {
    let mut wizard = filled_wizard();
    wizard.form.toggle_product(ProductId::new("1"));

    wizard.form.set_category(Category::Alimento);
    assert_eq!(wizard.form.selected_products(), &[ProductId::new("1")]);
}

// =============================================================================
// Save gating
// =============================================================================

#[test]
fn test_finish_without_products_blocks_the_manager_call() {
    let ctx = TestContext::seeded();
    let mut manager = PromotionManager::new(&ctx.store);
    manager.initialize().expect("initialize");
    let before = manager.promotions().len();

    let mut wizard = filled_wizard();
    wizard.advance().expect("advance");

    let errors = wizard.finish().expect_err("no products selected");
    assert_eq!(
        errors.get(FormField::SelectedProducts),
        Some(messages::PRODUCTS_REQUIRED)
    );

    // Nothing reached the store
    assert_eq!(manager.promotions().len(), before);
    assert_eq!(ctx.store.promotions().expect("promotions").len(), before);
}

#[test]
fn test_finished_draft_saves_through_the_manager() {
    let ctx = TestContext::seeded();
    let mut manager = PromotionManager::new(&ctx.store);
    manager.initialize().expect("initialize");

    let mut wizard = filled_wizard();
    wizard.advance().expect("advance");
    wizard.form.toggle_product(ProductId::new("1"));
    wizard.form.toggle_product(ProductId::new("3"));

    let draft = wizard.finish().expect("finish");
    let id = manager.add_promotion(draft).expect("add");

    let created = manager
        .promotions()
        .iter()
        .find(|p| p.id == id)
        .expect("created promotion");
    assert_eq!(created.name, "Semana del Gato");
    assert_eq!(created.category, Category::Alimento);
    assert_eq!(created.discount, 30);
    assert_eq!(created.start_date.to_string(), "2025-09-01");
    assert!(created.is_active);
    assert_eq!(
        created.selected_products,
        vec![ProductId::new("1"), ProductId::new("3")]
    );
}

// =============================================================================
// Edit path
// =============================================================================

#[test]
fn test_edit_wizard_roundtrips_an_existing_promotion() {
    let ctx = TestContext::seeded();
    let mut manager = PromotionManager::new(&ctx.store);
    manager.initialize().expect("initialize");
    let existing = manager.promotions()[0].clone();

    let wizard = PromotionWizard::for_edit(&existing);
    let draft = wizard.finish().expect("an existing promotion is valid");

    assert_eq!(draft.name, existing.name);
    assert_eq!(draft.category, existing.category);
    assert_eq!(draft.discount, existing.discount);
    assert_eq!(draft.start_date, existing.start_date);
    assert_eq!(draft.selected_products, Some(existing.selected_products));
}

#[test]
fn test_edit_wizard_enforces_products_after_category_change() {
    let ctx = TestContext::seeded();
    let mut manager = PromotionManager::new(&ctx.store);
    manager.initialize().expect("initialize");
    let existing = manager.promotions()[0].clone();

    let mut wizard = PromotionWizard::for_edit(&existing);
    wizard.form.set_category(Category::Accesorios);

    // The category change dropped the stored selection, so saving is blocked
    let errors = wizard.finish().expect_err("selection was reset");
    assert_eq!(
        errors.get(FormField::SelectedProducts),
        Some(messages::PRODUCTS_REQUIRED)
    );
}
