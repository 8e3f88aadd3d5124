//! Two-step promotion wizard.
//!
//! Step 1 collects the basic info (name, description, category, discount,
//! date range); step 2 selects the category-scoped products. Advancing past
//! step 1 and finishing are both gated on validation; the storage layer
//! never re-checks these rules.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use petstore_core::{Category, ProductId};

use crate::models::{Promotion, PromotionDraft};

/// User-facing validation messages.
pub mod messages {
    pub const NAME_REQUIRED: &str = "Nombre requerido";
    pub const DESCRIPTION_REQUIRED: &str = "Descripción requerida";
    pub const CATEGORY_REQUIRED: &str = "Categoría requerida";
    pub const DISCOUNT_TOO_LOW: &str = "El descuento debe ser mayor a 0";
    pub const DISCOUNT_TOO_HIGH: &str = "El descuento no puede ser mayor a 100";
    pub const START_DATE_REQUIRED: &str = "Fecha de inicio requerida";
    pub const START_DATE_INVALID: &str = "Fecha de inicio inválida";
    pub const END_DATE_REQUIRED: &str = "Fecha de fin requerida";
    pub const END_DATE_INVALID: &str = "Fecha de fin inválida";
    pub const PRODUCTS_REQUIRED: &str = "Debe seleccionar al menos un producto";
}

/// Fields a validation message can attach to.
///
/// `Display` renders the storage-format field name, which is what the
/// consuming surface shows next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Description,
    Category,
    Discount,
    StartDate,
    EndDate,
    SelectedProducts,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Description => write!(f, "description"),
            Self::Category => write!(f, "category"),
            Self::Discount => write!(f, "discount"),
            Self::StartDate => write!(f, "startDate"),
            Self::EndDate => write!(f, "endDate"),
            Self::SelectedProducts => write!(f, "selectedProducts"),
        }
    }
}

/// Complete field-to-message map produced by one validation pass.
///
/// Built without short-circuiting: a form with three violated rules yields
/// three entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    /// Whether the pass found no violations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with a message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for a field, if the field has one.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Iterate over (field, message) pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: FormField, message: &str) {
        self.0.insert(field, message.to_owned());
    }

    fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }
}

/// Raw wizard inputs prior to validation.
///
/// Dates stay strings and the discount stays a plain integer here: this is
/// what the user typed, not yet a [`PromotionDraft`].
#[derive(Debug, Clone, Default)]
pub struct PromotionForm {
    pub name: String,
    pub description: String,
    pub category: Option<Category>,
    pub discount: i64,
    pub start_date: String,
    pub end_date: String,
    pub image: String,
    selected_products: Vec<ProductId>,
}

impl PromotionForm {
    /// An empty form for the creation wizard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-loaded from an existing promotion, for the edit wizard.
    #[must_use]
    pub fn from_promotion(promotion: &Promotion) -> Self {
        Self {
            name: promotion.name.clone(),
            description: promotion.description.clone(),
            category: Some(promotion.category),
            discount: i64::from(promotion.discount),
            start_date: promotion.start_date.to_string(),
            end_date: promotion.end_date.to_string(),
            image: promotion.image.clone(),
            selected_products: promotion.selected_products.clone(),
        }
    }

    /// Choose the promotion's category.
    ///
    /// Products are category-scoped, so switching to a different category
    /// discards any selection made so far; re-choosing the current category
    /// keeps it.
    pub fn set_category(&mut self, category: Category) {
        if self.category != Some(category) {
            self.selected_products.clear();
        }
        self.category = Some(category);
    }

    /// Toggle a product in or out of the selection.
    pub fn toggle_product(&mut self, id: ProductId) {
        if let Some(pos) = self.selected_products.iter().position(|p| p == &id) {
            self.selected_products.remove(pos);
        } else {
            self.selected_products.push(id);
        }
    }

    /// The current product selection, in selection order.
    #[must_use]
    pub fn selected_products(&self) -> &[ProductId] {
        &self.selected_products
    }

    /// Evaluate the step-1 rules. Never short-circuits.
    #[must_use]
    pub fn validate_basic_info(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, messages::NAME_REQUIRED);
        }
        if self.description.trim().is_empty() {
            errors.insert(FormField::Description, messages::DESCRIPTION_REQUIRED);
        }
        if self.category.is_none() {
            errors.insert(FormField::Category, messages::CATEGORY_REQUIRED);
        }
        if self.discount < 1 {
            errors.insert(FormField::Discount, messages::DISCOUNT_TOO_LOW);
        } else if self.discount > 100 {
            errors.insert(FormField::Discount, messages::DISCOUNT_TOO_HIGH);
        }

        match date_state(&self.start_date) {
            DateState::Empty => errors.insert(FormField::StartDate, messages::START_DATE_REQUIRED),
            DateState::Invalid => errors.insert(FormField::StartDate, messages::START_DATE_INVALID),
            DateState::Valid(_) => {}
        }
        match date_state(&self.end_date) {
            DateState::Empty => errors.insert(FormField::EndDate, messages::END_DATE_REQUIRED),
            DateState::Invalid => errors.insert(FormField::EndDate, messages::END_DATE_INVALID),
            DateState::Valid(_) => {}
        }

        errors
    }

    /// Evaluate the step-2 rule: the selection must be non-empty at save.
    #[must_use]
    pub fn validate_products(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        if self.selected_products.is_empty() {
            errors.insert(FormField::SelectedProducts, messages::PRODUCTS_REQUIRED);
        }
        errors
    }
}

enum DateState {
    Empty,
    Invalid,
    Valid(NaiveDate),
}

/// An empty input means the field was never filled; anything else must be
/// an ISO calendar date and gets its own message when it is not.
fn date_state(raw: &str) -> DateState {
    if raw.trim().is_empty() {
        return DateState::Empty;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_or(DateState::Invalid, DateState::Valid)
}

/// The wizard's two steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Step 1: name, description, category, discount, date range.
    BasicInfo,
    /// Step 2: category-scoped product selection.
    Products,
}

impl WizardStep {
    /// Total number of steps, for "Paso N de M" headings.
    pub const COUNT: u8 = 2;

    /// 1-based step number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::Products => 2,
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::BasicInfo
    }
}

/// Two-step creation/edit wizard over a [`PromotionForm`].
#[derive(Debug, Clone, Default)]
pub struct PromotionWizard {
    step: WizardStep,
    pub form: PromotionForm,
}

impl PromotionWizard {
    /// A fresh creation wizard on step 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An edit wizard pre-loaded from an existing promotion, on step 1.
    #[must_use]
    pub fn for_edit(promotion: &Promotion) -> Self {
        Self {
            step: WizardStep::BasicInfo,
            form: PromotionForm::from_promotion(promotion),
        }
    }

    /// The current step.
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Move from step 1 to step 2, gated on the step-1 rules.
    ///
    /// # Errors
    ///
    /// Returns the full step-1 error map when any rule is violated; the
    /// wizard stays on step 1.
    pub fn advance(&mut self) -> Result<(), ValidationErrors> {
        let errors = self.form.validate_basic_info();
        if !errors.is_empty() {
            return Err(errors);
        }
        self.step = WizardStep::Products;
        Ok(())
    }

    /// Return to step 1, keeping all entered data.
    pub fn back(&mut self) {
        self.step = WizardStep::BasicInfo;
    }

    /// Validate both steps and produce the draft to hand to the promotion
    /// manager.
    ///
    /// # Errors
    ///
    /// Returns the combined error map when any rule is violated; no draft
    /// is produced and nothing reaches the store.
    pub fn finish(&self) -> Result<PromotionDraft, ValidationErrors> {
        let mut errors = self.form.validate_basic_info();
        errors.merge(self.form.validate_products());

        let (Some(category), DateState::Valid(start_date), DateState::Valid(end_date)) = (
            self.form.category,
            date_state(&self.form.start_date),
            date_state(&self.form.end_date),
        ) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        // Bounded to 1..=100 by validate_basic_info
        let discount = u8::try_from(self.form.discount).unwrap_or(u8::MAX);

        Ok(PromotionDraft {
            name: self.form.name.clone(),
            description: self.form.description.clone(),
            category,
            discount,
            start_date,
            end_date,
            image: self.form.image.clone(),
            selected_products: Some(self.form.selected_products.clone()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_form() -> PromotionForm {
        let mut form = PromotionForm::new();
        form.name = "Promoción de Verano".to_owned();
        form.description = "Descuentos de temporada".to_owned();
        form.set_category(Category::Alimento);
        form.discount = 25;
        form.start_date = "2025-06-01".to_owned();
        form.end_date = "2025-08-31".to_owned();
        form.image = "dog-products".to_owned();
        form
    }

    #[test]
    fn test_empty_form_reports_every_violation_at_once() {
        let errors = PromotionForm::new().validate_basic_info();

        assert_eq!(errors.len(), 6);
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
    fn test_discount_bounds_have_distinct_messages() {
        let mut form = filled_form();

        form.discount = 0;
        assert_eq!(
            form.validate_basic_info().get(FormField::Discount),
            Some(messages::DISCOUNT_TOO_LOW)
        );

        form.discount = 101;
        assert_eq!(
            form.validate_basic_info().get(FormField::Discount),
            Some(messages::DISCOUNT_TOO_HIGH)
        );

        form.discount = 50;
        assert!(form.validate_basic_info().get(FormField::Discount).is_none());
    }

    #[test]
    fn test_discount_boundaries_are_inclusive() {
        let mut form = filled_form();

        form.discount = 1;
        assert!(form.validate_basic_info().is_empty());

        form.discount = 100;
        assert!(form.validate_basic_info().is_empty());
    }

    #[test]
    fn test_unparseable_date_gets_its_own_message() {
        let mut form = filled_form();
        form.start_date = "not-a-date".to_owned();

        assert_eq!(
            form.validate_basic_info().get(FormField::StartDate),
            Some(messages::START_DATE_INVALID)
        );
    }

    #[test]
    fn test_changing_category_resets_selection() {
        let mut form = filled_form();
        form.toggle_product(ProductId::new("1"));
        form.toggle_product(ProductId::new("2"));
        assert_eq!(form.selected_products().len(), 2);

        form.set_category(Category::Juguetes);
        assert!(form.selected_products().is_empty());
    }

    #[test]
    fn test_rechoosing_same_category_keeps_selection() {
        let mut form = filled_form();
        form.toggle_product(ProductId::new("1"));

        form.set_category(Category::Alimento);
        assert_eq!(form.selected_products().len(), 1);
    }

    #[test]
    fn test_toggle_product_deselects() {
        let mut form = filled_form();
        form.toggle_product(ProductId::new("1"));
        form.toggle_product(ProductId::new("1"));
        assert!(form.selected_products().is_empty());
    }

    #[test]
    fn test_advance_blocked_by_step1_errors() {
        let mut wizard = PromotionWizard::new();

        let errors = wizard.advance().unwrap_err();
        assert!(!errors.is_empty());
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_advance_with_valid_data() {
        let mut wizard = PromotionWizard::new();
        wizard.form = filled_form();

        wizard.advance().unwrap();
        assert_eq!(wizard.step(), WizardStep::Products);
        assert_eq!(wizard.step().number(), 2);
    }

    #[test]
    fn test_back_keeps_entered_data() {
        let mut wizard = PromotionWizard::new();
        wizard.form = filled_form();
        wizard.advance().unwrap();

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
        assert_eq!(wizard.form.name, "Promoción de Verano");
        assert_eq!(wizard.form.category, Some(Category::Alimento));
    }

    #[test]
    fn test_finish_requires_products() {
        let mut wizard = PromotionWizard::new();
        wizard.form = filled_form();
        wizard.advance().unwrap();

        let errors = wizard.finish().unwrap_err();
        assert_eq!(
            errors.get(FormField::SelectedProducts),
            Some(messages::PRODUCTS_REQUIRED)
        );
    }

    #[test]
    fn test_finish_builds_draft() {
        let mut wizard = PromotionWizard::new();
        wizard.form = filled_form();
        wizard.advance().unwrap();
        wizard.form.toggle_product(ProductId::new("1"));
        wizard.form.toggle_product(ProductId::new("3"));

        let draft = wizard.finish().unwrap();
        assert_eq!(draft.name, "Promoción de Verano");
        assert_eq!(draft.category, Category::Alimento);
        assert_eq!(draft.discount, 25);
        assert_eq!(draft.start_date.to_string(), "2025-06-01");
        assert_eq!(
            draft.selected_products,
            Some(vec![ProductId::new("1"), ProductId::new("3")])
        );
    }

    #[test]
    fn test_edit_wizard_preloads_promotion() {
        use chrono::NaiveDate;
        use petstore_core::PromotionId;

        let promotion = Promotion {
            id: PromotionId::new("1"),
            name: "Existente".to_owned(),
            description: "Ya guardada".to_owned(),
            category: Category::Cuidado,
            discount: 10,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            image: "dog-products".to_owned(),
            is_active: true,
            selected_products: vec![ProductId::new("9")],
        };

        let wizard = PromotionWizard::for_edit(&promotion);
        assert_eq!(wizard.form.name, "Existente");
        assert_eq!(wizard.form.discount, 10);
        assert_eq!(wizard.form.start_date, "2025-01-01");
        assert_eq!(wizard.form.selected_products(), &[ProductId::new("9")]);
    }
}
