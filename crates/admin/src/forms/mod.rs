//! Form state and validation for the admin's input surfaces.
//!
//! Validation never throws: rules evaluate against the raw inputs and
//! produce a complete field-to-message map in one pass, so every violated
//! rule is visible at once.

pub mod promotion;

pub use promotion::{FormField, PromotionForm, PromotionWizard, ValidationErrors, WizardStep};
