//! CLI command implementations.

pub mod auth;
pub mod promotions;
pub mod seed;
pub mod settings;

use petstore_admin::forms::ValidationErrors;

/// Report every violated form rule, one line per field.
pub fn report_validation_errors(errors: &ValidationErrors) {
    for (field, message) in errors.iter() {
        tracing::warn!(field = %field, "{message}");
    }
}
