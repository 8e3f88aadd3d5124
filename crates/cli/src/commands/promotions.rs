//! Promotion management commands.

use clap::Args;
use tracing::{info, warn};

use petstore_core::{Category, ProductId, PromotionFilter, PromotionId};

use petstore_admin::catalog;
use petstore_admin::forms::{PromotionWizard, WizardStep};
use petstore_admin::models::PromotionUpdate;
use petstore_admin::services::PromotionManager;
use petstore_admin::store::Store;

use super::report_validation_errors;

/// Wizard inputs for `promotions create`.
///
/// Everything defaults to empty so the wizard's own validation reports
/// missing fields instead of clap.
#[derive(Args)]
pub struct CreateArgs {
    /// Promotion name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Promotion description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Category (`alimento`, `juguetes`, `cuidado`, `accesorios`)
    #[arg(long)]
    pub category: Option<String>,

    /// Discount percentage (1-100)
    #[arg(long, default_value_t = 0)]
    pub discount: i64,

    /// First day the promotion applies (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub start_date: String,

    /// Last day the promotion applies (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub end_date: String,

    /// Symbolic image reference
    #[arg(long, default_value = "dog-products")]
    pub image: String,

    /// Comma-separated product ids from the chosen category
    #[arg(long, value_delimiter = ',')]
    pub products: Vec<String>,
}

/// Wizard inputs for `promotions edit`; omitted flags keep the stored value.
#[derive(Args)]
pub struct EditArgs {
    /// Promotion id
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Category (`alimento`, `juguetes`, `cuidado`, `accesorios`).
    /// Changing it discards the stored product selection.
    #[arg(long)]
    pub category: Option<String>,

    /// Discount percentage (1-100)
    #[arg(long)]
    pub discount: Option<i64>,

    /// First day the promotion applies (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Last day the promotion applies (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Symbolic image reference
    #[arg(long)]
    pub image: Option<String>,

    /// Comma-separated product ids; replaces the stored selection
    #[arg(long, value_delimiter = ',')]
    pub products: Option<Vec<String>>,
}

/// List promotions whose derived status passes the given filter.
///
/// # Errors
///
/// Returns an error if the filter name is unknown or the store fails.
pub fn list(store: &Store, filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter: PromotionFilter = filter.parse()?;
    let today = chrono::Local::now().date_naive();

    let mut manager = PromotionManager::new(store);
    manager.initialize()?;

    let promotions = manager.filtered(filter, today);
    info!(filter = %filter, count = promotions.len(), "Promociones");

    for promotion in promotions {
        info!(
            id = %promotion.id,
            name = %promotion.name,
            category = %promotion.category,
            discount = promotion.discount,
            status = %promotion.status_on(today),
            "  {} - {}%",
            promotion.name,
            promotion.discount
        );
    }

    Ok(())
}

/// List the products available for a category, with prices.
///
/// # Errors
///
/// Returns an error if the category name is unknown.
pub fn products(category: &str) -> Result<(), Box<dyn std::error::Error>> {
    let category: Category = category.parse()?;

    let products = catalog::products_in_category(category);
    info!(category = %category, "Productos de {}", category.label());
    for product in products {
        info!(id = %product.id, "  {} - {}", product.name, product.price.display());
    }

    Ok(())
}

/// Create a promotion through the two-step wizard.
///
/// # Errors
///
/// Returns an error if validation fails, a product does not belong to the
/// chosen category, or the store fails.
pub fn create(store: &Store, args: &CreateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut wizard = PromotionWizard::new();
    wizard.form.name = args.name.clone();
    wizard.form.description = args.description.clone();
    wizard.form.discount = args.discount;
    wizard.form.start_date = args.start_date.clone();
    wizard.form.end_date = args.end_date.clone();
    wizard.form.image = args.image.clone();
    if let Some(raw) = &args.category {
        wizard.form.set_category(raw.parse::<Category>()?);
    }

    if let Err(errors) = wizard.advance() {
        report_validation_errors(&errors);
        return Err("la promoción no pasó la validación".into());
    }
    tracing::debug!("Paso {} de {}", wizard.step().number(), WizardStep::COUNT);

    select_products(&mut wizard, &args.products)?;

    let draft = match wizard.finish() {
        Ok(draft) => draft,
        Err(errors) => {
            report_validation_errors(&errors);
            return Err("la promoción no pasó la validación".into());
        }
    };

    let mut manager = PromotionManager::new(store);
    manager.initialize()?;
    let id = manager.add_promotion(draft)?;

    info!(promotion_id = %id, "Promoción creada");
    Ok(())
}

/// Edit a promotion through the wizard, replacing only the given fields.
///
/// Changing the category discards the stored product selection, so a
/// category change needs `--products` with ids from the new category.
///
/// # Errors
///
/// Returns an error if validation fails, a product does not belong to the
/// chosen category, or the store fails.
pub fn edit(store: &Store, args: &EditArgs) -> Result<(), Box<dyn std::error::Error>> {
    let id = PromotionId::new(args.id.clone());

    let mut manager = PromotionManager::new(store);
    manager.initialize()?;

    let Some(existing) = manager.promotions().iter().find(|p| p.id == id) else {
        warn!(promotion_id = %id, "Promoción no encontrada");
        return Ok(());
    };

    let mut wizard = PromotionWizard::for_edit(existing);
    if let Some(name) = &args.name {
        wizard.form.name = name.clone();
    }
    if let Some(description) = &args.description {
        wizard.form.description = description.clone();
    }
    if let Some(raw) = &args.category {
        wizard.form.set_category(raw.parse::<Category>()?);
    }
    if let Some(discount) = args.discount {
        wizard.form.discount = discount;
    }
    if let Some(start_date) = &args.start_date {
        wizard.form.start_date = start_date.clone();
    }
    if let Some(end_date) = &args.end_date {
        wizard.form.end_date = end_date.clone();
    }
    if let Some(image) = &args.image {
        wizard.form.image = image.clone();
    }

    if let Err(errors) = wizard.advance() {
        report_validation_errors(&errors);
        return Err("la promoción no pasó la validación".into());
    }

    if let Some(products) = &args.products {
        // Replace the stored selection outright
        for product in wizard.form.selected_products().to_vec() {
            wizard.form.toggle_product(product);
        }
        select_products(&mut wizard, products)?;
    }

    let draft = match wizard.finish() {
        Ok(draft) => draft,
        Err(errors) => {
            report_validation_errors(&errors);
            return Err("la promoción no pasó la validación".into());
        }
    };

    manager.update_promotion(
        &id,
        PromotionUpdate {
            name: Some(draft.name),
            description: Some(draft.description),
            category: Some(draft.category),
            discount: Some(draft.discount),
            start_date: Some(draft.start_date),
            end_date: Some(draft.end_date),
            image: Some(draft.image),
            is_active: None,
            selected_products: draft.selected_products,
        },
    )?;

    info!(promotion_id = %id, "Promoción actualizada");
    Ok(())
}

/// Move a promotion to the trash.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn trash(store: &Store, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = PromotionId::new(id);
    let mut manager = PromotionManager::new(store);
    manager.initialize()?;
    manager.delete_promotion(&id)?;

    info!(promotion_id = %id, "La promoción se ha movido a la papelera");
    Ok(())
}

/// Restore a promotion from the trash.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn restore(store: &Store, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = PromotionId::new(id);
    let mut manager = PromotionManager::new(store);
    manager.initialize()?;
    manager.restore_promotion(&id)?;

    info!(promotion_id = %id, "La promoción ha sido restaurada");
    Ok(())
}

/// Permanently delete a promotion.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn delete(store: &Store, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = PromotionId::new(id);
    let mut manager = PromotionManager::new(store);
    manager.initialize()?;
    manager.permanently_delete_promotion(&id)?;

    info!(promotion_id = %id, "Promoción eliminada permanentemente");
    Ok(())
}

/// Select products into the wizard, rejecting ids outside the chosen
/// category (the wizard only ever offers category-scoped products).
fn select_products(
    wizard: &mut PromotionWizard,
    products: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    for raw in products {
        if raw.is_empty() {
            continue;
        }
        let product_id = ProductId::new(raw.clone());
        let Some(product) = catalog::product_by_id(&product_id) else {
            return Err(format!("producto desconocido: {raw}").into());
        };
        if Some(product.category) != wizard.form.category {
            return Err(format!(
                "el producto {} ({}) no pertenece a la categoría seleccionada",
                product.name, product_id
            )
            .into());
        }
        wizard.form.toggle_product(product_id);
    }
    Ok(())
}
