//! Seed the store with default data.

use tracing::info;

use petstore_admin::store::Store;

/// Run the idempotent first-run bootstrap.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn run(store: &Store) -> Result<(), Box<dyn std::error::Error>> {
    store.initialize_defaults()?;

    info!("Seeding complete!");
    info!("  Users: {}", store.users()?.len());
    info!("  Promotions: {}", store.promotions()?.len());

    Ok(())
}
