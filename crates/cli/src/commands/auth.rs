//! Credential management commands.

use tracing::info;

use petstore_admin::services::AuthManager;
use petstore_admin::store::Store;

/// Register a new admin credential.
///
/// # Errors
///
/// Returns an error if the email is already registered or the store fails.
pub fn register(store: &Store, email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut auth = AuthManager::new(store);
    auth.initialize()?;

    if !auth.register(email, password)? {
        return Err(format!("el email {email} ya está registrado").into());
    }

    info!(email, "Credencial registrada");
    Ok(())
}

/// Log in as an admin.
///
/// # Errors
///
/// Returns an error if the credentials do not match or the store fails.
pub fn login(store: &Store, email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut auth = AuthManager::new(store);
    auth.initialize()?;

    if !auth.login(email, password)? {
        return Err("credenciales inválidas".into());
    }

    info!(email, "Sesión iniciada");
    Ok(())
}

/// Log out the active admin. Succeeds even without an active session.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn logout(store: &Store) -> Result<(), Box<dyn std::error::Error>> {
    let mut auth = AuthManager::new(store);
    auth.initialize()?;
    auth.logout()?;

    info!("Sesión cerrada");
    Ok(())
}
