//! Accessibility settings commands.

use tracing::info;

use petstore_admin::store::Store;

/// Show the stored accessibility settings.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn show(store: &Store) -> Result<(), Box<dyn std::error::Error>> {
    let settings = store.settings()?;
    info!(
        contrast = settings.contrast,
        font_size = settings.font_size,
        "Configuración de accesibilidad"
    );
    Ok(())
}

/// Update the accessibility settings; omitted flags keep the stored value.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn set(
    store: &Store,
    contrast: Option<u8>,
    font_size: Option<u8>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = store.settings()?;
    if let Some(contrast) = contrast {
        settings.contrast = contrast;
    }
    if let Some(font_size) = font_size {
        settings.font_size = font_size;
    }
    store.save_settings(&settings)?;

    info!(
        contrast = settings.contrast,
        font_size = settings.font_size,
        "Configuración guardada"
    );
    Ok(())
}
