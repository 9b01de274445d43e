use crate::{
    config::Config,
    errors::AppError,
    storage::{ADMIN_PAGE, USER_PAGE},
};
use std::path::Path;
use tracing;

/// Creates the directory that will hold the content file, if it doesn't exist.
async fn ensure_data_dir_exists(data_file: &Path) -> Result<(), AppError> {
    let Some(parent) = data_file.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    tokio::fs::create_dir_all(parent).await.map_err(|e| {
        let context = format!("Startup: Failed to create data directory '{}'", parent.display());
        tracing::error!("{}: {}", context, e);
        AppError::InitError(format!("{}: {}", context, e))
    })?;

    match tokio::fs::try_exists(data_file).await {
        Ok(true) => tracing::info!("Startup: Content file '{}' found.", data_file.display()),
        Ok(false) => tracing::info!(
            "Startup: Content file '{}' not found, it will be created on first update.",
            data_file.display()
        ),
        Err(e) => tracing::warn!("Startup: Could not check content file '{}': {}", data_file.display(), e),
    }
    Ok(())
}

/// Checks the static directory and the two pages. Missing files are not fatal.
async fn check_static_assets(static_dir: &Path) {
    if !tokio::fs::metadata(static_dir).await.map(|m| m.is_dir()).unwrap_or(false) {
        tracing::warn!("Startup: Static directory '{}' does not exist.", static_dir.display());
        return;
    }

    for page in [ADMIN_PAGE, USER_PAGE] {
        let path = static_dir.join(page);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::debug!("Startup: Page '{}' found.", path.display());
        } else {
            tracing::warn!("Startup: Page '{}' is missing, requests for it will get 404.", path.display());
        }
    }
}

/// Prepares the filesystem for serving.
pub async fn init_resources(config: &Config) -> Result<(), AppError> {
    tracing::info!("Startup: Initializing resources...");
    ensure_data_dir_exists(&config.data_file).await?;
    check_static_assets(&config.static_dir).await;
    tracing::info!("Startup: Resource initialization complete.");
    Ok(())
}
