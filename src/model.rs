//! Shared application state, stored in serenity's global `TypeMap`.

use crate::catalog::WeaponCatalog;
use crate::config::Config;
use crate::error::CatalogError;
use crate::session::SessionStore;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The central, shared state of the bot. An `Arc<AppState>` is placed in the
/// client data so every interaction handler reaches the same stores.
pub struct AppState {
    pub config: Config,
    /// Current catalog snapshot; replaced wholesale on reload.
    catalog: RwLock<Arc<WeaponCatalog>>,
    /// Per-user history, multi-draw groups and preferences.
    pub sessions: RwLock<SessionStore>,
}

impl AppState {
    pub fn new(config: Config, catalog: WeaponCatalog) -> Self {
        Self {
            config,
            catalog: RwLock::new(Arc::new(catalog)),
            sessions: RwLock::new(SessionStore::new()),
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }

    pub async fn catalog(&self) -> Arc<WeaponCatalog> {
        self.catalog.read().await.clone()
    }

    /// Re-reads the catalog file. On failure the previous catalog stays active.
    pub async fn reload_catalog(&self) -> Result<Arc<WeaponCatalog>, CatalogError> {
        let path = &self.config.weapons_file;
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
        let fresh = Arc::new(WeaponCatalog::from_json_str(&raw)?);
        *self.catalog.write().await = fresh.clone();
        tracing::debug!(target = "catalog", weapons = fresh.len(), "weapon catalog reloaded");
        Ok(fresh)
    }

    /// Reload for menu opens: logs and falls back to the current catalog on error.
    pub async fn refresh_catalog(&self) -> Arc<WeaponCatalog> {
        match self.reload_catalog().await {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(target = "catalog", error = %e, "reload failed; keeping previous catalog");
                self.catalog().await
            }
        }
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
