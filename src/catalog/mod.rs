//! The weapon catalog: a fixed, read-only list loaded from a JSON resource.
//!
//! The catalog is parsed once at startup (a failure there is fatal) and may be
//! reloaded when a user returns to the root menu.

mod weapon_type;

pub use weapon_type::WeaponType;

use crate::error::CatalogError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub name: String,
    #[serde(rename = "type")]
    pub weapon_type: WeaponType,
    pub sub_name: String,
    pub special_name: String,
    pub special_point: u32,
    /// Image filename, relative to the images directory.
    pub image: String,
}

impl Weapon {
    pub fn image_path(&self, images_dir: &Path) -> PathBuf {
        images_dir.join(&self.image)
    }
}

#[derive(Debug, Clone)]
pub struct WeaponCatalog {
    weapons: Vec<Weapon>,
}

impl WeaponCatalog {
    /// Validates a list of weapons: non-empty, names unique.
    pub fn new(weapons: Vec<Weapon>) -> Result<Self, CatalogError> {
        if weapons.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(weapons.len());
        for w in &weapons {
            if !seen.insert(w.name.as_str()) {
                return Err(CatalogError::DuplicateName(w.name.clone()));
            }
        }
        Ok(Self { weapons })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let weapons: Vec<Weapon> = serde_json::from_str(json)?;
        Self::new(weapons)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(target = "catalog", path = %path.display(), weapons = catalog.len(), "weapon catalog loaded");
        Ok(catalog)
    }

    pub fn all(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }

    /// Every weapon of the given type, in catalog order.
    pub fn of_type(&self, weapon_type: WeaponType) -> Vec<&Weapon> {
        self.weapons
            .iter()
            .filter(|w| w.weapon_type == weapon_type)
            .collect()
    }
}
