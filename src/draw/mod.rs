//! Uniform weapon selection over the full catalog or a type-filtered subset.
use crate::catalog::{Weapon, WeaponCatalog, WeaponType};
use crate::error::DrawError;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks one element uniformly at random; `None` only for an empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(candidates: &'a [T], rng: &mut R) -> Option<&'a T> {
    candidates.choose(rng)
}

/// Unfiltered draw. A validated `WeaponCatalog` is never empty.
pub fn draw_any<R: Rng + ?Sized>(catalog: &WeaponCatalog, rng: &mut R) -> Result<Weapon, DrawError> {
    pick(catalog.all(), rng)
        .cloned()
        .ok_or(DrawError::EmptyCatalog)
}

pub fn draw_of_type<R: Rng + ?Sized>(
    catalog: &WeaponCatalog,
    weapon_type: WeaponType,
    rng: &mut R,
) -> Result<Weapon, DrawError> {
    let candidates = catalog.of_type(weapon_type);
    pick(&candidates, rng)
        .map(|w| (*w).clone())
        .ok_or(DrawError::NoCandidates(weapon_type))
}

/// One independent unfiltered draw per target, in target order.
pub fn draw_for_targets<R: Rng + ?Sized>(
    catalog: &WeaponCatalog,
    targets: &[u64],
    rng: &mut R,
) -> Result<Vec<(u64, Weapon)>, DrawError> {
    targets
        .iter()
        .map(|&uid| draw_any(catalog, rng).map(|w| (uid, w)))
        .collect()
}
