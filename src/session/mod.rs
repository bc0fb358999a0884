//! Per-user in-memory state: draw history, multi-draw registry and preferences.
//!
//! A single `SessionStore` lives in `AppState` behind a `RwLock` for the
//! lifetime of the process. Nothing here is persisted.

use crate::catalog::{Weapon, WeaponCatalog, WeaponType};
use crate::constants::{HISTORY_VIEW_LEN, MAX_MULTI_TARGETS};
use crate::error::DrawError;
use std::collections::{HashMap, HashSet};

/// One recorded draw. The type is stored alongside the name so a filtered
/// retry does not depend on a reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub weapon_name: String,
    pub weapon_type: WeaponType,
    /// Type filter active for the draw, if any.
    pub filter: Option<WeaponType>,
}

impl HistoryEntry {
    pub fn new(weapon: &Weapon, filter: Option<WeaponType>) -> Self {
        Self {
            weapon_name: weapon.name.clone(),
            weapon_type: weapon.weapon_type,
            filter,
        }
    }
}

/// Display row for the history view; `back` is 1 for the most recent draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLine {
    pub back: usize,
    pub weapon_name: String,
    pub filter: Option<WeaponType>,
}

/// A user picked for a group draw, with the name shown on their result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMember {
    pub user_id: u64,
    pub display_name: String,
}

impl GroupMember {
    pub fn new(user_id: u64, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
        }
    }
}

/// `(channel id, message id)` of one posted result page.
pub type PostedPage = (u64, u64);

#[derive(Debug, Default)]
pub struct SessionStore {
    history: HashMap<u64, Vec<HistoryEntry>>,
    multi_targets: HashMap<u64, Vec<GroupMember>>,
    pending_targets: HashMap<u64, Vec<GroupMember>>,
    result_pages: HashMap<u64, Vec<PostedPage>>,
    overwrite: HashMap<u64, bool>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // History ------------------------------------------------------------

    pub fn record_draw(&mut self, user_id: u64, entry: HistoryEntry) {
        self.history.entry(user_id).or_default().push(entry);
    }

    pub fn history_len(&self, user_id: u64) -> usize {
        self.history.get(&user_id).map_or(0, Vec::len)
    }

    pub fn last_entry(&self, user_id: u64) -> Option<&HistoryEntry> {
        self.history.get(&user_id).and_then(|h| h.last())
    }

    /// The last `HISTORY_VIEW_LEN` draws, most recent first. Storage is never truncated.
    pub fn recent(&self, user_id: u64) -> Vec<HistoryLine> {
        self.history
            .get(&user_id)
            .map(|h| {
                h.iter()
                    .rev()
                    .take(HISTORY_VIEW_LEN)
                    .enumerate()
                    .map(|(i, e)| HistoryLine {
                        back: i + 1,
                        weapon_name: e.weapon_name.clone(),
                        filter: e.filter,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Type filter for a "same type again" draw, taken from the user's last recorded weapon.
    pub fn retry_filter(
        &self,
        user_id: u64,
        catalog: &WeaponCatalog,
    ) -> Result<WeaponType, DrawError> {
        let last = self.last_entry(user_id).ok_or(DrawError::NoHistory)?;
        match catalog.find_by_name(&last.weapon_name) {
            Some(w) if w.weapon_type == last.weapon_type => Ok(last.weapon_type),
            _ => Err(DrawError::StaleHistory(last.weapon_name.clone())),
        }
    }

    // Multi-draw -----------------------------------------------------------

    /// Remembers the users picked in the multi-select. The selection stays
    /// until the picker is changed, so the confirm button can be pressed again.
    pub fn set_pending_targets(
        &mut self,
        user_id: u64,
        targets: impl IntoIterator<Item = GroupMember>,
    ) {
        self.pending_targets
            .insert(user_id, dedup_capped(targets, MAX_MULTI_TARGETS));
    }

    /// Copies the pending selection into the registry, replacing any earlier group.
    pub fn commit_pending_targets(&mut self, user_id: u64) -> Result<Vec<GroupMember>, DrawError> {
        let targets = self
            .pending_targets
            .get(&user_id)
            .filter(|t| !t.is_empty())
            .cloned()
            .ok_or(DrawError::NoTargetsSelected)?;
        self.multi_targets.insert(user_id, targets.clone());
        Ok(targets)
    }

    /// The group from the user's last confirmed multi-draw.
    pub fn multi_targets(&self, user_id: u64) -> Result<Vec<GroupMember>, DrawError> {
        self.multi_targets
            .get(&user_id)
            .cloned()
            .ok_or(DrawError::NoMultiTargets)
    }

    /// Pages of the owner's latest public result, replacing the previous set.
    pub fn set_result_pages(&mut self, user_id: u64, pages: Vec<PostedPage>) {
        self.result_pages.insert(user_id, pages);
    }

    /// Removes and returns the pages of the owner's latest result.
    pub fn take_result_pages(&mut self, user_id: u64) -> Vec<PostedPage> {
        self.result_pages.remove(&user_id).unwrap_or_default()
    }

    // Preferences -----------------------------------------------------------

    pub fn overwrite_enabled(&self, user_id: u64) -> bool {
        self.overwrite.get(&user_id).copied().unwrap_or(true)
    }

    /// Flips the overwrite preference and returns the new value.
    pub fn toggle_overwrite(&mut self, user_id: u64) -> bool {
        let next = !self.overwrite_enabled(user_id);
        self.overwrite.insert(user_id, next);
        next
    }
}

fn dedup_capped(members: impl IntoIterator<Item = GroupMember>, cap: usize) -> Vec<GroupMember> {
    let mut seen = HashSet::new();
    members
        .into_iter()
        .filter(|m| seen.insert(m.user_id))
        .take(cap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(members: &[GroupMember]) -> Vec<u64> {
        members.iter().map(|m| m.user_id).collect()
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let members = [3, 1, 3, 2, 1].map(|id| GroupMember::new(id, format!("u{id}")));
        assert_eq!(ids(&dedup_capped(members, 25)), vec![3, 1, 2]);
    }

    #[test]
    fn dedup_caps_length() {
        let members = (0..100).map(|id| GroupMember::new(id, "u"));
        assert_eq!(dedup_capped(members, 25).len(), 25);
    }

    #[test]
    fn result_pages_are_taken_once() {
        let mut store = SessionStore::new();
        store.set_result_pages(1, vec![(10, 100), (10, 101)]);
        assert_eq!(store.take_result_pages(1), vec![(10, 100), (10, 101)]);
        assert!(store.take_result_pages(1).is_empty());
    }
}
