//! Draw service layer: runs a draw against the current catalog and records it.
//!
//! Nothing here talks to Discord; the component handlers only turn these
//! results into responses.
use crate::catalog::{Weapon, WeaponType};
use crate::draw::{draw_any, draw_for_targets, draw_of_type};
use crate::error::DrawError;
use crate::session::{GroupMember, HistoryEntry};
use crate::AppState;
use serenity::model::id::UserId;
use serenity::model::user::User;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

/// A drawn weapon for one member of a group.
pub type GroupDraw = (GroupMember, Weapon);

pub async fn single(app_state: &AppState) -> Result<Weapon, DrawError> {
    let catalog = app_state.catalog().await;
    draw_any(&catalog, &mut rand::rng())
}

pub async fn of_type(app_state: &AppState, weapon_type: WeaponType) -> Result<Weapon, DrawError> {
    let catalog = app_state.catalog().await;
    draw_of_type(&catalog, weapon_type, &mut rand::rng())
}

/// Redraw restricted to the type of the user's last recorded weapon.
#[instrument(level = "debug", skip(app_state))]
pub async fn same_type_again(
    app_state: &AppState,
    user_id: u64,
) -> Result<(Weapon, WeaponType), DrawError> {
    let catalog = app_state.catalog().await;
    let weapon_type = app_state
        .sessions
        .read()
        .await
        .retry_filter(user_id, &catalog)?;
    let weapon = draw_of_type(&catalog, weapon_type, &mut rand::rng())?;
    Ok((weapon, weapon_type))
}

/// Confirms the owner's pending multi-select and draws once per selected user.
#[instrument(level = "debug", skip(app_state))]
pub async fn confirm_group(app_state: &AppState, owner_id: u64) -> Result<Vec<GroupDraw>, DrawError> {
    let targets = app_state
        .sessions
        .write()
        .await
        .commit_pending_targets(owner_id)?;
    draw_group(app_state, targets).await
}

/// Fresh draws for the same group as the owner's last multi-draw.
#[instrument(level = "debug", skip(app_state))]
pub async fn group_again(app_state: &AppState, owner_id: u64) -> Result<Vec<GroupDraw>, DrawError> {
    let targets = app_state.sessions.read().await.multi_targets(owner_id)?;
    draw_group(app_state, targets).await
}

async fn draw_group(
    app_state: &AppState,
    targets: Vec<GroupMember>,
) -> Result<Vec<GroupDraw>, DrawError> {
    let catalog = app_state.catalog().await;
    let ids: Vec<u64> = targets.iter().map(|m| m.user_id).collect();
    let draws = draw_for_targets(&catalog, &ids, &mut rand::rng())?;
    Ok(targets
        .into_iter()
        .zip(draws)
        .map(|(member, (_, weapon))| (member, weapon))
        .collect())
}

/// Turns a user-select submission into group members, dropping bots.
/// Users missing from the resolved data are kept under a placeholder name.
pub fn group_from_selection(values: &[UserId], resolved: &HashMap<UserId, User>) -> Vec<GroupMember> {
    values
        .iter()
        .filter_map(|id| match resolved.get(id) {
            Some(user) if user.bot => None,
            Some(user) => Some(GroupMember::new(id.get(), user.display_name())),
            None => Some(GroupMember::new(id.get(), format!("ユーザー {}", id.get()))),
        })
        .collect()
}

/// Loads the weapon image and, only if it exists, records the draw.
/// Returns the image bytes, or the path that could not be read.
pub async fn record_single(
    app_state: &AppState,
    user_id: u64,
    weapon: &Weapon,
    filter: Option<WeaponType>,
) -> Result<Vec<u8>, PathBuf> {
    let path = weapon.image_path(&app_state.config.images_dir);
    let image = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(target = "weapon.draw", user_id, weapon = %weapon.name, path = %path.display(), error = %e, "image missing; draw not recorded");
            return Err(path);
        }
    };
    app_state
        .sessions
        .write()
        .await
        .record_draw(user_id, HistoryEntry::new(weapon, filter));
    debug!(target = "weapon.draw", user_id, weapon = %weapon.name, filter = ?filter, "draw recorded");
    Ok(image)
}

/// Records every group draw in each target's history. Called once the result is posted.
pub async fn record_group(app_state: &AppState, draws: &[GroupDraw]) {
    let mut sessions = app_state.sessions.write().await;
    for (member, weapon) in draws {
        sessions.record_draw(member.user_id, HistoryEntry::new(weapon, None));
    }
}

/// Optional image for one group entry.
pub async fn load_image(app_state: &AppState, weapon: &Weapon) -> Option<Vec<u8>> {
    let path = weapon.image_path(&app_state.config.images_dir);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            debug!(target = "weapon.multi", weapon = %weapon.name, path = %path.display(), error = %e, "image missing; sending embed without it");
            None
        }
    }
}
