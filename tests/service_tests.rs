mod common;

use common::{FIXTURE, app_state};
use serenity::model::id::UserId;
use serenity::model::user::User;
use splatdraw_bot::catalog::WeaponType;
use splatdraw_bot::error::DrawError;
use splatdraw_bot::services::draw;
use splatdraw_bot::session::GroupMember;
use std::collections::HashMap;

const ALICE: u64 = 2001;

#[tokio::test]
async fn missing_image_does_not_record_the_draw() {
    let (state, dir) = app_state("missing-image", false);
    let weapon = draw::single(&state).await.unwrap();
    let err = draw::record_single(&state, ALICE, &weapon, None)
        .await
        .unwrap_err();
    assert_eq!(err, weapon.image_path(&state.config.images_dir));
    assert_eq!(state.sessions.read().await.history_len(ALICE), 0);
    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn successful_draws_are_recorded_with_their_filter() {
    let (state, dir) = app_state("recorded", true);
    for n in 1..=3 {
        let weapon = draw::of_type(&state, WeaponType::Charger).await.unwrap();
        let image = draw::record_single(&state, ALICE, &weapon, Some(WeaponType::Charger))
            .await
            .unwrap();
        assert_eq!(image, b"png");
        assert_eq!(state.sessions.read().await.history_len(ALICE), n);
    }
    let sessions = state.sessions.read().await;
    let last = sessions.last_entry(ALICE).unwrap();
    assert_eq!(last.weapon_type, WeaponType::Charger);
    assert_eq!(last.filter, Some(WeaponType::Charger));
    drop(sessions);
    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn same_type_again_needs_history() {
    let (state, dir) = app_state("same-type-empty", true);
    assert_eq!(
        draw::same_type_again(&state, ALICE).await.unwrap_err(),
        DrawError::NoHistory
    );
    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn same_type_again_stays_within_the_type() {
    let (state, dir) = app_state("same-type", true);
    let first = draw::of_type(&state, WeaponType::Shooter).await.unwrap();
    draw::record_single(&state, ALICE, &first, Some(WeaponType::Shooter))
        .await
        .unwrap();
    for _ in 0..100 {
        let (weapon, t) = draw::same_type_again(&state, ALICE).await.unwrap();
        assert_eq!(t, WeaponType::Shooter);
        assert_eq!(weapon.weapon_type, WeaponType::Shooter);
    }
    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn group_draw_appends_once_per_target_and_repeats_the_group() {
    let (state, dir) = app_state("group", false);
    let targets = [31, 32, 33, 34, 35];
    state
        .sessions
        .write()
        .await
        .set_pending_targets(ALICE, targets.map(|id| GroupMember::new(id, format!("p{id}"))));

    let draws = draw::confirm_group(&state, ALICE).await.unwrap();
    assert_eq!(draws.iter().map(|(m, _)| m.user_id).collect::<Vec<_>>(), targets);
    assert_eq!(draws[0].0.display_name, "p31");
    // Drawing alone records nothing; the handler records once the result is posted.
    assert_eq!(state.sessions.read().await.history_len(31), 0);
    draw::record_group(&state, &draws).await;
    {
        let sessions = state.sessions.read().await;
        for uid in targets {
            assert_eq!(sessions.history_len(uid), 1);
            assert_eq!(sessions.last_entry(uid).unwrap().filter, None);
        }
        assert_eq!(sessions.history_len(ALICE), 0);
    }

    let again = draw::group_again(&state, ALICE).await.unwrap();
    assert_eq!(again.iter().map(|(m, _)| m.user_id).collect::<Vec<_>>(), targets);
    let names: Vec<&str> = FIXTURE.iter().map(|(n, _)| *n).collect();
    assert!(again.iter().all(|(_, w)| names.contains(&w.name.as_str())));
    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn group_again_without_a_group_cannot_redraw() {
    let (state, dir) = app_state("group-empty", false);
    assert_eq!(
        draw::group_again(&state, ALICE).await.unwrap_err(),
        DrawError::NoMultiTargets
    );
    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn failed_reload_keeps_the_previous_catalog() {
    let (state, dir) = app_state("reload", false);
    std::fs::write(&state.config.weapons_file, "not json").unwrap();
    assert!(state.reload_catalog().await.is_err());
    let catalog = state.refresh_catalog().await;
    assert_eq!(catalog.len(), FIXTURE.len());

    std::fs::write(
        &state.config.weapons_file,
        common::catalog_json(&FIXTURE[..3]),
    )
    .unwrap();
    assert_eq!(state.refresh_catalog().await.len(), 3);
    assert_eq!(state.catalog().await.len(), 3);
    let _ = std::fs::remove_dir_all(dir);
}

fn user(id: u64, name: &str, global_name: Option<&str>, bot: bool) -> User {
    let mut user = User::default();
    user.id = UserId::new(id);
    user.name = name.to_string();
    user.global_name = global_name.map(str::to_string);
    user.bot = bot;
    user
}

#[test]
fn selection_drops_bots_and_keeps_display_names() {
    let resolved: HashMap<UserId, User> = [
        user(41, "ika", Some("イカ"), false),
        user(42, "helper", None, true),
        user(43, "tako", None, false),
    ]
    .into_iter()
    .map(|u| (u.id, u))
    .collect();
    let values = [41, 42, 43, 44].map(UserId::new);

    let group = draw::group_from_selection(&values, &resolved);
    assert_eq!(
        group,
        vec![
            GroupMember::new(41, "イカ"),
            GroupMember::new(43, "tako"),
            GroupMember::new(44, "ユーザー 44"),
        ]
    );
}

#[tokio::test]
async fn selecting_only_bots_cannot_be_confirmed() {
    let (state, dir) = app_state("bots-only", false);
    let resolved: HashMap<UserId, User> = [user(51, "bot", None, true)]
        .into_iter()
        .map(|u| (u.id, u))
        .collect();
    let group = draw::group_from_selection(&[UserId::new(51)], &resolved);
    state.sessions.write().await.set_pending_targets(ALICE, group);
    assert_eq!(
        draw::confirm_group(&state, ALICE).await.unwrap_err(),
        DrawError::NoTargetsSelected
    );
    let _ = std::fs::remove_dir_all(dir);
}
