use splatdraw_bot::catalog::WeaponType;
use splatdraw_bot::interactions::action::Action;
use splatdraw_bot::interactions::ids;

#[test]
fn footer_ids_parse_to_router_actions() {
    assert_eq!(Action::parse(ids::RETRY), Some(Action::Retry));
    assert_eq!(Action::parse(ids::FILTER_RETRY), Some(Action::FilterRetry));
    assert_eq!(Action::parse(ids::MULTI_RETRY), Some(Action::MultiRetry));
    assert_eq!(Action::parse(ids::MENU), Some(Action::Menu));
}

#[test]
fn unknown_ids_are_ignored() {
    assert_eq!(Action::parse(""), None);
    assert_eq!(Action::parse("saga_map"), None);
    assert_eq!(Action::parse("draw_type_bazooka"), None);
    assert_eq!(Action::parse("overwrite_toggle_"), None);
    assert_eq!(Action::parse("overwrite_toggle_abc"), None);
}

#[test]
fn parameterized_ids_carry_their_payload() {
    assert_eq!(
        Action::parse("draw_type_shooter"),
        Some(Action::DrawType(WeaponType::Shooter))
    );
    assert_eq!(
        Action::parse("overwrite_toggle_123456789"),
        Some(Action::ToggleOverwrite { owner: 123456789 })
    );
}

#[test]
fn every_action_id_parses_back() {
    let mut actions = vec![
        Action::Menu,
        Action::Retry,
        Action::FilterRetry,
        Action::MultiRetry,
        Action::DrawSingle,
        Action::OpenTypeMenu,
        Action::OpenMultiSelect,
        Action::MultiSelect,
        Action::MultiConfirm,
        Action::ShowHistory,
        Action::ToggleOverwrite { owner: 42 },
    ];
    actions.extend(WeaponType::ALL.map(Action::DrawType));
    for action in actions {
        let id = action.custom_id();
        assert!(id.len() <= 100, "custom_id too long: {id}");
        assert_eq!(Action::parse(&id), Some(action));
    }
}
