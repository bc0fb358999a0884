//! Buttons bound to a routed `Action`, so a button can never carry an id the router does not know.
use crate::catalog::WeaponType;
use crate::interactions::action::Action;
use crate::ui::style::{pad_narrow, pad_primary, pad_std};
use serenity::builder::CreateButton;
use serenity::model::application::ButtonStyle;

/// Label width class; wider classes pad more so rows line up.
#[derive(Clone, Copy)]
pub enum Width {
    Narrow,
    Std,
    Wide,
}

pub fn action_button(action: Action, label: &str, style: ButtonStyle, width: Width) -> CreateButton {
    let label = match width {
        Width::Narrow => pad_narrow(label),
        Width::Std => pad_std(label),
        Width::Wide => pad_primary(label),
    };
    CreateButton::new(action.custom_id()).label(label).style(style)
}

pub fn menu_button() -> CreateButton {
    action_button(Action::Menu, "メニューに戻る", ButtonStyle::Secondary, Width::Std)
}

/// "Draw again" for whichever retry the result came from.
pub fn retry_button(retry: Action) -> CreateButton {
    action_button(retry, "もう一度引く", ButtonStyle::Primary, Width::Std)
}

pub fn type_button(weapon_type: WeaponType) -> CreateButton {
    action_button(
        Action::DrawType(weapon_type),
        weapon_type.as_str(),
        ButtonStyle::Primary,
        Width::Narrow,
    )
}

pub fn overwrite_label(enabled: bool) -> &'static str {
    if enabled {
        "📝 投稿上書きON"
    } else {
        "📄 投稿上書きOFF"
    }
}

pub fn overwrite_toggle(owner: u64, enabled: bool) -> CreateButton {
    action_button(
        Action::ToggleOverwrite { owner },
        overwrite_label(enabled),
        ButtonStyle::Danger,
        Width::Std,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom_id(button: CreateButton) -> String {
        let json = serde_json::to_value(button).unwrap();
        json["custom_id"].as_str().unwrap().to_string()
    }

    #[test]
    fn type_buttons_route_back_to_their_type() {
        for t in WeaponType::ALL {
            let id = custom_id(type_button(t));
            assert_eq!(Action::parse(&id), Some(Action::DrawType(t)));
        }
    }

    #[test]
    fn retry_button_keeps_the_retry_kind() {
        for retry in [Action::Retry, Action::FilterRetry, Action::MultiRetry] {
            assert_eq!(Action::parse(&custom_id(retry_button(retry))), Some(retry));
        }
        assert_eq!(
            Action::parse(&custom_id(overwrite_toggle(7, true))),
            Some(Action::ToggleOverwrite { owner: 7 })
        );
    }
}
