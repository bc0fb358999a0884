//! Closed set of component actions, parsed from a component's custom_id.
use super::ids;
use crate::catalog::WeaponType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Back to the root menu; reloads the catalog.
    Menu,
    /// Unfiltered redraw.
    Retry,
    /// Redraw restricted to the type of the last recorded weapon.
    FilterRetry,
    /// Repeat the last multi-draw for the same group.
    MultiRetry,
    DrawSingle,
    OpenTypeMenu,
    DrawType(WeaponType),
    OpenMultiSelect,
    /// Multi-select value change; selection is held until confirmed.
    MultiSelect,
    MultiConfirm,
    ShowHistory,
    ToggleOverwrite { owner: u64 },
}

impl Action {
    /// `None` for identifiers this bot does not own; callers treat that as a no-op.
    pub fn parse(custom_id: &str) -> Option<Self> {
        let action = match custom_id {
            ids::MENU => Action::Menu,
            ids::RETRY => Action::Retry,
            ids::FILTER_RETRY => Action::FilterRetry,
            ids::MULTI_RETRY => Action::MultiRetry,
            ids::DRAW_SINGLE => Action::DrawSingle,
            ids::DRAW_FILTER_MENU => Action::OpenTypeMenu,
            ids::DRAW_MULTI_MENU => Action::OpenMultiSelect,
            ids::MULTI_SELECT => Action::MultiSelect,
            ids::MULTI_CONFIRM => Action::MultiConfirm,
            ids::SHOW_HISTORY => Action::ShowHistory,
            other => {
                if let Some(key) = other.strip_prefix(ids::DRAW_TYPE_PREFIX) {
                    Action::DrawType(WeaponType::from_key(key)?)
                } else if let Some(owner) = other.strip_prefix(ids::OVERWRITE_TOGGLE_PREFIX) {
                    Action::ToggleOverwrite {
                        owner: owner.parse().ok()?,
                    }
                } else {
                    return None;
                }
            }
        };
        Some(action)
    }

    pub fn custom_id(&self) -> String {
        match self {
            Action::Menu => ids::MENU.to_string(),
            Action::Retry => ids::RETRY.to_string(),
            Action::FilterRetry => ids::FILTER_RETRY.to_string(),
            Action::MultiRetry => ids::MULTI_RETRY.to_string(),
            Action::DrawSingle => ids::DRAW_SINGLE.to_string(),
            Action::OpenTypeMenu => ids::DRAW_FILTER_MENU.to_string(),
            Action::DrawType(t) => format!("{}{}", ids::DRAW_TYPE_PREFIX, t.key()),
            Action::OpenMultiSelect => ids::DRAW_MULTI_MENU.to_string(),
            Action::MultiSelect => ids::MULTI_SELECT.to_string(),
            Action::MultiConfirm => ids::MULTI_CONFIRM.to_string(),
            Action::ShowHistory => ids::SHOW_HISTORY.to_string(),
            Action::ToggleOverwrite { owner } => format!("{}{}", ids::OVERWRITE_TOGGLE_PREFIX, owner),
        }
    }
}
