//! Centralized custom_id string constants for interaction components.

// Result footer actions
pub const RETRY: &str = "retry";
pub const FILTER_RETRY: &str = "weapon_filter_retry";
pub const MULTI_RETRY: &str = "multi_retry";
pub const MENU: &str = "menu";

// Root menu buttons
pub const DRAW_SINGLE: &str = "draw_single";
pub const DRAW_FILTER_MENU: &str = "draw_filter";
pub const DRAW_MULTI_MENU: &str = "draw_multi";
pub const SHOW_HISTORY: &str = "draw_history";

pub const DRAW_TYPE_PREFIX: &str = "draw_type_"; // followed by WeaponType::key

// Multi-draw user picker
pub const MULTI_SELECT: &str = "multi_select";
pub const MULTI_CONFIRM: &str = "multi_confirm";

pub const OVERWRITE_TOGGLE_PREFIX: &str = "overwrite_toggle_"; // followed by owner user id
