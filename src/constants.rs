// Central constants for history display and selection limits.
pub const HISTORY_VIEW_LEN: usize = 10;
pub const MAX_MULTI_TARGETS: usize = 25;
pub const MAX_BUTTONS_PER_ROW: usize = 5;

pub const DEFAULT_WEAPONS_FILE: &str = "weapons_list.json";
pub const DEFAULT_IMAGES_DIR: &str = "images";

// Attachment names referenced from embeds via `attachment://`.
pub const SINGLE_IMAGE_NAME: &str = "weapon.png";

pub fn multi_image_name(user_id: u64) -> String {
    format!("weapon_{user_id}.png")
}

// Discord caps embeds and attachments per message.
pub const MAX_EMBEDS_PER_MESSAGE: usize = 10;
