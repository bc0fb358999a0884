//! Central UI style constants and helpers.
use serenity::builder::CreateEmbed;

pub const COLOR_RESULT: u32 = 0x5865F2; // Blurple
pub const COLOR_MULTI: u32 = 0x57F287; // Green
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const EMOJI_DICE: &str = "🎲";
pub const EMOJI_FILTER: &str = "🔍";
pub const EMOJI_GROUP: &str = "👥";
pub const EMOJI_HISTORY: &str = "🕘";
pub const EMOJI_TARGET: &str = "🎯";

pub const MENU_TITLE: &str = "🔰 **スプラトゥーン3 武器抽選メニュー**";

// Standard target widths for padded button labels (approx char counts before Discord trimming)
pub const BTN_W_NARROW: usize = 6; // weapon type buttons
pub const BTN_W_STD: usize = 10; // footer actions
pub const BTN_W_PRIMARY: usize = 14; // root menu actions

/// Pads a label to a target visible width using spaces so multi-row action bars align better.
/// Clamped to 2 spaces; Discord collapses longer runs.
pub fn pad_label(label: &str, target_min: usize) -> String {
    let len = label.chars().count();
    if len >= target_min {
        return label.to_string();
    }
    format!("{label}{pad}", pad = " ".repeat((target_min - len).min(2)))
}

pub fn pad_primary(label: &str) -> String {
    pad_label(label, BTN_W_PRIMARY)
}
pub fn pad_std(label: &str) -> String {
    pad_label(label, BTN_W_STD)
}
pub fn pad_narrow(label: &str) -> String {
    pad_label(label, BTN_W_NARROW)
}

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_is_clamped_to_two_spaces() {
        assert_eq!(pad_label("abc", 10), "abc  ");
        assert_eq!(pad_label("abcdefghij", 10), "abcdefghij");
        assert_eq!(pad_label("フデ", 3), "フデ ");
    }
}
