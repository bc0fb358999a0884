//! Embed and component builders for the weapon draw screens.
use crate::catalog::{Weapon, WeaponType};
use crate::constants::{HISTORY_VIEW_LEN, MAX_BUTTONS_PER_ROW, MAX_MULTI_TARGETS};
use crate::interactions::action::Action;
use crate::interactions::ids;
use crate::session::HistoryLine;
use crate::ui::buttons::{
    Width, action_button, menu_button, overwrite_toggle, retry_button, type_button,
};
use crate::ui::style::{
    COLOR_MULTI, COLOR_RESULT, EMOJI_DICE, EMOJI_FILTER, EMOJI_GROUP, EMOJI_HISTORY, EMOJI_TARGET,
};
use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateSelectMenu, CreateSelectMenuKind, EditMessage,
};
use serenity::model::application::ButtonStyle;

pub fn root_menu() -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(vec![
        action_button(
            Action::DrawSingle,
            &format!("{EMOJI_DICE} 1つ引く"),
            ButtonStyle::Primary,
            Width::Wide,
        ),
        action_button(
            Action::OpenTypeMenu,
            &format!("{EMOJI_FILTER} 武器種で絞って引く"),
            ButtonStyle::Secondary,
            Width::Wide,
        ),
        action_button(
            Action::OpenMultiSelect,
            &format!("{EMOJI_GROUP} 複数人で引く"),
            ButtonStyle::Success,
            Width::Wide,
        ),
        action_button(
            Action::ShowHistory,
            &format!("{EMOJI_HISTORY} 履歴を表示する"),
            ButtonStyle::Secondary,
            Width::Wide,
        ),
    ])]
}

/// One button per weapon type, at most five per row.
pub fn type_menu() -> Vec<CreateActionRow> {
    WeaponType::ALL
        .chunks(MAX_BUTTONS_PER_ROW)
        .map(|chunk| CreateActionRow::Buttons(chunk.iter().copied().map(type_button).collect()))
        .collect()
}

pub fn multi_select_menu() -> Vec<CreateActionRow> {
    let select = CreateSelectMenu::new(
        ids::MULTI_SELECT,
        CreateSelectMenuKind::User {
            default_users: None,
        },
    )
    .placeholder(format!("ユーザーを選択（最大{MAX_MULTI_TARGETS}人）"))
    .min_values(1)
    .max_values(MAX_MULTI_TARGETS as u8);
    vec![
        CreateActionRow::SelectMenu(select),
        CreateActionRow::Buttons(vec![action_button(
            Action::MultiConfirm,
            "抽選開始",
            ButtonStyle::Primary,
            Width::Wide,
        )]),
    ]
}

fn weapon_description(weapon: &Weapon) -> String {
    format!(
        "**{}**\nサブ: {}\nスペシャル: {}\nスペシャルポイント: {}",
        weapon.name, weapon.sub_name, weapon.special_name, weapon.special_point
    )
}

pub fn result_title(filter: Option<WeaponType>) -> String {
    match filter {
        Some(t) => format!("{EMOJI_TARGET} 武器抽選結果（タイプ: {}）", t.as_str()),
        None => format!("{EMOJI_TARGET} 武器抽選結果"),
    }
}

/// Single/filtered result; `image` is the attachment name when one is sent.
pub fn weapon_embed(weapon: &Weapon, filter: Option<WeaponType>, image: Option<&str>) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title(result_title(filter))
        .description(weapon_description(weapon))
        .color(COLOR_RESULT);
    match image {
        Some(name) => embed.image(format!("attachment://{name}")),
        None => embed,
    }
}

pub fn multi_embed(display_name: &str, weapon: &Weapon, image: Option<&str>) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title(format!("{display_name} の武器抽選結果"))
        .description(weapon_description(weapon))
        .color(COLOR_MULTI);
    match image {
        Some(name) => embed.image(format!("attachment://{name}")),
        None => embed,
    }
}

/// "Draw again" + "menu", plus the overwrite toggle on multi-draw results.
/// `overwrite` is `(owner id, current setting)`.
pub fn result_footer(retry: Action, overwrite: Option<(u64, bool)>) -> CreateActionRow {
    let mut buttons = vec![retry_button(retry), menu_button()];
    if let Some((owner, enabled)) = overwrite {
        buttons.push(overwrite_toggle(owner, enabled));
    }
    CreateActionRow::Buttons(buttons)
}

/// Relabels the toggle on a posted group result. Only components are sent,
/// so the result's image attachments stay in place.
pub fn overwrite_toggle_edit(owner: u64, enabled: bool) -> EditMessage {
    EditMessage::new().components(vec![result_footer(
        Action::MultiRetry,
        Some((owner, enabled)),
    )])
}

pub fn menu_only_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![menu_button()])
}

pub fn history_text(lines: &[HistoryLine]) -> String {
    let body = lines
        .iter()
        .map(|l| {
            let back = format!("{}個前", l.back);
            match l.filter {
                Some(t) => format!("{back:>6}. {}（{}）", l.weapon_name, t.as_str()),
                None => format!("{back:>6}. {}", l.weapon_name),
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("🗂 **最近の履歴（最大{HISTORY_VIEW_LEN}件）**\n{body}")
}
