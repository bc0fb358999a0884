//! The `/weapon` slash command: opens the draw menu for the invoking user.
use super::ui;
use crate::AppState;
use crate::ui::style::MENU_TITLE;
use serenity::builder::{CreateCommand, CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::CommandInteraction;
use serenity::prelude::*;
use tracing::{error, warn};

pub fn register() -> CreateCommand {
    CreateCommand::new("weapon").description("スプラトゥーン3の武器抽選メニューを表示します")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        warn!(command = "weapon", "missing_app_state");
        return;
    };
    app_state.refresh_catalog().await;
    let builder = CreateInteractionResponseMessage::new()
        .content(MENU_TITLE)
        .components(ui::root_menu())
        .ephemeral(true);
    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
    {
        error!(target = "ui.respond", command = "weapon", error = ?e, "failed to open menu");
    }
}
