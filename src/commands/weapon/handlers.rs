//! Component handlers for the weapon draw flow. Each one takes a routed action,
//! runs it through the draw service and renders the outcome.
use super::ui;
use crate::catalog::{Weapon, WeaponType};
use crate::constants::{MAX_EMBEDS_PER_MESSAGE, SINGLE_IMAGE_NAME, multi_image_name};
use crate::error::DrawError;
use crate::interactions::action::Action;
use crate::interactions::util::{acknowledge, defer_public, ephemeral_notice, respond_component};
use crate::services;
use crate::services::draw::GroupDraw;
use crate::ui::style::{EMOJI_TARGET, MENU_TITLE, error_embed};
use crate::AppState;
use serenity::all::ComponentInteractionDataKind;
use serenity::builder::{
    CreateAttachment, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::model::application::ComponentInteraction;
use serenity::model::channel::MessageFlags;
use serenity::model::id::{ChannelId, MessageId};
use serenity::prelude::Context;
use tracing::{debug, info};

async fn draw_error(ctx: &Context, c: &ComponentInteraction, e: DrawError) {
    debug!(target = "weapon.draw", user_id = c.user.id.get(), error = %e, "draw rejected");
    ephemeral_notice(ctx, c, "draw.err", e.user_message()).await;
}

pub async fn show_menu(ctx: &Context, c: &ComponentInteraction, app_state: &AppState) {
    app_state.refresh_catalog().await;
    let msg = CreateInteractionResponseMessage::new()
        .content(MENU_TITLE)
        .components(ui::root_menu())
        .ephemeral(true);
    respond_component(ctx, c, "menu", CreateInteractionResponse::Message(msg)).await;
}

pub async fn open_type_menu(ctx: &Context, c: &ComponentInteraction) {
    let msg = CreateInteractionResponseMessage::new()
        .content("武器種を選んでください：")
        .components(ui::type_menu())
        .ephemeral(true);
    respond_component(ctx, c, "type_menu", CreateInteractionResponse::Message(msg)).await;
}

pub async fn open_multi_select(ctx: &Context, c: &ComponentInteraction) {
    if c.guild_id.is_none() {
        ephemeral_notice(ctx, c, "multi.dm", "複数人抽選はサーバー内でのみ利用できます。").await;
        return;
    }
    let msg = CreateInteractionResponseMessage::new()
        .content("抽選するユーザーを選択してください：")
        .components(ui::multi_select_menu())
        .ephemeral(true);
    respond_component(ctx, c, "multi_menu", CreateInteractionResponse::Message(msg)).await;
}

pub async fn draw_single(ctx: &Context, c: &ComponentInteraction, app_state: &AppState) {
    match services::draw::single(app_state).await {
        Ok(weapon) => send_single_result(ctx, c, app_state, weapon, None).await,
        Err(e) => draw_error(ctx, c, e).await,
    }
}

pub async fn draw_of_type(
    ctx: &Context,
    c: &ComponentInteraction,
    app_state: &AppState,
    weapon_type: WeaponType,
) {
    match services::draw::of_type(app_state, weapon_type).await {
        Ok(weapon) => send_single_result(ctx, c, app_state, weapon, Some(weapon_type)).await,
        Err(e) => draw_error(ctx, c, e).await,
    }
}

pub async fn draw_same_type(ctx: &Context, c: &ComponentInteraction, app_state: &AppState) {
    match services::draw::same_type_again(app_state, c.user.id.get()).await {
        Ok((weapon, weapon_type)) => {
            send_single_result(ctx, c, app_state, weapon, Some(weapon_type)).await
        }
        Err(e) => draw_error(ctx, c, e).await,
    }
}

async fn send_single_result(
    ctx: &Context,
    c: &ComponentInteraction,
    app_state: &AppState,
    weapon: Weapon,
    filter: Option<WeaponType>,
) {
    let user_id = c.user.id.get();
    let image = match services::draw::record_single(app_state, user_id, &weapon, filter).await {
        Ok(bytes) => bytes,
        Err(path) => {
            ephemeral_notice(
                ctx,
                c,
                "draw.image_missing",
                format!("⚠️ 画像が見つかりません: `{}`", path.display()),
            )
            .await;
            return;
        }
    };
    info!(target = "weapon.draw", user_id, weapon = %weapon.name, filter = ?filter, "weapon drawn");
    let retry = if filter.is_some() {
        Action::FilterRetry
    } else {
        Action::Retry
    };
    let msg = CreateInteractionResponseMessage::new()
        .embed(ui::weapon_embed(&weapon, filter, Some(SINGLE_IMAGE_NAME)))
        .add_file(CreateAttachment::bytes(image, SINGLE_IMAGE_NAME))
        .components(vec![ui::result_footer(retry, None)])
        .ephemeral(true);
    respond_component(ctx, c, "draw.result", CreateInteractionResponse::Message(msg)).await;
}

/// Stores the users picked in the select menu until "抽選開始" is pressed. Bots are dropped.
pub async fn select_targets(ctx: &Context, c: &ComponentInteraction, app_state: &AppState) {
    if let ComponentInteractionDataKind::UserSelect { values } = &c.data.kind {
        let members = services::draw::group_from_selection(values, &c.data.resolved.users);
        debug!(
            target = "weapon.multi",
            owner = c.user.id.get(),
            selected = values.len(),
            kept = members.len(),
            "multi targets selected"
        );
        app_state
            .sessions
            .write()
            .await
            .set_pending_targets(c.user.id.get(), members);
    }
    acknowledge(ctx, c).await;
}

pub async fn confirm_group(ctx: &Context, c: &ComponentInteraction, app_state: &AppState) {
    match services::draw::confirm_group(app_state, c.user.id.get()).await {
        Ok(draws) => send_multi_result(ctx, c, app_state, draws).await,
        Err(e) => draw_error(ctx, c, e).await,
    }
}

pub async fn group_again(ctx: &Context, c: &ComponentInteraction, app_state: &AppState) {
    match services::draw::group_again(app_state, c.user.id.get()).await {
        Ok(draws) => send_multi_result(ctx, c, app_state, draws).await,
        Err(e) => draw_error(ctx, c, e).await,
    }
}

/// Deletes every page of the owner's previous result, plus the message the
/// button sat on when that is a public post not already tracked.
async fn delete_previous_result(ctx: &Context, c: &ComponentInteraction, app_state: &AppState) {
    let owner = c.user.id.get();
    let mut pages = app_state.sessions.write().await.take_result_pages(owner);
    let pressed = (c.channel_id.get(), c.message.id.get());
    let ephemeral = c
        .message
        .flags
        .is_some_and(|f| f.contains(MessageFlags::EPHEMERAL));
    if !ephemeral && !pages.contains(&pressed) {
        pages.push(pressed);
    }
    for (channel_id, message_id) in pages {
        if let Err(e) = ChannelId::new(channel_id)
            .delete_message(ctx, MessageId::new(message_id))
            .await
        {
            debug!(target = "weapon.multi", owner, message_id, error = ?e, "previous result page not deleted");
        }
    }
}

async fn send_multi_result(
    ctx: &Context,
    c: &ComponentInteraction,
    app_state: &AppState,
    draws: Vec<GroupDraw>,
) {
    // Acknowledge before any further request so the 3s token deadline cannot lapse.
    if !defer_public(ctx, c).await {
        return;
    }
    let owner = c.user.id.get();
    let toggle_enabled = app_state.config.overwrite_toggle;
    let prefers_overwrite = app_state.sessions.read().await.overwrite_enabled(owner);
    if toggle_enabled && prefers_overwrite {
        delete_previous_result(ctx, c, app_state).await;
    }

    let mut pages: Vec<(Vec<CreateEmbed>, Vec<CreateAttachment>)> = Vec::new();
    for (i, (member, weapon)) in draws.iter().enumerate() {
        if i % MAX_EMBEDS_PER_MESSAGE == 0 {
            pages.push((Vec::new(), Vec::new()));
        }
        let image_name = multi_image_name(member.user_id);
        let image = services::draw::load_image(app_state, weapon).await;
        let embed = ui::multi_embed(
            &member.display_name,
            weapon,
            image.as_ref().map(|_| image_name.as_str()),
        );
        if let Some(page) = pages.last_mut() {
            page.0.push(embed);
            page.1.extend(image.map(|bytes| CreateAttachment::bytes(bytes, image_name)));
        }
    }

    let mut footer = Some(ui::result_footer(
        Action::MultiRetry,
        toggle_enabled.then_some((owner, prefers_overwrite)),
    ));
    let last = pages.len().saturating_sub(1);
    let mut posted = Vec::with_capacity(pages.len());
    for (i, (embeds, files)) in pages.into_iter().enumerate() {
        let components: Vec<_> = if i == last {
            footer.take().into_iter().collect()
        } else {
            Vec::new()
        };
        let sent = if i == 0 {
            let builder = files.into_iter().fold(
                EditInteractionResponse::new()
                    .content(format!("{EMOJI_TARGET} **複数人武器抽選結果（全体公開）**"))
                    .embeds(embeds)
                    .components(components),
                |b, f| b.new_attachment(f),
            );
            c.edit_response(ctx, builder).await
        } else {
            let followup = CreateInteractionResponseFollowup::new()
                .embeds(embeds)
                .add_files(files)
                .components(components);
            c.create_followup(ctx, followup).await
        };
        match sent {
            Ok(message) => posted.push((message.channel_id.get(), message.id.get())),
            Err(e) => {
                tracing::error!(target = "ui.edit", cid = %c.data.custom_id, page = i, error = ?e, "multi result page failed");
                if i == 0 {
                    // Nothing reached the channel; leave history untouched.
                    return;
                }
            }
        }
    }

    services::draw::record_group(app_state, &draws).await;
    app_state.sessions.write().await.set_result_pages(owner, posted);
    info!(target = "weapon.multi", owner, targets = draws.len(), "group drawn");
}

pub async fn show_history(ctx: &Context, c: &ComponentInteraction, app_state: &AppState) {
    let lines = app_state.sessions.read().await.recent(c.user.id.get());
    if lines.is_empty() {
        ephemeral_notice(ctx, c, "history.empty", "📭 履歴が見つかりません。").await;
        return;
    }
    let msg = CreateInteractionResponseMessage::new()
        .content(ui::history_text(&lines))
        .components(vec![ui::menu_only_row()])
        .ephemeral(true);
    respond_component(ctx, c, "history", CreateInteractionResponse::Message(msg)).await;
}

/// Flips the owner's overwrite preference and relabels the toggle in place.
pub async fn toggle_overwrite(
    ctx: &Context,
    c: &ComponentInteraction,
    app_state: &AppState,
    owner: u64,
) {
    if c.user.id.get() != owner {
        let embed = error_embed("操作できません", "この設定は抽選した本人のみ変更できます。");
        let msg = CreateInteractionResponseMessage::new()
            .embed(embed)
            .ephemeral(true);
        respond_component(ctx, c, "overwrite.denied", CreateInteractionResponse::Message(msg))
            .await;
        return;
    }
    let enabled = app_state.sessions.write().await.toggle_overwrite(owner);
    debug!(target = "weapon.multi", owner, enabled, "overwrite preference toggled");
    acknowledge(ctx, c).await;
    // A plain message edit keeps the result's images; an UpdateMessage response would clear them.
    if let Err(e) = c
        .channel_id
        .edit_message(ctx, c.message.id, ui::overwrite_toggle_edit(owner, enabled))
        .await
    {
        tracing::error!(target = "ui.edit", cid = %c.data.custom_id, error = ?e, "overwrite toggle edit failed");
    }
}
