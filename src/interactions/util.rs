//! Shared interaction utility helpers (logged responses, ephemeral notices).
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;

/// Send the initial response to a component interaction; logs failure with a tag for observability.
pub async fn respond_component(
    ctx: &Context,
    c: &ComponentInteraction,
    tag: &str,
    response: CreateInteractionResponse,
) {
    if let Err(e) = c.create_response(&ctx.http, response).await {
        tracing::error!(target="ui.respond", cid=%c.data.custom_id, tag=%tag, error=?e, "create_response failed");
    }
}

/// Reply with a short message only the presser can see.
pub async fn ephemeral_notice(ctx: &Context, c: &ComponentInteraction, tag: &str, text: impl Into<String>) {
    respond_component(
        ctx,
        c,
        tag,
        CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(text)
                .ephemeral(true),
        ),
    )
    .await;
}

/// Acknowledge without changing the message (select menu value changes).
pub async fn acknowledge(ctx: &Context, c: &ComponentInteraction) {
    if let Err(e) = c
        .create_response(&ctx.http, CreateInteractionResponse::Acknowledge)
        .await
    {
        tracing::debug!(target="ui.ack", cid=%c.data.custom_id, error=?e, "acknowledge failed (already acknowledged?)");
    }
}

/// Start a public reply that is filled in later with `edit_response`.
/// Returns false when the interaction could not be acknowledged (token expired).
pub async fn defer_public(ctx: &Context, c: &ComponentInteraction) -> bool {
    match c
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new()),
        )
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(target="ui.defer", cid=%c.data.custom_id, error=?e, "defer failed");
            false
        }
    }
}
