//! Routes component interactions to the weapon draw handlers.
use super::action::Action;
use crate::AppState;
use crate::commands::weapon::handlers;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn handle(ctx: &Context, component: &ComponentInteraction, app_state: Arc<AppState>) {
    let Some(action) = Action::parse(&component.data.custom_id) else {
        tracing::debug!(target = "router", cid = %component.data.custom_id, "unrecognized action ignored");
        return;
    };
    tracing::debug!(target = "router", user_id = component.user.id.get(), action = ?action);
    let app = app_state.as_ref();
    match action {
        Action::Menu => handlers::show_menu(ctx, component, app).await,
        Action::Retry | Action::DrawSingle => handlers::draw_single(ctx, component, app).await,
        Action::FilterRetry => handlers::draw_same_type(ctx, component, app).await,
        Action::MultiRetry => handlers::group_again(ctx, component, app).await,
        Action::OpenTypeMenu => handlers::open_type_menu(ctx, component).await,
        Action::DrawType(t) => handlers::draw_of_type(ctx, component, app, t).await,
        Action::OpenMultiSelect => handlers::open_multi_select(ctx, component).await,
        Action::MultiSelect => handlers::select_targets(ctx, component, app).await,
        Action::MultiConfirm => handlers::confirm_group(ctx, component, app).await,
        Action::ShowHistory => handlers::show_history(ctx, component, app).await,
        Action::ToggleOverwrite { owner } => {
            handlers::toggle_overwrite(ctx, component, app, owner).await
        }
    }
}
