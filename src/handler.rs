use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command, Interaction};
use serenity::model::{gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use tracing::{error, info, warn};

pub struct Handler {
    /// Guild for command registration; `None` registers globally.
    pub guild_id: Option<GuildId>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => match command.data.name.as_str() {
                "weapon" => commands::weapon::run::run_slash(&ctx, &command).await,
                other => warn!(target = "handler", command = other, "unknown slash command"),
            },
            Interaction::Component(component) => {
                let Some(app_state) = AppState::from_ctx(&ctx).await else {
                    error!(target = "handler", "AppState missing from client data");
                    return;
                };
                interactions::router::handle(&ctx, &component, app_state).await;
            }
            _ => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected and ready!", ready.user.name);
        let commands_to_register = vec![commands::weapon::run::register()];
        let result = match self.guild_id {
            Some(guild_id) => guild_id
                .set_commands(&ctx.http, commands_to_register)
                .await
                .map(|_| ()),
            None => Command::set_global_commands(&ctx.http, commands_to_register)
                .await
                .map(|_| ()),
        };
        match result {
            Ok(()) => info!(target = "handler", guild = ?self.guild_id, "registered slash commands"),
            Err(e) => error!(target = "handler", error = ?e, "error registering slash commands"),
        }
    }
}
