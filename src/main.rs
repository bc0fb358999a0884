use std::sync::Arc;

use anyhow::Context as _;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use splatdraw_bot::catalog::WeaponCatalog;
use splatdraw_bot::config::Config;
use splatdraw_bot::{AppState, handler, health};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,splatdraw_bot=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let catalog = WeaponCatalog::load(&config.weapons_file)
        .context("weapon catalog must be readable at startup")?;

    if let Some(addr) = config.health_bind {
        tokio::spawn(async move {
            if let Err(e) = health::serve(addr).await {
                error!(target = "health", %addr, error = %e, "health listener stopped");
            }
        });
    }

    let guild_id = config.guild_id;
    let token = config.token.clone();
    let app_state = Arc::new(AppState::new(config, catalog));

    // Slash commands and component interactions only need GUILDS.
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler::Handler { guild_id })
        .await
        .context("error creating the Discord client")?;

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    info!("starting gateway connection");
    client.start().await.context("client error")?;
    Ok(())
}
