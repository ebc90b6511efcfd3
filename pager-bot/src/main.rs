mod settings;

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;

use pager_commands::{Context, handle_interaction, handle_message, register_commands};
use pager_core::{Paginator, Registry};
use pager_discord::DiscordTransport;
use settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    let settings = Settings::from_env()?;

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(settings.token.clone()));
    let application_id = http.current_user_application().await?.model().await?.id;

    register_commands(&http, application_id).await?;
    info!("Slash commands registered.");

    let registry = Registry::new();
    let sweeper = registry.spawn_sweeper(settings.sweep_interval);
    let transport = Arc::new(DiscordTransport::new(Arc::clone(&http)));
    let paginator = Paginator::new(&registry, transport.clone(), settings.paginator.clone()).await;

    let ctx = Context::new(Arc::clone(&http), transport, Arc::clone(&paginator));

    let intents = Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::MESSAGE_CONTENT;
    let mut shard = Shard::new(ShardId::new(0, 1), settings.token, intents);

    info!("Paginator bot is connecting...");

    loop {
        let item = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown requested.");
                break;
            }
            item = shard.next_event(EventTypeFlags::all()) => item,
        };

        let Some(item) = item else {
            warn!("gateway event stream ended");
            break;
        };

        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(_) => {
                info!("Paginator bot is ready.");
            }
            Event::MessageCreate(msg) => {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = handle_message(ctx, msg).await {
                        error!(?source, "message handler failed");
                    }
                });
            }
            Event::InteractionCreate(interaction) => {
                let ctx = ctx.clone();
                tokio::spawn(async move {
                    if let Err(source) = handle_interaction(ctx, interaction).await {
                        error!(?source, "interaction handler failed");
                    }
                });
            }
            _ => {} // Ignore unused events
        }
    }

    paginator.close().await;
    sweeper.shutdown().await;
    info!(sessions = registry.len().await, "Paginator bot stopped.");

    Ok(())
}
