mod context;
pub mod utility;

pub use context::Context;

use tracing::debug;
use twilight_http::Client;
use twilight_model::{
    application::interaction::InteractionData,
    gateway::payload::incoming::{InteractionCreate, MessageCreate},
    id::{Id, marker::ApplicationMarker},
};

use pager_discord::component_event;

/// Prefix for message commands.
pub const COMMAND_PREFIX: char = '!';

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum InteractionRoute {
    PaginatorCommand,
    Component,
}

fn route_interaction(data: &InteractionData) -> Option<InteractionRoute> {
    match data {
        InteractionData::ApplicationCommand(command)
            if command.name == utility::paginator::META.name =>
        {
            Some(InteractionRoute::PaginatorCommand)
        }
        InteractionData::MessageComponent(_) => Some(InteractionRoute::Component),
        _ => None,
    }
}

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub usage: &'static str,
}

/// Overwrite the global application commands with this bot's slash commands.
pub async fn register_commands(
    http: &Client,
    application_id: Id<ApplicationMarker>,
) -> anyhow::Result<()> {
    let commands = [utility::paginator::slash_command()];

    http.interaction(application_id)
        .set_global_commands(&commands)
        .await?;

    Ok(())
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let Some(content) = msg.content.trim().strip_prefix(COMMAND_PREFIX) else {
        return Ok(());
    };

    let mut args = content.split_whitespace();
    let cmd = args.next().unwrap_or("").to_ascii_lowercase();
    let arg1 = args.next().map(ToOwned::to_owned);

    match cmd.as_str() {
        "paginator" => utility::paginator::run(ctx.clone(), msg, arg1.as_deref()).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<()> {
    let Some(route) = interaction.data.as_ref().and_then(route_interaction) else {
        return Ok(());
    };

    match route {
        InteractionRoute::PaginatorCommand => {
            utility::paginator::run_slash(ctx.clone(), &interaction).await?;
        }
        InteractionRoute::Component => {
            let Some(event) = component_event(&interaction) else {
                return Ok(());
            };

            let custom_id = event.custom_id.clone();
            if !ctx.transport.routes().route(event).await {
                debug!(custom_id = %custom_id, "ignoring component without a route");
            }
        }
    }

    Ok(())
}
