use twilight_model::{
    application::{command::CommandType, interaction::Interaction},
    channel::message::embed::EmbedField,
    gateway::payload::incoming::MessageCreate,
};
use twilight_util::builder::command::CommandBuilder;

use crate::{CommandMeta, Context};
use pager_core::InteractionRef;

pub const META: CommandMeta = CommandMeta {
    name: "paginator",
    desc: "Paginator Command",
    usage: "!paginator [fields]",
};

const DEFAULT_FIELD_COUNT: usize = 7;
const MAX_FIELD_COUNT: usize = 100;

/// Post a standing paginated message in the invoking channel.
///
/// Inputs:
/// - optional field count: `!paginator [fields]`, 1 to 100, default 7.
///
/// Error behavior:
/// - returns usage text on invalid field count input.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let Some(count) = parse_field_count(arg1) else {
        ctx.http
            .create_message(msg.channel_id)
            .content(&usage_text())
            .await?;
        return Ok(());
    };

    ctx.paginator
        .create_message(
            msg.channel_id,
            "Paginator Using CreateMessage",
            demo_fields(count),
        )
        .await?;

    Ok(())
}

/// Answer `/paginator` with an ephemeral paginated response.
pub async fn run_slash(ctx: Context, interaction: &Interaction) -> anyhow::Result<()> {
    ctx.paginator
        .create_interaction_response(
            InteractionRef::from(interaction),
            "Paginator Using CreateInteractionResponse",
            demo_fields(DEFAULT_FIELD_COUNT),
            true,
        )
        .await?;

    Ok(())
}

/// Chat-input command registered for the interaction variant.
pub fn slash_command() -> twilight_model::application::command::Command {
    CommandBuilder::new(META.name, META.desc, CommandType::ChatInput).build()
}

fn usage_text() -> String {
    format!(
        "Usage: `{}` (between 1 and {MAX_FIELD_COUNT} fields)",
        META.usage
    )
}

fn parse_field_count(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value
            .parse::<usize>()
            .ok()
            .filter(|count| (1..=MAX_FIELD_COUNT).contains(count)),
        None => Some(DEFAULT_FIELD_COUNT),
    }
}

fn demo_fields(count: usize) -> Vec<EmbedField> {
    (1..=count)
        .map(|index| EmbedField {
            inline: false,
            name: format!("Field {index}"),
            value: format!("Value {index}"),
        })
        .collect()
}
