use std::sync::Arc;

use async_trait::async_trait;
use pager_core::{ComponentHandler, InteractionRef, RenderedView, Transport};
use tracing::debug;
use twilight_http::Client;
use twilight_model::{
    channel::message::MessageFlags,
    http::interaction::{InteractionResponse, InteractionResponseType},
    id::{
        Id,
        marker::{ChannelMarker, MessageMarker},
    },
};
use twilight_util::builder::InteractionResponseDataBuilder;

use crate::routes::RouteTable;

/// Paginator transport backed by the Discord HTTP API.
#[derive(Clone)]
pub struct DiscordTransport {
    http: Arc<Client>,
    routes: RouteTable,
}

impl DiscordTransport {
    pub fn new(http: Arc<Client>) -> Self {
        Self {
            http,
            routes: RouteTable::new(),
        }
    }

    /// Routes registered by paginators; the gateway loop dispatches through this.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

#[async_trait]
impl Transport for DiscordTransport {
    async fn send_message(
        &self,
        channel_id: Id<ChannelMarker>,
        view: &RenderedView,
    ) -> anyhow::Result<Id<MessageMarker>> {
        let created = self
            .http
            .create_message(channel_id)
            .embeds(std::slice::from_ref(&view.embed))
            .components(&view.components)
            .await?
            .model()
            .await?;

        Ok(created.id)
    }

    async fn edit_message(
        &self,
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
        view: &RenderedView,
    ) -> anyhow::Result<()> {
        self.http
            .update_message(channel_id, message_id)
            .embeds(Some(std::slice::from_ref(&view.embed)))
            .components(Some(&view.components))
            .await?;

        Ok(())
    }

    async fn respond_to_interaction(
        &self,
        interaction: &InteractionRef,
        view: &RenderedView,
        ephemeral: bool,
    ) -> anyhow::Result<()> {
        let mut data = InteractionResponseDataBuilder::new()
            .embeds(vec![view.embed.clone()])
            .components(view.components.clone());
        if ephemeral {
            data = data.flags(MessageFlags::EPHEMERAL);
        }

        let response = InteractionResponse {
            kind: InteractionResponseType::ChannelMessageWithSource,
            data: Some(data.build()),
        };

        self.http
            .interaction(interaction.application_id)
            .create_response(interaction.interaction_id, &interaction.token, &response)
            .await?;

        Ok(())
    }

    async fn edit_interaction_response(
        &self,
        interaction: &InteractionRef,
        view: &RenderedView,
    ) -> anyhow::Result<()> {
        self.http
            .interaction(interaction.application_id)
            .update_response(&interaction.token)
            .embeds(Some(std::slice::from_ref(&view.embed)))
            .components(Some(&view.components))
            .await?;

        Ok(())
    }

    async fn acknowledge_component(&self, interaction: &InteractionRef) -> anyhow::Result<()> {
        let response = InteractionResponse {
            kind: InteractionResponseType::DeferredUpdateMessage,
            data: None,
        };

        self.http
            .interaction(interaction.application_id)
            .create_response(interaction.interaction_id, &interaction.token, &response)
            .await?;

        Ok(())
    }

    fn register_route(&self, custom_id: String, handler: Arc<dyn ComponentHandler>) {
        debug!(custom_id = %custom_id, "registering component route");
        self.routes.insert(custom_id, handler);
    }

    fn deregister_route(&self, custom_id: &str) {
        if self.routes.remove(custom_id) {
            debug!(custom_id = %custom_id, "removed component route");
        }
    }
}
