//! Capabilities the core needs from the chat transport.
//!
//! The core never talks to Discord directly. It renders a [`RenderedView`] and
//! hands it to a [`Transport`], and it relies on the transport's keyed route
//! table to deliver button presses back as [`ComponentEvent`]s.

use std::sync::Arc;

use async_trait::async_trait;
use twilight_model::{
    application::interaction::Interaction,
    id::{
        Id,
        marker::{ApplicationMarker, ChannelMarker, InteractionMarker, MessageMarker},
    },
};

use crate::view::RenderedView;

/// What is needed to answer or edit an interaction response.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InteractionRef {
    pub application_id: Id<ApplicationMarker>,
    pub interaction_id: Id<InteractionMarker>,
    pub token: String,
    pub channel_id: Option<Id<ChannelMarker>>,
}

impl From<&Interaction> for InteractionRef {
    fn from(interaction: &Interaction) -> Self {
        Self {
            application_id: interaction.application_id,
            interaction_id: interaction.id,
            token: interaction.token.clone(),
            channel_id: interaction.channel.as_ref().map(|channel| channel.id),
        }
    }
}

/// Where a new paginated view is sent.
#[derive(Clone, Debug)]
pub enum Destination {
    /// A standing message posted in a channel.
    Channel(Id<ChannelMarker>),
    /// The response to an application command interaction.
    Interaction {
        interaction: InteractionRef,
        ephemeral: bool,
    },
}

/// The sent view a message keeps editing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MessageTarget {
    Standing {
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
    },
    Interactive {
        interaction: InteractionRef,
    },
}

/// An inbound button press.
#[derive(Clone, Debug)]
pub struct ComponentEvent {
    pub custom_id: String,
    pub interaction: InteractionRef,
}

/// Callback the transport invokes for a registered custom id.
#[async_trait]
pub trait ComponentHandler: Send + Sync {
    async fn handle(&self, event: ComponentEvent);
}

/// Messaging operations a paginator needs.
///
/// Implementations apply their own request timeouts; a call that never
/// returns holds the owning session's lock.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Post a new message and return its id.
    async fn send_message(
        &self,
        channel_id: Id<ChannelMarker>,
        view: &RenderedView,
    ) -> anyhow::Result<Id<MessageMarker>>;

    /// Replace the embed and components of a standing message.
    async fn edit_message(
        &self,
        channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
        view: &RenderedView,
    ) -> anyhow::Result<()>;

    /// Answer an interaction with a new view.
    async fn respond_to_interaction(
        &self,
        interaction: &InteractionRef,
        view: &RenderedView,
        ephemeral: bool,
    ) -> anyhow::Result<()>;

    /// Replace the original response of an interaction.
    async fn edit_interaction_response(
        &self,
        interaction: &InteractionRef,
        view: &RenderedView,
    ) -> anyhow::Result<()>;

    /// Acknowledge a button press; the message is edited separately.
    async fn acknowledge_component(&self, interaction: &InteractionRef) -> anyhow::Result<()>;

    /// Route presses of `custom_id` to `handler`.
    fn register_route(&self, custom_id: String, handler: Arc<dyn ComponentHandler>);

    /// Stop routing presses of `custom_id`.
    fn deregister_route(&self, custom_id: &str);
}
