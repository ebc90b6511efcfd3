//! Paginator sessions.
//!
//! A [`Paginator`] is a named set of messages sharing one configuration. All
//! message mutation happens under the session's lock, including the
//! transport calls that publish it, so actions against one message are
//! applied strictly in lock order.

use std::{
    collections::HashMap,
    sync::{
        Arc, Weak,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};

use tokio::{sync::Mutex, time::Instant};
use tracing::{debug, error};
use twilight_model::{
    channel::message::embed::EmbedField,
    id::{Id, marker::ChannelMarker},
};
use uuid::Uuid;

use crate::action::NavAction;
use crate::config::PaginatorConfig;
use crate::error::{Error, Result};
use crate::message::PagedMessage;
use crate::registry::Registry;
use crate::transport::{
    ComponentHandler, Destination, InteractionRef, MessageTarget, Transport,
};
use crate::view::RenderedView;

/// Content of a new paginated message.
#[derive(Clone, Debug)]
pub struct PageContent {
    pub title: String,
    pub fields: Vec<EmbedField>,
}

impl PageContent {
    pub fn new(title: impl Into<String>, fields: Vec<EmbedField>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }
}

/// Result of applying a navigation action.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavigationOutcome {
    /// The message was already retired or never existed.
    UnknownMessage,
    /// The cursor now points at `page`.
    Moved { page: usize },
    /// The message was stopped and removed.
    Retired,
}

/// A paginator session.
pub struct Paginator {
    id: String,
    config: PaginatorConfig,
    transport: Arc<dyn Transport>,
    handler: Arc<dyn ComponentHandler>,
    registry: Weak<Registry>,
    messages: Mutex<HashMap<String, PagedMessage>>,
    closed: AtomicBool,
    sequence: AtomicU64,
}

impl Paginator {
    /// Create a paginator and register it with `registry`.
    pub async fn new(
        registry: &Arc<Registry>,
        transport: Arc<dyn Transport>,
        config: PaginatorConfig,
    ) -> Arc<Self> {
        let paginator = Arc::new(Self {
            id: Uuid::now_v7().simple().to_string(),
            config: config.resolve(),
            transport,
            handler: Arc::new(registry.dispatcher()),
            registry: Arc::downgrade(registry),
            messages: Mutex::new(HashMap::new()),
            closed: AtomicBool::new(false),
            sequence: AtomicU64::new(0),
        });

        registry.register(Arc::clone(&paginator)).await;

        debug!(
            paginator = %paginator.id,
            items_per_page = paginator.config.items_per_page,
            idle_wait = ?paginator.config.idle_wait,
            "created new paginator"
        );
        paginator
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// Whether [`close`](Self::close) has run. A closed paginator renders nothing.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Send a standing paginated message to a channel.
    pub async fn create_message(
        &self,
        channel_id: Id<ChannelMarker>,
        title: impl Into<String>,
        fields: Vec<EmbedField>,
    ) -> Result<String> {
        self.render(PageContent::new(title, fields), Destination::Channel(channel_id))
            .await
    }

    /// Answer an interaction with a paginated response.
    pub async fn create_interaction_response(
        &self,
        interaction: InteractionRef,
        title: impl Into<String>,
        fields: Vec<EmbedField>,
        ephemeral: bool,
    ) -> Result<String> {
        self.render(
            PageContent::new(title, fields),
            Destination::Interaction {
                interaction,
                ephemeral,
            },
        )
        .await
    }

    /// Render `content` at page 0 to `destination` and start tracking it.
    ///
    /// Returns the new message id. The message is tracked and its routes
    /// are live before the send, so an early press is not lost. If the
    /// transport fails nothing is kept: the message is dropped and its
    /// routes are deregistered. A closed paginator rejects the render; one
    /// closed while the send is in flight disables the sent message and
    /// rejects it too.
    pub async fn render(&self, content: PageContent, destination: Destination) -> Result<String> {
        if self.is_closed() {
            return Err(Error::Closed(self.id.clone()));
        }

        let channel = match &destination {
            Destination::Channel(channel_id) => Some(*channel_id),
            Destination::Interaction { interaction, .. } => interaction.channel_id,
        };
        let message = PagedMessage::new(
            self.next_message_id(channel),
            content.title,
            content.fields,
            self.config.idle_wait,
        );
        let message_id = message.id().to_owned();
        let view = message.view(&self.config, &self.id, false)?;

        {
            let mut messages = self.messages.lock().await;
            if self.is_closed() {
                return Err(Error::Closed(self.id.clone()));
            }
            self.register_routes(&message);
            messages.insert(message_id.clone(), message.clone());
        }

        let sent = match destination {
            Destination::Channel(channel_id) => self
                .transport
                .send_message(channel_id, &view)
                .await
                .map(|message_id| MessageTarget::Standing {
                    channel_id,
                    message_id,
                }),
            Destination::Interaction {
                interaction,
                ephemeral,
            } => self
                .transport
                .respond_to_interaction(&interaction, &view, ephemeral)
                .await
                .map(|()| MessageTarget::Interactive { interaction }),
        };

        let mut messages = self.messages.lock().await;

        let target = match sent {
            Ok(target) => target,
            Err(source) => {
                error!(
                    ?source,
                    paginator = %self.id,
                    message = %message_id,
                    "error sending paginated message"
                );
                messages.remove(&message_id);
                self.deregister_routes(&message);
                return Err(source.into());
            }
        };

        let Some(tracked) = messages.get_mut(&message_id) else {
            // Retired by close, stop or sweep before the send landed; that
            // retire had nothing to edit yet.
            let mut retired = message;
            retired.set_target(target);
            let _ = self.retire(&retired).await;

            if self.is_closed() {
                return Err(Error::Closed(self.id.clone()));
            }
            return Ok(message_id);
        };

        tracked.set_target(target);
        if tracked.current_page() != 0
            && let Err(source) = self.publish_current(tracked).await
        {
            error!(
                ?source,
                paginator = %self.id,
                message = %message_id,
                "error editing paginated message"
            );
        }

        debug!(
            paginator = %self.id,
            message = %message_id,
            "created paginated message"
        );
        Ok(message_id)
    }

    /// Apply `action` to one message and publish the new page.
    ///
    /// A transport failure is returned after the new state is committed; the
    /// next successful render brings the sent view back in line.
    pub async fn navigate(
        &self,
        message_id: &str,
        action: NavAction,
        interaction: &InteractionRef,
    ) -> Result<NavigationOutcome> {
        let mut messages = self.messages.lock().await;

        if action == NavAction::Stop {
            let Some(message) = messages.remove(message_id) else {
                debug!(paginator = %self.id, message = %message_id, "message not found");
                return Ok(NavigationOutcome::UnknownMessage);
            };

            self.acknowledge(interaction).await;
            self.retire(&message).await?;
            return Ok(NavigationOutcome::Retired);
        }

        let Some(message) = messages.get_mut(message_id) else {
            debug!(paginator = %self.id, message = %message_id, "message not found");
            return Ok(NavigationOutcome::UnknownMessage);
        };

        let page = message.apply(action, self.config.items_per_page);
        message.touch(self.config.idle_wait);

        self.acknowledge(interaction).await;
        if let Err(source) = self.publish_current(message).await {
            error!(
                ?source,
                paginator = %self.id,
                message = %message_id,
                "error editing paginated message"
            );
            return Err(source);
        }

        debug!(
            paginator = %self.id,
            message = %message_id,
            action = %action,
            page,
            "edited paginated message"
        );
        Ok(NavigationOutcome::Moved { page })
    }

    /// Disable every message and unregister this paginator.
    ///
    /// Transport errors are logged per message and do not stop the close.
    /// Later renders are rejected with [`Error::Closed`].
    pub async fn close(&self) {
        let retired = {
            let mut messages = self.messages.lock().await;
            self.closed.store(true, Ordering::Release);
            let drained: Vec<PagedMessage> = messages.drain().map(|(_, message)| message).collect();
            for message in &drained {
                // Already logged inside retire.
                let _ = self.retire(message).await;
            }
            drained.len()
        };

        if let Some(registry) = self.registry.upgrade() {
            registry.unregister(&self.id).await;
        }

        debug!(
            paginator = %self.id,
            retired,
            "closed paginator"
        );
    }

    /// Retire every message whose idle period has passed.
    ///
    /// Returns how many messages were removed.
    pub async fn sweep(&self) -> usize {
        let mut messages = self.messages.lock().await;
        let now = Instant::now();

        let expired: Vec<String> = messages
            .values()
            .filter(|message| message.has_expired(now))
            .map(|message| message.id().to_owned())
            .collect();

        for message_id in &expired {
            if let Some(message) = messages.remove(message_id) {
                let _ = self.retire(&message).await;
            }
        }

        if !expired.is_empty() {
            debug!(
                paginator = %self.id,
                expired = expired.len(),
                remaining = messages.len(),
                "swept expired paginated messages"
            );
        }
        expired.len()
    }

    pub async fn message_count(&self) -> usize {
        self.messages.lock().await.len()
    }

    pub async fn contains_message(&self, message_id: &str) -> bool {
        self.messages.lock().await.contains_key(message_id)
    }

    /// Current page of a tracked message.
    pub async fn current_page(&self, message_id: &str) -> Option<usize> {
        self.messages
            .lock()
            .await
            .get(message_id)
            .map(PagedMessage::current_page)
    }

    /// Ids of every tracked message.
    pub async fn message_ids(&self) -> Vec<String> {
        self.messages.lock().await.keys().cloned().collect()
    }

    /// Re-render with every control disabled and stop routing its presses.
    ///
    /// Routes are removed even when the edit fails.
    async fn retire(&self, message: &PagedMessage) -> Result<()> {
        let published = match message.view(&self.config, &self.id, true) {
            Ok(view) => self.publish(message, &view).await.map_err(Error::from),
            Err(source) => Err(source.into()),
        };
        self.deregister_routes(message);

        if let Err(source) = published {
            error!(
                ?source,
                paginator = %self.id,
                message = %message.id(),
                "error disabling paginated message"
            );
            return Err(source);
        }

        debug!(
            paginator = %self.id,
            message = %message.id(),
            "disabled paginated message"
        );
        Ok(())
    }

    async fn publish_current(&self, message: &PagedMessage) -> Result<()> {
        let view = message.view(&self.config, &self.id, false)?;
        self.publish(message, &view).await?;
        Ok(())
    }

    async fn publish(
        &self,
        message: &PagedMessage,
        view: &RenderedView,
    ) -> anyhow::Result<()> {
        match message.target() {
            Some(MessageTarget::Standing {
                channel_id,
                message_id,
            }) => {
                self.transport
                    .edit_message(*channel_id, *message_id, view)
                    .await
            }
            Some(MessageTarget::Interactive { interaction }) => {
                self.transport
                    .edit_interaction_response(interaction, view)
                    .await
            }
            None => Ok(()),
        }
    }

    async fn acknowledge(&self, interaction: &InteractionRef) {
        if let Err(source) = self.transport.acknowledge_component(interaction).await {
            error!(
                ?source,
                paginator = %self.id,
                "error acknowledging pagination button"
            );
        }
    }

    fn register_routes(&self, message: &PagedMessage) {
        for custom_id in message.custom_ids(&self.config, &self.id) {
            self.transport
                .register_route(custom_id, Arc::clone(&self.handler));
        }
    }

    fn deregister_routes(&self, message: &PagedMessage) {
        for custom_id in message.custom_ids(&self.config, &self.id) {
            self.transport.deregister_route(&custom_id);
        }
    }

    fn next_message_id(&self, channel_id: Option<Id<ChannelMarker>>) -> String {
        let channel = channel_id.map_or(0, |id| id.get());
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{channel}-{nanos}-{sequence}")
    }
}

impl std::fmt::Debug for Paginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
