#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use pager_core::{ComponentEvent, ComponentHandler, InteractionRef, RenderedView, Transport};
use twilight_model::{
    channel::message::{component::Component, embed::EmbedField},
    id::{
        Id,
        marker::{ChannelMarker, MessageMarker},
    },
};

#[derive(Clone, Debug)]
pub enum Call {
    Send {
        channel_id: Id<ChannelMarker>,
        view: RenderedView,
    },
    Edit {
        message_id: Id<MessageMarker>,
        view: RenderedView,
    },
    Respond {
        ephemeral: bool,
        view: RenderedView,
    },
    EditResponse {
        view: RenderedView,
    },
    Acknowledge,
}

/// In-memory transport recording every call.
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    routes: Mutex<HashMap<String, Arc<dyn ComponentHandler>>>,
    deregistered: Mutex<Vec<String>>,
    fail_sends: AtomicBool,
    fail_edits: AtomicBool,
    edit_delay_ms: AtomicU64,
    send_delay_ms: AtomicU64,
    next_message_id: AtomicU64,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    pub fn fail_edits(&self, fail: bool) {
        self.fail_edits.store(fail, Ordering::SeqCst);
    }

    pub fn set_edit_delay(&self, delay: Duration) {
        self.edit_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Hold every send and initial response for `delay`.
    pub fn set_send_delay(&self, delay: Duration) {
        self.send_delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_view(&self) -> Option<RenderedView> {
        self.calls().into_iter().rev().find_map(|call| match call {
            Call::Send { view, .. }
            | Call::Edit { view, .. }
            | Call::Respond { view, .. }
            | Call::EditResponse { view } => Some(view),
            Call::Acknowledge => None,
        })
    }

    pub fn route_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.routes.lock().unwrap().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn deregistered(&self) -> Vec<String> {
        self.deregistered.lock().unwrap().clone()
    }

    /// Deliver a button press the way the gateway loop would.
    pub async fn press(&self, custom_id: &str, interaction: InteractionRef) -> bool {
        let handler = self.routes.lock().unwrap().get(custom_id).cloned();
        let Some(handler) = handler else {
            return false;
        };

        handler
            .handle(ComponentEvent {
                custom_id: custom_id.to_owned(),
                interaction,
            })
            .await;
        true
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn send_result(&self, rejection: &'static str) -> anyhow::Result<()> {
        let delay = self.send_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        if self.fail_sends.load(Ordering::SeqCst) {
            anyhow::bail!(rejection);
        }
        Ok(())
    }

    async fn edit_result(&self) -> anyhow::Result<()> {
        let delay = self.edit_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        if self.fail_edits.load(Ordering::SeqCst) {
            anyhow::bail!("edit rejected");
        }
        Ok(())
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_message(
        &self,
        channel_id: Id<ChannelMarker>,
        view: &RenderedView,
    ) -> anyhow::Result<Id<MessageMarker>> {
        self.send_result("send rejected").await?;

        self.record(Call::Send {
            channel_id,
            view: view.clone(),
        });
        let id = self.next_message_id.fetch_add(1, Ordering::SeqCst) + 1_000;
        Ok(Id::new(id))
    }

    async fn edit_message(
        &self,
        _channel_id: Id<ChannelMarker>,
        message_id: Id<MessageMarker>,
        view: &RenderedView,
    ) -> anyhow::Result<()> {
        self.record(Call::Edit {
            message_id,
            view: view.clone(),
        });
        self.edit_result().await
    }

    async fn respond_to_interaction(
        &self,
        _interaction: &InteractionRef,
        view: &RenderedView,
        ephemeral: bool,
    ) -> anyhow::Result<()> {
        self.send_result("response rejected").await?;

        self.record(Call::Respond {
            ephemeral,
            view: view.clone(),
        });
        Ok(())
    }

    async fn edit_interaction_response(
        &self,
        _interaction: &InteractionRef,
        view: &RenderedView,
    ) -> anyhow::Result<()> {
        self.record(Call::EditResponse { view: view.clone() });
        self.edit_result().await
    }

    async fn acknowledge_component(&self, _interaction: &InteractionRef) -> anyhow::Result<()> {
        self.record(Call::Acknowledge);
        Ok(())
    }

    fn register_route(&self, custom_id: String, handler: Arc<dyn ComponentHandler>) {
        self.routes.lock().unwrap().insert(custom_id, handler);
    }

    fn deregister_route(&self, custom_id: &str) {
        self.routes.lock().unwrap().remove(custom_id);
        self.deregistered.lock().unwrap().push(custom_id.to_owned());
    }
}

pub fn interaction() -> InteractionRef {
    InteractionRef {
        application_id: Id::new(1),
        interaction_id: Id::new(2),
        token: "interaction-token".to_owned(),
        channel_id: Some(Id::new(1_135_713_066_164_703_232)),
    }
}

pub fn channel() -> Id<ChannelMarker> {
    Id::new(1_135_713_066_164_703_232)
}

pub fn fields(count: usize) -> Vec<EmbedField> {
    (1..=count)
        .map(|n| EmbedField {
            inline: false,
            name: format!("Field {n}"),
            value: format!("Value {n}"),
        })
        .collect()
}

pub fn field_names(view: &RenderedView) -> Vec<String> {
    view.embed.fields.iter().map(|f| f.name.clone()).collect()
}

pub fn footer(view: &RenderedView) -> Option<String> {
    view.embed.footer.as_ref().map(|f| f.text.clone())
}

/// `(custom_id, disabled)` for every button in the view.
pub fn buttons(view: &RenderedView) -> Vec<(String, bool)> {
    view.components
        .iter()
        .flat_map(|component| match component {
            Component::ActionRow(row) => row.components.clone(),
            other => vec![other.clone()],
        })
        .filter_map(|component| match component {
            Component::Button(button) => Some((button.custom_id.unwrap_or_default(), button.disabled)),
            _ => None,
        })
        .collect()
}

pub fn custom_id(paginator_id: &str, message_id: &str, action: &str) -> String {
    format!("paginator:{paginator_id}:{message_id}:{action}")
}
