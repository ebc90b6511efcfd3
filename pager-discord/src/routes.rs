//! Keyed handler table consulted when a component interaction arrives.

use std::sync::Arc;

use dashmap::DashMap;
use pager_core::{ComponentEvent, ComponentHandler, InteractionRef};
use tracing::debug;
use twilight_model::application::interaction::{Interaction, InteractionData};

/// Registered component handlers, keyed by exact custom id.
#[derive(Clone, Default)]
pub struct RouteTable {
    handlers: Arc<DashMap<String, Arc<dyn ComponentHandler>>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, custom_id: String, handler: Arc<dyn ComponentHandler>) {
        self.handlers.insert(custom_id, handler);
    }

    pub fn remove(&self, custom_id: &str) -> bool {
        self.handlers.remove(custom_id).is_some()
    }

    pub fn get(&self, custom_id: &str) -> Option<Arc<dyn ComponentHandler>> {
        self.handlers
            .get(custom_id)
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, custom_id: &str) -> bool {
        self.handlers.contains_key(custom_id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Hand `event` to its registered handler.
    ///
    /// Returns `false` when nothing is registered for the custom id.
    pub async fn route(&self, event: ComponentEvent) -> bool {
        // Clone the handler out so no map shard stays locked while it runs.
        let Some(handler) = self.get(&event.custom_id) else {
            debug!(custom_id = %event.custom_id, "no route for component");
            return false;
        };

        handler.handle(event).await;
        true
    }
}

/// Build a component event from a message-component interaction.
pub fn component_event(interaction: &Interaction) -> Option<ComponentEvent> {
    let Some(InteractionData::MessageComponent(data)) = interaction.data.as_ref() else {
        return None;
    };

    Some(ComponentEvent {
        custom_id: data.custom_id.clone(),
        interaction: InteractionRef::from(interaction),
    })
}
