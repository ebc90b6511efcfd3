//! Inbound component event routing.

use std::sync::Weak;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::action::NavAction;
use crate::registry::Registry;
use crate::session::NavigationOutcome;
use crate::token::CorrelationId;
use crate::transport::{ComponentEvent, ComponentHandler};

/// What happened to an inbound component event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DispatchOutcome {
    /// The custom id was not a correlation id.
    Malformed,
    /// The action token is not a navigation action.
    UnknownAction,
    /// No paginator with that id is registered.
    UnknownSession,
    /// The registry is gone; the process is shutting down.
    RegistryClosed,
    /// The paginator applied the action.
    Handled(NavigationOutcome),
    /// The action was applied but publishing it failed.
    Failed,
}

/// Routes button presses to the paginator and message that rendered them.
///
/// Holds the registry weakly so routes stored inside a transport do not keep
/// the registry alive.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    registry: Weak<Registry>,
}

impl Dispatcher {
    pub fn new(registry: Weak<Registry>) -> Self {
        Self { registry }
    }

    pub async fn dispatch(&self, event: ComponentEvent) -> DispatchOutcome {
        let Some(id) = CorrelationId::decode(&event.custom_id) else {
            debug!(custom_id = %event.custom_id, "ignoring malformed custom id");
            return DispatchOutcome::Malformed;
        };

        let Some(action) = NavAction::parse(&id.action) else {
            debug!(custom_id = %event.custom_id, "ignoring unknown pagination action");
            return DispatchOutcome::UnknownAction;
        };

        let Some(registry) = self.registry.upgrade() else {
            return DispatchOutcome::RegistryClosed;
        };

        let Some(paginator) = registry.lookup(&id.session_id).await else {
            debug!(paginator = %id.session_id, "paginator not found");
            return DispatchOutcome::UnknownSession;
        };

        match paginator
            .navigate(&id.message_id, action, &event.interaction)
            .await
        {
            Ok(outcome) => DispatchOutcome::Handled(outcome),
            Err(source) => {
                error!(
                    ?source,
                    paginator = %id.session_id,
                    message = %id.message_id,
                    action = %action,
                    "error applying pagination action"
                );
                DispatchOutcome::Failed
            }
        }
    }
}

#[async_trait]
impl ComponentHandler for Dispatcher {
    async fn handle(&self, event: ComponentEvent) {
        self.dispatch(event).await;
    }
}
