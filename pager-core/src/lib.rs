//! Session registry, navigation state and idle expiry for paginated views.
//!
//! A [`Registry`] owns every live [`Paginator`] session. Each session owns the
//! [`PagedMessage`]s it has rendered, and inbound button presses are routed
//! back through a [`Dispatcher`] using the correlation id embedded in each
//! control.

/// Navigation actions carried by the pagination controls.
pub mod action;
/// Paginator configuration and control styling.
pub mod config;
/// Inbound component event routing.
pub mod dispatch;
/// Error type shared by the session operations.
pub mod error;
/// One rendered, navigable view.
pub mod message;
/// Pure pagination math.
pub mod page;
/// Process-wide session registry and the idle sweeper.
pub mod registry;
/// Paginator sessions.
pub mod session;
/// Correlation id encoding for control custom ids.
pub mod token;
/// Capabilities the core needs from the chat transport.
pub mod transport;
/// Embed and control row composition.
pub mod view;

pub use action::NavAction;
pub use config::{ButtonOption, ButtonsConfig, PaginatorConfig};
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use error::{Error, Result};
pub use message::PagedMessage;
pub use page::PageState;
pub use registry::{DEFAULT_SWEEP_INTERVAL, MIN_SWEEP_INTERVAL, Registry, Sweeper};
pub use session::{NavigationOutcome, PageContent, Paginator};
pub use token::CorrelationId;
pub use transport::{
    ComponentEvent, ComponentHandler, Destination, InteractionRef, MessageTarget, Transport,
};
pub use view::RenderedView;
