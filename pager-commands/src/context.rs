use std::sync::Arc;

use pager_core::Paginator;
use pager_discord::DiscordTransport;
use twilight_http::Client;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    /// Owns the component routes the gateway loop dispatches through.
    pub transport: Arc<DiscordTransport>,
    /// Session every demo view is rendered through.
    pub paginator: Arc<Paginator>,
}

impl Context {
    /// Create a new application context.
    pub fn new(
        http: Arc<Client>,
        transport: Arc<DiscordTransport>,
        paginator: Arc<Paginator>,
    ) -> Self {
        Self {
            http,
            transport,
            paginator,
        }
    }
}
