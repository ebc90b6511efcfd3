//! Discord transport for `pager-core`.

/// Custom id to handler routing for component interactions.
pub mod routes;
/// `twilight-http` implementation of the paginator transport.
pub mod transport;

pub use routes::{RouteTable, component_event};
pub use transport::DiscordTransport;
