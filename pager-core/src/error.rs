use thiserror::Error;
use twilight_validate::embed::EmbedValidationError;

/// Failures surfaced by paginator operations.
///
/// Discards (unknown ids, malformed custom ids) are not errors and never
/// show up here.
#[derive(Debug, Error)]
pub enum Error {
    /// The chat transport rejected a send or edit.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),

    /// The page embed breaks Discord's embed limits.
    #[error("invalid page embed: {0}")]
    InvalidEmbed(#[from] EmbedValidationError),

    /// The paginator was closed and accepts no new messages.
    #[error("paginator {0} is closed")]
    Closed(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
