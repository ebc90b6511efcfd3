//! Correlation id encoding carried in each control's custom id.

/// Character joining the tokens of a correlation id.
pub const SEPARATOR: char = ':';

const TOKEN_COUNT: usize = 4;

/// Parsed correlation id from a button custom id.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CorrelationId {
    /// Custom id prefix configured on the owning paginator. Not used for routing.
    pub prefix: String,
    /// Paginator session that rendered the control.
    pub session_id: String,
    /// Message within the session.
    pub message_id: String,
    /// Raw action token (`first`, `back`, `stop`, `next`, `last`).
    pub action: String,
}

impl CorrelationId {
    /// Build a compact custom id routing back to one message control.
    ///
    /// Callers keep every token free of [`SEPARATOR`]; see [`is_valid_token`].
    pub fn encode(prefix: &str, session_id: &str, message_id: &str, action: &str) -> String {
        debug_assert!(
            [prefix, session_id, message_id, action]
                .iter()
                .all(|token| !token.contains(SEPARATOR)),
            "correlation id tokens must not contain the separator"
        );
        format!("{prefix}{SEPARATOR}{session_id}{SEPARATOR}{message_id}{SEPARATOR}{action}")
    }

    /// Parse a custom id. Anything other than exactly four tokens is rejected.
    pub fn decode(raw: &str) -> Option<Self> {
        let parts: Vec<&str> = raw.splitn(TOKEN_COUNT + 1, SEPARATOR).collect();
        let [prefix, session_id, message_id, action] = parts.as_slice() else {
            return None;
        };

        Some(Self {
            prefix: (*prefix).to_owned(),
            session_id: (*session_id).to_owned(),
            message_id: (*message_id).to_owned(),
            action: (*action).to_owned(),
        })
    }

    /// Re-encode this id.
    pub fn to_custom_id(&self) -> String {
        Self::encode(&self.prefix, &self.session_id, &self.message_id, &self.action)
    }
}

/// Whether `token` can be embedded in a correlation id.
pub fn is_valid_token(token: &str) -> bool {
    !token.is_empty() && !token.contains(SEPARATOR)
}
