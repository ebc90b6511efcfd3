use std::fmt;

/// A single navigation control.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NavAction {
    First,
    Back,
    Stop,
    Next,
    Last,
}

impl NavAction {
    /// Every action in the order its control is laid out.
    pub const ALL: [NavAction; 5] = [
        NavAction::First,
        NavAction::Back,
        NavAction::Stop,
        NavAction::Next,
        NavAction::Last,
    ];

    /// Token used for this action inside a correlation id.
    pub fn as_str(self) -> &'static str {
        match self {
            NavAction::First => "first",
            NavAction::Back => "back",
            NavAction::Stop => "stop",
            NavAction::Next => "next",
            NavAction::Last => "last",
        }
    }

    /// Parse an action token. Matching is exact and case-sensitive.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == raw)
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
