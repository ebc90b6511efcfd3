//! Paginator configuration.
//!
//! Start from [`PaginatorConfig::default`] and chain `with_*` calls to
//! override individual options.

use std::time::Duration;

use tracing::warn;
use twilight_model::channel::message::{EmojiReactionType, component::ButtonStyle};

use crate::action::NavAction;
use crate::token::is_valid_token;

/// Default number of fields shown per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;
/// Most fields Discord accepts on one embed.
pub const MAX_ITEMS_PER_PAGE: usize = 25;
/// Default idle time before a message's controls are retired.
pub const DEFAULT_IDLE_WAIT: Duration = Duration::from_secs(5 * 60);
/// Default custom id prefix.
pub const DEFAULT_CUSTOM_ID_PREFIX: &str = "paginator";
/// Default embed accent color.
pub const DEFAULT_EMBED_COLOR: u32 = 0x4c_50_c1;

/// Styling for one pagination button.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonOption {
    pub emoji: Option<EmojiReactionType>,
    pub label: Option<String>,
    pub style: ButtonStyle,
}

impl ButtonOption {
    /// Primary button showing a unicode emoji.
    pub fn emoji(name: &str) -> Self {
        Self {
            emoji: Some(EmojiReactionType::Unicode {
                name: name.to_owned(),
            }),
            label: None,
            style: ButtonStyle::Primary,
        }
    }

    /// Button showing a text label.
    pub fn labeled(label: &str, style: ButtonStyle) -> Self {
        Self {
            emoji: None,
            label: Some(label.to_owned()),
            style,
        }
    }
}

/// Which controls are rendered, and how. `None` leaves a control out.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonsConfig {
    pub first: Option<ButtonOption>,
    pub back: Option<ButtonOption>,
    pub stop: Option<ButtonOption>,
    pub next: Option<ButtonOption>,
    pub last: Option<ButtonOption>,
}

impl ButtonsConfig {
    /// Configuration for `action`, if that control is enabled.
    pub fn get(&self, action: NavAction) -> Option<&ButtonOption> {
        match action {
            NavAction::First => self.first.as_ref(),
            NavAction::Back => self.back.as_ref(),
            NavAction::Stop => self.stop.as_ref(),
            NavAction::Next => self.next.as_ref(),
            NavAction::Last => self.last.as_ref(),
        }
    }

    /// Enabled controls in layout order.
    pub fn enabled(&self) -> impl Iterator<Item = (NavAction, &ButtonOption)> + '_ {
        NavAction::ALL
            .into_iter()
            .filter_map(|action| self.get(action).map(|option| (action, option)))
    }
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            first: Some(ButtonOption::emoji("⏮️")),
            back: Some(ButtonOption::emoji("◀️")),
            stop: None,
            next: Some(ButtonOption::emoji("▶️")),
            last: Some(ButtonOption::emoji("⏭️")),
        }
    }
}

/// Options shared by every message of one paginator.
#[derive(Clone, Debug, PartialEq)]
pub struct PaginatorConfig {
    pub buttons: ButtonsConfig,
    pub custom_id_prefix: String,
    pub embed_color: u32,
    pub items_per_page: usize,
    pub idle_wait: Duration,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            buttons: ButtonsConfig::default(),
            custom_id_prefix: DEFAULT_CUSTOM_ID_PREFIX.to_owned(),
            embed_color: DEFAULT_EMBED_COLOR,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            idle_wait: DEFAULT_IDLE_WAIT,
        }
    }
}

impl PaginatorConfig {
    pub fn with_buttons(mut self, buttons: ButtonsConfig) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_custom_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.custom_id_prefix = prefix.into();
        self
    }

    pub fn with_embed_color(mut self, color: u32) -> Self {
        self.embed_color = color;
        self
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    pub fn with_idle_wait(mut self, idle_wait: Duration) -> Self {
        self.idle_wait = idle_wait;
        self
    }

    /// Replace unusable values with their defaults.
    ///
    /// A zero page size or idle wait falls back to the default, as does a
    /// prefix that could not be embedded in a correlation id. Page sizes
    /// above [`MAX_ITEMS_PER_PAGE`] are capped.
    pub fn resolve(mut self) -> Self {
        if self.items_per_page == 0 {
            self.items_per_page = DEFAULT_ITEMS_PER_PAGE;
        } else if self.items_per_page > MAX_ITEMS_PER_PAGE {
            warn!(
                items_per_page = self.items_per_page,
                max = MAX_ITEMS_PER_PAGE,
                "page size above the embed field limit, capping"
            );
            self.items_per_page = MAX_ITEMS_PER_PAGE;
        }

        if self.idle_wait.is_zero() {
            self.idle_wait = DEFAULT_IDLE_WAIT;
        }

        if !is_valid_token(&self.custom_id_prefix) {
            warn!(
                prefix = %self.custom_id_prefix,
                "invalid custom id prefix, using default"
            );
            self.custom_id_prefix = DEFAULT_CUSTOM_ID_PREFIX.to_owned();
        }

        self
    }
}
