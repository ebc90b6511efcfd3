use std::time::Duration;

use tokio::time::Instant;
use twilight_model::channel::message::embed::EmbedField;
use twilight_validate::embed::EmbedValidationError;

use crate::action::NavAction;
use crate::config::PaginatorConfig;
use crate::page::{PageState, apply_action, page_count, visible_slice};
use crate::token::CorrelationId;
use crate::transport::MessageTarget;
use crate::view::{RenderedView, build_controls, build_embed};

/// One rendered, navigable view owned by a paginator.
///
/// The fields are fixed at creation; only the cursor and expiry move.
#[derive(Clone, Debug)]
pub struct PagedMessage {
    id: String,
    title: String,
    fields: Vec<EmbedField>,
    current_page: usize,
    expiry: Instant,
    target: Option<MessageTarget>,
}

impl PagedMessage {
    pub(crate) fn new(
        id: String,
        title: String,
        fields: Vec<EmbedField>,
        idle_wait: Duration,
    ) -> Self {
        Self {
            id,
            title,
            fields,
            current_page: 0,
            expiry: Instant::now() + idle_wait,
            target: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[EmbedField] {
        &self.fields
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn expiry(&self) -> Instant {
        self.expiry
    }

    /// The sent view, once the initial render succeeded.
    pub fn target(&self) -> Option<&MessageTarget> {
        self.target.as_ref()
    }

    pub(crate) fn set_target(&mut self, target: MessageTarget) {
        self.target = Some(target);
    }

    pub fn page_state(&self, items_per_page: usize) -> PageState {
        PageState::new(
            self.current_page,
            page_count(self.fields.len(), items_per_page),
        )
    }

    pub fn has_expired(&self, now: Instant) -> bool {
        now > self.expiry
    }

    /// Push the expiry out by another idle period.
    pub(crate) fn touch(&mut self, idle_wait: Duration) {
        self.expiry = Instant::now() + idle_wait;
    }

    /// Move the cursor and return the new page.
    pub(crate) fn apply(&mut self, action: NavAction, items_per_page: usize) -> usize {
        let count = page_count(self.fields.len(), items_per_page);
        self.current_page = apply_action(self.current_page, count, action);
        self.current_page
    }

    pub fn custom_id(&self, config: &PaginatorConfig, session_id: &str, action: NavAction) -> String {
        CorrelationId::encode(
            &config.custom_id_prefix,
            session_id,
            &self.id,
            action.as_str(),
        )
    }

    /// Custom ids of every enabled control.
    pub fn custom_ids(&self, config: &PaginatorConfig, session_id: &str) -> Vec<String> {
        config
            .buttons
            .enabled()
            .map(|(action, _)| self.custom_id(config, session_id, action))
            .collect()
    }

    /// Render the current page.
    pub fn view(
        &self,
        config: &PaginatorConfig,
        session_id: &str,
        disabled: bool,
    ) -> Result<RenderedView, EmbedValidationError> {
        let state = self.page_state(config.items_per_page);
        let visible = visible_slice(&self.fields, state.current, config.items_per_page);

        Ok(RenderedView {
            embed: build_embed(&self.title, config.embed_color, visible, state)?,
            components: build_controls(&config.buttons, state, disabled, |action| {
                self.custom_id(config, session_id, action)
            }),
        })
    }
}
