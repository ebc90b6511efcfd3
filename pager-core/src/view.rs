//! Embed and control row composition for paginated views.

use twilight_model::channel::message::{
    component::{ActionRow, Button, Component},
    embed::{Embed, EmbedField},
};
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};
use twilight_validate::embed::EmbedValidationError;

use crate::action::NavAction;
use crate::config::ButtonsConfig;
use crate::page::PageState;

/// Everything the transport needs to show one page.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedView {
    pub embed: Embed,
    pub components: Vec<Component>,
}

/// Build the page embed: title, accent color, visible fields and a page footer.
///
/// Fails when the embed breaks Discord's limits (title length, field count,
/// field sizes or total length).
pub fn build_embed(
    title: &str,
    color: u32,
    fields: &[EmbedField],
    state: PageState,
) -> Result<Embed, EmbedValidationError> {
    let footer = EmbedFooterBuilder::new(state.footer_text()).build();

    let builder = fields
        .iter()
        .cloned()
        .fold(EmbedBuilder::new().title(title).color(color), |builder, field| {
            builder.field(field)
        })
        .footer(footer);

    Ok(builder.validate()?.build())
}

/// Build the navigation row for the enabled controls.
///
/// `disabled` greys out every control. Otherwise first/back are disabled on
/// the first page and next/last on the last page. Returns no row when no
/// control is enabled.
pub fn build_controls(
    buttons: &ButtonsConfig,
    state: PageState,
    disabled: bool,
    custom_id: impl Fn(NavAction) -> String,
) -> Vec<Component> {
    let row: Vec<Component> = buttons
        .enabled()
        .map(|(action, option)| {
            let at_edge = match action {
                NavAction::First | NavAction::Back => state.is_first(),
                NavAction::Next | NavAction::Last => state.is_last(),
                NavAction::Stop => false,
            };

            Component::Button(Button {
                id: None,
                custom_id: Some(custom_id(action)),
                disabled: disabled || at_edge,
                emoji: option.emoji.clone(),
                label: option.label.clone(),
                style: option.style,
                url: None,
                sku_id: None,
            })
        })
        .collect();

    if row.is_empty() {
        return vec![];
    }

    vec![Component::ActionRow(ActionRow {
        id: None,
        components: row,
    })]
}
