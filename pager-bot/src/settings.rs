//! Process settings read from the environment.

use std::{env, time::Duration};

use anyhow::Context as _;
use pager_core::{DEFAULT_SWEEP_INTERVAL, PaginatorConfig};

/// Settings for one bot process.
pub struct Settings {
    pub token: String,
    pub paginator: PaginatorConfig,
    pub sweep_interval: Duration,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// `DISCORD_TOKEN` is required. `PAGINATOR_ITEMS_PER_PAGE`,
    /// `PAGINATOR_IDLE_WAIT` and `PAGINATOR_SWEEP_INTERVAL` are optional;
    /// durations accept `30s`, `10m`, `2h` or plain seconds.
    pub fn from_env() -> anyhow::Result<Self> {
        let token = env::var("DISCORD_TOKEN").context("DISCORD_TOKEN is not set")?;
        Self::from_lookup(token, |key| env::var(key).ok())
    }

    fn from_lookup(token: String, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut paginator = PaginatorConfig::default();

        if let Some(raw) = lookup("PAGINATOR_ITEMS_PER_PAGE") {
            let items_per_page = raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("invalid PAGINATOR_ITEMS_PER_PAGE: {raw}"))?;
            paginator = paginator.with_items_per_page(items_per_page);
        }

        if let Some(raw) = lookup("PAGINATOR_IDLE_WAIT") {
            let idle_wait = parse_duration(&raw)
                .with_context(|| format!("invalid PAGINATOR_IDLE_WAIT: {raw}"))?;
            paginator = paginator.with_idle_wait(idle_wait);
        }

        let sweep_interval = match lookup("PAGINATOR_SWEEP_INTERVAL") {
            Some(raw) => parse_duration(&raw)
                .with_context(|| format!("invalid PAGINATOR_SWEEP_INTERVAL: {raw}"))?,
            None => DEFAULT_SWEEP_INTERVAL,
        };

        Ok(Self {
            token,
            paginator,
            sweep_interval,
        })
    }
}

/// Parse `<amount><unit>` where unit is `s`, `m`, `h` or `d` (any case),
/// or a bare amount of seconds. Zero and overflowing amounts are rejected.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let value = raw.trim();
    let unit_at = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (amount, unit) = value.split_at(unit_at);

    let amount = amount.parse::<u64>().ok().filter(|amount| *amount > 0)?;
    let scale = match unit.to_ascii_lowercase().as_str() {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        _ => return None,
    };

    amount.checked_mul(scale).map(Duration::from_secs)
}
