use anyhow::{Context, Result};
use shared::ChartConfig;

/// Chart settings shipped with the app
const CHART_CONFIG_JSON: &str = include_str!("../../config/chart_config.json");

pub fn load_chart_config() -> Result<ChartConfig> {
    parse_chart_config(CHART_CONFIG_JSON).context("bundled config/chart_config.json is invalid")
}

/// Bundled settings, or the built-in defaults if they cannot be used
pub fn load_chart_config_or_default() -> ChartConfig {
    load_chart_config().unwrap_or_else(|e| {
        log::warn!("{:#}; falling back to default chart config", e);
        ChartConfig::default()
    })
}

fn parse_chart_config(json: &str) -> Result<ChartConfig> {
    Ok(ChartConfig::from_json(json)?)
}
