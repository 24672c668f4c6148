use anyhow::Context;
use roll_config::RollConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layer the config files and env, then apply `--api-url`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RollConfig> {
    let config = RollConfig::load_with_dotenv().context("failed to load rollcall configuration")?;
    Ok(config.with_base_url(flags.api_url.as_deref()))
}
