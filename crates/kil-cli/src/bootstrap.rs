use anyhow::Context;
use kil_config::KilConfig;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<KilConfig> {
    KilConfig::load_with_dotenv().context("failed to load kilmere configuration")
}
