use subwatch_domain::{CliOverrides, Config};

/// Builds and validates the run configuration. Nothing touches the network
/// before this succeeds.
pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
