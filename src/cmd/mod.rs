pub mod pick;
pub mod validate;

use clap::ArgMatches;
use lineforge::config::Config;
use lineforge::error::LfResult;
use tracing::info;

/// File settings (if any) are the base; flags typed on the command line
/// win over them.
pub fn resolve_config(
    path: Option<&str>,
    cli_config: &Config,
    sub_matches: Option<&ArgMatches>,
) -> LfResult<Config> {
    let Some(path) = path else {
        cli_config.search.validate()?;
        return Ok(cli_config.clone());
    };

    info!("⚙️  Loading config from: {}", path);
    let mut config = Config::load_from_file(path)?;
    if let Some(matches) = sub_matches {
        config.search.merge_from_cli(&cli_config.search, matches);
    }
    config.search.validate()?;
    Ok(config)
}
