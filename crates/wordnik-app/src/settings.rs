use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use wordnik_config::Config;

/// Picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "wordnik.json";

fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Load the config and report which file it came from, if any.
///
/// An explicit path must exist. Without one `wordnik.json` is used when
/// present, otherwise defaults seeded from the environment. `WORDNIK_*`
/// variables always win over the file.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
    };

    match path {
        Some(path) => {
            let mut config = load_config_file(&path)?;
            config.apply_env();
            Ok((config, Some(path)))
        }
        None => Ok((Config::new(), None)),
    }
}
