// SPDX-License-Identifier: MPL-2.0
//! Filesystem path resolution for configuration.
//!
//! The config directory can be customized for testing or portable
//! deployments:
//! 1. Explicit override (the `--config-dir` flag)
//! 2. `ICED_PRIMER_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory

use std::path::{Path, PathBuf};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "ICED_PRIMER_CONFIG_DIR";

const APP_DIR_NAME: &str = "IcedPrimer";

/// Resolves the directory that holds `settings.toml`.
#[must_use]
pub fn config_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.to_path_buf());
    }

    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let override_dir = Path::new("/tmp/primer-config");
        assert_eq!(
            config_dir(Some(override_dir)),
            Some(override_dir.to_path_buf())
        );
    }

    #[test]
    fn default_resolution_yields_some_directory() {
        // Whatever the platform, resolution should not panic; the value may
        // come from the env override or the platform config dir.
        let _ = config_dir(None);
    }
}
