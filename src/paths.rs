use std::path::PathBuf;

use anyhow::Result;

/// Environment variable overriding the data directory location.
pub const DATA_DIR_ENV: &str = "FIBERCTL_DATA_DIR";

/// Resolve the data directory holding the collection files.
///
/// `FIBERCTL_DATA_DIR` wins when set; otherwise the platform data directory
/// gets a `fiberctl` subdirectory.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find platform data directory"))?;
    Ok(base.join("fiberctl"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        // Env mutation is process-global; restore to avoid bleeding into
        // other tests.
        let previous = std::env::var(DATA_DIR_ENV).ok();
        std::env::set_var(DATA_DIR_ENV, "/tmp/fiberctl-test-data");

        let dir = data_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/fiberctl-test-data"));

        match previous {
            Some(value) => std::env::set_var(DATA_DIR_ENV, value),
            None => std::env::remove_var(DATA_DIR_ENV),
        }
    }
}
