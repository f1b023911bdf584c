//! Data directory resolution.

use std::path::PathBuf;

/// Environment variable that relocates the data directory.
pub const ENV_DATA_DIR: &str = "AETHERIBOT_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `AETHERIBOT_DATA_DIR` environment variable
/// 2. `~/.aetheribot`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".aetheribot");
    }

    // Last resort: current directory
    PathBuf::from(".aetheribot")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: no other test in this crate reads AETHERIBOT_DATA_DIR.
        unsafe {
            std::env::set_var(ENV_DATA_DIR, "/tmp/test-aetheribot");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-aetheribot"));
        unsafe {
            std::env::remove_var(ENV_DATA_DIR);
        }
    }
}
