//! Data directory resolution.

use std::path::PathBuf;

/// Resolve the SkillMap data directory.
///
/// `SKILLMAP_DATA_DIR` wins when set and non-empty; otherwise
/// `~/.skillmap` (falling back to `./.skillmap` when no home directory
/// can be determined).
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SKILLMAP_DATA_DIR") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".skillmap")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dir_ends_with_dot_skillmap() {
        // Only meaningful when the override is unset, which is the normal
        // test environment.
        if std::env::var("SKILLMAP_DATA_DIR").is_err() {
            let dir = resolve_data_dir();
            assert!(dir.ends_with(".skillmap"));
        }
    }
}
