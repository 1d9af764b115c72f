//! File-backed key-value store for the handful of values that survive a
//! restart: the bot's continuation token and the palette choice.
//!
//! One file per key under the platform-local data directory. Values are
//! stored verbatim; callers decide the encoding.

use std::io;
use std::{fs, path::PathBuf};

/// Key for the JSON-encoded continuation token issued by the bot.
pub const USER_DATA_KEY: &str = "ud";

/// Key for the persisted palette choice.
pub const PALETTE_KEY: &str = "palette";

#[derive(Clone, Debug, PartialEq)]
pub struct StateStore {
    root: PathBuf,
}

impl StateStore {
    /// Store rooted at the platform-local data directory.
    pub fn open() -> Self {
        let root = if let Some(data_dir) = dirs::data_local_dir() {
            data_dir.join("finch").join("state")
        } else {
            PathBuf::from("cache").join("state")
        };
        Self { root }
    }

    /// Store rooted at an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(sanitize_key(key))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    pub fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.key_path(key), value)
    }

    pub fn delete(&self, key: &str) -> io::Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn keys(&self) -> Vec<String> {
        if !self.root.exists() {
            return Vec::new();
        }
        fs::read_dir(&self.root)
            .ok()
            .map(|entries| {
                entries
                    .flatten()
                    .filter_map(|entry| entry.file_name().to_str().map(|s| s.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn clear(&self) -> io::Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root)?;
        }
        Ok(())
    }
}

/// Sanitize storage key for filesystem use.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("ud"), "ud");
        assert_eq!(sanitize_key("palette"), "palette");
        assert_eq!(sanitize_key("user:preferences"), "user_preferences");
        assert_eq!(sanitize_key("../escape"), "___escape");
    }
}
