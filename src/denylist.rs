//! Denylist of common passwords
//!
//! Holds the built-in table of well-known weak passwords, the easter-egg
//! messages keyed by some of them, and optional loading of extra entries
//! from a text file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Environment variable naming an extra denylist file.
pub const DENYLIST_PATH_ENV: &str = "PWD_DENYLIST_PATH";

/// Well-known weak passwords, lowercase.
pub static COMMON_PASSWORDS: [&str; 30] = [
    "password", "password123", "123456", "12345678", "qwerty", "abc123",
    "monkey", "1234567", "letmein", "trustno1", "dragon", "baseball",
    "iloveyou", "master", "sunshine", "ashley", "bailey", "passw0rd",
    "shadow", "123123", "654321", "superman", "qazwsx", "michael",
    "football", "welcome", "jesus", "ninja", "mustang", "password1",
];

static EASTER_EGGS: [(&str, &str); 10] = [
    ("password", "🚨 Really? \"password\"? Even a level 1 warrior knows better!"),
    ("password123", "🤦 Adding \"123\" doesn't make it secure!"),
    ("123456", "🎯 Hackers LOVE this one! Please, try harder!"),
    ("qwerty", "⌨️ Just because it's on your keyboard doesn't make it safe!"),
    ("iloveyou", "💔 We love you too, but this password won't!"),
    ("letmein", "🚪 Oh we'll let you in... and so will hackers!"),
    ("dragon", "🐉 Dragons are cool, but this password is not!"),
    ("monkey", "🐵 Even monkeys can crack this one!"),
    ("ninja", "🥷 A real ninja would never use this!"),
    ("welcome", "👋 Welcome to getting hacked!"),
];

static BUILTIN: LazyLock<Denylist> = LazyLock::new(Denylist::builtin);

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Returns the easter-egg message for a password, if it has one.
///
/// Matching is exact after lowercasing.
pub fn easter_egg(password: &str) -> Option<&'static str> {
    let folded = password.to_lowercase();
    EASTER_EGGS
        .iter()
        .find(|(key, _)| *key == folded)
        .map(|(_, message)| *message)
}

/// Returns the denylist file path from `PWD_DENYLIST_PATH`, if set.
pub fn denylist_path() -> Option<PathBuf> {
    std::env::var_os(DENYLIST_PATH_ENV).map(PathBuf::from)
}

/// Shared built-in denylist.
pub fn builtin() -> &'static Denylist {
    &BUILTIN
}

/// Set of lowercase passwords that are rejected outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Denylist {
    /// The fixed table of common passwords.
    pub fn builtin() -> Self {
        Denylist {
            entries: COMMON_PASSWORDS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Built-in entries plus one entry per non-empty line of `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: FileNotFound {}", path.display());
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: Empty file {}", path.display());
            return Err(DenylistError::EmptyFile);
        }

        let mut denylist = Self::builtin();
        denylist.entries.extend(
            content
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty()),
        );

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Denylist loaded: {} passwords from {}",
            denylist.len(),
            path.display()
        );

        Ok(denylist)
    }

    /// Loads from `PWD_DENYLIST_PATH` when set, otherwise the built-in table.
    pub fn from_env() -> Result<Self, DenylistError> {
        match denylist_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Case-insensitive exact match.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env-touching tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env-touching tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_builtin_contains_case_insensitive() {
        let denylist = Denylist::builtin();
        assert_eq!(denylist.len(), COMMON_PASSWORDS.len());
        assert!(denylist.contains("password"));
        assert!(denylist.contains("PassWord"));
        assert!(denylist.contains("TRUSTNO1"));
        assert!(!denylist.contains("password "));
        assert!(!denylist.contains("correct-horse"));
    }

    #[test]
    fn test_easter_eggs_are_denylisted() {
        let denylist = Denylist::builtin();
        for (key, _) in EASTER_EGGS.iter() {
            assert!(denylist.contains(key), "{key} should be denylisted");
        }
    }

    #[test]
    fn test_easter_egg_lookup() {
        assert_eq!(
            easter_egg("Ninja"),
            Some("🥷 A real ninja would never use this!")
        );
        assert_eq!(easter_egg("baseball"), None);
        assert_eq!(easter_egg(""), None);
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = Denylist::from_path("/nonexistent/path/denylist.txt");
        assert!(matches!(result, Err(DenylistError::FileNotFound(_))));
    }

    #[test]
    fn test_from_path_empty_file() {
        let temp_file = setup_with_tempfile(&["   "]);
        let result = Denylist::from_path(temp_file.path());
        assert!(matches!(result, Err(DenylistError::EmptyFile)));
    }

    #[test]
    fn test_from_path_extends_builtin() {
        let temp_file = setup_with_tempfile(&["Hunter2", "", "  correcthorse  "]);
        let denylist = Denylist::from_path(temp_file.path()).expect("should load");

        assert_eq!(denylist.len(), COMMON_PASSWORDS.len() + 2);
        assert!(denylist.contains("hunter2"));
        assert!(denylist.contains("CorrectHorse"));
        assert!(denylist.contains("qwerty"));
    }

    #[test]
    #[serial]
    fn test_denylist_path_from_env() {
        set_env(DENYLIST_PATH_ENV, "/custom/path/denylist.txt");
        assert_eq!(
            denylist_path(),
            Some(PathBuf::from("/custom/path/denylist.txt"))
        );
        remove_env(DENYLIST_PATH_ENV);
        assert_eq!(denylist_path(), None);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_to_builtin() {
        remove_env(DENYLIST_PATH_ENV);
        let denylist = Denylist::from_env().expect("builtin never fails");
        assert_eq!(denylist, Denylist::builtin());
    }

    #[test]
    #[serial]
    fn test_from_env_loads_file() {
        let temp_file = setup_with_tempfile(&["opensesame"]);
        let path = temp_file.path().to_str().unwrap();
        set_env(DENYLIST_PATH_ENV, path);

        let denylist = Denylist::from_env().expect("should load");
        assert!(denylist.contains("OpenSesame"));

        remove_env(DENYLIST_PATH_ENV);
    }
}
