//! Local key-value persistence.
//!
//! The browser front-end this replaces kept four small entries in browser
//! local storage: appearance, sidebar flag, session token, and the encoded
//! demographic answers. Here the same entries live in a flat string map
//! behind an injected [`StoreBackend`]; the file backend persists it as one
//! JSON object in the platform data directory.

mod file;

pub use file::FileBackend;

use std::collections::BTreeMap;
use std::path::PathBuf;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::demographics::DemographicData;

const APPEARANCE_KEY: &str = "appearance";
const SIDEBAR_KEY: &str = "sidebar";
const TOKEN_KEY: &str = "token";
const DEMOGRAPHICS_KEY: &str = "d";

/// Persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store encode error: {0}")]
    Encode(serde_json::Error),
    #[error("store decode error: {0}")]
    Decode(serde_json::Error),
    #[error("home directory could not be determined")]
    NoHome,
}

/// Raw string-keyed storage capability: `get`, `set`, `remove`.
///
/// Implementations only move strings; typed encoding lives in
/// [`LocalStore`].
pub trait StoreBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend. Used in tests and as a fallback when no data
/// directory is available.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: BTreeMap<String, String>,
}

impl StoreBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Default location of the store file:
/// `<platform data dir>/rollcall/store.json`.
pub fn default_store_path() -> Result<PathBuf, StoreError> {
    let dirs = ProjectDirs::from("org", "rollcall", "rollcall").ok_or(StoreError::NoHome)?;
    Ok(dirs.data_dir().join("store.json"))
}

/// Appearance preference, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn toggled(&self) -> Appearance {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }
}

/// Stored session: the bearer token plus the display name the portal
/// returned at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Typed wrapper over a [`StoreBackend`].
pub struct LocalStore {
    backend: Box<dyn StoreBackend>,
}

impl LocalStore {
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.backend.get(key) {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(StoreError::Decode),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(StoreError::Encode)?;
        self.backend.set(key, &raw)
    }

    // -- appearance -------------------------------------------------------

    /// Stored appearance, defaulting to light like the portal.
    pub fn appearance(&self) -> Appearance {
        self.get_json(APPEARANCE_KEY).ok().flatten().unwrap_or_default()
    }

    pub fn set_appearance(&mut self, appearance: Appearance) -> Result<(), StoreError> {
        self.set_json(APPEARANCE_KEY, &appearance)
    }

    // -- sidebar ----------------------------------------------------------

    /// Whether the summary sidebar is expanded. Defaults to expanded.
    pub fn sidebar_open(&self) -> bool {
        self.get_json(SIDEBAR_KEY).ok().flatten().unwrap_or(true)
    }

    pub fn set_sidebar_open(&mut self, open: bool) -> Result<(), StoreError> {
        self.set_json(SIDEBAR_KEY, &open)
    }

    // -- session ----------------------------------------------------------

    pub fn session(&self) -> Option<Session> {
        self.get_json(TOKEN_KEY).ok().flatten()
    }

    pub fn set_session(&mut self, session: &Session) -> Result<(), StoreError> {
        self.set_json(TOKEN_KEY, session)
    }

    pub fn clear_session(&mut self) -> Result<(), StoreError> {
        self.backend.remove(TOKEN_KEY)
    }

    // -- demographics -----------------------------------------------------

    /// Stored survey answers. The entry is base64-encoded JSON (the format
    /// the browser front-end wrote); an unreadable entry decodes to the
    /// empty record rather than erroring.
    pub fn demographics(&self) -> DemographicData {
        let Some(encoded) = self.backend.get(DEMOGRAPHICS_KEY) else {
            return DemographicData::default();
        };
        BASE64
            .decode(encoded.as_bytes())
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default()
    }

    /// Merges partial answers into the stored record and rederives the age
    /// group from the birth year.
    pub fn save_demographics(
        &mut self,
        update: &DemographicData,
        current_year: i32,
    ) -> Result<(), StoreError> {
        let mut merged = self.demographics();
        merged.merge(update, current_year);
        let json = serde_json::to_vec(&merged).map_err(StoreError::Encode)?;
        self.backend.set(DEMOGRAPHICS_KEY, &BASE64.encode(json))
    }

    pub fn clear_demographics(&mut self) -> Result<(), StoreError> {
        self.backend.remove(DEMOGRAPHICS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> LocalStore {
        LocalStore::new(MemoryBackend::default())
    }

    #[test]
    fn appearance_defaults_to_light_and_roundtrips() {
        let mut store = store();
        assert_eq!(store.appearance(), Appearance::Light);
        store.set_appearance(Appearance::Dark).unwrap();
        assert_eq!(store.appearance(), Appearance::Dark);
    }

    #[test]
    fn session_set_get_clear() {
        let mut store = store();
        assert!(store.session().is_none());
        let session = Session {
            token: "abc123".to_string(),
            user_name: Some("Chris".to_string()),
        };
        store.set_session(&session).unwrap();
        assert_eq!(store.session(), Some(session));
        store.clear_session().unwrap();
        assert!(store.session().is_none());
    }

    #[test]
    fn demographics_are_base64_json_with_merge_semantics() {
        let mut store = store();
        assert!(store.demographics().is_empty());

        let update = DemographicData {
            birthyear: "1990".to_string(),
            ..DemographicData::default()
        };
        store.save_demographics(&update, 2026).unwrap();

        let update = DemographicData {
            gender: "other".to_string(),
            ..DemographicData::default()
        };
        store.save_demographics(&update, 2026).unwrap();

        let stored = store.demographics();
        assert_eq!(stored.birthyear, "1990");
        assert_eq!(stored.age_group, "35_to_44");
        assert_eq!(stored.gender, "other");

        store.clear_demographics().unwrap();
        assert!(store.demographics().is_empty());
    }

    #[test]
    fn corrupt_demographics_entry_reads_as_empty() {
        let mut backend = MemoryBackend::default();
        backend.set("d", "not base64!!").unwrap();
        let store = LocalStore::new(backend);
        assert!(store.demographics().is_empty());
    }
}
