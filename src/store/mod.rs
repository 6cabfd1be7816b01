mod error;
mod favorites;
mod file;
mod memory;
mod settings;

use tracing::{debug, warn};

pub use error::StoreError;
pub use favorites::Favorites;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use settings::{
    FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP, SCROLL_SPEED_MAX, Settings,
};

pub const FAVORITES_KEY: &str = "favorites";
pub const SETTINGS_KEY: &str = "settings";

/// Raw string blobs addressed by key.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The only path to persisted state. Reads fall back to defaults and writes are
/// best-effort, so nothing in here ever fails towards the caller.
pub struct Storage {
    backend: Box<dyn KeyValueStore>,
}

impl Storage {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn load_favorites(&self) -> Favorites {
        self.read(FAVORITES_KEY).unwrap_or_default()
    }

    /// Read-modify-write of the favorites blob. The returned set is the new session state.
    pub fn toggle_favorite(&mut self, id: &str) -> Favorites {
        let mut favorites = self.load_favorites();
        let now_favorite = favorites.toggle(id);
        debug!(id, now_favorite, "Toggled favorite");
        self.write(FAVORITES_KEY, &favorites);
        favorites
    }

    pub fn load_settings(&self) -> Settings {
        let Some(settings) = self.read::<Settings>(SETTINGS_KEY) else {
            return Settings::default();
        };

        if settings.is_in_range() {
            settings
        } else {
            let clamped = settings.clamped();
            warn!(?settings, ?clamped, "Persisted settings out of range, clamping");
            clamped
        }
    }

    pub fn save_settings(&mut self, settings: &Settings) {
        self.write(SETTINGS_KEY, settings);
    }

    fn read<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, "Failed to read stored value: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, "Discarding unparsable stored value: {}", e);
                None
            }
        }
    }

    fn write<T: serde::Serialize>(&mut self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(StoreError::from)
            .and_then(|json| self.backend.set(key, &json));

        if let Err(e) = result {
            warn!(key, "Failed to persist value: {}", e);
        }
    }
}
