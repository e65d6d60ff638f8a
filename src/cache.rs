use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use web_sys::{window, Storage};

const PREFERENCES_KEY: &str = "preferences";

/// UI preferences kept in local storage between visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Explicit choice from the footer toggle. `None` means "detect".
    #[serde(default)]
    pub high_performance: Option<bool>,
}

impl Preferences {
    pub fn from_json(s: &str) -> Self {
        serde_json::from_str(s).unwrap_or_else(|e| {
            warn!("discarding unreadable preferences: {}", e);
            Self::default()
        })
    }
}

pub fn save_preferences(prefs: &Preferences) {
    match serde_json::to_string(prefs) {
        Ok(s) => save(PREFERENCES_KEY, &s),
        Err(e) => warn!("unable to serialize preferences: {}", e),
    }
}

pub fn load_preferences() -> Preferences {
    match load(PREFERENCES_KEY) {
        Some(s) => Preferences::from_json(&s),
        None => {
            debug!("no preferences found in local storage");
            Preferences::default()
        }
    }
}

fn storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn save(key: &str, val: &str) {
    let Some(storage) = storage() else {
        warn!("local storage unavailable, not saving {}", key);
        return;
    };

    if storage.set_item(key, val).is_err() {
        warn!("unable to set {} in local storage", key);
    }
}

fn load(key: &str) -> Option<String> {
    storage()?.get_item(key).unwrap_or_else(|_| {
        warn!("error retrieving {} from local storage", key);
        None
    })
}
