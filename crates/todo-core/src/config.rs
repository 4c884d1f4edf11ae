//! Configuration
//!
//! Storage key and the literal UI strings. Every field has a default, so a
//! partial JSON override is enough.

use serde::{Deserialize, Serialize};

/// Key the list is persisted under in browser storage
pub const DEFAULT_STORAGE_KEY: &str = "todos";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    pub storage_key: String,
    pub ui: UiStrings,
}

/// Labels shown by the view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiStrings {
    pub title: String,
    pub add_placeholder: String,
    pub add_button: String,
    pub search_placeholder: String,
    pub delete_button: String,
    pub edit_button: String,
    pub save_button: String,
    pub clear_all_button: String,
    /// Alert shown when add or edit is submitted with blank text
    pub empty_text_alert: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            ui: UiStrings::default(),
        }
    }
}

impl Default for UiStrings {
    fn default() -> Self {
        Self {
            title: "To-Do Uygulaması".to_string(),
            add_placeholder: "Yeni bir todo ekleyin...".to_string(),
            add_button: "Todo Ekle".to_string(),
            search_placeholder: "Todoları ara...".to_string(),
            delete_button: "Sil".to_string(),
            edit_button: "Düzenle".to_string(),
            save_button: "Kaydet".to_string(),
            clear_all_button: "Tüm Todoları Sil".to_string(),
            empty_text_alert: "Todo ismi boş olamaz!".to_string(),
        }
    }
}

impl TodoConfig {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
