use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Origin of the prediction server; empty means the page's own origin
    pub api_base: String,

    /// Path of the prediction endpoint (e.g., "/predict")
    pub predict_path: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            predict_path: "/predict".to_string(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        // Detect if running in development mode
        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // Try to read from localStorage for custom settings
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(api_base)) = storage.get_item("wavecast_api_base") {
                settings.api_base = api_base.trim_end_matches('/').to_string();
            }

            if let Ok(Some(predict_path)) = storage.get_item("wavecast_predict_path") {
                settings.predict_path = predict_path;
            }

            if let Ok(Some(log_level)) = storage.get_item("wavecast_log_level") {
                settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
            }
        }

        settings
    }

    /// Full URL the predict trigger requests
    pub fn predict_url(&self) -> String {
        format!("{}{}", self.api_base, self.predict_path)
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_is_same_origin() {
        assert_eq!(AppSettings::default().predict_url(), "/predict");
    }

    #[test]
    fn base_is_prefixed() {
        let settings = AppSettings {
            api_base: "http://localhost:3000".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.predict_url(), "http://localhost:3000/predict");
    }

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_level("warn"), Some(Level::Warn));
        assert_eq!(parse_level("verbose"), None);
    }
}
