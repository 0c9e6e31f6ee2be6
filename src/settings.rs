use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub identity: IdentitySettings,
    #[serde(default)]
    pub globe: GlobeSettings,
}

/// Contact details shown in the contact section. Everything is optional;
/// missing fields fall back to the built-in placeholders.
#[derive(Debug, Default, Deserialize)]
pub struct IdentitySettings {
    pub name: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GlobeSettings {
    pub home_lat: Option<f32>, // Latitude shown in the globe corner labels
    pub home_lon: Option<f32>,
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termfolio")
            .join("config.toml")
    }

    /// Home coordinates for the globe corner labels
    pub fn home_coords(&self) -> (f32, f32) {
        (
            self.globe.home_lat.unwrap_or(12.8759),
            self.globe.home_lon.unwrap_or(77.5910),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("[identity]\nname = \"Ada\"\n")
            .unwrap_or_default();
        assert_eq!(settings.identity.name.as_deref(), Some("Ada"));
        assert!(settings.identity.email.is_none());
        let (lat, lon) = settings.home_coords();
        assert!((lat - 12.8759).abs() < 1e-4);
        assert!((lon - 77.5910).abs() < 1e-4);
    }

    #[test]
    fn malformed_toml_falls_back_to_defaults() {
        let settings: Settings = toml::from_str("identity = 5").unwrap_or_default();
        assert!(settings.identity.name.is_none());
    }
}
