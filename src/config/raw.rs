use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("bizprofile.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub map: Option<Map>,
    pub notifications: Option<Notifications>,
    pub log: Option<Log>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub url: String,
}

impl Default for Api {
    fn default() -> Self {
        Config::default().api.expect("API configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub tile_url: String,
    pub attribution: String,
    pub default_center: LatLng,
    pub default_zoom: f64,
    pub location_zoom: f64,
    pub marker_icon: Option<MarkerIcon>,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MarkerIcon {
    pub icon_url: String,
    pub icon_retina_url: Option<String>,
    pub shadow_url: Option<String>,
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Map::default().marker_icon.expect("Marker icon configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Notifications {
    pub timeout_ms: u32,
}

impl Default for Notifications {
    fn default() -> Self {
        Config::default()
            .notifications
            .expect("Notifications configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Log {
    pub level: String,
}

impl Default for Log {
    fn default() -> Self {
        Config::default().log.expect("Log configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert_eq!(cfg.api.unwrap().url, "/api");
        let map = cfg.map.unwrap();
        assert_eq!(map.default_zoom, 5.0);
        assert!(map.marker_icon.is_some());
        assert_eq!(cfg.notifications.unwrap().timeout_ms, 4000);
        assert_eq!(cfg.log.unwrap().level, "info");
    }

    #[test]
    fn sections_are_optional() {
        let cfg: Config = toml::from_str("[api]\nurl = \"https://example.com/api\"").unwrap();
        assert_eq!(cfg.api.unwrap().url, "https://example.com/api");
        assert!(cfg.map.is_none());
        assert!(cfg.log.is_none());
    }
}
