use std::time::Duration;

use anyhow::{anyhow, Result};
use bizprofile_core::{map::MapView, Coordinates};

mod raw;

/// Id of an optional `<script type="application/toml">` element
/// that overrides the default configuration.
const CONFIG_ELEMENT_ID: &str = "bizprofile-config";

#[derive(Debug, Clone)]
pub struct Config {
    pub api: Api,
    pub map: Map,
    pub notifications: Notifications,
    pub log_level: log::Level,
}

#[derive(Debug, Clone)]
pub struct Api {
    /// Base URL of the backend, e.g. `/api`.
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Map {
    pub tile_url: String,
    pub attribution: String,
    pub view: MapView,
    pub marker_icon: MarkerIcon,
}

#[derive(Debug, Clone)]
pub struct MarkerIcon {
    pub icon_url: String,
    pub icon_retina_url: Option<String>,
    pub shadow_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    pub timeout: Duration,
}

impl Config {
    pub fn try_from_toml(toml: &str) -> Result<Self> {
        let raw_config: raw::Config = toml::from_str(toml)?;
        Self::try_from(raw_config)
    }

    pub fn try_load_from_document() -> Result<Self> {
        let content = leptos::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
            .filter(|content| !content.trim().is_empty());
        match content {
            Some(toml) => Self::try_from_toml(&toml),
            None => {
                log::debug!("No configuration found in document => load default configuration.");
                Ok(Self::default())
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::try_from(raw::Config::default()).expect("Default configuration")
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            api,
            map,
            notifications,
            log,
        } = from;

        let raw::Api { url } = api.unwrap_or_default();
        let url = url.trim_end_matches('/').to_owned();
        if url.is_empty() {
            return Err(anyhow!("Missing API URL"));
        }
        let api = Api { url };

        let raw::Map {
            tile_url,
            attribution,
            default_center,
            default_zoom,
            location_zoom,
            marker_icon,
        } = map.unwrap_or_default();
        let raw::LatLng { lat, lng } = default_center;
        let default_center = Coordinates::new(lat, lng);
        if !default_center.is_valid() {
            return Err(anyhow!("Invalid default map center ({default_center})"));
        }
        for zoom in [default_zoom, location_zoom] {
            if !zoom.is_finite() || zoom < 0.0 {
                return Err(anyhow!("Invalid map zoom level: {zoom}"));
            }
        }
        let raw::MarkerIcon {
            icon_url,
            icon_retina_url,
            shadow_url,
        } = marker_icon.unwrap_or_default();
        let map = Map {
            tile_url,
            attribution,
            view: MapView {
                default_center,
                default_zoom,
                location_zoom,
            },
            marker_icon: MarkerIcon {
                icon_url,
                icon_retina_url,
                shadow_url,
            },
        };

        let raw::Notifications { timeout_ms } = notifications.unwrap_or_default();
        if timeout_ms == 0 {
            return Err(anyhow!("The notification timeout must be positive"));
        }
        let notifications = Notifications {
            timeout: Duration::from_millis(timeout_ms.into()),
        };

        let raw::Log { level } = log.unwrap_or_default();
        let log_level = level
            .parse()
            .map_err(|_| anyhow!("Invalid log level '{level}'"))?;

        Ok(Self {
            api,
            map,
            notifications,
            log_level,
        })
    }
}
