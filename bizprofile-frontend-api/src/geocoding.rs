use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use bizprofile_boundary::{Coordinates, GeocodeResponse, ReverseGeocodeResponse};

use crate::{into_json, Result};

/// Geocoding endpoints of the backend
#[derive(Debug, Clone)]
pub struct GeocodingApi {
    url: String,
}

impl GeocodingApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn reverse_geocode(&self, pos: Coordinates) -> Result<ReverseGeocodeResponse> {
        let url = reverse_geocode_url(&self.url, pos);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn geocode(&self, address: &str) -> Result<GeocodeResponse> {
        let url = geocode_url(&self.url, address);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}

fn reverse_geocode_url(base_url: &str, pos: Coordinates) -> String {
    let Coordinates { lat, lng } = pos;
    format!("{base_url}/maps/reverse-geocode?lat={lat}&lng={lng}")
}

fn geocode_url(base_url: &str, address: &str) -> String {
    let encoded_address = utf8_percent_encode(address, NON_ALPHANUMERIC);
    format!("{base_url}/maps/geocode?address={encoded_address}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_reverse_geocode_url() {
        let pos = Coordinates {
            lat: 18.5204,
            lng: -73.25,
        };
        assert_eq!(
            reverse_geocode_url("/api", pos),
            "/api/maps/reverse-geocode?lat=18.5204&lng=-73.25"
        );
    }

    #[test]
    fn build_geocode_url() {
        assert_eq!(
            geocode_url("/api", "12 MG Road, Pune"),
            "/api/maps/geocode?address=12%20MG%20Road%2C%20Pune"
        );
    }
}
