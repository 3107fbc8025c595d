use async_trait::async_trait;

use bizprofile_core::{
    geocoding::{GeocodingError, GeocodingGateway},
    Coordinates, PinnedLocation,
};
use bizprofile_frontend_api as api;

/// [`GeocodingGateway`] that talks to the backend via HTTP.
#[derive(Debug, Clone)]
pub struct HttpGeocoding {
    api: api::GeocodingApi,
}

impl HttpGeocoding {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self {
            api: api::GeocodingApi::new(url),
        }
    }
}

#[async_trait(?Send)]
impl GeocodingGateway for HttpGeocoding {
    async fn reverse_geocode(&self, pos: Coordinates) -> Result<String, GeocodingError> {
        let response = self
            .api
            .reverse_geocode(pos.into())
            .await
            .map_err(geocoding_error)?;
        Ok(response.address)
    }

    async fn geocode(&self, query: &str) -> Result<PinnedLocation, GeocodingError> {
        let response = self.api.geocode(query).await.map_err(geocoding_error)?;
        Ok(response.into())
    }
}

fn geocoding_error(err: api::Error) -> GeocodingError {
    match err {
        api::Error::Fetch(msg) => GeocodingError::Network(msg),
        api::Error::Api(err) => GeocodingError::Service {
            status: err.http_status,
            message: err.message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_api_errors() {
        assert_eq!(
            geocoding_error(api::Error::Fetch("offline".into())),
            GeocodingError::Network("offline".into())
        );
        assert_eq!(
            geocoding_error(api::Error::Api(bizprofile_boundary::Error {
                http_status: 502,
                message: "Bad Gateway".into(),
            })),
            GeocodingError::Service {
                status: 502,
                message: "Bad Gateway".into(),
            }
        );
    }
}
