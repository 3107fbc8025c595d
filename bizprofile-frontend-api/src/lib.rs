use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod geocoding;

pub use self::geocoding::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{} ({})", .0.message, .0.http_status)]
    Api(bizprofile_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<bizprofile_boundary::Error> for Error {
    fn from(err: bizprofile_boundary::Error) -> Self {
        Self::Api(err)
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        return Ok(response.json().await?);
    }
    let http_status = response.status();
    let status_text = response.status_text();
    // The service does not necessarily answer with a JSON body
    let err = response
        .json::<bizprofile_boundary::Error>()
        .await
        .unwrap_or(bizprofile_boundary::Error {
            http_status,
            message: status_text,
        });
    Err(err.into())
}
