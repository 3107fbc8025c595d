use thiserror::Error;

use crate::{
    geo::Coordinates,
    geocoding::{pick_location, RequestSequence, Ticket},
    location::LocationSelection,
    notification::Notice,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("Geolocation is not supported by your browser")]
    Unsupported,
    #[error("Unable to retrieve your location: {0}")]
    Failed(String),
}

/// Pin the position reported by the device.
///
/// On success the position is returned together with the ticket of the
/// reverse geocoding request for it. Otherwise the selection is left
/// untouched and the user gets an error notice.
pub fn apply_current_position(
    selection: &mut LocationSelection,
    sequence: &mut RequestSequence,
    result: Result<Coordinates, GeolocationError>,
) -> Result<(Coordinates, Ticket), Notice> {
    match result {
        Ok(pos) => {
            log::debug!("Current position is {pos}");
            let ticket = pick_location(selection, sequence, pos);
            Ok((pos, ticket))
        }
        Err(err) => {
            log::warn!("{err}");
            Err(Notice::error(err.to_string()))
        }
    }
}
