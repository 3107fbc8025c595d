use async_trait::async_trait;
use thiserror::Error;

use crate::{
    draft::Address,
    geo::Coordinates,
    location::{LocationSelection, PinnedLocation},
    notification::Notice,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodingError {
    #[error("Please enter an address first")]
    EmptyQuery,
    #[error("The geocoding service responded with {status}: {message}")]
    Service { status: u16, message: String },
    #[error("Unable to reach the geocoding service: {0}")]
    Network(String),
}

#[async_trait(?Send)]
pub trait GeocodingGateway {
    async fn reverse_geocode(&self, pos: Coordinates) -> Result<String, GeocodingError>;
    async fn geocode(&self, query: &str) -> Result<PinnedLocation, GeocodingError>;
}

/// Identifies a request within a [`RequestSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out tickets so that only the response of the most recent
/// request is applied.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Outdate all tickets issued so far.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    #[must_use]
    pub const fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

/// Pin `pos` and issue the ticket for resolving its address.
///
/// The previous address is kept until the response arrives.
pub fn pick_location(
    selection: &mut LocationSelection,
    sequence: &mut RequestSequence,
    pos: Coordinates,
) -> Ticket {
    log::debug!("Picked {pos}");
    selection.pick(pos);
    sequence.issue()
}

/// Remove the pin and outdate all pending reverse geocoding requests.
pub fn clear_location(selection: &mut LocationSelection, sequence: &mut RequestSequence) {
    sequence.invalidate();
    selection.clear();
}

/// Apply the result of a reverse geocoding request.
///
/// Failures and stale responses leave the selection untouched.
/// Returns `true` if the address has been replaced.
pub fn apply_reverse_geocoded(
    selection: &mut LocationSelection,
    sequence: &RequestSequence,
    ticket: Ticket,
    result: Result<String, GeocodingError>,
) -> bool {
    if !sequence.is_latest(ticket) {
        log::debug!("Discard outdated reverse geocoding response");
        return false;
    }
    match result {
        Ok(address) => {
            selection.address = address;
            true
        }
        Err(err) => {
            log::warn!("Unable to resolve address: {err}");
            false
        }
    }
}

/// Look up the coordinates of the given address.
pub async fn geocode_address<G>(
    gateway: &G,
    address: &Address,
) -> Result<PinnedLocation, GeocodingError>
where
    G: GeocodingGateway + ?Sized,
{
    let query = address.geocoding_query().ok_or(GeocodingError::EmptyQuery)?;
    log::debug!("Geocode '{query}'");
    gateway.geocode(&query).await
}

/// Apply the result of a forward geocoding request.
///
/// Exactly one notice is returned for the user.
/// On success all pending reverse geocoding requests are outdated.
pub fn apply_geocoded(
    selection: &mut LocationSelection,
    sequence: &mut RequestSequence,
    result: Result<PinnedLocation, GeocodingError>,
) -> Notice {
    match result {
        Ok(location) => {
            log::info!("Found location {}", location.coordinates);
            sequence.invalidate();
            *selection = location.into();
            Notice::success("Location found")
        }
        Err(err) => {
            log::warn!("Unable to geocode address: {err}");
            Notice::error(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::notification::{Level, Notifications};

    #[derive(Default)]
    struct FakeGateway {
        reverse: Option<Result<String, GeocodingError>>,
        forward: Option<Result<PinnedLocation, GeocodingError>>,
        queries: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl GeocodingGateway for FakeGateway {
        async fn reverse_geocode(&self, _: Coordinates) -> Result<String, GeocodingError> {
            self.reverse.clone().expect("reverse response")
        }
        async fn geocode(&self, query: &str) -> Result<PinnedLocation, GeocodingError> {
            self.queries.borrow_mut().push(query.to_owned());
            self.forward.clone().expect("forward response")
        }
    }

    fn address() -> Address {
        Address {
            line1: "12 MG Road".into(),
            city: "Pune".into(),
            state: "Maharashtra".into(),
            pincode: "411001".into(),
            country: "India".into(),
            ..Default::default()
        }
    }

    fn selection() -> LocationSelection {
        LocationSelection {
            coordinates: Some(Coordinates::new(1.0, 2.0)),
            address: "Old address".into(),
        }
    }

    #[tokio::test]
    async fn failed_geocoding_leaves_selection_unchanged() {
        let gateway = FakeGateway {
            forward: Some(Err(GeocodingError::Service {
                status: 404,
                message: "Not Found".into(),
            })),
            ..Default::default()
        };
        let mut sequence = RequestSequence::default();
        let mut current = selection();
        let mut notifications = Notifications::default();

        let result = geocode_address(&gateway, &address()).await;
        notifications.push(apply_geocoded(&mut current, &mut sequence, result));

        assert_eq!(current, selection());
        assert_eq!(notifications.iter().count(), 1);
        let notification = notifications.iter().next().unwrap();
        assert_eq!(notification.notice.level, Level::Error);
        assert_eq!(
            gateway.queries.borrow().as_slice(),
            ["12 MG Road, Pune, Maharashtra, 411001, India"]
        );
    }

    #[tokio::test]
    async fn network_failure_yields_error_notice() {
        let gateway = FakeGateway {
            forward: Some(Err(GeocodingError::Network("offline".into()))),
            ..Default::default()
        };
        let mut sequence = RequestSequence::default();
        let mut current = selection();
        let result = geocode_address(&gateway, &address()).await;
        let notice = apply_geocoded(&mut current, &mut sequence, result);
        assert_eq!(notice.level, Level::Error);
        assert_eq!(current, selection());
    }

    #[tokio::test]
    async fn successful_geocoding_replaces_selection() {
        let found = PinnedLocation {
            coordinates: Coordinates::new(18.5204, 73.8567),
            address: "MG Road, Pune".into(),
        };
        let gateway = FakeGateway {
            forward: Some(Ok(found.clone())),
            ..Default::default()
        };
        let mut sequence = RequestSequence::default();
        let pending = sequence.issue();
        let mut current = selection();

        let result = geocode_address(&gateway, &address()).await;
        let notice = apply_geocoded(&mut current, &mut sequence, result);

        assert_eq!(notice.level, Level::Success);
        assert_eq!(current, LocationSelection::from(found));
        assert!(!sequence.is_latest(pending));
    }

    #[tokio::test]
    async fn empty_address_is_not_sent() {
        let gateway = FakeGateway::default();
        let result = geocode_address(&gateway, &Address::default()).await;
        assert_eq!(result, Err(GeocodingError::EmptyQuery));
        assert!(gateway.queries.borrow().is_empty());
    }

    #[tokio::test]
    async fn apply_reverse_geocoded_address() {
        let gateway = FakeGateway {
            reverse: Some(Ok("Shivajinagar, Pune".into())),
            ..Default::default()
        };
        let mut sequence = RequestSequence::default();
        let mut current = selection();
        let ticket = sequence.issue();
        let result = gateway.reverse_geocode(Coordinates::new(1.0, 2.0)).await;
        assert!(apply_reverse_geocoded(&mut current, &sequence, ticket, result));
        assert_eq!(current.address, "Shivajinagar, Pune");
    }

    #[test]
    fn reverse_geocoding_failure_is_silent() {
        let sequence = &mut RequestSequence::default();
        let mut current = selection();
        let ticket = sequence.issue();
        let applied = apply_reverse_geocoded(
            &mut current,
            sequence,
            ticket,
            Err(GeocodingError::Network("offline".into())),
        );
        assert!(!applied);
        assert_eq!(current, selection());
    }

    #[test]
    fn discard_stale_reverse_geocoding_response() {
        let mut sequence = RequestSequence::default();
        let mut current = selection();
        let slow = sequence.issue();
        let fast = sequence.issue();

        assert!(apply_reverse_geocoded(
            &mut current,
            &sequence,
            fast,
            Ok("Newer".into())
        ));
        assert!(!apply_reverse_geocoded(
            &mut current,
            &sequence,
            slow,
            Ok("Older".into())
        ));
        assert_eq!(current.address, "Newer");
    }

    #[test]
    fn invalidate_outstanding_requests() {
        let mut sequence = RequestSequence::default();
        let ticket = sequence.issue();
        sequence.invalidate();
        let mut current = LocationSelection::default();
        assert!(!apply_reverse_geocoded(
            &mut current,
            &sequence,
            ticket,
            Ok("Too late".into())
        ));
        assert_eq!(current, LocationSelection::default());
    }

    #[tokio::test]
    async fn picked_location_gets_resolved_address() {
        let gateway = FakeGateway {
            reverse: Some(Ok("Koregaon Park, Pune".into())),
            ..Default::default()
        };
        let mut sequence = RequestSequence::default();
        let mut current = selection();
        let pos = Coordinates::new(18.5362, 73.8939);

        let ticket = pick_location(&mut current, &mut sequence, pos);
        assert_eq!(current.coordinates, Some(pos));
        assert_eq!(current.address, "Old address");
        assert!(sequence.is_latest(ticket));

        let result = gateway.reverse_geocode(pos).await;
        assert!(apply_reverse_geocoded(&mut current, &sequence, ticket, result));
        assert_eq!(
            current.pinned(),
            Some(PinnedLocation {
                coordinates: pos,
                address: "Koregaon Park, Pune".into(),
            })
        );
    }

    #[test]
    fn later_pick_wins() {
        let mut sequence = RequestSequence::default();
        let mut current = LocationSelection::default();
        let first = pick_location(&mut current, &mut sequence, Coordinates::new(1.0, 1.0));
        let second = pick_location(&mut current, &mut sequence, Coordinates::new(2.0, 2.0));
        assert!(apply_reverse_geocoded(
            &mut current,
            &sequence,
            second,
            Ok("Second".into())
        ));
        assert!(!apply_reverse_geocoded(
            &mut current,
            &sequence,
            first,
            Ok("First".into())
        ));
        assert_eq!(current.coordinates, Some(Coordinates::new(2.0, 2.0)));
        assert_eq!(current.address, "Second");
    }

    #[test]
    fn clear_location_drops_pending_response() {
        let mut sequence = RequestSequence::default();
        let mut current = LocationSelection::default();
        let ticket = pick_location(&mut current, &mut sequence, Coordinates::new(1.0, 2.0));

        clear_location(&mut current, &mut sequence);
        assert_eq!(current, LocationSelection::default());
        assert!(!current.is_pinned());

        assert!(!apply_reverse_geocoded(
            &mut current,
            &sequence,
            ticket,
            Ok("Arrived after clearing".into())
        ));
        assert_eq!(current, LocationSelection::default());
    }
}
