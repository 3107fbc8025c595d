use bizprofile_core as e;

use super::*;

impl From<Coordinates> for e::Coordinates {
    fn from(from: Coordinates) -> Self {
        let Coordinates { lat, lng } = from;
        Self { lat, lng }
    }
}

impl From<e::Coordinates> for Coordinates {
    fn from(from: e::Coordinates) -> Self {
        let e::Coordinates { lat, lng } = from;
        Self { lat, lng }
    }
}

impl From<Address> for e::Address {
    fn from(from: Address) -> Self {
        let Address {
            line1,
            line2,
            city,
            state,
            pincode,
            country,
        } = from;
        Self {
            line1,
            line2,
            city,
            state,
            pincode,
            country,
        }
    }
}

impl From<e::Address> for Address {
    fn from(from: e::Address) -> Self {
        let e::Address {
            line1,
            line2,
            city,
            state,
            pincode,
            country,
        } = from;
        Self {
            line1,
            line2,
            city,
            state,
            pincode,
            country,
        }
    }
}

impl From<StoredLocation> for e::LocationSelection {
    fn from(from: StoredLocation) -> Self {
        let StoredLocation {
            coordinates,
            address,
        } = from;
        Self {
            coordinates: Some(e::Coordinates::from_lng_lat(coordinates)),
            address,
        }
    }
}

impl From<GeocodeResponse> for e::PinnedLocation {
    fn from(from: GeocodeResponse) -> Self {
        let GeocodeResponse {
            coordinates,
            address,
        } = from;
        Self {
            coordinates: coordinates.into(),
            address,
        }
    }
}

impl From<e::PinnedLocation> for PinnedLocation {
    fn from(from: e::PinnedLocation) -> Self {
        let e::PinnedLocation {
            coordinates,
            address,
        } = from;
        Self {
            coordinates: coordinates.into(),
            address,
        }
    }
}

impl From<e::ProfilePayload> for ProfilePayload {
    fn from(from: e::ProfilePayload) -> Self {
        let e::ProfilePayload {
            profile_icon,
            company_name,
            owner_name,
            pan_card,
            address,
            location,
        } = from;
        Self {
            profile_icon,
            company_name,
            owner_name,
            pan_card,
            address: address.into(),
            location: location.map(Into::into),
        }
    }
}

impl BusinessProfile {
    /// Split the profile into the editable draft and the picked location.
    #[must_use]
    pub fn into_draft(self) -> (e::ProfileDraft, e::LocationSelection) {
        let Self {
            profile_icon,
            company_name,
            owner_name,
            pan_card,
            address,
            location,
        } = self;
        let draft = e::ProfileDraft {
            profile_icon,
            company_name,
            owner_name,
            pan_card,
            address: address.into(),
        };
        (draft, location.map(Into::into).unwrap_or_default())
    }
}
