use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Address {
    pub line1   : String,
    pub line2   : String,
    pub city    : String,
    pub state   : String,
    pub pincode : String,
    pub country : String,
}

/// A location as it is stored, i.e. with `[lng, lat]` coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoredLocation {
    pub coordinates: [f64; 2],
    #[serde(default)]
    pub address: String,
}

/// An existing profile the editor is opened with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessProfile {
    pub profile_icon: Option<String>,
    pub company_name: String,
    pub owner_name: String,
    pub pan_card: String,
    pub address: Address,
    pub location: Option<StoredLocation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PinnedLocation {
    pub coordinates: Coordinates,
    pub address: String,
}

/// The data handed over to the save callback.
///
/// `location` is serialized as `null` if no position has been picked.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub profile_icon: Option<String>,
    pub company_name: String,
    pub owner_name: String,
    pub pan_card: String,
    pub address: Address,
    pub location: Option<PinnedLocation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReverseGeocodeResponse {
    pub address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeocodeResponse {
    pub coordinates: Coordinates,
    pub address: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The HTTP status code.
    pub http_status: u16,
    /// The error message.
    pub message: String,
}

impl From<ProfilePayload> for BusinessProfile {
    fn from(from: ProfilePayload) -> Self {
        let ProfilePayload {
            profile_icon,
            company_name,
            owner_name,
            pan_card,
            address,
            location,
        } = from;
        let location = location.map(|PinnedLocation { coordinates, address }| StoredLocation {
            coordinates: [coordinates.lng, coordinates.lat],
            address,
        });
        Self {
            profile_icon,
            company_name,
            owner_name,
            pan_card,
            address,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(location: Option<PinnedLocation>) -> ProfilePayload {
        ProfilePayload {
            profile_icon: None,
            company_name: "Acme Traders".into(),
            owner_name: "R. Sharma".into(),
            pan_card: "ABCDE1234F".into(),
            address: Address {
                city: "Pune".into(),
                ..Default::default()
            },
            location,
        }
    }

    #[test]
    fn serialize_payload_without_location() {
        let json = serde_json::to_value(payload(None)).unwrap();
        assert_eq!(json["location"], serde_json::Value::Null);
        assert_eq!(json["companyName"], "Acme Traders");
        assert_eq!(json["panCard"], "ABCDE1234F");
        assert_eq!(json["profileIcon"], serde_json::Value::Null);
        assert_eq!(json["address"]["city"], "Pune");
    }

    #[test]
    fn serialize_payload_with_location() {
        let json = serde_json::to_value(payload(Some(PinnedLocation {
            coordinates: Coordinates {
                lat: 18.5,
                lng: 73.8,
            },
            address: "Pune".into(),
        })))
        .unwrap();
        assert_eq!(
            json["location"],
            json!({ "coordinates": { "lat": 18.5, "lng": 73.8 }, "address": "Pune" })
        );
    }

    #[test]
    fn deserialize_partial_profile() {
        let profile: BusinessProfile = serde_json::from_value(json!({
            "companyName": "Acme Traders",
            "address": { "city": "Pune" },
            "location": { "coordinates": [73.8, 18.5] }
        }))
        .unwrap();
        assert_eq!(profile.company_name, "Acme Traders");
        assert!(profile.owner_name.is_empty());
        assert_eq!(profile.address.city, "Pune");
        assert_eq!(
            profile.location,
            Some(StoredLocation {
                coordinates: [73.8, 18.5],
                address: String::new(),
            })
        );
    }

    #[test]
    fn store_saved_payload_in_lng_lat_order() {
        let profile = BusinessProfile::from(payload(Some(PinnedLocation {
            coordinates: Coordinates {
                lat: 18.5,
                lng: 73.8,
            },
            address: "Pune".into(),
        })));
        assert_eq!(profile.location.unwrap().coordinates, [73.8, 18.5]);
    }

    #[test]
    fn deserialize_geocode_response() {
        let res: GeocodeResponse = serde_json::from_str(
            r#"{"coordinates":{"lat":18.5204,"lng":73.8567},"address":"Pune, India"}"#,
        )
        .unwrap();
        assert_eq!(res.coordinates.lat, 18.5204);
        assert_eq!(res.address, "Pune, India");
    }
}
