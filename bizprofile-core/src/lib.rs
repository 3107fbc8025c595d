#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # bizprofile-core
//!
//! State logic of the business profile editor.
//!
//! Nothing in here knows about the DOM, Leaflet or HTTP: the browser
//! specific parts are plugged in through the [`map::MapWidget`] and
//! [`geocoding::GeocodingGateway`] traits.

pub mod draft;
pub mod geo;
pub mod geocoding;
pub mod geolocation;
pub mod location;
pub mod map;
pub mod notification;
pub mod payload;
pub mod submit;
pub mod validate;

pub use self::{
    draft::{Address, FieldPath, ProfileDraft, UnknownField},
    geo::Coordinates,
    location::{LocationSelection, PinnedLocation},
    payload::{assemble_payload, ProfilePayload},
};
