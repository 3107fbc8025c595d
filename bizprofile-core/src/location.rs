use crate::geo::Coordinates;

/// The location currently picked in the editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationSelection {
    pub coordinates: Option<Coordinates>,
    pub address: String,
}

/// A location with known coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PinnedLocation {
    pub coordinates: Coordinates,
    pub address: String,
}

impl LocationSelection {
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Move the pin; the address is kept until it has been resolved.
    pub fn pick(&mut self, coordinates: Coordinates) {
        self.coordinates = Some(coordinates);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn pinned(&self) -> Option<PinnedLocation> {
        self.coordinates.map(|coordinates| PinnedLocation {
            coordinates,
            address: self.address.clone(),
        })
    }
}

impl From<PinnedLocation> for LocationSelection {
    fn from(from: PinnedLocation) -> Self {
        let PinnedLocation {
            coordinates,
            address,
        } = from;
        Self {
            coordinates: Some(coordinates),
            address,
        }
    }
}
