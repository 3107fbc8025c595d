use std::str::FromStr;

use strum::{EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub line1   : String,
    pub line2   : String,
    pub city    : String,
    pub state   : String,
    pub pincode : String,
    pub country : String,
}

impl Address {
    fn parts(&self) -> [&str; 6] {
        [
            &self.line1,
            &self.line2,
            &self.city,
            &self.state,
            &self.pincode,
            &self.country,
        ]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts().iter().all(|p| p.trim().is_empty())
    }

    /// A single line query for the geocoding service.
    ///
    /// Blank parts are skipped, so an empty address yields `None`.
    #[must_use]
    pub fn geocoding_query(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let query = self
            .parts()
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        Some(query)
    }
}

/// Names of the editable text fields as used in the HTML form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum FieldPath {
    #[strum(serialize = "companyName")]
    CompanyName,
    #[strum(serialize = "ownerName")]
    OwnerName,
    #[strum(serialize = "panCard")]
    PanCard,
    #[strum(serialize = "address.line1")]
    Line1,
    #[strum(serialize = "address.line2")]
    Line2,
    #[strum(serialize = "address.city")]
    City,
    #[strum(serialize = "address.state")]
    State,
    #[strum(serialize = "address.pincode")]
    Pincode,
    #[strum(serialize = "address.country")]
    Country,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown profile field: {0}")]
pub struct UnknownField(pub String);

impl FieldPath {
    pub fn parse(name: &str) -> Result<Self, UnknownField> {
        Self::from_str(name).map_err(|_| UnknownField(name.to_owned()))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyName => "Company name",
            Self::OwnerName => "Owner name",
            Self::PanCard => "PAN",
            Self::Line1 => "Address line 1",
            Self::Line2 => "Address line 2",
            Self::City => "City",
            Self::State => "State",
            Self::Pincode => "Pincode",
            Self::Country => "Country",
        }
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Self::CompanyName
                | Self::OwnerName
                | Self::Line1
                | Self::City
                | Self::State
                | Self::Pincode
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileDraft {
    /// Image reference, usually a `data:` URL.
    pub profile_icon: Option<String>,
    pub company_name: String,
    pub owner_name: String,
    pub pan_card: String,
    pub address: Address,
}

impl ProfileDraft {
    #[must_use]
    pub fn field(&self, path: FieldPath) -> &str {
        match path {
            FieldPath::CompanyName => &self.company_name,
            FieldPath::OwnerName => &self.owner_name,
            FieldPath::PanCard => &self.pan_card,
            FieldPath::Line1 => &self.address.line1,
            FieldPath::Line2 => &self.address.line2,
            FieldPath::City => &self.address.city,
            FieldPath::State => &self.address.state,
            FieldPath::Pincode => &self.address.pincode,
            FieldPath::Country => &self.address.country,
        }
    }

    fn field_mut(&mut self, path: FieldPath) -> &mut String {
        match path {
            FieldPath::CompanyName => &mut self.company_name,
            FieldPath::OwnerName => &mut self.owner_name,
            FieldPath::PanCard => &mut self.pan_card,
            FieldPath::Line1 => &mut self.address.line1,
            FieldPath::Line2 => &mut self.address.line2,
            FieldPath::City => &mut self.address.city,
            FieldPath::State => &mut self.address.state,
            FieldPath::Pincode => &mut self.address.pincode,
            FieldPath::Country => &mut self.address.country,
        }
    }

    /// Update a single field.
    ///
    /// The PAN is normalized to upper case while typing.
    pub fn set_field(&mut self, path: FieldPath, value: String) {
        let value = match path {
            FieldPath::PanCard => normalize_pan(&value),
            _ => value,
        };
        *self.field_mut(path) = value;
    }
}

#[must_use]
pub fn normalize_pan(pan: &str) -> String {
    pan.trim().to_uppercase()
}
