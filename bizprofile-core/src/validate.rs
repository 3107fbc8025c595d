use lazy_static::lazy_static;
use regex::Regex;
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::draft::{FieldPath, ProfileDraft};

/// Five upper case letters, four digits and one upper case letter.
///
/// Unanchored, so it can be used as HTML `pattern` attribute as well.
pub const PAN_PATTERN: &str = "[A-Z]{5}[0-9]{4}[A-Z]";

/// Six digits without a leading zero.
pub const PINCODE_PATTERN: &str = "[1-9][0-9]{5}";

lazy_static! {
    static ref PAN_REGEX: Regex = Regex::new(&format!("^{PAN_PATTERN}$")).unwrap();
    static ref PINCODE_REGEX: Regex = Regex::new(&format!("^{PINCODE_PATTERN}$")).unwrap();
}

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

/// Case sensitive: lower case input has to be normalized first.
#[must_use]
pub fn is_valid_pan(pan: &str) -> bool {
    PAN_REGEX.is_match(pan)
}

#[must_use]
pub fn is_valid_pincode(pincode: &str) -> bool {
    PINCODE_REGEX.is_match(pincode)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileInvalidation {
    #[error("{} is required", .0.label())]
    Missing(FieldPath),
    #[error("Invalid PAN (expected e.g. ABCDE1234F)")]
    PanCard,
    #[error("Invalid pincode (expected 6 digits not starting with 0)")]
    Pincode,
}

impl Validate for ProfileDraft {
    type Error = ProfileInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if let Some(path) =
            FieldPath::iter().find(|p| p.is_required() && self.field(*p).trim().is_empty())
        {
            return Err(Self::Error::Missing(path));
        }
        if !self.pan_card.is_empty() && !is_valid_pan(&self.pan_card) {
            return Err(Self::Error::PanCard);
        }
        if !is_valid_pincode(&self.address.pincode) {
            return Err(Self::Error::Pincode);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Address;

    fn valid_draft() -> ProfileDraft {
        ProfileDraft {
            profile_icon: None,
            company_name: "Acme Traders".into(),
            owner_name: "R. Sharma".into(),
            pan_card: "ABCDE1234F".into(),
            address: Address {
                line1: "12 MG Road".into(),
                line2: String::new(),
                city: "Pune".into(),
                state: "Maharashtra".into(),
                pincode: "411001".into(),
                country: "India".into(),
            },
        }
    }

    #[test]
    fn pan_test() {
        assert!(is_valid_pan("ABCDE1234F"));
        assert!(!is_valid_pan("abcde1234f"));
        assert!(!is_valid_pan("ABCD1234F"));
        assert!(!is_valid_pan("ABCDE1234FX"));
        assert!(!is_valid_pan(""));
    }

    #[test]
    fn lower_case_pan_is_accepted_after_typing() {
        let mut draft = valid_draft();
        draft.set_field(FieldPath::PanCard, "abcde1234f".into());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn pincode_test() {
        assert!(is_valid_pincode("560001"));
        assert!(!is_valid_pincode("060001"));
        assert!(!is_valid_pincode("56001"));
        assert!(!is_valid_pincode("5600011"));
        assert!(!is_valid_pincode("56o001"));
    }

    #[test]
    fn valid_profile() {
        assert_eq!(valid_draft().validate(), Ok(()));
        let draft = ProfileDraft {
            pan_card: String::new(),
            ..valid_draft()
        };
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn missing_required_fields() {
        let mut draft = valid_draft();
        draft.address.city = "  ".into();
        assert_eq!(
            draft.validate(),
            Err(ProfileInvalidation::Missing(FieldPath::City))
        );
        draft.company_name.clear();
        assert_eq!(
            draft.validate(),
            Err(ProfileInvalidation::Missing(FieldPath::CompanyName))
        );
        assert_eq!(
            draft.validate().unwrap_err().to_string(),
            "Company name is required"
        );
    }

    #[test]
    fn invalid_pan_and_pincode() {
        let draft = ProfileDraft {
            pan_card: "abcde1234f".into(),
            ..valid_draft()
        };
        assert_eq!(draft.validate(), Err(ProfileInvalidation::PanCard));
        let mut draft = valid_draft();
        draft.address.pincode = "012345".into();
        assert_eq!(draft.validate(), Err(ProfileInvalidation::Pincode));
    }
}
