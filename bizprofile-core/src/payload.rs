use crate::{
    draft::{Address, ProfileDraft},
    location::{LocationSelection, PinnedLocation},
};

/// Everything that is handed over to the save callback.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePayload {
    pub profile_icon: Option<String>,
    pub company_name: String,
    pub owner_name: String,
    pub pan_card: String,
    pub address: Address,
    pub location: Option<PinnedLocation>,
}

#[must_use]
pub fn assemble_payload(draft: &ProfileDraft, selection: &LocationSelection) -> ProfilePayload {
    let ProfileDraft {
        profile_icon,
        company_name,
        owner_name,
        pan_card,
        address,
    } = draft.clone();
    ProfilePayload {
        profile_icon,
        company_name,
        owner_name,
        pan_card,
        address,
        location: selection.pinned(),
    }
}
