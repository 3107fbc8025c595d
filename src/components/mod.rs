mod icon_upload;
mod location_picker;
mod notifications;
mod profile_modal;

pub use self::{
    notifications::{NotificationCenter, Toasts},
    profile_modal::{ProfileModal, SaveFuture},
};
