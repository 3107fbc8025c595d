use gloo_storage::{LocalStorage, Storage};
use leptos::*;

use bizprofile_boundary::{BusinessProfile, ProfilePayload, StoredLocation};
use bizprofile_core::{notification::Notice, Coordinates};

mod browser;
mod components;
pub mod config;
mod gateways;
mod map;

pub use self::{
    components::{ProfileModal, SaveFuture},
    map::MarkerIcon,
};

use self::{
    components::{NotificationCenter, Toasts},
    config::Config,
    gateways::HttpGeocoding,
};

const PROFILE_STORAGE_KEY: &str = "business-profile";

#[component]
#[must_use]
pub fn App(config: Config, marker_icon: MarkerIcon) -> impl IntoView {
    // -- context -- //

    let notifications = NotificationCenter::new(config.notifications.timeout);
    provide_context(notifications);
    provide_context(HttpGeocoding::new(config.api.url.clone()));
    provide_context(marker_icon);
    provide_context(config);

    // -- signals -- //

    let profile = RwSignal::new(load_profile());
    let modal_open = RwSignal::new(false);

    // -- callbacks -- //

    let on_close = Callback::new(move |()| modal_open.set(false));

    let on_save = Callback::new(move |payload: ProfilePayload| -> SaveFuture {
        Box::pin(async move {
            let saved = store_profile(payload)?;
            profile.set(Some(saved));
            notifications.notify(Notice::success("Business profile saved"));
            Ok::<_, anyhow::Error>(())
        })
    });

    view! {
      <main class="mx-auto max-w-3xl p-6">
        <div class="mb-6 flex items-center justify-between">
          <h1 class="text-2xl font-semibold text-gray-900">"Business profile"</h1>
          <button
            class="rounded-md bg-indigo-600 px-3 py-2 text-sm font-semibold text-white shadow-sm hover:bg-indigo-500"
            on:click=move |_| modal_open.set(true)
          >
            { move || if profile.with(Option::is_some) { "Edit profile" } else { "Create profile" } }
          </button>
        </div>
        <ProfileSummary profile = profile.into() />
        <ProfileModal open = modal_open profile on_close on_save />
        <Toasts />
      </main>
    }
}

#[component]
fn ProfileSummary(profile: Signal<Option<BusinessProfile>>) -> impl IntoView {
    move || match profile.get() {
        None => view! {
          <p class="text-gray-600">"No business profile yet."</p>
        }
        .into_view(),
        Some(profile) => {
            let BusinessProfile {
                profile_icon,
                company_name,
                owner_name,
                pan_card,
                address,
                location,
            } = profile;
            let address = [
                address.line1,
                address.line2,
                address.city,
                address.state,
                address.pincode,
                address.country,
            ]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ");
            let location = location.map(|StoredLocation { coordinates, address }| {
                format!("{} ({address})", Coordinates::from_lng_lat(coordinates))
            });
            view! {
              <div class="flex gap-x-4 rounded-lg bg-white p-6 shadow">
                { profile_icon.map(|src| view! {
                    <img class="h-16 w-16 rounded-full object-cover" src=src alt="Profile icon" />
                  })
                }
                <dl class="space-y-1 text-sm text-gray-700">
                  <dt class="text-lg font-semibold text-gray-900">{ company_name }</dt>
                  <dd>{ owner_name }</dd>
                  <dd class="font-mono">{ pan_card }</dd>
                  <dd>{ address }</dd>
                  <dd>{ location }</dd>
                </dl>
              </div>
            }
            .into_view()
        }
    }
}

fn load_profile() -> Option<BusinessProfile> {
    match LocalStorage::get(PROFILE_STORAGE_KEY) {
        Ok(profile) => Some(profile),
        Err(err) => {
            log::debug!("No stored business profile: {err}");
            None
        }
    }
}

fn store_profile(payload: ProfilePayload) -> anyhow::Result<BusinessProfile> {
    let profile = BusinessProfile::from(payload);
    LocalStorage::set(PROFILE_STORAGE_KEY, &profile)?;
    log::info!("Stored business profile of {}", profile.company_name);
    Ok(profile)
}

/// Send log records to the browser console.
///
/// An already installed logger is kept, including its level.
pub fn init_logging(level: log::Level) {
    _ = console_log::init_with_level(level);
}

/// Mount the application into the body of the current document.
pub fn run(config: Config) {
    let marker_icon = MarkerIcon::new(&config.map.marker_icon);
    mount_to_body(move || view! { <App config marker_icon /> });
}
