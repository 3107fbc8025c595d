use leptos::*;

use bizprofile_core::{
    geocoding::{
        apply_geocoded, apply_reverse_geocoded, clear_location, geocode_address, pick_location,
        GeocodingGateway, RequestSequence, Ticket,
    },
    geolocation::apply_current_position,
    location::LocationSelection,
    map::MapAdapter,
    Coordinates, PinnedLocation, ProfileDraft,
};

use super::notifications::use_notifications;
use crate::{
    browser,
    config::Config,
    gateways::HttpGeocoding,
    map::{LeafletMap, MarkerIcon},
};

const BUTTON_CLASS: &str = "rounded-md bg-white px-3 py-2 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50 disabled:opacity-50";

/// Pick the location of the business on a map,
/// from the current position of the device
/// or by looking up the address of the draft.
#[component]
pub fn LocationPicker(
    selection: RwSignal<LocationSelection>,
    draft: RwSignal<ProfileDraft>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let config = expect_context::<Config>();
    let geocoding = expect_context::<HttpGeocoding>();
    let marker_icon = use_context::<MarkerIcon>();
    let notifications = use_notifications();

    // -- state -- //

    let adapter = store_value(MapAdapter::<LeafletMap>::new(config.map.view));
    let sequence = store_value(RequestSequence::default());
    let map_visible = RwSignal::new(false);
    let container = create_node_ref::<html::Div>();

    // -- actions -- //

    let reverse_geocode = Action::new({
        let geocoding = geocoding.clone();
        move |&(pos, ticket): &(Coordinates, Ticket)| {
            let geocoding = geocoding.clone();
            async move {
                let result = geocoding.reverse_geocode(pos).await;
                sequence.try_with_value(|sequence| {
                    selection.try_update(|selection| {
                        apply_reverse_geocoded(selection, sequence, ticket, result);
                    });
                });
            }
        }
    });

    let find_address = Action::new(move |()| {
        let geocoding = geocoding.clone();
        let address = draft.with_untracked(|draft| draft.address.clone());
        async move {
            let result = geocode_address(&geocoding, &address).await;
            let found = result.as_ref().ok().map(|location| location.coordinates);
            let notice = sequence
                .try_update_value(|sequence| {
                    selection.try_update(|selection| apply_geocoded(selection, sequence, result))
                })
                .flatten();
            if let Some(pos) = found {
                adapter.try_with_value(|adapter| adapter.center_on(pos));
            }
            if let Some(notice) = notice {
                notifications.notify(notice);
            }
        }
    });

    let locate = Action::new(move |()| async move {
        let result = browser::current_position().await;
        let located = sequence
            .try_update_value(|sequence| {
                selection.try_update(|selection| apply_current_position(selection, sequence, result))
            })
            .flatten();
        match located {
            Some(Ok((pos, ticket))) => {
                adapter.try_with_value(|adapter| adapter.center_on(pos));
                reverse_geocode.dispatch((pos, ticket));
            }
            Some(Err(notice)) => notifications.notify(notice),
            None => {}
        }
    });

    // -- callbacks -- //

    let on_map_click = move |pos: Coordinates| {
        let ticket = sequence
            .try_update_value(|sequence| {
                selection.try_update(|selection| pick_location(selection, sequence, pos))
            })
            .flatten();
        if let Some(ticket) = ticket {
            reverse_geocode.dispatch((pos, ticket));
        }
    };

    let toggle_map = move |_| {
        if let Some(visible) = adapter.try_update_value(MapAdapter::toggle) {
            map_visible.set(visible);
        }
    };

    let on_clear = move |_| {
        sequence.try_update_value(|sequence| {
            selection.try_update(|selection| clear_location(selection, sequence));
        });
    };

    // -- effects -- //

    let coordinates = create_memo(move |_| selection.with(|selection| selection.coordinates));

    Effect::new(move |_| {
        let pos = coordinates.get();
        adapter.try_update_value(|adapter| adapter.sync_marker(pos));
    });

    Effect::new(move |_| {
        if !map_visible.get() {
            return;
        }
        let Some(container) = container.get() else {
            log::warn!("No map container found");
            return;
        };
        let location = coordinates.get_untracked();
        let map_config = &config.map;
        let marker_icon = marker_icon.clone();
        adapter.try_update_value(|adapter| {
            adapter.initialize(
                || LeafletMap::new(&container, map_config, marker_icon, on_map_click),
                location,
            )
        });
        // The container has just become visible
        request_animation_frame(move || {
            adapter.try_with_value(MapAdapter::refresh);
        });
    });

    on_cleanup(move || {
        adapter.try_update_value(MapAdapter::dispose);
    });

    // -- view -- //

    let locating = locate.pending();
    let searching = find_address.pending();

    view! {
      <fieldset class="space-y-3">
        <legend class="text-sm font-semibold text-gray-900">"Location"</legend>
        <div class="flex flex-wrap gap-2">
          <button type="button" class=BUTTON_CLASS on:click=toggle_map>
            { move || if map_visible.get() { "Hide map" } else { "Pick on map" } }
          </button>
          <button
            type="button"
            class=BUTTON_CLASS
            prop:disabled=move || disabled.get() || locating.get()
            on:click=move |_| locate.dispatch(())
          >
            "Use current location"
          </button>
          <button
            type="button"
            class=BUTTON_CLASS
            prop:disabled=move || disabled.get() || searching.get()
            on:click=move |_| find_address.dispatch(())
          >
            { move || if searching.get() { "Searching..." } else { "Find address on map" } }
          </button>
          <Show when=move || selection.with(LocationSelection::is_pinned)>
            <button
              type="button"
              class=BUTTON_CLASS
              prop:disabled=move || disabled.get()
              on:click=on_clear
            >
              "Clear location"
            </button>
          </Show>
        </div>
        <div
          node_ref=container
          class="h-64 w-full rounded-md ring-1 ring-gray-300"
          class:hidden=move || !map_visible.get()
        ></div>
        { move || selection.with(LocationSelection::pinned).map(|PinnedLocation { coordinates, address }| view! {
            <p class="text-sm text-gray-600">
              <span class="font-mono">{ coordinates.to_string() }</span>
              { (!address.is_empty()).then(|| view! { <br/><span>{ address }</span> }) }
            </p>
          })
        }
      </fieldset>
    }
}
