use leptos::{ev, *};
use web_sys::HtmlInputElement;

use bizprofile_core::ProfileDraft;

use crate::browser;

#[component]
pub fn IconUpload(
    draft: RwSignal<ProfileDraft>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let read_icon = Action::new(move |file: &web_sys::File| {
        let file = file.clone();
        async move {
            match browser::read_file_as_data_url(file).await {
                Ok(data_url) => {
                    draft.try_update(|draft| draft.profile_icon = Some(data_url));
                }
                Err(err) => {
                    log::warn!("Unable to read profile icon: {err}");
                }
            }
        }
    });

    let on_change = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            read_icon.dispatch(file);
        }
        // Allow to select the same file again after removing it
        input.set_value("");
    };

    let icon = move || draft.with(|draft| draft.profile_icon.clone());

    view! {
      <div class="flex items-center gap-x-4">
        { move || match icon() {
            Some(src) => view! {
              <img class="h-16 w-16 rounded-full object-cover" src=src alt="Profile icon" />
            }.into_view(),
            None => view! {
              <div class="h-16 w-16 rounded-full bg-gray-100"></div>
            }.into_view(),
          }
        }
        <label class="cursor-pointer rounded-md bg-white px-3 py-2 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50">
          "Upload icon"
          <input
            type="file"
            accept="image/*"
            class="sr-only"
            prop:disabled=move || disabled.get()
            on:change=on_change
          />
        </label>
        <Show when=move || draft.with(|draft| draft.profile_icon.is_some())>
          <button
            type="button"
            class="text-sm text-red-700 hover:underline"
            prop:disabled=move || disabled.get()
            on:click=move |_| draft.update(|draft| draft.profile_icon = None)
          >
            "Remove icon"
          </button>
        </Show>
      </div>
    }
}
