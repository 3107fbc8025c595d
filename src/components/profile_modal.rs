use std::{future::Future, pin::Pin};

use leptos::{ev, *};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use bizprofile_boundary::{BusinessProfile, ProfilePayload};
use bizprofile_core::{
    submit::{SaveOutcome, Submission},
    validate::{PAN_PATTERN, PINCODE_PATTERN},
    FieldPath, ProfileDraft,
};

use super::{
    icon_upload::IconUpload, location_picker::LocationPicker, notifications::use_notifications,
};

/// The future returned by the save callback.
pub type SaveFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>>>>;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border-0 py-1.5 px-3 text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 focus:ring-2 focus:ring-inset focus:ring-indigo-600 disabled:bg-gray-50 sm:text-sm";

/// Modal dialog for creating or editing a business profile.
///
/// The form is rebuilt from `profile` every time the modal opens.
/// It is closed by `on_close` once `on_save` resolved successfully.
#[component]
pub fn ProfileModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] profile: Signal<Option<BusinessProfile>>,
    on_close: Callback<()>,
    on_save: Callback<ProfilePayload, SaveFuture>,
) -> impl IntoView {
    view! {
      <Show when=move || open.get()>
        <div class="fixed inset-0 z-40 flex items-center justify-center bg-gray-500/75 p-4">
          <div
            role="dialog"
            aria-modal="true"
            class="max-h-full w-full max-w-2xl overflow-y-auto rounded-lg bg-white p-6 shadow-xl"
          >
            <ProfileForm profile=profile.get_untracked() on_close on_save />
          </div>
        </div>
      </Show>
    }
}

#[component]
fn ProfileForm(
    profile: Option<BusinessProfile>,
    on_close: Callback<()>,
    on_save: Callback<ProfilePayload, SaveFuture>,
) -> impl IntoView {
    let notifications = use_notifications();

    // -- signals -- //

    let (draft, selection) = profile.unwrap_or_default().into_draft();
    let draft = RwSignal::new(draft);
    let selection = RwSignal::new(selection);
    let submission = RwSignal::new(Submission::default());
    let saving = Signal::derive(move || submission.with(Submission::is_saving));

    // -- actions -- //

    let save = Action::new(move |payload: &ProfilePayload| {
        let payload = payload.clone();
        async move {
            let result = on_save.call(payload).await;
            let outcome = submission.try_update(|submission| submission.finish(result));
            if outcome == Some(SaveOutcome::Saved) {
                on_close.call(());
            }
        }
    });

    // -- callbacks -- //

    let on_input = move |ev: ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let name = input.name();
        if name.is_empty() {
            return;
        }
        match FieldPath::parse(&name) {
            Ok(path) => draft.update(|draft| draft.set_field(path, input.value())),
            Err(err) => log::warn!("{err}"),
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let started = submission.try_update(|submission| {
            draft.with_untracked(|draft| {
                selection.with_untracked(|selection| submission.begin(draft, selection))
            })
        });
        match started {
            Some(Ok(payload)) => save.dispatch(payload.into()),
            Some(Err(err)) => {
                log::debug!("Business profile not submitted: {err}");
                if let Some(notice) = err.notice() {
                    notifications.notify(notice);
                }
            }
            None => {}
        }
    };

    view! {
      <form class="space-y-6" novalidate on:submit=on_submit on:input=on_input>
        <div class="flex items-start justify-between">
          <h2 class="text-lg font-semibold text-gray-900">"Business profile"</h2>
          <button
            type="button"
            class="text-gray-400 hover:text-gray-500"
            aria-label="Close"
            on:click=move |_| on_close.call(())
          >
            "✕"
          </button>
        </div>
        <IconUpload draft disabled=saving />
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
          <TextField draft path=FieldPath::CompanyName disabled=saving />
          <TextField draft path=FieldPath::OwnerName disabled=saving />
          <TextField draft path=FieldPath::PanCard pattern=PAN_PATTERN disabled=saving />
        </div>
        <fieldset class="grid grid-cols-1 gap-4 sm:grid-cols-2">
          <legend class="mb-2 text-sm font-semibold text-gray-900">"Address"</legend>
          <TextField draft path=FieldPath::Line1 disabled=saving />
          <TextField draft path=FieldPath::Line2 disabled=saving />
          <TextField draft path=FieldPath::City disabled=saving />
          <TextField draft path=FieldPath::State disabled=saving />
          <TextField draft path=FieldPath::Pincode pattern=PINCODE_PATTERN disabled=saving />
          <TextField draft path=FieldPath::Country disabled=saving />
        </fieldset>
        <LocationPicker selection draft disabled=saving />
        <div class="flex justify-end gap-x-3">
          <button
            type="button"
            class="rounded-md bg-white px-3 py-2 text-sm font-semibold text-gray-900 shadow-sm ring-1 ring-inset ring-gray-300 hover:bg-gray-50"
            prop:disabled=move || saving.get()
            on:click=move |_| on_close.call(())
          >
            "Cancel"
          </button>
          <button
            type="submit"
            class="rounded-md bg-indigo-600 px-3 py-2 text-sm font-semibold text-white shadow-sm hover:bg-indigo-500 disabled:opacity-50"
            prop:disabled=move || saving.get()
          >
            { move || if saving.get() { "Saving..." } else { "Save" } }
          </button>
        </div>
      </form>
    }
}

/// A controlled text input bound to a single field of the draft.
#[component]
fn TextField(
    draft: RwSignal<ProfileDraft>,
    path: FieldPath,
    #[prop(optional)] pattern: Option<&'static str>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let value = move || draft.with(|draft| draft.field(path).to_owned());
    let class = match path {
        FieldPath::PanCard => format!("{INPUT_CLASS} uppercase"),
        _ => INPUT_CLASS.to_string(),
    };
    let required = path.is_required();

    view! {
      <label class="block text-sm font-medium text-gray-900">
        { path.label() }
        { required.then_some(" *") }
        <input
          type="text"
          name=path.name()
          class=class
          required=required
          pattern=pattern
          prop:value=value
          prop:disabled=move || disabled.get()
        />
      </label>
    }
}
