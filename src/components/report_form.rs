//! Report Form Component
//!
//! Card for creating a new analysis report: pick an existing patient or
//! register a new one, attach the DICOM series, set the diuretic injection
//! time, submit.

use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::types::Patient;
use crate::components::loading::LoadingOverlay;
use crate::report::{self, Attachment, DraftFields, FieldErrors};
use crate::state::app::AppState;

#[derive(Clone, Copy, PartialEq)]
enum PatientTab {
    Existing,
    New,
}

/// Report creation form
///
/// `token` is the opaque session token, forwarded unchanged with the
/// submission.
#[component]
pub fn ReportForm(#[prop(into)] token: String) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let navigate = use_navigate();

    let (tab, set_tab) = create_signal(PatientTab::Existing);
    let (patients, set_patients) = create_signal(Vec::<Patient>::new());

    let (patient_id, set_patient_id) = create_signal(String::new());
    let (patient_name, set_patient_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (attachment, set_attachment) = create_signal(Option::<Attachment>::None);
    let (diuretic, set_diuretic) = create_signal(String::new());

    let (errors, set_errors) = create_signal(FieldErrors::default());
    let (submitting, set_submitting) = create_signal(false);

    // Options for the existing-patient select, one fetch on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_patients().await {
                Ok(list) => set_patients.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load patients: {}", e).into());
                }
            }
        });
    });

    // Each mode locks the other's inputs; the validator owns the real rule
    let select_locked = create_memo(move |_| !patient_name.get().trim().is_empty());
    let new_locked = create_memo(move |_| !patient_id.get().is_empty());

    // Read the chosen file to bytes right away so submission stays synchronous
    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();

        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            None => {
                set_attachment.set(None);
                return;
            }
        };

        let file_name = file.name();
        let file_reader = web_sys::FileReader::new().unwrap();

        let onload = {
            let file_reader = file_reader.clone();
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Ok(result) = file_reader.result() {
                    if let Some(array_buffer) = result.dyn_ref::<js_sys::ArrayBuffer>() {
                        let uint8_array = js_sys::Uint8Array::new(array_buffer);
                        set_attachment.set(Some(Attachment {
                            file_name: file_name.clone(),
                            bytes: uint8_array.to_vec(),
                        }));
                    }
                }
            }) as Box<dyn FnMut(_)>)
        };

        file_reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let _ = file_reader.read_as_array_buffer(&file);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let fields = DraftFields {
            patient_id: patient_id.get(),
            patient_name: patient_name.get(),
            email: email.get(),
            attachment: attachment.get(),
            diuretic: diuretic.get(),
        };

        // Invalid drafts never reach the network
        let draft = match report::validate(&fields) {
            Ok(draft) => draft,
            Err(field_errors) => {
                set_errors.set(field_errors);
                return;
            }
        };

        set_errors.set(FieldErrors::default());
        set_submitting.set(true);

        let state_clone = state.clone();
        let token = token.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_analysis(&draft, &token).await {
                Ok(created) => {
                    // Navigation unmounts the form; leave its signals alone
                    state_clone.show_success("Report created");
                    navigate(&format!("/analysis/{}", created.id), Default::default());
                }
                Err(e) => {
                    state_clone.show_error(&e);
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">"Create new report"</h2>
                <p class="card-sub">"Create a report on a new or existing patient."</p>
            </div>

            <LoadingOverlay loading=submitting>
                <form class="card-body" on:submit=on_submit>
                    // Patient mode tabs
                    <div class="tab-row">
                        <TabButton
                            label="Existing patient"
                            current=tab
                            target=PatientTab::Existing
                            on_click=move |_| set_tab.set(PatientTab::Existing)
                        />
                        <TabButton
                            label="New patient"
                            current=tab
                            target=PatientTab::New
                            on_click=move |_| set_tab.set(PatientTab::New)
                        />
                    </div>

                    {move || errors.get().patient.map(|message| view! {
                        <p class="field-error">{message}</p>
                    })}

                    // Existing patient panel; stays mounted so its state
                    // survives tab switches
                    <div class=move || panel_class(tab.get() == PatientTab::Existing)>
                        <div class="field">
                            <label class="field-label">
                                "Patient" <span class="required-mark">"required"</span>
                            </label>
                            <select
                                class="select-input"
                                disabled=move || select_locked.get()
                                prop:value=move || patient_id.get()
                                on:change=move |ev| set_patient_id.set(event_target_value(&ev))
                            >
                                <option value="">"Select a patient"</option>
                                {move || patients.get().into_iter().map(|patient| view! {
                                    <option value=patient.id.clone()>{patient.name.clone()}</option>
                                }).collect_view()}
                            </select>
                            {move || select_locked.get().then(|| view! {
                                <p class="field-hint">
                                    "Clear the new patient fields to pick an existing patient."
                                </p>
                            })}
                        </div>
                    </div>

                    // New patient panel
                    <div class=move || panel_class(tab.get() == PatientTab::New)>
                        <div class="field">
                            <label class="field-label">
                                "Full name" <span class="required-mark">"required"</span>
                            </label>
                            <input
                                type="text"
                                class="text-input"
                                placeholder="Kari Nordmann"
                                disabled=move || new_locked.get()
                                prop:value=move || patient_name.get()
                                on:input=move |ev| set_patient_name.set(event_target_value(&ev))
                            />
                            {move || new_locked.get().then(|| view! {
                                <p class="field-hint">
                                    "Clear the patient selection to register a new patient."
                                </p>
                            })}
                            {move || errors.get().name.map(|message| view! {
                                <p class="field-error">{message}</p>
                            })}
                        </div>

                        <div class="field">
                            <label class="field-label">
                                "Email" <span class="optional-mark">"optional"</span>
                            </label>
                            <input
                                type="email"
                                class="text-input"
                                placeholder="kari@clinic.no"
                                disabled=move || new_locked.get()
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                            {move || errors.get().email.map(|message| view! {
                                <p class="field-error">{message}</p>
                            })}
                        </div>
                    </div>

                    // DICOM series upload
                    <div class="field">
                        <label class="field-label">
                            "DICOM series" <span class="required-mark">"required"</span>
                        </label>
                        <input
                            type="file"
                            class="file-input"
                            accept="application/dicom"
                            on:change=on_file_change
                        />
                        {move || attachment.get().map(|attachment| view! {
                            <p class="field-hint">
                                {format!("{} ({} KB)", attachment.file_name, attachment.bytes.len() / 1024)}
                            </p>
                        })}
                        {move || errors.get().image.map(|message| view! {
                            <p class="field-error">{message}</p>
                        })}
                    </div>

                    // Diuretic injection time
                    <div class="field">
                        <label class="field-label">
                            "Diuretic injection time (minutes)"
                            <span class="required-mark">"required"</span>
                        </label>
                        <input
                            type="number"
                            class="text-input"
                            placeholder="20"
                            min="1"
                            prop:value=move || diuretic.get()
                            on:input=move |ev| set_diuretic.set(event_target_value(&ev))
                        />
                        <p class="field-hint">
                            "Minutes after tracer injection when the diuretic was administered."
                        </p>
                        {move || errors.get().diuretic.map(|message| view! {
                            <p class="field-error">{message}</p>
                        })}
                    </div>

                    // Submit button
                    <button
                        type="submit"
                        class="button-primary"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() {
                            view! {
                                <div class="spinner" />
                                <span>"Uploading..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Create report"</span>
                            }.into_view()
                        }}
                    </button>
                </form>
            </LoadingOverlay>
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<PatientTab>,
    target: PatientTab,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                if current.get() == target {
                    "tab-button selected"
                } else {
                    "tab-button"
                }
            }
        >
            {label}
        </button>
    }
}

fn panel_class(active: bool) -> &'static str {
    if active {
        "tab-panel"
    } else {
        "tab-panel hidden"
    }
}
