//! Login Page
//!
//! Sign-in card inside the auth layout.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::components::auth_layout::AuthLayout;
use crate::state::app::AppState;

/// Sign-in page
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let e = email.get();
        let p = password.get();

        if e.is_empty() || p.is_empty() {
            state.show_error("Email and password are required");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::sign_in(&e, &p).await {
                Ok(session) => {
                    state_clone.start_session(session);
                    state_clone.show_success("Signed in");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    state_clone.show_error(&e);
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <AuthLayout>
            <div class="auth-card">
                <h1 class="auth-card-title">"Sign in"</h1>
                <p class="page-sub">"Enter your clinic credentials to continue."</p>

                <form class="auth-form" on:submit=on_submit>
                    <div class="field">
                        <label class="field-label">"Email"</label>
                        <input
                            type="email"
                            class="text-input"
                            placeholder="name@clinic.no"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="field">
                        <label class="field-label">"Password"</label>
                        <input
                            type="password"
                            class="text-input"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>

                    <button
                        type="submit"
                        class="button-primary"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() {
                            view! {
                                <div class="spinner" />
                                <span>"Signing in..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Sign in"</span>
                            }.into_view()
                        }}
                    </button>
                </form>
            </div>
        </AuthLayout>
    }
}
