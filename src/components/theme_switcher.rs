//! Theme Switcher Component
//!
//! Segmented light/dark/system control wired to the theme store.

use leptos::*;

use crate::state::theme::{ThemePreference, ThemeStore};

/// Theme preference control
///
/// Renders nothing on the very first pass so the control never shows a
/// selection that disagrees with the theme already applied to the document.
#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let store = use_context::<ThemeStore>().expect("ThemeStore not found");

    let (mounted, set_mounted) = create_signal(false);
    create_effect(move |_| set_mounted.set(true));

    view! {
        {move || {
            if !mounted.get() {
                return view! {}.into_view();
            }

            let store = store.clone();
            view! {
                <div class="theme-switcher">
                    <ThemeChoice store=store.clone() value=ThemePreference::Light icon="☀️" />
                    <ThemeChoice store=store.clone() value=ThemePreference::Dark icon="🌙" />
                    <ThemeChoice store=store value=ThemePreference::System icon="💻" />
                </div>
            }.into_view()
        }}
    }
}

#[component]
fn ThemeChoice(store: ThemeStore, value: ThemePreference, icon: &'static str) -> impl IntoView {
    let preference = store.preference;
    let selected = move || preference.get() == value;

    view! {
        <button
            type="button"
            class=move || if selected() { "theme-choice selected" } else { "theme-choice" }
            title=value.label()
            on:click=move |_| store.set(value)
        >
            <span>{icon}</span>
            <span>{value.label()}</span>
        </button>
    }
}
