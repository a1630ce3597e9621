//! Auth Layout Component
//!
//! Two-pane scaffold for the authentication pages: brand pane with an
//! animated tagline on the left, the page's own content on the right.

use leptos::*;

const TAGLINES: [&str; 3] = [
    "Computer-aided diuretic renography",
    "Automated washout analysis",
    "Decision support for obstructive uropathy",
];

/// Ticks the full phrase stays on screen before deletion starts
const HOLD_TICKS: u32 = 24;

/// Two-pane scaffold for authentication pages
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="auth-grid">
            <div class="auth-brand-pane">
                <div class="auth-brand-mark">
                    <span>"🩻"</span>
                    <span>"RenoGraph"</span>
                </div>

                <Typewriter />

                <blockquote class="auth-quote">
                    <p>
                        "\"The automated washout curves save us a radiologist \
                         review on every straightforward case.\""
                    </p>
                    <footer>"Dr. Ingrid Solberg, Dept. of Nuclear Medicine"</footer>
                </blockquote>
            </div>

            <div class="auth-form-pane">
                {children()}
            </div>
        </div>
    }
}

/// Animated tagline cycling through the product phrases
#[component]
fn Typewriter() -> impl IntoView {
    let (text, set_text) = create_signal(String::new());

    let mut typist = Typist::new();
    let interval = gloo_timers::callback::Interval::new(80, move || {
        typist.tick(&TAGLINES);
        set_text.set(typist.current(&TAGLINES));
    });

    // Cancel the animation when the layout unmounts
    on_cleanup(move || drop(interval));

    view! {
        <p class="auth-tagline">
            {text}
            <span class="typewriter-cursor">"|"</span>
        </p>
    }
}

/// Stepper behind the animated tagline: type, hold, delete, advance
#[derive(Clone, Debug, PartialEq)]
struct Typist {
    phrase: usize,
    visible: usize,
    hold: u32,
    deleting: bool,
}

impl Typist {
    fn new() -> Self {
        Typist {
            phrase: 0,
            visible: 0,
            hold: 0,
            deleting: false,
        }
    }

    /// Advance the animation by one step
    fn tick(&mut self, phrases: &[&str]) {
        let len = phrases[self.phrase].chars().count();

        if self.deleting {
            if self.visible == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % phrases.len();
            } else {
                self.visible -= 1;
            }
        } else if self.visible < len {
            self.visible += 1;
        } else if self.hold < HOLD_TICKS {
            self.hold += 1;
        } else {
            self.hold = 0;
            self.deleting = true;
        }
    }

    /// Currently visible prefix of the active phrase
    fn current(&self, phrases: &[&str]) -> String {
        phrases[self.phrase].chars().take(self.visible).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: [&str; 2] = ["ab", "xyz"];

    #[test]
    fn test_typist_types_forward() {
        let mut typist = Typist::new();
        typist.tick(&PHRASES);
        assert_eq!(typist.current(&PHRASES), "a");
        typist.tick(&PHRASES);
        assert_eq!(typist.current(&PHRASES), "ab");
    }

    #[test]
    fn test_typist_holds_then_deletes() {
        let mut typist = Typist::new();
        typist.tick(&PHRASES);
        typist.tick(&PHRASES);

        // Exhaust the hold window
        for _ in 0..=HOLD_TICKS {
            typist.tick(&PHRASES);
        }
        assert!(typist.deleting);

        typist.tick(&PHRASES);
        assert_eq!(typist.current(&PHRASES), "a");
    }

    #[test]
    fn test_typist_advances_to_next_phrase() {
        let mut typist = Typist::new();

        // Type "ab", hold, delete it, advance
        for _ in 0..(2 + HOLD_TICKS as usize + 1 + 2 + 1) {
            typist.tick(&PHRASES);
        }

        assert_eq!(typist.phrase, 1);
        assert!(!typist.deleting);
        assert_eq!(typist.current(&PHRASES), "");
    }
}
