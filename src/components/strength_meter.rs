//! Four-segment strength meter shown under the new master password.

use leptos::prelude::*;

use crate::util::password::{MAX_STRENGTH, password_strength, strength_color, strength_text};

/// Renders `MAX_STRENGTH` bars, filling one per strength point, plus the
/// score's label. Hidden while the password is empty.
#[component]
pub fn StrengthMeter(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let score = Memo::new(move |_| password.with(|p| password_strength(p)));

    let bar_class = move |index: u8| {
        let score = score.get();
        if index < score {
            format!("strength-meter__bar {}", strength_color(score))
        } else {
            "strength-meter__bar".to_owned()
        }
    };

    view! {
        <Show when=move || password.with(|p| !p.is_empty())>
            <div class="strength-meter">
                <div class="strength-meter__bars">
                    {(0..MAX_STRENGTH)
                        .map(|index| view! { <span class=move || bar_class(index)></span> })
                        .collect::<Vec<_>>()}
                </div>
                <span class="strength-meter__label">{move || strength_text(score.get())}</span>
            </div>
        </Show>
    }
}
