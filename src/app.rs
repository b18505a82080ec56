use dioxus::prelude::*;

use crate::components::CardView;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the card screen. There is exactly one view
/// and no routing; the app never navigates away from the card.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        CardView {}
    }
}
