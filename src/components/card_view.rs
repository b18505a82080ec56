//! Card View
//!
//! The single screen: pulsing portrait and name up top, contact rows below.

use bizcard_core::BusinessCard;
use dioxus::prelude::*;

use super::{CardHeader, ContactInfo};

/// The whole card screen.
///
/// Pure function of the built-in card constant; re-rendering always
/// reproduces the same layout.
#[component]
pub fn CardView() -> Element {
    let card = BusinessCard::builtin();

    rsx! {
        main { class: "card-screen",
            div { class: "card-screen__spacer" }
            CardHeader { name: card.name.clone() }
            ContactInfo { card: card }
        }
    }
}
