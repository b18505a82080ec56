//! Contact Info
//!
//! The three contact rows, each wired to its external action.

use bizcard_core::{dispatch, BusinessCard};
use bizcard_ui::ContactRow;
use dioxus::prelude::*;

/// The contact block: one row per card entry, in card order.
///
/// Activating a row hands that entry's action to the operating system.
/// A failed hand-off is logged and dropped; the card defines no
/// user-visible failure path.
#[component]
pub fn ContactInfo(
    /// The card whose entries are shown
    card: BusinessCard,
) -> Element {
    rsx! {
        section { class: "contact-info",
            for entry in card.entries {
                ContactRow {
                    key: "{entry.channel.label()}",
                    entry: entry.clone(),
                    onactivate: {
                        let action = entry.action.clone();
                        move |_| {
                            if let Err(err) = dispatch(&action) {
                                tracing::error!("external action failed: {}", err);
                            }
                        }
                    },
                }
            }
        }
    }
}
