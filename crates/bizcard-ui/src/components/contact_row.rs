//! Contact Row Component
//!
//! One line of the contact block: a plain label and a blue tappable value.

use bizcard_core::{ContactChannel, ContactEntry};
use dioxus::prelude::*;

/// Leading label text for a row, colon included.
fn label_text(channel: ContactChannel) -> String {
    format!("{}: ", channel.label())
}

/// Properties for the ContactRow component
#[derive(Clone, PartialEq, Props)]
pub struct ContactRowProps {
    /// The card row to display
    pub entry: ContactEntry,
    /// Fired once when the value text is activated
    pub onactivate: EventHandler<()>,
}

/// A (label, value) contact line
///
/// Only the value is tappable. Activation fires the handler exactly once
/// and suppresses the anchor's own navigation; the row holds no state.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ContactRow {
///         entry: card.entries[0].clone(),
///         onactivate: move |_| dispatch_phone(),
///     }
/// }
/// ```
#[component]
pub fn ContactRow(props: ContactRowProps) -> Element {
    let label = label_text(props.entry.channel);
    let channel = props.entry.channel.label();

    rsx! {
        div { class: "contact-row",
            span { class: "contact-row__label", "{label}" }
            a {
                class: "contact-row__value",
                href: "#",
                onclick: move |e| {
                    e.prevent_default();
                    tracing::debug!(channel, "contact row activated");
                    props.onactivate.call(());
                },
                "{props.entry.value}"
            }
        }
    }
}
