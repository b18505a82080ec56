//! Card Header
//!
//! Pulsing portrait with the name label beneath it.

use bizcard_ui::PulsingAvatar;
use dioxus::prelude::*;

/// Portrait plus name, centered.
#[component]
pub fn CardHeader(
    /// Name shown under the portrait
    name: String,
) -> Element {
    rsx! {
        header { class: "card-header",
            PulsingAvatar { name: name.clone(), size: 128 }
            h1 { class: "card-header__name", "{name}" }
        }
    }
}
