//! Pulsing Avatar Component
//!
//! Circular portrait on a colored backing disc, breathing with a slow
//! scale pulse for as long as it is on screen.

use dioxus::prelude::*;

/// Inline size for the avatar disc.
fn dimension_style(size: u32) -> String {
    format!("width: {size}px; height: {size}px;")
}

/// Circular portrait with the ambient scale pulse
///
/// The portrait is a vector head-and-shoulders glyph clipped to the disc.
/// The pulse itself lives in the global stylesheet (`avatar--pulse`); the
/// compositor drives it, so it carries no state and cannot be paused.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PulsingAvatar { name: "Bennett Fife".to_string(), size: 128 }
/// }
/// ```
#[component]
pub fn PulsingAvatar(
    /// Name announced for the portrait
    name: String,
    /// Disc diameter in logical pixels
    #[props(default = 128)]
    size: u32,
) -> Element {
    let style = dimension_style(size);

    rsx! {
        div {
            class: "avatar avatar--pulse",
            style: "{style}",
            role: "img",
            "aria-label": "{name}",
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                view_box: "0 0 100 100",
                class: "avatar__glyph",
                circle {
                    cx: "50",
                    cy: "35",
                    r: "20",
                    fill: "currentColor",
                }
                path {
                    d: "M 20 80 Q 20 55, 50 55 Q 80 55, 80 80",
                    fill: "currentColor",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_style_formats_both_axes() {
        assert_eq!(dimension_style(128), "width: 128px; height: 128px;");
        assert_eq!(dimension_style(64), "width: 64px; height: 64px;");
    }
}
