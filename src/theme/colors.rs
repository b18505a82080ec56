//! Color constants for the card.
//!
//! Sky backdrop, dark ink, pure blue for the tappable values.

#![allow(dead_code)]

// === BACKDROP ===
pub const SKY: &str = "#b3e5fc";

// === TEXT ===
pub const INK: &str = "#1c1b1f";
pub const LINK_BLUE: &str = "#0000ff";

// === PORTRAIT ===
pub const PORTRAIT_DISC: &str = "#6650a4";
pub const PORTRAIT_GLYPH: &str = "#eaddff";
