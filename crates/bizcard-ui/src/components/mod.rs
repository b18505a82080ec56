//! Reusable card components.

mod avatar;
mod contact_row;

pub use avatar::*;
pub use contact_row::*;
