//! Business Card UI Components
//!
//! This crate provides the Dioxus components the card screen is assembled
//! from: the pulsing portrait and the tappable contact rows.
//!
//! ## Design Notes
//!
//! The look follows the original card it reproduces:
//! - **Sky blue (#b3e5fc)**: screen backdrop
//! - **Pure blue (#0000ff)**: tappable contact values
//! - **Ink (#1c1b1f)**: labels and the name
//!
//! Components stay presentational; the screen wires their activate
//! handlers to the external-action hand-off in `bizcard-core`.

pub mod components;

pub use components::*;
