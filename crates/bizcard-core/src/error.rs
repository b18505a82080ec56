//! Error types for the business card app

use thiserror::Error;

/// Main error type for card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// The platform opener refused or failed to take the URI. Anything the
    /// spawned handler does after a successful hand-off is not observable
    /// here.
    #[error("failed to hand {scheme} request to the system: {source}")]
    Dispatch {
        scheme: &'static str,
        source: std::io::Error,
    },
}
