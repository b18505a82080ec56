//! Hand-off of external actions to the host operating system.

use crate::action::ExternalAction;
use crate::error::CardError;

/// Hands an external action to the platform opener.
///
/// Fire and forget: returns as soon as the URI is passed off, without
/// waiting on the spawned handler. Which application answers the request,
/// if any does at all, is the platform's concern.
pub fn dispatch(action: &ExternalAction) -> Result<(), CardError> {
    let uri = action.uri();
    tracing::debug!(scheme = action.scheme(), %uri, "handing external action to the system");
    open::that_detached(&uri).map_err(|source| CardError::Dispatch {
        scheme: action.scheme(),
        source,
    })
}
