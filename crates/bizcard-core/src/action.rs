//! External actions the card can request from the host OS.

/// A request to open another application on the user's behalf.
///
/// Each variant carries the payload for one URI scheme. Building the URI is
/// the whole job; resolving it (which dialer, mail client, or browser picks
/// it up, if any) belongs to the platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExternalAction {
    /// Open the dialer with a number pre-filled. The number is the bare
    /// digits, no separators.
    Dial { number: String },
    /// Open the mail client with a compose window addressed to `address`.
    Compose { address: String },
    /// Open the browser at `url` (already a full `https:` URL).
    Browse { url: String },
}

impl ExternalAction {
    /// Returns the URI handed to the platform opener.
    pub fn uri(&self) -> String {
        match self {
            ExternalAction::Dial { number } => format!("tel:{}", number),
            ExternalAction::Compose { address } => format!("mailto:{}", address),
            ExternalAction::Browse { url } => url.clone(),
        }
    }

    /// Returns the URI scheme this action uses.
    pub fn scheme(&self) -> &'static str {
        match self {
            ExternalAction::Dial { .. } => "tel",
            ExternalAction::Compose { .. } => "mailto",
            ExternalAction::Browse { .. } => "https",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_uri_is_scheme_plus_digits() {
        let action = ExternalAction::Dial { number: "5555555555".to_string() };
        assert_eq!(action.uri(), "tel:5555555555");
        assert_eq!(action.scheme(), "tel");
    }

    #[test]
    fn compose_uri_is_scheme_plus_address() {
        let action = ExternalAction::Compose { address: "bennett.fife@gmail.com".to_string() };
        assert_eq!(action.uri(), "mailto:bennett.fife@gmail.com");
        assert_eq!(action.scheme(), "mailto");
    }

    #[test]
    fn browse_uri_is_the_url_itself() {
        let action = ExternalAction::Browse { url: "https://github.com/bennettsf".to_string() };
        assert_eq!(action.uri(), "https://github.com/bennettsf");
        assert_eq!(action.scheme(), "https");
    }

    #[test]
    fn every_uri_starts_with_its_scheme() {
        let actions = [
            ExternalAction::Dial { number: "5555555555".to_string() },
            ExternalAction::Compose { address: "bennett.fife@gmail.com".to_string() },
            ExternalAction::Browse { url: "https://github.com/bennettsf".to_string() },
        ];
        for action in &actions {
            assert!(action.uri().starts_with(action.scheme()));
        }
    }
}
