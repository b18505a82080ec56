//! The card itself: name plus the three contact rows.

use crate::action::ExternalAction;

/// The contact channels a row can belong to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactChannel {
    /// Phone number, opens the dialer
    Phone,
    /// Email address, opens a compose window
    Email,
    /// GitHub handle, opens the profile in a browser
    Github,
}

impl ContactChannel {
    /// Returns the display label for this channel
    pub fn label(&self) -> &'static str {
        match self {
            ContactChannel::Phone => "Phone",
            ContactChannel::Email => "Email",
            ContactChannel::Github => "Github",
        }
    }
}

/// One row on the card: a channel, the text shown for it, and the external
/// action activating it requests.
///
/// The display value and the action payload are stored separately: the
/// phone row shows `555-555-5555` but dials the bare digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactEntry {
    /// Which channel this row is
    pub channel: ContactChannel,
    /// The tappable text shown on the card
    pub value: String,
    /// The request handed to the OS when the value is activated
    pub action: ExternalAction,
}

/// The full card: a name and the contact rows in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusinessCard {
    /// Name shown under the portrait
    pub name: String,
    /// Contact rows, top to bottom
    pub entries: Vec<ContactEntry>,
}

impl BusinessCard {
    /// The card this app ships. Row order is fixed: Phone, Email, Github.
    pub fn builtin() -> Self {
        BusinessCard {
            name: "Bennett Fife".to_string(),
            entries: vec![
                ContactEntry {
                    channel: ContactChannel::Phone,
                    value: "555-555-5555".to_string(),
                    action: ExternalAction::Dial { number: "5555555555".to_string() },
                },
                ContactEntry {
                    channel: ContactChannel::Email,
                    value: "bennett.fife@gmail.com".to_string(),
                    action: ExternalAction::Compose {
                        address: "bennett.fife@gmail.com".to_string(),
                    },
                },
                ContactEntry {
                    channel: ContactChannel::Github,
                    value: "bennettsf".to_string(),
                    action: ExternalAction::Browse {
                        url: "https://github.com/bennettsf".to_string(),
                    },
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_labels() {
        assert_eq!(ContactChannel::Phone.label(), "Phone");
        assert_eq!(ContactChannel::Email.label(), "Email");
        assert_eq!(ContactChannel::Github.label(), "Github");
    }

    #[test]
    fn builtin_card_name() {
        assert_eq!(BusinessCard::builtin().name, "Bennett Fife");
    }

    #[test]
    fn builtin_rows_in_fixed_order() {
        let card = BusinessCard::builtin();
        let channels: Vec<_> = card.entries.iter().map(|e| e.channel).collect();
        assert_eq!(
            channels,
            vec![ContactChannel::Phone, ContactChannel::Email, ContactChannel::Github]
        );
    }

    #[test]
    fn builtin_display_values() {
        let card = BusinessCard::builtin();
        assert_eq!(card.entries[0].value, "555-555-5555");
        assert_eq!(card.entries[1].value, "bennett.fife@gmail.com");
        assert_eq!(card.entries[2].value, "bennettsf");
    }

    #[test]
    fn builtin_action_targets() {
        let card = BusinessCard::builtin();
        assert_eq!(card.entries[0].action.uri(), "tel:5555555555");
        assert_eq!(card.entries[1].action.uri(), "mailto:bennett.fife@gmail.com");
        assert_eq!(card.entries[2].action.uri(), "https://github.com/bennettsf");
    }

    #[test]
    fn dial_payload_is_ten_bare_digits() {
        let card = BusinessCard::builtin();
        match &card.entries[0].action {
            ExternalAction::Dial { number } => {
                assert_eq!(number.len(), 10);
                assert!(number.chars().all(|c| c.is_ascii_digit()));
            }
            other => panic!("phone row must carry a dial action, got {:?}", other),
        }
    }

    #[test]
    fn builtin_card_is_stable_across_builds() {
        // Re-rendering rebuilds the card; the value must be identical.
        assert_eq!(BusinessCard::builtin(), BusinessCard::builtin());
    }
}
