use crate::constants::*;
use crate::parse::parse_console_line;
use crate::{CredentialSet, CredentialSource};
use log::debug;

/// One of the three values the operator has to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// `aws_access_key_id`
    AccessKeyId,
    /// `aws_secret_access_key`
    SecretAccessKey,
    /// `aws_session_token`
    SessionToken,
}

impl Slot {
    /// Order in which unlabeled values are placed.
    pub const CANONICAL_ORDER: [Slot; 3] =
        [Slot::AccessKeyId, Slot::SecretAccessKey, Slot::SessionToken];

    /// Lower-cased key naming this slot.
    pub fn key(self) -> &'static str {
        match self {
            Slot::AccessKeyId => KEY_ACCESS_KEY_ID,
            Slot::SecretAccessKey => KEY_SECRET_ACCESS_KEY,
            Slot::SessionToken => KEY_SESSION_TOKEN,
        }
    }

    /// Find the slot named by `key`. The match is exact.
    pub fn from_key(key: &str) -> Option<Slot> {
        Slot::CANONICAL_ORDER
            .into_iter()
            .find(|slot| slot.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Accumulates pasted lines into the three credential slots.
///
/// - A line labeled with a known key is written to that slot, replacing any earlier value.
/// - A line labeled with an unknown key is ignored.
/// - An unlabeled line goes to the first empty slot in [`Slot::CANONICAL_ORDER`].
/// - Blank lines are ignored.
#[derive(Debug, Default, Clone)]
pub struct SlotCollector {
    values: [Option<String>; 3],
}

impl SlotCollector {
    /// Create a collector with all slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line of input, returning the slot it was written to.
    pub fn feed(&mut self, line: &str) -> Option<Slot> {
        if line.trim().is_empty() {
            return None;
        }

        let parsed = parse_console_line(line);
        let slot = match parsed.key {
            Some(key) => match Slot::from_key(&key) {
                Some(slot) => slot,
                None => {
                    debug!("ignoring value for unrecognized key {key}");
                    return None;
                }
            },
            None => self.first_empty()?,
        };

        self.values[slot.index()] = Some(parsed.value);
        Some(slot)
    }

    /// Value currently held by `slot`.
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.values[slot.index()].as_deref()
    }

    /// Slots that are still empty, in canonical order.
    pub fn missing(&self) -> Vec<Slot> {
        Slot::CANONICAL_ORDER
            .into_iter()
            .filter(|slot| self.get(*slot).is_none())
            .collect()
    }

    /// Returns true once all three slots hold a value.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Convert the collected values into a credential set labeled as console input.
    ///
    /// Returns `None` if any slot is still empty.
    pub fn into_credential(self) -> Option<CredentialSet> {
        let [Some(ak), Some(sk), Some(token)] = self.values else {
            return None;
        };

        Some(CredentialSet::new(ak, sk, token, CredentialSource::Console))
    }

    fn first_empty(&self) -> Option<Slot> {
        Slot::CANONICAL_ORDER
            .into_iter()
            .find(|slot| self.get(*slot).is_none())
    }
}
