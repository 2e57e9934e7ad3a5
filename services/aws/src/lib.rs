//! AWS temporary credential resolution.
//!
//! Credentials are looked up in this order:
//!
//! 1. `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`
//! 2. `~/.aws/credentials`
//! 3. Values pasted on the console, see [`parse_console_line`] for accepted formats
//!
//! [`CredentialResolver`] drives the lookup, every source holds all three values on
//! its own or is skipped.

mod constants;
pub use constants::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN};

mod credential;
pub use credential::{CredentialSet, CredentialSource, EnvExport};

mod parse;
pub use parse::{parse_console_line, ParsedLine};

mod collector;
pub use collector::{Slot, SlotCollector};

mod provide_credential;
pub use provide_credential::*;

mod resolver;
pub use resolver::CredentialResolver;

mod region;
pub use region::Region;
