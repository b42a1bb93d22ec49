//! Visibility switch engine: listing, policy, bulk sweep and single switches.

mod bulk;
mod directory;
mod outcome;
pub mod policy;
pub mod retry;
mod session;
mod single;

pub use bulk::switch_all_public_to_private;
pub use directory::list_all;
pub use outcome::{Outcome, OutcomeKind, SwitchReport};
pub use session::Session;
pub use single::{switch_one_to_private, switch_one_to_public};
