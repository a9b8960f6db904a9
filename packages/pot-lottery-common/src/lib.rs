pub mod error;
pub mod host;
pub mod ledger;
pub mod selection;
pub mod types;

pub use error::LotteryError;
pub use host::Host;
pub use ledger::{Lottery, DEFAULT_MINIMUM_ENTRY};
pub use selection::{select_winner, Selection};
pub use types::{Entropy, RoundOutcome};
