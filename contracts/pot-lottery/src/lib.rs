pub mod contract;
pub mod error;
pub mod execute;
pub mod host;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
