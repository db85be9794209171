//! Type definitions for Safe accounts and transactions

mod account;
mod operation;
mod transaction;

pub use account::{PendingSafe, SafeAccountConfig};
pub use operation::Operation;
pub use transaction::{SafeTransaction, SafeTxParams, SignatureSet};
