mod transaction;

pub use primitives::{hash, bytes};

pub use crate::transaction::{Transaction, TransactionInput, TransactionOutput, OutPoint};
