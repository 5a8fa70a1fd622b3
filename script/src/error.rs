use std::{error, fmt};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Error {
	// Script parsing.
	BadOpcode,
	BadPushData,

	// Digest engine.
	InvalidIndex {
		index: usize,
		inputs: usize,
	},
	MissingSpentOutput,
	DetachedEngine,

	// Script code resolution.
	MissingRedeemScript,
	RedeemScriptMismatch,
	MissingWitnessScript,
	WitnessScriptMismatch,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Error::BadOpcode => f.write_str("Bad Opcode"),
			Error::BadPushData => f.write_str("Push data exceeds script length"),

			Error::InvalidIndex { index, inputs } => write!(f, "Input index {} out of range, transaction has {} inputs", index, inputs),
			Error::MissingSpentOutput => f.write_str("Spent output is required"),
			Error::DetachedEngine => f.write_str("No transaction attached"),

			Error::MissingRedeemScript => f.write_str("Signature script does not end with a redeem script push"),
			Error::RedeemScriptMismatch => f.write_str("Redeem script does not match script hash"),
			Error::MissingWitnessScript => f.write_str("Witness is empty"),
			Error::WitnessScriptMismatch => f.write_str("Witness script does not match witness program"),
		}
	}
}

impl error::Error for Error {}
