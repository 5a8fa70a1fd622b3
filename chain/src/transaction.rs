//! Bitcoin transaction.
//! https://en.bitcoin.it/wiki/Protocol_documentation#tx

use std::io;
use hex::FromHex;
use crypto::dhash256;
use ser::{deserialize, serialize, serialize_with_flags, SERIALIZE_TRANSACTION_WITNESS};
use ser::{Error, Serializable, Deserializable, Stream, Reader};
use crate::bytes::Bytes;
use crate::hash::H256;

/// Must be zero.
const WITNESS_MARKER: u8 = 0;
/// Must be nonzero.
const WITNESS_FLAG: u8 = 1;

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct OutPoint {
	pub hash: H256,
	pub index: u32,
}

impl OutPoint {
	pub fn null() -> Self {
		OutPoint {
			hash: H256::default(),
			index: u32::max_value(),
		}
	}

	pub fn is_null(&self) -> bool {
		self.hash.is_zero() && self.index == u32::max_value()
	}
}

#[derive(Debug, PartialEq, Default, Clone)]
pub struct TransactionInput {
	pub previous_output: OutPoint,
	pub script_sig: Bytes,
	pub sequence: u32,
	pub script_witness: Vec<Bytes>,
}

impl TransactionInput {
	pub fn has_witness(&self) -> bool {
		!self.script_witness.is_empty()
	}
}

#[derive(Debug, PartialEq, Clone)]
pub struct TransactionOutput {
	pub value: u64,
	pub script_pubkey: Bytes,
}

/// The default output is the "null" output: maximum value and an empty script.
impl Default for TransactionOutput {
	fn default() -> Self {
		TransactionOutput {
			value: u64::max_value(),
			script_pubkey: Bytes::default(),
		}
	}
}

impl TransactionOutput {
	pub fn is_null(&self) -> bool {
		self.value == u64::max_value() && self.script_pubkey.is_empty()
	}
}

#[derive(Debug, PartialEq, Default, Clone)]
pub struct Transaction {
	pub version: i32,
	pub inputs: Vec<TransactionInput>,
	pub outputs: Vec<TransactionOutput>,
	pub lock_time: u32,
}

/// Used in tests and fixtures only.
impl From<&'static str> for Transaction {
	fn from(s: &'static str) -> Self {
		let bytes: Vec<u8> = s.from_hex().unwrap();
		deserialize(&bytes as &[u8]).unwrap()
	}
}

impl Transaction {
	/// Transaction id, hash of the serialization without witness data.
	pub fn hash(&self) -> H256 {
		dhash256(&serialize(self))
	}

	pub fn witness_hash(&self) -> H256 {
		dhash256(&serialize_with_flags(self, SERIALIZE_TRANSACTION_WITNESS))
	}

	pub fn inputs(&self) -> &[TransactionInput] {
		&self.inputs
	}

	pub fn outputs(&self) -> &[TransactionOutput] {
		&self.outputs
	}

	pub fn is_empty(&self) -> bool {
		self.inputs.is_empty() || self.outputs.is_empty()
	}

	pub fn is_coinbase(&self) -> bool {
		self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
	}

	pub fn has_witness(&self) -> bool {
		self.inputs.iter().any(TransactionInput::has_witness)
	}
}

impl Serializable for OutPoint {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&self.hash)
			.append(&self.index);
	}

	fn serialized_size(&self) -> usize {
		36
	}
}

impl Deserializable for OutPoint {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where Self: Sized, T: io::Read {
		Ok(OutPoint {
			hash: reader.read()?,
			index: reader.read()?,
		})
	}
}

impl Serializable for TransactionInput {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&self.previous_output)
			.append(&self.script_sig)
			.append(&self.sequence);
	}
}

impl Deserializable for TransactionInput {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where Self: Sized, T: io::Read {
		Ok(TransactionInput {
			previous_output: reader.read()?,
			script_sig: reader.read()?,
			sequence: reader.read()?,
			script_witness: vec![],
		})
	}
}

impl Serializable for TransactionOutput {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&self.value)
			.append(&self.script_pubkey);
	}

	fn serialized_size(&self) -> usize {
		8 + self.script_pubkey.serialized_size()
	}
}

impl Deserializable for TransactionOutput {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where Self: Sized, T: io::Read {
		Ok(TransactionOutput {
			value: reader.read()?,
			script_pubkey: reader.read()?,
		})
	}
}

impl Serializable for Transaction {
	fn serialize(&self, stream: &mut Stream) {
		let include_transaction_witness = stream.include_transaction_witness() && self.has_witness();
		if include_transaction_witness {
			stream
				.append(&self.version)
				.append(&WITNESS_MARKER)
				.append(&WITNESS_FLAG)
				.append_list(&self.inputs)
				.append_list(&self.outputs);
			for input in &self.inputs {
				stream.append_list(&input.script_witness);
			}
			stream.append(&self.lock_time);
		} else {
			stream
				.append(&self.version)
				.append_list(&self.inputs)
				.append_list(&self.outputs)
				.append(&self.lock_time);
		}
	}
}

impl Deserializable for Transaction {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where Self: Sized, T: io::Read {
		let version = reader.read()?;
		let mut inputs: Vec<TransactionInput> = reader.read_list()?;
		let read_witness = if inputs.is_empty() {
			let witness_flag: u8 = reader.read()?;
			if witness_flag != WITNESS_FLAG {
				return Err(Error::MalformedData);
			}

			inputs = reader.read_list()?;
			true
		} else {
			false
		};
		let outputs = reader.read_list()?;
		if read_witness {
			for input in inputs.iter_mut() {
				input.script_witness = reader.read_list()?;
			}
		}

		Ok(Transaction {
			version,
			inputs,
			outputs,
			lock_time: reader.read()?,
		})
	}
}
