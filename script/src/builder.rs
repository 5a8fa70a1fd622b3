//! Script builder

use crate::bytes::Bytes;
use crate::hash::{H160, H256};
use crate::{Opcode, Script};

/// Script builder
#[derive(Default)]
pub struct Builder {
	data: Bytes,
}

impl Builder {
	/// Builds p2pkh script pubkey
	pub fn build_p2pkh(address: &H160) -> Script {
		Builder::default()
			.push_opcode(Opcode::OP_DUP)
			.push_opcode(Opcode::OP_HASH160)
			.push_bytes(&**address)
			.push_opcode(Opcode::OP_EQUALVERIFY)
			.push_opcode(Opcode::OP_CHECKSIG)
			.into_script()
	}

	/// Builds p2sh script pubkey
	pub fn build_p2sh(address: &H160) -> Script {
		Builder::default()
			.push_opcode(Opcode::OP_HASH160)
			.push_bytes(&**address)
			.push_opcode(Opcode::OP_EQUAL)
			.into_script()
	}

	/// Builds p2wpkh script pubkey
	pub fn build_p2wpkh(hash: &H160) -> Script {
		Builder::default()
			.push_opcode(Opcode::OP_0)
			.push_bytes(&**hash)
			.into_script()
	}

	/// Builds p2wsh script pubkey
	pub fn build_p2wsh(hash: &H256) -> Script {
		Builder::default()
			.push_opcode(Opcode::OP_0)
			.push_bytes(&**hash)
			.into_script()
	}

	/// Builds op_return script
	pub fn build_nulldata(bytes: &[u8]) -> Script {
		Builder::default()
			.push_opcode(Opcode::OP_RETURN)
			.push_bytes(bytes)
			.into_script()
	}

	/// Pushes opcode to the end of script
	pub fn push_opcode(mut self, opcode: Opcode) -> Self {
		self.data.push(opcode as u8);
		self
	}

	/// Appends `OP_1` or `OP_0`.
	pub fn push_bool(self, value: bool) -> Self {
		if value {
			self.push_opcode(Opcode::OP_1)
		} else {
			self.push_opcode(Opcode::OP_0)
		}
	}

	/// Appends a data push using the smallest push opcode for its length.
	pub fn push_bytes(mut self, bytes: &[u8]) -> Self {
		let len = bytes.len();
		if len <= Opcode::OP_PUSHBYTES_75 as usize {
			self.data.push(len as u8);
		} else if len < 0x100 {
			self.data.push(Opcode::OP_PUSHDATA1 as u8);
			self.data.push(len as u8);
		} else if len < 0x10000 {
			self.data.push(Opcode::OP_PUSHDATA2 as u8);
			self.data.extend_from_slice(&(len as u16).to_le_bytes());
		} else {
			self.data.push(Opcode::OP_PUSHDATA4 as u8);
			self.data.extend_from_slice(&(len as u32).to_le_bytes());
		}

		self.data.extend_from_slice(bytes);
		self
	}

	/// Same as `push_bytes`.
	pub fn push_data(self, data: &[u8]) -> Self {
		self.push_bytes(data)
	}

	/// Appends raw bytes without a push opcode.
	pub fn append_raw(mut self, bytes: &[u8]) -> Self {
		self.data.extend_from_slice(bytes);
		self
	}

	pub fn into_script(self) -> Script {
		Script::new(self.data)
	}

	pub fn into_bytes(self) -> Bytes {
		self.data
	}
}
