//! Serialized script, used inside transaction inputs and outputs.

use std::{fmt, ops};
use crate::bytes::Bytes;
use crate::{Opcode, Error};

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ScriptType {
	NonStandard,
	PubKey,
	PubKeyHash,
	ScriptHash,
	Multisig,
	NullData,
	WitnessScript,
	WitnessKey,
}

/// Serialized script, used inside transaction inputs and outputs.
#[derive(PartialEq, Default, Clone)]
pub struct Script {
	data: Bytes,
}

impl From<&'static str> for Script {
	fn from(s: &'static str) -> Self {
		Script::new(s.into())
	}
}

impl From<Bytes> for Script {
	fn from(s: Bytes) -> Self {
		Script::new(s)
	}
}

impl From<Vec<u8>> for Script {
	fn from(v: Vec<u8>) -> Self {
		Script::new(v.into())
	}
}

impl From<Script> for Bytes {
	fn from(script: Script) -> Self {
		script.data
	}
}

impl Script {
	/// Script constructor.
	pub fn new(data: Bytes) -> Self {
		Script {
			data,
		}
	}

	pub fn to_bytes(&self) -> Bytes {
		self.data.clone()
	}

	/// Is empty script
	pub fn is_empty(&self) -> bool {
		self.data.len() == 0
	}

	/// Extra-fast test for pay-to-public-key scripts.
	pub fn is_pay_to_public_key(&self) -> bool {
		match self.data.len() {
			35 => self.data[0] == Opcode::OP_PUSHBYTES_33 as u8 && self.data[34] == Opcode::OP_CHECKSIG as u8,
			67 => self.data[0] == Opcode::OP_PUSHBYTES_65 as u8 && self.data[66] == Opcode::OP_CHECKSIG as u8,
			_ => false,
		}
	}

	/// Extra-fast test for pay-to-public-key-hash (P2PKH) scripts.
	pub fn is_pay_to_public_key_hash(&self) -> bool {
		self.data.len() == 25 &&
			self.data[0] == Opcode::OP_DUP as u8 &&
			self.data[1] == Opcode::OP_HASH160 as u8 &&
			self.data[2] == Opcode::OP_PUSHBYTES_20 as u8 &&
			self.data[23] == Opcode::OP_EQUALVERIFY as u8 &&
			self.data[24] == Opcode::OP_CHECKSIG as u8
	}

	/// Extra-fast test for pay-to-script-hash (P2SH) scripts.
	pub fn is_pay_to_script_hash(&self) -> bool {
		self.data.len() == 23 &&
			self.data[0] == Opcode::OP_HASH160 as u8 &&
			self.data[1] == Opcode::OP_PUSHBYTES_20 as u8 &&
			self.data[22] == Opcode::OP_EQUAL as u8
	}

	/// Extra-fast test for pay-to-witness-key-hash scripts.
	pub fn is_pay_to_witness_key_hash(&self) -> bool {
		self.data.len() == 22 &&
			self.data[0] == Opcode::OP_0 as u8 &&
			self.data[1] == Opcode::OP_PUSHBYTES_20 as u8
	}

	/// Extra-fast test for pay-to-witness-script-hash scripts.
	pub fn is_pay_to_witness_script_hash(&self) -> bool {
		self.data.len() == 34 &&
			self.data[0] == Opcode::OP_0 as u8 &&
			self.data[1] == Opcode::OP_PUSHBYTES_32 as u8
	}

	/// Witness version and program, if this script is a witness program.
	/// https://github.com/bitcoin/bips/blob/master/bip-0141.mediawiki#witness-program
	pub fn witness_program(&self) -> Option<(u8, &[u8])> {
		if self.data.len() < 4 || self.data.len() > 42 || self.data.len() != self.data[1] as usize + 2 {
			return None;
		}

		let version = match Opcode::from_u8(self.data[0]) {
			Some(Opcode::OP_0) => 0,
			Some(opcode) if opcode.is_within_op_n() => opcode.decode_op_n()?,
			_ => return None,
		};

		Some((version, &self.data[2..]))
	}

	pub fn is_null_data_script(&self) -> bool {
		!self.data.is_empty() && self.data[0] == Opcode::OP_RETURN as u8 && self.subscript(1).is_push_only()
	}

	pub fn is_multisig_script(&self) -> bool {
		if self.data.len() < 3 {
			return false;
		}

		let siglen = match self.get_opcode(0) {
			Ok(op) if op.is_within_op_n() => op,
			_ => return false,
		};

		let keylen = match self.get_opcode(self.data.len() - 2) {
			Ok(op) if op.is_within_op_n() => op,
			_ => return false,
		};

		if siglen > keylen || self.data[self.data.len() - 1] != Opcode::OP_CHECKMULTISIG as u8 {
			return false;
		}

		let keys = match keylen.decode_op_n() {
			Some(keys) => keys as usize,
			None => return false,
		};

		let mut pc = 1;
		let mut pushed = 0;
		while pc < self.data.len() - 2 {
			let instruction = match self.get_instruction(pc) {
				Ok(i) => i,
				_ => return false,
			};

			match instruction.opcode {
				Opcode::OP_PUSHBYTES_33 |
				Opcode::OP_PUSHBYTES_65 => pushed += 1,
				_ => return false,
			}

			pc += instruction.step;
		}

		pushed == keys
	}

	pub fn script_type(&self) -> ScriptType {
		if self.is_pay_to_public_key() {
			ScriptType::PubKey
		} else if self.is_pay_to_public_key_hash() {
			ScriptType::PubKeyHash
		} else if self.is_pay_to_script_hash() {
			ScriptType::ScriptHash
		} else if self.is_multisig_script() {
			ScriptType::Multisig
		} else if self.is_null_data_script() {
			ScriptType::NullData
		} else if self.is_pay_to_witness_key_hash() {
			ScriptType::WitnessKey
		} else if self.is_pay_to_witness_script_hash() {
			ScriptType::WitnessScript
		} else {
			ScriptType::NonStandard
		}
	}

	pub fn subscript(&self, from: usize) -> Script {
		self.data[from..].to_vec().into()
	}

	pub fn is_push_only(&self) -> bool {
		self.instructions().all(|instruction| match instruction {
			Ok(instruction) => instruction.opcode.is_push_value(),
			Err(_) => false,
		})
	}

	pub fn get_opcode(&self, position: usize) -> Result<Opcode, Error> {
		Opcode::from_u8(self.data[position]).ok_or(Error::BadOpcode)
	}

	pub fn get_instruction(&self, position: usize) -> Result<Instruction, Error> {
		let opcode = self.get_opcode(position)?;
		let instruction = match opcode {
			Opcode::OP_PUSHDATA1 |
			Opcode::OP_PUSHDATA2 |
			Opcode::OP_PUSHDATA4 => {
				let len = match opcode {
					Opcode::OP_PUSHDATA1 => 1,
					Opcode::OP_PUSHDATA2 => 2,
					_ => 4,
				};

				let slice = self.take(position + 1, len)?;
				let n = read_usize(slice);
				let bytes = self.take(position + 1 + len, n)?;
				Instruction {
					opcode,
					step: len + n + 1,
					data: Some(bytes),
				}
			},
			o if o <= Opcode::OP_PUSHBYTES_75 => {
				let bytes = self.take(position + 1, opcode as usize)?;
				Instruction {
					opcode: o,
					step: opcode as usize + 1,
					data: Some(bytes),
				}
			},
			_ => Instruction {
				opcode,
				step: 1,
				data: None,
			}
		};

		Ok(instruction)
	}

	#[inline]
	pub fn take(&self, offset: usize, len: usize) -> Result<&[u8], Error> {
		if offset + len > self.data.len() {
			Err(Error::BadPushData)
		} else {
			Ok(&self.data[offset..offset + len])
		}
	}

	pub fn instructions(&self) -> Instructions {
		Instructions { position: 0, script: self }
	}

	/// Data of the final instruction, if that instruction is a push.
	pub fn last_push_data(&self) -> Option<&[u8]> {
		let mut last = None;
		for instruction in self.instructions() {
			last = Some(instruction.ok()?);
		}
		last.and_then(|instruction| instruction.data)
	}

	/// Copy of the script with every `OP_CODESEPARATOR` removed.
	pub fn without_separators(&self) -> Script {
		let mut result = Vec::new();
		let mut pc = 0;

		while pc < self.data.len() {
			match self.get_instruction(pc) {
				Ok(instruction) => {
					if instruction.opcode != Opcode::OP_CODESEPARATOR {
						result.extend_from_slice(&self[pc..pc + instruction.step]);
					}

					pc += instruction.step;
				},
				// undefined opcodes are single bytes
				Err(Error::BadOpcode) => {
					result.push(self[pc]);
					pc += 1;
				},
				// a truncated push ends parsing, the tail is kept as it is
				Err(_) => {
					result.extend_from_slice(&self[pc..]);
					break;
				},
			}
		}

		Script::new(result.into())
	}
}

pub struct Instructions<'a> {
	position: usize,
	script: &'a Script,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Instruction<'a> {
	pub opcode: Opcode,
	pub step: usize,
	pub data: Option<&'a [u8]>,
}

impl<'a> Iterator for Instructions<'a> {
	type Item = Result<Instruction<'a>, Error>;

	fn next(&mut self) -> Option<Result<Instruction<'a>, Error>> {
		if self.script.len() <= self.position {
			return None;
		}

		let instruction = match self.script.get_instruction(self.position) {
			Ok(x) => x,
			Err(e) => {
				// stop after the first error
				self.position = self.script.len();
				return Some(Err(e));
			},
		};

		self.position += instruction.step;

		Some(Ok(instruction))
	}
}

fn read_usize(data: &[u8]) -> usize {
	data.iter().rev().fold(0usize, |acc, byte| (acc << 8) | *byte as usize)
}

impl ops::Deref for Script {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl fmt::Debug for Script {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Debug::fmt(&self.data, f)
	}
}

impl fmt::Display for Script {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let mut first = true;
		for instruction in self.instructions() {
			if !first {
				f.write_str(" ")?;
			}
			first = false;

			match instruction {
				Ok(instruction) => match instruction.data {
					Some(data) if !data.is_empty() => write!(f, "{} 0x{}", instruction.opcode, Bytes::from(data))?,
					_ => write!(f, "{}", instruction.opcode)?,
				},
				Err(e) => write!(f, "<{}>", e)?,
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use crate::{Builder, Opcode, Error};
	use super::{Script, ScriptType, Instruction};

	#[test]
	fn test_is_pay_to_script_hash() {
		let script: Script = "a9143b80842f4ea32806ce5e723a255ddd6490cfd28d87".into();
		let script2: Script = "a9143b80842f4ea32806ce5e723a255ddd6490cfd28d88".into();
		assert!(script.is_pay_to_script_hash());
		assert!(!script2.is_pay_to_script_hash());
	}

	#[test]
	fn test_is_pay_to_witness_key_hash() {
		let script: Script = "00140000000000000000000000000000000000000000".into();
		let script2: Script = "01140000000000000000000000000000000000000000".into();
		assert!(script.is_pay_to_witness_key_hash());
		assert!(!script2.is_pay_to_witness_key_hash());
		assert_eq!(script.script_type(), ScriptType::WitnessKey);
	}

	#[test]
	fn test_is_pay_to_witness_script_hash() {
		let script: Script = "00203b80842f4ea32806ce5e723a255ddd6490cfd28dac38c58bf9254c0577330693".into();
		let script2: Script = "01203b80842f4ea32806ce5e723a255ddd6490cfd28dac38c58bf9254c0577330693".into();
		assert!(script.is_pay_to_witness_script_hash());
		assert!(!script2.is_pay_to_witness_script_hash());
		assert_eq!(script.script_type(), ScriptType::WitnessScript);
	}

	#[test]
	fn test_witness_program() {
		let script: Script = "00141d0f172a0ecb48aee1be1f2687d2963ae33f71a1".into();
		let (version, program) = script.witness_program().unwrap();
		assert_eq!(version, 0);
		assert_eq!(program.len(), 20);

		let script: Script = "51020001".into();
		assert_eq!(script.witness_program(), Some((1, &[0u8, 1][..])));

		let p2pkh: Script = "76a9141d0f172a0ecb48aee1be1f2687d2963ae33f71a188ac".into();
		assert_eq!(p2pkh.witness_program(), None);
		assert_eq!(Script::default().witness_program(), None);
	}

	#[test]
	fn test_script_type() {
		let p2pkh: Script = "76a914df3bd30160e6c6145baaf2c88a8844c13a00d1d588ac".into();
		assert_eq!(p2pkh.script_type(), ScriptType::PubKeyHash);
		let p2pk: Script = "2103c9f4836b9a4f77fc0d81f7bcb01b7f1b35916864b9476c241ce9fc198bd25432ac".into();
		assert_eq!(p2pk.script_type(), ScriptType::PubKey);
		let p2sh: Script = "a9144733f37cf4db86fbc2efed2500b4f4e49f31202387".into();
		assert_eq!(p2sh.script_type(), ScriptType::ScriptHash);
		let null_data = Builder::build_nulldata(b"hello");
		assert_eq!(null_data.script_type(), ScriptType::NullData);
		let nonstandard: Script = "ab".into();
		assert_eq!(nonstandard.script_type(), ScriptType::NonStandard);
	}

	#[test]
	fn test_is_multisig_script() {
		// 6-of-6 witness script from BIP143
		let script: Script = "56210307b8ae49ac90a048e9b53357a2354b3334e9c8bee813ecb98e99a7e07e8c3ba32103b28f0c28bfab54554ae8c658ac5c3e0ce6e79ad336331f78c428dd43eea8449b21034b8113d703413d57761b8b9781957b8c0ac1dfe69f492580ca4195f50376ba4a21033400f6afecb833092a9a21cfdf1ed1376e58c5d1f47de74683123987e967a8f42103a6d48b1131e94ba04d9737d61acdaa1322008af9602b3b14862c07a1789aac162102d8b661b0b3302ee2f162b09e07a55ad5dfbe673a9f01d9f0c19617681024306b56ae".into();
		assert!(script.is_multisig_script());
		assert_eq!(script.script_type(), ScriptType::Multisig);

		// 1-of-2 declared but only one key pushed
		let script: Script = "51210307b8ae49ac90a048e9b53357a2354b3334e9c8bee813ecb98e99a7e07e8c3ba352ae".into();
		assert!(!script.is_multisig_script());
	}

	#[test]
	fn test_instructions() {
		let script = Builder::default()
			.push_opcode(Opcode::OP_DUP)
			.push_data(&[0x01, 0x02])
			.push_data(&[0u8; 80])
			.push_opcode(Opcode::OP_CHECKSIG)
			.into_script();

		let instructions: Vec<Instruction> = script.instructions().map(Result::unwrap).collect();
		assert_eq!(instructions.len(), 4);
		assert_eq!(instructions[0], Instruction { opcode: Opcode::OP_DUP, step: 1, data: None });
		assert_eq!(instructions[1], Instruction { opcode: Opcode::OP_PUSHBYTES_2, step: 3, data: Some(&[0x01, 0x02]) });
		assert_eq!(instructions[2].opcode, Opcode::OP_PUSHDATA1);
		assert_eq!(instructions[2].step, 82);
		assert_eq!(instructions[2].data.map(|d| d.len()), Some(80));
		assert_eq!(instructions[3].opcode, Opcode::OP_CHECKSIG);
	}

	#[test]
	fn test_instructions_truncated_push() {
		let script: Script = "76034142".into();
		let mut instructions = script.instructions();
		assert_eq!(instructions.next().unwrap().unwrap().opcode, Opcode::OP_DUP);
		assert_eq!(instructions.next().unwrap(), Err(Error::BadPushData));
		assert!(instructions.next().is_none());
		assert!(!script.is_push_only());
	}

	#[test]
	fn test_last_push_data() {
		// P2SH-P2WPKH signature script from BIP143
		let script_sig: Script = "16001479091972186c449eb1ded22b78e40d009bdf0089".into();
		assert_eq!(script_sig.last_push_data(), Some(&script_sig[1..]));

		let ends_with_opcode: Script = "0102ac".into();
		assert_eq!(ends_with_opcode.last_push_data(), None);
		assert_eq!(Script::default().last_push_data(), None);
	}

	#[test]
	fn test_without_separators() {
		let script: Script = "21026dccc749adc2a9d0d89497ac511f760f45c47dc5ed9cf352a58ac706453880aeadab210255a9626aebf5e29c0e6538428ba0d1dcf6ca98ffdf086aa8ced5e0d0215ea465ac".into();
		let expected: Script = "21026dccc749adc2a9d0d89497ac511f760f45c47dc5ed9cf352a58ac706453880aead210255a9626aebf5e29c0e6538428ba0d1dcf6ca98ffdf086aa8ced5e0d0215ea465ac".into();
		assert_eq!(script.without_separators(), expected);

		// a separator byte inside push data is not an opcode
		let push: Script = "01abab".into();
		assert_eq!(push.without_separators(), "01ab".into());

		let truncated: Script = "ab02ab".into();
		assert_eq!(truncated.without_separators(), "02ab".into());

		let undefined: Script = "ffab51".into();
		assert_eq!(undefined.without_separators(), "ff51".into());
	}

	#[test]
	fn test_script_display() {
		let script: Script = "76a914df3bd30160e6c6145baaf2c88a8844c13a00d1d588ac".into();
		assert_eq!(script.to_string(), "OP_DUP OP_HASH160 OP_PUSHBYTES_20 0xdf3bd30160e6c6145baaf2c88a8844c13a00d1d5 OP_EQUALVERIFY OP_CHECKSIG");
	}
}
