//! Script code selection: the script that stands in for the signature script in a digest preimage.

use chain::{TransactionInput, TransactionOutput};
use crypto::{dhash160, sha256};
use crate::hash::{H160, H256};
use crate::{Builder, Error, Script, SignatureVersion};

/// Resolves the script code of `input`, which spends `spent_output`.
///
/// P2SH outputs resolve to the redeem script pushed last by the signature script.
/// Under `SignatureVersion::WitnessV0`, v0 witness programs (native, or nested in P2SH)
/// resolve to the implied P2PKH script or to the witness script. Every other output
/// is its own script code.
pub fn script_code(input: &TransactionInput, spent_output: &TransactionOutput, version: SignatureVersion) -> Result<Script, Error> {
	let script_pubkey: Script = spent_output.script_pubkey.clone().into();

	if script_pubkey.is_pay_to_script_hash() {
		let redeem_script = redeem_script(input, &script_pubkey)?;
		if version == SignatureVersion::WitnessV0 {
			if let Some(script_code) = witness_script_code(input, &redeem_script)? {
				return Ok(script_code);
			}
		}
		return Ok(redeem_script);
	}

	if version == SignatureVersion::WitnessV0 {
		if let Some(script_code) = witness_script_code(input, &script_pubkey)? {
			return Ok(script_code);
		}
	}

	Ok(script_pubkey)
}

/// Redeem script of a P2SH spend, checked against the script hash.
fn redeem_script(input: &TransactionInput, script_pubkey: &Script) -> Result<Script, Error> {
	let script_sig: Script = input.script_sig.clone().into();
	let redeem_script: Script = script_sig.last_push_data()
		.ok_or(Error::MissingRedeemScript)?
		.to_vec()
		.into();

	if dhash160(&redeem_script) != H160::from(&script_pubkey[2..22]) {
		return Err(Error::RedeemScriptMismatch);
	}

	Ok(redeem_script)
}

/// Script code of a v0 witness program, `None` if `program` is not one.
fn witness_script_code(input: &TransactionInput, program: &Script) -> Result<Option<Script>, Error> {
	if program.is_pay_to_witness_key_hash() {
		let hash = H160::from(&program[2..]);
		return Ok(Some(Builder::build_p2pkh(&hash)));
	}

	if program.is_pay_to_witness_script_hash() {
		let witness_script = input.script_witness.last().ok_or(Error::MissingWitnessScript)?;
		if sha256(witness_script) != H256::from(&program[2..]) {
			return Err(Error::WitnessScriptMismatch);
		}

		return Ok(Some(witness_script.clone().into()));
	}

	Ok(None)
}

impl SignatureVersion {
	/// Digest algorithm that applies to `input`: `WitnessV0` for native and P2SH-nested
	/// v0 witness programs, `Base` for everything else.
	pub fn detect(input: &TransactionInput, spent_output: &TransactionOutput) -> SignatureVersion {
		let script_pubkey: Script = spent_output.script_pubkey.clone().into();
		let is_v0_program = |script: &Script| script.is_pay_to_witness_key_hash() || script.is_pay_to_witness_script_hash();

		if is_v0_program(&script_pubkey) {
			return SignatureVersion::WitnessV0;
		}

		if script_pubkey.is_pay_to_script_hash() {
			let script_sig: Script = input.script_sig.clone().into();
			if let Some(redeem_script) = script_sig.last_push_data() {
				let redeem_script: Script = redeem_script.to_vec().into();
				if is_v0_program(&redeem_script) {
					return SignatureVersion::WitnessV0;
				}
			}
		}

		SignatureVersion::Base
	}
}
