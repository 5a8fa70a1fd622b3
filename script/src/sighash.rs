//! Signature hash digest engine

use std::ops::Deref;
use log::{debug, trace};
use chain::{Transaction, TransactionInput, TransactionOutput};
use crypto::{dhash256, HashSession};
use ser::{CompactInteger, Stream};
use crate::bytes::Bytes;
use crate::hash::H256;
use crate::script_code::script_code;
use crate::{Error, Script};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SignatureVersion {
	Base,
	WitnessV0,
}

#[derive(Debug, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum SighashBase {
	All = 1,
	None = 2,
	Single = 3,
}

impl From<SighashBase> for u32 {
	fn from(s: SighashBase) -> Self {
		s as u32
	}
}

/// Signature hash type. [Documentation](https://en.bitcoin.it/wiki/OP_CHECKSIG#Procedure_for_Hashtype_SIGHASH_SINGLE)
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Sighash {
	pub base: SighashBase,
	pub anyone_can_pay: bool,
}

impl From<Sighash> for u32 {
	fn from(s: Sighash) -> Self {
		let base = s.base as u32;
		if s.anyone_can_pay {
			base | 0x80
		} else {
			base
		}
	}
}

impl Sighash {
	pub fn new(base: SighashBase, anyone_can_pay: bool) -> Self {
		Sighash {
			base,
			anyone_can_pay,
		}
	}

	/// Used by SCRIPT_VERIFY_STRICTENC
	pub fn is_defined(u: u32) -> bool {
		// Only exact All | None | Single values, with or without anyone_can_pay
		match u & !0x80 {
			1 | 2 | 3 => true,
			_ => false,
		}
	}

	/// Creates Sighash from any u, even if is_defined() == false
	pub fn from_u32(u: u32) -> Self {
		let anyone_can_pay = (u & 0x80) == 0x80;
		let base = match u & 0x1f {
			2 => SighashBase::None,
			3 => SighashBase::Single,
			_ => SighashBase::All,
		};

		Sighash::new(base, anyone_can_pay)
	}
}

/// Which caches a `DigestEngine` keeps between calls. Results never depend on it.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct EngineConfig {
	/// Keep the hashed legacy preimage prefix and extend it for higher input indices.
	pub legacy_prefix_cache: bool,
	/// Keep hashPrevouts, hashSequence and hashOutputs of the attached transaction.
	pub segwit_hash_cache: bool,
}

impl Default for EngineConfig {
	fn default() -> Self {
		EngineConfig {
			legacy_prefix_cache: true,
			segwit_hash_cache: true,
		}
	}
}

/// Computes signature hashes for the inputs of one transaction at a time.
///
/// The transaction is held through any handle that dereferences to it
/// (`&Transaction`, `Arc<Transaction>`, ...). While attached, its inputs and
/// outputs must not change; call `invalidate` or attach again if they do.
pub struct DigestEngine<R: Deref<Target = Transaction>> {
	config: EngineConfig,
	attached: Option<Attached<R>>,
}

struct Attached<R> {
	tx: R,
	session: DigestSession,
}

impl<R: Deref<Target = Transaction>> Default for DigestEngine<R> {
	fn default() -> Self {
		DigestEngine::with_config(EngineConfig::default())
	}
}

impl<R: Deref<Target = Transaction>> DigestEngine<R> {
	pub fn new() -> Self {
		DigestEngine::default()
	}

	pub fn with_config(config: EngineConfig) -> Self {
		DigestEngine {
			config,
			attached: None,
		}
	}

	pub fn config(&self) -> EngineConfig {
		self.config
	}

	/// Binds the engine to `tx`, dropping whatever was cached for a previous transaction.
	pub fn attach(&mut self, tx: R) {
		debug!("attaching transaction with {} inputs and {} outputs", tx.inputs.len(), tx.outputs.len());
		self.attached = Some(Attached {
			tx,
			session: DigestSession::default(),
		});
	}

	/// Releases the transaction handle together with every cache.
	pub fn detach(&mut self) -> Option<R> {
		self.attached.take().map(|attached| {
			debug!("detaching transaction with {} inputs", attached.tx.inputs.len());
			attached.tx
		})
	}

	pub fn is_attached(&self) -> bool {
		self.attached.is_some()
	}

	pub fn transaction(&self) -> Option<&Transaction> {
		self.attached.as_ref().map(|attached| &*attached.tx)
	}

	/// Drops every cache, keeping the transaction attached.
	pub fn invalidate(&mut self) {
		if let Some(ref mut attached) = self.attached {
			debug!("invalidating digest caches");
			attached.session = DigestSession::default();
		}
	}

	/// Signature hash of input `input_index` spending `spent_output`.
	///
	/// The script code is resolved from the spent output (and for P2SH or P2WSH
	/// from the input itself), the amount is the spent output's value.
	pub fn get_digest(
		&mut self,
		input_index: usize,
		sighash_type: u32,
		spent_output: Option<&TransactionOutput>,
		version: SignatureVersion,
	) -> Result<H256, Error> {
		let (script_code, amount) = {
			let tx = self.checked_transaction(input_index)?;
			let spent_output = spent_output.ok_or(Error::MissingSpentOutput)?;
			(script_code(&tx.inputs[input_index], spent_output, version)?, spent_output.value)
		};

		self.get_digest_with_script_code(input_index, sighash_type, &script_code, amount, version)
	}

	/// Signature hash of input `input_index` with an explicit script code and spent amount.
	///
	/// `amount` is only committed to by `SignatureVersion::WitnessV0`.
	pub fn get_digest_with_script_code(
		&mut self,
		input_index: usize,
		sighash_type: u32,
		script_code: &Script,
		amount: u64,
		version: SignatureVersion,
	) -> Result<H256, Error> {
		self.checked_transaction(input_index)?;

		let config = self.config;
		let attached = self.attached.as_mut().ok_or(Error::DetachedEngine)?;
		let tx: &Transaction = &attached.tx;
		let session = &mut attached.session;
		let sighash = Sighash::from_u32(sighash_type);

		let hash = match version {
			SignatureVersion::Base => {
				session.signature_hash_original(tx, input_index, script_code, sighash_type, sighash, config.legacy_prefix_cache)
			},
			SignatureVersion::WitnessV0 => {
				session.signature_hash_witness0(tx, input_index, script_code, amount, sighash_type, sighash, config.segwit_hash_cache)
			},
		};

		Ok(hash)
	}

	fn checked_transaction(&self, input_index: usize) -> Result<&Transaction, Error> {
		let tx = self.transaction().ok_or(Error::DetachedEngine)?;
		if input_index >= tx.inputs.len() {
			return Err(Error::InvalidIndex {
				index: input_index,
				inputs: tx.inputs.len(),
			});
		}

		Ok(tx)
	}
}

/// Hash session that absorbed `version || compact(inputs) || blanked inputs [0, hashed_inputs)`.
struct LegacyPrefix {
	zero_sequences: bool,
	hashed_inputs: usize,
	session: HashSession,
}

impl LegacyPrefix {
	fn new(tx: &Transaction, zero_sequences: bool) -> Self {
		let mut stream = Stream::default();
		stream
			.append(&tx.version)
			.append(&CompactInteger::from(tx.inputs.len()));

		let mut session = HashSession::new();
		session.append(&stream.out());

		LegacyPrefix {
			zero_sequences,
			hashed_inputs: 0,
			session,
		}
	}

	fn is_reusable(&self, zero_sequences: bool, input_index: usize) -> bool {
		self.zero_sequences == zero_sequences && self.hashed_inputs <= input_index
	}

	fn extend(&mut self, inputs: &[TransactionInput], until: usize) {
		if until <= self.hashed_inputs {
			return;
		}

		let mut stream = Stream::default();
		for input in &inputs[self.hashed_inputs..until] {
			append_blanked_input(&mut stream, input, self.zero_sequences);
			self.session.append(&stream.take());
		}

		self.hashed_inputs = until;
	}
}

#[derive(Default)]
struct DigestSession {
	legacy_prefix: Option<LegacyPrefix>,
	hash_prevouts: Option<H256>,
	hash_sequence: Option<H256>,
	hash_outputs: Option<H256>,
}

impl DigestSession {
	fn signature_hash_original(
		&mut self,
		tx: &Transaction,
		input_index: usize,
		script_code: &Script,
		sighashtype: u32,
		sighash: Sighash,
		keep_prefix: bool,
	) -> H256 {
		if sighash.base == SighashBase::Single && input_index >= tx.outputs.len() {
			trace!("SIGHASH_SINGLE input {} has no matching output, {} outputs", input_index, tx.outputs.len());
			return 1u8.into();
		}

		let script_code = script_code.without_separators();
		let current = &tx.inputs[input_index];
		let zero_sequences = sighash.base != SighashBase::All;

		let mut stream = Stream::default();
		let mut session = if sighash.anyone_can_pay {
			stream
				.append(&tx.version)
				.append(&CompactInteger::from(1u8));
			HashSession::new()
		} else {
			self.legacy_session(tx, input_index, zero_sequences, keep_prefix)
		};

		stream
			.append(&current.previous_output)
			.append_list(&*script_code)
			.append(&current.sequence);
		session.append(&stream.take());

		if !sighash.anyone_can_pay {
			for input in &tx.inputs[input_index + 1..] {
				append_blanked_input(&mut stream, input, zero_sequences);
				session.append(&stream.take());
			}
		}

		match sighash.base {
			SighashBase::All => {
				stream.append(&CompactInteger::from(tx.outputs.len()));
				for output in &tx.outputs {
					stream.append(output);
					session.append(&stream.take());
				}
			},
			SighashBase::Single => {
				stream.append(&CompactInteger::from(input_index + 1));
				let null_output = TransactionOutput::default();
				for _ in 0..input_index {
					stream.append(&null_output);
					session.append(&stream.take());
				}
				stream.append(&tx.outputs[input_index]);
			},
			SighashBase::None => {
				stream.append(&CompactInteger::from(0u8));
			},
		}

		stream
			.append(&tx.lock_time)
			.append(&sighashtype);

		session.append(&stream.out());
		session.finish()
	}

	/// Working session positioned right before the input at `input_index`.
	fn legacy_session(&mut self, tx: &Transaction, input_index: usize, zero_sequences: bool, keep_prefix: bool) -> HashSession {
		let mut prefix = match self.legacy_prefix.take() {
			Some(prefix) if prefix.is_reusable(zero_sequences, input_index) => {
				trace!("extending legacy prefix from {} to {} inputs", prefix.hashed_inputs, input_index);
				prefix
			},
			Some(prefix) => {
				trace!(
					"restarting legacy prefix at input {}, {} inputs hashed, zero sequences {} -> {}",
					input_index, prefix.hashed_inputs, prefix.zero_sequences, zero_sequences
				);
				LegacyPrefix::new(tx, zero_sequences)
			},
			None => LegacyPrefix::new(tx, zero_sequences),
		};

		prefix.extend(&tx.inputs, input_index);
		let session = HashSession::from(prefix.session.snapshot());

		if keep_prefix {
			self.legacy_prefix = Some(prefix);
		}

		session
	}

	fn signature_hash_witness0(
		&mut self,
		tx: &Transaction,
		input_index: usize,
		script_code: &Script,
		input_amount: u64,
		sighashtype: u32,
		sighash: Sighash,
		keep_hashes: bool,
	) -> H256 {
		let hash_prevouts = if sighash.anyone_can_pay {
			H256::default()
		} else {
			cached(&mut self.hash_prevouts, keep_hashes, || compute_hash_prevouts(&tx.inputs))
		};

		let hash_sequence = match sighash.base {
			SighashBase::All if !sighash.anyone_can_pay => {
				cached(&mut self.hash_sequence, keep_hashes, || compute_hash_sequence(&tx.inputs))
			},
			_ => H256::default(),
		};

		let hash_outputs = match sighash.base {
			SighashBase::All => cached(&mut self.hash_outputs, keep_hashes, || compute_hash_outputs(&tx.outputs)),
			SighashBase::Single if input_index < tx.outputs.len() => {
				let mut stream = Stream::default();
				stream.append(&tx.outputs[input_index]);
				dhash256(&stream.out())
			},
			_ => H256::default(),
		};

		let current = &tx.inputs[input_index];

		let mut session = HashSession::new();
		let mut stream = Stream::default();
		stream.append(&tx.version);
		stream.append(&hash_prevouts);
		stream.append(&hash_sequence);
		stream.append(&current.previous_output);
		session.append(&stream.take());

		stream.append_list(&**script_code);
		session.append(&stream.take());

		stream.append(&input_amount);
		stream.append(&current.sequence);
		stream.append(&hash_outputs);
		stream.append(&tx.lock_time);
		stream.append(&sighashtype);
		session.append(&stream.out());
		session.finish()
	}
}

fn cached<F>(slot: &mut Option<H256>, keep: bool, compute: F) -> H256 where F: FnOnce() -> H256 {
	if keep {
		*slot.get_or_insert_with(compute)
	} else {
		compute()
	}
}

fn append_blanked_input(stream: &mut Stream, input: &TransactionInput, zero_sequence: bool) {
	let sequence = if zero_sequence { 0 } else { input.sequence };
	stream
		.append(&input.previous_output)
		.append(&Bytes::default())
		.append(&sequence);
}

fn compute_hash_prevouts(inputs: &[TransactionInput]) -> H256 {
	trace!("computing hashPrevouts of {} inputs", inputs.len());
	let mut session = HashSession::new();
	let mut stream = Stream::default();
	for input in inputs {
		stream.append(&input.previous_output);
		session.append(&stream.take());
	}
	session.finish()
}

fn compute_hash_sequence(inputs: &[TransactionInput]) -> H256 {
	trace!("computing hashSequence of {} inputs", inputs.len());
	let mut session = HashSession::new();
	let mut stream = Stream::default();
	for input in inputs {
		stream.append(&input.sequence);
		session.append(&stream.take());
	}
	session.finish()
}

fn compute_hash_outputs(outputs: &[TransactionOutput]) -> H256 {
	trace!("computing hashOutputs of {} outputs", outputs.len());
	let mut session = HashSession::new();
	let mut stream = Stream::default();
	for output in outputs {
		stream.append(output);
		session.append(&stream.take());
	}
	session.finish()
}
