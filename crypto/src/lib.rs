use std::fmt;
use primitives::hash::{H32, H160, H256};
use ripemd160::Ripemd160;
use sha2::{Digest, Sha256};

/// Incremental double SHA-256.
///
/// Bytes are fed into a single running SHA-256; `finish` completes that pass on
/// a copy of the state and hashes the 32-byte result once more. The running
/// state can be captured with `snapshot` and restored with `resume_from`, which
/// makes it possible to hash a shared prefix once and branch from it.
#[derive(Clone, Default)]
pub struct HashSession {
	hasher: Sha256,
	len: u64,
}

/// Captured midstate of a `HashSession`.
#[derive(Clone)]
pub struct Snapshot {
	hasher: Sha256,
	len: u64,
}

impl HashSession {
	pub fn new() -> Self {
		HashSession::default()
	}

	pub fn append(&mut self, data: &[u8]) -> &mut Self {
		self.hasher.input(data);
		self.len += data.len() as u64;
		self
	}

	pub fn snapshot(&self) -> Snapshot {
		Snapshot {
			hasher: self.hasher.clone(),
			len: self.len,
		}
	}

	pub fn resume_from(&mut self, snapshot: &Snapshot) {
		self.hasher = snapshot.hasher.clone();
		self.len = snapshot.len;
	}

	/// Double SHA-256 of everything appended so far. The session itself is left untouched.
	pub fn finish(&self) -> H256 {
		let first = self.hasher.clone().result();
		let mut second = Sha256::new();
		second.input(&first);
		H256::from(second.result().as_slice())
	}

	/// Number of bytes appended.
	pub fn len(&self) -> u64 {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

impl From<Snapshot> for HashSession {
	fn from(snapshot: Snapshot) -> Self {
		HashSession {
			hasher: snapshot.hasher,
			len: snapshot.len,
		}
	}
}

impl fmt::Debug for HashSession {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("HashSession").field("len", &self.len).finish()
	}
}

impl fmt::Debug for Snapshot {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Snapshot").field("len", &self.len).finish()
	}
}

/// SHA-256
#[inline]
pub fn sha256(input: &[u8]) -> H256 {
	let mut hasher = Sha256::new();
	hasher.input(input);
	H256::from(hasher.result().as_slice())
}

/// RIPEMD160
#[inline]
pub fn ripemd160(input: &[u8]) -> H160 {
	let mut hasher = Ripemd160::new();
	hasher.input(input);
	H160::from(hasher.result().as_slice())
}

/// SHA-256 and RIPEMD160
#[inline]
pub fn dhash160(input: &[u8]) -> H160 {
	ripemd160(&*sha256(input))
}

/// Double SHA-256
#[inline]
pub fn dhash256(input: &[u8]) -> H256 {
	let mut session = HashSession::new();
	session.append(input);
	session.finish()
}

/// Data checksum
#[inline]
pub fn checksum(data: &[u8]) -> H32 {
	H32::from(&dhash256(data)[0..4])
}
