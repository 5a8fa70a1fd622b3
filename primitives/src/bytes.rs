//! Wrapper around `Vec<u8>`

use std::{fmt, io, ops, str};
use hex::{FromHex, FromHexError, ToHex};

/// Wrapper around `Vec<u8>`
#[derive(Default, PartialEq, Clone, Eq, Hash)]
pub struct Bytes(Vec<u8>);

impl Bytes {
	pub fn new() -> Self {
		Bytes::default()
	}

	pub fn new_with_len(len: usize) -> Self {
		Bytes(vec![0; len])
	}

	pub fn take(self) -> Vec<u8> {
		self.0
	}
}

impl<'a> From<&'a [u8]> for Bytes {
	fn from(v: &[u8]) -> Self {
		Bytes(v.into())
	}
}

impl From<Vec<u8>> for Bytes {
	fn from(v: Vec<u8>) -> Self {
		Bytes(v)
	}
}

impl From<Bytes> for Vec<u8> {
	fn from(bytes: Bytes) -> Self {
		bytes.0
	}
}

/// Used in tests and fixtures only.
impl From<&'static str> for Bytes {
	fn from(s: &'static str) -> Self {
		s.parse().unwrap()
	}
}

impl str::FromStr for Bytes {
	type Err = FromHexError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.from_hex().map(Bytes)
	}
}

impl io::Write for Bytes {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.0.flush()
	}
}

impl fmt::Debug for Bytes {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let hex: String = self.0.to_hex();
		f.write_str(&hex)
	}
}

impl fmt::Display for Bytes {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let hex: String = self.0.to_hex();
		f.write_str(&hex)
	}
}

impl ops::Deref for Bytes {
	type Target = Vec<u8>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl ops::DerefMut for Bytes {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl AsRef<[u8]> for Bytes {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl AsMut<[u8]> for Bytes {
	fn as_mut(&mut self) -> &mut [u8] {
		&mut self.0
	}
}

#[cfg(test)]
mod tests {
	use super::Bytes;

	#[test]
	fn test_bytes_from_hex() {
		let bytes: Bytes = "0145".into();
		assert_eq!(bytes, Bytes::from(vec![0x01u8, 0x45]));
		assert_eq!(bytes.to_string(), "0145");
	}

	#[test]
	fn test_bytes_invalid_hex() {
		assert!("0g".parse::<Bytes>().is_err());
		assert!("012".parse::<Bytes>().is_err());
	}
}
