//! Stream used for serialization of consensus structures.

use std::borrow::Borrow;
use std::io::{self, Write};
use primitives::bytes::Bytes;
use crate::compact_integer::CompactInteger;

/// Serialize transaction witness data.
pub const SERIALIZE_TRANSACTION_WITNESS: u32 = 0x40000000;

pub fn serialize<T>(t: &T) -> Bytes where T: Serializable {
	let mut stream = Stream::default();
	stream.append(t);
	stream.out()
}

pub fn serialize_with_flags<T>(t: &T, flags: u32) -> Bytes where T: Serializable {
	let mut stream = Stream::with_flags(flags);
	stream.append(t);
	stream.out()
}

pub fn serialize_list<T, K>(t: &[K]) -> Bytes where T: Serializable, K: Borrow<T> {
	let mut stream = Stream::default();
	stream.append_list(t);
	stream.out()
}

pub fn serialized_list_size<T, K>(t: &[K]) -> usize where T: Serializable, K: Borrow<T> {
	CompactInteger::from(t.len()).serialized_size() +
		t.iter().map(Borrow::borrow).map(Serializable::serialized_size).sum::<usize>()
}

pub trait Serializable {
	/// Serialize the struct and appends it to the end of stream.
	fn serialize(&self, s: &mut Stream);

	/// Hint about the size of serialized struct.
	fn serialized_size(&self) -> usize where Self: Sized {
		// fallback implementation
		serialize(self).len()
	}

	fn serialized_size_with_flags(&self, flags: u32) -> usize where Self: Sized {
		serialize_with_flags(self, flags).len()
	}
}

/// Stream used for serialization of Bitcoin structures
#[derive(Default)]
pub struct Stream {
	buffer: Vec<u8>,
	flags: u32,
}

impl Stream {
	pub fn new() -> Self {
		Stream::default()
	}

	pub fn with_flags(flags: u32) -> Self {
		Stream {
			buffer: Vec::new(),
			flags,
		}
	}

	pub fn include_transaction_witness(&self) -> bool {
		(self.flags & SERIALIZE_TRANSACTION_WITNESS) != 0
	}

	/// Serializes the struct and appends it to the end of stream.
	pub fn append<T>(&mut self, t: &T) -> &mut Self where T: Serializable {
		t.serialize(self);
		self
	}

	/// Appends raw bytes to the end of the stream.
	pub fn append_slice(&mut self, bytes: &[u8]) -> &mut Self {
		// discard error for now, since we write to simple vector
		self.buffer.write_all(bytes).unwrap_or(());
		self
	}

	/// Appends a list of serializable structs to the end of the stream.
	pub fn append_list<T, K>(&mut self, t: &[K]) -> &mut Self where T: Serializable, K: Borrow<T> {
		CompactInteger::from(t.len()).serialize(self);
		for i in t {
			i.borrow().serialize(self);
		}
		self
	}

	/// Drains what has been serialized so far, keeping the flags.
	pub fn take(&mut self) -> Bytes {
		Bytes::from(::std::mem::replace(&mut self.buffer, Vec::new()))
	}

	pub fn len(&self) -> usize {
		self.buffer.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}

	/// Full stream.
	pub fn out(self) -> Bytes {
		self.buffer.into()
	}
}

impl Write for Stream {
	#[inline]
	fn write(&mut self, buf: &[u8]) -> Result<usize, io::Error> {
		self.buffer.write(buf)
	}

	#[inline]
	fn flush(&mut self) -> Result<(), io::Error> {
		self.buffer.flush()
	}
}

#[cfg(test)]
mod tests {
	use primitives::bytes::Bytes;
	use super::{Stream, serialize_list, serialized_list_size, SERIALIZE_TRANSACTION_WITNESS};

	#[test]
	fn test_stream_append() {
		let mut stream = Stream::default();

		stream
			.append(&1u8)
			.append(&2u16)
			.append(&3u32)
			.append(&4u64);

		let expected = vec![
			1u8,
			2, 0,
			3, 0, 0, 0,
			4, 0, 0, 0, 0, 0, 0, 0,
		].into();

		assert_eq!(stream.out(), expected);
	}

	#[test]
	fn test_stream_take_keeps_flags() {
		let mut stream = Stream::with_flags(SERIALIZE_TRANSACTION_WITNESS);
		stream.append(&0x0102u16);
		assert_eq!(stream.take(), Bytes::from(vec![2u8, 1]));
		assert!(stream.is_empty());
		assert!(stream.include_transaction_witness());
		stream.append_slice(&[7, 8]);
		assert_eq!(stream.len(), 2);
	}

	#[test]
	fn test_serialize_list() {
		let list = vec![1u32, 2];
		let expected: Bytes = "020100000002000000".into();
		assert_eq!(serialize_list::<u32, _>(&list), expected);
		assert_eq!(serialized_list_size::<u32, _>(&list), 9);
	}
}
