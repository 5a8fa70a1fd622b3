use std::io;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use primitives::bytes::Bytes;
use primitives::hash::{H32, H160, H256};
use crate::compact_integer::CompactInteger;
use crate::{Serializable, Stream, Deserializable, Reader, Error};

impl Serializable for bool {
	#[inline]
	fn serialize(&self, s: &mut Stream) {
		s.write_u8(*self as u8).unwrap_or(());
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		1
	}
}

impl Serializable for i32 {
	#[inline]
	fn serialize(&self, s: &mut Stream) {
		s.write_i32::<LittleEndian>(*self).unwrap_or(());
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		4
	}
}

impl Serializable for i64 {
	#[inline]
	fn serialize(&self, s: &mut Stream) {
		s.write_i64::<LittleEndian>(*self).unwrap_or(());
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		8
	}
}

impl Serializable for u8 {
	#[inline]
	fn serialize(&self, s: &mut Stream) {
		s.write_u8(*self).unwrap_or(());
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		1
	}
}

impl Serializable for u16 {
	#[inline]
	fn serialize(&self, s: &mut Stream) {
		s.write_u16::<LittleEndian>(*self).unwrap_or(());
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		2
	}
}

impl Serializable for u32 {
	#[inline]
	fn serialize(&self, s: &mut Stream) {
		s.write_u32::<LittleEndian>(*self).unwrap_or(());
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		4
	}
}

impl Serializable for u64 {
	#[inline]
	fn serialize(&self, s: &mut Stream) {
		s.write_u64::<LittleEndian>(*self).unwrap_or(());
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		8
	}
}

impl Deserializable for bool {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		match reader.read_u8()? {
			0 => Ok(false),
			1 => Ok(true),
			_ => Err(Error::MalformedData),
		}
	}
}

impl Deserializable for i32 {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		Ok(reader.read_i32::<LittleEndian>()?)
	}
}

impl Deserializable for i64 {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		Ok(reader.read_i64::<LittleEndian>()?)
	}
}

impl Deserializable for u8 {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		Ok(reader.read_u8()?)
	}
}

impl Deserializable for u16 {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		Ok(reader.read_u16::<LittleEndian>()?)
	}
}

impl Deserializable for u32 {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		Ok(reader.read_u32::<LittleEndian>()?)
	}
}

impl Deserializable for u64 {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		Ok(reader.read_u64::<LittleEndian>()?)
	}
}

macro_rules! impl_ser_for_hash {
	($name: ident, $size: expr) => {
		impl Serializable for $name {
			fn serialize(&self, stream: &mut Stream) {
				stream.append_slice(&**self);
			}

			#[inline]
			fn serialized_size(&self) -> usize {
				$size
			}
		}

		impl Deserializable for $name {
			fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
				let mut result = Self::default();
				reader.read_slice(&mut *result)?;
				Ok(result)
			}
		}
	}
}

impl_ser_for_hash!(H32, 4);
impl_ser_for_hash!(H160, 20);
impl_ser_for_hash!(H256, 32);

impl Serializable for Bytes {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&CompactInteger::from(self.len()))
			.append_slice(self);
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		CompactInteger::from(self.len()).serialized_size() + self.len()
	}
}

impl Deserializable for Bytes {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		let len: usize = reader.read::<CompactInteger>()?.into();
		let mut bytes = Vec::new();
		io::Read::read_to_end(&mut io::Read::take(&mut *reader, len as u64), &mut bytes)?;
		if bytes.len() != len {
			return Err(Error::UnexpectedEnd);
		}
		Ok(bytes.into())
	}
}
