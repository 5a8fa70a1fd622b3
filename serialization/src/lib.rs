mod compact_integer;
mod impls;
mod reader;
mod stream;

pub use primitives::{hash, bytes};

pub use crate::compact_integer::CompactInteger;
pub use crate::reader::{Reader, Deserializable, deserialize, Error};
pub use crate::stream::{
	Stream, Serializable, serialize, serialize_with_flags, serialize_list, serialized_list_size,
	SERIALIZE_TRANSACTION_WITNESS,
};
