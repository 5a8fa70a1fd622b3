pub mod bytes;
pub mod hash;
