mod builder;
mod error;
mod opcode;
mod script;
mod script_code;
mod sighash;

pub use primitives::{hash, bytes};

pub use crate::builder::Builder;
pub use crate::error::Error;
pub use crate::opcode::Opcode;
pub use crate::script::{Script, ScriptType, Instruction, Instructions};
pub use crate::script_code::script_code;
pub use crate::sighash::{
	DigestEngine, EngineConfig, Sighash, SighashBase, SignatureVersion,
};
