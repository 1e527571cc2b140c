//! Purpose: Define the stable public Rust API boundary for jsonhelper.
//! Exports: Record type, codec, config and the error types used by the CLI.
//! Role: Public, additive-only surface; hides the serde_json boundary.
//! Invariants: This module is the only public path to the codec.
//! Invariants: Codec operations exposed here never return an error.

pub use crate::core::codec::{EMPTY_OBJECT, JsonCodec, decode, encode};
pub use crate::core::config::CodecConfig;
#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::record::DataRecord;
