//! Purpose: Internal JSON boundary shared by the codec.
//! Exports: `parse` module with encode/decode helpers and failure categories.
//! Role: Single seam for serde_json so callsites avoid ad hoc (de)serialization.
//! Invariants: Runtime JSON encoding and decoding goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
