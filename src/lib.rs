//! Purpose: Library crate behind the `jsonhelper` CLI and tests.
//! Exports: `api` (record type, codec, config, errors).
//! Role: Forgiving JSON helpers; failures collapse to sentinel values.
//! Invariants: `api` is the only public path; `core` and `json` stay internal.
//! Invariants: serde_json is called only from `json::parse`.
pub mod api;
pub(crate) mod core;
pub(crate) mod json;
