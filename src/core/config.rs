//! Purpose: Immutable configuration for a `JsonCodec`.
//! Exports: `CodecConfig`.
//! Role: Fixed at construction; a codec never mutates its config afterwards.
//! Invariants: Defaults tolerate unknown input fields and emit compact JSON.

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CodecConfig {
    pub reject_unknown_fields: bool,
    pub pretty: bool,
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reject_unknown_fields(mut self, reject: bool) -> Self {
        self.reject_unknown_fields = reject;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
