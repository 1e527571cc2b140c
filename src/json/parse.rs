//! Purpose: Provide the internal JSON encode/decode entrypoints and failure categories.
//! Exports: `from_str`, `from_value`, `from_value_reporting_ignored`, `to_string`,
//! `ParseFailureCategory`, `categorize_error`, `categorize_message`, `hint_for_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Category labels are stable; they appear in logs and error hints.
//! Invariants: Hints never embed the input payload, only category and context.
//! Notes: Error mapping to domain errors is done by callsites so context stays explicit.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_ignored::Path;
use serde_json::Value;
use serde_json::error::Category;

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub(crate) fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(value)
}

/// Decodes `value` and also returns the paths of input keys the shape ignored.
pub(crate) fn from_value_reporting_ignored<T: DeserializeOwned>(
    value: &Value,
) -> Result<(T, Vec<String>), serde_json::Error> {
    let mut ignored = Vec::new();
    let decoded = serde_ignored::deserialize(value, |path| ignored.push(render_path(&path)))?;
    Ok((decoded, ignored))
}

// `lead.nick`, `members[1].x`; wrapper levels (Option, newtypes) add nothing.
fn render_path(path: &Path<'_>) -> String {
    match path {
        Path::Root => String::new(),
        Path::Seq { parent, index } => format!("{}[{index}]", render_path(parent)),
        Path::Map { parent, key } => {
            let parent = render_path(parent);
            if parent.is_empty() {
                key.clone()
            } else {
                format!("{parent}.{key}")
            }
        }
        Path::Some { parent }
        | Path::NewtypeStruct { parent }
        | Path::NewtypeVariant { parent } => render_path(parent),
    }
}

pub(crate) fn to_string<T: Serialize + ?Sized>(
    value: &T,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    Eof,
    TypeMismatch,
    NumericRange,
    DepthLimit,
    Io,
    Unknown,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Eof => "eof",
            Self::TypeMismatch => "type-mismatch",
            Self::NumericRange => "numeric-range",
            Self::DepthLimit => "depth-limit",
            Self::Io => "io",
            Self::Unknown => "unknown",
        }
    }
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Io => ParseFailureCategory::Io,
        Category::Eof => ParseFailureCategory::Eof,
        Category::Syntax => match categorize_message(&err.to_string()) {
            ParseFailureCategory::Unknown => ParseFailureCategory::Syntax,
            other => other,
        },
        Category::Data => match categorize_message(&err.to_string()) {
            ParseFailureCategory::Unknown => ParseFailureCategory::TypeMismatch,
            other => other,
        },
    }
}

pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    let lower = message.to_ascii_lowercase();
    if lower.contains("recursion limit exceeded") {
        ParseFailureCategory::DepthLimit
    } else if lower.contains("number out of range") || lower.contains("invalid value: integer") {
        ParseFailureCategory::NumericRange
    } else if lower.contains("eof while parsing") {
        ParseFailureCategory::Eof
    } else if lower.contains("invalid type") || lower.contains("missing field") {
        ParseFailureCategory::TypeMismatch
    } else if lower.contains("expected value") || lower.contains("trailing characters") {
        ParseFailureCategory::Syntax
    } else {
        ParseFailureCategory::Unknown
    }
}

pub(crate) fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    let category = categorize_error(err);
    format!("parse category: {}; context: {context}", category.label())
}
