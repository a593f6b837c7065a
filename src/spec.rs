// Copyright 2017 Dmytro Milinevskyi <dmilinevskyi@gmail.com>

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

// http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The logger configuration might be given either as a list of `KEY=VALUE`
//! arguments or as a JSON string.
//!
//! # Arguments
//!
//! The recognized arguments are:
//!
//! ```ignore
//! SET_OPTIONS=<number>
//! ENABLE_OPTIONS=<number>
//! DISABLE_OPTIONS=<number>
//! SET_LEVEL=<0..5>
//! SET_FILE=<path>
//! SET_LINEEND=<escaped string>
//! ```
//!
//! The numbers are decimal, hexadecimal with the `0x` prefix or octal with a leading zero.
//! The line ending understands `\n`, `\r` and `\t`, any other escaped character is taken literally.
//!
//! Unrecognized or malformed arguments are skipped, so the program arguments
//! can be passed as is.
//!
//! # JSON spec
//!
//! ```json
//! {
//!     "level": "<level name or 0..5>",
//!     "options": <number> or ["<option name>", ...],
//!     "enable": ["<option name>", ...],
//!     "disable": ["<option name>", ...],
//!     "file": "<path>" or null,
//!     "line_ending": "<string>"
//! }
//! ```
//!
//! All the fields are optional, unlike the arguments the JSON spec is validated strictly.
//!
//! The option names are the names of the [Options](../struct.Options.html) constants
//! in any case, e.g. `to_stdout`.

use serde_json::{Map, Value};

use std::fmt;
use std::path::PathBuf;

use levels::LogLevel;
use line_ending;
use options::Options;

/// A single configuration change.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Directive {
    /// Replace the whole option set.
    SetOptions(Options),
    /// Set the given options.
    EnableOptions(Options),
    /// Clear the given options.
    DisableOptions(Options),
    /// Set the log level.
    SetLevel(LogLevel),
    /// Set or clear the log file.
    SetFile(Option<PathBuf>),
    /// Set the line ending (already unescaped).
    SetLineEnding(String),
}

/// JSON log spec parse failure.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum JsonError {
    /// Invalid JSON string.
    Json,
    /// The root is not an object.
    Root,
    /// The log level is invalid.
    LogLevel,
    /// The option set is invalid.
    Options,
    /// The file is neither a string nor null.
    File,
    /// The line ending is not a string.
    LineEnding,
}

/// Generic log spec parse failure.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ParseError {
    /// Empty spec.
    Spec,
    /// JSON parse error.
    Json(JsonError),
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let what = match *self {
            JsonError::Json => "malformed JSON",
            JsonError::Root => "the root must be an object",
            JsonError::LogLevel => "invalid \"level\"",
            JsonError::Options => "invalid option set",
            JsonError::File => "\"file\" must be a string or null",
            JsonError::LineEnding => "\"line_ending\" must be a string",
        };
        f.write_str(what)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::Spec => f.write_str("empty spec"),
            ParseError::Json(ref err) => write!(f, "JSON spec: {}", err),
        }
    }
}

/// Parses an option number: decimal, `0x` hexadecimal or leading zero octal.
pub fn parse_number(value: &str) -> Option<u16> {
    let value = value.trim();
    if value.len() > 2 && (value.starts_with("0x") || value.starts_with("0X")) {
        u16::from_str_radix(&value[2..], 16).ok()
    } else if value.len() > 1 && value.starts_with('0') {
        u16::from_str_radix(&value[1..], 8).ok()
    } else {
        value.parse().ok()
    }
}

fn parse_level(value: &str) -> Option<LogLevel> {
    value.trim().parse().ok().and_then(LogLevel::from_index)
}

/// Parses a single `KEY=VALUE` argument.
///
/// Returns `None` for anything that is not a well formed configuration argument.
pub fn parse_argument(arg: &str) -> Option<Directive> {
    let mut kv = arg.splitn(2, '=');
    let (key, value) = match (kv.next(), kv.next()) {
        (Some(key), Some(value)) if !value.is_empty() => (key, value),
        _ => return None,
    };

    match key {
        "SET_OPTIONS" => parse_number(value).map(|bits| Directive::SetOptions(bits.into())),
        "ENABLE_OPTIONS" => parse_number(value).map(|bits| Directive::EnableOptions(bits.into())),
        "DISABLE_OPTIONS" => parse_number(value).map(|bits| Directive::DisableOptions(bits.into())),
        "SET_LEVEL" => parse_level(value).map(Directive::SetLevel),
        "SET_FILE" => Some(Directive::SetFile(Some(PathBuf::from(value)))),
        "SET_LINEEND" => Some(Directive::SetLineEnding(line_ending::decode_escapes(value))),
        _ => None,
    }
}

/// Collects the directives from the argument list, in order.
pub fn from_arguments<I, S>(args: I) -> Vec<Directive>
    where I: IntoIterator<Item = S>, S: AsRef<str>
{
    args.into_iter()
        .filter_map(|arg| parse_argument(arg.as_ref()))
        .collect()
}

fn json_options(value: &Value) -> Result<Options, ParseError> {
    let err = ParseError::Json(JsonError::Options);
    if let Some(bits) = value.as_u64() {
        if bits > u16::max_value() as u64 {
            return Err(err);
        }
        return Ok(Options::from(bits as u16));
    }

    let names = value.as_array().ok_or(err.clone())?;
    let mut options = Options::empty();
    for name in names {
        let name = name.as_str().ok_or(err.clone())?;
        options |= name.parse::<Options>().or(Err(err.clone()))?;
    }
    Ok(options)
}

fn json_level(value: &Value) -> Result<LogLevel, ParseError> {
    let err = ParseError::Json(JsonError::LogLevel);
    if let Some(index) = value.as_u64() {
        return LogLevel::from_index(index as usize).ok_or(err);
    }
    value.as_str().ok_or(err.clone())?.parse().or(Err(err))
}

fn parse_json(json: &str) -> Result<Vec<Directive>, ParseError> {
    let spec: Value = ::serde_json::from_str(json)
        .or(Err(ParseError::Json(JsonError::Json)))?;
    let spec: &Map<String, Value> = spec.as_object()
        .ok_or(ParseError::Json(JsonError::Root))?;

    let mut directives = Vec::new();

    if let Some(options) = spec.get("options") {
        directives.push(Directive::SetOptions(json_options(options)?));
    }
    if let Some(options) = spec.get("enable") {
        directives.push(Directive::EnableOptions(json_options(options)?));
    }
    if let Some(options) = spec.get("disable") {
        directives.push(Directive::DisableOptions(json_options(options)?));
    }
    if let Some(level) = spec.get("level") {
        directives.push(Directive::SetLevel(json_level(level)?));
    }
    if let Some(line_ending) = spec.get("line_ending") {
        let line_ending = line_ending.as_str()
            .ok_or(ParseError::Json(JsonError::LineEnding))?;
        directives.push(Directive::SetLineEnding(line_ending.to_string()));
    }
    if let Some(file) = spec.get("file") {
        let file = match *file {
            Value::Null => None,
            Value::String(ref path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => return Err(ParseError::Json(JsonError::File)),
        };
        directives.push(Directive::SetFile(file));
    }

    Ok(directives)
}

/// Parses the spec string, either JSON or whitespace separated arguments.
///
/// A spec starting with `{` or `[` is treated as JSON.
pub fn parse(spec: &str) -> Result<Vec<Directive>, ParseError> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(ParseError::Spec);
    }

    if spec.starts_with('{') || spec.starts_with('[') {
        return parse_json(spec);
    }

    Ok(from_arguments(spec.split_whitespace()))
}
