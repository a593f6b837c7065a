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

use std::fmt;
use std::ops::Deref;

use error::Error;

/// Maximum length of the line ending in bytes.
pub const CAPACITY: usize = 15;

/// Terminator appended to every record.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LineEnding(String);

impl LineEnding {
    /// Fails if `value` is longer than [CAPACITY](constant.CAPACITY.html) bytes.
    pub fn new(value: &str) -> Result<Self, Error> {
        if value.len() > CAPACITY {
            Err(Error::LineEndingTooLong(value.len()))
        } else {
            Ok(LineEnding(value.to_string()))
        }
    }

    /// The terminator as a string slice.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        LineEnding("\n".to_string())
    }
}

impl Deref for LineEnding {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decodes `\n`, `\r` and `\t`.
///
/// Any other escaped character is copied without the backslash.
/// A trailing lone backslash is dropped.
pub fn decode_escapes(value: &str) -> String {
    let mut decoded = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('r') => decoded.push('\r'),
            Some('t') => decoded.push('\t'),
            Some(other) => decoded.push(other),
            None => {},
        }
    }
    decoded
}
