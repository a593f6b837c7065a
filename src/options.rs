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
use std::ops::{BitAnd, BitOr, BitOrAssign, Not, Sub};
use std::str::FromStr;

/// Set of named option flags.
///
/// The flags select the destinations (`TO_STDOUT`, `TO_STDERR`, `TO_PLATFORM_LOG`),
/// the decoration of the record (`NO_TIMESTAMP`, `NO_SEVERITY_TAG` and the `PRINT_*` flags)
/// and the delivery behavior (`FLUSH_IMMEDIATELY`).
///
/// The file destination has no flag, it's active while a file is set.
///
/// The numeric values are stable and may be used in the `SET_OPTIONS=` argument.
/// Unknown bits are kept as is.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Hash)]
pub struct Options(u16);

impl Options {
    /// Write records into stdout.
    pub const TO_STDOUT: Options = Options(1 << 0);
    /// Write records into stderr.
    pub const TO_STDERR: Options = Options(1 << 1);
    /// Forward records to the platform log handler.
    pub const TO_PLATFORM_LOG: Options = Options(1 << 2);
    /// Omit the severity character.
    pub const NO_SEVERITY_TAG: Options = Options(1 << 10);
    /// Print the source file in the location suffix.
    pub const PRINT_SOURCE_FILE: Options = Options(1 << 11);
    /// Print the line number in the location suffix.
    pub const PRINT_LINE_NUMBER: Options = Options(1 << 12);
    /// Print the function name in the location suffix.
    pub const PRINT_FUNCTION_NAME: Options = Options(1 << 13);
    /// Flush the destination after each record.
    pub const FLUSH_IMMEDIATELY: Options = Options(1 << 14);
    /// Omit the timestamp.
    pub const NO_TIMESTAMP: Options = Options(1 << 15);

    /// All the `PRINT_*` flags.
    pub const PRINT_SOURCE_LOCATION: Options = Options((1 << 11) | (1 << 12) | (1 << 13));
    /// The flags that make a record visible on the console.
    pub const TO_CONSOLE: Options = Options((1 << 0) | (1 << 1));

    /// No flags.
    #[inline(always)]
    pub const fn empty() -> Self {
        Options(0)
    }

    /// Wraps raw bits, unknown bits included.
    #[inline(always)]
    pub const fn from_bits(bits: u16) -> Self {
        Options(bits)
    }

    /// Raw bits.
    #[inline(always)]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// No flag is set.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// All flags of `other` are set.
    #[inline(always)]
    pub fn contains(&self, other: Options) -> bool {
        self.0 & other.0 == other.0
    }

    /// At least one flag of `other` is set.
    #[inline(always)]
    pub fn intersects(&self, other: Options) -> bool {
        self.0 & other.0 != 0
    }

    /// Sets the flags of `other`.
    #[inline(always)]
    pub fn insert(&mut self, other: Options) {
        self.0 |= other.0;
    }

    /// Clears the flags of `other`.
    #[inline(always)]
    pub fn remove(&mut self, other: Options) {
        self.0 &= !other.0;
    }

    /// Returns `(self | enable) & !disable`.
    #[inline(always)]
    pub fn adjust(&self, enable: Options, disable: Options) -> Self {
        Options((self.0 | enable.0) & !disable.0)
    }
}

const NAMES: [(&'static str, Options); 9] = [
    ("TO_STDOUT", Options::TO_STDOUT),
    ("TO_STDERR", Options::TO_STDERR),
    ("TO_PLATFORM_LOG", Options::TO_PLATFORM_LOG),
    ("NO_SEVERITY_TAG", Options::NO_SEVERITY_TAG),
    ("PRINT_SOURCE_FILE", Options::PRINT_SOURCE_FILE),
    ("PRINT_LINE_NUMBER", Options::PRINT_LINE_NUMBER),
    ("PRINT_FUNCTION_NAME", Options::PRINT_FUNCTION_NAME),
    ("FLUSH_IMMEDIATELY", Options::FLUSH_IMMEDIATELY),
    ("NO_TIMESTAMP", Options::NO_TIMESTAMP),
];

impl From<u16> for Options {
    #[inline(always)]
    fn from(orig: u16) -> Options {
        Options(orig)
    }
}

impl From<Options> for u16 {
    #[inline(always)]
    fn from(orig: Options) -> u16 {
        orig.0
    }
}

impl BitOr for Options {
    type Output = Options;

    #[inline(always)]
    fn bitor(self, rhs: Options) -> Options {
        Options(self.0 | rhs.0)
    }
}

impl BitOrAssign for Options {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Options) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Options {
    type Output = Options;

    #[inline(always)]
    fn bitand(self, rhs: Options) -> Options {
        Options(self.0 & rhs.0)
    }
}

impl Sub for Options {
    type Output = Options;

    #[inline(always)]
    fn sub(self, rhs: Options) -> Options {
        Options(self.0 & !rhs.0)
    }
}

impl Not for Options {
    type Output = Options;

    #[inline(always)]
    fn not(self) -> Options {
        Options(!self.0)
    }
}

/// Unknown option name.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct OptionParseError(pub String);

impl FromStr for Options {
    type Err = OptionParseError;

    /// Parses a single flag name, case insensitive, e.g. `to_stdout`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_uppercase();
        if name == "PRINT_SOURCE_LOCATION" {
            return Ok(Options::PRINT_SOURCE_LOCATION);
        }
        NAMES.iter()
            .find(|&&(n, _)| n == name)
            .map(|&(_, o)| o)
            .ok_or_else(|| OptionParseError(s.to_string()))
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut rest = self.0;
        let mut first = true;
        for &(name, option) in NAMES.iter() {
            if self.contains(option) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                rest &= !option.0;
                first = false;
            }
        }
        if rest != 0 || first {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{:#06x}", rest)?;
        }
        Ok(())
    }
}
