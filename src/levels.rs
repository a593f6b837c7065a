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
use std::str::FromStr;

/// Verbosity threshold.
///
/// The levels are ordered from `OFF` to `VERBOSE`.
/// A record passes the gate if its level is less than or equal to the threshold.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum LogLevel {
    /// Nothing but the console records.
    OFF,
    /// Errors only.
    ERROR,
    /// Warnings and above.
    WARNING,
    /// Informational records and above.
    INFO,
    /// Debug records and above.
    DEBUG,
    /// Everything.
    VERBOSE,
}

/// All the levels in ascending order.
pub const LEVELS: [LogLevel; 6] = [
    LogLevel::OFF,
    LogLevel::ERROR,
    LogLevel::WARNING,
    LogLevel::INFO,
    LogLevel::DEBUG,
    LogLevel::VERBOSE,
];

impl LogLevel {
    /// Returns the level for the numeric index in the range `0..=5`.
    pub fn from_index(index: usize) -> Option<LogLevel> {
        LEVELS.get(index).cloned()
    }
}

impl From<LogLevel> for usize {
    #[inline(always)]
    fn from(orig: LogLevel) -> usize {
        orig as usize
    }
}

impl From<usize> for LogLevel {
    #[inline(always)]
    fn from(orig: usize) -> LogLevel {
        match LogLevel::from_index(orig) {
            Some(level) => level,
            None => panic!("Unsupported log level {}", orig),
        }
    }
}

/// Invalid log level name.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LevelParseError(pub String);

impl FromStr for LogLevel {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return LogLevel::from_index(index).ok_or_else(|| LevelParseError(s.to_string()));
        }
        match s.to_uppercase().as_str() {
            "OFF" => Ok(LogLevel::OFF),
            "ERROR" => Ok(LogLevel::ERROR),
            "WARNING" | "WARN" => Ok(LogLevel::WARNING),
            "INFO" => Ok(LogLevel::INFO),
            "DEBUG" => Ok(LogLevel::DEBUG),
            "VERBOSE" => Ok(LogLevel::VERBOSE),
            _ => Err(LevelParseError(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LogLevel::OFF => write!(f, "OFF"),
            LogLevel::ERROR => write!(f, "ERROR"),
            LogLevel::WARNING => write!(f, "WARNING"),
            LogLevel::INFO => write!(f, "INFO"),
            LogLevel::DEBUG => write!(f, "DEBUG"),
            LogLevel::VERBOSE => write!(f, "VERBOSE"),
        }
    }
}

/// Class of an emitted record.
///
/// `CONSOLE` is the user-facing output channel and bypasses the level gate.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Severity {
    /// Always visible program output.
    CONSOLE,
    /// Error.
    ERROR,
    /// Warning.
    WARNING,
    /// Informational.
    INFO,
    /// Debug.
    DEBUG,
    /// Verbose.
    VERBOSE,
}

/// All the severities.
pub const SEVERITIES: [Severity; 6] = [
    Severity::CONSOLE,
    Severity::ERROR,
    Severity::WARNING,
    Severity::INFO,
    Severity::DEBUG,
    Severity::VERBOSE,
];

impl Severity {
    /// Level required to pass the gate, `None` for the unconditional console.
    #[inline(always)]
    pub fn level(&self) -> Option<LogLevel> {
        match *self {
            Severity::CONSOLE => None,
            Severity::ERROR => Some(LogLevel::ERROR),
            Severity::WARNING => Some(LogLevel::WARNING),
            Severity::INFO => Some(LogLevel::INFO),
            Severity::DEBUG => Some(LogLevel::DEBUG),
            Severity::VERBOSE => Some(LogLevel::VERBOSE),
        }
    }

    /// Single character marker printed in front of the record.
    #[inline]
    pub fn tag(&self) -> char {
        match *self {
            Severity::CONSOLE => 'C',
            Severity::ERROR => 'E',
            Severity::WARNING => 'W',
            Severity::INFO => 'I',
            Severity::DEBUG => 'D',
            Severity::VERBOSE => 'V',
        }
    }

    /// Whether a record of this severity passes the `threshold`.
    #[inline(always)]
    pub fn passes(&self, threshold: LogLevel) -> bool {
        match self.level() {
            None => true,
            Some(level) => level <= threshold,
        }
    }
}

impl fmt::Display for Severity {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Severity::CONSOLE => write!(f, "CONSOLE"),
            Severity::ERROR => write!(f, "ERROR"),
            Severity::WARNING => write!(f, "WARNING"),
            Severity::INFO => write!(f, "INFO"),
            Severity::DEBUG => write!(f, "DEBUG"),
            Severity::VERBOSE => write!(f, "VERBOSE"),
        }
    }
}
