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

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use line_ending::CAPACITY;
use spec::ParseError;

/// Configuration failure.
///
/// Only the configuration calls fail, the log calls never report errors.
#[derive(Debug)]
pub enum Error {
    /// The log file could not be opened.
    File {
        /// Requested path.
        path: PathBuf,
        /// Underlying failure.
        source: io::Error,
    },
    /// The line ending exceeds the capacity, carries the requested length.
    LineEndingTooLong(usize),
    /// Invalid configuration spec.
    Spec(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::File { ref path, ref source } =>
                write!(f, "Failed to open log file {}: {}", path.display(), source),
            Error::LineEndingTooLong(len) =>
                write!(f, "Line ending of {} bytes exceeds {} bytes", len, CAPACITY),
            Error::Spec(ref err) => write!(f, "Invalid log spec: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::File { ref source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(orig: ParseError) -> Error {
        Error::Spec(orig)
    }
}
