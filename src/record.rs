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

use chrono::prelude::*;

use std::fmt;
use std::fmt::Write;

use levels::Severity;

const PREALLOC: usize = 128;

/// Position of the log call in the source code.
///
/// Normally captured by the log macros.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Location<'a> {
    /// Source file path.
    pub file: &'a str,
    /// Line number.
    pub line: u32,
    /// Name of the enclosing function.
    pub function: &'a str,
}

impl<'a> Location<'a> {
    /// Creates a location.
    #[inline(always)]
    pub fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Location {
            file: file,
            line: line,
            function: function,
        }
    }
}

/// Log record that holds information where log was recorded
/// and the message details.
///
/// The user message is rendered once and shared by all the destinations.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    severity: Severity,
    tag: &'a str,
    location: Location<'a>,
    ts: DateTime<Local>,
    msg: String,
}

#[inline(always)]
fn format<'a>(args: fmt::Arguments<'a>) -> String {
    let mut mstr = String::with_capacity(PREALLOC);
    // A failing Display impl leaves the partial message.
    let _ = mstr.write_fmt(args);
    mstr
}

impl<'a> Record<'a> {
    /// Renders the user message and takes the local timestamp.
    pub fn new(severity: Severity, tag: &'a str, location: Location<'a>,
               args: fmt::Arguments) -> Self {
        Record {
            severity: severity,
            tag: tag,
            location: location,
            ts: Local::now(),
            msg: format(args),
        }
    }

    /// Severity of the record.
    #[inline(always)]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Caller supplied tag.
    #[inline(always)]
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Call site.
    #[inline(always)]
    pub fn location(&self) -> &Location<'a> {
        &self.location
    }

    /// Local time of the record.
    #[inline(always)]
    pub fn ts(&self) -> &DateTime<Local> {
        &self.ts
    }

    /// User log message.
    #[inline(always)]
    pub fn msg(&self) -> &str {
        &self.msg
    }
}
