// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A formatted record has the following shape:
//!
//! ```ignore
//! MM-DD HH:MM:SS.ssssss T | message (file:line:function)<line ending>
//! ```
//!
//! The timestamp and the severity tag are dropped with `NO_TIMESTAMP` and `NO_SEVERITY_TAG`.
//! The `| ` separator is dropped only when both of them are.
//!
//! The location suffix is printed if any of the `PRINT_*` flags is set.
//! A field whose flag is not set is left blank, e.g. `(main.rs::)`.

use std::fmt::Write;

use options::Options;
use record::Record;

const TS_FORMAT: &'static str = "%m-%d %H:%M:%S%.6f ";

/// Timestamp fragment with the trailing space, empty with `NO_TIMESTAMP`.
pub fn timestamp(record: &Record, options: Options) -> String {
    if options.contains(Options::NO_TIMESTAMP) {
        String::new()
    } else {
        record.ts().format(TS_FORMAT).to_string()
    }
}

/// Everything in front of the user message.
pub fn prefix(record: &Record, options: Options) -> String {
    let mut prefix = timestamp(record, options);
    let tagged = !options.contains(Options::NO_SEVERITY_TAG);
    if tagged {
        prefix.push(record.severity().tag());
        prefix.push(' ');
    }
    if tagged || !options.contains(Options::NO_TIMESTAMP) {
        prefix.push_str("| ");
    }
    prefix
}

/// Location suffix, empty if none of the `PRINT_*` flags is set.
pub fn suffix(record: &Record, options: Options) -> String {
    if !options.intersects(Options::PRINT_SOURCE_LOCATION) {
        return String::new();
    }
    let location = record.location();
    let mut suffix = String::from(" (");
    if options.contains(Options::PRINT_SOURCE_FILE) {
        suffix.push_str(location.file);
    }
    suffix.push(':');
    if options.contains(Options::PRINT_LINE_NUMBER) {
        let _ = write!(suffix, "{}", location.line);
    }
    suffix.push(':');
    if options.contains(Options::PRINT_FUNCTION_NAME) {
        suffix.push_str(location.function);
    }
    suffix.push(')');
    suffix
}

/// Renders the whole record terminated by `line_ending`.
pub fn formatter(record: &Record, options: Options, line_ending: &str) -> String {
    let mut formatted = prefix(record, options);
    formatted.push_str(record.msg());
    formatted.push_str(&suffix(record, options));
    formatted.push_str(line_ending);
    formatted
}
