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

/// The main log entry.
///
/// Emits a log record through the process wide logger if the [severity](levels/enum.Severity.html)
/// passes the current log [level](levels/enum.LogLevel.html).
///
/// The records of the [CONSOLE](levels/enum.Severity.html) severity are emitted unconditionally.
///
/// The file, line and the name of the enclosing function are captured automatically.
/// The record tag defaults to the module path and might be given explicitly
/// with the `tag: "..."` prefix.
///
/// # Example
///
/// ```rust
/// #[macro_use]
/// extern crate kinglet;
/// use kinglet as kl;
///
/// use std::sync::{Arc, Mutex};
///
/// fn main() {
///     kl::set_level(kl::LogLevel::WARNING);
///     kl::set_options(kl::Options::TO_PLATFORM_LOG);
///
///     let out = Arc::new(Mutex::new(String::new()));
///     {
///         let out = out.clone();
///         kl::set_platform_handler(Some(Box::new(move |record: &kl::Record| {
///             let mut out = out.lock().unwrap();
///             out.push_str(record.tag());
///             out.push(':');
///             out.push_str(record.msg());
///         })));
///     }
///
///     log!(kl::Severity::WARNING => tag: "net", ">{}<", 42);
///     log!(kl::Severity::INFO => "Not seen though");
///
///     assert_eq!(*out.lock().unwrap(), "net:>42<");
/// }
///
/// ```
#[macro_export]
macro_rules! log {
    ($severity:expr => tag: $tag:expr, $($arg:tt)+) => {{
        let severity = $severity;
        let logger = $crate::global::logger();
        if logger.can_emit(severity) {
            let location = $crate::Location::new(this_file!(), line!(), this_function!());
            logger.log(severity, $tag, location, format_args!($($arg)+));
        }
    }};

    ($severity:expr => $($arg:tt)+) => {
        log!($severity => tag: this_module!(), $($arg)+)
    };
}

/// Produces log record for the `console` severity.
///
/// The record is emitted regardless of the log level.
/// If neither stdout nor stderr destination is enabled the bare message
/// is printed into stdout.
///
/// See the [log](macro.log.html) macro for the details.
#[macro_export]
macro_rules! console {
    ($($arg:tt)+) => {
        log!($crate::Severity::CONSOLE => $($arg)+)
    };
}

/// Produces log record for the `error` severity.
///
/// See the [log](macro.log.html) macro for the details.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        log!($crate::Severity::ERROR => $($arg)+)
    };
}

/// Executes the code only for the `error` log level.
///
/// See the [log](macro.log.html) macro for the details.
#[macro_export]
macro_rules! in_error {
    ($block:block) => {
        if $crate::global::logger().can_emit($crate::Severity::ERROR) {
            $block;
        }
    }
}

/// Produces log record for the `warning` severity.
///
/// See the [log](macro.log.html) macro for the details.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        log!($crate::Severity::WARNING => $($arg)+)
    };
}

/// Executes the code only for the `warning` log level.
///
/// See the [log](macro.log.html) macro for the details.
#[macro_export]
macro_rules! in_warning {
    ($block:block) => {
        if $crate::global::logger().can_emit($crate::Severity::WARNING) {
            $block;
        }
    }
}

/// Produces log record for the `info` severity.
///
/// See the [log](macro.log.html) macro for the details.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        log!($crate::Severity::INFO => $($arg)+)
    };
}

/// Executes the code only for the `info` log level.
///
/// See the [log](macro.log.html) macro for the details.
#[macro_export]
macro_rules! in_info {
    ($block:block) => {
        if $crate::global::logger().can_emit($crate::Severity::INFO) {
            $block;
        }
    }
}

/// Produces log record for the `debug` severity.
///
/// See the [log](macro.log.html) macro for the details.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        log!($crate::Severity::DEBUG => $($arg)+)
    };
}

/// Executes the code only for the `debug` log level.
///
/// See the [log](macro.log.html) macro for the details.
#[macro_export]
macro_rules! in_debug {
    ($block:block) => {
        if $crate::global::logger().can_emit($crate::Severity::DEBUG) {
            $block;
        }
    }
}

/// Produces log record for the `verbose` severity.
///
/// See the [log](macro.log.html) macro for the details.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)+) => {
        log!($crate::Severity::VERBOSE => $($arg)+)
    };
}

/// Executes the code only for the `verbose` log level.
///
/// See the [log](macro.log.html) macro for the details.
#[macro_export]
macro_rules! in_verbose {
    ($block:block) => {
        if $crate::global::logger().can_emit($crate::Severity::VERBOSE) {
            $block;
        }
    }
}
