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

#![warn(missing_docs)]

//! # Kinglet - simple leveled logger for Rust
//!
//! `kinglet` writes tagged log records into a file, stdout, stderr and
//! an optional platform log sink.
//!
//! Every record is decorated with a timestamp, a severity character
//! and optionally the location of the log call:
//!
//! ```ignore
//! 03-14 15:09:26.535897 W | 3 retries left (src/net.rs:12:connect)
//! ```
//!
//! The log call is synchronous: when it returns the record was written into all the
//! enabled destinations. Each destination is protected by its own lock.
//!
//! The severities are ordered as `ERROR < WARNING < INFO < DEBUG < VERBOSE`,
//! a record is emitted if its severity is less than or equal to the log level.
//! The level `OFF` disables everything except the `CONSOLE` records
//! which are always visible.
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! kinglet = "0.9"
//! ```
//!
//! # Example
//!
//! ```rust
//! #[macro_use]
//! extern crate kinglet;
//! use kinglet as kl;
//!
//! fn main() {
//!     kl_init!().unwrap();
//!
//!     kl::set_level(kl::LogLevel::INFO);
//!     kl::set_options(kl::Options::TO_STDERR | kl::Options::PRINT_SOURCE_LOCATION);
//!
//!     info!("{} is saying hello", "kinglet");
//!     warning!(tag: "net", "{} retries left", 3);
//!     debug!("I'm invisible");
//!     console!("I'm always visible");
//!
//!     kl::flush();
//! }
//!
//! ```
//!
//! The configuration might also be given as program arguments,
//! see the [spec](spec/index.html) module.
//!
//! ```rust
//! #[macro_use]
//! extern crate kinglet;
//! use kinglet as kl;
//!
//! fn main() {
//!     kl_init!(&["SET_LEVEL=3", "SET_OPTIONS=0x8001", "SET_LINEEND=\\r\\n"]).unwrap();
//!
//!     assert_eq!(kl::level(), kl::LogLevel::INFO);
//!     info!("I'm visible in stdout without timestamp");
//! }
//!
//! ```
//!
//! The macros use the process wide logger. A [Logger](logger/struct.Logger.html)
//! might also be constructed and owned explicitly.

extern crate chrono;
#[macro_use]
extern crate lazy_static;
extern crate parking_lot;
extern crate serde_json;

#[doc(hidden)]
#[macro_use]
pub mod helpers;

#[macro_use]
mod macros;

/// Definition of the log levels and severities.
pub mod levels;
#[doc(inline)]
pub use levels::{LogLevel, Severity};

/// Definition of the option flags.
pub mod options;
#[doc(inline)]
pub use options::Options;

/// The line ending appended to every record.
pub mod line_ending;

/// Definition of the log record entry.
pub mod record;
#[doc(inline)]
pub use record::{Location, Record};

/// Configuration errors.
pub mod error;
#[doc(inline)]
pub use error::Error;

/// Configuration spec.
pub mod spec;

/// Collection of log destinations.
pub mod handlers;

/// Log record formatter.
pub mod formatters;

/// The logger core.
pub mod logger;
#[doc(inline)]
pub use logger::{Logger, Overrides};

/// The process wide logger.
pub mod global;
#[doc(inline)]
pub use global::{ENV_SPEC, configure, configure_from_arguments, disable_options, enable_options,
                 flush, init, level, logger, options, set_file, set_level, set_line_ending,
                 set_options, set_platform_handler, set_stderr, set_stdout};

/// Version of the crate, `MAJOR.MINOR.PATCH`.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
