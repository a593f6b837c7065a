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

use std::path::Path;

use error::Error;
use handlers::{Handler, Writer};
use levels::LogLevel;
use logger::Logger;
use options::Options;

/// Environment variable with the initial configuration.
///
/// See the [spec](spec/index.html) module for the format.
pub const ENV_SPEC: &'static str = "KINGLET_LOG";

lazy_static! {
    static ref LOGGER: Logger = Logger::new();
}

/// The process wide logger used by the log macros.
#[inline(always)]
pub fn logger() -> &'static Logger {
    &LOGGER
}

/// Configures the process wide logger from the `KINGLET_LOG` environment variable.
///
/// Nothing is done if the variable is not set.
///
/// # Example
///
/// ```rust
/// extern crate kinglet;
/// use kinglet as kl;
///
/// use std::env;
///
/// fn main() {
///     env::set_var(kl::ENV_SPEC, "SET_LEVEL=4 SET_OPTIONS=0x8002");
///     kl::init().unwrap();
///     assert_eq!(kl::level(), kl::LogLevel::DEBUG);
///     assert_eq!(kl::options(), kl::Options::TO_STDERR | kl::Options::NO_TIMESTAMP);
///
///     env::set_var(kl::ENV_SPEC, r#"{"level": "warning", "options": ["to_stdout"]}"#);
///     kl::init().unwrap();
///     assert_eq!(kl::level(), kl::LogLevel::WARNING);
///     assert_eq!(kl::options(), kl::Options::TO_STDOUT);
///
///     env::set_var(kl::ENV_SPEC, "{\"level\": ");
///     match kl::init() {
///         Err(kl::Error::Spec(_)) => {},
///         other => panic!("unexpected {:?}", other),
///     }
///     assert_eq!(kl::level(), kl::LogLevel::WARNING);
/// }
/// ```
pub fn init() -> Result<(), Error> {
    logger().configure_from_env(ENV_SPEC)
}

/// Configures the process wide logger from `KEY=VALUE` arguments.
///
/// Usually the program arguments are passed as is.
///
/// # Example
///
/// ```rust
/// extern crate kinglet;
///
/// fn main() {
///     kinglet::configure_from_arguments(&["SET_LEVEL=3", "SET_OPTIONS=0x8001", "SET_LINEEND=\\n"]).unwrap();
///     assert_eq!(kinglet::level(), kinglet::LogLevel::INFO);
///     assert_eq!(kinglet::options(), kinglet::Options::TO_STDOUT | kinglet::Options::NO_TIMESTAMP);
/// }
/// ```
pub fn configure_from_arguments<I, S>(args: I) -> Result<(), Error>
    where I: IntoIterator<Item = S>, S: AsRef<str>
{
    logger().configure_from_arguments(args)
}

/// Configures the process wide logger from a spec string.
pub fn configure(spec: &str) -> Result<(), Error> {
    logger().configure(spec)
}

/// Sets the log level.
pub fn set_level(level: LogLevel) {
    logger().set_level(level);
}

/// Returns the log level.
pub fn level() -> LogLevel {
    logger().level()
}

/// Replaces all the options.
pub fn set_options(options: Options) {
    logger().set_options(options);
}

/// Sets the given options.
pub fn enable_options(options: Options) {
    logger().enable_options(options);
}

/// Clears the given options.
pub fn disable_options(options: Options) {
    logger().disable_options(options);
}

/// Returns the options.
pub fn options() -> Options {
    logger().options()
}

/// Sets or clears the log file.
pub fn set_file<P: AsRef<Path>>(path: Option<P>) -> Result<(), Error> {
    logger().set_file(path)
}

/// Sets the line ending.
pub fn set_line_ending(line_ending: &str) -> Result<(), Error> {
    logger().set_line_ending(line_ending)
}

/// Sets the platform log handler.
pub fn set_platform_handler(handler: Option<Handler>) {
    logger().set_platform_handler(handler);
}

/// Redirects the stdout destination.
pub fn set_stdout(writer: Writer) {
    logger().set_stdout(writer);
}

/// Redirects the stderr destination.
pub fn set_stderr(writer: Writer) {
    logger().set_stderr(writer);
}

/// Flushes all the destinations.
///
/// The log file is written unbuffered, this only flushes
/// the console writers.
pub fn flush() {
    logger().flush();
}
