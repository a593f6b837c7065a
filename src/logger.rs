// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use parking_lot::{Mutex, RwLock};

use std::env;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};

use error::Error;
use formatters::default::formatter;
use handlers::{self, file, stderr, stdout, Handler, Writer};
use levels::{LogLevel, Severity};
use line_ending::LineEnding;
use options::Options;
use record::{Location, Record};
use spec::{self, Directive};

/// Per call adjustments of the configuration.
///
/// The effective options are `(options | enable) & !disable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides<'a> {
    /// Options to set for this call.
    pub enable: Options,
    /// Options to clear for this call.
    pub disable: Options,
    /// Line ending to use instead of the configured one.
    pub line_ending: Option<&'a str>,
}

/// The logger core.
///
/// Holds the configuration and dispatches the records into the destinations.
///
/// Every destination has its own lock, so the records never interleave within
/// a destination while different destinations are written concurrently.
///
/// The configuration might be changed at any time,
/// a concurrent log call observes either the old or the new value.
pub struct Logger {
    level: AtomicUsize,
    options: AtomicU16,
    line_ending: RwLock<LineEnding>,
    file: Mutex<Option<file::Context>>,
    stdout: Mutex<Writer>,
    stderr: Mutex<Writer>,
    platform: RwLock<Option<Arc<Handler>>>,
}

impl Logger {
    /// Creates a logger with the level `OFF`, no options and `\n` line ending.
    pub fn new() -> Self {
        Self::with_writers(stdout::writer(), stderr::writer())
    }

    /// Same as [new](#method.new) but with custom console writers.
    pub fn with_writers(stdout: Writer, stderr: Writer) -> Self {
        Logger {
            level: AtomicUsize::new(LogLevel::OFF.into()),
            options: AtomicU16::new(0),
            line_ending: RwLock::new(LineEnding::default()),
            file: Mutex::new(None),
            stdout: Mutex::new(stdout),
            stderr: Mutex::new(stderr),
            platform: RwLock::new(None),
        }
    }

    /// Sets the log level.
    #[inline(always)]
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.into(), Ordering::Relaxed);
    }

    /// Current log level.
    #[inline(always)]
    pub fn level(&self) -> LogLevel {
        LogLevel::from(self.level.load(Ordering::Relaxed))
    }

    /// Whether a record of the given severity passes the level gate.
    #[inline(always)]
    pub fn can_emit(&self, severity: Severity) -> bool {
        severity.passes(self.level())
    }

    /// Replaces the whole option set.
    ///
    /// This is not additive, use [enable_options](#method.enable_options) to set
    /// individual options.
    pub fn set_options(&self, options: Options) {
        self.options.store(options.bits(), Ordering::Relaxed);
    }

    /// Sets the given options, the others are untouched.
    pub fn enable_options(&self, options: Options) {
        self.options.fetch_or(options.bits(), Ordering::Relaxed);
    }

    /// Clears the given options, the others are untouched.
    pub fn disable_options(&self, options: Options) {
        self.options.fetch_and(!options.bits(), Ordering::Relaxed);
    }

    /// Current option set.
    #[inline(always)]
    pub fn options(&self) -> Options {
        Options::from(self.options.load(Ordering::Relaxed))
    }

    /// Closes the current log file and opens the new one if given.
    ///
    /// The file is truncated.
    /// On failure no file stays open, the previous one is not restored.
    pub fn set_file<P: AsRef<Path>>(&self, path: Option<P>) -> Result<(), Error> {
        let mut file = self.file.lock();
        *file = None;
        if let Some(path) = path {
            let path = path.as_ref();
            let ctx = file::Context::open(path).map_err(|err| Error::File {
                path: path.into(),
                source: err,
            })?;
            *file = Some(ctx);
        }
        Ok(())
    }

    /// Closes the current log file.
    pub fn close_file(&self) {
        let _ = self.set_file(None::<&Path>);
    }

    /// Path of the open log file.
    pub fn file(&self) -> Option<PathBuf> {
        self.file.lock().as_ref().map(|ctx| ctx.path().to_path_buf())
    }

    /// Fails without any change if `line_ending` is too long.
    pub fn set_line_ending(&self, line_ending: &str) -> Result<(), Error> {
        let line_ending = LineEnding::new(line_ending)?;
        *self.line_ending.write() = line_ending;
        Ok(())
    }

    /// Current line ending.
    pub fn line_ending(&self) -> String {
        self.line_ending.read().to_string()
    }

    /// Sets the handler invoked for every record while `TO_PLATFORM_LOG` is set.
    ///
    /// The handler is called without any logger lock held, so it might log
    /// or replace itself.
    pub fn set_platform_handler(&self, handler: Option<Handler>) {
        *self.platform.write() = handler.map(Arc::new);
    }

    /// Redirects the stdout destination.
    pub fn set_stdout(&self, writer: Writer) {
        *self.stdout.lock() = writer;
    }

    /// Redirects the stderr destination.
    pub fn set_stderr(&self, writer: Writer) {
        *self.stderr.lock() = writer;
    }

    /// Flushes all the destinations.
    pub fn flush(&self) {
        if let Some(ref mut ctx) = *self.file.lock() {
            ctx.flush();
        }
        let _ = self.stdout.lock().flush();
        let _ = self.stderr.lock().flush();
    }

    /// Applies all the directives in order.
    ///
    /// A failing directive doesn't stop the rest, the first failure is returned.
    pub fn apply<I>(&self, directives: I) -> Result<(), Error>
        where I: IntoIterator<Item = Directive>
    {
        let mut result = Ok(());
        for directive in directives {
            let applied = match directive {
                Directive::SetOptions(options) => {
                    self.set_options(options);
                    Ok(())
                },
                Directive::EnableOptions(options) => {
                    self.enable_options(options);
                    Ok(())
                },
                Directive::DisableOptions(options) => {
                    self.disable_options(options);
                    Ok(())
                },
                Directive::SetLevel(level) => {
                    self.set_level(level);
                    Ok(())
                },
                Directive::SetFile(path) => self.set_file(path),
                Directive::SetLineEnding(line_ending) => self.set_line_ending(&line_ending),
            };
            if let Err(err) = applied {
                if result.is_ok() {
                    result = Err(err);
                }
            }
        }
        result
    }

    /// Configures the logger from `KEY=VALUE` arguments.
    ///
    /// See the [spec](spec/index.html) module for the recognized arguments.
    pub fn configure_from_arguments<I, S>(&self, args: I) -> Result<(), Error>
        where I: IntoIterator<Item = S>, S: AsRef<str>
    {
        self.apply(spec::from_arguments(args))
    }

    /// Configures the logger from the environment variable `var`.
    ///
    /// Nothing is done if the variable is not set.
    pub fn configure_from_env(&self, var: &str) -> Result<(), Error> {
        match env::var(var) {
            Ok(config) => self.configure(&config),
            Err(_) => Ok(()),
        }
    }

    /// Configures the logger from a spec string, either arguments or JSON.
    pub fn configure(&self, config: &str) -> Result<(), Error> {
        self.apply(spec::parse(config)?)
    }

    /// Emits a record if the severity passes the level gate.
    #[inline]
    pub fn log(&self, severity: Severity, tag: &str, location: Location, args: fmt::Arguments) {
        self.log_with(&Overrides::default(), severity, tag, location, args);
    }

    /// Same as [log](#method.log) with per call overrides.
    pub fn log_with(&self, overrides: &Overrides, severity: Severity, tag: &str,
                    location: Location, args: fmt::Arguments) {
        if !self.can_emit(severity) {
            return;
        }

        let options = self.options().adjust(overrides.enable, overrides.disable);
        let flush = options.contains(Options::FLUSH_IMMEDIATELY);
        let line_ending = match overrides.line_ending {
            Some(line_ending) => line_ending.to_string(),
            None => self.line_ending(),
        };

        let record = Record::new(severity, tag, location, args);
        let formatted = formatter(&record, options, &line_ending);
        let formatted = formatted.as_bytes();

        if let Some(ref mut ctx) = *self.file.lock() {
            ctx.emit(formatted, flush);
        }

        if options.contains(Options::TO_STDOUT) {
            handlers::emit(&mut *self.stdout.lock(), formatted, flush);
        }

        if options.contains(Options::TO_STDERR) {
            handlers::emit(&mut *self.stderr.lock(), formatted, flush);
        }

        if options.contains(Options::TO_PLATFORM_LOG) {
            let handler = self.platform.read().clone();
            if let Some(handler) = handler {
                (**handler)(&record);
            }
        }

        // The console records are visible even without any console destination.
        if severity == Severity::CONSOLE && !options.intersects(Options::TO_CONSOLE) {
            let mut bare = String::with_capacity(record.msg().len() + line_ending.len());
            bare.push_str(record.msg());
            bare.push_str(&line_ending);
            handlers::emit(&mut *self.stdout.lock(), bare.as_bytes(), true);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate crossbeam;
    extern crate tempdir;
    use self::tempdir::TempDir;

    use super::*;

    use parking_lot::Mutex;

    use std::fs;
    use std::io;
    use std::mem;
    use std::sync::Arc;

    use levels::{LEVELS, SEVERITIES};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn take(&self) -> String {
            let out = mem::replace(&mut *self.0.lock(), Vec::new());
            String::from_utf8(out).unwrap()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    const BARE: Options = Options::from_bits(
        Options::NO_TIMESTAMP.bits() | Options::NO_SEVERITY_TAG.bits());

    fn logger() -> (Logger, Capture, Capture) {
        let (out, err) = (Capture::default(), Capture::default());
        let logger = Logger::with_writers(Box::new(out.clone()), Box::new(err.clone()));
        (logger, out, err)
    }

    fn emit(logger: &Logger, severity: Severity, msg: &str) {
        logger.log(severity, "test", Location::new("src/logger.rs", 7, "emit"), format_args!("{}", msg));
    }

    #[test]
    fn test_logger_defaults() {
        let (logger, _, _) = logger();
        assert_eq!(logger.level(), LogLevel::OFF);
        assert_eq!(logger.options(), Options::empty());
        assert_eq!(logger.line_ending(), "\n");
        assert_eq!(logger.file(), None);
    }

    #[test]
    fn test_logger_level_gate() {
        let (logger, out, err) = logger();
        logger.set_options(Options::TO_STDOUT | BARE);

        for threshold in LEVELS.iter() {
            logger.set_level(*threshold);
            assert_eq!(logger.level(), *threshold);

            for severity in SEVERITIES.iter() {
                emit(&logger, *severity, "msg");
                let output = out.take();
                let visible = match severity.level() {
                    Some(level) => level <= *threshold,
                    None => true,
                };
                assert_eq!(logger.can_emit(*severity), visible);
                if visible {
                    assert_eq!(output, "msg\n");
                } else {
                    assert!(output.is_empty());
                }
            }
        }
        assert!(err.take().is_empty());
    }

    #[test]
    fn test_logger_options() {
        let (logger, _, _) = logger();
        for bits in [0u16, 0x4, 0x8001, 0xffff].iter() {
            logger.set_options(Options::from(*bits));
            assert_eq!(logger.options().bits(), *bits);
        }

        let a = Options::TO_STDOUT | Options::PRINT_LINE_NUMBER;
        let b = Options::NO_TIMESTAMP;
        logger.set_options(Options::empty());
        logger.enable_options(a);
        logger.enable_options(b);
        assert_eq!(logger.options(), a | b);
        logger.disable_options(a);
        assert_eq!(logger.options(), b);

        // Replacing is not additive.
        logger.set_options(a);
        assert_eq!(logger.options(), a);
    }

    #[test]
    fn test_logger_decoration() {
        let (logger, out, _) = logger();
        logger.set_level(LogLevel::VERBOSE);
        logger.set_options(Options::TO_STDOUT | Options::NO_TIMESTAMP | Options::PRINT_SOURCE_LOCATION);
        logger.log(Severity::WARNING, "net", Location::new("src/net.rs", 12, "connect"),
                   format_args!("{} retries left, {:.1}s", 3, 1.5));
        assert_eq!(out.take(), "W | 3 retries left, 1.5s (src/net.rs:12:connect)\n");

        logger.disable_options(Options::PRINT_FUNCTION_NAME);
        emit(&logger, Severity::DEBUG, "msg");
        assert_eq!(out.take(), "D | msg (src/logger.rs:7:)\n");

        logger.enable_options(Options::NO_SEVERITY_TAG);
        logger.disable_options(Options::PRINT_SOURCE_LOCATION);
        emit(&logger, Severity::DEBUG, "msg");
        assert_eq!(out.take(), "msg\n");
    }

    #[test]
    fn test_logger_console_fallback() {
        let (logger, out, err) = logger();

        emit(&logger, Severity::CONSOLE, "hello");
        assert_eq!(out.take(), "hello\n");
        emit(&logger, Severity::ERROR, "hidden");
        assert!(out.take().is_empty());

        // Decorations do not apply to the fallback.
        logger.set_options(Options::PRINT_SOURCE_LOCATION);
        emit(&logger, Severity::CONSOLE, "hello");
        assert_eq!(out.take(), "hello\n");

        // No duplicates with a console destination.
        logger.set_options(Options::TO_STDOUT | BARE);
        emit(&logger, Severity::CONSOLE, "hello");
        assert_eq!(out.take(), "hello\n");

        logger.set_options(Options::TO_STDERR | Options::NO_TIMESTAMP);
        emit(&logger, Severity::CONSOLE, "hello");
        assert!(out.take().is_empty());
        assert_eq!(err.take(), "C | hello\n");
    }

    #[test]
    fn test_logger_console_and_file() {
        let dir = TempDir::new("kl-l").unwrap();
        let path = dir.path().join("console.log");
        let (logger, out, _) = logger();
        logger.set_file(Some(&path)).unwrap();
        logger.set_options(Options::NO_TIMESTAMP);

        emit(&logger, Severity::CONSOLE, "hello");
        emit(&logger, Severity::INFO, "hidden");
        logger.close_file();

        assert_eq!(out.take(), "hello\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "C | hello\n");
    }

    #[test]
    fn test_logger_stdout_and_stderr() {
        let (logger, out, err) = logger();
        logger.set_level(LogLevel::INFO);
        logger.set_options(Options::TO_STDOUT | Options::TO_STDERR | Options::NO_TIMESTAMP);
        emit(&logger, Severity::INFO, "both");
        assert_eq!(out.take(), "I | both\n");
        assert_eq!(err.take(), "I | both\n");
    }

    #[test]
    fn test_logger_file_replacement() {
        let dir = TempDir::new("kl-l").unwrap();
        let (a, b) = (dir.path().join("a.log"), dir.path().join("b.log"));
        let (logger, _, _) = logger();
        logger.set_level(LogLevel::ERROR);
        logger.set_options(BARE);

        logger.set_file(Some(&a)).unwrap();
        assert_eq!(logger.file(), Some(a.clone()));
        emit(&logger, Severity::ERROR, "first");

        logger.set_file(Some(&b)).unwrap();
        assert_eq!(logger.file(), Some(b.clone()));
        emit(&logger, Severity::ERROR, "second");
        logger.flush();

        assert_eq!(fs::read_to_string(&a).unwrap(), "first\n");
        assert_eq!(fs::read_to_string(&b).unwrap(), "second\n");

        logger.set_file(None::<&Path>).unwrap();
        assert_eq!(logger.file(), None);
        emit(&logger, Severity::ERROR, "third");
        assert_eq!(fs::read_to_string(&b).unwrap(), "second\n");
    }

    #[test]
    fn test_logger_file_failure() {
        let dir = TempDir::new("kl-l").unwrap();
        let good = dir.path().join("good.log");
        let bad = dir.path().join("missing").join("bad.log");
        let (logger, _, _) = logger();
        logger.set_level(LogLevel::ERROR);
        logger.set_options(BARE);

        logger.set_file(Some(&good)).unwrap();
        emit(&logger, Severity::ERROR, "kept");

        match logger.set_file(Some(&bad)) {
            Err(Error::File { path, .. }) => assert_eq!(path, bad),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(logger.file(), None);
        emit(&logger, Severity::ERROR, "lost");
        assert_eq!(fs::read_to_string(&good).unwrap(), "kept\n");
    }

    #[test]
    fn test_logger_flush_immediately() {
        let dir = TempDir::new("kl-l").unwrap();
        let path = dir.path().join("flush.log");
        let (logger, _, _) = logger();
        logger.set_level(LogLevel::INFO);
        logger.set_options(BARE | Options::FLUSH_IMMEDIATELY);
        logger.set_file(Some(&path)).unwrap();

        emit(&logger, Severity::INFO, "now");
        assert_eq!(fs::read_to_string(&path).unwrap(), "now\n");
    }

    #[test]
    fn test_logger_file_unflushed() {
        let dir = TempDir::new("kl-l").unwrap();
        let path = dir.path().join("exit.log");
        let (logger, _, _) = logger();
        logger.set_level(LogLevel::ERROR);
        logger.set_options(Options::NO_TIMESTAMP);
        logger.set_file(Some(&path)).unwrap();

        emit(&logger, Severity::ERROR, "last words");
        assert_eq!(fs::read_to_string(&path).unwrap(), "E | last words\n");

        // The process wide logger is never dropped.
        mem::forget(logger);
        assert_eq!(fs::read_to_string(&path).unwrap(), "E | last words\n");
    }

    #[test]
    fn test_logger_line_ending() {
        let (logger, out, _) = logger();
        logger.set_options(Options::TO_STDOUT | BARE);

        logger.set_line_ending("\r\n").unwrap();
        emit(&logger, Severity::CONSOLE, "before");
        assert_eq!(out.take(), "before\r\n");

        match logger.set_line_ending(&"-".repeat(16)) {
            Err(Error::LineEndingTooLong(16)) => {},
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(logger.line_ending(), "\r\n");
        emit(&logger, Severity::CONSOLE, "after");
        assert_eq!(out.take(), "after\r\n");
    }

    #[test]
    fn test_logger_arguments() {
        let (logger, out, _) = logger();
        logger.configure_from_arguments(&["SET_LEVEL=3", "SET_OPTIONS=0x4", "SET_LINEEND=\\n"]).unwrap();
        assert_eq!(logger.level(), LogLevel::INFO);
        assert!(logger.options().contains(Options::from(0x4)));
        assert_eq!(logger.line_ending(), "\n");

        logger.configure_from_arguments(vec!["SET_OPTIONS=0x8001", "SET_LINEEND=\\t;"]).unwrap();
        emit(&logger, Severity::INFO, "tab");
        assert_eq!(out.take(), "I | tab\t;");
    }

    #[test]
    fn test_logger_arguments_failures() {
        let dir = TempDir::new("kl-l").unwrap();
        let bad = dir.path().join("missing").join("bad.log");
        let (logger, _, _) = logger();

        let args = vec![
            format!("SET_FILE={}", bad.display()),
            format!("SET_LINEEND={}", "x".repeat(16)),
            "SET_LEVEL=2".to_string(),
            "ENABLE_OPTIONS=1".to_string(),
        ];
        match logger.configure_from_arguments(&args) {
            Err(Error::File { .. }) => {},
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(logger.level(), LogLevel::WARNING);
        assert_eq!(logger.options(), Options::TO_STDOUT);
        assert_eq!(logger.line_ending(), "\n");
        assert_eq!(logger.file(), None);

        match logger.configure_from_arguments(&[format!("SET_LINEEND={}", "x".repeat(16))]) {
            Err(Error::LineEndingTooLong(16)) => {},
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_logger_configure() {
        let dir = TempDir::new("kl-l").unwrap();
        let path = dir.path().join("json.log");
        let (logger, _, _) = logger();

        let spec = format!(r#"{{"level": "verbose", "options": ["no_timestamp"], "file": "{}"}}"#,
                           path.display());
        logger.configure(&spec).unwrap();
        assert_eq!(logger.level(), LogLevel::VERBOSE);
        assert_eq!(logger.options(), Options::NO_TIMESTAMP);
        assert_eq!(logger.file(), Some(path.clone()));

        logger.configure("SET_LEVEL=1 ENABLE_OPTIONS=2").unwrap();
        assert_eq!(logger.level(), LogLevel::ERROR);
        assert_eq!(logger.options(), Options::NO_TIMESTAMP | Options::TO_STDERR);

        match logger.configure("{\"level\": 9}") {
            Err(Error::Spec(_)) => {},
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(logger.level(), LogLevel::ERROR);
    }

    #[test]
    fn test_logger_env() {
        let (logger, _, _) = logger();
        logger.configure_from_env("KINGLET_LOG_TEST_UNSET").unwrap();
        assert_eq!(logger.level(), LogLevel::OFF);
        assert_eq!(logger.options(), Options::empty());

        env::set_var("KINGLET_LOG_TEST_ARGS", "SET_LEVEL=4 SET_OPTIONS=0x8002");
        logger.configure_from_env("KINGLET_LOG_TEST_ARGS").unwrap();
        assert_eq!(logger.level(), LogLevel::DEBUG);
        assert_eq!(logger.options(), Options::TO_STDERR | Options::NO_TIMESTAMP);

        env::set_var("KINGLET_LOG_TEST_JSON", r#"{"level": 1, "options": ["to_stdout", "no_severity_tag"]}"#);
        logger.configure_from_env("KINGLET_LOG_TEST_JSON").unwrap();
        assert_eq!(logger.level(), LogLevel::ERROR);
        assert_eq!(logger.options(), Options::TO_STDOUT | Options::NO_SEVERITY_TAG);

        env::set_var("KINGLET_LOG_TEST_BAD", "{\"level\": ");
        match logger.configure_from_env("KINGLET_LOG_TEST_BAD") {
            Err(Error::Spec(spec::ParseError::Json(spec::JsonError::Json))) => {},
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(logger.level(), LogLevel::ERROR);
    }

    #[test]
    fn test_logger_platform() {
        let (logger, _, _) = logger();
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = seen.clone();
            logger.set_platform_handler(Some(Box::new(move |record: &Record| {
                seen.lock().push(format!("{}:{}:{}", record.severity().tag(), record.tag(), record.msg()));
            })));
        }
        logger.set_level(LogLevel::WARNING);

        emit(&logger, Severity::ERROR, "off");
        assert!(seen.lock().is_empty());

        logger.set_options(Options::TO_PLATFORM_LOG);
        emit(&logger, Severity::ERROR, "on");
        emit(&logger, Severity::INFO, "gated");
        assert_eq!(*seen.lock(), vec!["E:test:on".to_string()]);

        logger.set_platform_handler(None);
        emit(&logger, Severity::ERROR, "gone");
        assert_eq!(seen.lock().len(), 1);
    }

    #[test]
    fn test_logger_platform_reentrant() {
        let (logger, out, _) = logger();
        let logger = Arc::new(logger);
        {
            let weak = Arc::downgrade(&logger);
            logger.set_platform_handler(Some(Box::new(move |record: &Record| {
                if let Some(logger) = weak.upgrade() {
                    logger.set_platform_handler(None);
                    emit(&logger, Severity::CONSOLE, record.msg());
                }
            })));
        }
        logger.set_level(LogLevel::ERROR);
        logger.set_options(Options::TO_PLATFORM_LOG | BARE);

        emit(&logger, Severity::ERROR, "nested");
        assert_eq!(out.take(), "nested\n");

        emit(&logger, Severity::ERROR, "unhandled");
        assert!(out.take().is_empty());
    }

    #[test]
    fn test_logger_overrides() {
        let (logger, out, err) = logger();
        logger.set_level(LogLevel::INFO);
        logger.set_options(Options::TO_STDOUT | BARE);

        let overrides = Overrides {
            enable: Options::TO_STDERR,
            disable: Options::TO_STDOUT,
            line_ending: Some("\r"),
        };
        logger.log_with(&overrides, Severity::INFO, "test", Location::new("f.rs", 1, "f"),
                        format_args!("once"));
        assert!(out.take().is_empty());
        assert_eq!(err.take(), "once\r");

        emit(&logger, Severity::INFO, "again");
        assert_eq!(out.take(), "again\n");
        assert_eq!(logger.options(), Options::TO_STDOUT | BARE);
    }

    #[test]
    fn test_logger_threads() {
        let dir = TempDir::new("kl-l").unwrap();
        let path = dir.path().join("threads.log");
        let (logger, _, _) = logger();
        logger.set_level(LogLevel::INFO);
        logger.set_options(Options::NO_TIMESTAMP);
        logger.set_file(Some(&path)).unwrap();

        let (threads, records) = (8, 250);
        crossbeam::scope(|scope| {
            for thread in 0..threads {
                let logger = &logger;
                scope.spawn(move |_| {
                    for record in 0..records {
                        logger.log(Severity::INFO, "thread", Location::new("t.rs", 1, "t"),
                                   format_args!("thread {} record {}", thread, record));
                    }
                });
            }
        }).unwrap();
        logger.close_file();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), threads * records);
        let mut seen = vec![0; threads];
        for line in lines {
            let fields: Vec<_> = line.split(' ').collect();
            assert_eq!(fields.len(), 6, "torn line {:?}", line);
            assert_eq!(&fields[..2], &["I", "|"]);
            assert_eq!(fields[2], "thread");
            assert_eq!(fields[4], "record");
            let thread: usize = fields[3].parse().unwrap();
            let record: usize = fields[5].parse().unwrap();
            assert_eq!(record, seen[thread]);
            seen[thread] += 1;
        }
        assert!(seen.iter().all(|&count| count == records));
    }
}
