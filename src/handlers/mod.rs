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

use std::io::Write;

use record::Record;

/// Type of the platform log handler.
///
/// Receives every record while `TO_PLATFORM_LOG` is set
/// and forwards it into a host log sink (syslog, logcat, etc.).
pub type Handler = Box<dyn Fn(&Record) + Send + Sync>;

/// Type of the console writers.
pub type Writer = Box<dyn Write + Send>;

/// Stdout destination.
pub mod stdout;
/// Stderr destination.
pub mod stderr;
/// File destination.
pub mod file;

/// Writes the whole message and optionally flushes the writer.
///
/// Write errors are dropped, a log call never fails.
#[inline]
pub fn emit<W: Write + ?Sized>(writer: &mut W, msg: &[u8], flush: bool) {
    let _ = writer.write_all(msg);
    if flush {
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken"))
        }
    }

    #[test]
    fn test_emit() {
        let mut out = Vec::new();
        super::emit(&mut out, b"foo", false);
        super::emit(&mut out, b"bar", true);
        assert_eq!(out, b"foobar");

        super::emit(&mut Broken, b"foo", true);
    }
}
