// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use handlers;

/// Exclusively owned log file.
///
/// The file is truncated on open and closed on drop.
///
/// Writes are not buffered, every record reaches the file before the log call returns.
pub struct Context {
    path: PathBuf,
    file: File,
}

impl Context {
    /// Opens `path` for truncating write.
    ///
    /// Missing parent directories are not created.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
        Ok(Context {
            path: path.into(),
            file: file,
        })
    }

    /// Path the file was opened with.
    #[inline(always)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the formatted record.
    pub fn emit(&mut self, msg: &[u8], flush: bool) {
        handlers::emit(&mut self.file, msg, flush);
    }

    /// Flushes the file.
    pub fn flush(&mut self) {
        let _ = self.file.flush();
    }
}
