/*!
 * Plain-text output writer for ProjDump
 *
 * The output is a sequence of records, one per dumped file:
 * a `// File: <relative-path>` header line, the file's content verbatim,
 * then a blank separator line.
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Buffered writer for the dump output file
pub struct TextWriter {
    inner: BufWriter<File>,
}

impl TextWriter {
    /// Create the output file, truncating any existing one
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            inner: BufWriter::new(file),
        })
    }

    /// Append one file record: header, verbatim content, blank separator line
    pub fn write_record(&mut self, rel_path: &Path, content: &str) -> io::Result<()> {
        writeln!(self.inner, "// File: {}", rel_path.display())?;
        self.inner.write_all(content.as_bytes())?;
        self.inner.write_all(b"\n\n")?;
        Ok(())
    }

    /// Flush the output before the writer goes out of scope
    ///
    /// Dropping a BufWriter flushes too, but swallows errors; the success
    /// path calls this to surface them.
    pub fn finish(mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
