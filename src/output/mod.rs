//! Streaming combination lines to a writer.
//!
//! This is the imperative shell around the enumerator: each combination
//! becomes one line of space-separated tokens terminated by `\n`.

pub mod error;

pub use error::OutputError;

use crate::enumerate::{Combinations, Enumerator};
use serde::{Deserialize, Serialize};
use std::io::{self, BufWriter, Write};
use tracing::{debug, info, warn};

/// Capacity of the buffer placed in front of the writer.
pub const OUTPUT_BUFFER_CAPACITY: usize = 64 * 1024;

/// Lines between progress events.
const PROGRESS_INTERVAL: u64 = 250_000;

/// What a completed write produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitSummary {
    pub lines: u64,
    pub bytes: u64,
}

/// Write a full run of `enumerator` to `writer`.
///
/// # Example
///
/// ```rust
/// use tm_combos::enumerate::Enumerator;
/// use tm_combos::output::write_enumeration;
///
/// let enumerator = Enumerator::builder().length(1).build().unwrap();
/// let mut out = Vec::new();
/// let summary = write_enumeration(&enumerator, &mut out).unwrap();
///
/// assert_eq!(summary.lines, 20);
/// assert!(String::from_utf8(out).unwrap().starts_with("0LA\n0RA\n1LA\n"));
/// ```
pub fn write_enumeration<W: Write>(
    enumerator: &Enumerator,
    writer: W,
) -> Result<EmitSummary, OutputError> {
    write_lines(&mut enumerator.iter(), writer)
}

/// Write every remaining combination of `combinations` to `writer`, one
/// per line, and flush.
///
/// Stops at the first I/O error; nothing is retried. On error the cursor is
/// moved back to the first line the writer did not fully accept, so
/// [`Combinations::checkpoint`] resumes without gaps. A partly written line
/// is written again in full on resume.
pub fn write_lines<W: Write>(
    combinations: &mut Combinations<'_>,
    writer: W,
) -> Result<EmitSummary, OutputError> {
    let enumerator = combinations.enumerator();
    let labels = enumerator.alphabet().labels();
    let start = combinations.emitted();
    let mut writer = BufWriter::with_capacity(OUTPUT_BUFFER_CAPACITY, LineCounter::new(writer));
    let mut summary = EmitSummary::default();

    info!(
        alphabet_size = labels.len(),
        length = enumerator.length(),
        remaining = combinations.remaining(),
        "streaming combinations"
    );

    while let Some(indices) = combinations.next_indices() {
        let line = summary.lines + 1;
        let written = match write_line(&mut writer, &labels, indices) {
            Ok(written) => written,
            Err(source) => {
                let delivered = rewind(combinations, writer, start);
                return Err(OutputError::Write {
                    line,
                    delivered,
                    source,
                });
            }
        };
        summary.lines = line;
        summary.bytes += written;

        if summary.lines % PROGRESS_INTERVAL == 0 {
            debug!(
                lines = summary.lines,
                emitted = combinations.emitted(),
                "progress"
            );
        }
    }

    if let Err(source) = writer.flush() {
        let delivered = rewind(combinations, writer, start);
        return Err(OutputError::Flush { delivered, source });
    }
    info!(lines = summary.lines, bytes = summary.bytes, "finished streaming");
    Ok(summary)
}

/// Counts the line terminators the inner writer actually accepted.
struct LineCounter<W> {
    inner: W,
    lines: u64,
}

impl<W> LineCounter<W> {
    fn new(inner: W) -> Self {
        Self { inner, lines: 0 }
    }
}

impl<W: Write> Write for LineCounter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let accepted = self.inner.write(buf)?;
        self.lines += buf[..accepted].iter().filter(|&&byte| byte == b'\n').count() as u64;
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Drop whatever is still buffered and point `combinations` at the first
/// undelivered line. Returns the lines delivered by this call.
fn rewind<W: Write>(
    combinations: &mut Combinations<'_>,
    writer: BufWriter<LineCounter<W>>,
    start: u64,
) -> u64 {
    // `into_parts` skips the flush-on-drop that would write more lines.
    let (counter, _unwritten) = writer.into_parts();
    let position = start + counter.lines;
    if let Err(error) = combinations.seek(position) {
        warn!(%error, position, "could not rewind to last delivered line");
    }
    debug!(
        delivered = counter.lines,
        position,
        "output failed, cursor rewound to last delivered line"
    );
    counter.lines
}

fn write_line<W: Write>(writer: &mut W, labels: &[String], indices: &[usize]) -> io::Result<u64> {
    let mut written = 0;
    for (position, &index) in indices.iter().enumerate() {
        if position > 0 {
            writer.write_all(b" ")?;
            written += 1;
        }
        let label = labels[index].as_bytes();
        writer.write_all(label)?;
        written += label.len() as u64;
    }
    writer.write_all(b"\n")?;
    Ok(written + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoint::Checkpoint;
    use crate::core::{Alphabet, Token};

    /// Accepts `limit` bytes, then fails every write with `kind`.
    struct FailingWriter {
        limit: usize,
        out: Vec<u8>,
        kind: io::ErrorKind,
    }

    impl FailingWriter {
        fn new(limit: usize, kind: io::ErrorKind) -> Self {
            Self {
                limit,
                out: Vec::new(),
                kind,
            }
        }

        /// Bytes received up to and including the last newline.
        fn complete_lines(&self) -> &[u8] {
            let end = self
                .out
                .iter()
                .rposition(|&byte| byte == b'\n')
                .map_or(0, |last| last + 1);
            &self.out[..end]
        }
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.out.len() >= self.limit {
                return Err(io::Error::new(self.kind, "reader closed"));
            }
            let accepted = buf.len().min(self.limit - self.out.len());
            self.out.extend_from_slice(&buf[..accepted]);
            Ok(accepted)
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.out.len() >= self.limit {
                return Err(io::Error::new(self.kind, "reader closed"));
            }
            Ok(())
        }
    }

    fn small() -> Enumerator {
        let tokens: Vec<Token> = ["0LA", "1RH"].iter().map(|s| s.parse().unwrap()).collect();
        Enumerator::builder()
            .alphabet(Alphabet::new(tokens).unwrap())
            .length(3)
            .build()
            .unwrap()
    }

    #[test]
    fn writes_one_line_per_combination() {
        let mut out = Vec::new();
        let summary = write_enumeration(&small(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "0LA 0LA 0LA\n0LA 0LA 1RH\n0LA 1RH 1RH\n1RH 1RH 1RH\n"
        );
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.bytes, text.len() as u64);
    }

    #[test]
    fn write_lines_continues_a_partial_run() {
        let enumerator = small();
        let mut combinations = enumerator.iter();
        combinations.next();
        combinations.next();

        let mut out = Vec::new();
        let summary = write_lines(&mut combinations, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0LA 1RH 1RH\n1RH 1RH 1RH\n");
        assert_eq!(summary.lines, 2);
        assert_eq!(combinations.emitted(), 4);
    }

    #[test]
    fn broken_pipe_is_reported() {
        let writer = FailingWriter::new(100, io::ErrorKind::BrokenPipe);

        let error = write_enumeration(&Enumerator::standard(), writer).unwrap_err();

        assert!(error.is_broken_pipe());
        assert_eq!(error.delivered(), 3);
    }

    #[test]
    fn other_io_errors_are_not_broken_pipe() {
        let writer = FailingWriter::new(0, io::ErrorKind::PermissionDenied);

        let error = write_enumeration(&small(), writer).unwrap_err();

        assert!(!error.is_broken_pipe());
        assert_eq!(error.io_error().kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(error.delivered(), 0);
    }

    #[test]
    fn failed_write_rewinds_to_last_delivered_line() {
        // 16-byte lines, so the writer stops 3 bytes into line 6251.
        let enumerator = Enumerator::builder().length(4).build().unwrap();
        let mut expected = Vec::new();
        write_enumeration(&enumerator, &mut expected).unwrap();

        let mut writer = FailingWriter::new(100_003, io::ErrorKind::BrokenPipe);
        let mut combinations = enumerator.iter();
        let error = write_lines(&mut combinations, &mut writer).unwrap_err();

        assert!(matches!(error, OutputError::Write { .. }));
        assert_eq!(error.delivered(), 6_250);
        assert_eq!(combinations.emitted(), 6_250);

        let json = combinations.checkpoint().to_json().unwrap();
        let checkpoint = Checkpoint::from_json(&json).unwrap();
        let mut received = writer.complete_lines().to_vec();
        write_lines(&mut enumerator.resume(&checkpoint).unwrap(), &mut received).unwrap();

        assert_eq!(received, expected);
    }

    #[test]
    fn failed_flush_rewinds_to_last_delivered_line() {
        let enumerator = small();
        let mut expected = Vec::new();
        write_enumeration(&enumerator, &mut expected).unwrap();

        // Everything fits in the buffer, so the failure surfaces at flush.
        let mut writer = FailingWriter::new(30, io::ErrorKind::BrokenPipe);
        let mut combinations = enumerator.iter();
        let error = write_lines(&mut combinations, &mut writer).unwrap_err();

        assert!(matches!(error, OutputError::Flush { delivered: 2, .. }));
        assert_eq!(combinations.emitted(), 2);

        let mut received = writer.complete_lines().to_vec();
        write_lines(&mut combinations, &mut received).unwrap();

        assert_eq!(received, expected);
    }

    #[test]
    fn failure_after_resume_counts_from_the_resume_point() {
        let enumerator = small();
        let mut combinations = enumerator.iter();
        combinations.next();

        let mut writer = FailingWriter::new(13, io::ErrorKind::BrokenPipe);
        let error = write_lines(&mut combinations, &mut writer).unwrap_err();

        assert_eq!(error.delivered(), 1);
        assert_eq!(combinations.emitted(), 2);
        assert_eq!(writer.complete_lines(), b"0LA 0LA 1RH\n");
    }
}
