// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated document reading and paragraph splitting.
//!
//! A document is one input file (or stdin). Each non-blank line of a
//! document is one paragraph.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Size at which to log about large inputs (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Default maximum input size (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Label used for documents read from stdin.
pub const STDIN_LABEL: &str = "<stdin>";

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Interpret a command-line path; `-` means stdin.
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(path.to_path_buf())
        }
    }

    /// Interpret the command-line paths; no paths means stdin.
    ///
    /// Stdin can only be read once, so `-` may appear at most once.
    pub fn from_args(paths: &[PathBuf]) -> Result<Vec<Self>> {
        if paths.is_empty() {
            return Ok(vec![Input::Stdin]);
        }
        let inputs: Vec<Self> = paths.iter().map(|p| Self::from_arg(p)).collect();
        if inputs.iter().filter(|i| **i == Input::Stdin).count() > 1 {
            return Err(Error::Argument(
                "stdin (`-`) may only be given once".to_string(),
            ));
        }
        Ok(inputs)
    }

    pub fn label(&self) -> String {
        match self {
            Input::Stdin => STDIN_LABEL.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }
}

/// A decoded input document.
#[derive(Debug, Clone)]
pub struct Document {
    /// Display label (path or `<stdin>`).
    pub label: String,
    pub text: String,
}

/// One non-blank line of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// 1-based line number.
    pub line: usize,
    pub text: &'a str,
}

impl Document {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    pub fn paragraphs(&self) -> Vec<Paragraph<'_>> {
        split_paragraphs(&self.text)
    }
}

/// Split text into paragraphs, one per non-blank line.
///
/// A trailing `\r` is stripped from each line.
pub fn split_paragraphs(text: &str) -> Vec<Paragraph<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| Paragraph {
            line: i + 1,
            text: line.strip_suffix('\r').unwrap_or(line),
        })
        .filter(|p| !p.text.trim().is_empty())
        .collect()
}

/// Drop the longest prefix of `curr` that `prev` already ends with.
///
/// Used when consecutive paragraphs repeat a passage across the break.
pub fn trim_overlap<'a>(prev: &str, curr: &'a str) -> &'a str {
    let max_len = prev.len().min(curr.len());
    curr.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= max_len)
        .filter(|&end| prev.ends_with(&curr[..end]))
        .last()
        .map_or(curr, |end| &curr[end..])
}

/// Size-gated document reader.
pub struct DocumentReader {
    max_size: u64,
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl DocumentReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    pub fn read(&self, input: &Input) -> Result<Document> {
        match input {
            Input::Stdin => self.read_from(STDIN_LABEL, std::io::stdin().lock()),
            Input::File(path) => self.read_file(path),
        }
    }

    /// Read a file, checking size limits before reading.
    pub fn read_file(&self, path: &Path) -> Result<Document> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }
        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .map_err(io_err)?;

        let label = path.display().to_string();
        Ok(Document {
            text: decode(&label, bytes),
            label,
        })
    }

    /// Read a stream of unknown length, stopping one byte past the limit.
    pub fn read_from<R: Read>(&self, label: &str, reader: R) -> Result<Document> {
        let mut bytes = Vec::new();
        reader
            .take(self.max_size.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|source| Error::Io {
                path: PathBuf::from(label),
                source,
            })?;

        let size = bytes.len() as u64;
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: PathBuf::from(label),
                size,
                max_size: self.max_size,
            });
        }

        Ok(Document {
            text: decode(label, bytes),
            label: label.to_string(),
        })
    }
}

fn decode(label: &str, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(input = label, "input is not valid UTF-8; decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
