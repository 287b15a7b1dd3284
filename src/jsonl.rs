//! Newline-delimited JSON input.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{ConvertError, Result};

/// A JSONL file that can be walked from the top any number of times.
#[derive(Debug, Clone)]
pub struct JsonlSource {
    path: PathBuf,
}

impl JsonlSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh pass over the file.
    pub fn records<T: DeserializeOwned>(&self) -> Result<Records<BufReader<File>, T>> {
        let file = File::open(&self.path).map_err(|source| ConvertError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(Records::new(BufReader::new(file), &self.path))
    }

    /// Read every record, stopping at the first malformed line.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        self.records()?.collect()
    }
}

/// Records of one pass, in file order.
///
/// Lines that are blank after trimming are skipped. A line that is not a
/// valid record yields [`ConvertError::JsonLine`] with its 1-based number.
pub struct Records<R, T> {
    lines: Lines<R>,
    line_no: usize,
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<R: BufRead, T> Records<R, T> {
    /// `path` only labels read errors; any reader works.
    pub fn new(reader: R, path: &Path) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            path: path.to_path_buf(),
            _record: PhantomData,
        }
    }
}

impl<R: BufRead, T: DeserializeOwned> Iterator for Records<R, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(source) => {
                    return Some(Err(ConvertError::Read {
                        path: self.path.clone(),
                        source,
                    }))
                }
            };
            self.line_no += 1;

            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            return Some(serde_json::from_str(line).map_err(|source| ConvertError::JsonLine {
                line: self.line_no,
                content: line.to_owned(),
                source,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::{json, Value};
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Vec<Value>> {
        Records::new(Cursor::new(text), Path::new("<memory>")).collect()
    }

    #[test]
    fn blank_lines_are_skipped() {
        let rows = parse("{\"a\": 1}\n\n   \n\t{\"a\": 2}  \n{\"a\": 3}").unwrap();
        assert_eq!(rows, vec![json!({"a": 1}), json!({"a": 2}), json!({"a": 3})]);
    }

    #[test]
    fn malformed_line_reports_number_and_content() {
        let err = parse("{\"a\": 1}\n\n{\"a\": \n{\"a\": 3}\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        match err {
            ConvertError::JsonLine { line, content, .. } => {
                assert_eq!(line, 3);
                assert_eq!(content, "{\"a\":");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n\n").unwrap().is_empty());
    }
}
