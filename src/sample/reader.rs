//! Reads a [`Dataset`] back from the semicolon-separated table
//! written by [`Dataset::to_csv`].
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::constants::CSV_SEPARATOR;
use super::{Dataset, Example, ReadError};


impl Dataset {
    /// Read a dataset from the CSV file at `path`.
    ///
    /// The first row names the columns. The last column holds the
    /// labels and the others the attribute values.
    /// Blank lines are skipped.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, ReadError> {
        let file = File::open(path)?;
        Self::read_csv(BufReader::new(file))
    }


    /// Read a dataset in CSV format from `reader`.
    /// See [`Dataset::from_csv`] for the layout.
    pub fn read_csv<R: BufRead>(reader: R) -> Result<Self, ReadError> {
        let mut lines = reader.lines().enumerate();

        let header = match lines.next() {
            Some((_, line)) => line?,
            None => { return Err(ReadError::NoHeader); },
        };
        let mut columns = split_row(header.trim_start_matches('\u{feff}'));
        if columns.len() < 2 {
            return Err(ReadError::NoTarget);
        }
        // The target column name is not kept.
        columns.pop();
        let expected = columns.len() + 1;

        let mut examples = Vec::new();
        for (i, line) in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let mut fields = split_row(&line);
            if fields.len() != expected {
                return Err(ReadError::ColumnMismatch {
                    line: i + 1,
                    expected,
                    got: fields.len(),
                });
            }
            let label = fields.pop().unwrap_or_default();
            examples.push(Example::new(fields, label));
        }

        Ok(Self::new(columns, examples)?)
    }
}


fn split_row(line: &str) -> Vec<String> {
    line.trim_end_matches('\r')
        .split(CSV_SEPARATOR)
        .map(|field| field.trim().to_string())
        .collect()
}


#[cfg(test)]
mod tests {
    use crate::{Dataset, DatasetError, ReadError};
    use crate::sample::supplier::supplier_dataset;

    #[test]
    fn reads_back_what_was_written() {
        let sample = supplier_dataset();
        let mut buf = Vec::new();
        sample.write_csv(&mut buf).unwrap();

        let read = Dataset::read_csv(&buf[..]).unwrap();
        assert_eq!(read, sample);
    }


    #[test]
    fn rejects_malformed_tables() {
        let text = "Price;Decision\nlow;Yes\n\nhigh\n";
        let err = Dataset::read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ReadError::ColumnMismatch { line: 4, expected: 2, got: 1 }
        ));

        let err = Dataset::read_csv("".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadError::NoHeader));

        let err = Dataset::read_csv("Decision\nYes\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadError::NoTarget));

        let text = "Price;Price;Decision\nlow;low;Yes\n";
        let err = Dataset::read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ReadError::Dataset(DatasetError::DuplicateAttribute(_))
        ));
    }
}
