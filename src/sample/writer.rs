//! Writes a [`Dataset`] as a semicolon-separated table.
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::constants::{CSV_SEPARATOR, TARGET_HEADER};
use super::Dataset;


impl Dataset {
    /// Write this dataset to the CSV file at `path`.
    /// The missing parent directories are created.
    ///
    /// The header row lists the attribute names followed by
    /// `Decision`, and each example occupies one row.
    /// Columns are separated by `;`.
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        self.write_csv(&mut writer)?;
        writer.flush()
    }


    /// Write this dataset in CSV format to `writer`.
    /// See [`Dataset::to_csv`] for the layout.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let sep = CSV_SEPARATOR.to_string();

        let header = self.attribute_names().join(&sep);
        writeln!(writer, "{header}{CSV_SEPARATOR}{TARGET_HEADER}")?;

        for example in self.examples() {
            let row = example.values().join(&sep);
            writeln!(writer, "{row}{CSV_SEPARATOR}{}", example.label())?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use crate::{Dataset, Example};

    #[test]
    fn header_and_rows() {
        let dataset = Dataset::new(
            ["Price", "Quality"],
            vec![
                Example::new(["low", "high"], "Yes"),
                Example::new(["high", "low"], "No"),
            ],
        ).unwrap();

        let mut buf = Vec::new();
        dataset.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text,
            "Price;Quality;Decision\nlow;high;Yes\nhigh;low;No\n"
        );
    }
}
