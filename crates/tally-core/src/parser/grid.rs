//! Raw tabular input as a rectangular grid of strings.

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{Result, TallyError};

/// A CSV file loaded without any header interpretation.
///
/// Rows shorter than the widest row are padded with empty cells, so every
/// `(row, column)` inside the grid is addressable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl Grid {
    /// Builds a grid from rows of cells, blank-filling short rows.
    pub fn new(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { rows, width }
    }

    /// Reads a CSV file from disk.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::FileSystem` if the file cannot be opened and
    /// `TallyError::Csv` if it cannot be tokenized.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| TallyError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let grid = Self::read(file, &path.display().to_string())?;
        debug!(
            "Read {}x{} grid from {}",
            grid.height(),
            grid.width(),
            path.display()
        );
        Ok(grid)
    }

    /// Reads CSV data from any reader.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Csv` if the data cannot be tokenized.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::read(reader, "<input>")
    }

    fn read<R: Read>(reader: R, origin: &str) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.byte_records() {
            let record = record.map_err(|e| TallyError::csv(origin).with_source(e))?;
            rows.push(
                record
                    .iter()
                    .map(|cell| String::from_utf8_lossy(cell).into_owned())
                    .collect(),
            );
        }
        Ok(Self::new(rows))
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Cell contents, or an empty string outside the grid.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<S: Into<String>> FromIterator<Vec<S>> for Grid {
    fn from_iter<I: IntoIterator<Item = Vec<S>>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}
