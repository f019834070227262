use crate::datatypes::column::Column;
use std::fmt;
use thiserror::Error;

// Column order defines what "trailing" means for the dropout scan, so
// columns stay in insertion order. Duplicate names are allowed; lookups
// by position drive correctness, name lookup returns the first match.
// The row count is stored explicitly so a zero-column table with a
// positive row count stays representable.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    height: usize,
}

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("Column lengths mismatch: expected {expected}, found {found} for column '{column}'")]
    LengthMismatch {
        expected: usize,
        found: usize,
        column: String,
    },
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Result<Self, ShapeError> {
        let height = columns.first().map_or(0, |c| c.len());

        if let Some(col) = columns.iter().find(|c| c.len() != height) {
            return Err(ShapeError::LengthMismatch {
                expected: height,
                found: col.len(),
                column: col.name().to_string(),
            });
        }

        Ok(Table { columns, height })
    }

    pub fn new_unchecked(columns: Vec<Column>, height: usize) -> Self {
        Table { columns, height }
    }

    pub fn empty() -> Self {
        Table {
            columns: Vec::new(),
            height: 0,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.columns.len())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.height == 0
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        self.columns.as_slice()
    }

    pub fn validate_shape(&self) -> Result<(), ShapeError> {
        if let Some(col) = self.columns.iter().find(|c| c.len() != self.height) {
            return Err(ShapeError::LengthMismatch {
                expected: self.height,
                found: col.len(),
                column: col.name().to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty Table");
        }

        for col in &self.columns {
            write!(f, "[{}]", col.name())?;
            for cell in col.cells().take(10) {
                write!(f, "[{}]", cell)?;
            }
            writeln!(f)?;
        }

        if self.height > 10 {
            write!(f, "...")?;
        }

        Ok(())
    }
}
