use crate::datatypes::column::{Column, DataType};
use crate::datatypes::table::{ShapeError, Table};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStrategy {
    // Re-test every candidate suffix with an inner forward scan.
    Nested,
    // Locate the rightmost present cell per row in one backward pass.
    Rightmost,
}

// One output row per input row. Field names are the report's column
// names, also used as-is when the report is serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropoutReport {
    dropout_col: Vec<Option<String>>,
    dropout: Vec<bool>,
    dropout_index: Vec<Option<i64>>,
}

impl DropoutReport {
    pub fn len(&self) -> usize {
        self.dropout.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dropout.is_empty()
    }

    pub fn dropout_col(&self) -> &[Option<String>] {
        &self.dropout_col
    }

    pub fn dropout(&self) -> &[bool] {
        &self.dropout
    }

    pub fn dropout_index(&self) -> &[Option<i64>] {
        &self.dropout_index
    }
}

impl fmt::Display for DropoutReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty DropoutReport");
        }

        write!(f, "[dropout_col]")?;
        for name in self.dropout_col.iter().take(10) {
            match name {
                Some(name) => write!(f, "[{}]", name)?,
                None => write!(f, "[null]")?,
            }
        }
        writeln!(f)?;

        write!(f, "[dropout]")?;
        for flag in self.dropout.iter().take(10) {
            write!(f, "[{}]", flag)?;
        }
        writeln!(f)?;

        write!(f, "[dropout_index]")?;
        for index in self.dropout_index.iter().take(10) {
            match index {
                Some(index) => write!(f, "[{}]", index)?,
                None => write!(f, "[null]")?,
            }
        }
        writeln!(f)?;

        if self.len() > 10 {
            write!(f, "...")?;
        }

        Ok(())
    }
}

pub fn find_dropouts(table: &Table) -> Result<DropoutReport, ShapeError> {
    find_dropouts_with(table, ScanStrategy::Rightmost)
}

pub fn find_dropouts_with(
    table: &Table,
    strategy: ScanStrategy,
) -> Result<DropoutReport, ShapeError> {
    table.validate_shape()?;

    debug!(
        "Scanning {} rows x {} columns for dropouts",
        table.height(),
        table.width()
    );
    warn_unsupported(table);

    let positions = match strategy {
        ScanStrategy::Nested => positions_nested(table),
        ScanStrategy::Rightmost => positions_rightmost(table),
    };

    Ok(build_report(table, positions))
}

fn warn_unsupported(table: &Table) {
    for (index, column) in table.columns().iter().enumerate() {
        if column.data_type() == DataType::Unsupported {
            warn!(
                "Column '{}' at position {} has unsupported type '{}'; its cells count as present",
                column.name(),
                index + 1,
                column.unsupported_type().unwrap_or("unknown")
            );
        }
    }
}

fn all_missing_from(columns: &[Column], row: usize, start: usize) -> bool {
    for column in &columns[start..] {
        if !column.is_missing(row) {
            return false;
        }
    }

    true
}

fn positions_nested(table: &Table) -> Vec<Option<usize>> {
    let columns = table.columns();
    let width = columns.len();
    let mut positions = Vec::with_capacity(table.height());

    for row in 0..table.height() {
        let mut found = None;

        for start in 0..width {
            if all_missing_from(columns, row, start) {
                found = Some(start);
                break;
            }
        }

        positions.push(found);
    }

    positions
}

fn positions_rightmost(table: &Table) -> Vec<Option<usize>> {
    let columns = table.columns();
    let width = columns.len();
    let mut positions = Vec::with_capacity(table.height());

    for row in 0..table.height() {
        let mut rightmost = None;

        for col in (0..width).rev() {
            if !columns[col].is_missing(row) {
                rightmost = Some(col);
                break;
            }
        }

        let position = match rightmost {
            // A present cell before the end: the run starts right after it.
            Some(last) if last + 1 < width => Some(last + 1),
            // Last column present: no trailing run anywhere in this row.
            Some(_) => None,
            // Whole row missing: the run starts at the first column.
            None if width > 0 => Some(0),
            None => None,
        };

        positions.push(position);
    }

    positions
}

fn build_report(table: &Table, positions: Vec<Option<usize>>) -> DropoutReport {
    debug_assert_eq!(positions.len(), table.height());

    let columns = table.columns();
    let mut dropout_col = Vec::with_capacity(positions.len());
    let mut dropout = Vec::with_capacity(positions.len());
    let mut dropout_index = Vec::with_capacity(positions.len());

    for position in positions {
        match position {
            Some(col) => {
                debug_assert!(col < columns.len());
                dropout_col.push(Some(columns[col].name().to_string()));
                dropout.push(true);
                dropout_index.push(Some(col as i64 + 1));
            }
            None => {
                dropout_col.push(None);
                dropout.push(false);
                dropout_index.push(None);
            }
        }
    }

    DropoutReport {
        dropout_col,
        dropout,
        dropout_index,
    }
}
