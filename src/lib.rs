pub mod datatypes;
pub mod ops;

pub use datatypes::{CellIter, CellRef, Column, DataType, ShapeError, Table};
pub use ops::{find_dropouts, find_dropouts_with, DropoutReport, ScanStrategy};
