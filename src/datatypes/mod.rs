pub mod column;
pub mod table;

pub use column::{CellIter, CellRef, Column, DataType};
pub use table::{ShapeError, Table};
