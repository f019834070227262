use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int64,
    Float64,
    Text,
    Unsupported,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int64 => write!(f, "Int64"),
            Self::Float64 => write!(f, "Float64"),
            Self::Text => write!(f, "Text"),
            Self::Unsupported => write!(f, "Unsupported"),
        }
    }
}

// Missing cells are None; a present value is never a sentinel.
#[derive(Debug, Clone)]
enum ColumnData {
    Int64(Vec<Option<i64>>),
    Float64(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
    Unsupported { type_name: String, len: usize },
}

#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    data: ColumnData,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellRef<'a> {
    Missing,
    Int64(i64),
    Float64(f64),
    Text(&'a str),
    Unsupported(&'a str),
}

impl fmt::Display for CellRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "null"),
            Self::Int64(v) => write!(f, "{}", v),
            Self::Float64(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
            Self::Unsupported(type_name) => write!(f, "<{}>", type_name),
        }
    }
}

impl Column {
    pub fn from_i64(name: &str, values: Vec<Option<i64>>) -> Self {
        Column {
            name: name.to_string(),
            data: ColumnData::Int64(values),
        }
    }

    pub fn from_f64(name: &str, values: Vec<Option<f64>>) -> Self {
        Column {
            name: name.to_string(),
            data: ColumnData::Float64(values),
        }
    }

    pub fn from_text(name: &str, values: Vec<Option<String>>) -> Self {
        Column {
            name: name.to_string(),
            data: ColumnData::Text(values),
        }
    }

    pub fn unsupported(name: &str, type_name: &str, len: usize) -> Self {
        Column {
            name: name.to_string(),
            data: ColumnData::Unsupported {
                type_name: type_name.to_string(),
                len,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Int64(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::Unsupported { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn data_type(&self) -> DataType {
        match &self.data {
            ColumnData::Int64(_) => DataType::Int64,
            ColumnData::Float64(_) => DataType::Float64,
            ColumnData::Text(_) => DataType::Text,
            ColumnData::Unsupported { .. } => DataType::Unsupported,
        }
    }

    pub fn unsupported_type(&self) -> Option<&str> {
        match &self.data {
            ColumnData::Unsupported { type_name, .. } => Some(type_name),
            _ => None,
        }
    }

    // An unsupported column is never missing: its cells cannot be
    // inspected, so they must not extend a trailing-missing run.
    pub fn is_missing(&self, row: usize) -> bool {
        assert!(
            row < self.len(),
            "Row {} out of bounds for column of length {}",
            row,
            self.len()
        );

        match &self.data {
            ColumnData::Int64(v) => v[row].is_none(),
            ColumnData::Float64(v) => v[row].is_none(),
            ColumnData::Text(v) => v[row].is_none(),
            ColumnData::Unsupported { .. } => false,
        }
    }

    pub fn cell(&self, row: usize) -> Option<CellRef<'_>> {
        if row >= self.len() {
            return None;
        }

        let cell = match &self.data {
            ColumnData::Int64(v) => match v[row] {
                Some(value) => CellRef::Int64(value),
                None => CellRef::Missing,
            },
            ColumnData::Float64(v) => match v[row] {
                Some(value) => CellRef::Float64(value),
                None => CellRef::Missing,
            },
            ColumnData::Text(v) => match &v[row] {
                Some(value) => CellRef::Text(value),
                None => CellRef::Missing,
            },
            ColumnData::Unsupported { type_name, .. } => CellRef::Unsupported(type_name),
        };

        Some(cell)
    }

    pub fn cells(&self) -> CellIter<'_> {
        CellIter {
            column: self,
            index: 0,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Column: {} [{}; {}]", self.name, self.data_type(), self.len())
    }
}

pub struct CellIter<'a> {
    column: &'a Column,
    index: usize,
}

impl<'a> Iterator for CellIter<'a> {
    type Item = CellRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.column.cell(self.index)?;
        self.index += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.column.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for CellIter<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ DataType Tests ============

    #[test]
    fn test_datatype_display() {
        assert_eq!(format!("{}", DataType::Int64), "Int64");
        assert_eq!(format!("{}", DataType::Float64), "Float64");
        assert_eq!(format!("{}", DataType::Text), "Text");
        assert_eq!(format!("{}", DataType::Unsupported), "Unsupported");
    }

    // ============ Column Construction Tests ============

    #[test]
    fn test_column_from_i64() {
        let col = Column::from_i64("age", vec![Some(25), None, Some(35)]);

        assert_eq!(col.name(), "age");
        assert_eq!(col.len(), 3);
        assert_eq!(col.data_type(), DataType::Int64);
        assert!(!col.is_empty());
        assert_eq!(col.unsupported_type(), None);
    }

    #[test]
    fn test_column_from_f64() {
        let col = Column::from_f64("score", vec![Some(85.5), Some(92.0)]);

        assert_eq!(col.name(), "score");
        assert_eq!(col.len(), 2);
        assert_eq!(col.data_type(), DataType::Float64);
    }

    #[test]
    fn test_column_from_text() {
        let col = Column::from_text("name", vec![Some("Alice".to_string()), None]);

        assert_eq!(col.name(), "name");
        assert_eq!(col.len(), 2);
        assert_eq!(col.data_type(), DataType::Text);
    }

    #[test]
    fn test_column_unsupported() {
        let col = Column::unsupported("enrolled", "date", 4);

        assert_eq!(col.name(), "enrolled");
        assert_eq!(col.len(), 4);
        assert_eq!(col.data_type(), DataType::Unsupported);
        assert_eq!(col.unsupported_type(), Some("date"));
    }

    #[test]
    fn test_column_empty() {
        let col = Column::from_i64("empty", vec![]);

        assert_eq!(col.len(), 0);
        assert!(col.is_empty());
    }

    // ============ Missingness Tests ============

    #[test]
    fn test_is_missing_per_variant() {
        let ints = Column::from_i64("i", vec![Some(1), None]);
        assert!(!ints.is_missing(0));
        assert!(ints.is_missing(1));

        let floats = Column::from_f64("f", vec![None, Some(2.5)]);
        assert!(floats.is_missing(0));
        assert!(!floats.is_missing(1));

        let texts = Column::from_text("t", vec![Some("a".to_string()), None]);
        assert!(!texts.is_missing(0));
        assert!(texts.is_missing(1));
    }

    #[test]
    fn test_unsupported_is_never_missing() {
        let col = Column::unsupported("opaque", "factor", 3);

        for row in 0..3 {
            assert!(!col.is_missing(row));
        }
    }

    #[test]
    fn test_zero_is_not_missing() {
        let ints = Column::from_i64("i", vec![Some(0)]);
        let floats = Column::from_f64("f", vec![Some(0.0)]);
        let texts = Column::from_text("t", vec![Some(String::new())]);

        assert!(!ints.is_missing(0));
        assert!(!floats.is_missing(0));
        assert!(!texts.is_missing(0));
    }

    #[test]
    #[should_panic(expected = "Row 3 out of bounds for column of length 3")]
    fn test_is_missing_out_of_bounds_panics() {
        let col = Column::from_i64("i", vec![Some(1), Some(2), Some(3)]);
        col.is_missing(3);
    }

    // ============ Cell Access Tests ============

    #[test]
    fn test_cell_values_and_missing() {
        let col = Column::from_i64("i", vec![Some(7), None]);

        assert_eq!(col.cell(0), Some(CellRef::Int64(7)));
        assert_eq!(col.cell(1), Some(CellRef::Missing));
        assert_eq!(col.cell(2), None);
    }

    #[test]
    fn test_cell_text_borrows() {
        let col = Column::from_text("t", vec![Some("hello".to_string())]);

        assert_eq!(col.cell(0), Some(CellRef::Text("hello")));
    }

    #[test]
    fn test_cell_unsupported_carries_type_name() {
        let col = Column::unsupported("opaque", "list", 2);

        assert_eq!(col.cell(0), Some(CellRef::Unsupported("list")));
        assert_eq!(col.cell(1), Some(CellRef::Unsupported("list")));
    }

    #[test]
    fn test_cells_iterator() {
        let col = Column::from_f64("f", vec![Some(1.5), None, Some(3.0)]);

        let collected: Vec<CellRef> = col.cells().collect();
        assert_eq!(
            collected,
            vec![CellRef::Float64(1.5), CellRef::Missing, CellRef::Float64(3.0)]
        );
    }

    #[test]
    fn test_cells_iterator_size_hint() {
        let col = Column::from_i64("i", vec![Some(1), Some(2), Some(3)]);

        let mut iter = col.cells();
        assert_eq!(iter.size_hint(), (3, Some(3)));

        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    // ============ Display Tests ============

    #[test]
    fn test_cell_display() {
        assert_eq!(format!("{}", CellRef::Missing), "null");
        assert_eq!(format!("{}", CellRef::Int64(42)), "42");
        assert_eq!(format!("{}", CellRef::Float64(3.5)), "3.5");
        assert_eq!(format!("{}", CellRef::Text("hi")), "hi");
        assert_eq!(format!("{}", CellRef::Unsupported("date")), "<date>");
    }

    #[test]
    fn test_column_display() {
        let col = Column::from_i64("age", vec![Some(1), None]);
        assert_eq!(format!("{}", col), "Column: age [Int64; 2]");
    }
}
