//! Parsed network-status table.

/// One tokenized line of network-status tool output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Split a line on runs of whitespace.
    ///
    /// A blank line yields an empty record rather than no record.
    pub fn from_line(line: &str) -> Self {
        Self {
            fields: line.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Get the field at a zero-based column, if the line has that many.
    pub fn field(&self, column: usize) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ordered protocol records from a single tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line_collapses_whitespace() {
        let record = Record::from_line("  tcp   LISTEN 0\t128   0.0.0.0:22  ");
        assert_eq!(record.fields(), ["tcp", "LISTEN", "0", "128", "0.0.0.0:22"]);
        assert_eq!(record.field(4), Some("0.0.0.0:22"));
        assert_eq!(record.field(5), None);
    }

    #[test]
    fn test_blank_line_is_empty_record() {
        let record = Record::from_line("   ");
        assert!(record.is_empty());
        assert_eq!(record.field(0), None);
    }
}
