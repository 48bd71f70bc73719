use crate::QuestionRecord;
use serde_json::Value;
use std::collections::HashSet;
use std::ops::Index;
use thiserror::Error;

/// Reasons a dataset is rejected.
///
/// These all describe the *content* of a dataset; transport failures
/// (network, file system) are reported by the loader instead.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("dataset is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    #[error("dataset must be a JSON array of question records")]
    NotAnArray,
    #[error("dataset contains no questions")]
    Empty,
    #[error("record #{index} is malformed: {source}")]
    MalformedRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("question {0} appears more than once")]
    DuplicateQuestionNo(u32),
    #[error("question {0} is flagged as having images but carries none")]
    MissingImages(u32),
}

/// Parse raw JSON text into question records.
///
/// Only checks the shape: a non-empty array whose elements deserialize
/// as [`QuestionRecord`]. Use [`Dataset::new`] for the remaining checks.
pub fn parse_records(text: &str) -> Result<Vec<QuestionRecord>, DatasetError> {
    let value: Value = serde_json::from_str(text).map_err(DatasetError::Syntax)?;
    records_from_value(value)
}

/// Same as [`parse_records`], from an already parsed JSON value.
pub fn records_from_value(value: Value) -> Result<Vec<QuestionRecord>, DatasetError> {
    let Value::Array(items) = value else {
        return Err(DatasetError::NotAnArray);
    };
    if items.is_empty() {
        return Err(DatasetError::Empty);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|source| DatasetError::MalformedRecord { index, source })
        })
        .collect()
}

/// A validated, immutable set of records sorted by `question_no`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<QuestionRecord>,
}

impl Dataset {
    /// Validate and sort the given records.
    pub fn new(mut records: Vec<QuestionRecord>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.question_no) {
                return Err(DatasetError::DuplicateQuestionNo(record.question_no));
            }
            if record.has_images && record.images.is_empty() {
                return Err(DatasetError::MissingImages(record.question_no));
            }
        }

        records.sort_by_key(|record| record.question_no);
        Ok(Self { records })
    }

    /// Parse and validate a JSON dataset in one go.
    pub fn from_json(text: &str) -> Result<Self, DatasetError> {
        Self::new(parse_records(text)?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a constructed dataset; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionRecord> {
        self.records.iter()
    }
}

impl Index<usize> for Dataset {
    type Output = QuestionRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a QuestionRecord;
    type IntoIter = std::slice::Iter<'a, QuestionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_by_question_no() {
        let dataset = Dataset::new(vec![
            QuestionRecord::new(3, "c", "C"),
            QuestionRecord::new(1, "a", "A"),
            QuestionRecord::new(2, "b", "B"),
        ])
        .unwrap();

        let order: Vec<u32> = dataset.iter().map(|r| r.question_no).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(matches!(
            parse_records(r#"{"question_no": 1}"#),
            Err(DatasetError::NotAnArray)
        ));
        assert!(matches!(parse_records("42"), Err(DatasetError::NotAnArray)));
    }

    #[test]
    fn test_rejects_empty_array() {
        assert!(matches!(parse_records("[]"), Err(DatasetError::Empty)));
        assert!(matches!(Dataset::new(vec![]), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(matches!(parse_records("[{"), Err(DatasetError::Syntax(_))));
    }

    #[test]
    fn test_reports_malformed_record_index() {
        let json = r#"[
            {"question_no": 1, "question": "a", "answer": "A"},
            {"question_no": 2, "question": "b"}
        ]"#;
        match parse_records(json) {
            Err(DatasetError::MalformedRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected malformed record, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_duplicates_and_missing_images() {
        let duplicate = Dataset::new(vec![
            QuestionRecord::new(1, "a", "A"),
            QuestionRecord::new(1, "b", "B"),
        ]);
        assert!(matches!(duplicate, Err(DatasetError::DuplicateQuestionNo(1))));

        let mut flagged = QuestionRecord::new(5, "a", "A");
        flagged.has_images = true;
        assert!(matches!(
            Dataset::new(vec![flagged]),
            Err(DatasetError::MissingImages(5))
        ));
    }
}
