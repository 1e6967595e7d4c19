use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder written into required cells that arrive empty, so a ragged
/// sheet still loads row-for-row.
pub const MISSING_FIELD: &str = "[MISSING]";

pub(crate) const FAQ_FILE_NAME: &str = "faq.csv";

/// One row of the FAQ sheet after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    pub question: String,
    pub answer: String,
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Error)]
pub enum FaqLoadError {
    #[error("failed to read FAQ sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid FAQ CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("FAQ data is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Reads the FAQ sheet from disk. See [`read_faq`] for the column contract.
pub fn load_faq<P: AsRef<Path>>(path: P) -> Result<Vec<FaqRecord>, FaqLoadError> {
    let file = File::open(path)?;
    read_faq(file)
}

/// Parses FAQ rows from CSV. Columns `question`, `answer`, and `category`
/// are required; `keywords` is optional (comma-separated); anything else is
/// ignored. Empty required cells become [`MISSING_FIELD`].
pub fn read_faq<R: Read>(reader: R) -> Result<Vec<FaqRecord>, FaqLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let question_at = required_column(&headers, "question")?;
    let answer_at = required_column(&headers, "answer")?;
    let category_at = required_column(&headers, "category")?;
    let keywords_at = headers.iter().position(|name| name == "keywords");

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        records.push(FaqRecord {
            question: required_cell(&row, question_at),
            answer: required_cell(&row, answer_at),
            category: required_cell(&row, category_at),
            keywords: keywords_at
                .map(|at| split_keywords(row.get(at).unwrap_or_default()))
                .unwrap_or_default(),
        });
    }

    Ok(records)
}

fn required_column(headers: &StringRecord, name: &'static str) -> Result<usize, FaqLoadError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(FaqLoadError::MissingColumn(name))
}

fn required_cell(row: &StringRecord, at: usize) -> String {
    match row.get(at) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => MISSING_FIELD.to_string(),
    }
}

fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

/// The built-in sheet used whenever the configured FAQ source cannot be
/// loaded.
pub fn builtin_faq() -> Vec<FaqRecord> {
    vec![
        FaqRecord {
            question: "What are the admission requirements?".to_string(),
            answer: "Minimum GPA of 2.5 in both SSC and HSC with a total GPA of 6.0.".to_string(),
            category: "General".to_string(),
            keywords: Vec::new(),
        },
        FaqRecord {
            question: "How do I apply for admission?".to_string(),
            answer: "Apply online through our portal or visit our admission office.".to_string(),
            category: "General".to_string(),
            keywords: Vec::new(),
        },
        FaqRecord {
            question: "What programs does DIU offer?".to_string(),
            answer: "DIU offers programs in Engineering, Business, Humanities, and more."
                .to_string(),
            category: "General".to_string(),
            keywords: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_rows_with_optional_keywords() {
        let csv = "question,answer,category,keywords\n\
                   Is there an entrance test?,Yes for some programs.,Admission,\"entrance test, exam\"\n\
                   When is the deadline?,July for Fall.,Admission,\n";

        let records = read_faq(Cursor::new(csv)).expect("sheet should parse");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].question, "Is there an entrance test?");
        assert_eq!(records[0].keywords, vec!["entrance test", "exam"]);
        assert!(records[1].keywords.is_empty());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "SL,question,answer,category,Source link\n\
                   1,How do I apply?,Apply online.,General,https://example.edu\n";

        let records = read_faq(Cursor::new(csv)).expect("sheet should parse");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].answer, "Apply online.");
        assert!(records[0].keywords.is_empty());
    }

    #[test]
    fn empty_required_cells_become_placeholder() {
        let csv = "question,answer,category\n\
                   ,Answer only.,\n";

        let records = read_faq(Cursor::new(csv)).expect("sheet should parse");

        assert_eq!(records[0].question, MISSING_FIELD);
        assert_eq!(records[0].answer, "Answer only.");
        assert_eq!(records[0].category, MISSING_FIELD);
    }

    #[test]
    fn short_rows_are_padded_with_placeholder() {
        let csv = "question,answer,category\n\
                   Only a question\n";

        let records = read_faq(Cursor::new(csv)).expect("sheet should parse");

        assert_eq!(records[0].question, "Only a question");
        assert_eq!(records[0].answer, MISSING_FIELD);
        assert_eq!(records[0].category, MISSING_FIELD);
    }

    #[test]
    fn missing_required_column_is_reported() {
        let csv = "question,category\nSomething?,General\n";

        let err = read_faq(Cursor::new(csv)).expect_err("expected missing column");
        match err {
            FaqLoadError::MissingColumn(column) => assert_eq!(column, "answer"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn keywords_are_lowercased_and_trimmed() {
        let csv = "question,answer,category,keywords\n\
                   Q,A,C,\" BBA , Admission Test ,,\"\n";

        let records = read_faq(Cursor::new(csv)).expect("sheet should parse");

        assert_eq!(records[0].keywords, vec!["bba", "admission test"]);
    }

    #[test]
    fn load_surfaces_io_errors() {
        let err = load_faq("./does-not-exist/faq.csv").expect_err("expected io error");
        assert!(matches!(err, FaqLoadError::Io(_)));
    }

    #[test]
    fn builtin_sheet_has_three_general_rows() {
        let records = builtin_faq();

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|record| record.category == "General"));
    }
}
