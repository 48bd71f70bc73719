//! Plain-text and CSV exports of a dataset.

use crate::{Dataset, QuestionRecord};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;

const RULE: usize = 50;
const WIDE_RULE: usize = 70;

/// Output layout of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Question texts only.
    Questions,
    /// Answer texts only.
    Answers,
    /// Each question followed by its answer.
    Combined,
    /// One CSV row per record.
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Questions,
        ExportFormat::Answers,
        ExportFormat::Combined,
        ExportFormat::Csv,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Questions => "questions",
            ExportFormat::Answers => "answers",
            ExportFormat::Combined => "combined",
            ExportFormat::Csv => "csv",
        }
    }

    /// File written when no output path is given.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::Questions => "cka_questions_only.txt",
            ExportFormat::Answers => "cka_answers_only.txt",
            ExportFormat::Combined => "cka_questions_answers.txt",
            ExportFormat::Csv => "cka_qa_data.csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown export format `{0}` (expected questions, answers, combined or csv)")]
pub struct UnknownExportFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownExportFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| UnknownExportFormat(s.to_string()))
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Serialize)]
struct CsvRow<'a> {
    question_no: u32,
    question: &'a str,
    answer: &'a str,
    images: String,
    has_images: bool,
}

impl<'a> From<&'a QuestionRecord> for CsvRow<'a> {
    fn from(record: &'a QuestionRecord) -> Self {
        Self {
            question_no: record.question_no,
            question: &record.question,
            answer: &record.answer,
            images: image_summary(record).unwrap_or_default(),
            has_images: record.has_images,
        }
    }
}

/// `"3 (base64)"` for records with images.
fn image_summary(record: &QuestionRecord) -> Option<String> {
    (!record.images.is_empty()).then(|| format!("{} (base64)", record.images.len()))
}

/// Write `dataset` to `out` in the given layout.
pub fn export<W: Write>(dataset: &Dataset, format: ExportFormat, out: W) -> Result<(), ExportError> {
    match format {
        ExportFormat::Questions => write_questions(dataset, out)?,
        ExportFormat::Answers => write_answers(dataset, out)?,
        ExportFormat::Combined => write_combined(dataset, out)?,
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for record in dataset {
                writer.serialize(CsvRow::from(record))?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn write_questions<W: Write>(dataset: &Dataset, mut out: W) -> std::io::Result<()> {
    writeln!(out, "Questions")?;
    writeln!(out, "{}\n", "=".repeat(RULE))?;
    for record in dataset {
        writeln!(out, "Question {}:", record.question_no)?;
        writeln!(out, "{}", record.question)?;
        if let Some(images) = image_summary(record) {
            writeln!(out, "[Images: {}]", images)?;
        }
        writeln!(out, "\n{}\n", "-".repeat(RULE))?;
    }
    out.flush()
}

fn write_answers<W: Write>(dataset: &Dataset, mut out: W) -> std::io::Result<()> {
    writeln!(out, "Answers")?;
    writeln!(out, "{}\n", "=".repeat(RULE))?;
    for record in dataset {
        writeln!(out, "Answer to question {}:", record.question_no)?;
        writeln!(out, "{}", record.answer)?;
        if let Some(images) = image_summary(record) {
            writeln!(out, "[Related images: {}]", images)?;
        }
        writeln!(out, "\n{}\n", "-".repeat(RULE))?;
    }
    out.flush()
}

fn write_combined<W: Write>(dataset: &Dataset, mut out: W) -> std::io::Result<()> {
    writeln!(out, "Questions and answers")?;
    writeln!(out, "{}\n", "=".repeat(WIDE_RULE))?;
    for record in dataset {
        writeln!(out, "Question {}:", record.question_no)?;
        writeln!(out, "{}", record.question)?;
        if let Some(images) = image_summary(record) {
            writeln!(out, "[Images: {}]", images)?;
        }
        writeln!(out, "\nAnswer:\n{}\n", record.answer)?;
        writeln!(out, "{}\n", "=".repeat(WIDE_RULE))?;
    }
    out.flush()
}
