use anyhow::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod option;

pub use option::{OptionFlag, QuizOption, RawOption};


/// One question followed by its answer options, as read from a headerless CSV file.
///
/// The first row holds the question in its first column. Every following row
/// is an option: its text, then a flag column (`0` correct, `1` penalty).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizDefinition {
    question: String,
    options: Vec<QuizOption>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition> {
        let file = File::open(source)?;
        QuizDefinition::from_reader(file)
    }

    pub fn from_reader<R: Read>(source: R) -> Result<QuizDefinition> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source);
        let mut records = csv_reader.records();

        let question_record = records.next().context("Quiz file is empty")??;
        let question = question_record.get(0).unwrap_or_default().to_owned();

        let mut options = Vec::new();
        for record in records {
            let record = record?;
            let raw_option: RawOption = record
                .deserialize(None)
                .with_context(|| format!("Invalid option row {:?}", record))?;
            options.push(raw_option.into());
        }

        Ok(QuizDefinition { question, options })
    }

    #[cfg(test)]
    pub fn get_question(&self) -> &str {
        &self.question
    }

    #[cfg(test)]
    pub fn get_options(&self) -> &Vec<QuizOption> {
        &self.options
    }

    pub fn into_parts(self) -> (String, Vec<QuizOption>) {
        (self.question, self.options)
    }
}
