use serde::{Deserialize, Deserializer};

pub const CORRECT_FLAG: &'static str = "0";
pub const PENALTY_FLAG: &'static str = "1";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OptionFlag {
    Correct,
    Penalty,
    Neutral,
}

impl Default for OptionFlag {
    fn default() -> Self {
        OptionFlag::Neutral
    }
}

impl From<&str> for OptionFlag {
    fn from(value: &str) -> Self {
        match value {
            CORRECT_FLAG => OptionFlag::Correct,
            PENALTY_FLAG => OptionFlag::Penalty,
            _ => OptionFlag::Neutral,
        }
    }
}

// Anything that is not exactly one of the two markers counts as a plain wrong answer
fn flag_from_string<'de, D>(deserializer: D) -> Result<OptionFlag, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(OptionFlag::from(value.as_str()))
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct RawOption {
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "flag_from_string")]
    pub flag: OptionFlag,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuizOption {
    pub text: String,
    pub flag: OptionFlag,
    pub is_correct: bool,
    pub revealed: bool,
}

impl QuizOption {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn is_penalty(&self) -> bool {
        self.flag == OptionFlag::Penalty
    }

    pub fn is_selectable(&self) -> bool {
        !self.revealed && !self.is_blank()
    }
}

impl From<RawOption> for QuizOption {
    fn from(raw_option: RawOption) -> Self {
        QuizOption {
            text: raw_option.text,
            is_correct: raw_option.flag == OptionFlag::Correct,
            flag: raw_option.flag,
            revealed: false,
        }
    }
}
