//! Module model

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A single lesson unit
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Module {
    /// Identifier used in routes (e.g., "exception-handling")
    pub id: String,

    /// Display title
    pub title: String,

    /// One-line topic summary
    #[serde(default)]
    pub topic: String,

    /// Lesson body: text with fenced code samples and `mermaid` diagram descriptions
    #[serde(default)]
    pub content: String,

    /// Code examples shown after the body
    #[serde(default)]
    pub code_examples: Vec<CodeExample>,

    /// Key points to remember
    #[serde(default)]
    pub key_points: Vec<String>,

    /// Interview questions with answers
    #[serde(default)]
    pub interview_questions: Vec<InterviewQuestion>,
}

impl Module {
    /// Create a module with an empty body
    ///
    /// # Arguments
    /// * `id` - Route identifier
    /// * `title` - Display title
    /// * `topic` - Topic summary
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            topic: topic.into(),
            content: String::new(),
            code_examples: Vec::new(),
            key_points: Vec::new(),
            interview_questions: Vec::new(),
        }
    }

    /// Interview questions of the given difficulty, in their original order
    pub fn questions_of(&self, difficulty: Difficulty) -> impl Iterator<Item = &InterviewQuestion> {
        self.interview_questions
            .iter()
            .filter(move |q| q.difficulty == difficulty)
    }
}

/// A titled code sample
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeExample {
    /// Example title
    pub title: String,
    /// Source-language tag (e.g., "java", "kotlin")
    pub language: String,
    /// Source code
    pub code: String,
}

/// Interview question difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Difficulty {
    /// Warm-up question
    #[serde(alias = "easy")]
    Easy,
    /// Typical screening question
    #[serde(alias = "medium")]
    Medium,
    /// Senior-level question
    #[serde(alias = "hard")]
    Hard,
    /// Deep internals question
    #[serde(alias = "hell")]
    Hell,
}

impl Difficulty {
    /// All difficulties from easiest to hardest
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Hell];

    /// Lowercase name used for CSS classes
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Hell => "hell",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "hell" => Ok(Self::Hell),
            _ => Err(format!("Unknown difficulty: {s}")),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
            Self::Hell => write!(f, "Hell"),
        }
    }
}

/// Interview question with its reference answer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterviewQuestion {
    /// How hard the question is
    pub difficulty: Difficulty,
    /// Question text
    pub question: String,
    /// Reference answer
    pub answer: String,
}
