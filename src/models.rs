use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How a question is presented on its funnel page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    Text,
    Testimonial,
    ProductPage,
}

impl QuestionType {
    pub const ALL: [QuestionType; 4] = [
        QuestionType::MultipleChoice,
        QuestionType::Text,
        QuestionType::Testimonial,
        QuestionType::ProductPage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::Text => "text",
            QuestionType::Testimonial => "testimonial",
            QuestionType::ProductPage => "product_page",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownQuestionType(pub String);

impl fmt::Display for UnknownQuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown question type: {:?}", self.0)
    }
}

impl std::error::Error for UnknownQuestionType {}

impl FromStr for QuestionType {
    type Err = UnknownQuestionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownQuestionType(s.to_string()))
    }
}

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub value: String,
    pub label: String,
}

impl Answer {
    pub fn from_label(label: &str) -> Self {
        Self {
            value: label.to_lowercase().replace(' ', "_"),
            label: label.to_string(),
        }
    }
}

/// Parse the comma-separated answer labels typed into the question editor.
///
/// Only surrounding whitespace is trimmed and only spaces become underscores
/// in the derived value; punctuation is kept as typed.
pub fn parse_answer_labels(raw: &str) -> Vec<Answer> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(Answer::from_label)
        .collect()
}

/// Slugs end up in URLs, so keep them to lowercase ASCII, digits, `-` and `_`.
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

/// Turn an optional form field into `None` when it is blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Deserialize an HTML checkbox. Browsers send `on` when checked and omit the
/// field otherwise, so pair this with `#[serde(default)]`.
pub fn deserialize_checkbox<'de, D: serde::Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = bool;
        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("checkbox value")
        }
        fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<bool, E> {
            match v {
                "on" | "true" | "1" | "yes" => Ok(true),
                "off" | "false" | "0" | "no" | "" => Ok(false),
                other => Err(E::custom(format!("invalid checkbox value: {other:?}"))),
            }
        }
    }
    d.deserialize_any(Vis)
}
