//! Core types for parsed emails and ranked features

use crate::error::{RankError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

/// Field recognized by the heuristic parser
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EmailField {
    From,
    To,
    Subject,
    Body,
}

impl EmailField {
    /// All fields, in batch column order
    pub const ALL: [Self; 4] = [Self::Subject, Self::Body, Self::To, Self::From];

    /// Map a lower-cased header key to a header field.
    ///
    /// `body` is never a header key, so it maps to `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "from" => Some(Self::From),
            "to" => Some(Self::To),
            "subject" => Some(Self::Subject),
            _ => None,
        }
    }

    /// Key used inside a single parsed message
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
            Self::Subject => "subject",
            Self::Body => "body",
        }
    }

    /// Column name used in an [`EmailBatch`]
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::From => "from_",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for EmailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields extracted from one raw message. Any of them may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedEmail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Body lines, each stripped and followed by one space
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ParsedEmail {
    #[must_use]
    pub fn get(&self, field: EmailField) -> Option<&str> {
        match field {
            EmailField::From => self.from.as_deref(),
            EmailField::To => self.to.as_deref(),
            EmailField::Subject => self.subject.as_deref(),
            EmailField::Body => self.body.as_deref(),
        }
    }

    /// Field value, or `""` when the message lacks it
    #[must_use]
    pub fn get_or_default(&self, field: EmailField) -> &str {
        self.get(field).unwrap_or_default()
    }

    pub fn set(&mut self, field: EmailField, value: String) {
        let slot = match field {
            EmailField::From => &mut self.from,
            EmailField::To => &mut self.to,
            EmailField::Subject => &mut self.subject,
            EmailField::Body => &mut self.body,
        };
        *slot = Some(value);
    }

    /// Number of populated fields
    #[must_use]
    pub fn len(&self) -> usize {
        EmailField::ALL
            .iter()
            .filter(|f| self.get(**f).is_some())
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Column-oriented view of many parsed messages.
///
/// Every column has one entry per input message, in input order, with `""`
/// standing in for a missing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailBatch {
    pub subject: Vec<String>,
    pub body: Vec<String>,
    pub to: Vec<String>,
    pub from_: Vec<String>,
}

impl EmailBatch {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            subject: Vec::with_capacity(capacity),
            body: Vec::with_capacity(capacity),
            to: Vec::with_capacity(capacity),
            from_: Vec::with_capacity(capacity),
        }
    }

    /// Append one message as a new row
    pub fn push(&mut self, email: &ParsedEmail) {
        for field in EmailField::ALL {
            let value = email.get_or_default(field).to_string();
            self.column_mut(field).push(value);
        }
    }

    #[must_use]
    pub fn column(&self, field: EmailField) -> &[String] {
        match field {
            EmailField::From => &self.from_,
            EmailField::To => &self.to,
            EmailField::Subject => &self.subject,
            EmailField::Body => &self.body,
        }
    }

    const fn column_mut(&mut self, field: EmailField) -> &mut Vec<String> {
        match field {
            EmailField::From => &mut self.from_,
            EmailField::To => &mut self.to,
            EmailField::Subject => &mut self.subject,
            EmailField::Body => &mut self.body,
        }
    }

    /// Number of messages in the batch
    #[must_use]
    pub const fn len(&self) -> usize {
        self.subject.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.subject.is_empty()
    }

    /// Iterate the batch one message at a time
    pub fn rows(&self) -> impl Iterator<Item = EmailRow<'_>> {
        (0..self.len()).map(move |i| EmailRow {
            from: &self.from_[i],
            to: &self.to[i],
            subject: &self.subject[i],
            body: &self.body[i],
        })
    }

    /// Serialize as a JSON object of columns
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "subject": self.subject,
            "body": self.body,
            "to": self.to,
            "from_": self.from_,
        })
    }
}

/// One message of an [`EmailBatch`]
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EmailRow<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub body: &'a str,
}

/// Ordered, duplicate-free list of terms. Position `i` names matrix column `i`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Vocabulary(Vec<String>);

impl Vocabulary {
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        {
            let mut seen = HashSet::with_capacity(terms.len());
            if let Some(dup) = terms.iter().find(|t| !seen.insert(t.as_str())) {
                return Err(RankError::DuplicateTerm(dup.clone()));
            }
        }
        Ok(Self(terms))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Column index of a term
    #[must_use]
    pub fn position(&self, term: &str) -> Option<usize> {
        self.0.iter().position(|t| t == term)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub const fn as_slice(&self) -> &[String] {
        self.0.as_slice()
    }
}

impl Index<usize> for Vocabulary {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

/// A term with its weight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedFeature {
    #[serde(rename = "features")]
    pub feature: String,
    pub score: f64,
}

impl RankedFeature {
    #[must_use]
    pub fn new(feature: impl Into<String>, score: f64) -> Self {
        Self {
            feature: feature.into(),
            score,
        }
    }
}

impl fmt::Display for RankedFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{:.6}", self.feature, self.score)
    }
}

/// Top-N terms, highest score first
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FeatureRanking(pub Vec<RankedFeature>);

impl FeatureRanking {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedFeature> {
        self.0.iter()
    }

    #[must_use]
    pub fn features(&self) -> Vec<&str> {
        self.0.iter().map(|f| f.feature.as_str()).collect()
    }

    #[must_use]
    pub fn scores(&self) -> Vec<f64> {
        self.0.iter().map(|f| f.score).collect()
    }

    /// Serialize as a list of `{features, score}` records
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.0
                .iter()
                .map(|f| serde_json::json!({ "features": f.feature, "score": f.score }))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a FeatureRanking {
    type Item = &'a RankedFeature;
    type IntoIter = std::slice::Iter<'a, RankedFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FeatureRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feature in &self.0 {
            writeln!(f, "{feature}")?;
        }
        Ok(())
    }
}
