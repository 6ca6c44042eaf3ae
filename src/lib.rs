// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Text Mining
//!
//! Splits raw email text into header fields and body with a lightweight
//! line heuristic, and ranks vocabulary terms by TF-IDF weight taken from a
//! sparse document-term matrix.
//!
//! # Features
//!
//! - Heuristic `from` / `to` / `subject` / `body` extraction, no MIME grammar
//! - Column-oriented batches ready for tabular consumers
//! - Top-N terms for one document or averaged over a group of documents
//! - Annotation category code parsing
//!
//! # Example
//!
//! ```rust
//! use email_tfidf::{
//!     MeanFeatureOptions, Vocabulary, WeightedMatrix, parse_raw_message, top_mean_features,
//! };
//!
//! let email = parse_raw_message("From: a@x.com\nSubject: Hi\nHello there");
//! assert_eq!(email.subject.as_deref(), Some("Hi"));
//! assert_eq!(email.body.as_deref(), Some("Hello there "));
//!
//! let vocab = Vocabulary::new(["a", "b"]).unwrap();
//! let matrix = WeightedMatrix::from_dense_rows(2, &[[0.05, 0.3], [0.2, 0.4]]).unwrap();
//! let ranking = top_mean_features(&matrix, &vocab, None, MeanFeatureOptions::default()).unwrap();
//! assert_eq!(ranking.features(), vec!["b", "a"]);
//! ```

mod category;
mod error;
mod matrix;
mod parser;
mod ranker;
mod types;

pub use category::*;
pub use error::{RankError, Result};
pub use matrix::WeightedMatrix;
pub use parser::{parse_into_emails, parse_raw_message};
pub use ranker::*;
pub use types::*;
