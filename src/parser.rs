//! Heuristic header/body splitter for raw email text
//!
//! This is not an RFC 5322 parser. Every line holding a colon is read as a
//! `key: value` header and every other line is body text, so a colon inside
//! prose (`"meet at 10:30"`) turns that line into an unknown header and drops
//! it from the body.

use crate::types::{EmailBatch, EmailField, ParsedEmail};
use tracing::{debug, trace};

/// Parse one raw message into its `from`, `to`, `subject` and `body` fields.
///
/// Never fails. Fields the message does not carry are left as `None`; `body`
/// is set as soon as one colon-free line is seen.
#[must_use]
pub fn parse_raw_message(raw: &str) -> ParsedEmail {
    if raw.is_empty() {
        return ParsedEmail::default();
    }

    let state = raw.split('\n').fold(LineState::default(), LineState::feed);
    let email = state.finish();

    debug!(
        fields = email.len(),
        has_body = email.body.is_some(),
        "Parsed raw message"
    );

    email
}

/// Parse many raw messages into equally sized columns.
///
/// Column `j` of every field belongs to message `j`; missing fields become `""`.
#[must_use]
pub fn parse_into_emails<I, S>(messages: I) -> EmailBatch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let messages = messages.into_iter();
    let mut batch = EmailBatch::with_capacity(messages.size_hint().0);

    for message in messages {
        batch.push(&parse_raw_message(message.as_ref()));
    }

    debug!(messages = batch.len(), "Parsed email batch");
    batch
}

/// Accumulator threaded through the lines of one message
#[derive(Debug, Default)]
struct LineState {
    email: ParsedEmail,
    body: Option<String>,
}

impl LineState {
    fn feed(mut self, line: &str) -> Self {
        match line.split_once(':') {
            None => {
                let body = self.body.get_or_insert_with(String::new);
                body.push_str(line.trim());
                body.push(' ');
            }
            Some((key, value)) => {
                let key = key.to_lowercase();
                match EmailField::from_key(&key) {
                    Some(field) => self.email.set(field, value.trim().to_string()),
                    None => trace!(key = %key, "Skipping unrecognized header"),
                }
            }
        }
        self
    }

    fn finish(self) -> ParsedEmail {
        let mut email = self.email;
        email.body = self.body;
        email
    }
}
