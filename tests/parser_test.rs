use email_tfidf::*;

#[test]
fn test_parse_simple_message() {
    let raw = "From: a@x.com\nTo: b@x.com\nSubject: Hi\nHello there";
    let email = parse_raw_message(raw);

    assert_eq!(email.from.as_deref(), Some("a@x.com"));
    assert_eq!(email.to.as_deref(), Some("b@x.com"));
    assert_eq!(email.subject.as_deref(), Some("Hi"));
    assert_eq!(email.body.as_deref(), Some("Hello there "));
}

#[test]
fn test_subject_line() {
    let email = parse_raw_message("Subject: Hello World");
    assert_eq!(email.subject.as_deref(), Some("Hello World"));
}

#[test]
fn test_headerless_message_is_all_body() {
    let raw = "  Dear team,\nplease find the report attached.\n\nThanks  ";
    let email = parse_raw_message(raw);

    assert!(email.from.is_none());
    assert!(email.to.is_none());
    assert!(email.subject.is_none());
    assert_eq!(
        email.body.as_deref(),
        Some("Dear team, please find the report attached.  Thanks ")
    );
}

#[test]
fn test_empty_input() {
    let email = parse_raw_message("");
    assert!(email.is_empty());
    assert_eq!(email, ParsedEmail::default());
}

#[test]
fn test_header_keys_are_case_insensitive() {
    let email = parse_raw_message("FROM: boss@corp.com\nsUbJeCt:   Quarterly numbers   ");
    assert_eq!(email.from.as_deref(), Some("boss@corp.com"));
    assert_eq!(email.subject.as_deref(), Some("Quarterly numbers"));
    assert!(email.body.is_none());
}

#[test]
fn test_value_keeps_text_after_first_colon() {
    let email = parse_raw_message("Subject: Re: meeting at 10:30");
    assert_eq!(email.subject.as_deref(), Some("Re: meeting at 10:30"));
}

#[test]
fn test_unknown_headers_are_dropped() {
    let raw = "Message-ID: <1@x>\nX-Folder: inbox\nDate: Mon, 14 May 2001 16:39:00\nBody text";
    let email = parse_raw_message(raw);

    assert_eq!(email.len(), 1);
    assert_eq!(email.body.as_deref(), Some("Body text "));
}

#[test]
fn test_colon_in_prose_is_dropped_from_body() {
    let raw = "Let's meet\nat 10:30 tomorrow\nin room 4";
    let email = parse_raw_message(raw);
    assert_eq!(email.body.as_deref(), Some("Let's meet in room 4 "));
}

#[test]
fn test_later_header_overwrites_earlier() {
    let raw = "To: first@x.com\nbody\nTo: second@x.com";
    let email = parse_raw_message(raw);
    assert_eq!(email.to.as_deref(), Some("second@x.com"));
    assert_eq!(email.body.as_deref(), Some("body "));
}

#[test]
fn test_empty_header_value() {
    let email = parse_raw_message("Subject:\nhello");
    assert_eq!(email.subject.as_deref(), Some(""));
}

#[test]
fn test_trailing_newline_adds_blank_body_line() {
    let email = parse_raw_message("From: a@x.com\n");
    assert_eq!(email.from.as_deref(), Some("a@x.com"));
    assert_eq!(email.body.as_deref(), Some(" "));
}

#[test]
fn test_get_or_default() {
    let email = parse_raw_message("Subject: Hi");
    assert_eq!(email.get_or_default(EmailField::Subject), "Hi");
    assert_eq!(email.get_or_default(EmailField::From), "");
    assert_eq!(email.get(EmailField::Body), None);
}

#[test]
fn test_parse_batch_lengths() {
    let messages = [
        "From: a@x.com\nTo: b@x.com\nSubject: Hi\nHello there",
        "",
        "just a body",
        "Subject: only subject",
    ];
    let batch = parse_into_emails(messages);

    assert_eq!(batch.len(), 4);
    for field in EmailField::ALL {
        assert_eq!(batch.column(field).len(), 4);
    }
}

#[test]
fn test_parse_batch_fills_missing_with_empty() {
    let batch = parse_into_emails(vec![
        String::from("From: a@x.com\nHello"),
        String::from("Subject: Second"),
    ]);

    assert_eq!(batch.from_, vec!["a@x.com", ""]);
    assert_eq!(batch.to, vec!["", ""]);
    assert_eq!(batch.subject, vec!["", "Second"]);
    assert_eq!(batch.body, vec!["Hello ", ""]);
}

#[test]
fn test_parse_batch_preserves_order() {
    let messages: Vec<String> = (0..10).map(|i| format!("Subject: msg {i}")).collect();
    let batch = parse_into_emails(&messages);

    let expected: Vec<String> = (0..10).map(|i| format!("msg {i}")).collect();
    assert_eq!(batch.subject, expected);
}

#[test]
fn test_parse_empty_batch() {
    let batch = parse_into_emails(Vec::<&str>::new());
    assert!(batch.is_empty());
    assert_eq!(batch, EmailBatch::default());
}

#[test]
fn test_batch_rows() {
    let batch = parse_into_emails(["From: a@x.com\nHi", "To: b@x.com"]);
    let rows: Vec<EmailRow<'_>> = batch.rows().collect();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].from, "a@x.com");
    assert_eq!(rows[0].body, "Hi ");
    assert_eq!(rows[1].to, "b@x.com");
    assert_eq!(rows[1].from, "");
}
