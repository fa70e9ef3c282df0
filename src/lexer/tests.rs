#[cfg(test)]
use super::*;

#[test]
fn test_classify_lines() {
    let lines = vec![
        ("", LineToken::Skip),
        ("; a comment", LineToken::Skip),
        ("[section]", LineToken::Header("section")),
        ("[section:sub]", LineToken::Header("section:sub")),
        (
            "key = value",
            LineToken::Entry {
                key: Key::Plain("key"),
                value: "value",
            },
        ),
        (
            "key=value",
            LineToken::Entry {
                key: Key::Plain("key"),
                value: "value",
            },
        ),
        (
            "item[] = 1",
            LineToken::Entry {
                key: Key::Append("item"),
                value: "1",
            },
        ),
        (
            "item[k1] = one",
            LineToken::Entry {
                key: Key::Assoc {
                    name: "item",
                    id: "k1",
                },
                value: "one",
            },
        ),
    ];

    for (line, expected) in lines {
        assert_eq!(classify(line), expected, "line: {:?}", line);
    }
}

#[test]
fn test_header_must_start_with_letter() {
    assert_eq!(section_header("[a]"), Some("a"));
    assert_eq!(section_header("[section-two]"), Some("section-two"));
    assert_eq!(section_header("[1section]"), None);
    assert_eq!(section_header("[]"), None);
    assert_eq!(section_header("[a]b]"), None);
}

#[test]
fn test_split_entry_on_first_equals() {
    assert_eq!(split_entry("url = a=b"), ("url", "a=b"));
    assert_eq!(split_entry("flag"), ("flag", ""));
    assert_eq!(split_entry("key =  padded"), ("key", " padded"));
    assert_eq!(split_entry("key="), ("key", ""));
}

#[test]
fn test_parse_key_forms() {
    assert_eq!(parse_key("plain"), Key::Plain("plain"));
    assert_eq!(parse_key("section.key"), Key::Plain("section.key"));
    assert_eq!(parse_key("list[]"), Key::Append("list"));
    assert_eq!(
        parse_key("map[some id]"),
        Key::Assoc {
            name: "map",
            id: "some id"
        }
    );
    // Name must be a word starting with a letter.
    assert_eq!(parse_key("1bad[]"), Key::Plain("1bad[]"));
    assert_eq!(parse_key("bad-name[x]"), Key::Plain("bad-name[x]"));
}

#[test]
fn test_quoted_tokens() {
    assert!(is_quoted("'quoted text'"));
    assert!(is_quoted("\"quoted text\""));
    assert!(is_quoted(r#"'quoted\'text'"#));
    assert!(is_quoted(r#""quoted\"text""#));
    assert!(is_quoted("''"));
    assert!(is_quoted("'say \"hi\"'"));

    assert!(!is_quoted("'"));
    assert!(!is_quoted("'mismatched\""));
    assert!(!is_quoted("'one'two'"));
    assert!(!is_quoted(r#"'escaped close\'"#));
    assert!(!is_quoted("plain"));
}

#[test]
fn test_unquote_handles_escapes() {
    assert_eq!(unquote(r#"'quoted\'text'"#), "quoted'text");
    assert_eq!(unquote(r#""quoted\"text""#), "quoted\"text");
    assert_eq!(unquote(r#"'back\\slash'"#), r"back\\slash");
    assert_eq!(unquote("''"), "");
}

#[test]
fn test_opens_quote() {
    assert_eq!(opens_quote("\"quoted"), Some('"'));
    assert_eq!(opens_quote("'"), Some('\''));
    assert_eq!(opens_quote("\"mixed'"), Some('"'));
    assert_eq!(opens_quote("'closed'"), None);
    assert_eq!(opens_quote("'one'two'"), None);
    assert_eq!(opens_quote("plain"), None);
}

#[test]
fn test_closes_quote_accepts_either_quote() {
    assert!(closes_quote("text\""));
    assert!(closes_quote("text'"));
    assert!(closes_quote("'"));
    assert!(!closes_quote("text"));
    assert!(!closes_quote(""));
}

#[test]
fn test_numeric_literals() {
    for ok in ["123", "-7", "+3", "1.5", ".5", "5.", "1e5", "2.5E-3", " 42 "] {
        assert!(is_numeric(ok), "{:?} should be numeric", ok);
    }
    for bad in ["", "abc", "1.2.3", "0x1F", "1e", "12abc", "."] {
        assert!(!is_numeric(bad), "{:?} should not be numeric", bad);
    }
}
