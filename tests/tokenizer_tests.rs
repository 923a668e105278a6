// Scanner tests over whole-input properties

use lextree::lexer::{tokenize, TokenKind};

/// Every token's text must equal the source slice at its offset, offsets
/// must be strictly increasing, and the gaps the scanner swallowed must be
/// pure whitespace.  Together that means the emitted tokens plus the gaps
/// partition the input exactly.
fn assert_covers_source(source: &str) {
    let tokens = tokenize(source).expect("scan failed");

    let mut cursor = 0;
    for token in &tokens {
        assert!(
            token.offset >= cursor,
            "token {} overlaps the previous one",
            token
        );
        let gap = &source[cursor..token.offset];
        assert!(
            gap.chars().all(char::is_whitespace),
            "non-whitespace gap {:?} before {}",
            gap,
            token
        );
        assert_eq!(
            &source[token.offset..token.end()],
            token.text,
            "token text does not match its source slice"
        );
        cursor = token.end();
    }
    let tail = &source[cursor..];
    assert!(
        tail.chars().all(char::is_whitespace),
        "unscanned tail {:?}",
        tail
    );
}

#[test]
fn test_tokens_partition_the_input() {
    let sources = [
        "",
        "   ",
        "if (x) { return x; }",
        "while (count > 0) {\n    count = count - 1;\n}",
        r#"message = "hello world";"#,
        "a@b#c",
        "3.14 + x_1 - _tmp",
        "if(x){return x;}else{return y;}",
        "1if 2while",
        "((((",
    ];

    for source in sources {
        assert_covers_source(source);
    }
}

#[test]
fn test_sample_demo_scans_cleanly() {
    let source = include_str!("../demos/sample.src");
    assert_covers_source(source);

    let tokens = tokenize(source).unwrap();
    assert!(!tokens.is_empty());
    // The demo exercises every kind except whitespace (never emitted).
    for kind in [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Literal,
        TokenKind::Operator,
        TokenKind::Delimiter,
        TokenKind::StringText,
    ] {
        assert!(
            tokens.iter().any(|t| t.kind == kind),
            "demo source has no {} token",
            kind
        );
    }
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Whitespace));
}

#[test]
fn test_kind_labels_are_stable() {
    let pairs = [
        (TokenKind::Keyword, "keyword"),
        (TokenKind::Identifier, "identifier"),
        (TokenKind::Literal, "literal"),
        (TokenKind::Operator, "operator"),
        (TokenKind::Delimiter, "delimiter"),
        (TokenKind::StringText, "string"),
        (TokenKind::Whitespace, "whitespace"),
        (TokenKind::Unknown, "unknown"),
    ];
    for (kind, label) in pairs {
        assert_eq!(kind.to_string(), label);
    }
}

#[test]
fn test_token_display_format() {
    let tokens = tokenize("if (x)").unwrap();
    assert_eq!(tokens[0].to_string(), "keyword 'if' at 0");
    assert_eq!(tokens[1].to_string(), "delimiter '(' at 3");
    assert_eq!(tokens[2].to_string(), "identifier 'x' at 4");
}

#[test]
fn test_multiline_offsets_count_newlines() {
    let source = "x\ny\nz";
    let tokens = tokenize(source).unwrap();
    let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
    assert_eq!(offsets, vec![0, 2, 4]);
}
