use super::*;
use cj_diagnostic::{Diagnostic, Severity};
use pretty_assertions::assert_eq;

// ─── Helpers ────────────────────────────────────────────────────────────

fn lex(source: &str) -> (Vec<Token>, DiagnosticEngine) {
    let mut cursor = Cursor::new(source);
    let tokens = cursor.tokenize();
    (tokens, cursor.diagnostics().clone())
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).0.into_iter().map(|t| t.kind).collect()
}

/// Kinds with trivia and the trailing `Eof` removed.
fn significant(source: &str) -> Vec<TokenKind> {
    kinds(source)
        .into_iter()
        .filter(|k| !k.is_trivia() && *k != TokenKind::Eof)
        .collect()
}

/// Lex a source expected to hold exactly one token (plus `Eof`).
fn single(source: &str) -> (Token, Vec<Diagnostic>) {
    let (tokens, diagnostics) = lex(source);
    assert_eq!(tokens.len(), 2, "expected one token in {source:?}: {tokens:?}");
    (tokens[0].clone(), diagnostics.diagnostics())
}

// ─── Dispatch ───────────────────────────────────────────────────────────

#[test]
fn empty_input_is_just_eof() {
    let (tokens, diagnostics) = lex("");
    assert_eq!(tokens, vec![Token::eof(0)]);
    assert!(diagnostics.is_empty());
}

#[test]
fn eof_repeats() {
    let mut cursor = Cursor::new("a");
    assert_eq!(cursor.advance_token().kind, TokenKind::Ident);
    assert_eq!(cursor.advance_token(), Token::eof(1));
    assert_eq!(cursor.advance_token(), Token::eof(1));
    assert!(cursor.is_eof());
}

#[test]
fn declaration_with_trailing_comment() {
    let source = "let width1: Int32 = 32 // The newline character is treated as a terminator.";
    let (tokens, diagnostics) = lex(source);
    let summary: Vec<(TokenKind, Option<&str>)> =
        tokens.iter().map(|t| (t.kind, t.text())).collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Ident, Some("let")),
            (TokenKind::Whitespace, None),
            (TokenKind::Ident, Some("width1")),
            (TokenKind::Colon, None),
            (TokenKind::Whitespace, None),
            (TokenKind::Ident, Some("Int32")),
            (TokenKind::Whitespace, None),
            (TokenKind::Assign, None),
            (TokenKind::Whitespace, None),
            (TokenKind::DecimalLiteral, Some("32")),
            (TokenKind::Whitespace, None),
            (TokenKind::LineComment, None),
            (TokenKind::Eof, None),
        ]
    );
    assert_eq!(tokens[11].source_slice(source), Some(&source[23..]));
    assert!(diagnostics.is_empty());
}

#[test]
fn whitespace_stops_before_line_breaks() {
    let (tokens, _) = lex(" \t\r\n\n\r x");
    let spans: Vec<(TokenKind, Span)> = tokens.iter().map(|t| (t.kind, t.span)).collect();
    assert_eq!(
        spans,
        vec![
            (TokenKind::Whitespace, Span::new(0, 2)),
            (TokenKind::Newline, Span::new(2, 4)),
            (TokenKind::Newline, Span::new(4, 5)),
            // A lone carriage return is ordinary whitespace.
            (TokenKind::Whitespace, Span::new(5, 7)),
            (TokenKind::Ident, Span::new(7, 8)),
            (TokenKind::Eof, Span::new(8, 8)),
        ]
    );
}

#[test]
fn unicode_whitespace() {
    assert_eq!(
        kinds("a\u{2028}\u{200E}b"),
        vec![
            TokenKind::Ident,
            TokenKind::Whitespace,
            TokenKind::Ident,
            TokenKind::Eof
        ]
    );
}

// ─── Identifiers ────────────────────────────────────────────────────────

#[test]
fn unicode_identifier() {
    let (token, diagnostics) = single("仓颉");
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.text(), Some("仓颉"));
    assert_eq!(token.span, Span::new(0, 6));
    assert_eq!(token.text().map(|t| t.chars().count()), Some(2));
    assert!(diagnostics.is_empty());
}

#[test]
fn underscore_and_keywords_are_plain_identifiers() {
    assert_eq!(significant("_ _x let func"), vec![TokenKind::Ident; 4]);
}

#[test]
fn raw_identifier_keeps_backticks() {
    let (token, diagnostics) = single("`a`");
    assert_eq!(token.kind, TokenKind::RawIdent);
    assert_eq!(token.text(), Some("`a`"));
    assert_eq!(token.span, Span::new(0, 3));
    assert!(diagnostics.is_empty());
}

#[test]
fn raw_identifier_without_closing_backtick() {
    let (tokens, diagnostics) = lex("`abc d");
    assert_eq!(tokens[0].kind, TokenKind::RawIdent);
    assert_eq!(tokens[0].text(), Some("`abc"));
    let diagnostics = diagnostics.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "raw identifier is missing its closing '`'");
    assert_eq!(diagnostics[0].location.column, 1);
}

struct AsciiOnly;

impl IdentClassifier for AsciiOnly {
    fn is_id_start(&self, c: char) -> bool {
        c.is_ascii_lowercase() || c == 'λ' || c == '$'
    }

    fn is_id_continue(&self, c: char) -> bool {
        c.is_ascii_lowercase() || c == 'λ'
    }
}

#[test]
fn custom_classifier() {
    let mut cursor = Cursor::new("λab $ 仓").with_classifier(AsciiOnly);
    let first = cursor.advance_token();
    assert_eq!(first.kind, TokenKind::Ident);
    assert_eq!(first.text(), Some("λab"));
    assert_eq!(cursor.advance_token().kind, TokenKind::Whitespace);

    // Punctuation wins over the classifier.
    assert_eq!(cursor.advance_token().kind, TokenKind::Dollar);
    assert_eq!(cursor.advance_token().kind, TokenKind::Whitespace);

    let rejected = cursor.advance_token();
    assert_eq!(rejected.kind, TokenKind::Error);
    assert_eq!(rejected.span, Span::new(7, 10));
    assert_eq!(cursor.diagnostics().error_count(), 1);
}

// ─── Numbers ────────────────────────────────────────────────────────────

#[test]
fn numeric_literals() {
    let cases: &[(&str, TokenKind, usize)] = &[
        ("32", TokenKind::DecimalLiteral, 0),
        ("1_000", TokenKind::DecimalLiteral, 0),
        ("32.0", TokenKind::FloatLiteral, 0),
        (".05", TokenKind::FloatLiteral, 0),
        ("1E-5", TokenKind::FloatLiteral, 0),
        ("7634.08889e-05f64", TokenKind::FloatLiteral, 0),
        ("0x1F", TokenKind::HexadecimalLiteral, 0),
        ("0x1.8p3", TokenKind::FloatLiteral, 0),
        ("0o17u8", TokenKind::OctalLiteral, 0),
        ("0b1010i64", TokenKind::BinaryLiteral, 0),
        ("0b0002", TokenKind::BinaryLiteral, 1),
        ("0o78", TokenKind::OctalLiteral, 1),
        ("0x", TokenKind::HexadecimalLiteral, 1),
        ("0_1", TokenKind::DecimalLiteral, 1),
        ("1e", TokenKind::FloatLiteral, 1),
        ("1f32", TokenKind::DecimalLiteral, 1),
        ("1.5i32", TokenKind::FloatLiteral, 1),
        ("2.5f128", TokenKind::FloatLiteral, 1),
    ];
    for &(source, kind, errors) in cases {
        let (token, diagnostics) = single(source);
        assert_eq!(token.kind, kind, "kind of {source:?}");
        assert_eq!(token.text(), Some(source), "text of {source:?}");
        assert_eq!(token.span, Span::new(0, to_u32(source.len())));
        assert_eq!(diagnostics.len(), errors, "{source:?}: {diagnostics:?}");
    }
}

#[test]
fn illegal_binary_digit_is_reported_once_at_the_digit() {
    let (_, diagnostics) = single("0b0002");
    assert_eq!(diagnostics[0].message, "illegal digit '2' in binary literal");
    assert_eq!(diagnostics[0].location.column, 6);
    assert_eq!(diagnostics[0].severity, Severity::Error);
}

#[test]
fn multiple_decimal_points_is_fatal() {
    let (tokens, diagnostics) = lex("1.2.3 x");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].span, Span::new(0, 5));
    assert_eq!(
        tokens[0].text(),
        Some("invalid number with multiple decimal points")
    );
    assert_eq!(tokens[2].kind, TokenKind::Ident);
    assert_eq!(diagnostics.error_count(), 1);
}

#[test]
fn range_after_integer() {
    assert_eq!(
        significant("s[0..=5]"),
        vec![
            TokenKind::Ident,
            TokenKind::LSquare,
            TokenKind::DecimalLiteral,
            TokenKind::ClosedRange,
            TokenKind::DecimalLiteral,
            TokenKind::RSquare,
        ]
    );
    assert_eq!(
        significant("s[0..(s.size - k)]"),
        vec![
            TokenKind::Ident,
            TokenKind::LSquare,
            TokenKind::DecimalLiteral,
            TokenKind::Range,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::Dot,
            TokenKind::Ident,
            TokenKind::Sub,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::RSquare,
        ]
    );
}

// ─── Operators ──────────────────────────────────────────────────────────

#[test]
fn compound_operators_use_maximal_munch() {
    assert_eq!(
        significant("**= ** *= && &&= || ||= <<= >>= <: <- |> ~> ?? ... ..= -> => == !="),
        vec![
            TokenKind::ExpAssign,
            TokenKind::Exp,
            TokenKind::MulAssign,
            TokenKind::And,
            TokenKind::AndAssign,
            TokenKind::Or,
            TokenKind::OrAssign,
            TokenKind::LShiftAssign,
            TokenKind::RShiftAssign,
            TokenKind::UpperBound,
            TokenKind::BackArrow,
            TokenKind::Pipeline,
            TokenKind::Composition,
            TokenKind::Coalescing,
            TokenKind::Ellipsis,
            TokenKind::ClosedRange,
            TokenKind::Arrow,
            TokenKind::DoubleArrow,
            TokenKind::Equal,
            TokenKind::NotEqual,
        ]
    );
}

#[test]
fn adjacent_operators_split_greedily() {
    assert_eq!(
        significant("a+++b"),
        vec![
            TokenKind::Ident,
            TokenKind::Inc,
            TokenKind::Add,
            TokenKind::Ident
        ]
    );
    assert_eq!(
        significant("x>>=1"),
        vec![
            TokenKind::Ident,
            TokenKind::RShiftAssign,
            TokenKind::DecimalLiteral
        ]
    );
}

#[test]
fn single_character_punctuation() {
    assert_eq!(
        significant(", ( ) [ ] { } : ; # @ ? \\ $ % / ^ ! & | < > = + - * ."),
        vec![
            TokenKind::Comma,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LSquare,
            TokenKind::RSquare,
            TokenKind::LCurl,
            TokenKind::RCurl,
            TokenKind::Colon,
            TokenKind::Semi,
            TokenKind::Hash,
            TokenKind::At,
            TokenKind::Quest,
            TokenKind::Backslash,
            TokenKind::Dollar,
            TokenKind::Mod,
            TokenKind::Div,
            TokenKind::BitXor,
            TokenKind::Not,
            TokenKind::BitAnd,
            TokenKind::BitOr,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Assign,
            TokenKind::Add,
            TokenKind::Sub,
            TokenKind::Mul,
            TokenKind::Dot,
        ]
    );
}

// ─── Comments ───────────────────────────────────────────────────────────

#[test]
fn line_comment_excludes_crlf() {
    let (tokens, _) = lex("// x\r\ny");
    assert_eq!(tokens[0].kind, TokenKind::LineComment);
    assert_eq!(tokens[0].span, Span::new(0, 4));
    assert_eq!(tokens[1].kind, TokenKind::Newline);
    assert_eq!(tokens[1].span, Span::new(4, 6));
}

#[test]
fn nested_block_comment() {
    let (tokens, diagnostics) = lex("/* a /* b */ c */x");
    assert_eq!(tokens[0].kind, TokenKind::BlockComment);
    assert_eq!(tokens[0].span, Span::new(0, 17));
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert!(diagnostics.is_empty());
}

#[test]
fn unterminated_block_comment_runs_to_end() {
    let (tokens, diagnostics) = lex("x /* abc /* */");
    assert_eq!(tokens[2].kind, TokenKind::BlockComment);
    assert_eq!(tokens[2].span, Span::new(2, 14));
    assert_eq!(tokens[3], Token::eof(14));
    let diagnostics = diagnostics.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "unterminated block comment");
    assert_eq!(diagnostics[0].location.column, 3);
}

// ─── Strings, runes and bytes ───────────────────────────────────────────

#[test]
fn line_strings_decode_escapes() {
    let (token, diagnostics) = single(r#""a\n\t\"\u{4ed3}""#);
    assert_eq!(token.kind, TokenKind::LineStringLiteral);
    assert_eq!(token.text(), Some("a\n\t\"仓"));
    assert!(diagnostics.is_empty());

    let (token, _) = single("'it\\'s'");
    assert_eq!(token.kind, TokenKind::LineStringLiteral);
    assert_eq!(token.text(), Some("it's"));
}

#[test]
fn multi_line_string_spans_lines() {
    let source = "\"\"\"first\n\"second\"\n\"\"\"";
    let (token, diagnostics) = single(source);
    assert_eq!(token.kind, TokenKind::MultiLineStringLiteral);
    assert_eq!(token.text(), Some("first\n\"second\"\n"));
    assert!(diagnostics.is_empty());
}

#[test]
fn unterminated_line_string_stops_at_newline() {
    let (tokens, diagnostics) = lex("\"abc\nx");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].text(), Some("unterminated string literal"));
    assert_eq!(tokens[0].span, Span::new(0, 4));
    assert_eq!(tokens[1].kind, TokenKind::Newline);
    assert_eq!(tokens[2].kind, TokenKind::Ident);
    assert_eq!(diagnostics.error_count(), 1);
}

#[test]
fn escaped_newline_in_line_string_is_unterminated() {
    let (tokens, _) = lex("\"a\\\nb\"");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].text(), Some("unterminated string literal"));
}

#[test]
fn invalid_escape_consumes_whole_literal() {
    let (tokens, diagnostics) = lex(r#""a\qb\z" x"#);
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].span, Span::new(0, 8));
    assert_eq!(tokens[0].text(), Some("invalid escape sequence '\\q'"));
    assert_eq!(tokens[2].kind, TokenKind::Ident);

    // Only the first problem of the literal is reported.
    let diagnostics = diagnostics.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].location.column, 3);
}

#[test]
fn recoverable_unicode_escape_problems() {
    let (token, diagnostics) = single(r#""\u{D800}""#);
    assert_eq!(token.kind, TokenKind::LineStringLiteral);
    assert_eq!(token.text(), Some("\u{FFFD}"));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "invalid unicode scalar value 0xD800");

    let (token, diagnostics) = single(r#""\u{}""#);
    assert_eq!(token.kind, TokenKind::LineStringLiteral);
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn malformed_unicode_escape_is_fatal() {
    let (token, diagnostics) = single(r#""\u41""#);
    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(
        token.text(),
        Some("malformed unicode escape, expected '{' after '\\u'")
    );
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn rune_literals() {
    let (token, diagnostics) = single("r'a'");
    assert_eq!(token.kind, TokenKind::RuneLiteral);
    assert_eq!(token.text(), Some("a"));
    assert!(diagnostics.is_empty());

    let (token, _) = single(r#"r"\u{4ed3}""#);
    assert_eq!(token.text(), Some("仓"));

    let (token, diagnostics) = single("r''");
    assert_eq!(token.kind, TokenKind::RuneLiteral);
    assert_eq!(token.text(), Some(""));
    assert_eq!(diagnostics[0].message, "empty rune literal");

    let (token, diagnostics) = single("r'ab'");
    assert_eq!(token.text(), Some("a"));
    assert_eq!(
        diagnostics[0].message,
        "rune literal must contain exactly one character"
    );
}

#[test]
fn byte_literals() {
    let (token, diagnostics) = single("b'x'");
    assert_eq!(token.kind, TokenKind::ByteLiteral);
    assert_eq!(token.text(), Some("x"));
    assert!(diagnostics.is_empty());

    let (token, diagnostics) = single("b\"abc\"");
    assert_eq!(token.kind, TokenKind::ByteStringLiteral);
    assert_eq!(token.text(), Some("abc"));
    assert!(diagnostics.is_empty());

    let (token, diagnostics) = single("b'é'");
    assert_eq!(token.kind, TokenKind::ByteLiteral);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "byte literal contains non-ASCII character 'é'"
    );
}

#[test]
fn identifiers_starting_with_r_or_b() {
    assert_eq!(significant("r b rb by"), vec![TokenKind::Ident; 4]);
}

// ─── Errors and diagnostics ─────────────────────────────────────────────

#[test]
fn unexpected_character_becomes_error_token() {
    let (tokens, diagnostics) = lex("a\n  ~ b");
    let error = &tokens[3];
    assert_eq!(error.kind, TokenKind::Error);
    assert_eq!(error.text(), Some("unexpected character '~'"));
    assert_eq!(error.span, Span::new(4, 5));

    let diagnostics = diagnostics.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].to_string(),
        "<input>:2:3: error [Lexical Issue]: unexpected character '~'"
    );
}

#[test]
fn file_name_appears_in_locations() {
    let mut cursor = Cursor::new("~").with_file_name("main.cj");
    cursor.tokenize();
    let diagnostics = cursor.diagnostics().diagnostics();
    assert_eq!(&*diagnostics[0].location.file_name, "main.cj");
    assert_eq!(cursor.file_name(), "main.cj");
}

#[test]
fn shared_engine_collects_from_several_cursors() {
    let engine = DiagnosticEngine::new();
    Cursor::new("~")
        .with_diagnostics(engine.clone())
        .tokenize();
    Cursor::new("0b2")
        .with_diagnostics(engine.clone())
        .tokenize();
    assert_eq!(engine.error_count(), 2);
}

#[test]
fn try_tokenize_stops_at_first_fatal_error() {
    let mut cursor = Cursor::new("a ~ \"unterminated");
    let failure = cursor.try_tokenize().unwrap_err();
    assert_eq!(failure.error, LexError::UnexpectedCharacter('~'));
    assert_eq!(failure.offset, 2);
    assert_eq!(failure.span, Span::new(2, 3));
    assert_eq!(failure.to_string(), "unexpected character '~' (at byte 2)");
    assert_eq!(cursor.diagnostics().error_count(), 1);
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn try_tokenize_keeps_recoverable_errors() {
    let mut cursor = Cursor::new("0b2 x");
    let tokens = cursor.try_tokenize().unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens.last(), Some(&Token::eof(5)));
    assert_eq!(cursor.diagnostics().error_count(), 1);
}

// ─── Position control ───────────────────────────────────────────────────

#[test]
fn peek_token_leaves_state_untouched() {
    let mut cursor = Cursor::new("~ a");
    let peeked = cursor.peek_token();
    assert_eq!(peeked.kind, TokenKind::Error);
    assert_eq!(cursor.pos(), 0);
    assert!(cursor.diagnostics().is_empty());

    assert_eq!(cursor.advance_token(), peeked);
    assert_eq!(cursor.diagnostics().len(), 1);
}

#[test]
fn snapshot_and_restore() {
    let mut cursor = Cursor::new("foo bar");
    cursor.advance_token();
    let snapshot = cursor.snapshot();
    let bar = {
        cursor.advance_token();
        cursor.advance_token()
    };
    assert!(cursor.is_eof());
    cursor.restore(snapshot);
    assert_eq!(cursor.pos(), 3);
    cursor.advance_token();
    assert_eq!(cursor.advance_token(), bar);
}

#[test]
fn clones_share_diagnostics_but_not_position() {
    let mut original = Cursor::new("a ~");
    let mut clone = original.clone();
    clone.tokenize();
    assert_eq!(original.pos(), 0);
    assert_eq!(original.diagnostics().len(), 1);
    assert!(original.diagnostics().shares_storage_with(clone.diagnostics()));
    assert_eq!(original.advance_token().text(), Some("a"));
}

#[test]
fn iterator_stops_before_eof() {
    let collected: Vec<TokenKind> = Cursor::new("a b").map(|t| t.kind).collect();
    assert_eq!(
        collected,
        vec![TokenKind::Ident, TokenKind::Whitespace, TokenKind::Ident]
    );
}

#[test]
fn accessors() {
    let cursor = Cursor::new("仓颉");
    assert_eq!(cursor.len(), 6);
    assert!(!cursor.is_empty());
    assert_eq!(cursor.current(), Some('仓'));
    assert_eq!(cursor.source(), "仓颉");
    assert_eq!(cursor.file_name(), DEFAULT_FILE_NAME);
    assert!(Cursor::new("").is_empty());
}
