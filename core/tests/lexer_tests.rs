use loxscan::lexer::{lex, token::Literal, token::TokenKind};
use loxscan::Lexer;
use pretty_assertions::assert_eq;

fn token_kinds(source: &str) -> Vec<TokenKind> {
    let output = lex(source);
    assert!(output.errors.is_empty(), "unexpected errors: {:?}", output.errors);
    output.tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn lex_grouping_punctuation() {
    let kinds = token_kinds("(( )){}");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftParen,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_compound_operators() {
    let kinds = token_kinds("!= == <= >=");
    assert_eq!(
        kinds,
        vec![
            TokenKind::BangEqual,
            TokenKind::EqualEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_single_character_operators() {
    let kinds = token_kinds("! = < > / * + - , . ;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Bang,
            TokenKind::Equal,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Slash,
            TokenKind::Star,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_operators_without_spaces() {
    let kinds = token_kinds("a!=!b==c");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::BangEqual,
            TokenKind::Bang,
            TokenKind::Identifier,
            TokenKind::EqualEqual,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_skips_line_comment() {
    let tokens = lex("// comment\n123").tokens;
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "123");
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn lex_comment_at_end_of_input() {
    let kinds = token_kinds("1 / 2 // half");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Slash,
            TokenKind::Number,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_string_literal() {
    let tokens = lex("\"hello\"").tokens;
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"hello\"");
    assert_eq!(tokens[0].literal, Literal::Str("hello".into()));
}

#[test]
fn lex_string_keeps_backslashes() {
    let tokens = lex(r#""a\nb""#).tokens;
    assert_eq!(tokens[0].literal, Literal::Str(r"a\nb".into()));
}

#[test]
fn lex_multiline_string_reports_closing_line() {
    let tokens = lex("\"one\ntwo\" x").tokens;
    assert_eq!(tokens[0].literal, Literal::Str("one\ntwo".into()));
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn lex_empty_string() {
    let tokens = lex("\"\"").tokens;
    assert_eq!(tokens[0].literal, Literal::Str(String::new()));
    assert_eq!(tokens[0].lexeme, "\"\"");
}

#[test]
fn lex_numbers_are_decoded() {
    let tokens = lex("123 4.5 0.25").tokens;
    let literals: Vec<Literal> = tokens.iter().map(|t| t.literal.clone()).collect();
    assert_eq!(
        literals,
        vec![
            Literal::Number(123.0),
            Literal::Number(4.5),
            Literal::Number(0.25),
            Literal::None,
        ]
    );
    assert_eq!(tokens[1].lexeme, "4.5");
}

#[test]
fn lex_trailing_dot_is_separate_token() {
    let tokens = lex("1.").tokens;
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "1");
    assert_eq!(tokens[1].kind, TokenKind::Dot);
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn lex_method_call_on_number() {
    let kinds = token_kinds("12.abs");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_leading_dot_is_not_a_number() {
    let kinds = token_kinds(".5");
    assert_eq!(kinds, vec![TokenKind::Dot, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn lex_keywords() {
    let kinds = token_kinds(
        "and class else false for fun if nil or print return super this true var while",
    );
    assert_eq!(
        kinds,
        vec![
            TokenKind::And,
            TokenKind::Class,
            TokenKind::Else,
            TokenKind::False,
            TokenKind::For,
            TokenKind::Fun,
            TokenKind::If,
            TokenKind::Nil,
            TokenKind::Or,
            TokenKind::Print,
            TokenKind::Return,
            TokenKind::Super,
            TokenKind::This,
            TokenKind::True,
            TokenKind::Var,
            TokenKind::While,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_keyword_prefixes_are_identifiers() {
    let tokens = lex("ifx orchid _var var_ classy").tokens;
    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier, "{}", token.lexeme);
        assert!(token.literal.is_none());
    }
    assert_eq!(tokens[0].lexeme, "ifx");
}

#[test]
fn lex_variable_declaration() {
    let tokens = lex("var a = 10;").tokens;
    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "VAR var nil",
            "IDENTIFIER a nil",
            "EQUAL = nil",
            "NUMBER 10 10.0",
            "SEMICOLON ; nil",
            "EOF  nil",
        ]
    );
}

#[test]
fn lex_tracks_lines() {
    let tokens = lex("var a;\n\nprint a;\r\n").tokens;
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 1, 3, 3, 3, 4]);
}

#[test]
fn lex_empty_source() {
    let tokens = lex("").tokens;
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].lexeme, "");
    assert_eq!(tokens[0].line, 1);
}

#[test]
fn lex_spans_cover_lexemes() {
    let source = "fun add(a, b) { return a + b; }";
    for token in lex(source).tokens {
        assert_eq!(&source[token.span.start..token.span.end], token.lexeme);
    }
}

#[test]
fn lexer_starts_at_configured_line() {
    let tokens = Lexer::new().with_first_line(7).lex("a\nb").tokens;
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![7, 8, 8]);
}

#[test]
fn lexer_ignores_zero_first_line() {
    assert_eq!(Lexer::new().with_first_line(0).first_line(), 1);
}

#[test]
fn repeated_scans_do_not_share_state() {
    let lexer = Lexer::new();
    let first = lexer.lex("print 1;\nprint 2;");
    let second = lexer.lex("print 1;\nprint 2;");
    assert_eq!(first, second);
    assert_eq!(lexer.lex("x").tokens[0].line, 1);
}

#[test]
fn tokens_serialize_to_json() {
    let tokens = lex("\"hi\" 2").tokens;
    let json = serde_json::to_value(&tokens).expect("tokens should serialize");
    assert_eq!(json[0]["kind"], "STRING");
    assert_eq!(json[0]["literal"]["type"], "Str");
    assert_eq!(json[0]["literal"]["value"], "hi");
    assert_eq!(json[1]["literal"]["value"], 2.0);
    assert_eq!(json[2]["kind"], "EOF");
    assert_eq!(json[2]["literal"]["type"], "None");
}
