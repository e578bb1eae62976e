//! Integration tests for end-to-end tokenization.
//!
//! These tests drive the public API the way a parser would: build a lexer
//! from source, pull tokens one at a time or as a whole sequence, and
//! render them for debugging.

use tokenizer::{
    lexer::{
        lexer::{tokenize, tokenize_strict, Lexer},
        tokens::{token_to_string, Token, TokenType},
    },
    render_error, Position,
};

const SAMPLES: [&str; 6] = [
    "",
    "abc 1ab alpha_omega",
    "aushf32342 9f23 <t> 239042n @*(#&$*( )(*)(&@*(#&{}@#}{:",
    "fn f(a: u8) {\n    // body\n    return \"x\\\"y\" + 'z';\n}\n",
    "\"never closed\n`~ é ... ,,",
    "\r\n\t 0o17.3 0b 0x.1 //\n//x",
];

fn non_end_values(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|token| token.ttype != TokenType::End)
        .map(|token| token.value.as_str())
        .collect()
}

#[test]
fn test_every_scan_ends_with_exactly_one_end() {
    for source in SAMPLES {
        let tokens = tokenize(source);

        assert_eq!(tokens.last().map(|token| token.ttype), Some(TokenType::End));
        assert_eq!(
            tokens
                .iter()
                .filter(|token| token.ttype == TokenType::End)
                .count(),
            1
        );
    }
}

#[test]
fn test_token_values_cover_source() {
    for source in SAMPLES {
        assert_eq!(non_end_values(&tokenize(source)), source);
    }
}

#[test]
fn test_scan_length_is_bounded_by_input() {
    for source in SAMPLES {
        assert!(tokenize(source).len() <= source.chars().count() + 1);
    }
}

#[test]
fn test_positions_match_source_offsets() {
    for source in SAMPLES {
        let lines: Vec<Vec<char>> = source
            .split_inclusive('\n')
            .map(|line| line.chars().collect())
            .collect();

        for token in tokenize(source) {
            let Some(Position { row, col }) = token.position else {
                continue;
            };
            let first = token.value.chars().next().unwrap();

            assert_eq!(lines[row - 1][col - 1], first, "token {}", token_to_string(&token));
        }
    }
}

#[test]
fn test_regression_fixture() {
    let tokens: Vec<(TokenType, String)> = Lexer::new("abc 1ab alpha_omega")
        .map(|token| (token.ttype, token.value))
        .collect();

    assert_eq!(
        tokens,
        vec![
            (TokenType::Sym, "abc".to_string()),
            (TokenType::Ws, " ".to_string()),
            (TokenType::Num, "1ab".to_string()),
            (TokenType::Ws, " ".to_string()),
            (TokenType::Sym, "alpha_omega".to_string()),
            (TokenType::End, "EOF".to_string()),
        ]
    );
}

#[test]
fn test_comment_wins_over_operator() {
    let first = Lexer::new("// not op").next().unwrap();

    assert_eq!(first.ttype, TokenType::Com);
    assert_eq!(first.value, "// not op");
}

#[test]
fn test_escaped_quote_keeps_string_open() {
    let source = "\"a\\\\\\\"b\"";
    let tokens = tokenize(source);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].ttype, TokenType::Str);
    assert_eq!(tokens[0].value, source);
}

#[test]
fn test_row_and_column_of_second_line() {
    let tokens = tokenize("ab\ncd");
    let cd = tokens.iter().find(|token| token.value == "cd").unwrap();

    assert_eq!(cd.position, Some(Position::new(2, 1)));
}

#[test]
fn test_unknown_character_fallback() {
    let tokens = tokenize("`");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].ttype, TokenType::Unk);
    assert_eq!(tokens[0].value, "`");
    assert_eq!(tokens[1].ttype, TokenType::End);
}

#[test]
fn test_demo_input_rendering() {
    let rendered: Vec<String> = tokenize("<t> 239042n @*(")
        .iter()
        .map(token_to_string)
        .collect();

    assert_eq!(
        rendered,
        vec![
            "Pnc\t[\"<\"]\t(1, 1)",
            "Sym\t[\"t\"]\t(1, 2)",
            "Pnc\t[\">\"]\t(1, 3)",
            "Ws\t[\" \"]\t(1, 4)",
            "Num\t[\"239042\"]\t(1, 5)",
            "Sym\t[\"n\"]\t(1, 11)",
            "Ws\t[\" \"]\t(1, 12)",
            "Op\t[\"@*\"]\t(1, 13)",
            "Pnc\t[\"(\"]\t(1, 15)",
            "End\t[\"EOF\"]",
        ]
    );
}

#[test]
fn test_strict_error_renders_against_source() {
    let source = "let a = 1;\nlet b = `;\n";
    let error = tokenize_strict(source.to_string(), Some("demo.src".to_string())).unwrap_err();

    assert_eq!(*error.get_position(), Position::new(2, 9));
    assert_eq!(
        render_error(&error, source),
        "Error: UnrecognisedToken\n-> demo.src:2:9\n  |\n2 | let b = `;\n  | --------^\n"
    );
}

#[test]
fn test_fresh_lexer_rescans_identically() {
    let source = SAMPLES[3];

    assert_eq!(tokenize(source), Lexer::new(source).collect::<Vec<_>>());
}
