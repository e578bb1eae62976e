use std::iter::FusedIterator;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenType};

pub struct RegexPattern {
    kind: TokenType,
    regex: Regex,
}

impl RegexPattern {
    fn new(kind: TokenType, pattern: &str) -> Self {
        RegexPattern {
            kind,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    /// Length in bytes of the match at the very start of `input`, if any.
    /// Empty matches count as no match so every step consumes input.
    fn match_len(&self, input: &str) -> Option<usize> {
        self.regex
            .find(input)
            .filter(|m| m.start() == 0 && m.end() > 0)
            .map(|m| m.end())
    }
}

lazy_static! {
    // Tried in order, first match wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(TokenType::Com, r"^//[^\r\n]*"),
        RegexPattern::new(TokenType::Pnc, r"^[{}():;<>]"),
        RegexPattern::new(TokenType::Ws, r"^[ \t\n\r\x0B\x0C]+"),
        RegexPattern::new(TokenType::Op, r"^[!@#$%^*\-+=\[\]?/\\&|]+"),
        // A quote closes the string only after an even run of backslashes.
        RegexPattern::new(TokenType::Str, r#"^(?s:"(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')"#),
        RegexPattern::new(TokenType::Sym, r"^[A-Za-z][A-Za-z0-9_]*"),
        RegexPattern::new(TokenType::Num, r"^(?:0[xobd])?[A-Fa-f0-9]+(?:\.[A-Fa-f0-9]+)?"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexerState {
    Scanning,
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: usize,
    col: usize,
    state: LexerState,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        let source = source.into();
        debug!("lexer created over {} bytes", source.len());

        Lexer {
            source,
            pos: 0,
            line: 1,
            col: 1,
            state: LexerState::Scanning,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The suffix of the source that has not been consumed yet.
    pub fn remaining(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Where the next token will start.
    pub fn cursor(&self) -> Position {
        Position::new(self.line, self.col)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Produces the next token, or `None` once the input is used up.
    ///
    /// Input no pattern recognises comes back one character at a time as
    /// `Unk` tokens, so this always makes progress.
    pub fn chomp(&mut self) -> Option<Token> {
        if self.at_eof() {
            return None;
        }

        let position = self.cursor();
        let remaining = self.remaining();

        let (ttype, len) = PATTERNS
            .iter()
            .find_map(|pattern| pattern.match_len(remaining).map(|len| (pattern.kind, len)))
            .unwrap_or_else(|| {
                let len = remaining.chars().next().map_or(1, char::len_utf8);
                (TokenType::Unk, len)
            });

        let value = remaining[..len].to_string();
        self.advance(ttype, &value);

        let token = MK_TOKEN!(ttype, value, Some(position));
        trace!("{}", token);
        Some(token)
    }

    fn advance(&mut self, ttype: TokenType, text: &str) {
        self.pos += text.len();
        self.col += text.chars().count();

        if ttype.may_span_lines() {
            if let Some(last_newline) = text.rfind('\n') {
                self.line += text.matches('\n').count();
                self.col = text[last_newline + 1..].chars().count() + 1;
            }
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.state {
            LexerState::Scanning => match self.chomp() {
                Some(token) => Some(token),
                None => {
                    self.state = LexerState::Exhausted;
                    debug!("lexer exhausted at {}", self.cursor());
                    Some(MK_TOKEN!(TokenType::End, String::from("EOF"), None))
                }
            },
            LexerState::Exhausted => None,
        }
    }
}

impl FusedIterator for Lexer {}

/// Scans the whole source, ending with a single `End` token.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Like [`tokenize`], but the first `Unk` token is reported as an error.
pub fn tokenize_strict(source: impl Into<String>, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut tokens = vec![];

    for token in Lexer::new(source) {
        if let (TokenType::Unk, Some(position)) = (token.ttype, token.position) {
            let first = token.value.chars().next();
            let error_impl = match first {
                Some(quote @ ('"' | '\'')) => ErrorImpl::UnterminatedString { quote },
                _ => ErrorImpl::UnrecognisedToken { token: token.value },
            };

            return Err(Error::new(error_impl, position, file));
        }

        tokens.push(token);
    }

    Ok(tokens)
}
