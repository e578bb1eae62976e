use std::fmt::Display;

use crate::Position;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    Str, // string literal, quotes included
    Num, // number, validated later
    Op,  // run of operator characters
    Ws,  // whitespace
    Sym, // symbol
    Com, // line comment
    Pnc, // punctuation
    Unk, // character no pattern recognised
    End, // end of input
}

impl TokenType {
    /// Kinds whose matched text may contain newlines.
    pub fn may_span_lines(&self) -> bool {
        matches!(self, TokenType::Ws | TokenType::Str)
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified fragment of the source. The value is the exact matched text;
/// the position is where its first character sits, absent only for `End`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub ttype: TokenType,
    pub value: String,
    pub position: Option<Position>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let quoted = serde_json::to_string(&self.value).map_err(|_| std::fmt::Error)?;
        write!(f, "{}\t[{}]", self.ttype, quoted)?;

        if let Some(position) = &self.position {
            write!(f, "\t({}, {})", position.row, position.col)?;
        }

        Ok(())
    }
}

impl Token {
    pub fn is_end(&self) -> bool {
        self.ttype == TokenType::End
    }
}

/// Renders a token as a single debug line, e.g. `Sym\t["abc"]\t(1, 1)`.
pub fn token_to_string(token: &Token) -> String {
    token.to_string()
}
