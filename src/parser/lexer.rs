// CDL tokenizer.
//
// Tokens are produced on demand so that raw regions (feature blocks,
// the `|` modifier tail) can be captured verbatim without forcing their
// contents through token rules. Positions are character offsets into
// the preprocessed text.

use crate::error::{CdlError, Result};
use crate::lattice::crystal_systems::{ALL_POINT_GROUPS, SYSTEM_KEYWORDS};

/// Token classes of the CDL surface grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Crystal system keyword, case-folded.
    System,
    /// Hermann–Mauguin point-group literal from the enumerated set.
    PointGroup,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Colon,
    Comma,
    Plus,
    Pipe,
    At,
    LParen,
    RParen,
    Integer,
    Float,
    Identifier,
    Eof,
}

impl TokenKind {
    /// Human-readable name for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::System => "crystal system",
            TokenKind::PointGroup => "point group",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Plus => "'+'",
            TokenKind::Pipe => "'|'",
            TokenKind::At => "'@'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Integer => "integer",
            TokenKind::Float => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Eof => "end of input",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Character offset of the first character of the token.
    pub pos: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, pos: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }
}

/// On-demand lexer over the preprocessed CDL text.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Produce the next token. Idempotently returns `Eof` at the end.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        let start = self.pos;
        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(Token::new(TokenKind::Eof, "", start)),
        };

        let punct = match c {
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            '+' => Some(TokenKind::Plus),
            '|' => Some(TokenKind::Pipe),
            '@' => Some(TokenKind::At),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            _ => None,
        };
        if let Some(kind) = punct {
            self.pos += 1;
            return Ok(Token::new(kind, c.to_string(), start));
        }

        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.scan_identifier(start));
        }
        if c.is_ascii_digit() || c == '-' {
            return self.scan_number_or_point_group(start);
        }

        Err(CdlError::Lex {
            position: start,
            ch: c,
        })
    }

    fn scan_identifier(&mut self, start: usize) -> Token {
        while self
            .peek_char()
            .map_or(false, |c| c.is_ascii_alphanumeric() || matches!(c, '_' | '/' | '-'))
        {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();

        let folded = text.to_ascii_lowercase();
        if SYSTEM_KEYWORDS.contains(&folded.as_str()) {
            return Token::new(TokenKind::System, folded, start);
        }
        if ALL_POINT_GROUPS.contains(&text.as_str()) {
            return Token::new(TokenKind::PointGroup, text, start);
        }
        Token::new(TokenKind::Identifier, text, start)
    }

    // Point-group literals contain digits and collide with Miller
    // coordinates, so a number scan first tries the longest
    // `[A-Za-z0-9/-]` run against the known set. A match immediately
    // followed by `.` is rejected (it is the head of a float).
    fn scan_number_or_point_group(&mut self, start: usize) -> Result<Token> {
        let mut run_end = self.pos;
        while self
            .chars
            .get(run_end)
            .map_or(false, |&c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-'))
        {
            run_end += 1;
        }
        let run: String = self.chars[self.pos..run_end].iter().collect();
        let followed_by_dot = self.chars.get(run_end) == Some(&'.');
        if ALL_POINT_GROUPS.contains(&run.as_str()) && !followed_by_dot {
            self.pos = run_end;
            return Ok(Token::new(TokenKind::PointGroup, run, start));
        }

        // Number: optional leading '-', digits, optional '.' digits.
        if self.peek_char() == Some('-') {
            self.pos += 1;
        }
        if !self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            return Err(CdlError::Lex {
                position: start,
                ch: self.chars[start],
            });
        }
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        let mut kind = TokenKind::Integer;
        if self.peek_char() == Some('.')
            && self.peek_char_at(1).map_or(false, |c| c.is_ascii_digit())
        {
            kind = TokenKind::Float;
            self.pos += 1;
            while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        Ok(Token::new(kind, text, start))
    }

    /// Capture a feature block verbatim. The cursor must sit just past
    /// the opening `[`; nested brackets are tracked by depth and the
    /// cursor ends past the matching `]`.
    pub fn capture_feature_block(&mut self) -> Result<String> {
        let mut depth = 1usize;
        let mut content = String::new();
        while let Some(c) = self.peek_char() {
            self.pos += 1;
            match c {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(content.trim().to_string());
                    }
                }
                _ => {}
            }
            content.push(c);
        }
        Err(CdlError::UnterminatedFeatures)
    }

    /// Consume and return the remaining text verbatim.
    pub fn take_rest(&mut self) -> String {
        let rest: String = self.chars[self.pos..].iter().collect();
        self.pos = self.chars.len();
        rest
    }
}
