// Recursive-descent parser for CDL expressions.
//
// Grammar:
//
//     program   := SYSTEM '[' pg ']' ':' form_list ('|' tail)?
//     pg        := POINT_GROUP | IDENTIFIER
//     form_list := form_or_group ('+' form_or_group)*
//     form_or_group := (IDENTIFIER ':' &('(' | '{'))? (group | form)
//     group     := '(' form_list ')' features?
//     form      := miller ('@' scale)? features?
//     miller    := '{' components '}'
//     features  := '[' raw ']'
//
// The parser pulls tokens from the lexer on demand and never looks
// ahead past an opening `[` or `|`, so feature blocks and the modifier
// tail are captured raw.

use std::collections::VecDeque;
use std::str::FromStr;

use log::warn;

use crate::error::{CdlError, Result};
use crate::lattice::crystal_systems::CrystalSystem;
use crate::parser::lexer::{Lexer, Token, TokenKind};
use crate::parser::parse_tree::{
    CrystalForm, FormGroup, FormNode, MillerIndex, ParseResult,
};
use crate::parser::preprocessor::Preprocessed;
use crate::parser::tail_modifiers;

/// Parse a preprocessed CDL expression into a [`ParseResult`].
pub fn parse(preprocessed: &Preprocessed) -> Result<ParseResult> {
    CdlParser::new(&preprocessed.text).parse_program(preprocessed)
}

struct CdlParser {
    lexer: Lexer,
    lookahead: VecDeque<Token>,
}

impl CdlParser {
    fn new(text: &str) -> Self {
        Self {
            lexer: Lexer::new(text),
            lookahead: VecDeque::new(),
        }
    }

    fn peek(&mut self, n: usize) -> Result<&Token> {
        while self.lookahead.len() <= n {
            let token = self.lexer.next_token()?;
            self.lookahead.push_back(token);
        }
        Ok(&self.lookahead[n])
    }

    fn advance(&mut self) -> Result<Token> {
        self.peek(0)?;
        Ok(self.lookahead.pop_front().unwrap())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.advance()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(CdlError::parse(
                kind.describe(),
                token.kind.describe(),
                token.pos,
            ))
        }
    }

    fn parse_program(mut self, preprocessed: &Preprocessed) -> Result<ParseResult> {
        let mut warnings = Vec::new();

        let system_token = self.advance()?;
        let system = match system_token.kind {
            TokenKind::System => CrystalSystem::from_str(&system_token.text)?,
            TokenKind::Identifier => {
                return Err(CdlError::UnknownSystem(system_token.text));
            }
            other => {
                return Err(CdlError::parse(
                    "crystal system",
                    other.describe(),
                    system_token.pos,
                ));
            }
        };

        self.expect(TokenKind::LBracket)?;
        let pg_token = self.advance()?;
        let point_group = match pg_token.kind {
            TokenKind::PointGroup | TokenKind::Identifier | TokenKind::Integer => pg_token.text,
            other => {
                return Err(CdlError::parse("point group", other.describe(), pg_token.pos));
            }
        };
        self.expect(TokenKind::RBracket)?;
        self.expect(TokenKind::Colon)?;

        if !system.point_groups().contains(&point_group.as_str()) {
            let message = format!(
                "point group '{}' is not enumerated for the {} system",
                point_group, system
            );
            warn!("{}", message);
            warnings.push(message);
        }

        let forms = self.parse_form_list()?;

        let mut modifier = None;
        let tail_token = self.advance()?;
        match tail_token.kind {
            TokenKind::Pipe => modifier = Some(self.lexer.take_rest()),
            TokenKind::Eof => {}
            other => {
                return Err(CdlError::parse(
                    "'+', '|' or end of input",
                    other.describe(),
                    tail_token.pos,
                ));
            }
        }

        let extracted = match &modifier {
            Some(tail) => tail_modifiers::extract(tail),
            None => tail_modifiers::TailModifiers::default(),
        };
        warnings.extend(extracted.warnings);

        Ok(ParseResult {
            system,
            point_group,
            forms,
            modifier,
            phenomenon: extracted.phenomenon,
            twin: extracted.twin,
            modifications: extracted.modifications,
            definitions: preprocessed.definitions.clone(),
            doc_comments: preprocessed.doc_comments.clone(),
            warnings,
        })
    }

    fn parse_form_list(&mut self) -> Result<Vec<FormNode>> {
        let mut nodes = vec![self.parse_form_or_group()?];
        while self.peek(0)?.kind == TokenKind::Plus {
            self.advance()?;
            nodes.push(self.parse_form_or_group()?);
        }
        Ok(nodes)
    }

    // Label binding needs two tokens of lookahead: `name ':'` binds to
    // the following group or form only when a `(` or `{` comes next.
    fn parse_form_or_group(&mut self) -> Result<FormNode> {
        let label = if self.peek(0)?.kind == TokenKind::Identifier
            && self.peek(1)?.kind == TokenKind::Colon
            && matches!(self.peek(2)?.kind, TokenKind::LParen | TokenKind::LBrace)
        {
            let name = self.advance()?;
            self.advance()?;
            Some(name.text)
        } else {
            None
        };

        let (kind, pos) = {
            let token = self.peek(0)?;
            (token.kind, token.pos)
        };
        match kind {
            TokenKind::LParen => {
                self.advance()?;
                let children = self.parse_form_list()?;
                self.expect(TokenKind::RParen)?;
                let features = self.maybe_features()?;
                Ok(FormNode::Group(FormGroup {
                    children,
                    features,
                    label,
                }))
            }
            TokenKind::LBrace => self.parse_form(label).map(FormNode::Form),
            other => Err(CdlError::parse("form or group", other.describe(), pos)),
        }
    }

    fn parse_form(&mut self, label: Option<String>) -> Result<CrystalForm> {
        let miller = self.parse_miller()?;
        let scale = if self.peek(0)?.kind == TokenKind::At {
            self.advance()?;
            Some(self.parse_scale()?)
        } else {
            None
        };
        let features = self.maybe_features()?;
        Ok(CrystalForm {
            miller,
            scale: scale.unwrap_or(1.0),
            features,
            label,
        })
    }

    fn parse_scale(&mut self) -> Result<f64> {
        let token = self.advance()?;
        let value = match token.kind {
            TokenKind::Integer | TokenKind::Float | TokenKind::PointGroup => {
                token.text.parse::<f64>().map_err(|_| {
                    CdlError::parse("scale value", format!("'{}'", token.text), token.pos)
                })?
            }
            other => {
                return Err(CdlError::parse("scale value", other.describe(), token.pos));
            }
        };
        if !(value > 0.0) {
            return Err(CdlError::parse(
                "positive scale",
                format!("'{}'", token.text),
                token.pos,
            ));
        }
        Ok(value)
    }

    // Miller components come from INTEGER tokens and from numeric
    // POINT_GROUP tokens (the lexer prefers point-group literals, so
    // e.g. `432` arrives as one). Multi-digit tokens split digit by
    // digit, the first digit carrying the token's sign: `-110` yields
    // -1, 1, 0. That splitting is what lets `{10-10}` spell (1,0,-1,0).
    fn parse_miller(&mut self) -> Result<MillerIndex> {
        self.expect(TokenKind::LBrace)?;
        let mut components = Vec::new();
        loop {
            let token = self.advance()?;
            match token.kind {
                TokenKind::RBrace => break,
                TokenKind::Comma => continue,
                TokenKind::Integer => split_components(&token, &mut components)?,
                TokenKind::PointGroup if token.text.parse::<i64>().is_ok() => {
                    split_components(&token, &mut components)?;
                }
                other => {
                    return Err(CdlError::parse(
                        "miller component",
                        other.describe(),
                        token.pos,
                    ));
                }
            }
        }
        MillerIndex::from_components(&components)
    }

    fn maybe_features(&mut self) -> Result<Option<String>> {
        if self.peek(0)?.kind == TokenKind::LBracket {
            self.advance()?;
            // The lookahead buffer is empty here, so the lexer cursor
            // sits just past the `[`.
            return self.lexer.capture_feature_block().map(Some);
        }
        Ok(None)
    }
}

fn split_components(token: &Token, components: &mut Vec<i32>) -> Result<()> {
    let negative = token.text.starts_with('-');
    let digits: Vec<u32> = token.text.chars().filter_map(|c| c.to_digit(10)).collect();
    match digits.as_slice() {
        [] => Err(CdlError::parse(
            "miller component",
            format!("'{}'", token.text),
            token.pos,
        )),
        [single] => {
            let value = *single as i32;
            components.push(if negative { -value } else { value });
            Ok(())
        }
        [first, rest @ ..] => {
            let lead = *first as i32;
            components.push(if negative { -lead } else { lead });
            components.extend(rest.iter().map(|d| *d as i32));
            Ok(())
        }
    }
}
