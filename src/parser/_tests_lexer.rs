#[cfg(test)]
mod tests_lexer {
    use super::super::lexer::{Lexer, TokenKind};
    use crate::error::CdlError;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token().unwrap();
            let kind = token.kind;
            kinds.push(kind);
            if kind == TokenKind::Eof {
                return kinds;
            }
        }
    }

    #[test]
    fn test_basic_expression() {
        assert_eq!(
            kinds("cubic[m3m]:{100}@1.5"),
            vec![
                TokenKind::System,
                TokenKind::LBracket,
                TokenKind::PointGroup,
                TokenKind::RBracket,
                TokenKind::Colon,
                TokenKind::LBrace,
                TokenKind::Integer,
                TokenKind::RBrace,
                TokenKind::At,
                TokenKind::Float,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_system_keyword_case_folded() {
        let mut lexer = Lexer::new("Hexagonal");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::System);
        assert_eq!(token.text, "hexagonal");
    }

    #[test]
    fn test_point_group_literals() {
        for pg in ["m3m", "-43m", "4/mmm", "-3m", "6/m", "23", "mm2", "-1"] {
            let mut lexer = Lexer::new(pg);
            let token = lexer.next_token().unwrap();
            assert_eq!(token.kind, TokenKind::PointGroup, "literal {}", pg);
            assert_eq!(token.text, pg);
        }
    }

    #[test]
    fn test_digit_led_point_group_beats_number() {
        // `432` is a cubic point group, so it lexes as one even where a
        // Miller component is wanted; the parser accepts both.
        let mut lexer = Lexer::new("432");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::PointGroup);
    }

    #[test]
    fn test_point_group_followed_by_dot_is_a_number() {
        // `4.5` must not lex as point group `4`.
        let mut lexer = Lexer::new("4.5");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Float);
        assert_eq!(token.text, "4.5");
    }

    #[test]
    fn test_single_digit_scale_is_point_group() {
        // `1` and `2` are triclinic/monoclinic groups; the longest-run
        // rule wins when no dot follows.
        let mut lexer = Lexer::new("@2");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::At);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::PointGroup);
        assert_eq!(token.text, "2");
    }

    #[test]
    fn test_hexagonal_miller_run() {
        // `{10-10}` lexes as two integers: `10` then `-10`.
        let mut lexer = Lexer::new("{10-10}");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LBrace);
        let first = lexer.next_token().unwrap();
        assert_eq!((first.kind, first.text.as_str()), (TokenKind::Integer, "10"));
        let second = lexer.next_token().unwrap();
        assert_eq!((second.kind, second.text.as_str()), (TokenKind::Integer, "-10"));
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::RBrace);
    }

    #[test]
    fn test_negative_integer() {
        let mut lexer = Lexer::new("-110");
        let token = lexer.next_token().unwrap();
        assert_eq!((token.kind, token.text.as_str()), (TokenKind::Integer, "-110"));
    }

    #[test]
    fn test_identifier() {
        let mut lexer = Lexer::new("prism_core");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text, "prism_core");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("( ) , + |"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Comma,
                TokenKind::Plus,
                TokenKind::Pipe,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unexpected_character_fails() {
        let mut lexer = Lexer::new("cubic %");
        lexer.next_token().unwrap();
        match lexer.next_token().unwrap_err() {
            CdlError::Lex { position, ch } => {
                assert_eq!(position, 6);
                assert_eq!(ch, '%');
            }
            other => panic!("expected Lex error, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_minus_fails() {
        let mut lexer = Lexer::new("- ");
        assert!(matches!(lexer.next_token(), Err(CdlError::Lex { .. })));
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_capture_feature_block_tracks_depth() {
        let mut lexer = Lexer::new("[outer [inner] more] +");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LBracket);
        let raw = lexer.capture_feature_block().unwrap();
        assert_eq!(raw, "outer [inner] more");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Plus);
    }

    #[test]
    fn test_capture_feature_block_unterminated() {
        let mut lexer = Lexer::new("[never closed");
        lexer.next_token().unwrap();
        assert_eq!(
            lexer.capture_feature_block().unwrap_err(),
            CdlError::UnterminatedFeatures
        );
    }

    #[test]
    fn test_take_rest_is_raw() {
        let mut lexer = Lexer::new("{100} | twin(spinel) anything at all");
        while lexer.next_token().unwrap().kind != TokenKind::Pipe {}
        assert_eq!(lexer.take_rest(), " twin(spinel) anything at all");
    }
}
