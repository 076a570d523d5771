#[cfg(test)]
mod tests_preprocessor {
    use super::super::preprocessor::preprocess;
    use crate::error::CdlError;

    #[test]
    fn test_passthrough() {
        let result = preprocess("cubic[m3m]:{100}@1").unwrap();
        assert_eq!(result.text, "cubic[m3m]:{100}@1");
        assert!(result.definitions.is_empty());
        assert!(result.doc_comments.is_empty());
    }

    #[test]
    fn test_doc_comments_harvested() {
        let result = preprocess("#! name: demo\n#!  author: someone\ncubic[m3m]:{100}").unwrap();
        assert_eq!(result.doc_comments, vec!["name: demo", "author: someone"]);
        assert_eq!(result.text, "cubic[m3m]:{100}");
    }

    #[test]
    fn test_block_comment_stripped() {
        let result = preprocess("cubic/* the system */[m3m]:{100}").unwrap();
        assert_eq!(result.text, "cubic[m3m]:{100}");
    }

    #[test]
    fn test_block_comment_multiline_non_greedy() {
        let result = preprocess("cubic/* a\nb */[m3m]:/* c */{100}").unwrap();
        assert_eq!(result.text, "cubic[m3m]:{100}");
    }

    #[test]
    fn test_line_comment_stripped() {
        let result = preprocess("cubic[m3m]:{100} # trailing note").unwrap();
        assert_eq!(result.text, "cubic[m3m]:{100}");
    }

    #[test]
    fn test_definition_captured_and_substituted() {
        let result = preprocess("@base = {100}@1\ncubic[m3m]: $base").unwrap();
        assert_eq!(result.definitions, vec![("base".to_string(), "{100}@1".to_string())]);
        assert_eq!(result.text, "cubic[m3m]: {100}@1");
    }

    #[test]
    fn test_definitions_resolve_earlier_definitions() {
        let result = preprocess("@core = {100}\n@scaled = $core@2\ncubic[m3m]:$scaled").unwrap();
        assert_eq!(result.definitions[1], ("scaled".to_string(), "{100}@2".to_string()));
        assert_eq!(result.text, "cubic[m3m]:{100}@2");
    }

    #[test]
    fn test_reference_followed_by_word_char_is_longer_name() {
        // `$basefoo` is a reference to `basefoo`, not `base` + "foo".
        let err = preprocess("@base = {100}\ncubic[m3m]:$basefoo").unwrap_err();
        assert_eq!(
            err,
            CdlError::UnresolvedReference {
                name: "basefoo".to_string()
            }
        );
    }

    #[test]
    fn test_unresolved_reference_fails() {
        let err = preprocess("cubic[m3m]:$missing").unwrap_err();
        assert_eq!(
            err,
            CdlError::UnresolvedReference {
                name: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(preprocess("").unwrap_err(), CdlError::EmptyInput);
        assert_eq!(preprocess("   \n\t").unwrap_err(), CdlError::EmptyInput);
    }

    #[test]
    fn test_comment_only_input_fails() {
        assert_eq!(preprocess("# nothing here").unwrap_err(), CdlError::EmptyInput);
        assert_eq!(preprocess("/* nothing */").unwrap_err(), CdlError::EmptyInput);
    }

    #[test]
    fn test_input_too_long_fails() {
        let long = "a".repeat(5001);
        match preprocess(&long).unwrap_err() {
            CdlError::InputTooLong { got, limit } => {
                assert_eq!(got, 5001);
                assert_eq!(limit, 5000);
            }
            other => panic!("expected InputTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_input_at_limit_passes() {
        // 5000 characters of valid-enough text must not trip the cap.
        let mut cdl = String::from("cubic[m3m]:{100}");
        cdl.push_str(&" ".repeat(5000 - cdl.len()));
        assert!(preprocess(&cdl).is_ok());
    }
}
