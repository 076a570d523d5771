#[cfg(test)]
mod tests_tail_modifiers {
    use super::super::parse_tree::{CrystalAxis, ModificationKind};
    use super::super::tail_modifiers::extract;

    #[test]
    fn test_twin_clause() {
        let tail = extract(" twin(spinel) ");
        assert_eq!(tail.twin.unwrap().law, "spinel");
    }

    #[test]
    fn test_twin_clause_case_insensitive() {
        let tail = extract("TWIN( Carlsbad )");
        assert_eq!(tail.twin.unwrap().law, "Carlsbad");
    }

    #[test]
    fn test_modifications_in_text_order() {
        let tail = extract("elongate(c:2) flatten(a:1.5) scale(b:0.5)");
        let kinds: Vec<_> = tail.modifications.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ModificationKind::Elongate,
                ModificationKind::Flatten,
                ModificationKind::Scale
            ]
        );
        assert_eq!(tail.modifications[0].axis, CrystalAxis::C);
        assert_eq!(tail.modifications[1].axis, CrystalAxis::A);
        assert_eq!(tail.modifications[2].factor, 0.5);
    }

    #[test]
    fn test_modification_case_insensitive() {
        let tail = extract("ELONGATE(C:2.5)");
        assert_eq!(tail.modifications.len(), 1);
        assert_eq!(tail.modifications[0].axis, CrystalAxis::C);
        assert_eq!(tail.modifications[0].factor, 2.5);
    }

    #[test]
    fn test_zero_factor_dropped_with_warning() {
        let tail = extract("elongate(c:0)");
        assert!(tail.modifications.is_empty());
        assert_eq!(tail.warnings.len(), 1);
    }

    #[test]
    fn test_malformed_factor_dropped_with_warning() {
        let tail = extract("scale(a:1.2.3)");
        assert!(tail.modifications.is_empty());
        assert_eq!(tail.warnings.len(), 1);
    }

    #[test]
    fn test_phenomenon() {
        let tail = extract("phenomenon[asterism] twin(japan)");
        assert_eq!(tail.phenomenon.as_deref(), Some("asterism"));
        assert_eq!(tail.twin.unwrap().law, "japan");
    }

    #[test]
    fn test_empty_tail() {
        let tail = extract("   ");
        assert!(tail.twin.is_none());
        assert!(tail.modifications.is_empty());
        assert!(tail.phenomenon.is_none());
        assert!(tail.warnings.is_empty());
    }
}
