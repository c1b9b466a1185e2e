use json_map_unpack as jmu;
use jmu::{Context, DotNotation, Element, ErrorCollector, Path, PathStyle};
use proptest::prelude::*;

fn element() -> impl Strategy<Value = Element> {
    prop_oneof![
        "[a-z0-9_]{1,8}".prop_map(Element::Key),
        any::<i64>().prop_map(Element::Index),
    ]
}

fn path_of(elems: &[Element]) -> Path {
    Path::with_elements(std::sync::Arc::new(DotNotation), elems.to_vec())
}

proptest! {
    #[test]
    fn format_then_parse_returns_same_elements(
        first in "[a-z0-9_]{1,8}",
        rest in prop::collection::vec(element(), 0..6),
    ) {
        let mut elems = vec![Element::Key(first)];
        elems.extend(rest);
        let text = DotNotation.format(&elems);
        prop_assert_eq!(DotNotation.parse(&text), Ok(elems));
    }

    #[test]
    fn index_sequences_round_trip(indices in prop::collection::vec(any::<i64>(), 1..8)) {
        let elems: Vec<Element> = indices.into_iter().map(Element::Index).collect();
        let text = DotNotation.format(&elems);
        prop_assert_eq!(DotNotation.parse(&text), Ok(elems));
    }

    #[test]
    fn leading_dot_is_optional(s in "[a-z0-9_]{1,8}(\\.[a-z0-9_]{1,8}){0,3}") {
        prop_assert_eq!(DotNotation.parse(&format!(".{s}")), DotNotation.parse(&s));
    }

    #[test]
    fn plain_text_is_a_single_key(s in "[^.\\[\\]\\\\]{1,12}") {
        let expected = Ok(vec![Element::Key(s.clone())]);
        prop_assert_eq!(DotNotation.parse(&s), expected.clone());
        prop_assert_eq!(DotNotation.parse(&format!(".{s}")), expected);
    }

    #[test]
    fn pop_n_clamps_at_empty(elems in prop::collection::vec(element(), 0..8), n in 0usize..16) {
        let mut p = path_of(&elems);
        p.pop_n(n);
        prop_assert_eq!(p.len(), elems.len().saturating_sub(n));
        prop_assert_eq!(p.elements(), &elems[..p.len()]);
    }

    #[test]
    fn clones_are_independent(elems in prop::collection::vec(element(), 1..8), extra in element()) {
        let original = path_of(&elems).with_filename("f.json");
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);
        copy.pop().add(extra);
        copy.set_filename(None);
        prop_assert_eq!(original.elements(), &elems[..]);
        prop_assert_eq!(original.filename(), Some("f.json"));
    }

    #[test]
    fn error_with_leaves_path_length(
        elems in prop::collection::vec(element(), 0..6),
        extra in element(),
    ) {
        let mut collected = ErrorCollector::new();
        {
            let mut ctx = Context::with_handler(&mut collected);
            for e in &elems {
                ctx.path_mut().add(e.clone());
            }
            ctx.error_with("boom", extra.clone());
            prop_assert_eq!(ctx.path().len(), elems.len());
            prop_assert_eq!(ctx.check(Ok::<_, jmu::Error>(())), Some(()));
            prop_assert_eq!(ctx.error_count(), 1);
        }
        let (path, _) = &collected.records()[0];
        prop_assert_eq!(path.len(), elems.len() + 1);
        prop_assert_eq!(path.last(), Some(&extra));
    }
}
