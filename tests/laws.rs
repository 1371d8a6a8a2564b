use proptest::prelude::*;

use nibble::ParseOutcome::Matched;
use nibble::parser::char::{number, string};
use nibble::{Parser, many, many1, optional, sep_by, sep_by1, token};

proptest! {
    #[test]
    fn optional_never_fails(input in "\\PC*") {
        let p = optional(token('a'));
        prop_assert!(p.run(input.as_str()).is_match());
    }

    #[test]
    fn choice_equals_whichever_branch_applies(input in "a?b?c?") {
        // "ab" overlaps with "a": when the longer literal fails part way in,
        // the shorter one must still see the whole input
        let or_outcome = string("ab").or(string("a")).run(input.as_str());
        if string("ab").run(input.as_str()).is_match() {
            prop_assert_eq!(or_outcome, string("ab").run(input.as_str()));
        } else {
            prop_assert_eq!(or_outcome, string("a").run(input.as_str()));
        }
    }

    #[test]
    fn map_identity_changes_nothing(input in "\\PC*") {
        let plain = token('x');
        let mapped = token('x').map(|c: char| c);
        prop_assert_eq!(plain.run(input.as_str()), mapped.run(input.as_str()));
    }

    #[test]
    fn number_round_trips(n in any::<u32>(), suffix in "[a-z ][a-z ]*") {
        let input = format!("{}{}", n, suffix);
        prop_assert_eq!(
            number().run(input.as_str()),
            Matched(i64::from(n), suffix.as_str())
        );
    }

    #[test]
    fn negative_number_round_trips(n in 1..=i64::from(u32::MAX)) {
        let input = format!("-{}", n);
        prop_assert_eq!(number().run(input.as_str()), Matched(-n, ""));
    }

    #[test]
    fn zero_or_more_never_fails(input in "\\PC*") {
        let p = many::<Vec<_>, _>(token('a'));
        prop_assert!(p.run(input.as_str()).is_match());
        let p = sep_by::<Vec<_>, _, _>(token('a'), token(','));
        prop_assert!(p.run(input.as_str()).is_match());
    }

    #[test]
    fn one_or_more_agrees_with_zero_or_more(input in "a{0,4}b?") {
        let zero = many::<Vec<_>, _>(token('a')).run(input.as_str());
        let one = many1::<Vec<_>, _>(token('a')).run(input.as_str());
        match zero {
            Matched(ref items, _) if items.is_empty() => prop_assert!(!one.is_match()),
            _ => prop_assert_eq!(zero, one),
        }
    }

    #[test]
    fn separated_remainder_is_a_suffix(input in "[a,]{0,8}") {
        let p = sep_by1::<Vec<_>, _, _>(token('a'), token(','));
        if let Matched(items, rest) = p.run(input.as_str()) {
            prop_assert!(!items.is_empty());
            prop_assert!(input.ends_with(rest));
            // a matched separator is never left consumed without its element
            prop_assert!(!rest.is_empty() || !input.ends_with(','));
        }
    }
}
