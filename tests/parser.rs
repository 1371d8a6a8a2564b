use nibble::ParseOutcome::{Matched, NoMatch};
use nibble::parser::char::{char, digit, letter, number, space, string, word};
use nibble::{
    Parser, any, apply, many, many1, optional, run_state, sep_by, sep_by1, token, tokens,
};

#[test]
fn digit_takes_one_character() {
    assert_eq!(digit().run("123abc"), Matched(1, "23abc"));
    assert_eq!(digit().run("abc"), NoMatch);
    assert_eq!(digit().run(""), NoMatch);
}

#[test]
fn number_takes_the_whole_run() {
    assert_eq!(number().run("123abc"), Matched(123, "abc"));
    assert_eq!(number().run("-123abc"), Matched(-123, "abc"));
    assert_eq!(number().run("x123"), NoMatch);
}

#[test]
fn oversized_number_saturates() {
    assert_eq!(
        number().run("99999999999999999999 rest"),
        Matched(i64::MAX, " rest")
    );
    assert_eq!(
        number().run("-99999999999999999999"),
        Matched(-i64::MAX, "")
    );
}

#[test]
fn numbers_separated_by_spaces() {
    let numbers = sep_by::<Vec<_>, _, _>(number(), char(' '));
    assert_eq!(
        numbers.run("123 321 234 abc"),
        Matched(vec![123, 321, 234], " abc")
    );
    assert_eq!(numbers.run("123 321"), Matched(vec![123, 321], ""));
    assert_eq!(numbers.run("12345"), Matched(vec![12345], ""));
    assert_eq!(numbers.run(""), Matched(vec![], ""));
    assert_eq!(numbers.run("abc 123"), Matched(vec![], "abc 123"));
}

#[test]
fn at_least_one_number() {
    let numbers = sep_by1::<Vec<_>, _, _>(number(), char(' '));
    assert_eq!(numbers.run("123 abc"), Matched(vec![123], " abc"));
    assert_eq!(numbers.run("abc 123"), NoMatch);
}

#[test]
fn literal_text_leaves_the_tail() {
    assert_eq!(string("abc1").run("abc123"), Matched("abc1", "23"));
    assert_eq!(string("abc1").run("abc"), NoMatch);
    assert_eq!(string("abc1").run("abd123"), NoMatch);
}

#[test]
fn ordered_choice_prefers_the_left_branch() {
    let p = string("a").or(string("BC"));
    assert_eq!(p.run("BCD"), Matched("BC", "D"));
    assert_eq!(p.run("abc"), Matched("a", "bc"));
    assert_eq!(p.run("xyz"), NoMatch);
}

#[derive(Debug, PartialEq)]
struct Entry {
    number: i64,
    word: String,
}

fn entry(number: i64) -> impl FnOnce(String) -> Entry {
    move |word| Entry { number, word }
}

#[test]
fn building_a_record_applicatively() {
    let p = apply(
        string("test: ").with(number()).skip(string(", ")).map(entry),
        word(),
    );
    assert_eq!(
        p.run("test: 123, hey875"),
        Matched(
            Entry {
                number: 123,
                word: "hey".to_string(),
            },
            "875",
        )
    );
    assert_eq!(p.run("test: 123 hey875"), NoMatch);
}

#[test]
fn slices_parse_like_text() {
    let input: &[u8] = &[1, 1, 2, 5];
    let ones = many::<Vec<_>, _>(token(1u8));
    assert_eq!(ones.run(input), Matched(vec![1, 1], &[2, 5][..]));

    let literal = [1u8, 1, 2];
    let prefix = tokens(literal.iter().cloned());
    assert_eq!(prefix.run(input), Matched((), &[5][..]));
}

#[test]
fn bind_decides_the_next_parser() {
    // an element followed by its own repetition
    let doubled = any().then(token);
    assert_eq!(doubled.run("aab"), Matched('a', "b"));
    assert_eq!(doubled.run("abb"), NoMatch);
    assert_eq!(doubled.run("a"), NoMatch);
}

#[test]
fn state_counts_parsed_tokens() {
    let counted = many1::<String, _>(letter().map_with(|c: char, count: &mut usize| {
        *count += 1;
        c
    }));
    assert_eq!(
        run_state(counted, "hey875", 0),
        Matched(("hey".to_string(), 3), "875")
    );
}

#[test]
fn state_sums_across_separators() {
    let spaced = sep_by::<Vec<_>, _, _>(
        number().map_with(|n: i64, sum: &mut i64| {
            *sum += n;
            n
        }),
        space(),
    );
    assert_eq!(
        run_state(spaced, "1 2 3 abc", 0),
        Matched((vec![1, 2, 3], 6), " abc")
    );
}

#[test]
fn state_changes_in_a_failed_branch_are_discarded() {
    // the left branch records its digit before the trailing 'x' fails it;
    // backtracking restores the state along with the input
    let left = (
        digit().map_with(|d: i64, seen: &mut Vec<i64>| {
            seen.push(d);
            d
        }),
        token('x'),
    )
        .map(|(d, _)| d);
    let p = left.or(digit().map_with(|d: i64, _: &mut Vec<i64>| d));
    assert_eq!(run_state(&p, "1y", Vec::new()), Matched((1, vec![]), "y"));
    assert_eq!(run_state(&p, "1x", Vec::new()), Matched((1, vec![1]), ""));
}

#[test]
fn optional_wraps_without_consuming_on_absence() {
    let p = optional(string("ab"));
    assert_eq!(p.run("abc"), Matched(Some("ab"), "c"));
    assert_eq!(p.run("ba"), Matched(None, "ba"));
}

#[test]
fn many_on_words() {
    assert_eq!(
        many::<Vec<_>, _>(word().skip(optional(space()))).run("hey you 875"),
        Matched(vec!["hey".to_string(), "you".to_string()], "875")
    );
}
