use proptest::prelude::*;

use super::super::convert;
use crate::passthrough::is_inert;
use crate::unicode::{is_joiner, is_sinhala, is_vowel_sign};

fn separators(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_whitespace() || ".,!?".contains(*c))
        .collect()
}

proptest! {
    #[test]
    fn prop_deterministic(input in "[a-zA-Z .,!?0-9@]{0,40}") {
        prop_assert_eq!(convert(&input), convert(&input));
    }

    #[test]
    fn prop_separators_preserved(
        words in prop::collection::vec("[a-z]{1,8}", 1..6),
        seps in prop::collection::vec(prop::sample::select(vec![" ", ", ", ". ", "! ", "? ", "  "]), 5),
    ) {
        let mut input = String::new();
        for (i, w) in words.iter().enumerate() {
            input.push_str(w);
            if i + 1 < words.len() {
                input.push_str(seps[i]);
            }
        }
        input.push('.');
        let output = convert(&input);
        prop_assert_eq!(separators(&output), separators(&input));
    }

    #[test]
    fn prop_inert_input_is_empty(input in "[ \t0-9@#$%^&*+=<>/\\\\|~]{0,30}") {
        prop_assert!(is_inert(&input));
        prop_assert_eq!(convert(&input), "");
    }

    #[test]
    fn prop_never_partial(word in "[a-zA-Z0-9àéïöü]{1,12}") {
        // Either the whole word is converted or it comes back as typed.
        let output = convert(&word);
        let all_sinhala = output.chars().all(|c| is_sinhala(c) || is_joiner(c));
        prop_assert!(all_sinhala || output == word, "{:?} -> {:?}", word, output);
    }

    #[test]
    fn prop_vowel_signs_follow_letters(input in "[a-zA-Z0-9 ]{0,30}") {
        let output = convert(&input);
        let mut prev: Option<char> = None;
        for c in output.chars() {
            if is_vowel_sign(c) {
                prop_assert!(prev.is_some_and(is_sinhala), "{:?} -> {:?}", input, output);
            }
            prev = Some(c);
        }
    }
}
