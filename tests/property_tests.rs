//! Property-based tests for the argument grammar.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated token sequences.

use proptest::prelude::*;

use hookdialog::core::grammar::{parse, GrammarError};
use hookdialog::core::request::{Icon, Request};

/// Strategy for arbitrary field text, including flag-like and empty strings.
fn field() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,12}",
        Just("--width".to_string()),
        Just(String::new()),
        Just("Ünïcödé ✓".to_string()),
    ]
}

/// Strategy for non-empty button and option labels.
fn label() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,12}"
}

fn six_fields() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(field(), 6)
}

fn tokens(kind: &str, positional: &[String], rest: &[String]) -> Vec<String> {
    std::iter::once(kind.to_string())
        .chain(positional.iter().cloned())
        .chain(rest.iter().cloned())
        .collect()
}

proptest! {
    #[test]
    fn message_positionals_are_verbatim(positional in six_fields()) {
        let Request::Message(req) = parse(&tokens("message", &positional, &[])).unwrap() else {
            panic!("expected a message request");
        };
        prop_assert_eq!(req.header.app_icon, Icon::from_token(&positional[0]));
        prop_assert_eq!(req.header.icon, Icon::from_token(&positional[1]));
        prop_assert_eq!(&req.header.title, &positional[2]);
        prop_assert_eq!(&req.header.body, &positional[3]);
        prop_assert_eq!(&req.header.ok_label, &positional[4]);
        prop_assert_eq!(&req.header.cancel_label, &positional[5]);
        prop_assert!(req.extra_buttons.is_empty());
    }

    #[test]
    fn options_keyword_fills_list(
        positional in six_fields(),
        names in prop::collection::vec(label(), 1..8),
        default_seed in any::<prop::sample::Index>(),
        multiple in prop_oneof![Just("true".to_string()), "[a-z]{0,5}"],
    ) {
        let default_index = default_seed.index(names.len());
        let mut rest = vec!["--options".to_string(), names.len().to_string()];
        rest.extend(names.iter().cloned());
        rest.push(default_index.to_string());
        rest.push(multiple.clone());

        let Request::Options(req) = parse(&tokens("options", &positional, &rest)).unwrap() else {
            panic!("expected an options request");
        };
        prop_assert_eq!(&req.options, &names);
        prop_assert_eq!(req.default_index, default_index);
        prop_assert_eq!(req.allow_multiple, multiple == "true");
    }

    #[test]
    fn extra_buttons_keep_declared_order(
        positional in six_fields(),
        names in prop::collection::vec(label(), 0..6),
    ) {
        let mut rest = vec!["--extra-buttons".to_string(), names.len().to_string()];
        rest.extend(names.iter().cloned());

        let Request::Message(req) = parse(&tokens("message", &positional, &rest)).unwrap() else {
            panic!("expected a message request");
        };
        prop_assert_eq!(req.extra_buttons, names);
    }

    #[test]
    fn short_input_is_missing_positional(
        kind in prop_oneof![Just("message"), Just("options")],
        positional in prop::collection::vec(field(), 0..6),
    ) {
        let result = parse(&tokens(kind, &positional, &[]));
        let is_missing = matches!(result, Err(GrammarError::MissingPositionalArgument { .. }));
        prop_assert!(is_missing);
    }

    #[test]
    fn overlong_count_is_a_length_mismatch(
        positional in six_fields(),
        names in prop::collection::vec(label(), 0..4),
        surplus in 1usize..5,
    ) {
        let mut rest = vec![
            "--extra-buttons".to_string(),
            (names.len() + surplus).to_string(),
        ];
        rest.extend(names.iter().cloned());

        let result = parse(&tokens("message", &positional, &rest));
        let is_mismatch = matches!(result, Err(GrammarError::ArrayLengthMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    #[test]
    fn unregistered_keywords_are_rejected(
        positional in six_fields(),
        name in "--[a-z]{1,10}",
    ) {
        prop_assume!(!["--width", "--height", "--extra-buttons"].contains(&name.as_str()));
        let result = parse(&tokens("message", &positional, &[name.clone()]));
        prop_assert_eq!(
            result,
            Err(GrammarError::UnknownKeyword {
                keyword: name,
                kind: hookdialog::core::request::DialogKind::Message,
            })
        );
    }
}
