use outcome_rail::{Outcome, OutcomeError};

#[test]
fn test_accept_is_accepted_and_present() {
    let outcome = Outcome::<&str, &str>::accept("value");

    assert!(outcome.is_accepted());
    assert!(outcome.is_present());
    assert!(!outcome.is_empty());
    assert!(!outcome.is_rejected());
    assert_eq!(outcome.get(), Ok(Some(&"value")));
}

#[test]
fn test_absent_value_is_empty_not_rejected() {
    let outcome = Outcome::<i32, &str>::from_option(None);

    assert!(outcome.is_empty());
    assert!(outcome.is_accepted());
    assert!(!outcome.is_present());
    assert!(!outcome.is_rejected());
}

#[test]
fn test_reject_holds_error() {
    let outcome = Outcome::<i32, &str>::reject("timeout");

    assert!(outcome.is_rejected());
    assert!(!outcome.is_accepted());
    assert_eq!(outcome.error(), Ok(&"timeout"));
}

#[test]
fn test_try_reject_refuses_absent_error() {
    let refused = Outcome::<i32, &str>::try_reject(None);
    assert!(matches!(refused, Err(OutcomeError::InvalidArgument { .. })));

    let rejected = Outcome::<i32, &str>::try_reject(Some("boom"));
    assert_eq!(rejected, Ok(Outcome::Rejected("boom")));
}

#[test]
fn test_exactly_one_state_holds() {
    let outcomes = [
        Outcome::<i32, &str>::accept(1),
        Outcome::empty(),
        Outcome::reject("e"),
    ];

    for outcome in outcomes {
        let states = [outcome.is_present(), outcome.is_empty(), outcome.is_rejected()];
        assert_eq!(states.iter().filter(|held| **held).count(), 1, "{outcome:?}");
    }
}

#[test]
fn test_empty_instances_are_interchangeable() {
    let first = Outcome::<String, String>::empty();
    let second = Outcome::<String, String>::from_option(None);

    assert_eq!(first, second);
    assert_eq!(first, Outcome::default());
    assert_eq!(core::mem::size_of::<Outcome<(), ()>>(), 1);
}

#[test]
fn test_from_result_classifies_value_or_error() {
    assert!(Outcome::<i32, &str>::from_result(Err("bad")).is_rejected());
    assert!(Outcome::<i32, &str>::from_result(Ok(None)).is_empty());
    assert_eq!(
        Outcome::<i32, &str>::from_result(Ok(Some(3))),
        Outcome::Accepted(3)
    );
}

#[test]
fn test_accepting_an_error_value_is_allowed() {
    let outcome = Outcome::<std::io::Error, ()>::accept(std::io::Error::other("kept as data"));

    assert!(outcome.is_present());
    assert!(!outcome.is_rejected());
}

#[test]
fn test_capture_converts_failure_into_rejection() {
    let failed: Outcome<u8, std::num::ParseIntError> = Outcome::capture(|| "256".parse());
    assert!(failed.is_rejected());

    let parsed: Outcome<u8, std::num::ParseIntError> = Outcome::capture(|| "255".parse());
    assert_eq!(parsed, Outcome::Accepted(255));
}

#[test]
fn test_capture_option_yields_empty_for_none() {
    let outcome: Outcome<i32, &str> = Outcome::capture_option(|| Ok(None));
    assert_eq!(outcome, Outcome::empty());

    let outcome: Outcome<i32, &str> = Outcome::capture_option(|| Ok(Some(1)));
    assert_eq!(outcome, Outcome::accept(1));
}

#[test]
#[should_panic(expected = "bug in capability")]
fn test_capture_does_not_swallow_panics() {
    let _: Outcome<i32, &str> = Outcome::capture(|| panic!("bug in capability"));
}

#[test]
fn test_require_some_rejects_missing_value() {
    let missing = Outcome::<i32, OutcomeError>::require_some(None);
    assert_eq!(missing, Outcome::Rejected(OutcomeError::MissingValue));

    let present = Outcome::<i32, OutcomeError>::require_some(Some(9));
    assert_eq!(present, Outcome::Accepted(9));
}

#[test]
fn test_safe_cast_captures_mismatch() {
    let hit = Outcome::<&str, OutcomeError>::safe_cast("a string");
    assert_eq!(hit, Outcome::Accepted("a string"));

    let miss = Outcome::<&str, OutcomeError>::safe_cast(1.5_f64);
    match miss {
        Outcome::Rejected(OutcomeError::TypeMismatch { expected, found }) => {
            assert_eq!(expected, "&str");
            assert_eq!(found, "f64");
        },
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_value_type_name_reports_held_type() {
    assert_eq!(Outcome::<u64, ()>::accept(1).value_type_name(), Some("u64"));
    assert_eq!(Outcome::<u64, ()>::empty().value_type_name(), None);
    assert_eq!(Outcome::<u64, ()>::reject(()).value_type_name(), None);
}
