use std::num::{ParseIntError, TryFromIntError};

use outcome_rail::traits::{mapper, try_mapper, wrap, wrap_option, wrap_supplier};
use outcome_rail::{Outcome, OutcomeIterExt};

#[test]
fn test_wrap_turns_errors_into_rejections() {
    let parse = wrap(|raw: &str| raw.parse::<i32>());

    assert_eq!(parse("42"), Outcome::Accepted(42));
    assert!(parse("forty-two").is_rejected());
}

#[test]
fn test_wrap_option_turns_none_into_empty() {
    let find = wrap_option(|id: u32| -> Result<Option<&'static str>, &'static str> {
        match id {
            0 => Err("reserved id"),
            1 => Ok(Some("root")),
            _ => Ok(None),
        }
    });

    assert_eq!(find(1), Outcome::Accepted("root"));
    assert_eq!(find(2), Outcome::Empty);
    assert_eq!(find(0), Outcome::Rejected("reserved id"));
}

#[test]
fn test_wrap_supplier_runs_on_every_call() {
    let mut calls = 0;
    let mut next = wrap_supplier(|| -> Result<u32, &'static str> {
        calls += 1;
        if calls % 2 == 0 {
            Err("even")
        } else {
            Ok(calls)
        }
    });

    assert_eq!(next(), Outcome::Accepted(1));
    assert_eq!(next(), Outcome::Rejected("even"));
    assert_eq!(next(), Outcome::Accepted(3));
}

#[test]
fn test_mapper_lifts_plain_functions() {
    let mapped: Vec<_> = vec![Outcome::<i32, &str>::accept(2), Outcome::reject("e")]
        .into_iter()
        .map(mapper(|v: i32| v.pow(2)))
        .collect();

    assert_eq!(mapped, vec![Outcome::Accepted(4), Outcome::Rejected("e")]);
}

#[derive(Debug, PartialEq)]
enum ConvError {
    Parse(ParseIntError),
    Overflow(TryFromIntError),
}

impl From<ParseIntError> for ConvError {
    fn from(error: ParseIntError) -> Self {
        ConvError::Parse(error)
    }
}

impl From<TryFromIntError> for ConvError {
    fn from(error: TryFromIntError) -> Self {
        ConvError::Overflow(error)
    }
}

#[test]
fn test_try_mapper_chains_fallible_steps() {
    let split = ["7", "07x", "300"]
        .into_iter()
        .map(wrap(|raw: &str| raw.parse::<u16>().map_err(ConvError::from)))
        .map(try_mapper(|n: u16| u8::try_from(n)))
        .map(mapper(|n: u8| n * 2))
        .partition_outcomes();

    assert_eq!(split.values().copied().collect::<Vec<_>>(), vec![14]);

    let errors: Vec<&ConvError> = split.errors().collect();
    assert!(matches!(errors[0], ConvError::Parse(_)));
    assert!(matches!(errors[1], ConvError::Overflow(_)));
}
