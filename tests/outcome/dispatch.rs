use outcome_rail::Outcome;

#[test]
fn test_if_accepted_receives_none_for_empty() {
    let mut seen = Vec::new();

    let _ = Outcome::<i32, &str>::accept(1).if_accepted(|v| seen.push(v.copied()));
    let _ = Outcome::<i32, &str>::empty().if_accepted(|v| seen.push(v.copied()));
    let _ = Outcome::<i32, &str>::reject("e").if_accepted(|v| seen.push(v.copied()));

    assert_eq!(seen, vec![Some(1), None]);
}

#[test]
fn test_if_rejected_only_sees_errors() {
    let mut errors = Vec::new();

    let returned = Outcome::<i32, &str>::reject("disk full").if_rejected(|e| errors.push(*e));
    let _ = Outcome::<i32, &str>::accept(2).if_rejected(|e| errors.push(*e));
    let _ = Outcome::<i32, &str>::empty().if_rejected(|e| errors.push(*e));

    assert_eq!(errors, vec!["disk full"]);
    assert_eq!(returned, Outcome::Rejected("disk full"));
}

#[test]
fn test_then_calls_exactly_one_branch() {
    let mut accepted = 0;
    let mut rejected = 0;

    for outcome in [
        Outcome::<i32, &str>::accept(1),
        Outcome::empty(),
        Outcome::reject("e"),
    ] {
        let _ = outcome.then(|_| accepted += 1, |_| rejected += 1);
    }

    assert_eq!(accepted, 2);
    assert_eq!(rejected, 1);
}

#[test]
fn test_chained_handlers_observe_the_same_outcome() {
    let mut log = Vec::new();

    let outcome = Outcome::<i32, &str>::accept(3)
        .if_accepted(|v| log.push(format!("value {v:?}")))
        .if_rejected(|e| log.push(format!("error {e}")))
        .map(|v| v * 10);

    assert_eq!(outcome, Outcome::Accepted(30));
    assert_eq!(log, vec!["value Some(3)".to_string()]);
}

#[test]
fn test_accept_or_else_substitutes_fallback_for_rejection() {
    let mut seen = Vec::new();

    let _ = Outcome::<i32, &str>::accept(1).accept_or_else(|v| seen.push(v.copied()), 0);
    let _ = Outcome::<i32, &str>::empty().accept_or_else(|v| seen.push(v.copied()), 0);
    let _ = Outcome::<i32, &str>::reject("e").accept_or_else(|v| seen.push(v.copied()), 0);

    assert_eq!(seen, vec![Some(1), None, Some(0)]);
}

#[test]
fn test_accept_or_else_throw_raises_without_calling_consumer() {
    let mut calls = 0;

    let raised = Outcome::<i32, &str>::reject("denied").accept_or_else_throw(|_| calls += 1);
    assert_eq!(raised, Err("denied"));
    assert_eq!(calls, 0);

    let passed = Outcome::<i32, &str>::empty().accept_or_else_throw(|v| {
        assert!(v.is_none());
        calls += 1;
    });
    assert_eq!(passed, Ok(Outcome::Empty));
    assert_eq!(calls, 1);
}

#[test]
fn test_accept_or_else_throw_composes_with_question_mark() {
    fn total(outcomes: &[Outcome<u32, &'static str>]) -> Result<u32, &'static str> {
        let mut sum = 0;
        for outcome in outcomes {
            let _ = outcome.accept_or_else_throw(|v| sum += v.copied().unwrap_or(0))?;
        }
        Ok(sum)
    }

    assert_eq!(total(&[Outcome::accept(2), Outcome::empty(), Outcome::accept(5)]), Ok(7));
    assert_eq!(total(&[Outcome::accept(2), Outcome::reject("bad row")]), Err("bad row"));
}

#[test]
#[should_panic(expected = "rejected outcome: \"fatal\"")]
fn test_accept_or_else_throw_runtime_panics_on_rejection() {
    let _ = Outcome::<i32, &str>::reject("fatal").accept_or_else_throw_runtime(|_| {});
}

#[test]
fn test_accept_or_else_throw_runtime_calls_consumer_otherwise() {
    let mut seen = None;
    let _ = Outcome::<i32, &str>::accept(8).accept_or_else_throw_runtime(|v| seen = v.copied());
    assert_eq!(seen, Some(8));
}

#[cfg(feature = "std")]
#[test]
fn test_accept_or_log_consumes_only_non_failures() {
    let mut seen = Vec::new();

    let _ = Outcome::<i32, &str>::accept(4).accept_or_log(|v| seen.push(v.copied()));
    let _ = Outcome::<i32, &str>::empty().accept_or_log(|v| seen.push(v.copied()));
    let logged = Outcome::<i32, &str>::reject("lost").accept_or_log(|v| seen.push(v.copied()));

    assert_eq!(seen, vec![Some(4), None]);
    assert!(logged.is_rejected());
}
