use outcome_rail::{Outcome, OutcomeIterExt, Partition};

fn sample() -> Vec<Outcome<i32, &'static str>> {
    vec![
        Outcome::accept(1),
        Outcome::reject("err1"),
        Outcome::empty(),
        Outcome::accept(2),
        Outcome::reject("err2"),
        Outcome::accept(3),
    ]
}

#[test]
fn test_split_preserves_relative_order() {
    let split = sample().into_iter().partition_outcomes();

    assert_eq!(split.values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(split.errors().copied().collect::<Vec<_>>(), vec!["err1", "err2"]);
}

#[test]
fn test_empty_outcomes_are_dropped() {
    let split: Partition<i32, &str> = vec![Outcome::empty(), Outcome::empty()]
        .into_iter()
        .collect();

    assert!(split.is_empty());
    assert_eq!(split.value_count(), 0);
    assert_eq!(split.error_count(), 0);
}

#[test]
fn test_counts_add_up_to_non_empty_inputs() {
    let input = sample();
    let non_empty = input.iter().filter(|o| !o.is_empty()).count();
    let split: Partition<_, _> = input.into_iter().collect();

    assert_eq!(split.value_count() + split.error_count(), non_empty);
    assert!(split.has_errors());
}

#[test]
fn test_len_counts_values_and_errors() {
    let split = sample().into_iter().partition_outcomes();

    assert_eq!(split.len(), 5);
    assert_eq!(split.len(), split.value_count() + split.error_count());
    assert_eq!(Partition::<i32, &str>::new().len(), 0);
}

#[test]
fn test_combine_matches_sequential_pass_at_every_split_point() {
    let input = sample();
    let sequential: Partition<_, _> = input.iter().copied().collect();

    for mid in 0..=input.len() {
        let (left, right) = input.split_at(mid);
        let left: Partition<_, _> = left.iter().copied().collect();
        let right: Partition<_, _> = right.iter().copied().collect();

        assert_eq!(left.combine(right), sequential, "split at {mid}");
    }
}

#[test]
fn test_combine_is_associative_with_identity() {
    let input = sample();
    let chunk = |range: std::ops::Range<usize>| -> Partition<i32, &'static str> {
        input[range].iter().copied().collect()
    };

    let a = chunk(0..2);
    let b = chunk(2..4);
    let c = chunk(4..6);

    let left = a.clone().combine(b.clone()).combine(c.clone());
    let right = a.clone().combine(b.combine(c));
    assert_eq!(left, right);

    assert_eq!(Partition::new().combine(a.clone()), a);
    assert_eq!(a.clone().combine(Partition::new()), a);
}

#[test]
fn test_scoped_threads_merge_to_sequential_result() {
    let input: Vec<Outcome<u32, String>> = (0..64)
        .map(|n| match n % 5 {
            0 => Outcome::reject(format!("bad {n}")),
            1 => Outcome::empty(),
            _ => Outcome::accept(n),
        })
        .collect();

    let sequential: Partition<_, _> = input.iter().cloned().collect();

    let merged = std::thread::scope(|scope| {
        let handles: Vec<_> = input
            .chunks(10)
            .map(|chunk| scope.spawn(move || chunk.iter().cloned().collect::<Partition<_, _>>()))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .fold(Partition::new(), Partition::combine)
    });

    assert_eq!(merged, sequential);
}

#[test]
fn test_append_moves_items_out_of_other() {
    let mut first: Partition<i32, &str> = vec![Outcome::accept(1)].into_iter().collect();
    let mut second: Partition<i32, &str> = vec![Outcome::reject("x"), Outcome::accept(2)]
        .into_iter()
        .collect();

    first.append(&mut second);

    assert!(second.is_empty());
    assert_eq!(first.into_vecs(), (vec![1, 2], vec!["x"]));
}

#[test]
fn test_push_helpers_and_extend_fill_buffers() {
    let mut split = Partition::<i32, &str>::default();
    split.push_value(10);
    split.push_error("late");
    split.extend([Outcome::accept(11), Outcome::empty()]);

    let (values, errors) = split.into_parts();
    assert_eq!(values.collect::<Vec<_>>(), vec![10, 11]);
    assert_eq!(errors.collect::<Vec<_>>(), vec!["late"]);
}

#[test]
fn test_streams_are_independently_consumable() {
    let split = sample().into_iter().partition_outcomes();

    let errors = split.clone().into_errors().collect::<Vec<_>>();
    let values = split.into_values().collect::<Vec<_>>();

    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(errors, vec!["err1", "err2"]);
}

#[test]
fn test_large_inputs_spill_past_inline_capacity() {
    let split: Partition<usize, usize> = (0..100)
        .map(|n| if n % 2 == 0 { Outcome::accept(n) } else { Outcome::reject(n) })
        .collect();

    assert_eq!(split.value_count(), 50);
    assert_eq!(split.error_count(), 50);
    assert_eq!(split.values().next(), Some(&0));
    assert_eq!(split.errors().last(), Some(&99));
}

#[test]
fn test_iterator_helpers_filter_by_state() {
    assert_eq!(sample().into_iter().values().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(sample().into_iter().errors().count(), 2);
    assert_eq!(
        sample().into_iter().options().collect::<Vec<_>>(),
        vec![Some(1), None, None, Some(2), None, Some(3)]
    );
}

#[test]
fn test_map_outcomes_keeps_failures_in_place() {
    let mapped: Vec<_> = sample().into_iter().map_outcomes(|v| v * 100).collect();

    assert_eq!(mapped[0], Outcome::Accepted(100));
    assert_eq!(mapped[1], Outcome::Rejected("err1"));
    assert_eq!(mapped[2], Outcome::Empty);
}

#[test]
fn test_try_map_outcomes_captures_each_failure() {
    let split = ["3", "x", "12", "-1"]
        .into_iter()
        .map(Outcome::<&str, std::num::ParseIntError>::accept)
        .try_map_outcomes(str::parse::<u8>)
        .partition_outcomes();

    assert_eq!(split.values().copied().collect::<Vec<_>>(), vec![3, 12]);
    assert_eq!(split.error_count(), 2);
}

#[cfg(feature = "serde")]
#[test]
fn test_partition_survives_json() {
    let split = sample()
        .into_iter()
        .map(|o| o.map_err(String::from))
        .partition_outcomes();
    let json = serde_json::to_string(&split).unwrap();
    let decoded: Partition<i32, String> = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, split);
}
