#![cfg(test)]
use selsort_common::error::InputError;
use selsort_common::input::{RandomSpec, Sequence, random, read_sequence};
use selsort_core::{is_sorted, selection_sort};

#[test]
fn parsed_text_sorts() -> anyhow::Result<()> {
    let sequence: Sequence = "5, 3, 6\n2 10".parse()?;

    let mut values = sequence.into_values();
    assert_eq!(selection_sort(&mut values), [2, 3, 5, 6, 10]);

    Ok(())
}

#[test]
fn piped_input_sorts() -> anyhow::Result<()> {
    let piped: &[u8] = b"-2\n-5\n0\n3\n";

    let mut values = read_sequence(piped)?.into_values();
    assert_eq!(selection_sort(&mut values), [-5, -2, 0, 3]);

    Ok(())
}

#[test]
fn blank_input_sorts_to_nothing() -> anyhow::Result<()> {
    let piped: &[u8] = b"  \n";

    let mut values = read_sequence(piped)?.into_values();
    assert!(selection_sort(&mut values).is_empty());

    Ok(())
}

#[test]
fn bad_token_is_reported() {
    let piped: &[u8] = b"1 2 three";

    let err = read_sequence(piped).unwrap_err();
    let input_err = err.downcast_ref::<InputError>();

    assert!(
        matches!(input_err, Some(InputError::InvalidInteger { token, .. }) if token == "three"),
        "unexpected error: {err:?}"
    );
}

#[test]
fn random_sequence_sorts() -> anyhow::Result<()> {
    let spec = RandomSpec {
        count: 300,
        min: -1_000,
        max: 1_000,
        seed: Some(2024),
    };

    let mut values = random::generate(&spec)?;
    let result = selection_sort(&mut values);

    assert_eq!(result.len(), 300);
    assert!(is_sorted(&result));
    assert!(values.is_empty());

    Ok(())
}

#[test]
fn random_bounds_are_validated() {
    let spec = RandomSpec {
        min: 5,
        max: -5,
        ..RandomSpec::default()
    };

    assert_eq!(
        random::generate(&spec),
        Err(InputError::InvalidBounds { min: 5, max: -5 })
    );
}
