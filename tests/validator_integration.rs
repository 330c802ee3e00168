//! Integration tests for composing validators over loosely-typed input

use valval::prelude::*;
use valval::testing::{always_fail, always_ok, Probe};
use valval::{all_of, any_of, assert_invalid, assert_valid, assert_violation, record};

fn field<'a>(input: &'a Value, key: &str) -> &'a Value {
    &input.as_record().expect("record input")[key]
}

#[test]
fn test_signup_form() {
    let form = record_of(required_fields(["username", "email", "age"]));
    let username = all_of![
        min_length(3),
        max_length(16),
        matches_pattern("^[a-z0-9_]+$").expect("valid pattern"),
    ];
    let email = matches_pattern(r"^[^@\s]+@[^@\s]+$").expect("valid pattern");
    let age = at_least(13.0).and(less_than(150.0));
    let nickname = nullable_max_length(12);

    let good = record! {
        "username" => "jo_doe",
        "email" => "jo@example.com",
        "age" => 30,
        "nickname" => Value::NullableText(None),
    };
    assert_valid!(form, good);
    assert_valid!(username, *field(&good, "username"));
    assert_valid!(email, *field(&good, "email"));
    assert_valid!(age, *field(&good, "age"));
    assert_valid!(nickname, *field(&good, "nickname"));

    let bad = record! {
        "username" => "Jo",
        "email" => "nope",
        "age" => 12.5,
        "nickname" => Some("a very long nickname"),
    };
    assert_valid!(form, bad);
    assert_eq!(
        username.validate(field(&bad, "username")).unwrap_err().to_string(),
        "length must be 3 or greater"
    );
    assert_eq!(
        email.validate(field(&bad, "email")).unwrap_err().to_string(),
        r"must match the pattern ^[^@\s]+@[^@\s]+$"
    );
    assert_violation!(age, *field(&bad, "age"), Constraint::AtLeast(13.0));
    assert_violation!(nickname, *field(&bad, "nickname"), Constraint::MaxLength(12));

    let err = assert_invalid!(form, record! { "username" => "jo_doe", "age" => 30 });
    assert_eq!(err.to_string(), "field email is required");
}

#[test]
fn test_numeric_bounds_messages() {
    assert_eq!(
        greater_than(10.0).validate(&Value::from(10)).unwrap_err().to_string(),
        "must be greater than 10"
    );
    assert_eq!(
        at_least(5.0).validate(&Value::from(4.9)).unwrap_err().to_string(),
        "must be 5 or greater"
    );
    assert_eq!(
        less_than(0.0).validate(&Value::from(0)).unwrap_err().to_string(),
        "must be less than 0"
    );
    assert_eq!(
        at_most(2.5).validate(&Value::from(3)).unwrap_err().to_string(),
        "must be 2.5 or less"
    );
}

#[test]
fn test_numeric_bounds_boundaries() {
    assert_valid!(at_least(5.0), Value::from(5));
    assert_valid!(at_most(5.0), Value::from(5.0));
    assert_invalid!(greater_than(5.0), Value::from(5));
    assert_invalid!(less_than(5.0), Value::from(5.0));
}

#[test]
fn test_non_numbers_are_type_mismatches() {
    for candidate in [
        Value::from("10"),
        Value::from(true),
        Value::Null,
        Value::from(Some("1")),
        Value::from(vec![1]),
        record! { "n" => 1 },
    ] {
        let err = assert_invalid!(greater_than(0.0), candidate);
        assert!(err.is_type_mismatch(), "{err}");
        assert!(err.to_string().starts_with("not a number (got "), "{err}");
    }
}

#[test]
fn test_non_text_is_a_type_mismatch() {
    let err = assert_invalid!(min_length(1), Value::from(42));
    assert_eq!(err.to_string(), "not a string (got an integer)");
    let err = assert_invalid!(min_length(1), Value::from(Some("abc")));
    assert_eq!(err.to_string(), "not a string (got a nullable string)");
}

#[test]
fn test_length_counts_code_points() {
    assert_valid!(max_length(3), Value::from("€€€"));
    assert_invalid!(max_length(2), Value::from("€€€"));
    assert_valid!(min_length(2), Value::from("日本"));
    assert_valid!(min_length(0), Value::from(""));
}

#[test]
fn test_nullable_length_treats_absent_as_empty() {
    assert_valid!(nullable_max_length(0), Value::NullableText(None));
    assert_valid!(nullable_max_length(0), Value::Null);
    assert_violation!(
        nullable_min_length(1),
        Value::NullableText(None),
        Constraint::MinLength(1)
    );
    assert_valid!(nullable_min_length(2), Value::from(Some("ab")));

    let err = assert_invalid!(nullable_min_length(1), Value::from("ab"));
    assert!(err.is_type_mismatch());
}

#[test]
fn test_pattern_is_unanchored_unless_written_so() {
    let digits = matches_pattern("[0-9]+").expect("valid pattern");
    assert_valid!(digits, Value::from("abc123"));
    assert_invalid!(digits, Value::from("abc"));

    let only_digits = matches_pattern("^[0-9]+$").expect("valid pattern");
    assert_invalid!(only_digits, Value::from("abc123"));
}

#[test]
fn test_bad_pattern_is_reported_at_construction() {
    assert!(matches_pattern("(unclosed").is_err());
}

#[test]
fn test_member_of_requires_same_type() {
    let v = member_of([Value::from(1), Value::from("x"), Value::from(true)]);
    assert_valid!(v, Value::from(1));
    assert_valid!(v, Value::from("x"));
    assert_valid!(v, Value::from(true));

    let err = assert_invalid!(v, Value::from("1"));
    assert_eq!(err.to_string(), r#"invalid value. allowed are [1, "x", true]"#);
    assert_invalid!(v, Value::from(1.0));
}

#[test]
fn test_sequence_item_counts() {
    let tags = sequence_of(min_items(1).and(max_items(3)));
    assert_valid!(tags, Value::from(vec!["a", "b"]));
    assert_violation!(tags, Value::from(Vec::<Value>::new()), Constraint::MinItems(1));
    let err = assert_invalid!(tags, Value::from(vec![1, 2, 3, 4]));
    assert_eq!(err.to_string(), "length must be 3 or less");
    let err = assert_invalid!(tags, Value::from("a,b"));
    assert_eq!(err.to_string(), "not an array (got a string)");
}

#[test]
fn test_required_fields_on_non_record() {
    let err = assert_invalid!(record_of(required_fields(["a"])), Value::from(vec![1]));
    assert_eq!(err.to_string(), "not an object (got an array)");
}

#[test]
fn test_all_of_returns_first_failure_and_stops() {
    let third = Probe::new(always_ok());
    let calls = third.counter();
    let v = all_of![always_ok(), always_fail("second"), third];

    let err = assert_invalid!(v, Value::Null);
    assert_eq!(err, ValidationError::custom("second"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_any_of_stops_at_first_pass() {
    let second = Probe::new(always_fail("never reached"));
    let calls = second.counter();
    let v = any_of![greater_than(0.0), second];

    assert_valid!(v, Value::from(1));
    assert_eq!(calls.get(), 0);
    let _ = v.validate(&Value::from(-1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_any_of_reports_first_error_when_all_fail() {
    let v = any_of![greater_than(10.0), member_of(["auto"])];
    let err = assert_invalid!(v, Value::from(3));
    assert_eq!(err, ValidationError::violation(Constraint::GreaterThan(10.0)));
}

#[test]
fn test_empty_combinators_pass() {
    assert_valid!(all_of(Vec::<BoxValidator<Value>>::new()), Value::Null);
    assert_valid!(any_of(Vec::<BoxValidator<Value>>::new()), Value::Null);
}

#[test]
fn test_nested_combinators() {
    // "auto", or a port number that is not privileged
    let port = any_of![
        member_of(["auto"]),
        all_of![at_least(1024.0), at_most(65535.0)],
    ];
    assert_valid!(port, Value::from("auto"));
    assert_valid!(port, Value::from(8080));
    assert_invalid!(port, Value::from(80));
    assert_invalid!(port, Value::from("manual"));
}

#[test]
fn test_closures_are_validators() {
    let even = number(|n: &f64| -> Result<(), ValidationError> {
        if n % 2.0 == 0.0 {
            Ok(())
        } else {
            Err(ValidationError::custom("must be even"))
        }
    });
    let v = all_of![at_least(0.0), even];
    assert_valid!(v, Value::from(4));
    assert_eq!(
        v.validate(&Value::from(3)).unwrap_err().to_string(),
        "must be even"
    );
}

#[test]
fn test_validators_are_reusable_across_threads() {
    let v = std::sync::Arc::new(all_of![min_length(2), max_length(4)]);
    let handles: Vec<_> = ["ab", "abcde", "abc", "a"]
        .into_iter()
        .map(|s| {
            let v = v.clone();
            std::thread::spawn(move || v.validate(&Value::from(s)).is_ok())
        })
        .collect();
    let results: Vec<bool> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();
    assert_eq!(results, vec![true, false, true, false]);
}
