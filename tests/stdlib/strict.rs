//! Integration tests for the strict operations

use arraykit::foundation::ErrorKind;
use arraykit::stdlib::strict;

#[test]
fn strict_strings_to_integers_fails_on_first_bad_entry() {
    let err = strict::strings_to_integers(&["1", "x", "also bad"]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidInteger { .. }));
    assert_eq!(err.index(), Some(1));
    assert_eq!(format!("{err}"), "invalid integer: \"x\"");
}

#[test]
fn strict_rejects_what_lenient_accepts() {
    assert!(strict::strings_to_integers(&["12abc"]).is_err());
    assert!(strict::strings_to_integers(&["0x1f"]).is_err());
    assert!(strict::strings_to_integers(&[""]).is_err());
}

#[test]
fn strict_remove_dollars() {
    assert_eq!(strict::remove_dollars(&["$5", "10", "$-2"]).unwrap(), vec![5, 10, -2]);

    let err = strict::remove_dollars(&["$5", "10", "$abc"]).unwrap_err();
    assert_eq!(err.index(), Some(2));
    let ctx = err.context.unwrap();
    assert_eq!(ctx.operation.as_deref(), Some("removeDollars"));
}

#[test]
fn strict_triple_overflow() {
    let err = strict::triple_numbers(&[i64::MAX]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Overflow { .. }));
    assert_eq!(err.index(), Some(0));

    assert!(strict::triple_numbers(&[i64::MIN]).is_err());
    assert_eq!(
        strict::triple_numbers(&[i64::MAX / 3]).unwrap(),
        vec![i64::MAX / 3 * 3]
    );
}

#[test]
fn strict_make_math_overflow() {
    let err = strict::make_math(&[i64::MAX, 1]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Overflow { operation: "makeMath" }));
}

#[test]
fn strict_inject_positive_overflow() {
    let err = strict::inject_positive(&[i64::MAX, 1, -1]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Overflow {
            operation: "injectPositive"
        }
    ));
    assert_eq!(strict::inject_positive(&[]).unwrap(), vec![0]);
}
