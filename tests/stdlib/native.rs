//! Integration tests for by-name dispatch

use arraykit::foundation::{ErrorKind, Type, Value};
use arraykit::stdlib::{functional, native};

#[test]
fn every_operation_is_registered() {
    let names: Vec<_> = native::names().collect();
    assert_eq!(
        names,
        vec![
            "bookEndList",
            "tripleNumbers",
            "stringsToIntegers",
            "removeDollars",
            "shoutIfExclaiming",
            "countShortWords",
            "allRGB",
            "makeMath",
            "injectPositive",
        ]
    );
    assert_eq!(native::natives().len(), names.len());
}

#[test]
fn call_matches_direct_call() {
    let input = vec![4i64, -2, 8];
    let by_name = native::call("injectPositive", &[Value::from(input.clone())]).unwrap();
    assert_eq!(by_name, Value::from(functional::inject_positive(&input)));

    let by_name = native::call("makeMath", &[Value::from(input.clone())]).unwrap();
    assert_eq!(by_name.as_str(), Some(functional::make_math(&input).as_str()));
}

#[test]
fn call_through_lookup() {
    let f = native::lookup("countShortWords").unwrap();
    let out = f.call(&[Value::from(vec!["a", "bee", "tree", "four"])]).unwrap();
    assert_eq!(out, Value::Int(2));
}

#[test]
fn string_operation_rejects_numbers() {
    let err = native::call("allRGB", &[Value::from(vec![1i64])]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::String,
            actual: Type::Int
        }
    ));
    assert_eq!(err.index(), Some(0));
}

#[test]
fn unknown_name_has_no_context() {
    let err = native::call("tripleNumber", &[Value::Vec(vec![])]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownOperation(_)));
    assert!(err.context.is_none());
}

#[test]
fn error_context_names_operation() {
    let err = native::call("bookEndList", &[Value::from("not a list")]).unwrap_err();
    let ctx = err.context.unwrap();
    assert_eq!(ctx.operation.as_deref(), Some("bookEndList"));
    assert_eq!(ctx.stack, vec!["bookEndList".to_string()]);
    assert_eq!(format!("{ctx}"), "in bookEndList\n  in bookEndList\n");
}
