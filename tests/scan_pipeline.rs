//! End-to-end scan pipeline tests
//!
//! Exercises compile, segment and convert together through the public API,
//! plus snapshot checks that keep user-visible renderings (error messages,
//! JSON values) stable.

use descan::{compile, compile_cached, ScanError, TypeRequest, Value};

#[test]
fn separator_anchored_bindings() {
    let compiled = compile("{%d} and {}").unwrap();
    let values = compiled
        .scan_values("42 and 3.1415926", &[TypeRequest::Signed, TypeRequest::Text])
        .unwrap();
    assert_eq!(
        values,
        vec![Value::Signed(42), Value::Text("3.1415926".to_string())]
    );
}

#[test]
fn signed_capture_between_literals() {
    let compiled = compile("some str {%d} some str").unwrap();
    let (value,): (i32,) = compiled.scan("some str -45 some str").unwrap();
    assert_eq!(value, -45);
}

#[test]
fn bare_placeholder_follows_requested_type() {
    let compiled = compile("some str {} some str").unwrap();

    let (text,): (&str,) = compiled.scan("some str string some str").unwrap();
    assert_eq!(text, "string");

    let (number,): (i32,) = compiled.scan("some str 1024 some str").unwrap();
    assert_eq!(number, 1024);
}

#[test]
fn owned_text_extraction() {
    let compiled = compile("name={%s};").unwrap();
    let (name,): (String,) = compiled.scan("name=trillian;").unwrap();
    assert_eq!(name, "trillian");
}

#[test]
fn mixed_arity_scan() {
    let compiled = compile("{%u} packets, {%f} ms, via {}").unwrap();
    let (packets, latency, route): (u64, f64, &str) = compiled
        .scan("512 packets, 0.25 ms, via eth0")
        .unwrap();
    assert_eq!(packets, 512);
    assert_eq!(latency, 0.25);
    assert_eq!(route, "eth0");
}

#[test]
fn compiled_pattern_is_reusable_across_sources() {
    let compiled = compile("{%d}/{%d}").unwrap();
    for (source, expected) in [("1/2", (1, 2)), ("10/20", (10, 20)), ("-3/4", (-3, 4))] {
        let got: (i32, i32) = compiled.scan(source).unwrap();
        assert_eq!(got, expected);
    }
}

#[test]
fn cached_compile_feeds_the_same_pipeline() {
    let compiled = compile_cached("cache {} me {%u}").unwrap();
    let (a, b): (&str, u8) = compiled.scan("cache hit me 7").unwrap();
    assert_eq!((a, b), ("hit", 7));
}

#[test]
fn count_mismatch_reported_before_segmentation() {
    let compiled = compile("{%d}").unwrap();
    let err = compiled
        .scan_values("anything", &[TypeRequest::Signed, TypeRequest::Signed])
        .unwrap_err();
    assert_eq!(
        err,
        ScanError::PlaceholderCountMismatch {
            expected: 1,
            requested: 2
        }
    );
}

#[test]
fn data_errors_fail_fast() {
    let compiled = compile("{%d} then {%d}").unwrap();
    let err = compiled
        .scan_values("abc then 5", &[TypeRequest::Signed, TypeRequest::Signed])
        .unwrap_err();
    assert_eq!(
        err,
        ScanError::InvalidNumericLiteral {
            capture: "abc".to_string()
        }
    );
}

#[test]
fn overflow_is_classified() {
    let compiled = compile("{}").unwrap();
    let err = compiled.scan::<(i8,)>("1024").unwrap_err();
    assert_eq!(
        err,
        ScanError::NumericOverflow {
            capture: "1024".to_string()
        }
    );
}

#[test]
fn error_messages_are_stable() {
    insta::assert_snapshot!(
        compile("{%x}").unwrap_err().to_string(),
        @"invalid specifier 'x' at byte 2 (expected one of 'd', 'u', 'f', 's')"
    );
    insta::assert_snapshot!(
        compile("{%d").unwrap_err().to_string(),
        @"expected '}' at byte 3"
    );
    insta::assert_snapshot!(
        compile("tail {").unwrap_err().to_string(),
        @"unclosed placeholder opened at byte 5"
    );

    let compiled = compile("k={}").unwrap();
    insta::assert_snapshot!(
        compiled.scan::<(i32,)>("nope").unwrap_err().to_string(),
        @r#"separator "k=" leading placeholder 0 not found in source"#
    );

    let compiled = compile("{%u}").unwrap();
    insta::assert_snapshot!(
        compiled.scan::<(i64,)>("10").unwrap_err().to_string(),
        @"placeholder 0 is declared '%u' but a signed integer value was requested"
    );
}

#[test]
fn json_rendering_is_stable() {
    let compiled = compile("{%d} and {%s}").unwrap();
    let values = compiled
        .scan_values("-45 and story", &[TypeRequest::Signed, TypeRequest::Text])
        .unwrap();
    let json = serde_json::to_string(&values).unwrap();
    insta::assert_snapshot!(json, @r#"[{"signed":-45},{"text":"story"}]"#);
}
