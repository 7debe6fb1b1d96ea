//! Behaviour tests for the token grammar through `#[derive(Clash)]`.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use std::sync::atomic::{AtomicI32, AtomicI64};

use clash::{Clash, ClashError, CoercionError, SyntaxError};
use rstest::rstest;

#[derive(Debug, Default, Clash)]
struct Scalars {
    #[clash(short = "s", long = "text")]
    text: String,
    #[clash(short = "a", long = "tiny")]
    tiny: i8,
    #[clash(short = "b", long = "short-int")]
    short_int: i16,
    #[clash(short = "c", long = "int")]
    int: i32,
    #[clash(short = "d", long = "long-int")]
    long_int: i64,
    #[clash(short = "e", long = "byte")]
    byte: u8,
    #[clash(short = "f", long = "port")]
    port: u16,
    #[clash(short = "g", long = "unsigned")]
    unsigned: u32,
    #[clash(short = "h", long = "unsigned-long")]
    unsigned_long: u64,
    #[clash(short = "i", long = "single")]
    single: f32,
    #[clash(short = "j", long = "double")]
    double: f64,
    #[clash(short = "k", long = "flag")]
    flag: bool,
    #[clash(short = "l", long = "counter")]
    counter: AtomicI32,
    #[clash(short = "m", long = "wide-counter")]
    wide_counter: AtomicI64,
    #[clash(short = "o", long = "maybe")]
    maybe: Option<u32>,
}

#[rstest]
#[case::text("s", "text", "hello world")]
#[case::i8("a", "tiny", "-8")]
#[case::i16("b", "short-int", "1600")]
#[case::i32("c", "int", "-32")]
#[case::i64("d", "long-int", "6400000000")]
#[case::u8("e", "byte", "255")]
#[case::u16("f", "port", "8080")]
#[case::u32("g", "unsigned", "32")]
#[case::u64("h", "unsigned-long", "18446744073709551615")]
#[case::f32("i", "single", "3.5")]
#[case::f64("j", "double", "-0.125")]
#[case::bool("k", "flag", "tRuE")]
#[case::atomic_i32("l", "counter", "12")]
#[case::atomic_i64("m", "wide-counter", "-12")]
#[case::option("o", "maybe", "7")]
fn short_and_long_forms_agree(#[case] short: &str, #[case] long: &str, #[case] raw: &str) {
    let via_short = Scalars::bind([format!("-{short}"), raw.to_owned()]).expect("short form");
    let via_long = Scalars::bind([format!("--{long}={raw}")]).expect("long form");
    let rendered = format!("{via_short:?}");
    assert_eq!(rendered, format!("{via_long:?}"));
    assert_ne!(rendered, format!("{:?}", Scalars::default()));
}

#[derive(Debug, Default, Clash)]
struct Counter {
    #[clash(short = "x", long = "count")]
    count: i32,
    #[clash(short = "n", long = "name")]
    name: String,
}

#[test]
fn long_form_assigns_value() {
    let counter = Counter::bind(["--count=5"]).expect("bind");
    assert_eq!(counter.count, 5);
}

#[test]
fn empty_long_value_is_a_coercion_error() {
    let err = Counter::bind(["--count="]).expect_err("empty integer");
    assert!(matches!(
        err,
        ClashError::Coercion {
            field: "count",
            reason: CoercionError::Malformed { .. },
            ..
        }
    ));
}

#[test]
fn empty_long_value_is_valid_text() {
    let counter = Counter::bind(["--name=", "-x", "1"]).expect("bind");
    assert_eq!(counter.name, "");
}

#[test]
fn bare_tokens_are_ignored() {
    let counter = Counter::bind(["notanoption", "-x", "3", "another"]).expect("bind");
    assert_eq!(counter.count, 3);
}

#[test]
fn repeated_short_form_keeps_the_last_value() {
    let counter = Counter::bind(["-x", "1", "-x", "2"]).expect("bind");
    assert_eq!(counter.count, 2);
}

#[test]
fn values_may_contain_equals_and_dashes() {
    let counter = Counter::bind(["--name=a=b", "-x", "-4"]).expect("bind");
    assert_eq!(counter.name, "a=b");
    assert_eq!(counter.count, -4);
}

#[rstest]
#[case::missing_equals(&["--count"], "--count", SyntaxError::MissingEquals)]
#[case::terminator(&["--"], "--", SyntaxError::MissingEquals)]
#[case::trailing_short(&["-x", "1", "-n"], "-n", SyntaxError::MissingValue)]
fn malformed_tokens_abort_binding(
    #[case] args: &[&str],
    #[case] token: &str,
    #[case] reason: SyntaxError,
) {
    let err = Counter::bind(args).expect_err("syntax error");
    assert!(
        matches!(err, ClashError::Syntax { token: ref t, reason: r } if t == token && r == reason),
        "unexpected error: {err:?}"
    );
}

#[rstest]
#[case::long(&["--counter=1"], "counter")]
#[case::short(&["-q", "1"], "q")]
#[case::prefix(&["--cou=1"], "cou")]
#[case::case_sensitive(&["-X", "1"], "X")]
fn unknown_names_are_rejected(#[case] args: &[&str], #[case] name: &str) {
    let err = Counter::bind(args).expect_err("unknown argument");
    assert_eq!(err.to_string(), format!("Unknown argument: {name}"));
}

#[derive(Default, Clash)]
struct Staging {
    #[clash(short = "n", long = "name", required)]
    name: String,
    #[clash(short = "w", long = "workers", default = 4)]
    workers: u8,
}

#[derive(Debug, PartialEq, Eq)]
struct Frozen {
    name: Box<str>,
    workers: u8,
}

impl From<Staging> for Frozen {
    fn from(staging: Staging) -> Self {
        Self {
            name: staging.name.into_boxed_str(),
            workers: staging.workers,
        }
    }
}

#[test]
fn bind_and_freeze_converts_the_staging_value() {
    let frozen: Frozen = clash::bind_and_freeze::<Staging, _, _>(["--name=svc"]).expect("bind");
    assert_eq!(
        frozen,
        Frozen {
            name: "svc".into(),
            workers: 4,
        }
    );
}

#[test]
fn bind_and_freeze_propagates_errors() {
    let err = clash::bind_and_freeze::<Staging, Frozen, _>(["-w", "2"]).expect_err("name missing");
    assert_eq!(err.to_string(), "Required argument not provided: n");
}
