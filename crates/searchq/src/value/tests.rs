use super::*;
use proptest::prelude::*;

// ---- helpers -----------------------------------------------------------

fn v_f64(x: f64) -> Value {
    Value::Float(Float64::try_new(x).expect("finite f64"))
}
fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

#[test]
fn plain_text_is_wrapped_in_quotes() {
    assert_eq!(v_txt("active").to_string(), "\"active\"");
    assert_eq!(v_txt("").to_string(), "\"\"");
}

#[test]
fn wildcard_text_is_wrapped_like_any_other() {
    assert_eq!(v_txt("*123456").to_string(), "\"*123456\"");
}

#[test]
fn prequoted_text_passes_through_verbatim() {
    assert_eq!(v_txt("\"*123456\"").to_string(), "\"*123456\"");

    // a leading quote alone marks the value as pre-quoted
    assert_eq!(v_txt("\"partial").to_string(), "\"partial");
}

#[test]
fn numbers_and_booleans_render_unquoted() {
    assert_eq!(Value::Int(-5).to_string(), "-5");
    assert_eq!(Value::Uint(7).to_string(), "7");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(v_f64(10.5).to_string(), "10.5");
}

#[test]
fn field_value_maps_primitives_to_variants() {
    assert_eq!("x".to_value(), v_txt("x"));
    assert_eq!("x".to_string().to_value(), v_txt("x"));
    assert_eq!(10i32.to_value(), Value::Int(10));
    assert_eq!((-3i64).to_value(), Value::Int(-3));
    assert_eq!(10u64.to_value(), Value::Uint(10));
    assert_eq!(true.to_value(), Value::Bool(true));
    assert_eq!(
        Float64::try_new(0.5).expect("finite f64").to_value(),
        v_f64(0.5)
    );

    // Value passes through itself unchanged
    assert_eq!(Value::Int(1).to_value(), Value::Int(1));
}

#[test]
fn value_round_trips_through_serde() {
    for value in [
        Value::Bool(true),
        v_f64(1.25),
        Value::Int(-9),
        v_txt("iopole"),
        Value::Uint(42),
    ] {
        let json = serde_json::to_string(&value).expect("serialize value");
        let back: Value = serde_json::from_str(&json).expect("deserialize value");
        assert_eq!(back, value);
    }
}

// ---- properties --------------------------------------------------------

proptest! {
    #[test]
    fn unquoted_text_gains_exactly_one_quote_pair(s in "[^\"]{0,16}") {
        prop_assert_eq!(v_txt(&s).to_string(), format!("\"{s}\""));
    }

    #[test]
    fn prequoted_text_is_never_requoted(s in "\"[a-z*0-9]{0,16}") {
        prop_assert_eq!(v_txt(&s).to_string(), s);
    }

    #[test]
    fn formatting_is_deterministic(value in arb_value()) {
        prop_assert_eq!(value.to_string(), value.to_string());
    }
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::Uint),
        "[a-zA-Z0-9_*.]{0,12}".prop_map(Value::Text),
        (-1.0e12..1.0e12).prop_map(|x| Value::Float(Float64::try_new(x).expect("finite f64"))),
    ]
}
