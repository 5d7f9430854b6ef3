use nebula_rulecheck::{Inspect, Record, Value};

#[derive(Record)]
struct Labelled<'a, T>
where
    T: Inspect,
{
    #[validate(rule = "len:3")]
    label: &'a str,

    #[validate(rule = "max:10")]
    value: T,
}

#[derive(Record)]
struct Outer<'a> {
    #[validate(rule = "len:1")]
    inner: Labelled<'a, i32>,

    #[validate(rule = "min:0")]
    items: Vec<Labelled<'a, i32>>,
}

fn main() {
    let ok = Labelled {
        label: "abc",
        value: 10i32,
    };
    assert!(ok.validate().is_ok());
    assert!(matches!(ok.to_value(), Value::Composite(_)));

    let outer = Outer {
        inner: Labelled {
            label: "not checked",
            value: 99,
        },
        items: Vec::new(),
    };
    // A sequence of records is not a sequence of scalars.
    let err = outer.validate().unwrap_err();
    assert!(err.is_structural());
}
