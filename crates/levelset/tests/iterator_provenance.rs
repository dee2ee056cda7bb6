//! Provenance, redirection, and capability propagation across iterator
//! handles.

use levelset::{
    install, CallArgs, CallError, DedupSequence, Sequence, Text, Value,
};

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().map(|&i| Value::Int(i)).collect()
}

#[test]
fn rederived_handles_reflect_source_mutation() {
    install();
    let seq = Sequence::from_values(ints(&[1, 2]));
    let handle = seq.values();

    let first: Vec<Value> = handle.values().collect();
    assert_eq!(first, ints(&[1, 2]));

    seq.push(&[Value::Int(3)]);
    // Same handle chain, second derivation: the new element is there.
    let second: Vec<Value> = handle.values().collect();
    assert_eq!(second, ints(&[1, 2, 3]));
}

#[test]
fn rederiving_keys_from_values_handle() {
    install();
    let set = DedupSequence::from_values(ints(&[7, 8]));
    let values = set.values();
    // Keys of a keyless container are its values.
    let keys: Vec<Value> = values.keys().collect();
    assert_eq!(keys, ints(&[7, 8]));

    let entries: Vec<Value> = values.entries().collect();
    assert_eq!(
        entries[0],
        Value::List(vec![Value::Int(7), Value::Int(7)])
    );
}

#[test]
fn copied_handle_ignores_later_source_mutation() {
    install();
    let seq = Sequence::from_values(ints(&[1, 2, 3]));
    let mut original = seq.values();
    assert_eq!(original.next(), Some(Value::Int(1)));

    let copied = original.copy();
    seq.fill(&Value::Int(0), None, None);
    seq.push(&[Value::Int(9)]);

    let rest: Vec<Value> = copied.collect();
    assert_eq!(rest, ints(&[2, 3]));
}

#[test]
fn exhausted_handle_keeps_yielding_end() {
    install();
    let text = Text::new("a");
    let mut handle = text.values();
    assert_eq!(handle.next(), Some(Value::Str("a".into())));
    assert_eq!(handle.next(), None);
    assert_eq!(handle.next(), None);
    assert_eq!(handle.next(), None);
}

#[test]
fn handle_capabilities_delegate_to_source() {
    install();
    let set = DedupSequence::from_values(ints(&[1, 2, 3]));
    let handle = set.values();

    // `contains` lives on the container table; the handle forwards it.
    let args = ints(&[2]);
    let result = handle
        .call("contains", &CallArgs::new(&args))
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(result, Value::Bool(true));

    // Mirrored container capabilities forward too.
    let count = handle
        .call("len", &CallArgs::EMPTY)
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(count, Value::Int(3));
}

#[test]
fn text_handle_delegates_native_slice() {
    install();
    let text = Text::new("hello");
    let handle = text.entries();
    let args = [Value::Int(1), Value::Int(3)];
    let sliced = handle
        .call("slice", &CallArgs::new(&args))
        .unwrap()
        .into_value()
        .unwrap();
    assert_eq!(sliced, Value::Str("el".into()));
}

#[test]
fn iteration_call_on_handle_redirects() {
    install();
    let seq = Sequence::from_values(ints(&[5]));
    let mut handle = seq.values();
    handle.next();

    let fresh = handle
        .call("keys", &CallArgs::EMPTY)
        .unwrap()
        .into_handle()
        .unwrap();
    let keys: Vec<Value> = fresh.collect();
    assert_eq!(keys, ints(&[0]));
}

#[test]
fn detached_handle_delegation_is_an_error() {
    install();
    let seq = Sequence::from_values(ints(&[1]));
    let mut handle = seq.values();
    let copied = handle.copy();
    assert!(copied.is_detached());

    let err = copied.call("len", &CallArgs::EMPTY).unwrap_err();
    assert_eq!(err, CallError::Detached);

    // Redirection still works: a detached handle is its own source.
    let again = copied.call("values", &CallArgs::EMPTY).unwrap();
    let values: Vec<Value> = again.into_handle().unwrap().collect();
    assert_eq!(values, ints(&[1]));
}
