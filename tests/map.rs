use optionable::prelude::*;
use optionable_testutils::Probe;

#[test]
fn map_present_calls_once() {
    let probe = Probe::new();
    let value = Maybe::some(1).map(probe.wrap(|n: i32| n.to_string()));

    assert_eq!(value, Maybe::some("1".to_string()));
    assert_eq!(probe.calls(), 1);
}

#[test]
fn map_absent_never_calls() {
    let probe = Probe::new();
    let value = Maybe::<i32>::none().map(probe.wrap(|n: i32| n.to_string()));

    assert_eq!(value, Maybe::<String>::none());
    assert_eq!(probe.calls(), 0);
}

#[test]
fn get_absent_falls_back() {
    let value = Maybe::<u16>::none();
    let port = match value.get() {
        Ok(port) => port,
        Err(Error::Empty) => 8080,
    };
    assert_eq!(port, 8080);
}

#[test]
fn nullable_round_trip() {
    let values: [Nullable<&str>; 2] = [Maybe::some("hello"), Maybe::none()];

    for value in values {
        assert_eq!(Maybe::from_nullable(value.to_nullable()), value);
    }
}
