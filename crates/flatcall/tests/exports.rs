//! End-to-end: a generated symbol is a real `unsafe extern "C" fn` that an
//! external caller can bind and drive against a host-owned subject.

use flatcall::{export_proxies, proxy_symbol};

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Test double: records every `set_position` invocation and returns a
/// configured value.
#[derive(Default)]
pub struct Actor {
    pub calls: Vec<(Vector3, bool, f32)>,
    pub configured_result: bool,
}

impl Actor {
    pub fn set_position(&mut self, position: Vector3, interpolate: bool, speed: f32) -> bool {
        self.calls.push((position, interpolate, speed));
        self.configured_result
    }

    pub fn call_count(&self) -> usize {
        self.calls.len()
    }
}

export_proxies! {
    impl Actor {
        fn set_position(&mut self, Vector3, bool, f32) -> bool;
        fn call_count(&self) -> usize;
    }
}

#[test]
fn records_exactly_one_invocation_with_the_exact_arguments() {
    let mut actor = Actor {
        configured_result: true,
        ..Actor::default()
    };
    let position = Vector3 {
        x: 1.0,
        y: 2.0,
        z: 3.0,
    };

    let result = unsafe { Actor_set_position(&mut actor, position, true, 7.5) };

    assert_eq!(actor.calls, vec![(position, true, 7.5)]);
    assert!(result, "trampoline must return the double's configured value");
}

#[test]
fn configured_return_value_passes_through_unchanged() {
    let mut actor = Actor::default();
    let position = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    let result = unsafe { Actor_set_position(&mut actor, position, false, 0.0) };
    assert!(!result);
}

#[test]
fn generated_item_is_an_extern_c_function() {
    // Coercing to an explicit fn-pointer type pins down the generated ABI
    // shape: subject first, positional parameters after, declared return.
    let f: unsafe extern "C" fn(&mut Actor, Vector3, bool, f32) -> bool = Actor_set_position;
    let g: unsafe extern "C" fn(&Actor) -> usize = Actor_call_count;

    let mut actor = Actor::default();
    let position = Vector3 {
        x: 4.0,
        y: 5.0,
        z: 6.0,
    };
    unsafe {
        f(&mut actor, position, true, 1.0);
        assert_eq!(g(&actor), 1);
    }
}

#[test]
fn proxy_symbol_resolves_the_generated_fn() {
    let f = proxy_symbol!(Actor::set_position);
    let mut actor = Actor::default();
    let position = Vector3 {
        x: 9.0,
        y: 8.0,
        z: 7.0,
    };
    unsafe {
        f(&mut actor, position, false, 2.5);
    }
    assert_eq!(actor.call_count(), 1);
    assert_eq!(actor.calls[0].0, position);
}
