//! Aliased composite types flow through declarations, trampoline signatures
//! and returns as single tokens.

use flatcall::export_proxies;

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

#[derive(Default)]
pub struct Clock {
    hours: i32,
    minutes: i32,
}

impl Clock {
    pub fn time(&self) -> HoursMinutes {
        Pair {
            first: self.hours,
            second: self.minutes,
        }
    }

    pub fn set_time(&mut self, time: HoursMinutes) {
        self.hours = time.first;
        self.minutes = time.second;
    }
}

export_proxies! {
    type HoursMinutes = Pair<i32, i32>;

    impl Clock {
        fn time(&self) -> HoursMinutes;
        fn set_time(&mut self, HoursMinutes);
    }
}

#[test]
fn alias_is_emitted_and_usable_by_the_host() {
    let t: HoursMinutes = Pair {
        first: 23,
        second: 59,
    };
    assert_eq!(t.first, 23);
}

#[test]
fn aliased_parameter_and_return_round_through_the_trampolines() {
    let mut clock = Clock::default();
    unsafe {
        Clock_set_time(
            &mut clock,
            Pair {
                first: 7,
                second: 30,
            },
        );
    }
    let time = unsafe { Clock_time(&clock) };
    assert_eq!(
        time,
        Pair {
            first: 7,
            second: 30
        }
    );
}
