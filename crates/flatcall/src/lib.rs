//! Flat `extern "C"` forwarding symbols for interface methods.
//!
//! A host application owns polymorphic interface objects; code compiled and
//! linked separately cannot call their methods directly. `flatcall` takes a
//! compact per-method declaration table and generates one flat, externally
//! callable trampoline per entry: subject reference first, positional
//! parameters after it, exactly one forwarded call, the declared return type
//! unchanged.
//!
//! ```ignore
//! flatcall::export_proxies! {
//!     type HoursMinutes = Pair<i32, i32>;
//!
//!     impl Actor {
//!         fn set_skin(&mut self, i32);
//!         fn get_skin(&self) -> i32;
//!         fn get_animation(&self) -> &AnimationData;
//!     }
//! }
//!
//! // generated:
//! //   pub unsafe extern "C" fn Actor_set_skin(subject: &mut Actor, _1: i32)
//! //   pub unsafe extern "C" fn Actor_get_skin(subject: &Actor) -> i32
//! //   pub unsafe extern "C" fn Actor_get_animation<'a>(subject: &'a Actor) -> &'a AnimationData
//! ```
//!
//! The trampolines are pure pass-through: no state, no synchronization, no
//! logging, no new error paths. Whatever the wrapped method does — including
//! failing — is exactly what the external caller observes. Thread-safety is
//! inherited entirely from the wrapped method and the host's own discipline
//! for the subject instance.
//!
//! All validation happens at generation time:
//! - duplicate `(subject, method, tag)` triples abort with a duplicate-symbol
//!   error naming the collision;
//! - more than 10 parameters is a hard error;
//! - composite parameter/return types must be registered as a single-token
//!   `type` alias inside the table before use.
//!
//! Overloads: a declaration tagged `#[overload(_tag)]` exports
//! `{Subject}_{method}{tag}` and forwards to the subject's `{method}{tag}`
//! method — Rust spells overloads as suffixed methods, so the tag picks both
//! suffixes while the table keeps the overloads grouped under one logical
//! method name.

pub use flatcall_macro::export_proxies;

// Re-export paste for use by declarative macros
#[doc(hidden)]
pub use paste::paste;

/// Name the trampoline generated for `(Subject, method)` or
/// `(Subject, method, tag)` without hand-concatenating identifiers.
///
/// ```ignore
/// let f: unsafe extern "C" fn(&Actor) -> i32 = flatcall::proxy_symbol!(Actor::get_skin);
/// let g = flatcall::proxy_symbol!(TextDrawRegistry::create, _model);
/// ```
#[macro_export]
macro_rules! proxy_symbol {
    ($subject:ident :: $method:ident) => {
        $crate::paste! { [<$subject _ $method>] }
    };
    ($subject:ident :: $method:ident, $tag:ident) => {
        $crate::paste! { [<$subject _ $method $tag>] }
    };
}
