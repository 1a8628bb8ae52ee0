//! Procedural macros for flat C-ABI method export.
//!
//! Provides `export_proxies!` — the declaration-to-trampoline generator.
//! A single invocation holds the whole signature table: type aliases for
//! composite parameter/return types plus one `impl Subject { ... }` block per
//! subject type. The table is parsed into memory, validated in one pass
//! (symbol uniqueness, arity limit, alias discipline), and only then turned
//! into `#[unsafe(no_mangle)] extern "C"` forwarding functions.
//!
//! All failures are generation-time `compile_error!`s with spans on the
//! offending declaration; the generated trampolines have no error paths of
//! their own.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod expand;
mod synth;
mod table;

/// Generate flat `extern "C"` forwarding symbols for a table of method
/// declarations.
///
/// # Syntax
/// ```ignore
/// export_proxies! {
///     // composite types must be aliased to a single token before use
///     type HoursMinutes = Pair<i32, i32>;
///
///     impl Actor {
///         fn set_skin(&mut self, i32);
///         fn get_skin(&self) -> i32;
///         fn get_animation(&self) -> &AnimationData;
///     }
///
///     impl TextDrawRegistry {
///         fn create(&mut self, Vector2, StringView) -> *mut TextDraw;
///         #[overload(_model)]
///         fn create(&mut self, Vector2, i32) -> *mut TextDraw;
///     }
/// }
/// ```
///
/// Each declaration produces one symbol named `{Subject}_{method}{tag}` that
/// takes the subject by reference first (`&Subject` for `&self`,
/// `&mut Subject` for `&mut self`), then up to 10 positional parameters named
/// `_1 ..= _N`, forwards them unchanged in one call, and returns the declared
/// type exactly — reference returns stay references bound to the subject.
///
/// Declare the whole table in one invocation: collisions are only checkable
/// across declarations the macro can see together.
#[proc_macro]
pub fn export_proxies(input: TokenStream) -> TokenStream {
    let table = parse_macro_input!(input as table::ProxyTable);
    match synth::synthesize(&table) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
