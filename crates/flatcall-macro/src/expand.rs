//! Arity expansion: positional formal/actual lists for a declaration.
//!
//! The textual predecessor of this facility recovered N by padding the
//! invocation with a descending 10..0 marker sequence; here N is just
//! `params.len()`, so the same declaration form covers N = 0 through N = 10
//! with no boundary special cases.

use quote::format_ident;
use syn::{Ident, Type};

/// Hard upper bound on proxy method arity. Declarations above this limit are a
/// generation-time failure, never a runtime one.
pub const MAX_ARITY: usize = 10;

/// Formal and actual argument lists for one declaration, both of length
/// exactly N and in declaration order.
#[derive(Debug)]
pub struct Expansion {
    /// `(_i, Ti)` pairs for the generated function's parameter list.
    pub formals: Vec<(Ident, Type)>,
    /// `_i` names for the forwarded call, same order as `formals`.
    pub actuals: Vec<Ident>,
}

/// Expand N parameter types into positional names `_1 ..= _N`.
pub fn expand(method: &Ident, params: &[Type]) -> syn::Result<Expansion> {
    if params.len() > MAX_ARITY {
        return Err(syn::Error::new(
            method.span(),
            format!(
                "method '{}': {} parameters exceed the {}-parameter limit for proxy exports",
                method,
                params.len(),
                MAX_ARITY
            ),
        ));
    }

    let actuals: Vec<Ident> = (1..=params.len()).map(|i| format_ident!("_{}", i)).collect();
    let formals = actuals.iter().cloned().zip(params.iter().cloned()).collect();
    Ok(Expansion { formals, actuals })
}
