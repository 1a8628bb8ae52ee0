//! Signature table: the declarative input of the export facility.
//!
//! A table is parsed into memory in full before anything is generated, so that
//! symbol collisions are caught as an ordinary uniqueness check over the whole
//! declaration set rather than discovered one linker error at a time.

use quote::{ToTokens, format_ident};
use std::collections::BTreeSet;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Attribute, Ident, PathArguments, ReturnType, Token, Type, braced, parenthesized};

/// A parsed `export_proxies!` invocation: type aliases plus method declarations,
/// in source order.
#[derive(Debug)]
pub struct ProxyTable {
    pub aliases: Vec<AliasDecl>,
    pub decls: Vec<ProxyDecl>,
}

/// `type Name = CompositeType;` — binds a single-token name to a composite type
/// so declarations stay at one token per parameter.
#[derive(Debug)]
pub struct AliasDecl {
    pub name: Ident,
    pub ty: Type,
}

/// How the subject is taken by the generated function.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubjectRef {
    /// `&self` — the trampoline takes `&Subject`
    Shared,
    /// `&mut self` — the trampoline takes `&mut Subject`
    Exclusive,
}

/// One method declaration: subject type, method name, optional overload tag,
/// parameter types in order, and the exact return type.
#[derive(Debug)]
pub struct ProxyDecl {
    pub subject: Ident,
    pub receiver: SubjectRef,
    pub method: Ident,
    pub tag: Option<Ident>,
    pub params: Vec<Type>,
    pub ret: ReturnType,
}

impl ProxyDecl {
    /// External symbol name: `{subject}_{method}{tag}`, empty tag omitted.
    pub fn symbol(&self) -> Ident {
        let tag = self.tag.as_ref().map(Ident::to_string).unwrap_or_default();
        format_ident!(
            "{}_{}{}",
            self.subject,
            self.method,
            tag,
            span = self.method.span()
        )
    }

    /// Method invoked on the subject: `{method}{tag}`.
    ///
    /// C++ resolved every overload onto one method name; Rust spells overloads
    /// as suffixed methods, so the tag picks both the symbol suffix and the
    /// callee suffix.
    pub fn callee(&self) -> Ident {
        match &self.tag {
            Some(tag) => format_ident!("{}{}", self.method, tag, span = self.method.span()),
            None => self.method.clone(),
        }
    }

    fn tag_str(&self) -> String {
        self.tag.as_ref().map(Ident::to_string).unwrap_or_default()
    }
}

impl Parse for ProxyTable {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut aliases = Vec::new();
        let mut decls = Vec::new();

        while !input.is_empty() {
            if input.peek(Token![type]) {
                aliases.push(input.parse()?);
            } else if input.peek(Token![impl]) {
                parse_subject_block(input, &mut decls)?;
            } else {
                return Err(input.error("expected `type Alias = ...;` or `impl Subject { ... }`"));
            }
        }

        Ok(ProxyTable { aliases, decls })
    }
}

impl Parse for AliasDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        input.parse::<Token![type]>()?;
        let name: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let ty: Type = input.parse()?;
        input.parse::<Token![;]>()?;
        Ok(AliasDecl { name, ty })
    }
}

/// Parse `impl Subject { fn ...; fn ...; }`, pushing one `ProxyDecl` per method.
fn parse_subject_block(input: ParseStream, decls: &mut Vec<ProxyDecl>) -> syn::Result<()> {
    input.parse::<Token![impl]>()?;
    let subject: Ident = input.parse()?;

    let body;
    braced!(body in input);
    while !body.is_empty() {
        decls.push(parse_method_decl(&body, &subject)?);
    }
    Ok(())
}

/// Parse one `#[overload(_tag)]? fn name(&self | &mut self, Ty, ...) -> Ret;`.
///
/// Parameters are types only; positional names are supplied by the arity
/// expander at generation time.
fn parse_method_decl(input: ParseStream, subject: &Ident) -> syn::Result<ProxyDecl> {
    let attrs = input.call(Attribute::parse_outer)?;
    let tag = parse_overload_attr(&attrs)?;

    input.parse::<Token![fn]>()?;
    let method: Ident = input.parse()?;

    let sig;
    parenthesized!(sig in input);
    sig.parse::<Token![&]>().map_err(|_| {
        syn::Error::new(
            method.span(),
            format!(
                "method '{}': must start with `&self` or `&mut self` (the subject is always the first argument of the exported function)",
                method
            ),
        )
    })?;
    let receiver = if sig.peek(Token![mut]) {
        sig.parse::<Token![mut]>()?;
        SubjectRef::Exclusive
    } else {
        SubjectRef::Shared
    };
    sig.parse::<Token![self]>()?;

    let mut params = Vec::new();
    while !sig.is_empty() {
        sig.parse::<Token![,]>()?;
        if sig.is_empty() {
            break;
        }
        params.push(sig.parse::<Type>()?);
    }

    let ret: ReturnType = input.parse()?;
    input.parse::<Token![;]>()?;

    Ok(ProxyDecl {
        subject: subject.clone(),
        receiver,
        method,
        tag,
        params,
        ret,
    })
}

/// Extract the tag from an `#[overload(_tag)]` attribute, rejecting anything else.
fn parse_overload_attr(attrs: &[Attribute]) -> syn::Result<Option<Ident>> {
    let mut tag = None;
    for attr in attrs {
        if !attr.path().is_ident("overload") {
            return Err(syn::Error::new(
                attr.span(),
                "unknown attribute on proxy declaration, expected #[overload(_tag)]",
            ));
        }
        if tag.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "at most one #[overload(...)] attribute per declaration",
            ));
        }
        tag = Some(attr.parse_args::<Ident>()?);
    }
    Ok(tag)
}

impl ProxyTable {
    /// Single validation pass over the whole table, run before any synthesis.
    ///
    /// Checks alias discipline (no redefinition, no raw composite types in
    /// declarations) and symbol uniqueness over `(subject, method, tag)`.
    pub fn validate(&self) -> syn::Result<()> {
        let mut alias_names = BTreeSet::new();
        for alias in &self.aliases {
            if !alias_names.insert(alias.name.to_string()) {
                return Err(syn::Error::new(
                    alias.name.span(),
                    format!("type alias `{}` is declared twice", alias.name),
                ));
            }
        }

        let mut symbols = BTreeSet::new();
        for decl in &self.decls {
            for param in &decl.params {
                check_alias_discipline(&decl.method, param)?;
            }
            if let ReturnType::Type(_, ty) = &decl.ret {
                check_alias_discipline(&decl.method, ty)?;
            }

            let symbol = decl.symbol();
            if !symbols.insert(symbol.to_string()) {
                return Err(syn::Error::new(
                    decl.method.span(),
                    format!(
                        "duplicate proxy symbol `{}`: a declaration for ({}, {}, \"{}\") already exists",
                        symbol,
                        decl.subject,
                        decl.method,
                        decl.tag_str()
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Require a parameter/return type to be a single-token name, possibly behind
/// reference or pointer layers. Composite types must go through a `type` alias;
/// letting them appear raw is how the textual predecessor of this facility
/// silently miscounted arities.
fn check_alias_discipline(method: &Ident, ty: &Type) -> syn::Result<()> {
    match ty {
        Type::Reference(r) => check_alias_discipline(method, &r.elem),
        Type::Ptr(p) => check_alias_discipline(method, &p.elem),
        Type::Group(g) => check_alias_discipline(method, &g.elem),
        Type::Paren(p) => check_alias_discipline(method, &p.elem),
        Type::Tuple(t) if t.elems.is_empty() => Ok(()),
        Type::Path(path) => {
            for segment in &path.path.segments {
                if !matches!(segment.arguments, PathArguments::None) {
                    let shown = ty.to_token_stream();
                    return Err(syn::Error::new(
                        ty.span(),
                        format!(
                            "method '{}': composite type `{}` cannot appear directly in a proxy declaration; register it once as `type Alias = {};` and use the alias",
                            method, shown, shown
                        ),
                    ));
                }
            }
            Ok(())
        }
        other => Err(syn::Error::new(
            other.span(),
            format!(
                "method '{}': type `{}` is not a single-token name; register it as `type Alias = {};` and use the alias",
                method,
                other.to_token_stream(),
                other.to_token_stream()
            ),
        )),
    }
}
