//! Trampoline synthesis: one `extern "C"` forwarding function per declaration.
//!
//! A trampoline is stateless pass-through code: subject first, expanded
//! parameters after it, exactly one forwarded call, the declared return type
//! unchanged. It adds no logging, validation or retries.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ReturnType, Type};

use crate::expand;
use crate::table::{ProxyDecl, ProxyTable, SubjectRef};

/// Validate the whole table, then emit its alias items and trampolines.
pub fn synthesize(table: &ProxyTable) -> syn::Result<TokenStream> {
    table.validate()?;

    let aliases = table.aliases.iter().map(|alias| {
        let name = &alias.name;
        let ty = &alias.ty;
        quote! { pub type #name = #ty; }
    });

    let trampolines = table
        .decls
        .iter()
        .map(synthesize_one)
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        #(#aliases)*
        #(#trampolines)*
    })
}

fn synthesize_one(decl: &ProxyDecl) -> syn::Result<TokenStream> {
    let expansion = expand::expand(&decl.method, &decl.params)?;
    let symbol = decl.symbol();
    let callee = decl.callee();
    let subject = &decl.subject;

    let formal_names: Vec<_> = expansion.formals.iter().map(|(name, _)| name).collect();
    let formal_types: Vec<_> = expansion.formals.iter().map(|(_, ty)| ty).collect();
    let actuals = &expansion.actuals;

    // A reference return borrows from the subject; bind the two lifetimes
    // explicitly because free-function elision cannot once parameters carry
    // their own references.
    let returns_reference = matches!(
        &decl.ret,
        ReturnType::Type(_, ty) if matches!(ty.as_ref(), Type::Reference(r) if r.lifetime.is_none())
    );
    let (generics, lt) = if returns_reference {
        (quote!(<'a>), quote!('a))
    } else {
        (quote!(), quote!())
    };

    let subject_param = match decl.receiver {
        SubjectRef::Shared => quote! { subject: & #lt #subject },
        SubjectRef::Exclusive => quote! { subject: & #lt mut #subject },
    };

    let ret = match &decl.ret {
        ReturnType::Default => quote!(),
        ReturnType::Type(_, ty) => match ty.as_ref() {
            Type::Reference(r) if r.lifetime.is_none() => {
                let mutability = &r.mutability;
                let elem = &r.elem;
                quote! { -> &'a #mutability #elem }
            }
            ty => quote! { -> #ty },
        },
    };

    Ok(quote! {
        #[unsafe(no_mangle)]
        #[allow(non_snake_case)]
        pub unsafe extern "C" fn #symbol #generics (#subject_param #(, #formal_names: #formal_types)*) #ret {
            subject.#callee(#(#actuals),*)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::{FnArg, Item};

    fn generate(tokens: proc_macro2::TokenStream) -> syn::File {
        let table: ProxyTable = syn::parse2(tokens).unwrap();
        let output = synthesize(&table).unwrap();
        syn::parse2(output).expect("generated code must parse as items")
    }

    fn find_fn<'a>(file: &'a syn::File, name: &str) -> &'a syn::ItemFn {
        file.items
            .iter()
            .find_map(|item| match item {
                Item::Fn(f) if f.sig.ident == name => Some(f),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no generated fn `{name}`"))
    }

    #[test]
    fn emits_one_extern_c_symbol_per_declaration() {
        let file = generate(quote! {
            impl Actor {
                fn get_skin(&self) -> i32;
                fn set_skin(&mut self, i32);
            }
        });

        let get_skin = find_fn(&file, "Actor_get_skin");
        assert!(get_skin.sig.unsafety.is_some());
        let abi = get_skin.sig.abi.as_ref().expect("extern abi");
        assert_eq!(abi.name.as_ref().unwrap().value(), "C");

        // subject only for a zero-parameter accessor
        assert_eq!(get_skin.sig.inputs.len(), 1);
        // subject plus one positional parameter
        assert_eq!(find_fn(&file, "Actor_set_skin").sig.inputs.len(), 2);
    }

    #[test]
    fn formal_parameters_are_positional_and_typed() {
        let file = generate(quote! {
            impl Actor {
                fn set_position(&mut self, Vector3, bool, f32) -> bool;
            }
        });

        let f = find_fn(&file, "Actor_set_position");
        let names: Vec<String> = f
            .sig
            .inputs
            .iter()
            .filter_map(|arg| match arg {
                FnArg::Typed(pat) => Some(quote!(#pat).to_string()),
                FnArg::Receiver(_) => None,
            })
            .collect();
        assert_eq!(
            names,
            [
                "subject : & mut Actor",
                "_1 : Vector3",
                "_2 : bool",
                "_3 : f32"
            ]
        );
    }

    #[test]
    fn body_is_a_single_forwarded_call() {
        let file = generate(quote! {
            impl Actor {
                fn set_position(&mut self, Vector3, bool, f32) -> bool;
            }
        });

        let f = find_fn(&file, "Actor_set_position");
        assert_eq!(f.block.stmts.len(), 1);
        let body = quote!(#f).to_string();
        assert!(body.contains("subject . set_position (_1 , _2 , _3)"), "{body}");
    }

    #[test]
    fn reference_return_is_bound_to_the_subject_lifetime() {
        let file = generate(quote! {
            impl Actor {
                fn get_animation(&self) -> &AnimationData;
            }
        });

        let f = find_fn(&file, "Actor_get_animation");
        assert_eq!(f.sig.generics.lifetimes().count(), 1);
        let sig = quote!(#f).to_string();
        assert!(sig.contains("subject : & 'a Actor"), "{sig}");
        assert!(sig.contains("-> & 'a AnimationData"), "{sig}");
    }

    #[test]
    fn value_and_pointer_returns_carry_no_lifetime() {
        let file = generate(quote! {
            impl ActorRegistry {
                fn create(&mut self, i32) -> *mut Actor;
            }
        });

        let f = find_fn(&file, "ActorRegistry_create");
        assert_eq!(f.sig.generics.lifetimes().count(), 0);
    }

    #[test]
    fn tagged_overload_forwards_to_the_suffixed_method() {
        let file = generate(quote! {
            impl TextDrawRegistry {
                fn create(&mut self, Vector2, StringView) -> *mut TextDraw;
                #[overload(_model)]
                fn create(&mut self, Vector2, i32) -> *mut TextDraw;
            }
        });

        let tagged = find_fn(&file, "TextDrawRegistry_create_model");
        let body = quote!(#tagged).to_string();
        assert!(body.contains("subject . create_model (_1 , _2)"), "{body}");

        let untagged = find_fn(&file, "TextDrawRegistry_create");
        let body = quote!(#untagged).to_string();
        assert!(body.contains("subject . create (_1 , _2)"), "{body}");
    }

    #[test]
    fn aliases_are_emitted_as_type_items() {
        let file = generate(quote! {
            type HoursMinutes = Pair<i32, i32>;

            impl Clock {
                fn time(&self) -> HoursMinutes;
            }
        });

        let alias = file
            .items
            .iter()
            .find_map(|item| match item {
                Item::Type(t) if t.ident == "HoursMinutes" => Some(t),
                _ => None,
            })
            .expect("alias item");
        assert_eq!(quote!(#alias).to_string(), "pub type HoursMinutes = Pair < i32 , i32 > ;");
    }

    #[test]
    fn invalid_table_produces_no_output() {
        let table: ProxyTable = syn::parse2(quote! {
            impl Actor {
                fn set_skin(&mut self, i32);
                fn set_skin(&mut self, i64);
            }
        })
        .unwrap();
        assert!(synthesize(&table).is_err());
    }
}
