//!
//! Macros for the main crate.
//!

mod type_traversal;
mod utils;

use proc_macro::TokenStream as Tokens;
use quote::quote;
use syn::parse_macro_input;
use type_traversal::{field_access, is_named_type};
use utils::get_struct_member_where_type;

///
/// ## Spanned
///
/// Derives `crate::common::Spanned` for span-carrying structs,
/// returning their first field of type `Span`.
///
/// ### Example
///
/// ```ignore
/// #[derive(Debug, Spanned)]
/// pub struct Trivia {
///     span: Span,
/// }
/// ```
///
#[proc_macro_derive(Spanned)]
pub fn spanned(target: Tokens) -> Tokens {
    let item: syn::Item = parse_macro_input!(target);

    let st = match item {
        syn::Item::Struct(st) => st,
        other => {
            return syn::Error::new_spanned(other, "Spanned can only be derived for structs.")
                .into_compile_error()
                .into()
        }
    };

    let Some(member) = get_struct_member_where_type(&st, |ty| is_named_type(ty, "Span").is_some())
    else {
        return syn::Error::new_spanned(st, "Expected a field of type `Span`.")
            .into_compile_error()
            .into();
    };

    let body = field_access(member);
    let ident = &st.ident;
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    quote! {
        impl #impl_generics crate::common::Spanned for #ident #ty_generics #where_clause {
            fn span(&self) -> crate::common::Span {
                #body
            }
        }
    }
    .into()
}
