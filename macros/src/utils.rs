//!
//! Utilities for the derive macros.
//!

use crate::type_traversal::{index, ToMember};

///
/// Finds the first field of a struct whose type satisfies `pred`.
///
pub fn get_struct_member_where_type(
    st: &syn::ItemStruct,
    pred: impl Fn(&syn::Type) -> bool,
) -> Option<syn::Member> {
    match &st.fields {
        syn::Fields::Named(syn::FieldsNamed { named, .. }) => named
            .iter()
            .find(|f| pred(&f.ty))
            .and_then(|f| f.ident.clone())
            .map(ToMember::to_member),
        syn::Fields::Unnamed(syn::FieldsUnnamed { unnamed, .. }) => unnamed
            .iter()
            .enumerate()
            .find(|(_, f)| pred(&f.ty))
            .map(|(i, _)| index(i as u32).to_member()),
        syn::Fields::Unit => None,
    }
}
