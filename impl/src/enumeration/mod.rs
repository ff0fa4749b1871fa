//! Contains all data types to represent a C-like enumeration.

#[macro_use]
pub(crate) mod parse;

/// Stores all necessary information about a C-like enumeration from a `derive` perspective.
pub(crate) struct Enumeration {
    pub(crate) repr: syn::Ident,
    pub(crate) vis: syn::Visibility,
    pub(crate) ident: syn::Ident,
    pub(crate) variants: Vec<syn::Ident>
}
