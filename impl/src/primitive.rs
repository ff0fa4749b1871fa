//! Contains primitive type related helper functions.

pub(crate) fn is_unsigned_primitive(ident: &syn::Ident) -> bool {
    ident == "u8" || ident == "u16" || ident == "u32" || ident == "u64" || ident == "u128"
}

/// Returns the amount of bits an unsigned primitive type can store.
pub(crate) fn primitive_bits(ident: &syn::Ident) -> Option<u8> {
    if ident == "u8" { Some(8) }
    else if ident == "u16" { Some(16) }
    else if ident == "u32" { Some(32) }
    else if ident == "u64" { Some(64) }
    else if ident == "u128" { Some(128) }
    else { None }
}
