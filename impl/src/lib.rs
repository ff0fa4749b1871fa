//! This crate serves as the backbone for the `enummask` crate.

#[cfg(test)]
#[macro_use]
mod test;

#[macro_use]
pub(crate) mod enumeration;
pub(crate) mod mask;
mod primitive;

/// Registers a `#[repr(uN)]` C-like enumeration for bitmask combination.
///
/// Generates a companion mask type and all bitwise operator implementations, see the
/// `enummask` crate documentation for details.
#[proc_macro_derive(Bitmask)]
pub fn bitmask(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match mask::Mask::parse(item.into()) {
        Ok(mask) => Into::<proc_macro2::TokenStream>::into(mask).into(),
        Err(error) => error.to_compile_error().into()
    }
}
