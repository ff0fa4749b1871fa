//! Contains code to parse a registered enumeration.

impl super::Mask {
    pub(crate) fn parse(item: proc_macro2::TokenStream) -> syn::Result<Self> {
        let enumeration = crate::enumeration::Enumeration::parse(item)?;

        // The convenience macros widen every operand to `u64`.
        if crate::primitive::primitive_bits(&enumeration.repr).unwrap_or(0) > 64 {
            return Err(syn::Error::new(
                enumeration.repr.span(), "expected a representation of at most 64 bits"
            ));
        }

        Ok(Self(enumeration))
    }
}
