//! Contains code to generate the companion mask type and the operator implementations.

impl super::Mask {
    /// Returns the identifier of the generated mask type, the enumeration's name with a
    /// `Mask` suffix.
    fn mask_ident(&self) -> syn::Ident {
        syn::Ident::new(&format!("{}Mask", self.0.ident), self.0.ident.span())
    }

    /// Generates a `const fn iter() -> &'static [Self]` implementation.
    fn generate_iter(&self) -> proc_macro2::TokenStream {
        let variants = &self.0.variants;
        let vis = &self.0.vis;

        quote::quote! {
            /// Returns an array containing all enumeration variants in the defined order.
            #[inline(always)]
            #vis const fn iter() -> &'static [Self] {
                &[#(Self::#variants),*]
            }
        }
    }

    /// Generates the mask structure and its inherent implementation.
    fn generate_struct(&self) -> proc_macro2::TokenStream {
        let mask = self.mask_ident();
        let repr = &self.0.repr;
        let vis = &self.0.vis;
        let doc = format!(
            "A set of [`{}`] flags combined into one `{}` value.", self.0.ident, repr
        );

        quote::quote! {
            #[doc = #doc]
            #[repr(transparent)]
            #[derive(Clone, Copy, Eq, PartialEq)]
            #vis struct #mask(#repr);

            impl #mask {
                /// Creates a mask with no bits set.
                #[inline(always)]
                #vis const fn new() -> Self {
                    Self(0)
                }

                /// Creates a mask from a raw bit pattern.
                #[inline(always)]
                #vis const fn from_bits(bits: #repr) -> Self {
                    Self(bits)
                }

                /// Returns the raw bit pattern.
                #[inline(always)]
                #vis const fn bits(&self) -> #repr {
                    self.0
                }
            }
        }
    }

    /// Generates the four operand combinations of one binary bitwise operator.
    fn generate_binary_op(&self, op_trait: &str, op_fn: &str) -> proc_macro2::TokenStream {
        let ident = &self.0.ident;
        let mask = self.mask_ident();
        let repr = &self.0.repr;
        let op_trait = syn::Ident::new(op_trait, proc_macro2::Span::call_site());
        let op_fn = syn::Ident::new(op_fn, proc_macro2::Span::call_site());

        quote::quote! {
            impl core::ops::#op_trait for #ident {
                type Output = #mask;

                #[inline(always)]
                fn #op_fn(self, rhs: Self) -> Self::Output {
                    #mask(core::ops::#op_trait::#op_fn(self as #repr, rhs as #repr))
                }
            }

            impl core::ops::#op_trait<#mask> for #ident {
                type Output = #mask;

                #[inline(always)]
                fn #op_fn(self, rhs: #mask) -> Self::Output {
                    #mask(core::ops::#op_trait::#op_fn(self as #repr, rhs.0))
                }
            }

            impl core::ops::#op_trait<#ident> for #mask {
                type Output = #mask;

                #[inline(always)]
                fn #op_fn(self, rhs: #ident) -> Self::Output {
                    #mask(core::ops::#op_trait::#op_fn(self.0, rhs as #repr))
                }
            }

            impl core::ops::#op_trait for #mask {
                type Output = #mask;

                #[inline(always)]
                fn #op_fn(self, rhs: Self) -> Self::Output {
                    #mask(core::ops::#op_trait::#op_fn(self.0, rhs.0))
                }
            }
        }
    }

    /// Generates the `BitOr`, `BitAnd` and `BitXor` implementations.
    fn generate_binary_ops(&self) -> proc_macro2::TokenStream {
        let mut result = proc_macro2::TokenStream::new();

        for (op_trait, op_fn) in [("BitOr", "bitor"), ("BitAnd", "bitand"), ("BitXor", "bitxor")] {
            result.extend(self.generate_binary_op(op_trait, op_fn));
        }

        result
    }

    /// Generates the `Not` implementations. The complement is bounded by the representation's
    /// width.
    fn generate_not(&self) -> proc_macro2::TokenStream {
        let ident = &self.0.ident;
        let mask = self.mask_ident();
        let repr = &self.0.repr;

        quote::quote! {
            impl core::ops::Not for #ident {
                type Output = #mask;

                #[inline(always)]
                fn not(self) -> Self::Output {
                    #mask(!(self as #repr))
                }
            }

            impl core::ops::Not for #mask {
                type Output = #mask;

                #[inline(always)]
                fn not(self) -> Self::Output {
                    #mask(!self.0)
                }
            }
        }
    }

    /// Generates one compound assignment operator for enumeration and mask right-hand sides.
    fn generate_assign_op(
        &self, op_trait: &str, op_fn: &str, base_trait: &str, base_fn: &str
    ) -> proc_macro2::TokenStream {
        let ident = &self.0.ident;
        let mask = self.mask_ident();
        let repr = &self.0.repr;
        let op_trait = syn::Ident::new(op_trait, proc_macro2::Span::call_site());
        let op_fn = syn::Ident::new(op_fn, proc_macro2::Span::call_site());
        let base_trait = syn::Ident::new(base_trait, proc_macro2::Span::call_site());
        let base_fn = syn::Ident::new(base_fn, proc_macro2::Span::call_site());

        quote::quote! {
            impl core::ops::#op_trait<#ident> for #mask {
                #[inline(always)]
                fn #op_fn(&mut self, rhs: #ident) {
                    self.0 = core::ops::#base_trait::#base_fn(self.0, rhs as #repr);
                }
            }

            impl core::ops::#op_trait for #mask {
                #[inline(always)]
                fn #op_fn(&mut self, rhs: Self) {
                    self.0 = core::ops::#base_trait::#base_fn(self.0, rhs.0);
                }
            }
        }
    }

    /// Generates the `BitOrAssign`, `BitAndAssign` and `BitXorAssign` implementations.
    fn generate_assign_ops(&self) -> proc_macro2::TokenStream {
        let mut result = proc_macro2::TokenStream::new();

        for (op_trait, op_fn, base_trait, base_fn) in [
            ("BitOrAssign", "bitor_assign", "BitOr", "bitor"),
            ("BitAndAssign", "bitand_assign", "BitAnd", "bitand"),
            ("BitXorAssign", "bitxor_assign", "BitXor", "bitxor")
        ] {
            result.extend(self.generate_assign_op(op_trait, op_fn, base_trait, base_fn));
        }

        result
    }

    /// Generates the `From` and `enummask::Bitmask` implementations.
    fn generate_conversions(&self) -> proc_macro2::TokenStream {
        let ident = &self.0.ident;
        let mask = self.mask_ident();
        let repr = &self.0.repr;

        quote::quote! {
            impl core::convert::From<#ident> for #mask {
                #[inline(always)]
                fn from(flag: #ident) -> Self {
                    Self(flag as #repr)
                }
            }

            impl ::enummask::Bitmask for #ident {
                type Repr = #repr;

                #[inline(always)]
                fn bits(self) -> Self::Repr {
                    self as #repr
                }

                #[inline(always)]
                fn bits_u64(self) -> u64 {
                    self as u64
                }
            }

            impl ::enummask::Bitmask for #mask {
                type Repr = #repr;

                #[inline(always)]
                fn bits(self) -> Self::Repr {
                    self.0
                }

                #[inline(always)]
                fn bits_u64(self) -> u64 {
                    self.0 as u64
                }
            }
        }
    }

    /// Generates a `core::fmt::Debug` implementation. A named constant reads `true` if all of
    /// its bits are set.
    fn generate_debug(&self) -> proc_macro2::TokenStream {
        let ident = &self.0.ident;
        let mask = self.mask_ident();
        let repr = &self.0.repr;
        let variants = &self.0.variants;

        quote::quote! {
            impl core::fmt::Debug for #mask {
                fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                    let mut f = f.debug_struct(stringify!(#mask));

                    #(
                        f.field(
                            stringify!(#variants),
                            &((self.0 & (#ident::#variants as #repr)) == (#ident::#variants as #repr))
                        );
                    )*

                    f.finish()
                }
            }
        }
    }

    /// Generates a `core::fmt::Display` implementation in the `A | B` format, `-` if no named
    /// constant is contained.
    fn generate_display(&self) -> proc_macro2::TokenStream {
        let ident = &self.0.ident;
        let mask = self.mask_ident();
        let repr = &self.0.repr;
        let variants = &self.0.variants;

        quote::quote! {
            impl core::fmt::Display for #mask {
                fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                    let mut first = true;

                    #(
                        if (self.0 & (#ident::#variants as #repr)) == (#ident::#variants as #repr)
                            && (#ident::#variants as #repr) != 0
                        {
                            if !first {
                                f.write_str(" | ")?;
                            }

                            f.write_str(stringify!(#variants))?;
                            first = false;
                        }
                    )*

                    if first {
                        f.write_str("-")?;
                    }

                    Ok(())
                }
            }
        }
    }
}

/// Generates the user code for a registered enumeration.
impl core::convert::Into<proc_macro2::TokenStream> for super::Mask {
    fn into(self) -> proc_macro2::TokenStream {
        let ident = &self.0.ident;

        let iter = self.generate_iter();
        let structure = self.generate_struct();
        let binary_ops = self.generate_binary_ops();
        let not = self.generate_not();
        let assign_ops = self.generate_assign_ops();
        let conversions = self.generate_conversions();
        let debug = self.generate_debug();
        let display = self.generate_display();

        quote::quote! {
            impl #ident {
                #iter
            }

            #structure
            #binary_ops
            #not
            #assign_ops
            #conversions
            #debug
            #display
        }
    }
}
