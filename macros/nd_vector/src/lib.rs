use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, LitInt};

/// Implements the arithmetic operators, `Dot`, `PartialEq` and the binary
/// field codec (`Portable`) for `NdVector<N, f32>` with the given `N`.
///
/// The expansion refers to `NdVector`, `Dot`, `Portable`, `ByteReader`,
/// `ByteWriter` and `ReaderErr`, so these must be in scope at the call site.
#[proc_macro]
pub fn impl_ndvector_ops_for_dim(input: TokenStream) -> TokenStream {
    let n = match parse_macro_input!(input as LitInt).base10_parse::<usize>() {
        Ok(n) => n,
        Err(err) => return err.to_compile_error().into(),
    };

    let indices_add_assign = (0..n).map(|i| {
        quote! { self.data[#i] += rhs.data[#i]; }
    });
    let indices_sub_assign = (0..n).map(|i| {
        quote! { self.data[#i] -= rhs.data[#i]; }
    });
    let indices_mul_assign = (0..n).map(|i| {
        quote! { self.data[#i] *= rhs; }
    });
    let indices_div_assign = (0..n).map(|i| {
        quote! { self.data[#i] /= rhs; }
    });
    let indices_neg = (0..n).map(|i| {
        quote! { -self.data[#i] }
    });
    let indices_dot = (0..n).map(|i| {
        quote! { result += self.data[#i] * rhs.data[#i]; }
    });
    let indices_partial_eq = (0..n).map(|i| {
        quote! { self.data[#i] == rhs.data[#i] }
    });
    let indices_portable_write_to = (0..n).map(|i| {
        quote! { writer.write_f32(self.data[#i]); }
    });
    let indices_portable_read_from = (0..n).map(|i| {
        quote! { data[#i] = reader.read_f32()?; }
    });

    let expanded = quote! {
        impl<T> std::ops::Add for NdVector<#n, T>
            where
                T: std::ops::AddAssign + Copy
        {
            type Output = NdVector<#n, T>;

            fn add(mut self, rhs: Self) -> Self::Output {
                self += rhs;
                self
            }
        }

        impl<T> std::ops::AddAssign for NdVector<#n, T>
            where
                T: std::ops::AddAssign + Copy
        {
            fn add_assign(&mut self, rhs: Self) {
                #(#indices_add_assign)*
            }
        }

        impl<T> std::ops::Sub for NdVector<#n, T>
            where
                T: std::ops::SubAssign + Copy
        {
            type Output = NdVector<#n, T>;

            fn sub(mut self, rhs: Self) -> Self::Output {
                self -= rhs;
                self
            }
        }

        impl<T> std::ops::SubAssign for NdVector<#n, T>
            where
                T: std::ops::SubAssign + Copy
        {
            fn sub_assign(&mut self, rhs: Self) {
                #(#indices_sub_assign)*
            }
        }

        impl<T> std::ops::Mul<T> for NdVector<#n, T>
            where
                T: std::ops::MulAssign + Copy
        {
            type Output = NdVector<#n, T>;

            fn mul(mut self, rhs: T) -> Self::Output {
                self *= rhs;
                self
            }
        }

        impl<T> std::ops::MulAssign<T> for NdVector<#n, T>
            where
                T: std::ops::MulAssign + Copy
        {
            fn mul_assign(&mut self, rhs: T) {
                #(#indices_mul_assign)*
            }
        }

        impl<T> std::ops::Div<T> for NdVector<#n, T>
            where
                T: std::ops::DivAssign + Copy
        {
            type Output = NdVector<#n, T>;

            fn div(mut self, rhs: T) -> Self::Output {
                self /= rhs;
                self
            }
        }

        impl<T> std::ops::DivAssign<T> for NdVector<#n, T>
            where
                T: std::ops::DivAssign + Copy
        {
            fn div_assign(&mut self, rhs: T) {
                #(#indices_div_assign)*
            }
        }

        impl<T> std::ops::Neg for NdVector<#n, T>
            where
                T: std::ops::Neg<Output = T> + Copy
        {
            type Output = NdVector<#n, T>;

            fn neg(self) -> Self::Output {
                NdVector {
                    data: [#(#indices_neg),*],
                }
            }
        }

        impl Dot for NdVector<#n, f32> {
            type Product = f32;
            fn dot(self, rhs: Self) -> Self::Product {
                let mut result = 0.0;
                #(#indices_dot)*
                result
            }
        }

        impl<T> PartialEq for NdVector<#n, T>
            where T: PartialEq
        {
            fn eq(&self, rhs: &Self) -> bool {
                true #(&& #indices_partial_eq)*
            }
        }

        impl Portable for NdVector<#n, f32> {
            fn write_to<W>(&self, writer: &mut W)
                where W: ByteWriter
            {
                #(#indices_portable_write_to)*
            }

            fn read_from<R>(reader: &mut R) -> Result<Self, ReaderErr>
                where R: ByteReader
            {
                let mut data = [0.0_f32; #n];
                #(#indices_portable_read_from)*
                Ok(Self {
                    data,
                })
            }
        }
    };

    TokenStream::from(expanded)
}


/// Expands `impl_ndvector_ops_for_dim!` for every dimension from 2 up to the
/// given maximum, e.g. `impl_ndvector_ops!(4)`.
#[proc_macro]
pub fn impl_ndvector_ops(input: TokenStream) -> TokenStream {
    // The literal is forwarded as written, since `seq!` wants unsuffixed bounds.
    let max_dim = parse_macro_input!(input as LitInt);
    if let Err(err) = max_dim.base10_parse::<usize>() {
        return err.to_compile_error().into();
    }

    let expanded = quote! {
        use nd_vector::impl_ndvector_ops_for_dim;
        seq_macro::seq!(N in 2..=#max_dim {
            impl_ndvector_ops_for_dim!(N);
        });
    };

    TokenStream::from(expanded)
}
