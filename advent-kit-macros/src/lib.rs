//! Derive macros for advent-kit
//!
//! - `#[derive(Solver)]` writes the runtime part dispatch from the
//!   `PartSolver<N>` impls of a type.
//! - `#[derive(RegisterSolver)]` submits the type as a `SolverPlugin` so it is
//!   picked up by `RegistryBuilder::register_all_plugins`.

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span};
use quote::quote;
use syn::{DeriveInput, Lit, LitStr, parse_macro_input};

/// Implements `advent_kit::Solver` by dispatching part `k` to
/// `<Self as PartSolver<k>>::solve` for `k` in `1..=parts`.
///
/// ```ignore
/// #[derive(Solver)]
/// #[solver(parts = 2)]
/// struct Day4;
///
/// impl PartSolver<1> for Day4 { /* ... */ }
/// impl PartSolver<2> for Day4 { /* ... */ }
/// ```
///
/// Every part in `1..=parts` must have a `PartSolver` impl, otherwise the
/// generated code fails to compile with an unsatisfied trait bound.
#[proc_macro_derive(Solver, attributes(solver))]
pub fn derive_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "#[derive(Solver)] requires #[solver(parts = N)]")
        })?;

    let mut parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: syn::LitInt = meta.value()?.parse()?;
            parts = Some(value.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported solver attribute, expected `parts`"))
        }
    })?;

    let parts = parts.ok_or_else(|| syn::Error::new_spanned(attr, "missing `parts = N`"))?;
    if parts == 0 {
        return Err(syn::Error::new_spanned(attr, "`parts` must be at least 1"));
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let arms = (1..=parts).map(|part| {
        let lit = Literal::u8_unsuffixed(part);
        quote! {
            #lit => <Self as ::advent_kit::PartSolver<#lit>>::solve(shared),
        }
    });

    Ok(quote! {
        impl #impl_generics ::advent_kit::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut <Self as ::advent_kit::PuzzleParser>::Shared<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::advent_kit::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::advent_kit::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Registers a solver with the plugin system.
///
/// # Attributes
///
/// - `year`: required, the puzzle year
/// - `day`: required, the puzzle day (1-25)
/// - `tags`: optional list of string literals used for filtering
///
/// ```ignore
/// #[derive(Solver, RegisterSolver)]
/// #[solver(parts = 2)]
/// #[puzzle(year = 2025, day = 4, tags = ["grid"])]
/// pub struct Day4;
/// ```
///
/// The type must implement `advent_kit::Solver`; the generated code checks
/// this with a private trait bound so the error points at the type.
#[proc_macro_derive(RegisterSolver, attributes(puzzle))]
pub fn derive_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(RegisterSolver)] does not support generic types",
        ));
    }

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "#[derive(RegisterSolver)] requires #[puzzle(year = .., day = ..)]",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: syn::LitInt = meta.value()?.parse()?;
            year = Some(value.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let value: syn::LitInt = meta.value()?.parse()?;
            let parsed: u8 = value.base10_parse()?;
            if !(1..=25).contains(&parsed) {
                return Err(syn::Error::new_spanned(value, "day must be between 1 and 25"));
            }
            day = Some(parsed);
        } else if meta.path.is_ident("tags") {
            let content;
            let _ = meta.value()?;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(tag) => tags.push(tag),
                    other => return Err(syn::Error::new_spanned(other, "tags must be strings")),
                }
                if content.peek(syn::Token![,]) {
                    content.parse::<syn::Token![,]>()?;
                }
            }
        } else {
            return Err(meta.error("unsupported puzzle attribute, expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new(Span::call_site(), "missing `year = ..`"))?;
    let day = day.ok_or_else(|| syn::Error::new(Span::call_site(), "missing `day = ..`"))?;

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::advent_kit::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_kit::inventory::submit! {
            ::advent_kit::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}
