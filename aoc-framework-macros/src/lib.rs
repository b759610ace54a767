//! Procedural macros for the `aoc-framework` crate.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Properties given to `#[solution_runner(...)]`.
#[derive(Default)]
struct RunnerProperties {
    /// Expression resolving to the solution's display name (`&str`).
    name: Option<Expr>,
    /// Type implementing `ParseData`, when the solution parses its input first.
    parsed: Option<Type>,
    /// Type implementing `Solution<PartOne>`.
    part_one: Option<Type>,
    /// Type implementing `Solution<PartTwo>`.
    part_two: Option<Type>,
}

impl RunnerProperties {
    fn parse_property(&mut self, meta: &ParseNestedMeta) -> syn::Result<()> {
        fn set<T: syn::parse::Parse>(
            slot: &mut Option<T>,
            key: &str,
            meta: &ParseNestedMeta,
        ) -> syn::Result<()> {
            if slot.is_some() {
                return Err(meta.error(format!("duplicate '{key}' property")));
            }
            *slot = Some(meta.value()?.parse()?);
            Ok(())
        }

        if meta.path.is_ident("name") {
            set(&mut self.name, "name", meta)
        } else if meta.path.is_ident("parsed") {
            set(&mut self.parsed, "parsed", meta)
        } else if meta.path.is_ident("part_one") {
            set(&mut self.part_one, "part_one", meta)
        } else if meta.path.is_ident("part_two") {
            set(&mut self.part_two, "part_two", meta)
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    }
}

fn missing_property(key: &str) -> TokenStream {
    Error::new(
        Span::call_site(),
        format!("missing required property: '{key}'"),
    )
    .to_compile_error()
    .into()
}

/// Procedural macro attribute that generates a `SolutionRunner` implementation.
///
/// # Properties
///
/// - `name` (required): An expression evaluating to `&str`, the solution's display name.
/// - `part_one` (required): The type implementing `Solution<PartOne>`.
/// - `part_two` (required): The type implementing `Solution<PartTwo>`.
/// - `parsed` (optional): A type implementing `ParseData`. The input is parsed once and both parts
///   receive the parsed records. If omitted, both parts receive the input string.
///
/// # Errors
///
/// Returns a compile error if the attribute is applied to anything other than a struct or impl
/// block, a required property is missing, or a property is unsupported or repeated.
///
/// # Examples
///
/// ```ignore
/// #[solution_runner(name = "Day 2: Cube Conundrum", parsed = Games, part_one = Day02, part_two = Day02)]
/// impl super::AdventOfCode2023<2> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut properties = RunnerProperties::default();
    let properties_parser = syn::meta::parser(|meta| properties.parse_property(&meta));
    parse_macro_input!(args with properties_parser);

    let Some(name_expr) = properties.name else {
        return missing_property("name");
    };
    let Some(part_one_ty) = properties.part_one else {
        return missing_property("part_one");
    };
    let Some(part_two_ty) = properties.part_two else {
        return missing_property("part_two");
    };

    let solve_function_call = match properties.parsed {
        None => quote! {
            aoc_framework::runner::solve_full_solution::<#part_one_ty, #part_two_ty>(
                #name_expr,
                input,
                handler,
                timed
            )
        },
        Some(parsed_ty) => quote! {
            aoc_framework::runner::solve_parsed_full_solution::<
                #parsed_ty,
                #part_one_ty,
                #part_two_ty
            >(#name_expr, input, handler, timed)
        },
    };

    let original_input = proc_macro2::TokenStream::from(input.clone());
    let item = parse_macro_input!(input as Item);

    let runner_ty = match item {
        Item::Struct(ItemStruct { ident, .. }) => quote! { #ident },
        Item::Impl(ItemImpl { self_ty, .. }) => quote! { #self_ty },
        _ => {
            return Error::new(
                Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    TokenStream::from(quote! {
        #original_input

        impl aoc_framework::runner::SolutionRunner for #runner_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool
            ) -> aoc_framework::DynamicResult<()> {
                #solve_function_call
            }
        }
    })
}
