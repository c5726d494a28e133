// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Procedural macros for the Ember engine.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, Index, Member, Type};

/// Implements `ember_core::event::Event` and `ember_core::event::StaticEvent`.
///
/// ```ignore
/// #[derive(Debug, Clone, Default, Event)]
/// #[event(kind = KeyReleased, category(INPUT, KEYBOARD), custom_display)]
/// pub struct KeyReleasedEvent {
///     key_code: KeyCode,
///     state: EventState,
/// }
/// ```
///
/// * `kind` names the `EventType` variant the struct reports.
/// * `category(..)` lists the `EventCategory` flags it belongs to.
/// * `custom_display` skips the generated `Display` (which prints the type name) so the
///   struct can print its payload instead.
///
/// The struct must hold exactly one `EventState` field.
#[proc_macro_derive(Event, attributes(event))]
pub fn derive_event(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_event(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct EventAttributes {
    kind: Ident,
    categories: Vec<Ident>,
    custom_display: bool,
}

fn expand_event(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let EventAttributes {
        kind,
        categories,
        custom_display,
    } = parse_event_attributes(input)?;
    let state = find_state_field(input)?;

    let display = if custom_display {
        quote! {}
    } else {
        quote! {
            impl #impl_generics ::core::fmt::Display for #name #ty_generics #where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(::ember_core::event::Event::name(self))
                }
            }
        }
    };

    Ok(quote! {
        impl #impl_generics ::ember_core::event::StaticEvent for #name #ty_generics #where_clause {
            const STATIC_TYPE: ::ember_core::event::EventType =
                ::ember_core::event::EventType::#kind;
            const CATEGORY: ::ember_core::event::EventCategory =
                ::ember_core::event::EventCategory::EMPTY
                    #(.with(::ember_core::event::EventCategory::#categories))*;
        }

        impl #impl_generics ::ember_core::event::Event for #name #ty_generics #where_clause {
            fn event_type(&self) -> ::ember_core::event::EventType {
                <Self as ::ember_core::event::StaticEvent>::STATIC_TYPE
            }

            fn name(&self) -> &'static str {
                <Self as ::ember_core::event::StaticEvent>::STATIC_TYPE.name()
            }

            fn category_flags(&self) -> ::ember_core::event::EventCategory {
                <Self as ::ember_core::event::StaticEvent>::CATEGORY
            }

            fn state(&self) -> &::ember_core::event::EventState {
                &self.#state
            }

            fn state_mut(
                &mut self,
                _token: &::ember_core::event::__private::DispatchToken,
            ) -> &mut ::ember_core::event::EventState {
                &mut self.#state
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }
        }

        #display
    })
}

fn parse_event_attributes(input: &DeriveInput) -> syn::Result<EventAttributes> {
    let mut kind = None;
    let mut categories = Vec::new();
    let mut custom_display = false;

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("event")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("kind") {
                kind = Some(meta.value()?.parse::<Ident>()?);
                Ok(())
            } else if meta.path.is_ident("category") {
                meta.parse_nested_meta(|flag| match flag.path.get_ident() {
                    Some(ident) => {
                        categories.push(ident.clone());
                        Ok(())
                    }
                    None => Err(flag.error("expected an `EventCategory` flag name")),
                })
            } else if meta.path.is_ident("custom_display") {
                custom_display = true;
                Ok(())
            } else {
                Err(meta.error("expected `kind`, `category` or `custom_display`"))
            }
        })?;
    }

    let kind = kind.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "missing `#[event(kind = ...)]` attribute")
    })?;

    Ok(EventAttributes {
        kind,
        categories,
        custom_display,
    })
}

/// Finds the single field whose type is (a path ending in) `EventState`.
fn find_state_field(input: &DeriveInput) -> syn::Result<Member> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`Event` can only be derived for structs",
            ))
        }
    };

    let mut candidates = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| is_event_state(&field.ty))
        .map(|(index, field)| match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        });

    match (candidates.next(), candidates.next()) {
        (Some(member), None) => Ok(member),
        (None, _) => Err(syn::Error::new_spanned(
            &input.ident,
            match fields {
                Fields::Unit => "an event needs an `EventState` field, unit structs have none",
                _ => "an event needs exactly one `EventState` field",
            },
        )),
        (Some(_), Some(_)) => Err(syn::Error::new_spanned(
            &input.ident,
            "an event must hold only one `EventState` field",
        )),
    }
}

fn is_event_state(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "EventState"),
        _ => false,
    }
}
