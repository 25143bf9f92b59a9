//! Procedural macros for `raster_kit`.
//!
//! [`macro@context`] wraps the body of a function returning `anyhow::Result` so that any error
//! leaving the function carries an additional, formatted context line.

mod args;

use args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{ToTokens, quote};
use syn::{ItemFn, ReturnType, parse_macro_input};

/// Attaches `format!(...)` context to the error returned by the annotated function.
///
/// ```ignore
/// #[context("cropping {}x{} to {}x{}", self.width(), self.height(), width, height)]
/// fn get_cropped(&self, width: u32, height: u32) -> Result<DynamicImage> { ... }
/// ```
///
/// The format arguments are evaluated only on the error path, after the body has run, so they
/// must not refer to values the body moves out of. Prefix the arguments with `move,` to turn the
/// wrapping closure into a `move` closure.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let ContextArgs {
		move_token,
		format_args,
	} = parse_macro_input!(args as ContextArgs);
	let mut function = parse_macro_input!(input as ItemFn);

	let ReturnType::Type(_, return_type) = &function.sig.output else {
		return syn::Error::new_spanned(&function.sig, "#[context] requires a function returning Result")
			.to_compile_error()
			.into();
	};

	let body = &function.block;
	let err = Ident::new("err", Span::mixed_site());
	let once = Ident::new("once", Span::mixed_site());

	let wrapped = if function.sig.asyncness.is_some() {
		let result = Ident::new("result", Span::mixed_site());
		quote! {
			let #result: #return_type = async #move_token { #body }.await;
			#result.map_err(|#err| #err.context(format!(#format_args)).into())
		}
	} else {
		// Capturing a non-`Copy` value makes the closure `FnOnce`, so the body may move out of `self`.
		quote! {
			let #once = ::core::iter::empty::<()>();
			(#move_token || -> #return_type {
				::core::mem::drop(#once);
				#body
			})()
			.map_err(|#err| #err.context(format!(#format_args)).into())
		}
	};
	function.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(wrapped), None)];

	function.into_token_stream().into()
}
