use proc_macro2::TokenStream as TokenStream2;
use syn::Token;
use syn::parse::{self, Parse, ParseStream};

/// Arguments of `#[context(...)]`: an optional leading `move,` followed by `format!` arguments.
#[derive(Debug)]
pub struct ContextArgs {
	pub move_token: Option<Token![move]>,
	pub format_args: TokenStream2,
}

impl Parse for ContextArgs {
	fn parse(input: ParseStream<'_>) -> parse::Result<Self> {
		let mut move_token = None;
		if input.peek(Token![move]) {
			move_token = Some(input.parse()?);
			input.parse::<Token![,]>()?;
		}
		Ok(Self {
			move_token,
			format_args: input.parse()?,
		})
	}
}
