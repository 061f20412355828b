use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, quote_spanned, ToTokens, TokenStreamExt as _};
use syn::{
    ext::IdentExt as _,
    parse::{Error, Parse, ParseStream, Result},
    spanned::Spanned as _,
    Attribute, Ident, ItemFn, LitStr, Path, Token,
};

macro_rules! try_quote {
    ($e:expr) => {
        match $e {
            Ok(parsed) => parsed,
            Err(err) => return err.to_compile_error(),
        }
    };
}

pub(crate) fn test_case(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut item = try_quote!(syn::parse2::<ItemFn>(item));

    match &item.sig.generics {
        generics if generics.params.is_empty() => (),
        generics => {
            return Error::new_spanned(
                generics,
                "test case functions cannot take generic parameters",
            )
            .to_compile_error();
        }
    }

    if let Some(asyncness) = &item.sig.asyncness {
        return Error::new_spanned(asyncness, "test case functions must be synchronous")
            .to_compile_error();
    }

    let args = try_quote!(syn::parse2::<Args>(args));
    let params = try_quote!(Params::from_attrs(&mut item.attrs));

    Generated {
        item: &item,
        args: &args,
        params: &params,
    }
    .to_token_stream()
}

struct Args {
    suite: String,
    name: Option<String>,
}

impl Parse for Args {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let span = input.span();

        let mut suite = None;
        let mut name = None;

        while !input.is_empty() {
            // Unknown keys are diagnosed on the key's span; `= value` is
            // consumed only for known keys.
            match input.call(Ident::parse_any)? {
                key if key == "suite" => {
                    let _: Token![=] = input.parse()?;
                    if suite.replace(parse_name_value(input)?).is_some() {
                        return Err(Error::new_spanned(&key, "duplicate parameter: suite"));
                    }
                }
                key if key == "name" => {
                    let _: Token![=] = input.parse()?;
                    if name.replace(parse_name_value(input)?).is_some() {
                        return Err(Error::new_spanned(&key, "duplicate parameter: name"));
                    }
                }
                key => return Err(Error::new_spanned(&key, "unknown parameter name")),
            }

            if !input.is_empty() {
                let _: Token![,] = input.parse()?;
            }
        }

        let suite =
            suite.ok_or_else(|| Error::new(span, "missing required parameter: suite"))?;
        if suite.is_empty() {
            return Err(Error::new(span, "suite name must not be empty"));
        }

        Ok(Self { suite, name })
    }
}

fn parse_name_value(input: ParseStream<'_>) -> Result<String> {
    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        Ok(lit.value())
    } else {
        let ident = input.call(Ident::parse_any)?;
        Ok(ident.to_string())
    }
}

struct Params {
    crate_path: Path,
}

impl Params {
    fn from_attrs(attrs: &mut Vec<Attribute>) -> Result<Self> {
        let mut crate_path = None;
        let mut errors = Errors::default();

        let mut parse_attr = |input: ParseStream<'_>| -> Result<()> {
            match input.call(Ident::parse_any)? {
                id if id == "crate" => {
                    let _: Token![=] = input.parse()?;
                    let path = input.call(Path::parse_mod_style)?;
                    crate_path.replace(path);
                    Ok(())
                }
                id => Err(Error::new_spanned(id, "unknown parameter name")),
            }
        };

        attrs.retain(|attr| {
            if !attr.path.is_ident("tally") {
                return true;
            }
            errors.append_if_error(attr.parse_args_with(&mut parse_attr));
            false
        });

        errors.into_result()?;

        Ok(Self {
            crate_path: crate_path.unwrap_or_else(|| syn::parse_quote!(::tally)),
        })
    }
}

#[derive(Default)]
struct Errors(Option<Error>);

impl Errors {
    fn append_if_error(&mut self, res: Result<()>) {
        if let Err(error) = res {
            match &mut self.0 {
                Some(errors) => errors.combine(error),
                slot => {
                    slot.replace(error);
                }
            }
        }
    }

    fn into_result(self) -> Result<()> {
        match self.0 {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }
}

struct Generated<'a> {
    args: &'a Args,
    params: &'a Params,
    item: &'a ItemFn,
}

impl ToTokens for Generated<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let crate_path = &self.params.crate_path;
        let item = &*self.item;
        let ident = &self.item.sig.ident;

        let location = quote_spanned!(self.item.sig.span() => __tally::location!());
        let suite = LitStr::new(&self.args.suite, Span::call_site());
        let name = match &self.args.name {
            Some(name) => LitStr::new(name, Span::call_site()),
            None => LitStr::new(&ident.to_string(), Span::call_site()),
        };

        // Test case descriptor.
        tokens.append_all(Some(quote! {
            #[allow(non_upper_case_globals)]
            const #ident: & #crate_path::_test_reexports::TestCase = {
                #[allow(unused_imports)]
                use #crate_path::_test_reexports as __tally;

                #item

                &__tally::TestCase {
                    desc: __tally::TestDesc {
                        suite: #suite,
                        name: #name,
                        location: #location,
                    },
                    testfn: #ident,
                }
            };
        }));

        // Registration at link time.
        let register_id = format_ident!("__TEST_CASE_{}", ident);
        tokens.append_all(Some(quote! {
            #crate_path::__test_case! {
                #[allow(non_upper_case_globals)]
                static #register_id: & #crate_path::_test_reexports::TestCase = #ident;
            }
        }));
    }
}
