//! Maps raw command-line tokens onto a typed [`Invocation`].

use crate::errors::CliError;

pub const DESCRIPTION_FLAG: &str = "--description";
pub const AMOUNT_FLAG: &str = "--amount";
pub const ID_FLAG: &str = "--id";
pub const MONTH_FLAG: &str = "--month";
pub const CATEGORY_FLAG: &str = "--category";
pub const WITH_DELETED_FLAG: &str = "--with-deleted";
pub const OUTPUT_FLAG: &str = "--output";
pub const LIMIT_FLAG: &str = "--limit";

/// A parsed command line. Flags that were not given are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    pub command: String,
    pub positionals: Vec<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub id: Option<i64>,
    pub month: Option<u32>,
    pub category: Option<String>,
    pub limit: Option<f64>,
    pub output: Option<String>,
    pub with_deleted: bool,
}

impl Invocation {
    /// Parses the arguments that follow the program name.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, CliError> {
        let mut tokens = args.iter().map(AsRef::as_ref);
        let command = tokens
            .next()
            .ok_or_else(|| CliError::input("no command found. Type `et help` for usage."))?;

        let mut invocation = Invocation {
            command: command.to_ascii_lowercase(),
            ..Invocation::default()
        };

        while let Some(token) = tokens.next() {
            match token {
                DESCRIPTION_FLAG => {
                    invocation.description = Some(value_for(token, tokens.next())?.to_string());
                }
                CATEGORY_FLAG => {
                    invocation.category = Some(value_for(token, tokens.next())?.to_string());
                }
                OUTPUT_FLAG => {
                    invocation.output = Some(value_for(token, tokens.next())?.to_string());
                }
                AMOUNT_FLAG => invocation.amount = Some(number_for(token, tokens.next())?),
                LIMIT_FLAG => invocation.limit = Some(number_for(token, tokens.next())?),
                ID_FLAG => invocation.id = Some(integer_for(token, tokens.next())?),
                MONTH_FLAG => invocation.month = Some(integer_for(token, tokens.next())?),
                WITH_DELETED_FLAG => invocation.with_deleted = true,
                flag if flag.starts_with("--") => {
                    return Err(CliError::input(format!("unknown flag {flag}")));
                }
                positional => invocation.positionals.push(positional.to_string()),
            }
        }

        Ok(invocation)
    }

    /// First positional argument, e.g. the budget action or the help topic.
    pub fn action(&self) -> Option<&str> {
        self.positionals.first().map(String::as_str)
    }
}

fn value_for<'a>(flag: &str, value: Option<&'a str>) -> Result<&'a str, CliError> {
    value.ok_or_else(|| CliError::input(format!("cannot find argument for {flag}")))
}

fn number_for(flag: &str, value: Option<&str>) -> Result<f64, CliError> {
    let raw = value_for(flag, value)?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| CliError::input(format!("argument for {flag} is not a number")))
}

fn integer_for<T: std::str::FromStr>(flag: &str, value: Option<&str>) -> Result<T, CliError> {
    let raw = value_for(flag, value)?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| CliError::input(format!("argument for {flag} is not a valid number")))
}
