use bookcore::{InputError, Result};

/// One line of user input split into a keyword and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub keyword: String,
    pub args: Vec<String>,
}

impl Input {
    /// Split a line on whitespace. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let keyword = words.next()?.to_lowercase();
        Some(Self {
            keyword,
            args: words.map(str::to_string).collect(),
        })
    }

    /// Exactly `N` arguments, or a `WrongArity` error carrying `usage`
    pub fn expect_args<const N: usize>(&self, usage: &str) -> Result<[&str; N]> {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        args.try_into().map_err(|_| {
            InputError::WrongArity {
                usage: usage.to_string(),
            }
            .into()
        })
    }

    /// First argument, or `None` when there is none. More than one argument is
    /// still an arity error.
    pub fn optional_arg(&self, usage: &str) -> Result<Option<&str>> {
        match self.args.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(only.as_str())),
            _ => Err(InputError::WrongArity {
                usage: usage.to_string(),
            }
            .into()),
        }
    }
}
