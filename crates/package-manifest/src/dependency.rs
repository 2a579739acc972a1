use derive_more::{Display, Error};
use miette::Diagnostic;
use split_first_char::SplitFirstChar;
use std::str::FromStr;

/// A declared dependency: its name and its version specifier.
///
/// Syntax: `{name}@{version}`
///
/// Examples: `lodash@^4.0.0`, `@types/node@18.7.19`, `mocha@latest`
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
#[display("{name}@{version}")]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

impl Dependency {
    /// Construct a [`Dependency`].
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Dependency { name: name.into(), version: version.into() }
    }
}

/// Error when parsing [`Dependency`] from a string.
#[derive(Debug, Display, Error, Diagnostic)]
#[non_exhaustive]
pub enum ParseDependencyError {
    #[display("Input is empty")]
    #[diagnostic(code(have_it_package_manifest::empty_input))]
    EmptyInput,

    #[display("At sign (@) is missing")]
    #[diagnostic(
        code(have_it_package_manifest::missing_at_sign),
        help("Dependencies are written as <name>@<version>, e.g. lodash@^4.0.0")
    )]
    MissingAtSign,

    #[display("Name is empty")]
    #[diagnostic(code(have_it_package_manifest::empty_name))]
    EmptyName,

    #[display("Version is empty")]
    #[diagnostic(code(have_it_package_manifest::empty_version))]
    EmptyVersion,
}

impl FromStr for Dependency {
    type Err = ParseDependencyError;
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (name, version) = match value.split_first_char() {
            None => return Err(ParseDependencyError::EmptyInput),
            Some(('@', rest)) => {
                let (name_without_at, version) =
                    rest.split_once('@').ok_or(ParseDependencyError::MissingAtSign)?;
                let name = &value[..name_without_at.len() + 1];
                debug_assert_eq!(name, format!("@{name_without_at}"));
                (name, version)
            }
            Some((_, _)) => value.split_once('@').ok_or(ParseDependencyError::MissingAtSign)?,
        };
        if name.is_empty() || name == "@" {
            return Err(ParseDependencyError::EmptyName);
        }
        if version.is_empty() {
            return Err(ParseDependencyError::EmptyVersion);
        }
        Ok(Dependency::new(name, version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_ok() {
        fn case(input: &'static str, (name, version): (&'static str, &'static str)) {
            eprintln!("CASE: {input:?}");
            let received: Dependency = input.parse().unwrap();
            assert_eq!(received, Dependency::new(name, version));
            assert_eq!(received.to_string(), input);
        }

        case("lodash@^4.0.0", ("lodash", "^4.0.0"));
        case("mocha@latest", ("mocha", "latest"));
        case("@types/node@18.7.19", ("@types/node", "18.7.19"));
        case("@pnpm.e2e/hello-world-js-bin@1.0.0", ("@pnpm.e2e/hello-world-js-bin", "1.0.0"));
        case("left-pad@>=1.0.0 <2.0.0", ("left-pad", ">=1.0.0 <2.0.0"));
    }

    #[test]
    fn parse_err() {
        macro_rules! case {
            ($input:expr => $message:expr, $variant:pat) => {{
                let input = $input;
                eprintln!("CASE: {input:?}");
                let error = input.parse::<Dependency>().unwrap_err();
                dbg!(&error);
                assert_eq!(error.to_string(), $message);
                assert!(matches!(&error, $variant));
            }};
        }

        case!("" => "Input is empty", ParseDependencyError::EmptyInput);
        case!("lodash" => "At sign (@) is missing", ParseDependencyError::MissingAtSign);
        case!("@types/node" => "At sign (@) is missing", ParseDependencyError::MissingAtSign);
        case!("@1.0.0" => "At sign (@) is missing", ParseDependencyError::MissingAtSign);
        case!("@@1.0.0" => "Name is empty", ParseDependencyError::EmptyName);
        case!("lodash@" => "Version is empty", ParseDependencyError::EmptyVersion);
    }
}
