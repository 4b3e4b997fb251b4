use paapi_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Regional marketplace selecting which endpoint host requests target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Canada
    Ca,
    /// China
    Cn,
    /// Germany
    De,
    /// Spain
    Es,
    /// France
    Fr,
    /// India
    In,
    /// Italy
    It,
    /// Japan
    Jp,
    /// United Kingdom
    Uk,
    /// United States
    #[default]
    Us,
}

impl Locale {
    /// The endpoint host for this marketplace.
    pub fn host(&self) -> &'static str {
        match self {
            Locale::Ca => "webservices.amazon.ca",
            Locale::Cn => "webservices.amazon.cn",
            Locale::De => "webservices.amazon.de",
            Locale::Es => "webservices.amazon.es",
            Locale::Fr => "webservices.amazon.fr",
            Locale::In => "webservices.amazon.in",
            Locale::It => "webservices.amazon.it",
            Locale::Jp => "webservices.amazon.co.jp",
            Locale::Uk => "webservices.amazon.co.uk",
            Locale::Us => "webservices.amazon.com",
        }
    }

    /// The country code form used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ca => "ca",
            Locale::Cn => "cn",
            Locale::De => "de",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::In => "in",
            Locale::It => "it",
            Locale::Jp => "jp",
            Locale::Uk => "uk",
            Locale::Us => "us",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ca" => Ok(Locale::Ca),
            "cn" => Ok(Locale::Cn),
            "de" => Ok(Locale::De),
            "es" => Ok(Locale::Es),
            "fr" => Ok(Locale::Fr),
            "in" => Ok(Locale::In),
            "it" => Ok(Locale::It),
            "jp" => Ok(Locale::Jp),
            "uk" => Ok(Locale::Uk),
            "us" => Ok(Locale::Us),
            _ => Err(Error::config_invalid(format!("unknown locale: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paapi_core::ErrorKind;
    use test_case::test_case;

    #[test_case("us", Locale::Us, "webservices.amazon.com")]
    #[test_case("uk", Locale::Uk, "webservices.amazon.co.uk")]
    #[test_case("jp", Locale::Jp, "webservices.amazon.co.jp")]
    #[test_case("de", Locale::De, "webservices.amazon.de")]
    #[test_case("in", Locale::In, "webservices.amazon.in")]
    fn test_parse_and_host(code: &str, expected: Locale, host: &str) {
        let locale: Locale = code.parse().unwrap();
        assert_eq!(locale, expected);
        assert_eq!(locale.host(), host);
        assert_eq!(locale.as_str(), code);
    }

    #[test]
    fn test_unknown_locale() {
        let err = "atlantis".parse::<Locale>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_default_is_us() {
        assert_eq!(Locale::default(), Locale::Us);
    }
}
