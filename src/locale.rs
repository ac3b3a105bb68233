use std::{error::Error, fmt, str::FromStr};

/// Languages with their own punctuation conventions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
    French,
    German,
    Japanese,
}

impl Locale {
    pub const ALL: [Locale; 4] = [
        Locale::English,
        Locale::French,
        Locale::German,
        Locale::Japanese,
    ];

    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
            Locale::German => "de",
            Locale::Japanese => "ja",
        }
    }

    /// Resolves optional locale identifier, unknown identifiers resolve to `None`
    pub fn resolve(locale: Option<&str>) -> Option<Self> {
        let locale = locale?;

        match locale.parse() {
            Ok(locale) => Some(locale),
            Err(err) => {
                log::debug!("{err}, using default punctuation");
                None
            }
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Accepts ISO 639-1 and 639-2/3 codes, tags with region or script subtags (`fr-CA`, `de_AT`) and
/// English language names. Case insensitive
impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.trim().to_lowercase();
        let primary = lowercase
            .split(['-', '_'])
            .next()
            .unwrap_or_default();

        match primary {
            "en" | "eng" | "english" => Ok(Locale::English),
            "fr" | "fra" | "fre" | "french" => Ok(Locale::French),
            "de" | "deu" | "ger" | "german" => Ok(Locale::German),
            "ja" | "jpn" | "japanese" => Ok(Locale::Japanese),
            _ => Err(UnknownLocale(s.to_owned())),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale {:?}", self.0)
    }
}

impl Error for UnknownLocale {}
