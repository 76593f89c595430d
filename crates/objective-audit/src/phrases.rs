//! Vague placeholder phrases and the raw-text presence check.

use std::fmt;

use crate::error::ManifestError;

pub const DEFAULT_VAGUE_PHRASES: &[&str] = &["Build complex logic", "Complete the circuit"];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Phrase {
    original: String,
    lowered: String,
}

/// Ordered set of phrases matched case-insensitively as substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaguePhrases {
    phrases: Vec<Phrase>,
}

impl VaguePhrases {
    pub fn new<I, S>(phrases: I) -> Result<Self, ManifestError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases
            .into_iter()
            .map(|phrase| {
                let original = phrase.into();
                if original.trim().is_empty() {
                    return Err(ManifestError::Phrase {
                        phrase: original,
                        message: "phrase must not be blank".into(),
                    });
                }
                let lowered = original.to_lowercase();
                Ok(Phrase { original, lowered })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { phrases })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(|phrase| phrase.original.as_str())
    }

    /// Phrases contained in `text`, in configured order.
    pub fn matches_in<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a str> + 'a {
        let lowered = text.to_lowercase();
        self.phrases
            .iter()
            .filter(move |phrase| lowered.contains(&phrase.lowered))
            .map(|phrase| phrase.original.as_str())
    }

    /// Coarse check over the whole manifest text. A phrase counts as found
    /// wherever it occurs, including fields other than objectives.
    #[must_use]
    pub fn presence(&self, raw_text: &str) -> Vec<PhrasePresence> {
        let lowered = raw_text.to_lowercase();
        self.phrases
            .iter()
            .map(|phrase| PhrasePresence {
                phrase: phrase.original.clone(),
                found: lowered.contains(&phrase.lowered),
            })
            .collect()
    }
}

impl Default for VaguePhrases {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_VAGUE_PHRASES
                .iter()
                .map(|phrase| Phrase {
                    original: (*phrase).to_string(),
                    lowered: phrase.to_lowercase(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasePresence {
    pub phrase: String,
    pub found: bool,
}

impl fmt::Display for PhrasePresence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(f, "FOUND PHRASE: '{}'", self.phrase)
        } else {
            write!(f, "NOT FOUND: '{}'", self.phrase)
        }
    }
}
