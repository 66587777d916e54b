//! Turns a fetched [`Entry`] into the pieces the result view shows: the
//! phonetic spelling, a playable audio link and the noun/verb sections.
//!
//! Only "noun" and "verb" meanings are collected. Every other part of speech
//! is left out of the summary.

use std::sync::OnceLock;

use regex::Regex;

use crate::{Definition, Entry, Meaning};

static AUDIO_URL_REGEX: OnceLock<Regex> = OnceLock::new();

pub const NOUN: &str = "noun";
pub const VERB: &str = "verb";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub word: String,
    pub phonetic: Option<String>,
    pub audio_url: Option<String>,
    pub noun: Option<NounSection>,
    pub verb: Option<VerbSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounSection {
    pub definitions: Vec<NumberedDefinition>,
    /// `None` when no noun meaning lists synonyms at all.
    pub synonyms: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbSection {
    pub definitions: Vec<NumberedDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedDefinition {
    /// 1-based position inside its section.
    pub number: usize,
    pub text: String,
    pub example: Option<String>,
}

impl EntrySummary {
    /// Summarises the first entry of a lookup result, the one that gets shown.
    pub fn from_entries(entries: &[Entry]) -> Option<Self> {
        entries.first().map(Self::from_entry)
    }

    pub fn from_entry(entry: &Entry) -> Self {
        let nouns = meanings_for(entry, NOUN);
        let verbs = meanings_for(entry, VERB);

        let noun = (!nouns.is_empty()).then(|| NounSection {
            definitions: number_definitions(&nouns, |_| None),
            synonyms: synonyms_line(&nouns),
        });
        let verb = (!verbs.is_empty()).then(|| VerbSection {
            definitions: number_definitions(&verbs, |definition| definition.example.clone()),
        });

        Self {
            word: entry.word.clone(),
            phonetic: phonetic_text(entry),
            audio_url: audio_url(entry),
            noun,
            verb,
        }
    }
}

/// First non-empty phonetic text. Falls back to whatever the first phonetic
/// carries, which may itself be empty.
pub fn phonetic_text(entry: &Entry) -> Option<String> {
    entry
        .phonetics
        .iter()
        .filter_map(|phonetic| phonetic.text.as_deref())
        .find(|text| !text.is_empty())
        .or_else(|| entry.phonetics.first().and_then(|p| p.text.as_deref()))
        .map(str::to_owned)
}

/// First trimmed audio link with an http(s) scheme.
pub fn audio_url(entry: &Entry) -> Option<String> {
    let re = AUDIO_URL_REGEX
        .get_or_init(|| Regex::new(r"(?i)^https?://").expect("Invalid audio URL regex"));
    entry
        .phonetics
        .iter()
        .filter_map(|phonetic| phonetic.audio.as_deref())
        .map(str::trim)
        .filter(|audio| !audio.is_empty())
        .find(|audio| re.is_match(audio))
        .map(str::to_owned)
}

fn meanings_for<'a>(entry: &'a Entry, part_of_speech: &str) -> Vec<&'a Meaning> {
    entry
        .meanings
        .iter()
        .filter(|meaning| meaning.part_of_speech == part_of_speech)
        .collect()
}

fn number_definitions(
    meanings: &[&Meaning],
    example: impl Fn(&Definition) -> Option<String>,
) -> Vec<NumberedDefinition> {
    meanings
        .iter()
        .flat_map(|meaning| meaning.definitions.iter())
        .enumerate()
        .map(|(index, definition)| NumberedDefinition {
            number: index + 1,
            text: definition.definition.clone(),
            example: example(definition),
        })
        .collect()
}

fn synonyms_line(meanings: &[&Meaning]) -> Option<String> {
    if meanings.iter().all(|meaning| meaning.synonyms.is_empty()) {
        return None;
    }
    let synonyms = meanings
        .iter()
        .flat_map(|meaning| meaning.synonyms.iter())
        .filter(|synonym| !synonym.is_empty())
        .map(String::as_str)
        .collect::<Vec<&str>>();
    Some(synonyms.join(", "))
}
