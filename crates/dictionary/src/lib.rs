use dictionary_api::{get_entries, DICTIONARY_API_URL};

mod dictionary;
mod dictionary_api;
mod summary;

pub use dictionary::{Definition, Entry, Meaning, Phonetic};
pub use dictionary_api::error_message;
pub use summary::{
    audio_url, phonetic_text, EntrySummary, NounSection, NumberedDefinition, VerbSection, NOUN,
    VERB,
};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to read the dictionary response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("dictionary api answered {status}")]
    Api {
        status: u16,
        status_text: Option<String>,
        message: Option<String>,
    },
}

impl DictionaryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DictionaryError::Api { status: 404, .. })
    }

    /// The text shown to the user when a lookup fails. An `Api` error always
    /// names its status code, so only the bare `error_message` falls back to
    /// "Something went wrong".
    pub fn display_message(&self) -> String {
        match self {
            DictionaryError::Api {
                status,
                status_text,
                message,
            } => error_message(
                message.as_deref(),
                status_text.as_deref(),
                Some(format!("Request failed with status code {status}").as_str()),
            ),
            DictionaryError::Fetch(error) | DictionaryError::Deserialize(error) => {
                error_message(None, None, Some(error.to_string().as_str()))
            }
        }
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DICTIONARY_API_URL)
    }

    /// Talks to another host serving the same `/<word>` path layout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_entries(&self, word: &str) -> Result<Vec<Entry>, DictionaryError> {
        get_entries(&self.client, &self.base_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
