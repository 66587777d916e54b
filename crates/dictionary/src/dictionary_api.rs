// https://dictionaryapi.dev/ - free, no key, english only
// success: json array of entries, failure: {"title", "message", "resolution"}

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::{DictionaryError, Entry};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

const FALLBACK_MESSAGE: &str = "Something went wrong";

// same characters as javascript's encodeURIComponent leaves alone
const WORD_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

pub(crate) fn entry_url(base_url: &str, word: &str) -> String {
    format!("{base_url}{}", utf8_percent_encode(word, WORD_COMPONENT))
}

pub(crate) async fn get_entries(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Vec<Entry>, DictionaryError> {
    let url = entry_url(base_url, word);
    tracing::debug!(%url, "requesting definition");
    let res: reqwest::Response = client
        .get(&url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if !status.is_success() {
        // the body is optional, a missing or foreign one only loses the server message
        let message = match res.text().await {
            Ok(body) => serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|body| body.message),
            Err(error) => {
                tracing::debug!(%error, "could not read error body");
                None
            }
        };
        tracing::debug!(status = status.as_u16(), ?message, "dictionary api rejected lookup");
        return Err(DictionaryError::Api {
            status: status.as_u16(),
            status_text: status.canonical_reason().map(str::to_owned),
            message,
        });
    }
    res.json::<Vec<Entry>>()
        .await
        .map_err(DictionaryError::Deserialize)
}

/// Picks the first usable text in order: server message, HTTP status text,
/// transport error text, then a generic fallback. Empty strings are skipped.
pub fn error_message(
    server_message: Option<&str>,
    status_text: Option<&str>,
    transport: Option<&str>,
) -> String {
    [server_message, status_text, transport]
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .unwrap_or(FALLBACK_MESSAGE)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins() {
        assert_eq!(
            error_message(Some("No Definitions Found"), Some("Not Found"), Some("status 404")),
            "No Definitions Found"
        );
    }

    #[test]
    fn falls_through_empty_values() {
        assert_eq!(error_message(Some(""), Some("Not Found"), None), "Not Found");
        assert_eq!(error_message(None, Some(""), Some("connection refused")), "connection refused");
    }

    #[test]
    fn generic_fallback_when_nothing_is_known() {
        assert_eq!(error_message(None, None, None), "Something went wrong");
        assert_eq!(error_message(Some(""), Some(""), Some("")), "Something went wrong");
    }

    #[test]
    fn word_is_encoded_like_a_uri_component() {
        assert_eq!(entry_url("http://x/", "hello"), "http://x/hello");
        assert_eq!(entry_url("http://x/", "ice cream"), "http://x/ice%20cream");
        assert_eq!(entry_url("http://x/", "a/b?c#d"), "http://x/a%2Fb%3Fc%23d");
        assert_eq!(entry_url("http://x/", "rock'n'roll"), "http://x/rock'n'roll");
        assert_eq!(entry_url("http://x/", "café"), "http://x/caf%C3%A9");
    }
}
