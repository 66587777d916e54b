use std::fmt;

pub const EMPTY_QUERY_MESSAGE: &str = "Whoops, can't be empty...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyQuery,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyQuery => f.write_str(EMPTY_QUERY_MESSAGE),
        }
    }
}

/// The search box: the text typed so far and the inline validation message.
#[derive(Debug, Default, Clone)]
pub struct SearchForm {
    query: String,
    validation: Option<ValidationError>,
}

impl SearchForm {
    pub fn validation(&self) -> Option<ValidationError> {
        self.validation
    }

    /// Editing the query drops a pending validation message right away.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.validation = None;
    }

    /// Returns the word to look up, or `None` after flagging an empty query.
    pub fn submit(&mut self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            self.validation = Some(ValidationError::EmptyQuery);
            return None;
        }
        self.validation = None;
        Some(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_are_rejected() {
        for text in ["", "   ", "\t\n"] {
            let mut form = SearchForm::default();
            form.set_query(text);
            assert_eq!(form.submit(), None);
            assert_eq!(form.validation(), Some(ValidationError::EmptyQuery));
        }
    }

    #[test]
    fn submit_trims_the_word() {
        let mut form = SearchForm::default();
        form.set_query("  keyboard ");
        assert_eq!(form.submit().as_deref(), Some("keyboard"));
        assert_eq!(form.validation(), None);
        assert_eq!(form.query, "  keyboard ");
    }

    #[test]
    fn typing_clears_the_message() {
        let mut form = SearchForm::default();
        assert_eq!(form.submit(), None);
        assert!(form.validation().is_some());

        form.set_query("k");
        assert_eq!(form.validation(), None);
    }

    #[test]
    fn valid_submit_clears_an_earlier_message() {
        let mut form = SearchForm::default();
        form.submit();
        form.query = "word".to_owned();
        assert_eq!(form.submit().as_deref(), Some("word"));
        assert_eq!(form.validation(), None);
    }

    #[test]
    fn message_text() {
        assert_eq!(ValidationError::EmptyQuery.to_string(), "Whoops, can't be empty...");
    }
}
