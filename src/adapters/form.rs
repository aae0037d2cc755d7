use crate::domain::ports::FormSource;
use url::form_urlencoded;

/// An `application/x-www-form-urlencoded` submission body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlEncodedForm {
    pairs: Vec<(String, String)>,
}

impl UrlEncodedForm {
    pub fn parse(body: &str) -> Self {
        let body = body.trim().trim_start_matches('?');
        let pairs = form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect::<Vec<_>>();

        tracing::debug!("Decoded {} form fields", pairs.len());
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl FormSource for UrlEncodedForm {
    fn get(&self, key: &str) -> Option<&str> {
        FormSource::get(self.pairs.as_slice(), key)
    }
}

impl From<Vec<(String, String)>> for UrlEncodedForm {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}
