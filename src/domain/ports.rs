use std::collections::{BTreeMap, HashMap};

/// Read-only view over an untyped key/value form submission.
///
/// Repeated keys resolve to their first value, matching how browsers
/// expose `FormData.get`.
pub trait FormSource {
    fn get(&self, key: &str) -> Option<&str>;
}

impl FormSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl FormSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}

impl FormSource for [(String, String)] {
    fn get(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

impl FormSource for Vec<(String, String)> {
    fn get(&self, key: &str) -> Option<&str> {
        FormSource::get(self.as_slice(), key)
    }
}

impl<T: FormSource + ?Sized> FormSource for &T {
    fn get(&self, key: &str) -> Option<&str> {
        FormSource::get(&**self, key)
    }
}
