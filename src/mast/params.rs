use std::collections::BTreeMap;

/// Open-ended query parameters for an archive search.
///
/// Values are stringified on insertion since everything rides a query string.
/// Keys are kept sorted so the encoded query is deterministic.
#[derive(Clone, Debug, Default)]
pub struct SearchParams {
    entries: BTreeMap<String, String>,
}

impl SearchParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, overwriting any previous value.
    pub fn set(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Set a parameter only if the caller has not already supplied one.
    pub fn set_default(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
        self
    }

    /// The current value of a parameter, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Encode the parameters as a URL query string.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, value) in &self.entries {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&urlencoding::encode(key));
            query.push('=');
            query.push_str(&urlencoding::encode(value));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::SearchParams;

    #[test]
    fn set_default_keeps_caller_value() {
        let mut params = SearchParams::new();
        params.set("max_records", 5);
        params.set_default("max_records", 100);
        assert_eq!(params.get("max_records"), Some("5"));

        params.set_default("action", "Search");
        assert_eq!(params.get("action"), Some("Search"));
    }

    #[test]
    fn query_string_is_sorted_and_encoded() {
        let mut params = SearchParams::new();
        params.set("kepoi", ">12.01");
        params.set("action", "Search");
        assert_eq!(params.to_query_string(), "action=Search&kepoi=%3E12.01");
    }
}
