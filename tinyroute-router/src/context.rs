use std::collections::HashMap;

use http::Request;

/// Values captured by a route's `{name}` placeholders.
///
/// The router inserts these into the request's extensions before calling
/// the handler. Routes without placeholders leave the extensions untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(HashMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.0
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }
}

impl From<HashMap<String, String>> for Params {
    fn from(map: HashMap<String, String>) -> Self {
        Params(map)
    }
}

/// Access to route parameters attached to a request.
pub trait RequestExt {
    /// Parameters of the matched route, if it had any placeholders.
    fn params(&self) -> Option<&Params>;

    fn param(&self, name: &str) -> Option<&str> {
        self.params()?.get(name)
    }
}

impl<B> RequestExt for Request<B> {
    fn params(&self) -> Option<&Params> {
        self.extensions().get::<Params>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    #[test]
    fn test_params_from_map() {
        let params = Params::from(hashmap! {
            "id".to_string() => "42".to_string(),
        });
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_request_without_params() {
        let request = Request::new(());
        assert!(request.params().is_none());
        assert!(request.param("id").is_none());
    }

    #[test]
    fn test_request_with_params() {
        let mut params = Params::new();
        params.insert("slug", "hello-world");

        let mut request = Request::new(());
        request.extensions_mut().insert(params);

        assert_eq!(request.param("slug"), Some("hello-world"));
        assert_eq!(request.params().map(Params::len), Some(1));
    }
}
