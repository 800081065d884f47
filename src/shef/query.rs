use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use tracing::trace;

/// A query parameter the set-top-box understands.
///
/// The declaration order is the order in which parameters are serialized.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Parameter {
    ClientAddr,
    Cmd,
    Hold,
    Key,
    Major,
    Minor,
    Time,
    VideoWindow,
    Wrapper,
}

impl Parameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::ClientAddr => "clientAddr",
            Parameter::Cmd => "cmd",
            Parameter::Hold => "hold",
            Parameter::Key => "key",
            Parameter::Major => "major",
            Parameter::Minor => "minor",
            Parameter::Time => "time",
            Parameter::VideoWindow => "videoWindow",
            Parameter::Wrapper => "wrapper",
        }
    }

    pub fn all() -> [Parameter; 9] {
        [
            Parameter::ClientAddr,
            Parameter::Cmd,
            Parameter::Hold,
            Parameter::Key,
            Parameter::Major,
            Parameter::Minor,
            Parameter::Time,
            Parameter::VideoWindow,
            Parameter::Wrapper,
        ]
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named request parameters. Names outside the [`Parameter`] whitelist are
/// accepted here and dropped when the query string is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(HashMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Params(HashMap::new())
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the value of `parameter` unless it is absent or empty.
    pub fn present(&self, parameter: Parameter) -> Option<&str> {
        self.get(parameter.as_str()).filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Params {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Builds the query string for `params`, walking the whitelist in order.
///
/// The first parameter found is prefixed with `?`, every later one with `&`.
/// Values are appended as given.
pub fn build_query(params: &Params) -> String {
    for name in params.0.keys() {
        if !Parameter::all().iter().any(|p| p.as_str() == name) {
            trace!("Dropping unknown parameter '{}'", name);
        }
    }

    let mut query = String::new();
    for parameter in Parameter::all() {
        if let Some(value) = params.get(parameter.as_str()) {
            query.push(if query.is_empty() { '?' } else { '&' });
            query.push_str(parameter.as_str());
            query.push('=');
            query.push_str(value);
        }
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Params::new(), "")]
    #[case(Params::from([("major", "202"), ("bogus", "x")]), "?major=202")]
    #[case(Params::from([("hold", "3"), ("key", "power")]), "?hold=3&key=power")]
    #[case(Params::from([("key", "power"), ("hold", "keyPress")]), "?hold=keyPress&key=power")]
    #[case(Params::from([("minor", "1"), ("major", "202"), ("clientAddr", "0")]), "?clientAddr=0&major=202&minor=1")]
    #[case(Params::from([("bogus", "x"), ("other", "y")]), "")]
    fn builds_query_in_whitelist_order(#[case] params: Params, #[case] expected: &str) {
        assert_eq!(build_query(&params), expected);
    }

    #[test]
    fn all_parameters_serialize_in_declaration_order() {
        let params: Params = Parameter::all().iter().rev().map(|p| (p.as_str(), "v")).collect();

        assert_eq!(
            build_query(&params),
            "?clientAddr=v&cmd=v&hold=v&key=v&major=v&minor=v&time=v&videoWindow=v&wrapper=v"
        );
    }

    #[test]
    fn present_treats_empty_values_as_missing() {
        let params = Params::new().with("major", "").with("key", "power");

        assert_eq!(params.present(Parameter::Major), None);
        assert_eq!(params.present(Parameter::Key), Some("power"));
        assert_eq!(params.present(Parameter::Cmd), None);
    }
}
