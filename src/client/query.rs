/**
INTERNAL: Ordered list of query pairs for one request

Pairs are encoded in insertion order, repeated keys become repeated pairs
(`id=1&id=2`) rather than one delimited value.
*/
#[derive(Debug, Default, Clone)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    /// Starts a query carrying the account credential as `api`
    pub(crate) fn with_api_key(api_key: &str) -> Self {
        Query::default().param("api", api_key)
    }

    /// Always sent, even when empty or zero
    pub(crate) fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Left out when zero
    pub(crate) fn non_zero(self, key: &'static str, value: u64) -> Self {
        if value == 0 {
            return self;
        }
        self.param(key, value)
    }

    /// Sent as `1` when set, left out otherwise
    pub(crate) fn flag(self, key: &'static str, value: bool) -> Self {
        if !value {
            return self;
        }
        self.param(key, 1)
    }

    /// One pair per element, in order
    pub(crate) fn repeated<T: ToString>(mut self, key: &'static str, values: &[T]) -> Self {
        self.pairs
            .extend(values.iter().map(|value| (key, value.to_string())));
        self
    }

    pub(crate) fn encode(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&self.pairs)
    }
}
