use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

/// Fields every Waxpeer response carries, decoded before the payload.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Status {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub success: bool,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Payload of operations whose only interesting field is a count.
#[serde_as]
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub(crate) struct Count {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub count: u64,
}
