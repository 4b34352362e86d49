use crate::error::{ApiError, Result};
use rand::Rng;
use std::format;

/// Minor currency units per dollar, prices are integers (1$ = 1000)
pub const MINOR_UNITS_PER_DOLLAR: u64 = 1000;

/**
Generate a random project id to track a purchase with

# Notes
Pass it to `buy_by_name`/`buy_by_id` and store it, it can later be looked up with
`trades_by_project_id`

# Returns
A random ID of format `p-${16 random characters}`
*/
pub fn generate_project_id() -> String {
    let mut rng = rand::rng();
    let chars: Vec<char> = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    let random_string: String = (0..16)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect();

    format!("p-{}", random_string)
}

/// Convert dollars to minor units, rounded to the nearest unit
pub fn to_minor_units(dollars: f64) -> u64 {
    (dollars * MINOR_UNITS_PER_DOLLAR as f64).round().max(0.0) as u64
}

pub fn from_minor_units(units: u64) -> f64 {
    units as f64 / MINOR_UNITS_PER_DOLLAR as f64
}

/**
The `partner` and `token` parts of a Steam trade offer link

# Examples

```rust
use waxpeer::utils::Tradelink;

let link = Tradelink::parse("https://steamcommunity.com/tradeoffer/new/?partner=111&token=abc").unwrap();
assert_eq!(link.partner, "111");
assert_eq!(link.token, "abc");
```
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tradelink {
    pub partner: String,
    pub token: String,
}

impl Tradelink {
    pub fn parse(tradelink: &str) -> Result<Self> {
        let url = url::Url::parse(tradelink)
            .map_err(|err| ApiError::Encoding(format!("invalid trade link: {}", err)))?;

        let mut partner = None;
        let mut token = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "partner" => partner = Some(value.into_owned()),
                "token" => token = Some(value.into_owned()),
                _ => {}
            }
        }

        match (partner, token) {
            (Some(partner), Some(token)) if !partner.is_empty() && !token.is_empty() => {
                Ok(Tradelink { partner, token })
            }
            _ => Err(ApiError::Encoding(
                "trade link is missing partner or token".to_string(),
            )),
        }
    }
}
