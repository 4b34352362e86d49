/*!
Provides `Client` struct for interacting with the Waxpeer API.

# Examples

Running unauthenticated:
```rust
use waxpeer::client::Client;

let client = Client::new().unwrap();
```

Running authenticated:
```rust,no_run
use waxpeer::client::Client;

#[tokio::main]
async fn main() {
    let client = Client::new().unwrap().login("api-key");

    let user = client.account_information().await.unwrap();
    println!("Logged in as: {} ({} in wallet)", user.name, user.wallet);
}
```
*/

mod client;
mod config;
mod constants;
pub(super) mod http;
pub(super) mod query;
mod utils;

mod account;
mod market;

pub use client::*;
pub use config::ClientConfig;
