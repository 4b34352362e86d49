/*!
# Waxpeer API Structures
Request parameters handed to the client and the response shapes it decodes.
Monetary values are integers in minor units, 1$ = 1000.
*/

pub(crate) mod http;
pub mod request;
pub mod account;
pub mod order;
pub mod market;
pub mod trade;
