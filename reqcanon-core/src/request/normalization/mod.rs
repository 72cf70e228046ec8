mod body;
mod cookies;
pub mod encoding;
mod env;
mod headers;
mod method;
mod query;
#[cfg(test)]
pub(crate) mod tests;
pub mod trim;
mod types;
mod url;

pub use body::*;
pub use cookies::*;
pub use env::*;
pub use headers::*;
pub use method::*;
pub use query::*;
pub use types::*;
pub use url::*;
