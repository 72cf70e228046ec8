//! Narrow interfaces to the collaborators the pipeline depends on.
//!
//! Each trait comes with a built-in implementation so a normalizer works out
//! of the box. All of them must be `Send + Sync` so one normalizer can be
//! shared across threads.

mod decoder;
mod ip;
mod render;
mod schema;
#[cfg(test)]
mod tests;

pub use decoder::*;
pub use ip::*;
pub use render::*;
pub use schema::*;
