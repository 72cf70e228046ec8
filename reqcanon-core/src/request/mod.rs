mod assembler;
mod canonical;
mod error;
pub mod normalization;
mod projection;
#[cfg(test)]
mod tests;

pub use assembler::*;
pub use canonical::*;
pub use error::*;
pub use projection::*;
