mod env_tests;
mod method_tests;
mod query_normalization_tests;
pub(crate) mod test_helpers;
