mod fixtures;
pub mod tracing;

pub use fixtures::{fixture, fixture_path, normalizer_from_fixture};
pub use self::tracing::{CapturedEvent, capture_events};
