use crate::collab::{HeuristicBodyDecoder, InvalidIp, IpValidator};
use crate::request::normalization::{Body, NormalizationOutcome, RejectReason, RewriteReason};
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) fn pairs(input: &[(&str, &str)]) -> Vec<(String, String)> {
    input
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub(crate) fn expect_accept<T: Debug>(outcome: NormalizationOutcome<T>) -> T {
    match outcome {
        NormalizationOutcome::Accept(value) => value,
        other => panic!("Expected Accept, got {:?}", other),
    }
}

pub(crate) fn expect_rewrite<T: Debug>(outcome: NormalizationOutcome<T>, reason: RewriteReason) -> T {
    match outcome {
        NormalizationOutcome::Rewrite { value, reason: r } => {
            assert_eq!(r, reason);
            value
        }
        other => panic!("Expected Rewrite, got {:?}", other),
    }
}

pub(crate) fn expect_reject<T: Debug>(outcome: NormalizationOutcome<T>, reason: RejectReason) {
    match outcome {
        NormalizationOutcome::Reject { reason: r } => assert_eq!(r, reason),
        other => panic!("Expected Reject, got {:?}", other),
    }
}

/// Decoder that records how often it was asked and never decodes.
#[derive(Default)]
pub(crate) struct CountingDecoder {
    pub(crate) calls: AtomicUsize,
}

impl CountingDecoder {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HeuristicBodyDecoder for CountingDecoder {
    fn decode(&self, body: Option<Body>, content_type: Option<&str>) -> (Option<Body>, Option<String>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (body, content_type.map(str::to_string))
    }
}

/// Rejects everything that is not empty.
pub(crate) struct RejectAllIps;

impl IpValidator for RejectAllIps {
    fn validate(&self, value: &str, required: bool) -> Result<(), InvalidIp> {
        if value.is_empty() && !required {
            return Ok(());
        }
        Err(InvalidIp {
            value: value.to_string(),
        })
    }
}
