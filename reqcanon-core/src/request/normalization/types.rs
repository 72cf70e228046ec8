#[derive(Debug)]
pub enum NormalizationOutcome<T> {
    Accept(T),
    Rewrite { value: T, reason: RewriteReason },
    Reject { reason: RejectReason },
}

impl<T> NormalizationOutcome<T> {
    /// Collapses the outcome into the normalized value, keeping the reject reason.
    pub fn into_result(self) -> Result<T, RejectReason> {
        match self {
            NormalizationOutcome::Accept(value) => Ok(value),
            NormalizationOutcome::Rewrite { value, .. } => Ok(value),
            NormalizationOutcome::Reject { reason } => Err(reason),
        }
    }

    pub fn rewrite_reason(&self) -> Option<RewriteReason> {
        match self {
            NormalizationOutcome::Rewrite { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    InvalidMethod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteReason {
    MethodCase,
    EllipsisRepair,
    QueryPairsDropped,
    QueryShapeUnsupported,
    RemoteAddrRemoved,
}

impl RewriteReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteReason::MethodCase => "method_case",
            RewriteReason::EllipsisRepair => "ellipsis_repair",
            RewriteReason::QueryPairsDropped => "query_pairs_dropped",
            RewriteReason::QueryShapeUnsupported => "query_shape_unsupported",
            RewriteReason::RemoteAddrRemoved => "remote_addr_removed",
        }
    }
}
