use crate::collab::IpValidator;
use crate::request::normalization::encoding::scalar_to_json;
use crate::request::normalization::{NormalizationOutcome, RewriteReason};
use serde_json::{Map, Value};

pub const REMOTE_ADDR: &str = "REMOTE_ADDR";

/// Drops `REMOTE_ADDR` from the environment when it is not a valid IP address.
///
/// An empty value is kept: the address is optional.
pub fn scrub_remote_addr(
    mut env: Map<String, Value>,
    validator: &dyn IpValidator,
) -> NormalizationOutcome<Map<String, Value>> {
    let valid = match env.get(REMOTE_ADDR) {
        None | Some(Value::Null) => true,
        Some(addr) => validator.validate(&scalar_to_json(addr), false).is_ok(),
    };

    if valid {
        return NormalizationOutcome::Accept(env);
    }

    env.shift_remove(REMOTE_ADDR);
    NormalizationOutcome::Rewrite {
        value: env,
        reason: RewriteReason::RemoteAddrRemoved,
    }
}
