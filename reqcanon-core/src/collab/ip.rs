use std::net::IpAddr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid ip address '{value}'")]
pub struct InvalidIp {
    pub value: String,
}

/// Checks that a string is a syntactically valid IP address.
pub trait IpValidator: Send + Sync {
    /// An empty `value` passes unless `required` is set.
    fn validate(&self, value: &str, required: bool) -> Result<(), InvalidIp>;
}

/// Validates with the standard library's IPv4/IPv6 parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdIpValidator;

impl IpValidator for StdIpValidator {
    fn validate(&self, value: &str, required: bool) -> Result<(), InvalidIp> {
        if !required && value.is_empty() {
            return Ok(());
        }

        value
            .parse::<IpAddr>()
            .map(|_| ())
            .map_err(|_| InvalidIp {
                value: value.to_string(),
            })
    }
}
