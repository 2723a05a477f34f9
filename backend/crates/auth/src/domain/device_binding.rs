//! Device Binding Policy
//!
//! At most one device per account, bound on first use. Enforced only at
//! login:
//! - no bound device + a device id in the request: bind it, silently
//! - bound device + a different device id: reject the login
//! - bound device + the same device id, or no device id at all: proceed
//!
//! Unbinding is a separate, password-authenticated operation and is not
//! decided here.

use crate::domain::value_object::device_id::DeviceId;

/// Outcome of evaluating a login attempt against the binding policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingDecision {
    /// Proceed; no change to the binding
    Accept,
    /// Proceed and persist the presented device as the account's binding
    Bind,
    /// Refuse the login (authorization failure, not bad credentials)
    Reject,
}

/// Evaluate the binding policy for a login attempt
pub fn evaluate(bound: Option<&DeviceId>, presented: Option<&DeviceId>) -> BindingDecision {
    match (bound, presented) {
        (Some(bound), Some(presented)) if bound != presented => BindingDecision::Reject,
        (None, Some(_)) => BindingDecision::Bind,
        _ => BindingDecision::Accept,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(s: &str) -> DeviceId {
        DeviceId::from_db(s)
    }

    #[test]
    fn test_unbound_without_device_accepts() {
        assert_eq!(evaluate(None, None), BindingDecision::Accept);
    }

    #[test]
    fn test_unbound_with_device_binds() {
        assert_eq!(
            evaluate(None, Some(&device("pixel-7"))),
            BindingDecision::Bind
        );
    }

    #[test]
    fn test_bound_same_device_accepts() {
        assert_eq!(
            evaluate(Some(&device("pixel-7")), Some(&device("pixel-7"))),
            BindingDecision::Accept
        );
    }

    #[test]
    fn test_bound_other_device_rejects() {
        assert_eq!(
            evaluate(Some(&device("pixel-7")), Some(&device("iphone-15"))),
            BindingDecision::Reject
        );
    }

    #[test]
    fn test_bound_without_device_accepts() {
        // A login that presents no device id never trips the binding
        assert_eq!(
            evaluate(Some(&device("pixel-7")), None),
            BindingDecision::Accept
        );
    }
}
