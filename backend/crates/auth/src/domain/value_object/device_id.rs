//! DeviceId Value Object
//!
//! Client-supplied opaque device identifier. At most one account may hold
//! a given device id at a time (uniqueness is enforced by the store).

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum device id length
const DEVICE_ID_MAX_LENGTH: usize = 200;

/// Device identifier value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(String);

impl DeviceId {
    /// Create a new device id with validation
    pub fn new(device_id: impl Into<String>) -> AppResult<Self> {
        let device_id = device_id.into().trim().to_string();

        if device_id.is_empty() {
            return Err(AppError::bad_request("Device id cannot be empty"));
        }

        if device_id.len() > DEVICE_ID_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Device id must be at most {} characters",
                DEVICE_ID_MAX_LENGTH
            )));
        }

        Ok(Self(device_id))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(device_id: impl Into<String>) -> Self {
        Self(device_id.into())
    }

    /// Get the device id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
