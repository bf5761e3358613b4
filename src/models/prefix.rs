//! Labeled network prefix model.

use super::Cidr;
use serde::{Deserialize, Serialize};

/// A published AWS address range with its region and service labels.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkPrefix {
    /// The CIDR block of the range.
    pub network: Cidr,
    /// AWS region identifier (e.g. "us-east-1").
    pub region: String,
    /// AWS service identifier (e.g. "EC2", "DYNAMODB").
    pub service: String,
}

impl std::fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.network, self.region, self.service)
    }
}
