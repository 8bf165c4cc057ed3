use std::fmt;

use chrono::Utc;
use rand::{distributions::Uniform, Rng};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Client-visible identifier of a portfolio entry.
///
/// Generated ids look like `1717171717171-k3j9x0a2b`: a millisecond
/// timestamp followed by a random base36 suffix. They only need to be unique
/// for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let dist = Uniform::from(0..BASE36.len());
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.sample(dist)] as char)
            .collect();

        Self(format!("{}-{}", Utc::now().timestamp_millis(), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
