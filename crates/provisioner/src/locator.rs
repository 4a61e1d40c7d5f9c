//! Object-storage locators.

use std::fmt;

const SCHEME: &str = "s3://";

/// A bucket and key parsed from `s3://bucket/key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocator {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocator {
    /// Parse a locator. Returns `None` for anything that is not
    /// `s3://<bucket>/<key>` with a non-empty bucket and key.
    pub fn parse(raw: &str) -> Option<Self> {
        let rest = raw.trim().strip_prefix(SCHEME)?;
        let (bucket, key) = rest.split_once('/')?;
        if bucket.is_empty() || key.is_empty() {
            return None;
        }
        Some(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

impl fmt::Display for ObjectLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", SCHEME, self.bucket, self.key)
    }
}
