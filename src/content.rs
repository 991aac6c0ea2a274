//! Received and stored assertion payloads.
//!
//! A payload is either text or raw bytes. Equality is exact in both cases:
//! text is compared as a code-unit sequence with no normalization, binary is
//! compared byte-for-byte. A text payload never equals a binary payload, even
//! when their bytes coincide, because the two are read back from disk in
//! different modes.

/// Read mode for a stored reference file, matching the payload kind being
/// asserted against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    Text,
    Binary,
}

/// Content produced by a test or read back from a reference file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Binary(Vec<u8>),
}

impl Content {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// The mode a stored counterpart of this payload must be read in.
    pub fn read_mode(&self) -> ReadMode {
        match self {
            Self::Text(_) => ReadMode::Text,
            Self::Binary(_) => ReadMode::Binary,
        }
    }

    /// The raw bytes of the payload, as they would be written to disk.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(s) => s.as_bytes(),
            Self::Binary(b) => b,
        }
    }

    /// The payload as text, or `None` for binary content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Binary(_) => None,
        }
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<u8>> for Content {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(bytes)
    }
}

impl From<&[u8]> for Content {
    fn from(bytes: &[u8]) -> Self {
        Self::Binary(bytes.to_vec())
    }
}
