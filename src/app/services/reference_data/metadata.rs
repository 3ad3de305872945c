//! Reference data loading statistics

/// Statistics about loading one reference database
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of rows read from the file
    pub rows_read: usize,

    /// Number of distinct lookup keys after loading
    pub keys_indexed: usize,

    /// Number of keys that replaced an earlier row with the same key
    pub duplicate_keys: usize,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "read {} rows, indexed {} keys ({} duplicate keys overwritten)",
            self.rows_read, self.keys_indexed, self.duplicate_keys
        )
    }
}
