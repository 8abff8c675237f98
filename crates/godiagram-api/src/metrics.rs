use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Metrics collected while loading packages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadMetrics {
    /// Directories visited
    pub directories_scanned: usize,

    /// Total files attempted to parse
    pub files_attempted: usize,

    /// Files successfully parsed
    pub files_succeeded: usize,

    /// Files that failed parsing
    pub files_failed: usize,

    /// Packages produced
    pub packages_loaded: usize,

    /// Top-level type declarations extracted
    pub types_extracted: usize,

    /// Total time spent parsing
    #[serde(with = "duration_serde")]
    pub total_parse_time: Duration,
}

// Helper module for serializing Duration
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis: u64 = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

impl Default for LoadMetrics {
    fn default() -> Self {
        Self {
            directories_scanned: 0,
            files_attempted: 0,
            files_succeeded: 0,
            files_failed: 0,
            packages_loaded: 0,
            types_extracted: 0,
            total_parse_time: Duration::ZERO,
        }
    }
}

impl LoadMetrics {
    /// Success rate (0.0 to 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.files_attempted == 0 {
            0.0
        } else {
            self.files_succeeded as f64 / self.files_attempted as f64
        }
    }

    /// Average parse time per file
    pub fn avg_parse_time(&self) -> Duration {
        if self.files_succeeded == 0 {
            Duration::ZERO
        } else {
            self.total_parse_time / self.files_succeeded as u32
        }
    }

    /// Merge another metrics object into this one
    pub fn merge(&mut self, other: &LoadMetrics) {
        self.directories_scanned += other.directories_scanned;
        self.files_attempted += other.files_attempted;
        self.files_succeeded += other.files_succeeded;
        self.files_failed += other.files_failed;
        self.packages_loaded += other.packages_loaded;
        self.types_extracted += other.types_extracted;
        self.total_parse_time += other.total_parse_time;
    }
}
