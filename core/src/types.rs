//! Result model for a zxcvbn-server strength estimate.
//!
//! # Design
//! These types mirror the server's JSON object but are defined independently
//! of the mock-server crate; integration tests catch schema drift. Every
//! multi-word field names its wire key with an explicit `rename` rather than a
//! container-wide `rename_all`, so the Rust field names and the wire names can
//! change separately.
//!
//! Fields are private. A decoded result is read through accessors and never
//! mutated after deserialization.

use serde::{Deserialize, Serialize};

/// One of the four attack scenarios the server estimates crack times for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackScenario {
    /// Rate-limited online attack.
    OnlineThrottling100PerHour,
    /// Unthrottled online attack.
    OnlineNoThrottling10PerSecond,
    /// Offline attack against a slow, salted hash.
    OfflineSlowHashing1e4PerSecond,
    /// Offline attack against a fast hash.
    OfflineFastHashing1e10PerSecond,
}

impl AttackScenario {
    pub const ALL: [AttackScenario; 4] = [
        AttackScenario::OnlineThrottling100PerHour,
        AttackScenario::OnlineNoThrottling10PerSecond,
        AttackScenario::OfflineSlowHashing1e4PerSecond,
        AttackScenario::OfflineFastHashing1e10PerSecond,
    ];

    /// Key used for this scenario in `crack_times_seconds` and
    /// `crack_times_display`.
    pub fn wire_key(self) -> &'static str {
        match self {
            AttackScenario::OnlineThrottling100PerHour => "online_throttling_100_per_hour",
            AttackScenario::OnlineNoThrottling10PerSecond => "online_no_throttling_10_per_second",
            AttackScenario::OfflineSlowHashing1e4PerSecond => "offline_slow_hashing_1e4_per_second",
            AttackScenario::OfflineFastHashing1e10PerSecond => "offline_fast_hashing_1e10_per_second",
        }
    }

    /// Attacker guess rate assumed by the scenario, in guesses per second.
    pub fn guesses_per_second(self) -> f64 {
        match self {
            AttackScenario::OnlineThrottling100PerHour => 100.0 / 3600.0,
            AttackScenario::OnlineNoThrottling10PerSecond => 10.0,
            AttackScenario::OfflineSlowHashing1e4PerSecond => 1e4,
            AttackScenario::OfflineFastHashing1e10PerSecond => 1e10,
        }
    }
}

/// A decoded strength estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthResult {
    guesses: f64,
    #[serde(rename = "guesses_log10")]
    guesses_log10: f64,
    #[serde(rename = "crack_times_seconds")]
    crack_time_seconds: CrackTimeSeconds,
    #[serde(rename = "crack_times_display")]
    crack_time_display: CrackTimeDisplay,
    score: u8,
    /// `None` when the server omitted the key or sent `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feedback: Option<Feedback>,
    #[serde(rename = "calc_time")]
    calc_time_ms: u64,
}

impl StrengthResult {
    pub fn guesses(&self) -> f64 {
        self.guesses
    }

    /// As transmitted by the server; not recomputed from `guesses`.
    pub fn guesses_log10(&self) -> f64 {
        self.guesses_log10
    }

    pub fn crack_time_seconds(&self) -> &CrackTimeSeconds {
        &self.crack_time_seconds
    }

    pub fn crack_time_display(&self) -> &CrackTimeDisplay {
        &self.crack_time_display
    }

    /// Seconds and display string for a single scenario.
    pub fn crack_time(&self, scenario: AttackScenario) -> (f64, &str) {
        (
            self.crack_time_seconds.get(scenario),
            self.crack_time_display.get(scenario),
        )
    }

    /// Strength tier, 0 (weakest) to 4.
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Server-side computation time in milliseconds.
    pub fn calc_time_ms(&self) -> u64 {
        self.calc_time_ms
    }
}

/// Estimated seconds to crack, per attack scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrackTimeSeconds {
    #[serde(rename = "online_throttling_100_per_hour")]
    online_throttling_100_per_hour: f64,
    #[serde(rename = "online_no_throttling_10_per_second")]
    online_no_throttling_10_per_second: f64,
    #[serde(rename = "offline_slow_hashing_1e4_per_second")]
    offline_slow_hashing_1e4_per_second: f64,
    #[serde(rename = "offline_fast_hashing_1e10_per_second")]
    offline_fast_hashing_1e10_per_second: f64,
}

impl CrackTimeSeconds {
    pub fn online_throttling_100_per_hour(&self) -> f64 {
        self.online_throttling_100_per_hour
    }

    pub fn online_no_throttling_10_per_second(&self) -> f64 {
        self.online_no_throttling_10_per_second
    }

    pub fn offline_slow_hashing_1e4_per_second(&self) -> f64 {
        self.offline_slow_hashing_1e4_per_second
    }

    pub fn offline_fast_hashing_1e10_per_second(&self) -> f64 {
        self.offline_fast_hashing_1e10_per_second
    }

    pub fn get(&self, scenario: AttackScenario) -> f64 {
        match scenario {
            AttackScenario::OnlineThrottling100PerHour => self.online_throttling_100_per_hour,
            AttackScenario::OnlineNoThrottling10PerSecond => self.online_no_throttling_10_per_second,
            AttackScenario::OfflineSlowHashing1e4PerSecond => self.offline_slow_hashing_1e4_per_second,
            AttackScenario::OfflineFastHashing1e10PerSecond => self.offline_fast_hashing_1e10_per_second,
        }
    }
}

/// Human-readable crack times rendered by the server, e.g. "3 hours" or
/// "centuries".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrackTimeDisplay {
    #[serde(rename = "online_throttling_100_per_hour")]
    online_throttling_100_per_hour: String,
    #[serde(rename = "online_no_throttling_10_per_second")]
    online_no_throttling_10_per_second: String,
    #[serde(rename = "offline_slow_hashing_1e4_per_second")]
    offline_slow_hashing_1e4_per_second: String,
    #[serde(rename = "offline_fast_hashing_1e10_per_second")]
    offline_fast_hashing_1e10_per_second: String,
}

impl CrackTimeDisplay {
    pub fn online_throttling_100_per_hour(&self) -> &str {
        &self.online_throttling_100_per_hour
    }

    pub fn online_no_throttling_10_per_second(&self) -> &str {
        &self.online_no_throttling_10_per_second
    }

    pub fn offline_slow_hashing_1e4_per_second(&self) -> &str {
        &self.offline_slow_hashing_1e4_per_second
    }

    pub fn offline_fast_hashing_1e10_per_second(&self) -> &str {
        &self.offline_fast_hashing_1e10_per_second
    }

    pub fn get(&self, scenario: AttackScenario) -> &str {
        match scenario {
            AttackScenario::OnlineThrottling100PerHour => &self.online_throttling_100_per_hour,
            AttackScenario::OnlineNoThrottling10PerSecond => &self.online_no_throttling_10_per_second,
            AttackScenario::OfflineSlowHashing1e4PerSecond => &self.offline_slow_hashing_1e4_per_second,
            AttackScenario::OfflineFastHashing1e10PerSecond => &self.offline_fast_hashing_1e10_per_second,
        }
    }
}

/// Advice attached to weak passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(default)]
    warning: String,
    suggestions: Vec<String>,
}

impl Feedback {
    /// Empty when the server has no specific warning.
    pub fn warning(&self) -> &str {
        &self.warning
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}
