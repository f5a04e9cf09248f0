//! Compile-time metadata exported by `build.rs`.

use std::fmt;

pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD_HASH: &str = env!("BUDGET_PULSE_BUILD_HASH");
pub const BUILD_STATUS: &str = env!("BUDGET_PULSE_BUILD_STATUS");
pub const BUILD_TIMESTAMP: &str = env!("BUDGET_PULSE_BUILD_TIMESTAMP");
pub const BUILD_TARGET: &str = env!("BUDGET_PULSE_BUILD_TARGET");
pub const BUILD_PROFILE: &str = env!("BUDGET_PULSE_BUILD_PROFILE");
pub const BUILD_RUSTC: &str = env!("BUDGET_PULSE_BUILD_RUSTC");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub hash: &'static str,
    pub status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

pub fn current() -> BuildInfo {
    BuildInfo {
        version: PACKAGE_VERSION,
        hash: BUILD_HASH,
        status: BUILD_STATUS,
        timestamp: BUILD_TIMESTAMP,
        target: BUILD_TARGET,
        profile: BUILD_PROFILE,
        rustc: BUILD_RUSTC,
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "budget_pulse {} ({} {}, {} {}, built {})",
            self.version, self.hash, self.status, self.target, self.profile, self.timestamp
        )
    }
}
