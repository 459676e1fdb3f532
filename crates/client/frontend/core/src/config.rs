//! Frontend configuration structures and loaders.
//!
//! UI settings shared across frontend implementations.
use std::env;

#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub typewriter: TypewriterConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, typewriter: TypewriterConfig) -> Self {
        Self {
            messages,
            typewriter,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `NEXUS_LOG_PANEL_CAPACITY` - Side panel log capacity (default: 100)
    /// - `NEXUS_TYPEWRITER_CPS` - Narrative reveal speed in characters per
    ///   second, 0 shows text at once (default: 240)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_var::<usize>(&var, "NEXUS_LOG_PANEL_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(cps) = read_var::<u32>(&var, "NEXUS_TYPEWRITER_CPS") {
            config.typewriter.chars_per_second = cps;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

#[derive(Clone, Debug)]
pub struct TypewriterConfig {
    pub chars_per_second: u32,
}

impl TypewriterConfig {
    pub fn enabled(&self) -> bool {
        self.chars_per_second > 0
    }

    /// Characters revealed after `elapsed_ms` milliseconds.
    pub fn revealed_after(&self, elapsed_ms: u64) -> usize {
        if !self.enabled() {
            return usize::MAX;
        }
        (elapsed_ms.saturating_mul(u64::from(self.chars_per_second)) / 1000) as usize
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            chars_per_second: 240,
        }
    }
}

fn read_var<T>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    var(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FrontendConfig::from_vars(|_| None);
        assert_eq!(config.messages.capacity, 100);
        assert_eq!(config.typewriter.chars_per_second, 240);
    }

    #[test]
    fn overrides_and_clamping() {
        let config = FrontendConfig::from_vars(|key| match key {
            "NEXUS_LOG_PANEL_CAPACITY" => Some("0".into()),
            "NEXUS_TYPEWRITER_CPS" => Some("0".into()),
            _ => None,
        });
        assert_eq!(config.messages.capacity, 1);
        assert!(!config.typewriter.enabled());
        assert_eq!(config.typewriter.revealed_after(5), usize::MAX);
    }

    #[test]
    fn typewriter_progress() {
        let typewriter = TypewriterConfig::default();
        assert_eq!(typewriter.revealed_after(0), 0);
        assert_eq!(typewriter.revealed_after(500), 120);
    }
}
