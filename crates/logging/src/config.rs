//! crates/logging/src/config.rs
//! Per-component verbosity derived from the `-v` count.

use std::fmt::Write as _;

use tracing::level_filters::LevelFilter;

/// Library areas that emit events, keyed by their tracing target.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Component {
    /// Signature generation (`rdiff::signature`).
    Signature,
    /// Delta generation (`rdiff::delta`).
    Delta,
    /// Reading and writing signature and delta files (`rdiff::persist`).
    Persist,
}

impl Component {
    /// Every component, in directive order.
    pub const ALL: [Self; 3] = [Self::Signature, Self::Delta, Self::Persist];

    /// Tracing target used by events of this component.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Signature => "rdiff::signature",
            Self::Delta => "rdiff::delta",
            Self::Persist => "rdiff::persist",
        }
    }
}

/// Level filters for each [`Component`] plus everything else.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerbosityConfig {
    /// Filter for `rdiff::signature`.
    pub signature: LevelFilter,
    /// Filter for `rdiff::delta`.
    pub delta: LevelFilter,
    /// Filter for `rdiff::persist`.
    pub persist: LevelFilter,
    /// Filter for all other targets.
    pub other: LevelFilter,
}

impl Default for VerbosityConfig {
    fn default() -> Self {
        Self::from_verbose_level(0)
    }
}

impl VerbosityConfig {
    /// Create a configuration from the number of `-v` flags.
    ///
    /// 0 keeps warnings only, 1 adds info, 2 adds debug and 3 or more enables
    /// trace output for the rdiff components.
    pub fn from_verbose_level(level: u8) -> Self {
        let (components, other) = match level {
            0 => (LevelFilter::WARN, LevelFilter::WARN),
            1 => (LevelFilter::INFO, LevelFilter::WARN),
            2 => (LevelFilter::DEBUG, LevelFilter::INFO),
            _ => (LevelFilter::TRACE, LevelFilter::DEBUG),
        };
        Self {
            signature: components,
            delta: components,
            persist: components,
            other,
        }
    }

    /// Filter for `component`.
    #[must_use]
    pub const fn level(&self, component: Component) -> LevelFilter {
        match component {
            Component::Signature => self.signature,
            Component::Delta => self.delta,
            Component::Persist => self.persist,
        }
    }

    /// Most verbose filter across all targets.
    #[must_use]
    pub fn max_level(&self) -> LevelFilter {
        Component::ALL
            .into_iter()
            .map(|component| self.level(component))
            .fold(self.other, LevelFilter::max)
    }

    /// Renders the configuration as `EnvFilter` directives.
    #[must_use]
    pub fn directives(&self) -> String {
        let mut directives = self.other.to_string().to_lowercase();
        for component in Component::ALL {
            let level = self.level(component).to_string().to_lowercase();
            let _ = write!(directives, ",{}={level}", component.target());
        }
        directives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        let config = VerbosityConfig::default();
        assert_eq!(config.max_level(), LevelFilter::WARN);
        assert_eq!(
            config.directives(),
            "warn,rdiff::signature=warn,rdiff::delta=warn,rdiff::persist=warn"
        );
    }

    #[test]
    fn levels_rise_with_flag_count() {
        assert_eq!(VerbosityConfig::from_verbose_level(1).delta, LevelFilter::INFO);
        assert_eq!(VerbosityConfig::from_verbose_level(2).delta, LevelFilter::DEBUG);
        assert_eq!(VerbosityConfig::from_verbose_level(3).delta, LevelFilter::TRACE);
        assert_eq!(VerbosityConfig::from_verbose_level(9).delta, LevelFilter::TRACE);
    }

    #[test]
    fn other_targets_lag_one_step() {
        assert_eq!(VerbosityConfig::from_verbose_level(1).other, LevelFilter::WARN);
        assert_eq!(VerbosityConfig::from_verbose_level(2).other, LevelFilter::INFO);
        assert_eq!(VerbosityConfig::from_verbose_level(3).other, LevelFilter::DEBUG);
    }

    #[test]
    fn component_targets_are_distinct() {
        let targets: Vec<_> = Component::ALL.iter().map(|c| c.target()).collect();
        assert_eq!(targets, ["rdiff::signature", "rdiff::delta", "rdiff::persist"]);
    }
}
