//! Shell configuration.

/// What to do about the demo network at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SamplePolicy {
    /// Ask the user (y/n) before the menu appears.
    #[default]
    Ask,
    Load,
    Skip,
}

impl SamplePolicy {
    /// Map a `--sample` / `--no-sample` flag pair onto a policy.
    pub fn from_flags(sample: bool, no_sample: bool) -> Self {
        match (sample, no_sample) {
            (true, _) => Self::Load,
            (false, true) => Self::Skip,
            (false, false) => Self::Ask,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShellConfig {
    pub sample: SamplePolicy,
    /// Print statistics as JSON instead of the text report.
    pub json_stats: bool,
}
