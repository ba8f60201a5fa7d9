pub const DEFAULT_STEP_LIMIT: u64 = 10_000_000;

/// Settings for a single run of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of instructions to execute before giving up. `None`
    /// lets programs that never fall off the end run forever.
    pub step_limit: Option<u64>,
}

impl EngineConfig {
    pub fn unlimited() -> EngineConfig {
        EngineConfig { step_limit: None }
    }

    pub fn with_step_limit(limit: u64) -> EngineConfig {
        EngineConfig {
            step_limit: Some(limit),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> EngineConfig {
        EngineConfig::with_step_limit(DEFAULT_STEP_LIMIT)
    }
}
