pub const LOG_FORMAT_VAR: &str = "MARS_ROVER_LOG_FORMAT";
pub const PROMPTS_VAR: &str = "MARS_ROVER_PROMPTS";

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "OFF,mars_rover=WARN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptMode {
    /// Prompt only when stdin is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl PromptMode {
    pub fn enabled(self, stdin_is_terminal: bool) -> bool {
        match self {
            PromptMode::Auto => stdin_is_terminal,
            PromptMode::Always => true,
            PromptMode::Never => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct Configuration {
    pub log_format: LogFormat,
    pub prompts: PromptMode,
    /// Unrecognised settings, kept so they can be logged once logging is up.
    pub ignored: Vec<String>,
}

impl Configuration {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut configuration = Configuration::default();

        if let Some(value) = lookup(LOG_FORMAT_VAR) {
            match value.trim().to_lowercase().as_str() {
                "pretty" => configuration.log_format = LogFormat::Pretty,
                "json" => configuration.log_format = LogFormat::Json,
                _ => configuration
                    .ignored
                    .push(format!("ignoring {}={:?}", LOG_FORMAT_VAR, value)),
            }
        }

        if let Some(value) = lookup(PROMPTS_VAR) {
            match value.trim().to_lowercase().as_str() {
                "auto" => configuration.prompts = PromptMode::Auto,
                "always" => configuration.prompts = PromptMode::Always,
                "never" => configuration.prompts = PromptMode::Never,
                _ => configuration
                    .ignored
                    .push(format!("ignoring {}={:?}", PROMPTS_VAR, value)),
            }
        }

        configuration
    }
}
