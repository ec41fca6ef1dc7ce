//! Configuration for linekv
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a linekv process
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    /// Fallback `EnvFilter` directive when `RUST_LOG` is not set
    pub log_filter: String,

    // -------------------------------------------------------------------------
    // REPL Configuration
    // -------------------------------------------------------------------------
    /// Prompt written before each line is read
    pub prompt: String,

    /// Input line that ends the session
    pub exit_command: String,

    /// Print the welcome text and command list on start
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            prompt: "> ".to_string(),
            exit_command: "exit".to_string(),
            show_banner: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the fallback log filter directive
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.log_filter = filter.into();
        self
    }

    /// Set the REPL prompt
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.prompt = prompt.into();
        self
    }

    /// Set the line that ends the session
    pub fn exit_command(mut self, command: impl Into<String>) -> Self {
        self.config.exit_command = command.into();
        self
    }

    /// Enable or disable the welcome banner
    pub fn show_banner(mut self, show: bool) -> Self {
        self.config.show_banner = show;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
