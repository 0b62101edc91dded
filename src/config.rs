/// Agent endpoint configuration

/// Where the local agent listens unless overridden at build time
pub const DEFAULT_AGENT_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    pub base_url: String,
}

impl AgentConfig {
    pub fn new(base_url: impl Into<String>) -> AgentConfig {
        let base_url = base_url.into();
        AgentConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the ask endpoint
    pub fn ask_url(&self) -> String {
        format!("{}/ask", self.base_url)
    }
}

impl Default for AgentConfig {
    // The popup has no filesystem, so the only override is YT_ASK_AGENT_URL
    // at compile time.
    fn default() -> Self {
        Self::new(option_env!("YT_ASK_AGENT_URL").unwrap_or(DEFAULT_AGENT_URL))
    }
}
