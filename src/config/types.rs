use serde::Deserialize;

/// Main configuration structure for pagesift
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub client: ClientConfig,
    pub analysis: AnalysisConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            client: ClientConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Name reported in the user agent string
    #[serde(rename = "agent-name")]
    pub agent_name: String,

    /// Version reported in the user agent string
    #[serde(rename = "agent-version")]
    pub agent_version: String,

    /// Overall request timeout in seconds
    #[serde(rename = "timeout-seconds")]
    pub timeout_seconds: u64,

    /// Connection establishment timeout in seconds
    #[serde(rename = "connect-timeout-seconds")]
    pub connect_timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            agent_name: "pagesift".to_string(),
            agent_version: env!("CARGO_PKG_VERSION").to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
        }
    }
}

impl ClientConfig {
    /// Formats the user agent string sent with every request
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.agent_name, self.agent_version)
    }
}

/// Default parameters for the analytics operations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of words reported by the frequency analysis when not given
    #[serde(rename = "top-words")]
    pub top_words: usize,

    /// Number of sentences in the summary when not given
    #[serde(rename = "summary-sentences")]
    pub summary_sentences: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            top_words: 10,
            summary_sentences: 3,
        }
    }
}
