use clap::Parser;

use nutriguard_core::domain::common::{HistoryConfig, LlmConfig, NutriguardConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriguard-api", version, about = "NutriGuard HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub history: HistoryArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. "/api/v1".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Left empty, every inference-backed operation fails fast with a
    /// missing-credential error.
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct HistoryArgs {
    #[arg(long, env = "HISTORY_MAX_ENTRIES", default_value_t = 20)]
    pub history_max_entries: usize,
}

impl From<Args> for NutriguardConfig {
    fn from(args: Args) -> Self {
        NutriguardConfig {
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
            history: HistoryConfig {
                max_entries: args.history.history_max_entries,
            },
        }
    }
}
