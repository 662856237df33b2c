use acorn_core::domain::common::{AcornConfig, BackendConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "acorn-api", about = "AcornArranger list API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub backend: BackendArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct BackendArgs {
    #[arg(long = "supabase-url", env = "SUPABASE_URL")]
    pub url: String,

    #[arg(long = "supabase-key", env = "SUPABASE_SERVICE_ROLE_KEY", hide_env_values = true)]
    pub api_key: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for AcornConfig {
    fn from(args: Args) -> Self {
        Self {
            backend: BackendConfig {
                url: args.backend.url,
                api_key: args.backend.api_key,
            },
        }
    }
}
