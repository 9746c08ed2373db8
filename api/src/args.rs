use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueEnum};
use quill_core::domain::common::{
    AuthConfig, DatabaseConfig, QuillConfig, StorageBackend, UploadsConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "quill-api", version, about = "File ingestion API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub uploads: UploadArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix of every API route
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    /// Scheme and host prepended to `fileUrl`, e.g. `https://cms.example.com`
    #[arg(long = "server-external-url", env = "SERVER_EXTERNAL_URL", default_value = "")]
    pub external_url: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(long = "database-backend", env = "DATABASE_BACKEND", value_enum, default_value_t = BackendArg::Postgres)]
    pub backend: BackendArg,

    #[arg(id = "database-host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database-port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "quill")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct UploadArgs {
    /// Directory the admin upload endpoint writes into
    #[arg(long = "upload-dir", env = "UPLOAD_DIR", default_value = "./uploads")]
    pub dir: PathBuf,

    #[arg(long = "upload-url-prefix", env = "UPLOAD_URL_PREFIX", default_value = "/content/uploads")]
    pub url_prefix: String,

    #[arg(long = "max-upload-bytes", env = "MAX_UPLOAD_BYTES", default_value_t = 50 * 1024 * 1024)]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    /// HS256 secret used to verify bearer tokens
    #[arg(long = "jwt-secret", env = "JWT_SECRET")]
    pub jwt_secret: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<BackendArg> for StorageBackend {
    fn from(value: BackendArg) -> Self {
        match value {
            BackendArg::Postgres => StorageBackend::Postgres,
            BackendArg::Memory => StorageBackend::InMemory,
        }
    }
}

impl From<Args> for QuillConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                backend: args.db.backend.into(),
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            uploads: UploadsConfig {
                dir: args.uploads.dir,
                url_prefix: args.uploads.url_prefix,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret.filter(|secret| !secret.is_empty()),
            },
        }
    }
}
