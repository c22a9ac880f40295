use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ph_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ph_db::DbError),

    #[error("RPC client error: {0}")]
    Rpc(#[from] ph_rpc::RpcError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
