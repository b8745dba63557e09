use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The service rejected the query. The message is surfaced verbatim;
    /// retry policy belongs to the transport layer, not the engine.
    #[error("catalog query rejected: {message}")]
    Upstream { message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid engine configuration: {reason}")]
    InvalidConfig { reason: String },
}
