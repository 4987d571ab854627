use thiserror::Error;

pub type OtoResult<T> = Result<T, OtoError>;

#[derive(Debug, Error)]
pub enum OtoError {
    /// A template placeholder has no corresponding argument
    #[error("placeholder {{{index}}} has no argument ({argc} supplied) in template \"{template}\"")]
    MissingArgument {
        index: usize,
        argc: usize,
        template: String,
    },

    /// The widget is absent from the live accessibility tree
    #[error("{role} '{name}' not found")]
    NotFound { role: String, name: String },

    /// The parent reference chain loops back on itself
    #[error("cyclic parent reference: {}", .chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },

    /// An ordinal-addressed widget has fewer live matches than required
    #[error("{role} #{position} requested but only {found} found")]
    IndexOutOfRange {
        role: String,
        position: usize,
        found: usize,
    },

    /// A parent reference names a widget that is not in the catalog
    #[error("no widget named '{0}' in the catalog")]
    UnknownWidget(String),

    /// A node handle the service no longer (or never) knew about
    #[error("stale node handle {0}")]
    StaleNode(u64),

    /// External service process failed to spawn
    #[error("failed to spawn {program}: {source}")]
    ServiceSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to an external service failed
    #[error("service I/O: {0}")]
    ServiceIo(String),

    /// External service answered, but reported a failure
    #[error("{command} failed: {error}")]
    ServiceProtocol { command: String, error: String },

    #[error("JSON parse error ({context}): {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialize error ({context}): {source}")]
    JsonSerialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP error talking to {endpoint}: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

impl OtoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OtoError::NotFound { .. })
    }
}
