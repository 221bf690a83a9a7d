use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON for --conditions-json: {source}")]
    ParseConditionsJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid JSON in input document: {source}")]
    ParseInputDocument {
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[error("Input document contains no conditions")]
    EmptyInput,

    #[error("Could not initialise logging: {0}")]
    InitLogging(String),
}
