use thiserror::Error;

/// Errors raised while retrieving evidence or generating a section
#[derive(Debug, Error)]
pub enum RagError {
    /// The vector store file is missing or cannot be parsed
    #[error("Vector store unavailable: {0}")]
    StoreUnavailable(String),

    /// A corpus embedding and the query embedding disagree in length
    #[error("Embedding dimension mismatch for record {record_id}: query has {expected}, record has {found}")]
    EmbeddingDimensionMismatch {
        record_id: String,
        expected: usize,
        found: usize,
    },

    /// An embedding or completion call failed
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Failures reported by a model provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network or protocol failure before a response arrived
    #[error("Provider request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status
    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::MalformedResponse(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_surface_unwrapped() {
        let err = RagError::from(ProviderError::Status {
            status: 429,
            body: "rate limited".to_string(),
        });
        assert_eq!(err.to_string(), "Provider returned 429: rate limited");
    }

    #[test]
    fn dimension_mismatch_names_the_record() {
        let err = RagError::EmbeddingDimensionMismatch {
            record_id: "owt_7".to_string(),
            expected: 2,
            found: 3,
        };
        assert!(err.to_string().contains("owt_7"));
    }
}
