use thiserror::Error;

/// Why a single chat turn produced no reply. Each variant ends the turn;
/// the user can simply submit again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The endpoint answered 200 but the body was not the expected shape.
    #[error("⚠️ Could not parse model response.")]
    ParseFailure,

    /// The endpoint answered with a non-success status.
    #[error("❌ API error {status}: {body}")]
    RemoteFailure { status: u16, body: String },

    /// No HTTP status was received at all (DNS, connect, TLS).
    #[error("❌ Request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for TurnError {
    fn from(e: reqwest::Error) -> Self {
        TurnError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_failure_message_carries_status_and_body() {
        let e = TurnError::RemoteFailure {
            status: 503,
            body: "server busy".into(),
        };
        let text = e.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("server busy"));
    }

    #[test]
    fn parse_failure_message_is_generic() {
        assert_eq!(
            TurnError::ParseFailure.to_string(),
            "⚠️ Could not parse model response."
        );
    }
}
