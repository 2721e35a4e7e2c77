#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("[ParseFailed] malformed template encoding - {0}")]
    Json(#[from] serde_json::Error),
    #[error("[ParseFailed] template version `{found}` is not supported (expected `{supported}`)")]
    UnsupportedVersion { found: u32, supported: u32 },
}
