pub type RevealResult<T> = Result<T, RevealError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RevealError {
    #[error("asset load failed for {url}: {reason}")]
    AssetLoad { url: String, reason: String },

    #[error("invalid scroll range [{start}, {end}]")]
    InvalidRange { start: f32, end: f32 },

    #[error("invalid activation sequence: {0}")]
    Sequence(String),
}

impl RevealError {
    pub fn asset_load(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AssetLoad {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn sequence(msg: impl Into<String>) -> Self {
        Self::Sequence(msg.into())
    }
}
