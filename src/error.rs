//! Domain errors raised at the reporting boundary

use crate::catalog::SkinTarget;

#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// A caller passed a game id that is not in the catalog
    #[error("unknown game id: {0}")]
    UnknownGame(String),

    #[error("unknown skin id: {0}")]
    UnknownSkin(String),

    #[error("skin {0} is still locked")]
    SkinLocked(String),

    #[error("skin {skin} cannot be equipped on {target}")]
    SkinTargetMismatch { skin: String, target: SkinTarget },
}
