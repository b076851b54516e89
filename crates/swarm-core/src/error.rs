use thiserror::Error;

/// Errors raised by the core pipeline.
///
/// None of these are fatal to the page: callers log them and skip the
/// affected text or update.
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("font parse error: {0}")]
    Font(#[from] ttf_parser::FaceParsingError),

    #[error("morph target has {points} points but the buffer holds {capacity}")]
    TargetTooLarge { points: usize, capacity: usize },

    #[error("morph target point {index} is not finite")]
    NonFiniteTarget { index: usize },

    #[error("no text entry at index {0}")]
    MissingEntry(usize),

    #[error("text entry {0} has no point cloud")]
    MissingCloud(usize),
}

pub type Result<T> = std::result::Result<T, SwarmError>;
