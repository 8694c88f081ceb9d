use thiserror::Error;

/// Errors surfaced at the edges of the pipeline.
///
/// Layout itself never fails: degenerate inputs (empty text, overlong
/// words, text that cannot fit at the minimum size) fall back to defined
/// behavior instead. Only color parsing, image encoding, and filesystem
/// access can produce an error.
#[derive(Debug, Error)]
pub enum Error {
    /// A color string did not match the `#RRGGBB` form.
    #[error("invalid color {0:?}: expected \"#RRGGBB\"")]
    InvalidColor(String),
    /// PNG encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    /// Filesystem access failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
