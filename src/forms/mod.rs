pub mod album;
pub mod artist;
mod year;

pub use album::{AlbumPatch, NewAlbum};
pub use artist::{ArtistPatch, NewArtist};
pub use year::Year;

/// Why a request body could not be turned into a row.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("missing required field `{0}`")]
    Missing(&'static str),
    #[error("invalid data received: {0}")]
    Invalid(String),
}

impl FormError {
    pub(crate) fn invalid(errors: serde_valid::validation::Errors) -> Self {
        FormError::Invalid(errors.to_string())
    }
}
