use super::FormError;
use crate::models;
use serde::Deserialize;
use serde_valid::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct NewArtist {
    #[validate(min_length = 1)]
    #[validate(max_length = 120)]
    pub name: Option<String>,
}

impl TryFrom<NewArtist> for models::Artist {
    type Error = FormError;

    fn try_from(form: NewArtist) -> Result<Self, Self::Error> {
        form.validate().map_err(FormError::invalid)?;
        let name = form.name.ok_or(FormError::Missing("name"))?;

        Ok(models::Artist { id: 0, name })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ArtistPatch {
    #[validate(min_length = 1)]
    #[validate(max_length = 120)]
    pub name: Option<String>,
}

impl ArtistPatch {
    pub fn update(self, artist: &mut models::Artist) -> Result<(), FormError> {
        self.validate().map_err(FormError::invalid)?;

        if let Some(name) = self.name {
            artist.name = name;
        }

        Ok(())
    }
}
