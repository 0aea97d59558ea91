use super::{FormError, Year};
use crate::models;
use serde::Deserialize;
use serde_valid::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct NewAlbum {
    #[validate(min_length = 1)]
    #[validate(max_length = 120)]
    pub title: Option<String>,
    pub year: Option<Year>,
    #[validate(min_length = 1)]
    #[validate(max_length = 120)]
    pub artist: Option<String>,
}

impl NewAlbum {
    fn first_missing(&self) -> Option<&'static str> {
        [
            ("title", self.title.is_none()),
            ("year", self.year.is_none()),
            ("artist", self.artist.is_none()),
        ]
        .into_iter()
        .find_map(|(field, missing)| missing.then_some(field))
    }
}

impl TryFrom<NewAlbum> for models::Album {
    type Error = FormError;

    fn try_from(form: NewAlbum) -> Result<Self, Self::Error> {
        if let Some(field) = form.first_missing() {
            return Err(FormError::Missing(field));
        }
        form.validate().map_err(FormError::invalid)?;

        let year = match form.year {
            Some(year) => i32::try_from(year)?,
            None => return Err(FormError::Missing("year")),
        };

        Ok(models::Album {
            id: 0,
            title: form.title.unwrap_or_default(),
            year,
            artist: form.artist.unwrap_or_default(),
        })
    }
}

/// PATCH body. Absent (or null) fields leave the stored value untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AlbumPatch {
    #[validate(min_length = 1)]
    #[validate(max_length = 120)]
    pub title: Option<String>,
    pub year: Option<Year>,
    #[validate(min_length = 1)]
    #[validate(max_length = 120)]
    pub artist: Option<String>,
}

impl AlbumPatch {
    pub fn update(self, album: &mut models::Album) -> Result<(), FormError> {
        self.validate().map_err(FormError::invalid)?;

        if let Some(year) = self.year {
            album.year = i32::try_from(year)?;
        }

        if let Some(title) = self.title {
            album.title = title;
        }

        if let Some(artist) = self.artist {
            album.artist = artist;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn abbey_road() -> models::Album {
        models::Album {
            id: 1,
            title: "Abbey Road".to_string(),
            year: 1969,
            artist: "The Beatles".to_string(),
        }
    }

    #[test]
    fn complete_form_becomes_album() {
        let form: NewAlbum = serde_json::from_value(json!({
            "title": "Discovery",
            "year": "2001",
            "artist": "Daft Punk"
        }))
        .unwrap();

        let album = models::Album::try_from(form).unwrap();
        assert_eq!(album.title, "Discovery");
        assert_eq!(album.year, 2001);
        assert_eq!(album.artist, "Daft Punk");
    }

    #[test]
    fn each_missing_field_is_reported() {
        for field in ["title", "year", "artist"] {
            let mut body = json!({"title": "Discovery", "year": 2001, "artist": "Daft Punk"});
            body.as_object_mut().unwrap().remove(field);
            let form: NewAlbum = serde_json::from_value(body).unwrap();

            assert_eq!(
                models::Album::try_from(form),
                Err(FormError::Missing(field))
            );
        }
    }

    #[test]
    fn null_counts_as_missing() {
        let form: NewAlbum = serde_json::from_value(json!({
            "title": "Discovery",
            "year": null,
            "artist": "Daft Punk"
        }))
        .unwrap();

        assert_eq!(models::Album::try_from(form), Err(FormError::Missing("year")));
    }

    #[test]
    fn empty_title_is_invalid() {
        let form: NewAlbum = serde_json::from_value(json!({
            "title": "",
            "year": 2001,
            "artist": "Daft Punk"
        }))
        .unwrap();

        assert!(matches!(
            models::Album::try_from(form),
            Err(FormError::Invalid(_))
        ));
    }

    #[test]
    fn patch_only_touches_provided_fields() {
        let mut album = abbey_road();
        let patch: AlbumPatch = serde_json::from_value(json!({"title": "Let It Be"})).unwrap();

        patch.update(&mut album).unwrap();

        assert_eq!(album.title, "Let It Be");
        assert_eq!(album.year, 1969);
        assert_eq!(album.artist, "The Beatles");
    }

    #[test]
    fn rejected_patch_leaves_album_unchanged() {
        let mut album = abbey_road();
        let patch: AlbumPatch =
            serde_json::from_value(json!({"title": "Let It Be", "year": "soon"})).unwrap();

        assert!(patch.update(&mut album).is_err());
        assert_eq!(album, abbey_road());
    }
}
