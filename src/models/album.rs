use serde_derive::{Deserialize, Serialize};

/// A row of the `albums` table. Serializes to the public album shape.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Album {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub artist: String,
}

