use super::FormError;
use serde::Deserialize;

/// Album year as sent by clients: either `2001` or `"2001"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i32),
    Text(String),
}

impl TryFrom<Year> for i32 {
    type Error = FormError;

    fn try_from(year: Year) -> Result<Self, Self::Error> {
        match year {
            Year::Number(year) => Ok(year),
            Year::Text(text) => text
                .trim()
                .parse::<i32>()
                .map_err(|_| FormError::Invalid(format!("year must be numeric, got {text:?}"))),
        }
    }
}
