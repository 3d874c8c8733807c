use serde::{Deserialize, Deserializer, de::Error};

use crate::color::Rgba;

pub fn de_opt_color<'de, D>(deserializer: D) -> Result<Option<Rgba>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value {
        None => Ok(None),
        Some(string) => match string.parse::<Rgba>() {
            Ok(color) => Ok(Some(color)),
            Err(_) => Err(D::Error::custom(format!(
                "could not parse color \"{string}\""
            ))),
        },
    }
}
