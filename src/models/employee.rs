use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Employee document as stored in the `employees` table and exchanged over HTTP.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub birthday_in_epoch: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
}

impl Employee {
    /// Parses a raw request body. Anything that is not a well-formed employee
    /// object comes back as an employee with every field empty.
    pub fn from_body(body: &str) -> Employee {
        match serde_json::from_str::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            _ => Employee::default(),
        }
    }

    /// Replaces the four business fields wholesale. The id is left alone.
    pub fn overwrite_details(&mut self, incoming: &Employee) {
        self.first_name = incoming.first_name.clone();
        self.last_name = incoming.last_name.clone();
        self.birthday_in_epoch = incoming.birthday_in_epoch.clone();
        self.email = incoming.email.clone();
    }
}

// Scalars are kept in their textual form and null reads as empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string value, found {}",
            other
        ))),
    }
}
