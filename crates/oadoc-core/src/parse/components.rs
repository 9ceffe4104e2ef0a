use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;
use super::security::SecurityScheme;

/// Components object holding reusable definitions. Entries are stored as
/// opaque JSON; only security schemes have a typed view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "lenient::or_default"
    )]
    pub schemas: IndexMap<String, Value>,

    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "lenient::or_default"
    )]
    pub responses: IndexMap<String, Value>,

    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "lenient::or_default"
    )]
    pub parameters: IndexMap<String, Value>,

    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "lenient::or_default"
    )]
    pub examples: IndexMap<String, Value>,

    #[serde(
        rename = "requestBodies",
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "lenient::or_default"
    )]
    pub request_bodies: IndexMap<String, Value>,

    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "lenient::or_default"
    )]
    pub headers: IndexMap<String, Value>,

    #[serde(
        rename = "securitySchemes",
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "lenient::or_default"
    )]
    pub security_schemes: IndexMap<String, Value>,

    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "lenient::or_default"
    )]
    pub links: IndexMap<String, Value>,

    #[serde(
        default,
        skip_serializing_if = "IndexMap::is_empty",
        deserialize_with = "lenient::or_default"
    )]
    pub callbacks: IndexMap<String, Value>,
}

impl Components {
    /// Security schemes that parse as such, in declaration order.
    pub fn security_schemes(&self) -> Vec<(&str, SecurityScheme)> {
        self.security_schemes
            .iter()
            .filter_map(|(name, raw)| {
                SecurityScheme::deserialize(raw)
                    .ok()
                    .map(|scheme| (name.as_str(), scheme))
            })
            .collect()
    }
}
