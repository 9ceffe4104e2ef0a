use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A security scheme type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecuritySchemeType {
    ApiKey,
    Http,
    #[serde(rename = "oauth2")]
    OAuth2,
    OpenIdConnect,
    #[serde(rename = "mutualTLS")]
    MutualTls,
}

/// Location of an API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Query,
    Header,
    Cookie,
}

/// OAuth2 flows configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,
    #[serde(rename = "clientCredentials", skip_serializing_if = "Option::is_none")]
    pub client_credentials: Option<OAuthFlow>,
    #[serde(rename = "authorizationCode", skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<OAuthFlow>,
}

/// A single OAuth2 flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthFlow {
    #[serde(rename = "authorizationUrl", skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    #[serde(rename = "tokenUrl", skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    #[serde(rename = "refreshUrl", skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    #[serde(default)]
    pub scopes: IndexMap<String, String>,
}

/// A security scheme definition, as read from `components.securitySchemes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: SecuritySchemeType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<ApiKeyLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    #[serde(rename = "bearerFormat", skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flows: Option<OAuthFlows>,

    #[serde(rename = "openIdConnectUrl", skip_serializing_if = "Option::is_none")]
    pub open_id_connect_url: Option<String>,
}

impl SecurityScheme {
    /// One-line human description, e.g. `HTTP bearer (JWT)`.
    pub fn summary(&self) -> String {
        match self.scheme_type {
            SecuritySchemeType::ApiKey => {
                let location = match self.location {
                    Some(ApiKeyLocation::Query) => "query",
                    Some(ApiKeyLocation::Header) => "header",
                    Some(ApiKeyLocation::Cookie) => "cookie",
                    None => "request",
                };
                match &self.name {
                    Some(name) => format!("API key in {location} `{name}`"),
                    None => format!("API key in {location}"),
                }
            }
            SecuritySchemeType::Http => {
                let scheme = self.scheme.as_deref().unwrap_or("auth");
                match &self.bearer_format {
                    Some(format) => format!("HTTP {scheme} ({format})"),
                    None => format!("HTTP {scheme}"),
                }
            }
            SecuritySchemeType::OAuth2 => "OAuth 2.0".to_string(),
            SecuritySchemeType::OpenIdConnect => match &self.open_id_connect_url {
                Some(url) => format!("OpenID Connect ({url})"),
                None => "OpenID Connect".to_string(),
            },
            SecuritySchemeType::MutualTls => "Mutual TLS".to_string(),
        }
    }
}

/// A security requirement: map of scheme name → required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scheme(value: serde_json::Value) -> SecurityScheme {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            scheme(json!({"type": "http", "scheme": "bearer", "bearerFormat": "JWT"})).summary(),
            "HTTP bearer (JWT)"
        );
        assert_eq!(
            scheme(json!({"type": "apiKey", "name": "X-API-Key", "in": "header"})).summary(),
            "API key in header `X-API-Key`"
        );
        assert_eq!(scheme(json!({"type": "oauth2", "flows": {}})).summary(), "OAuth 2.0");
        assert_eq!(scheme(json!({"type": "mutualTLS"})).summary(), "Mutual TLS");
    }
}
