use oadoc_core::parse::{self, HttpMethod};
use oadoc_core::parse::parameter::ParameterLocation;
use oadoc_core::parse::request_body::RequestBodyOrRef;
use oadoc_core::parse::response::ResponseOrRef;
use oadoc_core::ParseError;
use serde_json::json;

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const USERS: &str = include_str!("fixtures/users-api.json");

#[test]
fn parse_petstore_yaml() {
    let doc = parse::from_yaml(PETSTORE).expect("should parse petstore");
    assert_eq!(doc.openapi, "3.0.3");
    assert_eq!(doc.info.title, "Petstore");
    assert_eq!(doc.info.version, "1.2.0");
    assert_eq!(doc.paths.len(), 7);
    assert_eq!(doc.operation_count(), 10);

    let declared: Vec<_> = doc.paths.keys().map(String::as_str).collect();
    assert_eq!(
        declared,
        vec![
            "/pets",
            "/pets/{petId}",
            "/pets/mine",
            "/owners/{ownerId}/pets/{petId}",
            "/store/inventory",
            "/files/{name}.{ext}",
            "/health",
        ]
    );
}

#[test]
fn parse_petstore_operations() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let item = doc.paths.get("/pets/{petId}").expect("should have /pets/{petId}");
    assert_eq!(item.methods(), vec![HttpMethod::Get, HttpMethod::Delete]);
    assert_eq!(item.parameters.len(), 1);

    let delete = item.delete.as_ref().unwrap();
    assert!(delete.is_deprecated());
    assert_eq!(delete.tags, vec!["pets", "store"]);
    assert_eq!(delete.security.as_ref().unwrap()[0]["bearerAuth"].len(), 0);

    let get = item.get.as_ref().unwrap();
    match get.responses.get("default").unwrap() {
        ResponseOrRef::Ref { ref_path } => {
            assert_eq!(ref_path, "#/components/responses/Error")
        }
        other => panic!("expected a reference, got {other:?}"),
    }
    assert_eq!(
        get.responses.get("200").unwrap().description(),
        Some("Expected response to a valid request")
    );

    let create = doc.paths["/pets"].post.as_ref().unwrap();
    match create.request_body.as_ref().unwrap() {
        RequestBodyOrRef::RequestBody(body) => {
            assert!(body.required);
            let media = body.content.get("application/json").unwrap();
            assert!(media.schema.is_some());
            assert_eq!(
                media.example_text().as_deref(),
                Some("{\n  \"name\": \"Rex\",\n  \"tag\": \"dog\"\n}")
            );
        }
        other => panic!("expected inline request body, got {other:?}"),
    }

    let list = doc.paths["/pets"].get.as_ref().unwrap();
    let limit = list.parameters[0].as_parameter().unwrap();
    assert_eq!(limit.location, ParameterLocation::Query);
    assert!(!limit.is_required());
}

#[test]
fn parse_petstore_servers_and_components() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    assert_eq!(doc.servers.len(), 2);
    let region = &doc.servers[0].variables["region"];
    assert_eq!(region.default, "eu");
    assert_eq!(region.enum_values, vec!["eu", "us"]);
    assert!(doc.servers[1].description.is_none());

    let tags: Vec<_> = doc.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tags, vec!["pets", "store", "owners"]);

    let components = doc.components.as_ref().expect("should have components");
    assert_eq!(components.schemas.len(), 1);
    let schemes: Vec<_> = components
        .security_schemes()
        .into_iter()
        .map(|(name, scheme)| (name, scheme.summary()))
        .collect();
    assert_eq!(
        schemes,
        vec![
            ("bearerAuth", "HTTP bearer (JWT)".to_string()),
            ("apiKey", "API key in header `X-API-Key`".to_string()),
        ]
    );
}

#[test]
fn parse_users_json() {
    let doc = parse::from_json(USERS).expect("should parse users-api.json");
    assert_eq!(doc.info.title, "Sample API");
    assert_eq!(doc.servers[1].url, "https://staging-api.example.com/v1");
    assert_eq!(doc.paths.len(), 4);
    assert!(doc.tags.is_empty());
}

#[test]
fn from_source_uses_file_name() {
    assert!(parse::from_source(USERS, Some("users-api.json")).is_ok());
    assert!(parse::from_source(PETSTORE, Some("petstore.yml")).is_ok());
    assert!(parse::from_source(PETSTORE, None).is_ok());
    assert!(matches!(
        parse::from_source(PETSTORE, Some("petstore.json")),
        Err(ParseError::Json(_))
    ));
}

#[test]
fn parse_rejects_non_objects() {
    for raw in [json!(null), json!("openapi"), json!(3), json!([])] {
        assert!(matches!(
            parse::parse_document(&raw),
            Err(ParseError::NotAnObject)
        ));
    }
}

#[test]
fn parse_requires_core_fields() {
    assert!(matches!(
        parse::parse_document(&json!({})),
        Err(ParseError::MissingField("openapi"))
    ));
    assert!(matches!(
        parse::parse_document(&json!({"openapi": "3.0.0", "paths": {}})),
        Err(ParseError::MissingField("info"))
    ));
    assert!(matches!(
        parse::from_yaml("openapi: 3.0.0\ninfo: {title: t, version: '1'}\n"),
        Err(ParseError::MissingField("paths"))
    ));
}

#[test]
fn parse_minimal_document() {
    let doc = parse::parse_document(&json!({
        "openapi": "3.0.0",
        "info": {"title": "x", "version": "1"},
        "paths": {},
    }))
    .unwrap();
    assert!(doc.paths.is_empty());
    assert_eq!(doc.operation_count(), 0);
}

#[test]
fn parsed_document_serializes_back() {
    let doc = parse::from_yaml(PETSTORE).unwrap();
    let value = serde_json::to_value(&doc).unwrap();
    let again = parse::parse_document(&value).unwrap();
    assert_eq!(doc, again);
}
