//! End-to-end loading against mocked Firestore and callable-function endpoints.

use httpmock::prelude::*;
use serde_json::json;
use sitecraft::config::FirebaseConfig;
use sitecraft::{LoadError, SiteConfig, load_site};

fn config_for(server: &MockServer, site_id: Option<&str>) -> SiteConfig {
    SiteConfig {
        project_id: site_id.map(str::to_string),
        firebase: FirebaseConfig {
            firestore_url: Some(server.url("/docs")),
            functions_url: Some(server.base_url()),
            timeout_secs: 5,
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn loads_from_document_store() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/docs/projects/acme/website/config");
            then.status(200).json_body(json!({
                "name": "projects/p/databases/(default)/documents/projects/acme/website/config",
                "fields": {
                    "settings": { "mapValue": { "fields": {
                        "siteName": { "stringValue": "Acme" },
                        "gradientType": { "stringValue": "radial" }
                    }}},
                    "homepage": { "mapValue": { "fields": {
                        "heroTagline": { "stringValue": "Go fast" },
                        "portfolioItems": { "arrayValue": { "values": [
                            { "mapValue": { "fields": {
                                "slide_id": { "stringValue": "s1" },
                                "title": { "stringValue": "Shown" },
                                "status": { "stringValue": "active" }
                            }}},
                            { "mapValue": { "fields": {
                                "title": { "stringValue": "Hidden" },
                                "status": { "stringValue": "draft" }
                            }}}
                        ]}}
                    }}}
                }
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/docs/projects/acme/services");
            then.status(200).json_body(json!({
                "documents": [{
                    "name": "x/documents/projects/acme/services/cut",
                    "fields": {
                        "name": { "stringValue": "Haircut" },
                        "price": { "integerValue": "25" }
                    }
                }]
            }));
        })
        .await;
    let procedure = server
        .mock_async(|when, then| {
            when.method(POST).path("/getWebsiteData");
            then.status(200).json_body(json!({ "result": {} }));
        })
        .await;

    let site = load_site(&config_for(&server, Some("acme"))).await.unwrap();

    procedure.assert_hits_async(0).await;
    assert_eq!(site.settings.business_name, "Acme");
    assert_eq!(site.homepage.hero_subtext, "Go fast");
    let titles: Vec<_> = site.homepage.hero_slides.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Shown"]);
    assert_eq!(site.homepage.hero_slides[0].id, "s1");
    assert_eq!(site.services.len(), 1);
    assert_eq!(site.services[0].id, "cut");
    assert_eq!(site.services[0].price.as_deref(), Some("25"));
}

#[tokio::test]
async fn falls_back_to_callable_function() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/docs/projects/acme/website/config");
            then.status(404).json_body(json!({ "error": { "status": "NOT_FOUND" } }));
        })
        .await;
    let procedure = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/getWebsiteData")
                .json_body(json!({ "data": { "projectId": "acme" } }));
            then.status(200).json_body(json!({
                "result": {
                    "success": true,
                    "data": {
                        "settings": { "businessName": "Acme Backend" },
                        "about": { "coreValues": { "trust": "Always" } }
                    }
                }
            }));
        })
        .await;

    let site = load_site(&config_for(&server, Some("acme"))).await.unwrap();

    procedure.assert_async().await;
    assert_eq!(site.settings.business_name, "Acme Backend");
    let values = site.about.core_values.unwrap();
    assert_eq!(values.trust.as_deref(), Some("Always"));
}

#[tokio::test]
async fn reports_no_data_when_both_paths_are_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/docs/projects/acme/website/config");
            then.status(404);
        })
        .await;
    let procedure = server
        .mock_async(|when, then| {
            when.method(POST).path("/getWebsiteData");
            then.status(200)
                .json_body(json!({ "result": { "success": true, "data": null } }));
        })
        .await;

    let err = load_site(&config_for(&server, Some("acme")))
        .await
        .unwrap_err();

    procedure.assert_hits_async(1).await;
    assert!(matches!(err, LoadError::NoContent { .. }));
    assert!(
        err.to_string()
            .to_lowercase()
            .contains("no website data found")
    );
}

#[tokio::test]
async fn missing_site_id_makes_no_requests() {
    let server = MockServer::start_async().await;
    let any = server
        .mock_async(|_when, then| {
            then.status(500);
        })
        .await;

    let err = load_site(&config_for(&server, None)).await.unwrap_err();

    any.assert_hits_async(0).await;
    assert!(matches!(err, LoadError::Configuration(_)));
    assert!(err.to_string().contains("missing site identifier"));
}
