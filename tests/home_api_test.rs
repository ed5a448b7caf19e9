// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Home endpoint requests against a mock backend

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use storefront::api::{self, BannerParams, DistributionSite, HomeApi};
use storefront::{
    Gateway, GatewayConfig, MemorySessionStore, NotificationLog, RetryPolicy, RouteHistory,
    SessionStore,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(server: &MockServer, session: MemorySessionStore) -> (Gateway, RouteHistory, NotificationLog) {
    let nav = RouteHistory::new();
    let log = NotificationLog::new();
    let gateway = Gateway::new(
        GatewayConfig::new()
            .base_url(server.uri())
            .retry(RetryPolicy::new(1, Duration::from_millis(10))),
        Arc::new(session),
        Arc::new(nav.clone()),
        Arc::new(log.clone()),
    )
    .unwrap();
    (gateway, nav, log)
}

#[tokio::test]
async fn test_banner_defaults_to_home_site() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/home/banner"))
        .and(query_param("distributionSite", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "1",
            "result": [{"id": "1", "imgUrl": "https://img.test/a.jpg", "hrefUrl": "/category/1", "type": "1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (gateway, _, _) = gateway(&server, MemorySessionStore::new());
    let payload = api::get_banner(&gateway, BannerParams::default()).await.unwrap();

    assert_eq!(payload["result"][0]["imgUrl"], "https://img.test/a.jpg");
}

#[tokio::test]
async fn test_banner_with_explicit_site() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/home/banner"))
        .and(query_param("distributionSite", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
        .expect(1)
        .mount(&server)
        .await;

    let (gateway, _, _) = gateway(&server, MemorySessionStore::new());
    HomeApi::new(&gateway)
        .banner(BannerParams::site(DistributionSite::CATEGORY))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_parameterless_endpoints() {
    let server = MockServer::start().await;

    for (endpoint, marker) in [("/home/new", "new"), ("/home/hot", "hot"), ("/home/goods", "goods")] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": marker})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let (gateway, _, _) = gateway(&server, MemorySessionStore::with_token("abc"));
    let home = HomeApi::new(&gateway);

    assert_eq!(home.new_arrivals().await.unwrap()["result"], "new");
    assert_eq!(home.hot().await.unwrap()["result"], "hot");
    assert_eq!(home.goods().await.unwrap()["result"], "goods");

    for request in server.received_requests().await.unwrap() {
        assert_eq!(request.url.query(), None);
        assert_eq!(
            request.headers.get("authorization").and_then(|v| v.to_str().ok()),
            Some("Bearer abc")
        );
    }
}

#[tokio::test]
async fn test_concurrent_calls_resolve_independently() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/home/new"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"result": "slow"}))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/home/hot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "fast"})))
        .mount(&server)
        .await;

    let (gateway, _, _) = gateway(&server, MemorySessionStore::new());
    let (new, hot) = tokio::join!(api::find_new(&gateway), api::get_hot(&gateway));

    assert_eq!(new.unwrap()["result"], "slow");
    assert_eq!(hot.unwrap()["result"], "fast");
}

#[tokio::test]
async fn test_expired_token_scenario() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/home/goods"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "token expired"})))
        .expect(1)
        .mount(&server)
        .await;

    let session = MemorySessionStore::with_token("expired");
    let (gateway, nav, log) = gateway(&server, session.clone());

    let err = api::get_goods(&gateway).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(log.messages(), vec!["token expired".to_string()]);
    assert_eq!(session.token(), None);
    assert_eq!(nav.current(), "/login");
}
