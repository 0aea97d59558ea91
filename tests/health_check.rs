mod common;

#[tokio::test]
async fn health_check_works() {
    let app = common::spawn_app().await;

    let response = app
        .client
        .get(app.url("/health_check"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}

#[tokio::test]
async fn welcome_needs_no_token() {
    let app = common::spawn_app().await;

    let response = app
        .client
        .get(app.url("/"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "Welcome to music store.");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let app = common::spawn_app().await;

    let response = app.get("/playlists", &common::manager_token()).await;

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn unsupported_method_on_known_path_is_405() {
    let app = common::spawn_app().await;

    for (method, path) in [
        (reqwest::Method::PUT, "/albums/1"),
        (reqwest::Method::DELETE, "/artists"),
    ] {
        let response = app
            .client
            .request(method, app.url(path))
            .bearer_auth(common::manager_token())
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(response.status().as_u16(), 405);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 405);
        assert_eq!(body["message"], "method not allowed");
    }
}

#[tokio::test]
async fn nested_unknown_path_in_scope_is_404() {
    let app = common::spawn_app().await;

    let response = app.get("/albums/1/tracks", &common::manager_token()).await;

    assert_eq!(response.status().as_u16(), 404);
}
