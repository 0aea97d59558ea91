mod common;

use common::{customer_token, manager_token};
use serde_json::{json, Value};

#[tokio::test]
async fn manager_creates_and_customer_reads_artist() {
    let app = common::spawn_app().await;
    let created = app
        .create("/artists", "artist", json!({"name": "Daft Punk"}))
        .await;
    assert_eq!(created["name"], "Daft Punk");

    let response = app
        .get(&format!("/artists/{}", created["id"]), &customer_token())
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"success": true, "artist": created}));
}

#[tokio::test]
async fn list_artists() {
    let app = common::spawn_app().await;
    app.create("/artists", "artist", json!({"name": "The Beatles"}))
        .await;
    app.create("/artists", "artist", json!({"name": "Pink Floyd"}))
        .await;

    let response = app.get("/artists", &customer_token()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["artists"].as_array().unwrap().len(), 2);
    assert_eq!(body["artists"][1]["name"], "Pink Floyd");
}

#[tokio::test]
async fn artist_without_name_is_bad_request() {
    let app = common::spawn_app().await;

    let response = app
        .post_json("/artists", &manager_token(), &json!({"genre": "house"}))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "bad request");
}

#[tokio::test]
async fn customer_cannot_create_artist() {
    let app = common::spawn_app().await;

    let response = app
        .post_json("/artists", &customer_token(), &json!({"name": "Daft Punk"}))
        .await;

    assert_eq!(response.status().as_u16(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "unauthorized");
}

#[tokio::test]
async fn missing_artist_is_not_found() {
    let app = common::spawn_app().await;

    let response = app.get("/artists/7", &customer_token()).await;

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn patch_renames_artist() {
    let app = common::spawn_app().await;
    let created = app
        .create("/artists", "artist", json!({"name": "Daft Punk"}))
        .await;
    let path = format!("/artists/{}", created["id"]);

    let response = app
        .patch_json(&path, &manager_token(), &json!({"name": "Thomas Bangalter"}))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["artist"]["name"], "Thomas Bangalter");
    assert_eq!(body["artist"]["id"], created["id"]);
}

#[tokio::test]
async fn empty_patch_keeps_artist() {
    let app = common::spawn_app().await;
    let created = app
        .create("/artists", "artist", json!({"name": "Daft Punk"}))
        .await;

    let response = app
        .patch_json(
            &format!("/artists/{}", created["id"]),
            &manager_token(),
            &json!({}),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["artist"], created);
}

#[tokio::test]
async fn blank_name_patch_is_internal_error_and_keeps_artist() {
    let app = common::spawn_app().await;
    let created = app
        .create("/artists", "artist", json!({"name": "Daft Punk"}))
        .await;
    let path = format!("/artists/{}", created["id"]);

    let response = app
        .patch_json(&path, &manager_token(), &json!({"name": ""}))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "internal server error");

    let response = app.get(&path, &customer_token()).await;
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["artist"], created);
}

#[tokio::test]
async fn delete_artist_twice() {
    let app = common::spawn_app().await;
    let created = app
        .create("/artists", "artist", json!({"name": "Daft Punk"}))
        .await;
    let path = format!("/artists/{}", created["id"]);

    let first = app.delete(&path, &manager_token()).await;
    assert_eq!(first.status().as_u16(), 200);
    let body: Value = first.json().await.unwrap();
    assert_eq!(body["deleted"], created["id"]);

    let second = app.delete(&path, &manager_token()).await;
    assert_eq!(second.status().as_u16(), 404);
}

#[tokio::test]
async fn artist_names_need_not_be_unique() {
    let app = common::spawn_app().await;

    let first = app
        .create("/artists", "artist", json!({"name": "Daft Punk"}))
        .await;
    let second = app
        .create("/artists", "artist", json!({"name": "Daft Punk"}))
        .await;

    assert_ne!(first["id"], second["id"]);
}
