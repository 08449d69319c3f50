//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use serde_json::{json, Value};
use video_store::{Video, VideoInput};

use crate::support::start_default;

async fn create(client: &reqwest::Client, base: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{base}/videos/"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

async fn list(client: &reqwest::Client, base: &str) -> Vec<Video> {
    let resp = client.get(format!("{base}/videos/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn list_starts_empty() {
    let (base, _) = start_default().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/videos/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_then_list() {
    let (base, _) = start_default().await;
    let client = reqwest::Client::new();

    let resp = create(
        &client,
        &base,
        json!({ "id": 77, "title": "Bicycle kick", "description": "90th minute", "author": "kim" }),
    )
    .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.text().await.unwrap(),
        "Successfully added new video, new video id is 1"
    );

    let videos = list(&client, &base).await;
    assert_eq!(
        videos,
        vec![Video {
            id: 1,
            title: "Bicycle kick".into(),
            description: "90th minute".into(),
            author: "kim".into(),
        }]
    );
}

#[tokio::test]
async fn list_without_trailing_slash() {
    let (base, store) = start_default().await;
    store.create(VideoInput::new("t", "d", "a")).unwrap();
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/videos")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let videos: Vec<Video> = resp.json().await.unwrap();
    assert_eq!(videos.len(), 1);
}

#[tokio::test]
async fn malformed_create_is_rejected_without_consuming_an_id() {
    let (base, store) = start_default().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/videos/"))
        .header("content-type", "application/json")
        .body("{\"title\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let text = resp.text().await.unwrap();
    assert!(text.starts_with("Bad request"), "{text}");
    assert!(text.ends_with("error in parsing data"), "{text}");
    assert_eq!(store.len().unwrap(), 0);

    let resp = create(&client, &base, json!({ "title": 5 })).await;
    assert_eq!(resp.status(), 400);
    assert_eq!(store.len().unwrap(), 0);

    let resp = create(&client, &base, json!({ "title": "ok" })).await;
    assert_eq!(
        resp.text().await.unwrap(),
        "Successfully added new video, new video id is 1"
    );
}

#[tokio::test]
async fn update_round_trip_keeps_position() {
    let (base, store) = start_default().await;
    for title in ["a", "b", "c"] {
        store.create(VideoInput::new(title, "d", "x")).unwrap();
    }
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/videos/2"))
        .json(&json!({ "id": 3, "title": "b2", "description": "d2", "author": "y" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.text().await.unwrap(),
        "video with id 2 has been updated to the db"
    );

    let videos = list(&client, &base).await;
    let ids: Vec<u64> = videos.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(videos[1].title, "b2");
    assert_eq!(videos[1].description, "d2");
    assert_eq!(videos[1].author, "y");
    assert_eq!(videos[2].title, "c");
}

#[tokio::test]
async fn update_unknown_id_returns_400() {
    let (base, store) = start_default().await;
    store.create(VideoInput::new("a", "b", "c")).unwrap();
    let before = store.list().unwrap();
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/videos/42"))
        .json(&json!({ "title": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.text().await.unwrap(),
        "bad request, cannot find video with id 42"
    );
    assert_eq!(store.list().unwrap(), before);
}

#[tokio::test]
async fn update_with_bad_input_returns_400() {
    let (base, store) = start_default().await;
    store.create(VideoInput::new("a", "b", "c")).unwrap();
    let before = store.list().unwrap();
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/videos/1"))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.text().await.unwrap(),
        "bad request, format does not match"
    );

    let resp = client
        .put(format!("{base}/videos/abc"))
        .json(&json!({ "title": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.text().await.unwrap(),
        "bad request, format does not match"
    );

    assert_eq!(store.list().unwrap(), before);
}

#[tokio::test]
async fn delete_removes_exactly_one() {
    let (base, store) = start_default().await;
    for title in ["a", "b", "c"] {
        store.create(VideoInput::new(title, "d", "x")).unwrap();
    }
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/videos/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.text().await.unwrap(),
        "video with id 2 has been removed from the db"
    );

    let ids: Vec<u64> = list(&client, &base).await.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn delete_unknown_or_malformed_id_returns_400() {
    let (base, store) = start_default().await;
    store.create(VideoInput::new("a", "b", "c")).unwrap();
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/videos/9"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.text().await.unwrap(),
        "Cannot find the video to delete, video id:9"
    );

    let resp = client
        .delete(format!("{base}/videos/-1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let text = resp.text().await.unwrap();
    assert!(
        text.starts_with("bad request, format does not match. ERROR:"),
        "{text}"
    );

    assert_eq!(store.len().unwrap(), 1);
}

#[tokio::test]
async fn concurrent_http_creates_get_distinct_ids() {
    let (base, store) = start_default().await;
    let client = reqwest::Client::new();

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let client = client.clone();
            let base = base.clone();
            tokio::spawn(async move {
                let resp = create(&client, &base, json!({ "title": format!("clip {i}") })).await;
                assert_eq!(resp.status(), 200);
                resp.text().await.unwrap()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        let text = task.await.unwrap();
        let id: u64 = text.rsplit(' ').next().unwrap().parse().unwrap();
        ids.push(id);
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
    assert_eq!(store.len().unwrap(), 20);
}

#[tokio::test]
async fn create_and_update_accept_body_without_content_type() {
    let (base, store) = start_default().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/videos/"))
        .body(r#"{"title":"t","description":"d","author":"a"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.text().await.unwrap(),
        "Successfully added new video, new video id is 1"
    );

    let resp = client
        .put(format!("{base}/videos/1"))
        .body(r#"{"title":"t2","description":"d2","author":"a2"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    assert_eq!(
        store.list().unwrap(),
        vec![Video {
            id: 1,
            title: "t2".into(),
            description: "d2".into(),
            author: "a2".into(),
        }]
    );
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let (base, _) = start_default().await;

    let resp = reqwest::get(format!("{base}/nowhere")).await.unwrap();
    assert_eq!(resp.status(), 404);
}
