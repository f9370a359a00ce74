mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

const UNKNOWN: &str = "6f1c0c2e-2b6f-4d0f-9a51-1f3f3c1f0a11";

async fn setup() -> (TestServer, String, String) {
    let server = common::create_test_server();
    let airline_id = common::create(&server, "/airlines", common::acme_air()).await;
    let airport_id = common::create(&server, "/airports", common::el_dorado()).await;
    (server, airline_id, airport_id)
}

#[tokio::test]
async fn test_add_airport_returns_airline_with_airport() {
    let (server, airline_id, airport_id) = setup().await;

    let response = server
        .post(&format!("/airlines/{airline_id}/airports/{airport_id}"))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["id"], airline_id.as_str());
    assert_eq!(body["airports"][0]["id"], airport_id.as_str());
    assert_eq!(body["airports"][0]["code"], "BOG");
}

#[tokio::test]
async fn test_add_airport_twice_is_idempotent() {
    let (server, airline_id, airport_id) = setup().await;
    let path = format!("/airlines/{airline_id}/airports/{airport_id}");

    server.post(&path).await.assert_status(StatusCode::CREATED);
    let response = server.post(&path).await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>()["airports"].as_array().unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_add_unknown_airport_is_not_found() {
    let (server, airline_id, _) = setup().await;

    let response = server
        .post(&format!("/airlines/{airline_id}/airports/{UNKNOWN}"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "The airport with the given id was not found"
    );
}

#[tokio::test]
async fn test_add_to_unknown_airline_is_not_found() {
    let (server, _, airport_id) = setup().await;

    let response = server
        .post(&format!("/airlines/{UNKNOWN}/airports/{airport_id}"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "The airline with the given id was not found"
    );
}

#[tokio::test]
async fn test_get_linked_airport() {
    let (server, airline_id, airport_id) = setup().await;
    let path = format!("/airlines/{airline_id}/airports/{airport_id}");

    let before = server.get(&path).await;
    before.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        before.json::<Value>()["error"]["message"],
        "The airport with the given id is not associated to the airline"
    );

    server.post(&path).await.assert_status(StatusCode::CREATED);

    let after = server.get(&path).await;
    after.assert_status_ok();
    assert_eq!(after.json::<Value>()["id"], airport_id.as_str());
}

#[tokio::test]
async fn test_list_linked_airports() {
    let (server, airline_id, airport_id) = setup().await;
    let list_path = format!("/airlines/{airline_id}/airports");

    let empty = server.get(&list_path).await;
    empty.assert_status_ok();
    assert_eq!(empty.json::<Value>(), json!([]));

    server
        .post(&format!("{list_path}/{airport_id}"))
        .await
        .assert_status(StatusCode::CREATED);

    let list = server.get(&list_path).await.json::<Vec<Value>>();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["code"], "BOG");
}

#[tokio::test]
async fn test_replace_airports_collapses_duplicates() {
    let (server, airline_id, bog) = setup().await;
    let mut jfk = common::el_dorado();
    jfk["code"] = json!("JFK");
    jfk["name"] = json!("John F. Kennedy");
    let jfk = common::create(&server, "/airports", jfk).await;

    let response = server
        .put(&format!("/airlines/{airline_id}/airports"))
        .json(&json!([{ "id": bog }, { "id": jfk }, { "id": bog }]))
        .await;

    response.assert_status_ok();
    let airports = response.json::<Value>()["airports"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(airports.len(), 2);

    let cleared = server
        .put(&format!("/airlines/{airline_id}/airports"))
        .json(&json!([]))
        .await;
    cleared.assert_status_ok();
    assert_eq!(cleared.json::<Value>()["airports"], json!([]));
}

#[tokio::test]
async fn test_replace_with_unknown_airport_changes_nothing() {
    let (server, airline_id, airport_id) = setup().await;
    server
        .post(&format!("/airlines/{airline_id}/airports/{airport_id}"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .put(&format!("/airlines/{airline_id}/airports"))
        .json(&json!([{ "id": UNKNOWN }]))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let list = server
        .get(&format!("/airlines/{airline_id}/airports"))
        .await
        .json::<Vec<Value>>();
    assert_eq!(list.len(), 1);
}

#[tokio::test]
async fn test_remove_link_keeps_both_entities() {
    let (server, airline_id, airport_id) = setup().await;
    let path = format!("/airlines/{airline_id}/airports/{airport_id}");
    server.post(&path).await.assert_status(StatusCode::CREATED);

    server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/airlines/{airline_id}"))
        .await
        .assert_status_ok();
    server
        .get(&format!("/airports/{airport_id}"))
        .await
        .assert_status_ok();

    let again = server.delete(&path).await;
    again.assert_status(StatusCode::PRECONDITION_FAILED);
    assert_eq!(
        again.json::<Value>()["error"]["message"],
        "The airport with the given id is not associated to the airline"
    );
}

#[tokio::test]
async fn test_delete_airline_removes_links_not_airports() {
    let (server, airline_id, airport_id) = setup().await;
    server
        .post(&format!("/airlines/{airline_id}/airports/{airport_id}"))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete(&format!("/airlines/{airline_id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let airport = server.get(&format!("/airports/{airport_id}")).await;
    airport.assert_status_ok();
    assert_eq!(airport.json::<Value>()["airlines"], json!([]));
}

#[tokio::test]
async fn test_replace_with_object_body_is_bad_request() {
    let (server, airline_id, airport_id) = setup().await;

    let response = server
        .put(&format!("/airlines/{airline_id}/airports"))
        .json(&json!({ "id": airport_id }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}
