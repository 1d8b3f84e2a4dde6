//! Integration tests for the hotel endpoints and their role gates.

use http::StatusCode;

use crate::helpers::{TestApp, address_json, hotel_json};

#[tokio::test]
async fn test_admin_scenario_register_login_delete() {
    let app = TestApp::new();
    let token = app.token_for("alice", "secret1", "ADMIN").await;
    let id = app.create_hotel(&token, "Grand", 5, "Lisbon").await;

    let deleted = app
        .request("DELETE", &format!("/api/hotels/delete/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let again = app
        .request("DELETE", &format!("/api/hotels/delete/{id}"), None, Some(&token))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_cannot_delete() {
    let app = TestApp::new();
    let token = app.token_for("dave", "secret1", "USER").await;
    let id = app.create_hotel(&token, "Grand", 5, "Lisbon").await;

    let response = app
        .request("DELETE", &format!("/api/hotels/delete/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");

    // The hotel is still there.
    let listed = app.request("GET", "/api/hotels", None, Some(&token)).await;
    assert_eq!(listed.body["totalElements"], 1);
}

#[tokio::test]
async fn test_delete_requires_authentication() {
    let app = TestApp::new();
    let response = app.request("DELETE", "/api/hotels/delete/1", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_returns_hotel() {
    let app = TestApp::new();
    let token = app.token_for("alice", "secret1", "USER").await;

    let response = app
        .request("POST", "/api/hotels", Some(hotel_json("Grand", 4, "Lisbon")), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Grand");
    assert_eq!(response.body["category"], 4);
    assert_eq!(response.body["address"]["zipCode"], "1000-001");
    assert!(response.body["id"].as_i64().is_some());
}

#[tokio::test]
async fn test_create_validates_body() {
    let app = TestApp::new();
    let token = app.token_for("alice", "secret1", "USER").await;

    for body in [
        hotel_json("", 4, "Lisbon"),
        hotel_json("Grand", 0, "Lisbon"),
        hotel_json("Grand", 6, "Lisbon"),
        hotel_json("Grand", 3, " "),
    ] {
        let response = app
            .request("POST", "/api/hotels", Some(body.clone()), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{body}");
    }
}

#[tokio::test]
async fn test_list_pages_sorts_and_filters() {
    let app = TestApp::new();
    let token = app.token_for("alice", "secret1", "USER").await;
    for (name, category, city) in [
        ("Alpha", 3, "Lisbon"),
        ("Bravo", 5, "Porto"),
        ("Charlie", 1, "lisbon"),
        ("Delta", 4, "Madrid"),
    ] {
        app.create_hotel(&token, name, category, city).await;
    }

    let first = app
        .request("GET", "/api/hotels?page=0&size=2", None, Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["totalElements"], 4);
    assert_eq!(first.body["totalPages"], 2);
    assert_eq!(first.body["number"], 0);
    assert_eq!(first.body["size"], 2);
    assert_eq!(first.body["content"].as_array().unwrap().len(), 2);
    assert_eq!(first.body["content"][0]["name"], "Alpha");

    let by_category = app
        .request(
            "GET",
            "/api/hotels?sortBy=category&sortDir=desc",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(by_category.body["content"][0]["name"], "Bravo");

    let lisbon = app
        .request("GET", "/api/hotels?city=LISB", None, Some(&token))
        .await;
    assert_eq!(lisbon.body["totalElements"], 2);

    let bad_sort = app
        .request("GET", "/api/hotels?sortBy=password", None, Some(&token))
        .await;
    assert_eq!(bad_sort.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_address() {
    let app = TestApp::new();
    let token = app.token_for("alice", "secret1", "USER").await;
    let id = app.create_hotel(&token, "Grand", 4, "Lisbon").await;

    let updated = app
        .request(
            "PUT",
            &format!("/api/hotels/updateAddress/{id}"),
            Some(address_json("Porto")),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["address"]["city"], "Porto");
    assert_eq!(updated.body["name"], "Grand");

    let missing = app
        .request(
            "PUT",
            "/api/hotels/updateAddress/9999",
            Some(address_json("Porto")),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let invalid = app
        .request(
            "PUT",
            &format!("/api/hotels/updateAddress/{id}"),
            Some(address_json("")),
            Some(&token),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = TestApp::new();
    let token = app.token_for("alice", "secret1", "ADMIN").await;
    let response = app
        .request("DELETE", "/api/hotels/delete/abc", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
