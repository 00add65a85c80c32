//! API integration tests against a running server and database

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

async fn list(client: &Client, resource: &str) -> Vec<Value> {
    let response = client
        .get(format!("{}/{}", BASE_URL, resource))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"].as_array().expect("No data array").clone()
}

fn book(id: &str, name: &str, price: f64) -> Value {
    json!({
        "book_id": id,
        "book_name": name,
        "book_author": "Y",
        "book_isbn": "Z",
        "book_publisher": "P",
        "book_price": price
    })
}

async fn create_book(client: &Client, payload: &Value) -> StatusCode {
    client
        .post(format!("{}/books", BASE_URL))
        .json(payload)
        .send()
        .await
        .expect("Failed to send request")
        .status()
}

fn reader(id: &str, name: &str) -> Value {
    json!({
        "reader_id": id,
        "reader_name": name,
        "reader_sex": "F",
        "reader_department": "Maths"
    })
}

async fn create_reader(client: &Client, id: &str, name: &str) -> StatusCode {
    client
        .post(format!("{}/readers", BASE_URL))
        .json(&reader(id, name))
        .send()
        .await
        .expect("Failed to send request")
        .status()
}

async fn delete(client: &Client, path: &str) -> StatusCode {
    client
        .delete(format!("{}/{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request")
        .status()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_book_lifecycle() {
    let client = Client::new();
    let _ = delete(&client, "books/IT-B1").await;

    assert_eq!(create_book(&client, &book("IT-B1", "X", 9.99)).await, StatusCode::CREATED);

    let books = list(&client, "books").await;
    let matching: Vec<_> = books.iter().filter(|b| b["book_id"] == "IT-B1").collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0]["book_name"], "X");
    assert_eq!(matching[0]["book_price"].as_f64(), Some(9.99));
    assert_eq!(matching[0]["interview_times"], 0);

    assert_eq!(delete(&client, "books/IT-B1").await, StatusCode::OK);

    let books = list(&client, "books").await;
    assert!(books.iter().all(|b| b["book_id"] != "IT-B1"));
}

#[tokio::test]
#[ignore]
async fn test_duplicate_book_is_conflict() {
    let client = Client::new();
    let _ = delete(&client, "books/IT-DUP").await;

    assert_eq!(create_book(&client, &book("IT-DUP", "First", 5.0)).await, StatusCode::CREATED);

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&book("IT-DUP", "Second", 6.0))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], "DUPLICATE_KEY");

    let books = list(&client, "books").await;
    let stored = books.iter().find(|b| b["book_id"] == "IT-DUP").expect("book missing");
    assert_eq!(stored["book_name"], "First");

    delete(&client, "books/IT-DUP").await;
}

#[tokio::test]
#[ignore]
async fn test_update_and_delete_missing_book() {
    let client = Client::new();

    let response = client
        .put(format!("{}/books/IT-NOPE", BASE_URL))
        .json(&json!({
            "book_name": "X",
            "book_author": "Y",
            "book_isbn": "Z",
            "book_publisher": "P",
            "book_price": 1.0
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(delete(&client, "books/IT-NOPE").await, StatusCode::NOT_FOUND);
    let books = list(&client, "books").await;
    assert!(books.iter().all(|b| b["book_id"] != "IT-NOPE"));
}

#[tokio::test]
#[ignore]
async fn test_failed_update_leaves_store_unchanged() {
    let client = Client::new();
    let _ = delete(&client, "books/IT-KEEP").await;
    assert_eq!(create_book(&client, &book("IT-KEEP", "Kept", 7.5)).await, StatusCode::CREATED);

    let response = client
        .put(format!("{}/books/IT-GONE", BASE_URL))
        .json(&json!({
            "book_name": "Changed",
            "book_author": "Y",
            "book_isbn": "Z",
            "book_publisher": "P",
            "book_price": 1.0
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let after = list(&client, "books").await;
    assert!(after.iter().all(|b| b["book_id"] != "IT-GONE"));
    let kept = after.iter().find(|b| b["book_id"] == "IT-KEEP").expect("book missing");
    assert_eq!(kept["book_name"], "Kept");
    assert_eq!(kept["book_price"].as_f64(), Some(7.5));

    delete(&client, "books/IT-KEEP").await;
}

#[tokio::test]
#[ignore]
async fn test_duplicate_reader_is_conflict() {
    let client = Client::new();
    let _ = delete(&client, "readers/IT-RDUP").await;

    assert_eq!(create_reader(&client, "IT-RDUP", "First").await, StatusCode::CREATED);

    let response = client
        .post(format!("{}/readers", BASE_URL))
        .json(&reader("IT-RDUP", "Second"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], "DUPLICATE_KEY");

    let readers = list(&client, "readers").await;
    let stored = readers.iter().find(|r| r["reader_id"] == "IT-RDUP").expect("reader missing");
    assert_eq!(stored["reader_name"], "First");

    delete(&client, "readers/IT-RDUP").await;
}

#[tokio::test]
#[ignore]
async fn test_update_and_delete_missing_reader() {
    let client = Client::new();

    let response = client
        .put(format!("{}/readers/IT-RNOPE", BASE_URL))
        .json(&json!({
            "reader_name": "Nobody",
            "reader_sex": "F",
            "reader_department": "None"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], "NOT_FOUND");

    assert_eq!(delete(&client, "readers/IT-RNOPE").await, StatusCode::NOT_FOUND);
    let readers = list(&client, "readers").await;
    assert!(readers.iter().all(|r| r["reader_id"] != "IT-RNOPE"));
}

#[tokio::test]
#[ignore]
async fn test_update_missing_record() {
    let client = Client::new();

    let response = client
        .put(format!("{}/records/IT-NOBOOK/IT-NOREADER", BASE_URL))
        .json(&json!({ "notes": "late" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
#[ignore]
async fn test_referenced_rows_cannot_be_deleted() {
    let client = Client::new();
    let _ = delete(&client, "records/IT-FB/IT-FR").await;
    let _ = delete(&client, "books/IT-FB").await;
    let _ = delete(&client, "readers/IT-FR").await;

    assert_eq!(create_book(&client, &book("IT-FB", "Held", 4.0)).await, StatusCode::CREATED);
    assert_eq!(create_reader(&client, "IT-FR", "Holder").await, StatusCode::CREATED);
    let response = client
        .post(format!("{}/records", BASE_URL))
        .json(&json!({ "book_id": "IT-FB", "reader_id": "IT-FR" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    for path in ["books/IT-FB", "readers/IT-FR"] {
        let response = client
            .delete(format!("{}/{}", BASE_URL, path))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", path);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    let books = list(&client, "books").await;
    assert!(books.iter().any(|b| b["book_id"] == "IT-FB"));
    let readers = list(&client, "readers").await;
    assert!(readers.iter().any(|r| r["reader_id"] == "IT-FR"));

    assert_eq!(delete(&client, "records/IT-FB/IT-FR").await, StatusCode::OK);
    assert_eq!(delete(&client, "books/IT-FB").await, StatusCode::OK);
    assert_eq!(delete(&client, "readers/IT-FR").await, StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_search_by_title_and_price() {
    let client = Client::new();
    for id in ["IT-S1", "IT-S2", "IT-S3"] {
        let _ = delete(&client, &format!("books/{}", id)).await;
    }
    create_book(&client, &book("IT-S1", "Atlas of Rivers", 15.0)).await;
    create_book(&client, &book("IT-S2", "Field Guide", 12.0)).await;
    create_book(&client, &book("IT-S3", "Atlas of Stars", 25.0)).await;

    let body: Value = client
        .get(format!("{}/books/search", BASE_URL))
        .query(&[("keyword", "Atlas"), ("search_by", "title")])
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|b| b["book_name"].as_str())
        .collect();
    assert!(names.iter().all(|n| n.contains("Atlas")));
    assert!(names.contains(&"Atlas of Rivers"));
    assert_eq!(body["search_by"], "title");

    let body: Value = client
        .get(format!("{}/books/search", BASE_URL))
        .query(&[("min_price", "10"), ("max_price", "20")])
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let in_range = body["data"].as_array().unwrap();
    for b in in_range {
        let price = b["book_price"].as_f64().unwrap();
        assert!((10.0..=20.0).contains(&price));
    }
    let ids: Vec<&str> = in_range.iter().filter_map(|b| b["book_id"].as_str()).collect();
    assert!(ids.contains(&"IT-S1"));
    assert!(ids.contains(&"IT-S2"));
    assert!(!ids.contains(&"IT-S3"));

    // An unparsable bound is ignored rather than rejected
    let response = client
        .get(format!("{}/books/search", BASE_URL))
        .query(&[("min_price", "abc")])
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["min_price"], "abc");
    assert_eq!(body["total"].as_u64().unwrap() as usize, body["data"].as_array().unwrap().len());

    for id in ["IT-S1", "IT-S2", "IT-S3"] {
        delete(&client, &format!("books/{}", id)).await;
    }
}

#[tokio::test]
#[ignore]
async fn test_record_composite_key() {
    let client = Client::new();
    let _ = delete(&client, "records/IT-RB/IT-RR").await;
    let _ = delete(&client, "books/IT-RB").await;
    let _ = delete(&client, "readers/IT-RR").await;

    create_book(&client, &book("IT-RB", "Loaned", 3.0)).await;
    let response = client
        .post(format!("{}/readers", BASE_URL))
        .json(&json!({
            "reader_id": "IT-RR",
            "reader_name": "Ada",
            "reader_sex": "F",
            "reader_department": "Maths"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let record = json!({ "book_id": "IT-RB", "reader_id": "IT-RR", "borrow_date": "2024-03-01" });
    let first = client
        .post(format!("{}/records", BASE_URL))
        .json(&record)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = client
        .post(format!("{}/records", BASE_URL))
        .json(&record)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let response = client
        .put(format!("{}/records/IT-RB/IT-RR", BASE_URL))
        .json(&json!({ "return_date": "2024-03-15" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let records = list(&client, "records").await;
    let stored = records
        .iter()
        .find(|r| r["book_id"] == "IT-RB" && r["reader_id"] == "IT-RR")
        .expect("record missing");
    assert_eq!(stored["borrow_date"], "2024-03-01");
    assert_eq!(stored["return_date"], "2024-03-15");

    assert_eq!(delete(&client, "records/IT-RB/IT-RR").await, StatusCode::OK);
    assert_eq!(delete(&client, "records/IT-RB/IT-RR").await, StatusCode::NOT_FOUND);
    delete(&client, "books/IT-RB").await;
    delete(&client, "readers/IT-RR").await;
}
