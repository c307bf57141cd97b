use fittrack_client::{create, Client, Error};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EXERCISE_BODY: &str = r#"[{
    "name": "Incline Hammer Curls",
    "type": "strength",
    "muscle": "biceps",
    "equipment": "dumbbell",
    "difficulty": "beginner",
    "instructions": "Seat yourself on an incline bench."
}]"#;

const NUTRITION_BODY: &str = r#"[{
    "name": "banana",
    "calories": 89.0,
    "serving_size_g": 100.0,
    "fat_total_g": 0.3,
    "fat_saturated_g": 0.1,
    "protein_g": 1.1,
    "sodium_mg": 1.0,
    "potassium_mg": 358.0,
    "cholesterol_mg": 0.0,
    "carbohydrates_total_g": 22.8,
    "fiber_g": 2.6,
    "sugar_g": 12.2
}]"#;

#[tokio::test]
async fn search_exercises_sends_key_and_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/exercises"))
        .and(query_param("muscle", "biceps"))
        .and(header("X-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(EXERCISE_BODY, "application/json"))
        .mount(&server)
        .await;

    let client = create(server.uri(), "test-key".to_string());
    let exercises = client.search_exercises("biceps").await.unwrap();

    assert_eq!(exercises.len(), 1);
    assert_eq!(exercises[0].name, "Incline Hammer Curls");
    assert_eq!(exercises[0].exercise_type, "strength");
}

#[tokio::test]
async fn lookup_nutrition_sends_query_and_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/nutrition"))
        .and(query_param("query", "banana"))
        .and(header("X-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(NUTRITION_BODY, "application/json"))
        .mount(&server)
        .await;

    let client = create(server.uri(), "test-key".to_string());
    let items = client.lookup_nutrition("banana").await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "banana");
    assert_eq!(items[0].calories, 89.0);
}

#[tokio::test]
async fn client_error_status_maps_to_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/exercises"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let client = create(server.uri(), "test-key".to_string());
    let err = client.search_exercises("biceps").await.unwrap_err();
    assert!(matches!(err, Error::RequestError));
}

#[tokio::test]
async fn server_error_status_maps_to_internal_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/nutrition"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = create(server.uri(), "test-key".to_string());
    let err = client.lookup_nutrition("banana").await.unwrap_err();
    assert!(matches!(err, Error::InternalServerError));
}

#[tokio::test]
async fn undecodable_body_maps_to_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/exercises"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let client = create(server.uri(), "test-key".to_string());
    let err = client.search_exercises("biceps").await.unwrap_err();
    assert!(matches!(err, Error::ResponseError));
}

#[tokio::test]
async fn unreachable_upstream_maps_to_communication_error() {
    // A bespoke (non-pooled) server actually closes its socket on drop;
    // `MockServer::start()` returns a pooled server that keeps listening.
    let server = MockServer::builder().start().await;
    let url = server.uri();
    drop(server);

    let client = create(url, "test-key".to_string());
    let err = client.lookup_nutrition("banana").await.unwrap_err();
    assert!(matches!(err, Error::CommunicationError));
}
