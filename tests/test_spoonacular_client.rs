use mockito::Matcher;
use recipe_dashboard::{
    DashboardConfig, DashboardSession, FetchError, RecipeSource, SpoonacularClient,
    FETCH_FAILED_MESSAGE,
};

const PASTA_RESULTS: &str = r#"
{
    "results": [
        {"id": 1, "title": "Italian Pasta", "image": "https://img.example/1.jpg", "imageType": "jpg"},
        {"id": 2, "title": "Asian Noodles", "image": "https://img.example/2.jpg", "imageType": "jpg"}
    ],
    "offset": 0,
    "number": 20,
    "totalResults": 2
}
"#;

fn config_for(server: &mockito::Server, api_key: Option<&str>) -> DashboardConfig {
    DashboardConfig {
        base_url: server.url(),
        api_key: api_key.map(str::to_string),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_search_sends_query_page_size_and_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "pasta".into()),
            Matcher::UrlEncoded("number".into(), "20".into()),
            Matcher::UrlEncoded("apiKey".into(), "test-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PASTA_RESULTS)
        .create_async()
        .await;

    let client = SpoonacularClient::new(&config_for(&server, Some("test-key"))).unwrap();
    let recipes = client.search("pasta").await.unwrap();

    mock.assert_async().await;
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].title, "Italian Pasta");
    assert_eq!(recipes[1].id, 2);
}

#[tokio::test]
async fn test_search_without_key_omits_parameter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Exact("query=curry&number=20".into()))
        .with_status(200)
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let client = SpoonacularClient::new(&config_for(&server, None)).unwrap();
    let recipes = client.search("curry").await.unwrap();

    mock.assert_async().await;
    assert!(recipes.is_empty());
}

#[tokio::test]
async fn test_error_status_is_a_fetch_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(402)
        .with_body(r#"{"status": "failure", "code": 402, "message": "Your daily points limit has been reached."}"#)
        .create_async()
        .await;

    let client = SpoonacularClient::new(&config_for(&server, Some("k"))).unwrap();
    match client.search("pasta").await {
        Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 402),
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unexpected_shape_is_a_fetch_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"recipes": [{"id": 1, "title": "Italian Pasta"}]}"#)
        .create_async()
        .await;

    let client = SpoonacularClient::new(&config_for(&server, Some("k"))).unwrap();
    let err = client.search("pasta").await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
    assert_eq!(err.user_message(), FETCH_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_recipe_information_lookup() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/716429/information")
        .match_query(Matcher::UrlEncoded("apiKey".into(), "k".into()))
        .with_status(200)
        .with_body(
            r#"{
                "id": 716429,
                "title": "Pasta with Garlic, Scallions, Cauliflower & Breadcrumbs",
                "readyInMinutes": 45,
                "servings": 2,
                "sourceUrl": "https://example.com/pasta",
                "cuisines": [],
                "summary": "A quick pasta."
            }"#,
        )
        .create_async()
        .await;

    let client = SpoonacularClient::new(&config_for(&server, Some("k"))).unwrap();
    let detail = client.recipe_by_id(716429).await.unwrap();

    assert_eq!(detail.ready_in_minutes, Some(45));
    assert_eq!(detail.servings, Some(2));
    assert_eq!(detail.summary.as_deref(), Some("A quick pasta."));
}

#[tokio::test]
async fn test_session_initial_load_uses_fallback_term() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::UrlEncoded("query".into(), "pasta".into()))
        .with_status(200)
        .with_body(PASTA_RESULTS)
        .expect(1)
        .create_async()
        .await;

    let mut session = DashboardSession::builder()
        .config(config_for(&server, Some("k")))
        .build()
        .unwrap();
    session.start();
    session.settle().await;

    mock.assert_async().await;
    let view = session.view();
    assert_eq!(view.total_recipes, 2);
    assert_eq!(view.error, None);
    let counts: Vec<_> = view.cuisine_counts.iter().map(|c| (c.name, c.value)).collect();
    assert_eq!(
        counts,
        vec![("Italian", 1), ("Asian", 1), ("Mexican", 0), ("American", 0)]
    );
}

#[tokio::test]
async fn test_session_failure_on_first_load_shows_message() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let mut session = DashboardSession::builder()
        .config(config_for(&server, Some("k")))
        .build()
        .unwrap();
    session.start();
    session.settle().await;

    let view = session.view();
    assert_eq!(view.error, Some(FETCH_FAILED_MESSAGE));
    assert!(view.displayed.is_empty());
}
