/// Integration tests for the HTTP adapters against a mock server.
///
/// Covers the wire format of each collaborator:
/// - GitHub repository search (query string, headers, status mapping)
/// - OpenAI-compatible chat completion (body, auth, status mapping)
/// - Enhanced agent recommender (body, response parsing)
use mockito::{Matcher, Server};
use repo_advisor::adapters::{GitHubSearchClient, HttpEnhancedRecommender, OpenAiCompletionClient};
use repo_advisor::domain::errors::{AgentError, CompletionError, SearchError};
use repo_advisor::domain::models::{
    AgentConfig, CompletionConfig, GenerationParameters, PromptMessage, SearchConfig,
    UserPreferences,
};
use repo_advisor::domain::ports::{
    CompletionProvider, EnhancedRecommender, RepositorySearch, SearchOptions,
};
use serde_json::json;

fn search_body() -> String {
    json!({
        "total_count": 2,
        "incomplete_results": false,
        "items": [
            {
                "id": 1,
                "full_name": "pmndrs/zustand",
                "description": "Bear necessities for state management",
                "stargazers_count": 500,
                "html_url": "https://github.com/pmndrs/zustand",
                "language": "TypeScript"
            },
            {
                "id": 2,
                "full_name": "reduxjs/redux",
                "description": null,
                "stargazers_count": 300,
                "html_url": "https://github.com/reduxjs/redux",
                "language": "TypeScript"
            }
        ]
    })
    .to_string()
}

fn search_client(base_url: String, token: Option<&str>) -> GitHubSearchClient {
    GitHubSearchClient::new(&SearchConfig {
        base_url,
        token: token.map(str::to_string),
        timeout_secs: 5,
    })
    .expect("Failed to create search client")
}

fn completion_client(base_url: String, api_key: Option<&str>) -> OpenAiCompletionClient {
    OpenAiCompletionClient::new(CompletionConfig {
        base_url,
        api_key: api_key.map(str::to_string),
        model: "gpt-4o-mini".to_string(),
        timeout_secs: 5,
    })
    .expect("Failed to create completion client")
}

#[tokio::test]
async fn test_github_search_sends_popular_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "react state management language:typescript".into()),
            Matcher::UrlEncoded("sort".into(), "stars".into()),
            Matcher::UrlEncoded("order".into(), "desc".into()),
            Matcher::UrlEncoded("per_page".into(), "10".into()),
        ]))
        .match_header("accept", "application/vnd.github+json")
        .match_header("authorization", "Bearer ghp_test")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(search_body())
        .create_async()
        .await;

    let client = search_client(server.url(), Some("ghp_test"));
    let options = SearchOptions::popular(Some("typescript".to_string()));
    let candidates = client
        .search_repos("react state management", &options)
        .await
        .expect("search failed");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].full_name, "pmndrs/zustand");
    assert_eq!(candidates[0].stars, 500);
    assert_eq!(candidates[1].description, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_github_search_without_token_sends_no_auth() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::Any)
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(json!({"total_count": 0, "incomplete_results": false, "items": []}).to_string())
        .create_async()
        .await;

    let client = search_client(server.url(), None);
    let candidates = client
        .search_repos("anything", &SearchOptions::popular(None))
        .await
        .unwrap();

    assert!(candidates.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_github_search_error_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("API rate limit exceeded")
        .create_async()
        .await;

    let client = search_client(server.url(), None);
    let err = client
        .search_repos("x", &SearchOptions::popular(None))
        .await
        .unwrap_err();

    match err {
        SearchError::Http { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert!(body.contains("rate limit"));
        }
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_github_search_malformed_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search/repositories")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let client = search_client(server.url(), None);
    let err = client
        .search_repos("x", &SearchOptions::popular(None))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_completion_request_and_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "temperature": 0.7,
            "max_tokens": 1000,
            "messages": [
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "hello"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-1",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "[{\"name\":\"a/b\"}]"},
                    "finish_reason": "stop"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = completion_client(format!("{}/v1", server.url()), Some("sk-test"));
    let text = client
        .complete(
            &[PromptMessage::system("be brief"), PromptMessage::user("hello")],
            GenerationParameters::RECOMMENDATION,
        )
        .await
        .expect("completion failed");

    assert_eq!(text, "[{\"name\":\"a/b\"}]");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_completion_status_mapping() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body("slow down")
        .create_async()
        .await;

    let client = completion_client(server.url(), Some("sk-test"));
    let err = client
        .complete(&[PromptMessage::user("hi")], GenerationParameters::RECOMMENDATION)
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::RateLimitExceeded));
}

#[tokio::test]
async fn test_completion_without_choices_is_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(json!({"choices": []}).to_string())
        .create_async()
        .await;

    let client = completion_client(server.url(), Some("sk-test"));
    let err = client
        .complete(&[PromptMessage::user("hi")], GenerationParameters::RECOMMENDATION)
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_completion_without_key_never_hits_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let client = completion_client(server.url(), None);
    assert!(!client.is_configured());
    let err = client
        .complete(&[PromptMessage::user("hi")], GenerationParameters::RECOMMENDATION)
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::NotConfigured));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_agent_posts_query_and_preferences() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/recommendations")
        .match_header("authorization", "Bearer agent-key")
        .match_body(Matcher::PartialJson(json!({
            "query": "react state management",
            "preferences": {"techStack": ["typescript"]}
        })))
        .with_status(200)
        .with_body(
            json!({
                "recommendations": [
                    {"name": "pmndrs/zustand", "description": "Bears", "reason": "tiny API"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let agent = HttpEnhancedRecommender::new(&AgentConfig {
        base_url: Some(format!("{}/", server.url())),
        api_key: Some("agent-key".to_string()),
        timeout_secs: 5,
    })
    .unwrap();
    assert!(agent.is_configured());

    let prefs = UserPreferences::new().with_tech_stack(["typescript"]);
    let response = agent
        .get_recommendations("react state management", Some(&prefs))
        .await
        .expect("agent call failed");

    assert_eq!(response.recommendations.len(), 1);
    assert_eq!(response.recommendations[0].reason, "tiny API");
    assert!(response.recommendations[0].url.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_agent_error_status() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/recommendations")
        .with_status(500)
        .with_body("agent crashed")
        .create_async()
        .await;

    let agent = HttpEnhancedRecommender::new(&AgentConfig {
        base_url: Some(server.url()),
        api_key: None,
        timeout_secs: 5,
    })
    .unwrap();
    let err = agent.get_recommendations("x", None).await.unwrap_err();
    assert!(matches!(err, AgentError::Http { .. }));
}
