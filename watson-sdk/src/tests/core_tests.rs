//! Tests for core abstractions
//!
//! These tests verify request construction, the shared request pipeline and
//! the response envelope.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use reqwest::header::HeaderMap;
    use reqwest::Method;
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use crate::config::WatsonConfig;
    use crate::core::request::{render_url, require_non_empty};
    use crate::core::{
        BaseService, ClientBuilder, DetailedResponse, FileUpload, MultipartField, RequestBody, RequestExecutor,
        ServiceRequest,
    };
    use crate::error::ServiceError;
    use crate::services::UserAgent;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        name: String,
    }

    fn header_of(request: &Request, name: &str) -> Option<String> {
        request
            .headers
            .iter()
            .find(|(key, _)| key.as_str().eq_ignore_ascii_case(name))
            .map(|(_, values)| values.last().as_str().to_string())
    }

    fn basic_config(url: &str) -> WatsonConfig {
        WatsonConfig::new("test_service", url).basic_auth("user", "pass")
    }

    fn versioned_service(url: &str) -> BaseService {
        BaseService::new(basic_config(url).version("2018-09-20"), true).unwrap()
    }

    #[test]
    fn test_render_url_encodes_each_parameter_as_one_segment() {
        let url = render_url(
            "https://example.com/api",
            "/v1/workspaces/{workspace_id}/intents/{intent}",
            &[("workspace_id", "ws 1"), ("intent", "a/b?c")],
        )
        .unwrap();

        assert_eq!(url.as_str(), "https://example.com/api/v1/workspaces/ws%201/intents/a%2Fb%3Fc");
    }

    #[test]
    fn test_render_url_handles_trailing_slash_on_base() {
        let url = render_url("https://example.com/api/", "/v1/models", &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v1/models");
    }

    #[test]
    fn test_render_url_missing_parameter() {
        let missing = render_url("https://example.com/api", "/v1/models/{model_id}", &[]);
        assert!(matches!(missing, Err(ServiceError::Validation(ref m)) if m == "model_id must be provided"));

        let empty = render_url("https://example.com/api", "/v1/models/{model_id}", &[("model_id", "")]);
        assert!(matches!(empty, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn test_render_url_invalid_base() {
        let result = render_url("not a url", "/v1/models", &[]);
        assert!(matches!(result, Err(ServiceError::Configuration(_))));
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("customer_id", "abc").is_ok());
        assert!(require_non_empty("customer_id", "  ").is_err());
    }

    #[test]
    fn test_service_request_builders() {
        let url = render_url("https://example.com/api", "/v1/recognize", &[]).unwrap();
        let mut per_call = HashMap::new();
        per_call.insert("accept".to_string(), "audio/wav".to_string());

        let request = ServiceRequest::new(Method::POST, url)
            .query("model", "en-US_BroadbandModel")
            .query_opt::<bool>("timestamps", None)
            .query_opt("word_confidence", Some(true))
            .query_list("keywords", Some(&vec!["colorado".to_string(), "tornado".to_string()]))
            .query_list("empty", Some(&Vec::new()))
            .accept("application/json")
            .headers(&per_call)
            .header_opt("X-Missing", None)
            .binary("audio/flac", vec![1, 2, 3]);

        let pairs: Vec<(&str, &str)> = request
            .query_pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("model", "en-US_BroadbandModel"),
                ("word_confidence", "true"),
                ("keywords", "colorado,tornado"),
            ]
        );

        // per-call headers replace operation headers regardless of case
        assert_eq!(request.header_value("Accept"), Some("audio/wav"));
        assert!(request.header_value("X-Missing").is_none());
        assert!(matches!(
            request.body(),
            RequestBody::Binary { content_type, data } if content_type == "audio/flac" && data == &vec![1, 2, 3]
        ));
    }

    #[test]
    fn test_json_body_serializes() {
        let url = render_url("https://example.com/api", "/v1/analyze", &[]).unwrap();
        let request = ServiceRequest::new(Method::POST, url)
            .json(&json!({"text": "hello"}))
            .unwrap();

        match request.body() {
            RequestBody::Json(bytes) => assert_eq!(bytes.as_slice(), br#"{"text":"hello"}"#),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_versioned_request_carries_version() {
        let service = versioned_service("https://example.com/api");
        let request = service.request(Method::GET, "/v1/workspaces", &[]).unwrap();

        assert_eq!(request.url().path(), "/api/v1/workspaces");
        assert_eq!(request.query_pairs(), &[("version".to_string(), "2018-09-20".to_string())]);
    }

    #[test]
    fn test_unversioned_request_has_no_version() {
        let service = BaseService::new(basic_config("https://example.com/api").version("ignored"), false).unwrap();
        let request = service.request(Method::GET, "/v1/voices", &[]).unwrap();

        assert!(request.query_pairs().is_empty());
        assert!(!service.is_versioned());
    }

    #[test]
    fn test_versioned_service_requires_version() {
        let result = BaseService::new(basic_config("https://example.com/api"), true);
        assert!(matches!(result, Err(ServiceError::Configuration(_))));

        let blank = BaseService::new(basic_config("https://example.com/api").version(" "), true);
        assert!(blank.is_err());
    }

    #[test]
    fn test_empty_apikey_is_not_usable_credentials() {
        let config = WatsonConfig::new("test_service", "https://example.com/api")
            .version("2018-09-20")
            .iam_api_key("");

        let result = BaseService::new(config, true);
        assert!(matches!(result, Err(ServiceError::Configuration(_))));
    }

    #[test]
    fn test_set_service_url() {
        let mut service = versioned_service("https://example.com/api");

        service.set_service_url("https://other.example.com/api").unwrap();
        assert_eq!(service.service_url(), "https://other.example.com/api");

        assert!(service.set_service_url("::bad::").is_err());
        assert_eq!(service.service_url(), "https://other.example.com/api");
    }

    #[tokio::test]
    async fn test_set_iam_access_token_requires_iam() {
        let service = versioned_service("https://example.com/api");
        let result = service.set_iam_access_token("token").await;

        assert!(matches!(result, Err(ServiceError::Configuration(_))));
    }

    #[test]
    fn test_detailed_response_accessors() {
        let mut headers = HeaderMap::new();
        headers.insert("x-global-transaction-id", "abc".parse().unwrap());

        let response = DetailedResponse::new(201, headers, vec![1, 2, 3]);
        assert_eq!(response.status_code(), 201);
        assert_eq!(response.header("X-Global-Transaction-Id"), Some("abc"));
        assert_eq!(response.result().len(), 3);

        let mapped = response.map(|bytes| bytes.len());
        assert_eq!(mapped.status_code(), 201);
        assert_eq!(mapped.into_result(), 3);
    }

    #[test]
    fn test_user_agent_format() {
        let agent = UserAgent::default().to_string();
        assert!(agent.starts_with(&format!("watson-apis-rust-sdk/{}", env!("CARGO_PKG_VERSION"))));
        assert!(agent.contains(std::env::consts::OS));
    }

    #[test]
    fn test_client_builder_rejects_bad_headers() {
        assert!(ClientBuilder::new().header("X-Custom", "value").build_http_client().is_ok());
        assert!(ClientBuilder::new().header("bad header", "value").build_http_client().is_err());
    }

    #[tokio::test]
    async fn test_execute_sends_auth_user_agent_and_version() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/things/a%20b"))
            .and(query_param("version", "2018-09-20"))
            .and(header("authorization", "Basic dXNlcjpwYXNz"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "thing"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let service = versioned_service(&mock_server.uri());
        let request = service
            .request(Method::GET, "/v1/things/{id}", &[("id", "a b")])
            .unwrap()
            .accept("application/json");

        let response: DetailedResponse<Echo> = service.execute(request).await.unwrap();
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.result(), &Echo { name: "thing".to_string() });

        let received = mock_server.received_requests().await.unwrap();
        let user_agent = header_of(&received[0], "user-agent").unwrap_or_default();
        assert!(user_agent.starts_with("watson-apis-rust-sdk/"));
    }

    #[tokio::test]
    async fn test_header_precedence() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/things"))
            .and(header("x-default", "service"))
            .and(header("x-override", "call"))
            .and(header("accept", "text/csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string("a,b"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut service = versioned_service(&mock_server.uri());
        let mut defaults = HashMap::new();
        defaults.insert("X-Default".to_string(), "service".to_string());
        defaults.insert("X-Override".to_string(), "service".to_string());
        service.set_default_headers(&defaults).unwrap();

        let mut per_call = HashMap::new();
        per_call.insert("X-Override".to_string(), "call".to_string());
        per_call.insert("Accept".to_string(), "text/csv".to_string());

        let request = service
            .request(Method::GET, "/v1/things", &[])
            .unwrap()
            .accept("application/json")
            .headers(&per_call);

        let response = service.execute_bytes(request).await.unwrap();
        assert_eq!(response.result().as_slice(), b"a,b");
    }

    #[tokio::test]
    async fn test_json_and_text_bodies() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/json"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"text": "hi"})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/text"))
            .and(header("content-type", "text/plain"))
            .and(body_string("plain words"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let service = versioned_service(&mock_server.uri());

        let json_request = service
            .request(Method::POST, "/v1/json", &[])
            .unwrap()
            .json(&json!({"text": "hi"}))
            .unwrap();
        let response = service.execute_empty(json_request).await.unwrap();
        assert_eq!(response.status_code(), 201);

        let text_request = service
            .request(Method::POST, "/v1/text", &[])
            .unwrap()
            .text("text/plain", "plain words");
        service.execute_empty(text_request).await.unwrap();
    }

    #[tokio::test]
    async fn test_per_call_content_type_wins_over_body_default() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/text"))
            .and(header("content-type", "text/plain;charset=utf-8"))
            .and(body_string("plain words"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/audio"))
            .and(header("content-type", "audio/l16;rate=16000"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let service = versioned_service(&mock_server.uri());

        let mut per_call = HashMap::new();
        per_call.insert("Content-Type".to_string(), "text/plain;charset=utf-8".to_string());
        let text_request = service
            .request(Method::POST, "/v1/text", &[])
            .unwrap()
            .headers(&per_call)
            .text("text/plain", "plain words");
        service.execute_empty(text_request).await.unwrap();

        let binary_request = service
            .request(Method::POST, "/v1/audio", &[])
            .unwrap()
            .header("Content-Type", "audio/l16;rate=16000")
            .binary("application/octet-stream", vec![0, 1, 2, 3]);
        service.execute_empty(binary_request).await.unwrap();
    }

    #[tokio::test]
    async fn test_multipart_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "uploaded"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let service = versioned_service(&mock_server.uri());
        let request = service
            .request(Method::POST, "/v1/upload", &[])
            .unwrap()
            .multipart(vec![
                MultipartField::text("name", "my classifier"),
                MultipartField::file(
                    "training_data",
                    FileUpload::new("a,b\n").filename("data.csv").content_type("text/csv"),
                ),
            ]);

        let response: DetailedResponse<Echo> = service.execute(request).await.unwrap();
        assert_eq!(response.result().name, "uploaded");

        let received = mock_server.received_requests().await.unwrap();
        let content_type = header_of(&received[0], "content-type").unwrap_or_default();
        assert!(content_type.starts_with("multipart/form-data; boundary="));

        let body = String::from_utf8_lossy(&received[0].body).to_lowercase();
        assert!(body.contains("name=\"name\""));
        assert!(body.contains("my classifier"));
        assert!(body.contains("filename=\"data.csv\""));
        assert!(body.contains("content-type: text/csv"));
    }

    #[tokio::test]
    async fn test_error_response_carries_status_and_body() {
        let mock_server = MockServer::start().await;
        let body = r#"{"error":"Invalid request","code":400}"#;

        Mock::given(method("GET"))
            .and(path("/v1/things"))
            .respond_with(
                ResponseTemplate::new(400)
                    .insert_header("X-Global-Transaction-Id", "txn-1")
                    .set_body_string(body),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let service = versioned_service(&mock_server.uri());
        let request = service.request(Method::GET, "/v1/things", &[]).unwrap();
        let err = service.execute_empty(request).await.unwrap_err();

        assert!(matches!(err.kind(), ServiceError::Validation(_)));
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.body(), Some(body));
        assert_eq!(err.error_code(), Some("Invalid request"));
        assert_eq!(err.service_name(), Some("test_service"));
        assert_eq!(err.context().and_then(|c| c.request_id.as_deref()), Some("txn-1"));
    }

    #[tokio::test]
    async fn test_undecodable_success_is_parsing_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/things"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let service = versioned_service(&mock_server.uri());
        let request = service.request(Method::GET, "/v1/things", &[]).unwrap();
        let result: crate::error::Result<DetailedResponse<Echo>> = service.execute(request).await;

        assert!(matches!(result, Err(ServiceError::Parsing(_))));
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // nothing listens on port 1
        let service = versioned_service("http://127.0.0.1:1/api");
        let request = service.request(Method::GET, "/v1/things", &[]).unwrap();
        let err = service.execute_empty(request).await.unwrap_err();

        assert!(matches!(err.kind(), ServiceError::Network(_) | ServiceError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_dropped_connection_is_network_error() {
        use tokio::io::AsyncReadExt;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
            }
        });

        let service = versioned_service(&format!("http://{}/api", addr));
        let request = service.request(Method::GET, "/v1/things", &[]).unwrap();
        let err = service.execute_empty(request).await.unwrap_err();

        assert!(matches!(err.kind(), ServiceError::Network(_)), "unexpected error: {:?}", err);
    }
}
