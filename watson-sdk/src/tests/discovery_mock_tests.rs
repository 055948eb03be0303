//! Mock tests for the Discovery client

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::core::FileUpload;
    use crate::error::ServiceError;
    use crate::services::discovery::{
        AddDocumentOptions, CreateEnvironmentOptions, DeleteCollectionOptions, DiscoveryClient,
        GetDocumentStatusOptions, ListCollectionsOptions, ListEnvironmentsOptions, QueryOptions,
    };

    const VERSION: &str = "2018-03-05";

    fn client(server: &MockServer) -> DiscoveryClient {
        let config = DiscoveryClient::default_config(VERSION)
            .url(server.uri())
            .basic_auth("user", "pass");
        DiscoveryClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_create_environment() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/environments"))
            .and(query_param("version", VERSION))
            .and(body_json(json!({"name": "my-env", "size": "S"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "environment_id": "env-1",
                "name": "my-env",
                "status": "pending",
                "read_only": false,
                "size": "S"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = CreateEnvironmentOptions::new("my-env").size("S");
        let environment = client(&server).create_environment(options).await.unwrap().into_result();

        assert_eq!(environment.environment_id, "env-1");
        assert_eq!(environment.status.as_deref(), Some("pending"));
        assert!(!environment.read_only);
    }

    #[tokio::test]
    async fn test_list_environments_by_name() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/environments"))
            .and(query_param("name", "Watson News"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "environments": [{
                    "environment_id": "system",
                    "name": "Watson News",
                    "read_only": true
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = ListEnvironmentsOptions::new().name("Watson News");
        let response = client(&server).list_environments(options).await.unwrap();

        assert_eq!(response.result().environments.len(), 1);
        assert!(response.result().environments[0].read_only);
    }

    #[tokio::test]
    async fn test_list_collections() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/environments/env-1/collections"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "collections": [{
                    "collection_id": "col-1",
                    "name": "articles",
                    "language": "en",
                    "document_counts": {"available": 10, "processing": 2, "failed": 1}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let collections = client(&server)
            .list_collections(ListCollectionsOptions::new("env-1"))
            .await
            .unwrap()
            .into_result();

        let counts = collections.collections[0].document_counts.as_ref().unwrap();
        assert_eq!(counts.available, 10);
        assert_eq!(counts.failed, 1);
    }

    #[tokio::test]
    async fn test_delete_collection() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v1/environments/env-1/collections/col-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"collection_id": "col-1", "status": "deleted"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .delete_collection(DeleteCollectionOptions::new("env-1", "col-1"))
            .await
            .unwrap();

        assert_eq!(response.result().status, "deleted");
    }

    #[tokio::test]
    async fn test_add_document_sends_multipart() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/environments/env-1/collections/col-1/documents"))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({
                "document_id": "doc-1",
                "status": "processing",
                "notices": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let file = FileUpload::new(b"<html>hello</html>".to_vec())
            .filename("page.html")
            .content_type("text/html");
        let options = AddDocumentOptions::new("env-1", "col-1")
            .file(file)
            .metadata(r#"{"source":"web"}"#);

        let accepted = client(&server).add_document(options).await.unwrap().into_result();
        assert_eq!(accepted.document_id, "doc-1");
        assert_eq!(accepted.status, "processing");

        let received = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&received[0].body).to_lowercase();
        assert!(body.contains("name=\"file\""));
        assert!(body.contains("filename=\"page.html\""));
        assert!(body.contains("content-type: text/html"));
        assert!(body.contains("name=\"metadata\""));
        assert!(body.contains("{\"source\":\"web\"}"));
    }

    #[tokio::test]
    async fn test_add_document_requires_file_or_metadata() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(202))
            .expect(0)
            .mount(&server)
            .await;

        let result = client(&server)
            .add_document(AddDocumentOptions::new("env-1", "col-1"))
            .await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_document_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/environments/env-1/collections/col-1/documents/doc-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "document_id": "doc-1",
                "status": "failed",
                "status_description": "Document failed to convert",
                "notices": [{"notice_id": "n1", "severity": "error", "step": "convert"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let status = client(&server)
            .get_document_status(GetDocumentStatusOptions::new("env-1", "col-1", "doc-1"))
            .await
            .unwrap()
            .into_result();

        assert_eq!(status.status, "failed");
        assert_eq!(status.notices[0].severity.as_deref(), Some("error"));
    }

    #[tokio::test]
    async fn test_query_renames_return_parameter() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/environments/env-1/collections/col-1/query"))
            .and(query_param("natural_language_query", "who won the race"))
            .and(query_param("return", "title,url"))
            .and(query_param("count", "5"))
            .and(query_param("passages", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "matching_results": 24,
                "results": [{
                    "id": "doc-9",
                    "result_metadata": {"score": 2.1},
                    "title": "Race results",
                    "url": "https://example.com/race"
                }],
                "passages": [{"document_id": "doc-9", "passage_score": 12.5, "passage_text": "won the race"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = QueryOptions::new("env-1", "col-1")
            .natural_language_query("who won the race")
            .return_fields("title,url")
            .count(5)
            .passages(true);
        let response = client(&server).query(options).await.unwrap().into_result();

        assert_eq!(response.matching_results, 24);
        assert_eq!(response.results[0].id.as_deref(), Some("doc-9"));
        assert_eq!(response.results[0].fields["title"], json!("Race results"));
        assert!(!response.results[0].fields.contains_key("id"));
        assert_eq!(response.passages[0].passage_text.as_deref(), Some("won the race"));
    }

    #[tokio::test]
    async fn test_query_service_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/environments/env-1/collections/col-1/query"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_raw(r#"{"code":400,"error":"Invalid query syntax"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server)
            .query(QueryOptions::new("env-1", "col-1").query("title::"))
            .await
            .unwrap_err();

        assert!(matches!(err.kind(), ServiceError::Validation(_)));
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.error_code(), Some("Invalid query syntax"));
    }
}
