//! Mock tests for the Personality Insights client

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use crate::error::ServiceError;
    use crate::services::personality_insights::{Content, ContentItem, PersonalityInsightsClient, ProfileOptions};

    const VERSION: &str = "2017-10-13";

    fn client(server: &MockServer) -> PersonalityInsightsClient {
        let config = PersonalityInsightsClient::default_config(VERSION)
            .url(server.uri())
            .basic_auth("user", "pass");
        PersonalityInsightsClient::new(config).unwrap()
    }

    fn has_query(request: &Request, name: &str) -> bool {
        request.url.query_pairs().any(|(key, _)| key == name)
    }

    fn profile_body() -> serde_json::Value {
        json!({
            "processed_language": "en",
            "word_count": 1365,
            "personality": [{
                "trait_id": "big5_openness",
                "name": "Openness",
                "category": "personality",
                "percentile": 0.8,
                "raw_score": 0.77,
                "significant": true,
                "children": [{
                    "trait_id": "facet_adventurousness",
                    "name": "Adventurousness",
                    "category": "personality",
                    "percentile": 0.89
                }]
            }],
            "needs": [],
            "values": [],
            "consumption_preferences": [{
                "consumption_preference_category_id": "consumption_preferences_shopping",
                "name": "Purchasing Preferences",
                "consumption_preferences": [{
                    "consumption_preference_id": "consumption_preferences_automobile_ownership_cost",
                    "name": "Likely to be sensitive to ownership cost when buying automobiles",
                    "score": 0.5
                }]
            }],
            "warnings": []
        })
    }

    #[tokio::test]
    async fn test_profile_from_plain_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/profile"))
            .and(query_param("version", VERSION))
            .and(query_param("raw_scores", "true"))
            .and(query_param("consumption_preferences", "true"))
            .and(header("Content-Type", "text/plain"))
            .and(header("Accept", "application/json"))
            .and(body_string("I love exploring new places."))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
            .expect(1)
            .mount(&server)
            .await;

        let options = ProfileOptions::new("I love exploring new places.")
            .raw_scores(true)
            .consumption_preferences(true);
        let profile = client(&server).profile(options).await.unwrap().into_result();

        assert_eq!(profile.processed_language, "en");
        assert_eq!(profile.word_count, 1365);
        assert_eq!(profile.personality[0].trait_id, "big5_openness");
        assert_eq!(profile.personality[0].raw_score, Some(0.77));
        assert_eq!(profile.personality[0].children[0].name, "Adventurousness");
        assert_eq!(profile.consumption_preferences[0].consumption_preferences.len(), 1);

        let received = server.received_requests().await.unwrap();
        assert!(!has_query(&received[0], "csv_headers"));
    }

    #[tokio::test]
    async fn test_profile_from_content_items_with_languages() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/profile"))
            .and(header("Content-Type", "application/json"))
            .and(header("Content-Language", "es"))
            .and(header("Accept-Language", "en"))
            .and(body_json(json!({
                "contentItems": [
                    {"content": "Me encanta viajar.", "language": "es"},
                    {"content": "Trabajo en equipo."}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "processed_language": "es",
                "word_count": 6,
                "word_count_message": "There were 6 words in the input",
                "warnings": [{"warning_id": "WORD_COUNT_MESSAGE", "message": "There were 6 words in the input."}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut first = ContentItem::new("Me encanta viajar.");
        first.language = Some("es".to_string());
        let content = Content {
            content_items: vec![first, ContentItem::new("Trabajo en equipo.")],
        };
        let options = ProfileOptions::new(content)
            .content_language("es")
            .accept_language("en");

        let profile = client(&server).profile(options).await.unwrap().into_result();

        assert_eq!(profile.processed_language, "es");
        assert_eq!(profile.warnings[0].warning_id, "WORD_COUNT_MESSAGE");
        assert!(profile.personality.is_empty());
    }

    #[tokio::test]
    async fn test_profile_from_html() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/profile"))
            .and(header("Content-Type", "text/html"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
            .expect(1)
            .mount(&server)
            .await;

        let options = ProfileOptions::new(crate::services::personality_insights::ProfileContent::Html(
            "<p>I love exploring new places.</p>".to_string(),
        ));
        let profile = client(&server).profile(options).await.unwrap();

        assert_eq!(profile.status_code(), 200);
    }

    #[tokio::test]
    async fn test_profile_as_csv() {
        let server = MockServer::start().await;
        let csv = "big5_openness,big5_conscientiousness\n0.8,0.6\n";

        Mock::given(method("POST"))
            .and(path("/v3/profile"))
            .and(header("Accept", "text/csv"))
            .and(query_param("csv_headers", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(csv, "text/csv"))
            .expect(1)
            .mount(&server)
            .await;

        let options = ProfileOptions::new("Some text").csv_headers(true);
        let response = client(&server).profile_as_csv(options).await.unwrap();

        assert_eq!(response.header("content-type"), Some("text/csv"));
        assert_eq!(String::from_utf8(response.into_result()).unwrap(), csv);
    }

    #[tokio::test]
    async fn test_profile_with_too_few_words() {
        let server = MockServer::start().await;
        let body = r#"{"code":400,"sub_code":"S00014","error":"The number of words 12 is less than the minimum number of words required for analysis: 100"}"#;

        Mock::given(method("POST"))
            .and(path("/v3/profile"))
            .respond_with(ResponseTemplate::new(400).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server)
            .profile(ProfileOptions::new("Too short to analyze"))
            .await
            .unwrap_err();

        assert!(matches!(err.kind(), ServiceError::Validation(_)));
        assert_eq!(err.body(), Some(body));
        assert!(err.error_code().unwrap().starts_with("The number of words 12"));
    }
}
