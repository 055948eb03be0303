//! Mock tests for the Language Translator client

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::core::FileUpload;
    use crate::error::ServiceError;
    use crate::services::language_translator::{
        CreateModelOptions, DeleteModelOptions, IdentifyOptions, LanguageTranslatorClient,
        ListIdentifiableLanguagesOptions, ListModelsOptions, TranslateOptions,
    };

    const VERSION: &str = "2018-05-01";

    fn client(server: &MockServer) -> LanguageTranslatorClient {
        let config = LanguageTranslatorClient::default_config(VERSION)
            .url(server.uri())
            .basic_auth("user", "pass");
        LanguageTranslatorClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_translate_with_model_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/translate"))
            .and(query_param("version", VERSION))
            .and(body_json(json!({"text": ["Hello", "Goodbye"], "model_id": "en-es"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "word_count": 2,
                "character_count": 12,
                "translations": [{"translation": "Hola"}, {"translation": "Adiós"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = TranslateOptions::new(vec!["Hello".to_string(), "Goodbye".to_string()]).model_id("en-es");
        let result = client(&server).translate(options).await.unwrap().into_result();

        assert_eq!(result.word_count, 2);
        assert_eq!(result.character_count, 12);
        assert_eq!(result.translations[0].translation_output, "Hola");
        assert_eq!(result.translations[1].translation_output, "Adiós");
    }

    #[tokio::test]
    async fn test_translate_with_language_pair() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/translate"))
            .and(body_json(json!({"text": ["Hello"], "source": "en", "target": "fr"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "word_count": 1,
                "character_count": 5,
                "translations": [{"translation": "Bonjour"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = TranslateOptions::new(vec!["Hello".to_string()]).source("en").target("fr");
        let result = client(&server).translate(options).await.unwrap();

        assert_eq!(result.result().translations[0].translation_output, "Bonjour");
    }

    #[tokio::test]
    async fn test_translate_requires_model_or_pair() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let only_source = TranslateOptions::new(vec!["Hello".to_string()]).source("en");
        let result = client(&server).translate(only_source).await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_identify_sends_plain_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/identify"))
            .and(header("Content-Type", "text/plain"))
            .and(body_string("Language Translator translates text"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "languages": [
                    {"language": "en", "confidence": 0.98},
                    {"language": "it", "confidence": 0.01}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = IdentifyOptions::new("Language Translator translates text");
        let result = client(&server).identify(options).await.unwrap().into_result();

        assert_eq!(result.languages[0].language, "en");
        assert!(result.languages[0].confidence > 0.9);
    }

    #[tokio::test]
    async fn test_list_identifiable_languages() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/identifiable_languages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "languages": [{"language": "af", "name": "Afrikaans"}, {"language": "ar", "name": "Arabic"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server)
            .list_identifiable_languages(ListIdentifiableLanguagesOptions::new())
            .await
            .unwrap();

        assert_eq!(result.result().languages.len(), 2);
        assert_eq!(result.result().languages[1].name, "Arabic");
    }

    #[tokio::test]
    async fn test_list_models_maps_default_flag() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/models"))
            .and(query_param("source", "en"))
            .and(query_param("default", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{
                    "model_id": "en-es",
                    "source": "en",
                    "target": "es",
                    "domain": "general",
                    "customizable": true,
                    "default_model": true,
                    "status": "available"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = ListModelsOptions::new().source("en").default_models(true);
        let models = client(&server).list_models(options).await.unwrap().into_result();

        assert_eq!(models.models[0].model_id, "en-es");
        assert!(models.models[0].customizable);
        assert!(models.models[0].default_model);
    }

    #[tokio::test]
    async fn test_create_model_uploads_glossary() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/models"))
            .and(query_param("base_model_id", "en-fr"))
            .and(query_param("name", "custom-en-fr"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "model_id": "custom-1",
                "base_model_id": "en-fr",
                "name": "custom-en-fr",
                "status": "dispatching"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let glossary = FileUpload::new(b"<tmx version=\"1.4\"></tmx>".to_vec());
        let options = CreateModelOptions::new("en-fr")
            .name("custom-en-fr")
            .forced_glossary(glossary);

        let model = client(&server).create_model(options).await.unwrap().into_result();
        assert_eq!(model.model_id, "custom-1");
        assert_eq!(model.status.as_deref(), Some("dispatching"));

        let received = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&received[0].body).to_lowercase();
        assert!(body.contains("name=\"forced_glossary\""));
        assert!(body.contains("filename=\"glossary.tmx\""));
        assert!(!body.contains("name=\"parallel_corpus\""));
    }

    #[tokio::test]
    async fn test_create_model_requires_training_data() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = client(&server).create_model(CreateModelOptions::new("en-fr")).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));

        let result = client(&server)
            .create_model(CreateModelOptions::new("").forced_glossary(FileUpload::new(vec![1, 2, 3])))
            .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_model() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/v3/models/custom-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "OK"})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server)
            .delete_model(DeleteModelOptions::new("custom-1"))
            .await
            .unwrap();

        assert_eq!(result.result().status, "OK");
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/models/en-es"))
            .respond_with(
                ResponseTemplate::new(401).set_body_raw(r#"{"code":401,"error":"Unauthorized"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server)
            .get_model(crate::services::language_translator::GetModelOptions::new("en-es"))
            .await
            .unwrap_err();

        assert!(matches!(err.kind(), ServiceError::Authentication(_)));
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.service_name(), Some("language_translator"));
    }
}
