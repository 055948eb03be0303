//! Mock tests for the Text to Speech client

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::error::ServiceError;
    use crate::services::text_to_speech::{
        AddWordOptions, CreateVoiceModelOptions, DeleteVoiceModelOptions, GetPronunciationOptions, GetVoiceOptions,
        ListVoicesOptions, ListWordsOptions, SynthesizeOptions, TextToSpeechClient, UpdateVoiceModelOptions, Word,
        DEFAULT_AUDIO_FORMAT,
    };

    fn client(server: &MockServer) -> TextToSpeechClient {
        let config = TextToSpeechClient::default_config()
            .url(server.uri())
            .basic_auth("user", "pass");
        TextToSpeechClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_list_voices() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/voices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "voices": [{
                    "url": "https://example.com/v1/voices/en-US_AllisonVoice",
                    "gender": "female",
                    "name": "en-US_AllisonVoice",
                    "language": "en-US",
                    "description": "Allison: American English female voice.",
                    "customizable": true,
                    "supported_features": {"custom_pronunciation": true, "voice_transformation": true}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let voices = client(&server).list_voices(ListVoicesOptions::new()).await.unwrap().into_result();

        assert_eq!(voices.voices.len(), 1);
        assert_eq!(voices.voices[0].gender, "female");
        assert!(voices.voices[0].supported_features.custom_pronunciation);
    }

    #[tokio::test]
    async fn test_get_voice_with_customization() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/voices/en-US_LisaVoice"))
            .and(query_param("customization_id", "cust-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "url": "https://example.com/v1/voices/en-US_LisaVoice",
                "gender": "female",
                "name": "en-US_LisaVoice",
                "language": "en-US",
                "customization": {"customization_id": "cust-1", "name": "Lisa custom"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let voice = client(&server)
            .get_voice(GetVoiceOptions::new("en-US_LisaVoice").customization_id("cust-1"))
            .await
            .unwrap()
            .into_result();

        assert!(!voice.customizable);
        assert_eq!(voice.customization.unwrap().name.as_deref(), Some("Lisa custom"));
    }

    #[tokio::test]
    async fn test_synthesize_returns_audio_bytes() {
        let server = MockServer::start().await;
        let audio = vec![0x52, 0x49, 0x46, 0x46, 0x00, 0x01];

        Mock::given(method("POST"))
            .and(path("/v1/synthesize"))
            .and(query_param("voice", "en-US_AllisonVoice"))
            .and(header("Accept", "audio/wav"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"text": "Hello world"})))
            .respond_with(ResponseTemplate::new(200).set_body_raw(audio.clone(), "audio/wav"))
            .expect(1)
            .mount(&server)
            .await;

        let options = SynthesizeOptions::new("Hello world")
            .accept("audio/wav")
            .voice("en-US_AllisonVoice");
        let response = client(&server).synthesize(options).await.unwrap();

        assert_eq!(response.header("content-type"), Some("audio/wav"));
        assert_eq!(response.into_result(), audio);
    }

    #[tokio::test]
    async fn test_synthesize_defaults_to_ogg_opus() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/synthesize"))
            .and(header("Accept", DEFAULT_AUDIO_FORMAT))
            .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0x4f, 0x67, 0x67, 0x53], "audio/ogg"))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .synthesize(SynthesizeOptions::new("Hello"))
            .await
            .unwrap();

        assert_eq!(response.result().as_slice(), b"OggS");
    }

    #[tokio::test]
    async fn test_get_pronunciation() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/pronunciation"))
            .and(query_param("text", "IEEE"))
            .and(query_param("format", "ipa"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pronunciation": "aɪ trɪpəl i"})))
            .expect(1)
            .mount(&server)
            .await;

        let pronunciation = client(&server)
            .get_pronunciation(GetPronunciationOptions::new("IEEE").format("ipa"))
            .await
            .unwrap()
            .into_result();
        assert_eq!(pronunciation.pronunciation, "aɪ trɪpəl i");

        let empty = client(&server).get_pronunciation(GetPronunciationOptions::new("")).await;
        assert!(matches!(empty, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_voice_model_lifecycle() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/customizations"))
            .and(body_json(json!({"name": "ieee", "language": "en-US"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"customization_id": "cust-1"})))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/customizations/cust-1"))
            .and(body_json(json!({
                "description": "IEEE acronyms",
                "words": [{"word": "NCAA", "translation": "N C double A"}]
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/v1/customizations/cust-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);

        let model = client
            .create_voice_model(CreateVoiceModelOptions::new("ieee").language("en-US"))
            .await
            .unwrap();
        assert_eq!(model.status_code(), 201);
        assert_eq!(model.result().customization_id, "cust-1");

        let update = UpdateVoiceModelOptions::new("cust-1")
            .description("IEEE acronyms")
            .words(vec![Word::new("NCAA", "N C double A")]);
        client.update_voice_model(update).await.unwrap();

        let deleted = client
            .delete_voice_model(DeleteVoiceModelOptions::new("cust-1"))
            .await
            .unwrap();
        assert_eq!(deleted.status_code(), 204);
    }

    #[tokio::test]
    async fn test_create_voice_model_requires_name() {
        let server = MockServer::start().await;

        let result = client(&server).create_voice_model(CreateVoiceModelOptions::new("")).await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn test_add_and_list_words() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/customizations/cust-1/words/ACLs"))
            .and(body_json(json!({"translation": "ackles", "part_of_speech": "Noun"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/customizations/cust-1/words"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "words": [
                    {"word": "ACLs", "translation": "ackles"},
                    {"word": "iPhone", "translation": "I phone", "part_of_speech": "Noun"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server);

        client
            .add_word(AddWordOptions::new("cust-1", "ACLs", "ackles").part_of_speech("Noun"))
            .await
            .unwrap();

        let words = client
            .list_words(ListWordsOptions::new("cust-1"))
            .await
            .unwrap()
            .into_result();
        assert_eq!(words.words.len(), 2);
        assert_eq!(words.words[1].part_of_speech.as_deref(), Some("Noun"));
    }

    #[tokio::test]
    async fn test_synthesize_unsupported_voice() {
        let server = MockServer::start().await;
        let body = r#"{"code":404,"error":"Model en-US_Unknown not found"}"#;

        Mock::given(method("POST"))
            .and(path("/v1/synthesize"))
            .respond_with(ResponseTemplate::new(404).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server)
            .synthesize(SynthesizeOptions::new("Hello").voice("en-US_Unknown"))
            .await
            .unwrap_err();

        assert!(matches!(err.kind(), ServiceError::NotFound(_)));
        assert_eq!(err.error_code(), Some("Model en-US_Unknown not found"));
    }
}
