//! Tests for configuration management functionality
//!
//! These tests verify that credentials and settings are loaded from
//! providers, the environment and `VCAP_SERVICES` the way clients expect.

#[cfg(test)]
mod tests {
    use std::env;

    use crate::config::{
        CompositeConfigProvider, ConfigProvider, ConfigProviderExt, EnvConfigProvider, MemoryConfigProvider,
        ServiceConfig, VcapConfigProvider, WatsonConfig, DEFAULT_TIMEOUT_SECONDS,
    };
    use crate::error::ServiceError;

    const VCAP: &str = r#"{
        "conversation": [{
            "name": "my-assistant",
            "label": "conversation",
            "credentials": {
                "url": "https://gateway.watsonplatform.net/assistant/api",
                "username": "vcap-user",
                "password": "vcap-pass"
            }
        }],
        "text_to_speech": [{
            "credentials": {
                "url": "https://stream.watsonplatform.net/text-to-speech/api",
                "apikey": "vcap-api-key",
                "port": 443
            }
        }]
    }"#;

    #[test]
    fn test_memory_config_provider() {
        let mut provider = MemoryConfigProvider::new();
        provider.set("assistant_apikey", "test_key");
        provider.set("assistant_timeout_seconds", "30");
        provider.set("assistant_disable_ssl", "true");

        assert_eq!(provider.get_string("assistant_apikey").unwrap(), "test_key");
        assert_eq!(provider.get_int("assistant_timeout_seconds").unwrap(), 30);
        assert!(provider.get_bool("assistant_disable_ssl").unwrap());

        assert_eq!(provider.get_string_or("missing", "default"), "default");
        assert_eq!(provider.get_int_or("missing", 60), 60);
        assert!(!provider.get_bool_or("missing", false));

        assert!(provider.get_string("missing").is_err());
        assert!(provider.get_int("assistant_apikey").is_err());
    }

    #[test]
    fn test_env_config_provider() {
        env::set_var("WATSONTEST_TONE_ANALYZER_APIKEY", "env_test_key");
        env::set_var("WATSONTEST_TONE_ANALYZER_TIMEOUT_SECONDS", "5");

        let provider = EnvConfigProvider::new().with_prefix("WATSONTEST");

        assert_eq!(provider.get_string("tone_analyzer_apikey").unwrap(), "env_test_key");
        assert_eq!(provider.get_int("tone_analyzer_timeout_seconds").unwrap(), 5);
        assert!(provider.get_string("tone_analyzer_username").is_err());

        env::remove_var("WATSONTEST_TONE_ANALYZER_APIKEY");
        env::remove_var("WATSONTEST_TONE_ANALYZER_TIMEOUT_SECONDS");
    }

    #[test]
    fn test_composite_config_provider_order() {
        let mut first = MemoryConfigProvider::new();
        first.set("discovery_url", "https://first.example.com/api");

        let mut second = MemoryConfigProvider::new();
        second.set("discovery_url", "https://second.example.com/api");
        second.set("discovery_apikey", "second-key");

        let composite = CompositeConfigProvider::new().with_provider(first).with_provider(second);

        assert_eq!(composite.get_string("discovery_url").unwrap(), "https://first.example.com/api");
        assert_eq!(composite.get_string("discovery_apikey").unwrap(), "second-key");
        assert!(composite.get_string("discovery_username").is_err());
    }

    #[test]
    fn test_vcap_provider_reads_first_instance() {
        let provider = VcapConfigProvider::from_json(VCAP, "assistant", "conversation").unwrap();

        assert_eq!(
            provider.get_string("assistant_url").unwrap(),
            "https://gateway.watsonplatform.net/assistant/api"
        );
        assert_eq!(provider.get_string("assistant_username").unwrap(), "vcap-user");
        assert_eq!(provider.get_string("assistant_password").unwrap(), "vcap-pass");
        assert!(provider.get_string("assistant_apikey").is_err());
        assert!(provider.get_string("discovery_url").is_err());
    }

    #[test]
    fn test_vcap_provider_skips_non_string_credentials() {
        let provider = VcapConfigProvider::from_json(VCAP, "text_to_speech", "text_to_speech").unwrap();

        assert_eq!(provider.get_string("text_to_speech_apikey").unwrap(), "vcap-api-key");
        assert!(provider.get_string("text_to_speech_port").is_err());
    }

    #[test]
    fn test_vcap_provider_errors() {
        let missing = VcapConfigProvider::from_json(VCAP, "speech_to_text", "speech_to_text");
        assert!(matches!(missing, Err(ServiceError::Configuration(_))));

        let invalid = VcapConfigProvider::from_json("not json", "assistant", "conversation");
        assert!(matches!(invalid, Err(ServiceError::Configuration(_))));
    }

    #[test]
    fn test_config_from_provider() {
        let mut provider = MemoryConfigProvider::new();
        provider.set("assistant_url", "https://example.com/assistant/api");
        provider.set("assistant_version", "2018-09-20");
        provider.set("assistant_apikey", "abc");
        provider.set("assistant_timeout_seconds", "15");
        provider.set("assistant_disable_ssl", "yes");

        let config = WatsonConfig::from_provider(&provider, "assistant", "https://default.example.com").unwrap();

        assert_eq!(config.service_name, "assistant");
        assert_eq!(config.url, "https://example.com/assistant/api");
        assert_eq!(config.version.as_deref(), Some("2018-09-20"));
        assert_eq!(config.iam_api_key.as_deref(), Some("abc"));
        assert_eq!(config.timeout_seconds, 15);
        assert!(config.disable_ssl_verification);
        assert!(config.uses_iam());
    }

    #[test]
    fn test_config_from_provider_uses_defaults() {
        let mut provider = MemoryConfigProvider::new();
        provider.set("speech_to_text_username", "user");
        provider.set("speech_to_text_password", "pass");

        let config =
            WatsonConfig::from_provider(&provider, "speech_to_text", "https://stream.example.com/api").unwrap();

        assert_eq!(config.url, "https://stream.example.com/api");
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert!(config.version.is_none());
        assert!(!config.uses_iam());
    }

    #[test]
    fn test_config_from_provider_without_credentials_fails() {
        let provider = MemoryConfigProvider::new();
        let result = WatsonConfig::from_provider(&provider, "assistant", "https://example.com/api");

        assert!(matches!(result, Err(ServiceError::Configuration(_))));
    }

    #[test]
    fn test_apikey_username_from_provider_becomes_iam() {
        let mut provider = MemoryConfigProvider::new();
        provider.set("visual_recognition_username", "apikey");
        provider.set("visual_recognition_password", "real-key");

        let config = WatsonConfig::from_provider(&provider, "visual_recognition", "https://example.com/api").unwrap();

        assert_eq!(config.iam_api_key.as_deref(), Some("real-key"));
        assert!(config.password.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = WatsonConfig::new("assistant", "not a url").iam_api_key("k");
        assert!(config.validate().is_err());

        let empty = WatsonConfig::new("assistant", "").iam_api_key("k");
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_blank_credentials_are_rejected() {
        let empty_key = WatsonConfig::new("assistant", "https://example.com/api").iam_api_key("");
        assert!(!empty_key.uses_iam());
        assert!(matches!(empty_key.validate(), Err(ServiceError::Configuration(_))));

        let blank_token = WatsonConfig::new("assistant", "https://example.com/api").iam_access_token("   ");
        assert!(matches!(blank_token.validate(), Err(ServiceError::Configuration(_))));

        let blank_password = WatsonConfig::new("assistant", "https://example.com/api").basic_auth("user", " ");
        assert!(blank_password.validate().is_err());
    }

    #[test]
    fn test_empty_apikey_from_provider_falls_back_to_basic() {
        let mut provider = MemoryConfigProvider::new();
        provider.set("assistant_apikey", "");

        let result = WatsonConfig::from_provider(&provider, "assistant", "https://example.com/api");
        assert!(matches!(result, Err(ServiceError::Configuration(_))));

        provider.set("assistant_username", "user");
        provider.set("assistant_password", "pass");
        let config = WatsonConfig::from_provider(&provider, "assistant", "https://example.com/api").unwrap();

        assert!(config.iam_api_key.is_none());
        assert!(!config.uses_iam());
        assert_eq!(config.username.as_deref(), Some("user"));
    }

    #[test]
    fn test_validate_accepts_access_token_alone() {
        let config = WatsonConfig::new("assistant", "https://example.com/api").iam_access_token("token");
        assert!(config.validate().is_ok());
        assert_eq!(config.service_name(), "assistant");
    }
}
