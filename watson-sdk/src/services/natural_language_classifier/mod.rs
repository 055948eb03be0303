//! Watson Natural Language Classifier v1 client

mod models;
pub use models::*;

use std::sync::Arc;

use log::debug;
use reqwest::Method;

use crate::auth::Authenticator;
use crate::config::WatsonConfig;
use crate::core::options::watson_options;
use crate::core::{BaseService, DetailedResponse, FileUpload, MultipartField, RequestExecutor, ServiceClient};
use crate::error::Result;

/// Key prefix used when loading configuration
pub const SERVICE_NAME: &str = "natural_language_classifier";

/// Default service endpoint
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/natural-language-classifier/api";

/// Label of the service in `VCAP_SERVICES`
pub const VCAP_LABEL: &str = "natural_language_classifier";

watson_options! {
    /// Options for `classify`
    pub struct ClassifyOptions {
        required {
            /// Classifier ID
            classifier_id: String,
            /// Text to classify
            text: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `classify_collection`
    pub struct ClassifyCollectionOptions {
        required {
            /// Classifier ID
            classifier_id: String,
            /// Texts to classify
            collection: Vec<ClassifyInput>,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `create_classifier`
    pub struct CreateClassifierOptions {
        required {
            /// JSON metadata with the `language` and optional `name`
            training_metadata: FileUpload,
            /// CSV training data
            training_data: FileUpload,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `list_classifiers`
    pub struct ListClassifiersOptions {
        required {}
        optional {}
    }
}

watson_options! {
    /// Options for `get_classifier`
    pub struct GetClassifierOptions {
        required {
            /// Classifier ID
            classifier_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `delete_classifier`
    pub struct DeleteClassifierOptions {
        required {
            /// Classifier ID
            classifier_id: String,
        }
        optional {}
    }
}

/// Watson Natural Language Classifier client
pub struct NaturalLanguageClassifierClient {
    base: BaseService,
}

impl NaturalLanguageClassifierClient {
    /// Create a client from a configuration
    pub fn new(config: WatsonConfig) -> Result<Self> {
        Ok(Self {
            base: BaseService::new(config, false)?,
        })
    }

    /// Create a client that authenticates through a caller-supplied authenticator
    pub fn with_authenticator(config: WatsonConfig, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        Ok(Self {
            base: BaseService::with_authenticator(config, false, authenticator)?,
        })
    }

    /// Create a client from environment variables or `VCAP_SERVICES`
    pub fn from_env() -> Result<Self> {
        Self::new(WatsonConfig::from_env(SERVICE_NAME, VCAP_LABEL, DEFAULT_URL)?)
    }

    /// Configuration pointing at the default endpoint
    pub fn default_config() -> WatsonConfig {
        WatsonConfig::new(SERVICE_NAME, DEFAULT_URL)
    }

    /// Classify a phrase
    pub async fn classify(&self, options: ClassifyOptions) -> Result<DetailedResponse<Classification>> {
        debug!("Classifying text with classifier {}", options.classifier_id);

        let body = ClassifyInput { text: options.text };

        let request = self
            .base
            .request(
                Method::POST,
                "/v1/classifiers/{classifier_id}/classify",
                &[("classifier_id", options.classifier_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// Classify up to 30 phrases in one call
    pub async fn classify_collection(
        &self,
        options: ClassifyCollectionOptions,
    ) -> Result<DetailedResponse<ClassificationCollection>> {
        let body = ClassifyCollectionInput {
            collection: options.collection,
        };

        let request = self
            .base
            .request(
                Method::POST,
                "/v1/classifiers/{classifier_id}/classify_collection",
                &[("classifier_id", options.classifier_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers)
            .json(&body)?;

        self.base.execute(request).await
    }

    /// Train a new classifier
    pub async fn create_classifier(&self, options: CreateClassifierOptions) -> Result<DetailedResponse<Classifier>> {
        let fields = vec![
            MultipartField::file(
                "training_metadata",
                options.training_metadata.with_defaults("training_metadata.json", "application/json"),
            ),
            MultipartField::file(
                "training_data",
                options.training_data.with_defaults("training_data.csv", "text/csv"),
            ),
        ];

        let request = self
            .base
            .request(Method::POST, "/v1/classifiers", &[])?
            .accept("application/json")
            .headers(&options.headers)
            .multipart(fields);

        self.base.execute(request).await
    }

    /// List classifiers
    pub async fn list_classifiers(&self, options: ListClassifiersOptions) -> Result<DetailedResponse<ClassifierList>> {
        let request = self
            .base
            .request(Method::GET, "/v1/classifiers", &[])?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Get a classifier
    pub async fn get_classifier(&self, options: GetClassifierOptions) -> Result<DetailedResponse<Classifier>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v1/classifiers/{classifier_id}",
                &[("classifier_id", options.classifier_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Delete a classifier
    pub async fn delete_classifier(&self, options: DeleteClassifierOptions) -> Result<DetailedResponse<()>> {
        let request = self
            .base
            .request(
                Method::DELETE,
                "/v1/classifiers/{classifier_id}",
                &[("classifier_id", options.classifier_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute_empty(request).await
    }
}

impl ServiceClient for NaturalLanguageClassifierClient {
    fn base(&self) -> &BaseService {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
