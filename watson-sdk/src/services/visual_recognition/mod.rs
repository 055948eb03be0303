//! Watson Visual Recognition v3 client
//!
//! Images are uploaded as multipart parts; training examples are zip
//! archives named `<class>_positive_examples` and `negative_examples`.

mod models;
pub use models::*;

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::Method;

use crate::auth::Authenticator;
use crate::config::WatsonConfig;
use crate::core::options::watson_options;
use crate::core::request::require_non_empty;
use crate::core::{BaseService, DetailedResponse, FileUpload, MultipartField, RequestExecutor, ServiceClient};
use crate::error::{Result, ServiceError};

/// Key prefix used when loading configuration
pub const SERVICE_NAME: &str = "visual_recognition";

/// Default service endpoint
pub const DEFAULT_URL: &str = "https://gateway.watsonplatform.net/visual-recognition/api";

/// Label of the service in `VCAP_SERVICES`
pub const VCAP_LABEL: &str = "watson_vision_combined";

/// API version used by `from_env` when none is configured
pub const DEFAULT_VERSION: &str = "2018-03-19";

watson_options! {
    /// Options for `classify`; an image file or a URL is required
    pub struct ClassifyOptions {
        required {}
        optional {
            /// Image or zip archive of images
            images_file: FileUpload,
            /// Image URL
            url: String,
            /// Minimum score of returned classes
            threshold: f64,
            /// `IBM`, `me` or both
            owners: Vec<String>,
            /// Classifiers to apply
            classifier_ids: Vec<String>,
            /// Language of class names (`Accept-Language`)
            accept_language: String,
        }
    }
}

watson_options! {
    /// Options for `detect_faces`; an image file or a URL is required
    pub struct DetectFacesOptions {
        required {}
        optional {
            /// Image or zip archive of images
            images_file: FileUpload,
            /// Image URL
            url: String,
        }
    }
}

watson_options! {
    /// Options for `create_classifier`
    ///
    /// At least two example sets are required: two positive classes, or one
    /// positive class and the negative examples.
    pub struct CreateClassifierOptions {
        required {
            /// Classifier name
            name: String,
        }
        optional {
            /// Zip archives of positive examples keyed by class name
            positive_examples: BTreeMap<String, FileUpload>,
            /// Zip archive of negative examples
            negative_examples: FileUpload,
        }
    }
}

impl CreateClassifierOptions {
    /// Add the positive examples of one class
    pub fn add_positive_examples(mut self, class: impl Into<String>, examples: FileUpload) -> Self {
        self.positive_examples
            .get_or_insert_with(BTreeMap::new)
            .insert(class.into(), examples);
        self
    }
}

watson_options! {
    /// Options for `list_classifiers`
    pub struct ListClassifiersOptions {
        required {}
        optional {
            /// Return full classifier details
            verbose: bool,
        }
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
    /// Options for `update_classifier`
    pub struct UpdateClassifierOptions {
        required {
            /// Classifier ID
            classifier_id: String,
        }
        optional {
            /// Zip archives of positive examples keyed by class name
            positive_examples: BTreeMap<String, FileUpload>,
            /// Zip archive of negative examples
            negative_examples: FileUpload,
        }
    }
}

impl UpdateClassifierOptions {
    /// Add the positive examples of one class
    pub fn add_positive_examples(mut self, class: impl Into<String>, examples: FileUpload) -> Self {
        self.positive_examples
            .get_or_insert_with(BTreeMap::new)
            .insert(class.into(), examples);
        self
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

watson_options! {
    /// Options for `get_core_ml_model`
    pub struct GetCoreMlModelOptions {
        required {
            /// Classifier ID
            classifier_id: String,
        }
        optional {}
    }
}

watson_options! {
    /// Options for `delete_user_data`
    pub struct DeleteUserDataOptions {
        required {
            /// Customer ID whose data is deleted
            customer_id: String,
        }
        optional {}
    }
}

/// Multipart parts for a set of training examples
fn example_fields(
    positive_examples: Option<BTreeMap<String, FileUpload>>,
    negative_examples: Option<FileUpload>,
) -> Vec<MultipartField> {
    let mut fields = Vec::new();
    for (class, examples) in positive_examples.unwrap_or_default() {
        let part = format!("{}_positive_examples", class);
        let filename = format!("{}.zip", part);
        fields.push(MultipartField::file(
            part,
            examples.with_defaults(&filename, "application/octet-stream"),
        ));
    }
    if let Some(examples) = negative_examples {
        fields.push(MultipartField::file(
            "negative_examples",
            examples.with_defaults("negative_examples.zip", "application/octet-stream"),
        ));
    }
    fields
}

/// Watson Visual Recognition client
pub struct VisualRecognitionClient {
    base: BaseService,
}

impl VisualRecognitionClient {
    /// Create a client from a configuration; a version date is required
    pub fn new(config: WatsonConfig) -> Result<Self> {
        Ok(Self {
            base: BaseService::new(config, true)?,
        })
    }

    /// Create a client that authenticates through a caller-supplied authenticator
    pub fn with_authenticator(config: WatsonConfig, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        Ok(Self {
            base: BaseService::with_authenticator(config, true, authenticator)?,
        })
    }

    /// Create a client from environment variables or `VCAP_SERVICES`
    pub fn from_env() -> Result<Self> {
        let mut config = WatsonConfig::from_env(SERVICE_NAME, VCAP_LABEL, DEFAULT_URL)?;
        if config.version.is_none() {
            config.version = Some(DEFAULT_VERSION.to_string());
        }
        Self::new(config)
    }

    /// Configuration pointing at the default endpoint
    pub fn default_config(version: &str) -> WatsonConfig {
        WatsonConfig::new(SERVICE_NAME, DEFAULT_URL).version(version)
    }

    /// Classify images with built-in or custom classifiers
    pub async fn classify(&self, options: ClassifyOptions) -> Result<DetailedResponse<ClassifiedImages>> {
        if options.images_file.is_none() && options.url.is_none() {
            return Err(ServiceError::validation("Either images_file or url must be provided"));
        }

        let mut fields = Vec::new();
        if let Some(file) = options.images_file {
            fields.push(MultipartField::file(
                "images_file",
                file.with_defaults("images_file", "application/octet-stream"),
            ));
        }
        if let Some(url) = options.url {
            fields.push(MultipartField::text("url", url));
        }
        if let Some(threshold) = options.threshold {
            fields.push(MultipartField::text("threshold", threshold.to_string()));
        }
        if let Some(owners) = options.owners.filter(|o| !o.is_empty()) {
            fields.push(MultipartField::text("owners", owners.join(",")));
        }
        if let Some(ids) = options.classifier_ids.filter(|ids| !ids.is_empty()) {
            fields.push(MultipartField::text("classifier_ids", ids.join(",")));
        }

        let request = self
            .base
            .request(Method::POST, "/v3/classify", &[])?
            .accept("application/json")
            .header_opt("Accept-Language", options.accept_language.as_ref())
            .headers(&options.headers)
            .multipart(fields);

        self.base.execute(request).await
    }

    /// Detect faces in images
    pub async fn detect_faces(&self, options: DetectFacesOptions) -> Result<DetailedResponse<DetectedFaces>> {
        if options.images_file.is_none() && options.url.is_none() {
            return Err(ServiceError::validation("Either images_file or url must be provided"));
        }

        let mut fields = Vec::new();
        if let Some(file) = options.images_file {
            fields.push(MultipartField::file(
                "images_file",
                file.with_defaults("images_file", "application/octet-stream"),
            ));
        }
        if let Some(url) = options.url {
            fields.push(MultipartField::text("url", url));
        }

        let request = self
            .base
            .request(Method::POST, "/v3/detect_faces", &[])?
            .accept("application/json")
            .headers(&options.headers)
            .multipart(fields);

        self.base.execute(request).await
    }

    /// Train a custom classifier
    pub async fn create_classifier(&self, options: CreateClassifierOptions) -> Result<DetailedResponse<Classifier>> {
        require_non_empty("name", &options.name)?;

        let positive = options.positive_examples.as_ref().map_or(0, BTreeMap::len);
        let negative = usize::from(options.negative_examples.is_some());
        if positive == 0 || positive + negative < 2 {
            return Err(ServiceError::validation(
                "At least two example sets are required: two positive classes, or one positive class and negative examples",
            ));
        }

        let mut fields = vec![MultipartField::text("name", options.name)];
        fields.extend(example_fields(options.positive_examples, options.negative_examples));

        let request = self
            .base
            .request(Method::POST, "/v3/classifiers", &[])?
            .accept("application/json")
            .headers(&options.headers)
            .multipart(fields);

        self.base.execute(request).await
    }

    /// List custom classifiers
    pub async fn list_classifiers(&self, options: ListClassifiersOptions) -> Result<DetailedResponse<Classifiers>> {
        let request = self
            .base
            .request(Method::GET, "/v3/classifiers", &[])?
            .query_opt("verbose", options.verbose)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Get a custom classifier
    pub async fn get_classifier(&self, options: GetClassifierOptions) -> Result<DetailedResponse<Classifier>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v3/classifiers/{classifier_id}",
                &[("classifier_id", options.classifier_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute(request).await
    }

    /// Retrain a custom classifier with more examples
    pub async fn update_classifier(&self, options: UpdateClassifierOptions) -> Result<DetailedResponse<Classifier>> {
        let positive = options.positive_examples.as_ref().map_or(0, BTreeMap::len);
        if positive == 0 && options.negative_examples.is_none() {
            return Err(ServiceError::validation(
                "At least one of positive_examples or negative_examples must be supplied",
            ));
        }

        let fields = example_fields(options.positive_examples, options.negative_examples);

        let request = self
            .base
            .request(
                Method::POST,
                "/v3/classifiers/{classifier_id}",
                &[("classifier_id", options.classifier_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers)
            .multipart(fields);

        self.base.execute(request).await
    }

    /// Delete a custom classifier
    pub async fn delete_classifier(&self, options: DeleteClassifierOptions) -> Result<DetailedResponse<()>> {
        let request = self
            .base
            .request(
                Method::DELETE,
                "/v3/classifiers/{classifier_id}",
                &[("classifier_id", options.classifier_id.as_str())],
            )?
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute_empty(request).await
    }

    /// Download the Core ML model of a classifier
    pub async fn get_core_ml_model(&self, options: GetCoreMlModelOptions) -> Result<DetailedResponse<Vec<u8>>> {
        let request = self
            .base
            .request(
                Method::GET,
                "/v3/classifiers/{classifier_id}/core_ml_model",
                &[("classifier_id", options.classifier_id.as_str())],
            )?
            .accept("application/octet-stream")
            .headers(&options.headers);

        self.base.execute_bytes(request).await
    }

    /// Delete all data associated with a customer ID
    pub async fn delete_user_data(&self, options: DeleteUserDataOptions) -> Result<DetailedResponse<()>> {
        require_non_empty("customer_id", &options.customer_id)?;

        let request = self
            .base
            .request(Method::DELETE, "/v3/user_data", &[])?
            .query("customer_id", &options.customer_id)
            .accept("application/json")
            .headers(&options.headers);

        self.base.execute_empty(request).await
    }
}

impl ServiceClient for VisualRecognitionClient {
    fn base(&self) -> &BaseService {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseService {
        &mut self.base
    }
}
