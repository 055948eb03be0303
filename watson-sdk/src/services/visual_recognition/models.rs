//! Visual Recognition v3 data models

use serde::{Deserialize, Serialize};

/// Error about one image
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ErrorInfo {
    /// HTTP status of the image
    pub code: i64,

    /// Description
    pub description: String,

    /// Error ID
    pub error_id: String,
}

/// Warning about the request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WarningInfo {
    /// Warning ID
    pub warning_id: String,

    /// Description
    pub description: String,
}

/// A class matched in an image
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassResult {
    /// Class name
    #[serde(rename = "class")]
    pub class_name: String,

    /// Confidence between 0 and 1
    pub score: f64,

    /// Hierarchy such as `/fruit/apple/`
    pub type_hierarchy: Option<String>,
}

/// Classes matched by one classifier
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassifierResult {
    /// Classifier name
    pub name: String,

    /// Classifier ID
    pub classifier_id: String,

    /// Matched classes
    #[serde(default)]
    pub classes: Vec<ClassResult>,
}

/// Classification of one image
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassifiedImage {
    /// Source URL, for images given by URL
    pub source_url: Option<String>,

    /// URL after redirects
    pub resolved_url: Option<String>,

    /// File name, for uploaded images
    pub image: Option<String>,

    /// Error for this image
    pub error: Option<ErrorInfo>,

    /// Results per classifier
    #[serde(default)]
    pub classifiers: Vec<ClassifierResult>,
}

/// Response of `classify`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClassifiedImages {
    /// Number of custom classes considered
    pub custom_classes: Option<i64>,

    /// Number of images processed
    pub images_processed: Option<i64>,

    /// Classified images
    #[serde(default)]
    pub images: Vec<ClassifiedImage>,

    /// Warnings
    #[serde(default)]
    pub warnings: Vec<WarningInfo>,
}

/// Estimated age range
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FaceAge {
    /// Lower bound
    pub min: Option<i64>,

    /// Upper bound
    pub max: Option<i64>,

    /// Confidence between 0 and 1
    pub score: f64,
}

/// Estimated gender
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FaceGender {
    /// `MALE` or `FEMALE`
    pub gender: String,

    /// Confidence between 0 and 1
    pub score: f64,
}

/// Bounding box of a face in pixels
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FaceLocation {
    /// Width
    pub width: f64,

    /// Height
    pub height: f64,

    /// Offset from the left edge
    pub left: f64,

    /// Offset from the top edge
    pub top: f64,
}

/// A detected face
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Face {
    /// Age estimate
    pub age: Option<FaceAge>,

    /// Gender estimate
    pub gender: Option<FaceGender>,

    /// Location
    pub face_location: Option<FaceLocation>,
}

/// Faces found in one image
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImageWithFaces {
    /// Faces
    #[serde(default)]
    pub faces: Vec<Face>,

    /// File name, for uploaded images
    pub image: Option<String>,

    /// Source URL, for images given by URL
    pub source_url: Option<String>,

    /// URL after redirects
    pub resolved_url: Option<String>,

    /// Error for this image
    pub error: Option<ErrorInfo>,
}

/// Response of `detect_faces`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DetectedFaces {
    /// Number of images processed
    pub images_processed: Option<i64>,

    /// Images with their faces
    #[serde(default)]
    pub images: Vec<ImageWithFaces>,

    /// Warnings
    #[serde(default)]
    pub warnings: Vec<WarningInfo>,
}

/// A class of a custom classifier
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Class {
    /// Class name
    #[serde(rename = "class")]
    pub class_name: String,
}

/// A custom classifier
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Classifier {
    /// Classifier ID
    pub classifier_id: String,

    /// Name
    pub name: String,

    /// Owner credentials
    pub owner: Option<String>,

    /// `ready`, `training`, `retraining` or `failed`
    pub status: Option<String>,

    /// Whether a Core ML model is available
    pub core_ml_enabled: Option<bool>,

    /// Reason for a failed status
    pub explanation: Option<String>,

    /// Creation time
    pub created: Option<String>,

    /// Classes
    #[serde(default)]
    pub classes: Vec<Class>,

    /// Last retraining time
    pub retrained: Option<String>,

    /// Last update time
    pub updated: Option<String>,
}

/// Response of `list_classifiers`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Classifiers {
    /// Classifiers
    #[serde(default)]
    pub classifiers: Vec<Classifier>,
}
