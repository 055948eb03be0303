//! Natural Language Classifier Example
//!
//! Lists the classifiers of the instance and classifies a phrase with the
//! first available one.
//!
//! To run this example:
//! ```
//! NATURAL_LANGUAGE_CLASSIFIER_APIKEY=your_api_key cargo run --example nlc_classify -- "Will it rain today?"
//! ```

use watson_sdk::error::Result;
use watson_sdk::natural_language_classifier::{
    ClassifyOptions, ListClassifiersOptions, NaturalLanguageClassifierClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let phrase = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "How hot will it be today?".to_string());

    let nlc = NaturalLanguageClassifierClient::from_env()?;

    let classifiers = nlc.list_classifiers(ListClassifiersOptions::new()).await?.into_result();
    let classifier = match classifiers.classifiers.first() {
        Some(classifier) => classifier,
        None => {
            eprintln!("No classifiers found; train one first");
            std::process::exit(1);
        }
    };
    println!("Using classifier {}", classifier.classifier_id);

    let response = nlc
        .classify(ClassifyOptions::new(classifier.classifier_id.as_str(), phrase))
        .await;

    match response {
        Ok(response) => {
            let classification = response.into_result();
            println!("Top class: {}", classification.top_class.unwrap_or_default());
            for class in classification.classes {
                println!("  {:<20} {:.3}", class.class_name, class.confidence);
            }
        }
        Err(e) => {
            eprintln!("Classification failed: {}", e);
            if let Some(body) = e.body() {
                eprintln!("Response body: {}", body);
            }
        }
    }

    Ok(())
}
