//! Visual Recognition Example
//!
//! Classifies a local image, or a public image URL when no path is given.
//!
//! To run this example:
//! ```
//! VISUAL_RECOGNITION_APIKEY=your_api_key cargo run --example visual_recognition_classify -- fruitbowl.jpg
//! ```

use anyhow::Context;
use watson_sdk::visual_recognition::{ClassifyOptions, VisualRecognitionClient};
use watson_sdk::FileUpload;

const SAMPLE_URL: &str = "https://watson-developer-cloud.github.io/doc-tutorial-downloads/visual-recognition/fruitbowl.jpg";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let client = VisualRecognitionClient::from_env().context("loading Visual Recognition credentials")?;

    let options = match std::env::args().nth(1) {
        Some(path) => {
            let image = FileUpload::from_path(&path)
                .await
                .with_context(|| format!("reading {}", path))?;
            ClassifyOptions::new().images_file(image)
        }
        None => ClassifyOptions::new().url(SAMPLE_URL),
    };

    let classified = client
        .classify(options.threshold(0.6).accept_language("en"))
        .await?
        .into_result();

    for image in classified.images {
        println!("{}", image.image.or(image.source_url).unwrap_or_default());
        for classifier in image.classifiers {
            for class in classifier.classes {
                println!("  {:<30} {:.2}", class.class_name, class.score);
            }
        }
    }

    Ok(())
}
