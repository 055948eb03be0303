//! Text to Speech Example
//!
//! Synthesizes a sentence to a WAV file.
//!
//! To run this example:
//! ```
//! TEXT_TO_SPEECH_APIKEY=your_api_key cargo run --example text_to_speech_synthesize -- "Hello world" hello.wav
//! ```

use watson_sdk::error::Result;
use watson_sdk::text_to_speech::{ListVoicesOptions, SynthesizeOptions};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "Hello from Watson".to_string());
    let output = args.next().unwrap_or_else(|| "output.wav".to_string());

    let tts = watson_sdk::text_to_speech_client()?;

    let voices = tts.list_voices(ListVoicesOptions::new()).await?.into_result();
    println!("{} voices available", voices.voices.len());

    let options = SynthesizeOptions::new(text)
        .accept("audio/wav")
        .voice("en-US_AllisonVoice");
    let response = tts.synthesize(options).await?;

    let audio = response.into_result();
    tokio::fs::write(&output, &audio)
        .await
        .map_err(|e| watson_sdk::ServiceError::internal(format!("Failed to write {}: {}", output, e)))?;

    println!("Wrote {} bytes to {}", audio.len(), output);
    Ok(())
}
