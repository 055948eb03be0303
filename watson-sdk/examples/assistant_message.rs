//! Assistant Conversation Example
//!
//! Sends a few turns to an Assistant workspace, carrying the context from
//! one turn to the next.
//!
//! To run this example:
//! ```
//! ASSISTANT_APIKEY=your_api_key WORKSPACE_ID=your_workspace cargo run --example assistant_message
//! ```

use watson_sdk::assistant::{Context, MessageOptions};
use watson_sdk::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let workspace_id = match std::env::var("WORKSPACE_ID") {
        Ok(id) => id,
        Err(_) => {
            eprintln!("Please set the WORKSPACE_ID environment variable");
            std::process::exit(1);
        }
    };

    let assistant = watson_sdk::assistant_client()?;

    let mut context = Context::default();
    for input in ["Hello", "Turn on the lights", "Thanks, goodbye"] {
        println!("> {}", input);

        let options = MessageOptions::new(workspace_id.as_str())
            .input(input)
            .context(context.clone());
        let response = assistant.message(options).await?.into_result();

        if let Some(intent) = response.intents.first() {
            println!("  [intent: {} ({:.2})]", intent.intent, intent.confidence);
        }
        for text in &response.output.text {
            println!("< {}", text);
        }

        context = response.context;
    }

    Ok(())
}
