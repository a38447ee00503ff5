use anyhow::Result;
use client::MessagesApi;
use std::io::Write;
use tracing::info;

pub mod output;
pub mod prompt;
pub mod settings;

/// Sends the fixed prompt once and prints the returned content.
pub async fn run<A>(api: &A, out: &mut impl Write) -> Result<()>
where
    A: MessagesApi + Sync,
{
    let request = prompt::build_request();
    info!(
        "Sending holographic filesystem prompt ({} bytes, system {} bytes) to model: {}",
        prompt::HOLOGRAPHIC_ACE_PROMPT.len(),
        request.system.as_ref().map_or(0, |s| s.text().len()),
        request.model
    );

    let response = api.create(&request).await?;
    info!(
        "Received message {} with {} content blocks ({} text bytes)",
        response.id,
        response.content.len(),
        response.text().len()
    );

    output::print_content(out, &response)
}
