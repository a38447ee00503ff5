use anthropic_response::V1MessagesResponse;
use anyhow::Result;
use std::io::Write;

/// Writes the response content array as JSON, one line.
pub fn print_content(writer: &mut impl Write, response: &V1MessagesResponse) -> Result<()> {
    serde_json::to_writer(&mut *writer, &response.content)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
