// Brief polisher trait — swap-ready abstraction.
//
// The external text-generation service sits behind this trait so the rest of
// the pipeline (and the tests) never touch the network directly. The default
// implementation calls the Gemini REST API.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for turning a structured creative brief into a polished prompt.
#[async_trait]
pub trait BriefPolisher: Send + Sync {
    /// Generate the polished prompt text for a creative brief.
    async fn polish(&self, creative_brief: &str) -> Result<String>;
}
