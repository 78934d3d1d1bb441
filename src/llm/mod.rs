// External prompt polishing — the only long-latency, fallible boundary.
//
// Everything upstream of this module is synchronous and total; the polisher
// call is isolated here behind the BriefPolisher trait, and every failure is
// flattened into a descriptive "ERROR: ..." string so callers never have to
// handle a raw transport error.

pub mod gemini;
pub mod traits;

use self::traits::BriefPolisher;

/// Run the polisher and convert any failure into the fixed error-string
/// convention consumed by renderers.
pub async fn polish_brief(polisher: &dyn BriefPolisher, creative_brief: &str) -> String {
    match polisher.polish(creative_brief).await {
        Ok(text) => text,
        Err(err) => format!("ERROR: {err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;

    struct StubPolisher {
        response: Result<String, String>,
    }

    #[async_trait]
    impl BriefPolisher for StubPolisher {
        async fn polish(&self, _creative_brief: &str) -> Result<String> {
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(msg) => Err(anyhow::anyhow!("{msg}")),
            }
        }
    }

    #[tokio::test]
    async fn success_passes_the_text_through() {
        let polisher = StubPolisher {
            response: Ok("A soaring anthem.".to_string()),
        };
        assert_eq!(polish_brief(&polisher, "brief").await, "A soaring anthem.");
    }

    #[tokio::test]
    async fn failure_becomes_an_error_string() {
        let polisher = StubPolisher {
            response: Err("the service is down".to_string()),
        };
        let result = polish_brief(&polisher, "brief").await;
        assert!(result.starts_with("ERROR: "));
        assert!(result.contains("the service is down"));
    }
}
