use async_trait::async_trait;
use url::Url;

use crate::domain::Outcome;
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::script;

const SITE: &str = "Vidlox";
const PLAYER_MARKER: &str = "new Clappr.Player";

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule::new(SITE, &["*://vidlox.me/*", "*://vidlox.tv/*"], Vidlox)]
}

/// The stream URL is only written into the inline Clappr setup script.
struct Vidlox;

#[async_trait]
impl Extractor for Vidlox {
    async fn extract(&self, url: &Url, ctx: &ExtractContext<'_>) -> Outcome {
        let doc = match ctx.fetch_document(url).await {
            Ok(doc) => doc,
            Err(e) => return e.into_failure(SITE).into(),
        };

        let source = doc
            .script_texts()
            .iter()
            .filter_map(|text| script::block_after(text, PLAYER_MARKER))
            .find_map(|block| script::first_string(block, "sources"))
            .and_then(|source| doc.url().join(&source).ok());

        match source {
            Some(source) => Outcome::Final(source.into()),
            None => Outcome::NotApplicable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use crate::fetcher::mock::MockFetcher;
    use crate::settings::MemorySettings;
    use crate::sites::testing::{run, run_offline};

    const PAGE: &str = "https://vidlox.me/foo";

    #[tokio::test]
    async fn test_page_without_player() {
        let fetcher = MockFetcher::new().with_body(PAGE, "<html><body><script></script></body></html>");
        let outcome = run(&Vidlox, PAGE, &fetcher, &MemorySettings::new()).await;
        assert_eq!(outcome, Outcome::NotApplicable);
    }

    #[tokio::test]
    async fn test_player_sources() {
        let body = r#"
            <html>
              <body>
                <script>
                    var player = new Clappr.Player({
                        sources: ["https://bar.baz/qux.m3u8","QUUX"]
                    })
                </script>
              </body>
            </html>"#;
        let fetcher = MockFetcher::new().with_body(PAGE, body);
        let outcome = run(&Vidlox, PAGE, &fetcher, &MemorySettings::new()).await;
        assert_eq!(outcome, Outcome::Final("https://bar.baz/qux.m3u8".to_string()));
    }

    #[tokio::test]
    async fn test_sources_outside_player_are_ignored() {
        let body = r#"<script>var ads = { sources: ["https://ads.example/x.mp4"] };</script>"#;
        let fetcher = MockFetcher::new().with_body(PAGE, body);
        let outcome = run(&Vidlox, PAGE, &fetcher, &MemorySettings::new()).await;
        assert_eq!(outcome, Outcome::NotApplicable);
    }

    #[tokio::test]
    async fn test_unreachable_page() {
        let outcome = run_offline(&Vidlox, PAGE).await;
        assert!(matches!(outcome, Outcome::Failure(e) if e.kind() == ErrorKind::NotFound));
    }
}
