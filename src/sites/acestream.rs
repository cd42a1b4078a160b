use async_trait::async_trait;
use url::Url;

use crate::domain::Outcome;
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::encode;

const PLUGIN_URL: &str = "plugin://program.plexus/";

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule::new("Ace Stream", &["acestream://*"], AceStream)]
}

/// `acestream://<content id>` links are handed whole to the Plexus add-on.
struct AceStream;

#[async_trait]
impl Extractor for AceStream {
    async fn extract(&self, url: &Url, _ctx: &ExtractContext<'_>) -> Outcome {
        Outcome::plugin(format!("{}?mode=1&name=&url={}", PLUGIN_URL, encode(url.as_str())))
    }
}
