use async_trait::async_trait;
use url::Url;

use crate::domain::Outcome;
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::article;

const SITE: &str = "Melty";

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule::new(SITE, &["*://www.melty.fr/*"], Melty)]
}

struct Melty;

#[async_trait]
impl Extractor for Melty {
    async fn extract(&self, url: &Url, ctx: &ExtractContext<'_>) -> Outcome {
        article::extract(SITE, url, ctx).await
    }
}
