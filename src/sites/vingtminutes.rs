use async_trait::async_trait;
use url::Url;

use crate::domain::Outcome;
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::article;

const SITE: &str = "20 Minutes";

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule::new(SITE, &["*://www.20minutes.fr/*/*"], VingtMinutes)]
}

struct VingtMinutes;

#[async_trait]
impl Extractor for VingtMinutes {
    async fn extract(&self, url: &Url, ctx: &ExtractContext<'_>) -> Outcome {
        article::extract(SITE, url, ctx).await
    }
}
