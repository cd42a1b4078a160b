//! News articles that carry their video either in a `<video>` element or in
//! an embedded player from another site.

use url::Url;

use crate::domain::Outcome;
use crate::resolver::ExtractContext;

/// Where self-hosted players keep their file, most specific first.
const VIDEO_SOURCES: &[(&str, &str)] = &[
    ("video source[src]", "src"),
    ("video[src]", "src"),
    ("video[data-src]", "data-src"),
];

/// Self-hosted video first, then the first iframe another rule can resolve.
pub(crate) async fn extract(site: &str, url: &Url, ctx: &ExtractContext<'_>) -> Outcome {
    let doc = match ctx.fetch_document(url).await {
        Ok(doc) => doc,
        Err(e) => return e.into_failure(site).into(),
    };

    if let Some(video) = doc.select_first_attr(VIDEO_SOURCES) {
        return Outcome::Final(video.into());
    }

    match doc
        .select_attrs("iframe[src]", "src")
        .into_iter()
        .find(|frame| ctx.is_resolvable(frame))
    {
        Some(frame) => Outcome::Further(frame),
        None => Outcome::Unchanged,
    }
}
