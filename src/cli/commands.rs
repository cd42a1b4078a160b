use serde::Serialize;

use crate::app::{AppContext, PlaylinkError, Result};
use crate::domain::{ErrorKind, ExtractOptions, ResolveError};

/// One resolved link, as printed with `--json`.
#[derive(Debug, Serialize)]
struct Report<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

#[derive(Debug, Serialize)]
struct ErrorReport {
    kind: ErrorKind,
    site: String,
    title: String,
    message: String,
}

impl<'a> Report<'a> {
    fn new(input: &'a str, result: &'a std::result::Result<String, ResolveError>) -> Self {
        match result {
            Ok(resolved) => Self {
                input,
                resolved: Some(resolved.as_str()),
                error: None,
            },
            Err(e) => Self {
                input,
                resolved: None,
                error: Some(ErrorReport {
                    kind: e.kind(),
                    site: e.site().to_string(),
                    title: e.title(),
                    message: e.message(),
                }),
            },
        }
    }
}

pub async fn resolve(ctx: &AppContext, urls: Vec<String>, incognito: bool, json: bool) -> Result<()> {
    let options = ExtractOptions {
        depth: 0,
        incognito,
    };
    let total = urls.len();
    let results = ctx.parallel_resolver.resolve_all(urls, options).await;

    let mut failures = 0;
    for (input, result) in &results {
        if result.is_err() {
            failures += 1;
        }

        if json {
            let line = serde_json::to_string(&Report::new(input, result))
                .map_err(|e| PlaylinkError::Other(e.to_string()))?;
            println!("{}", line);
            continue;
        }

        match result {
            Ok(resolved) if total == 1 => println!("{}", resolved),
            Ok(resolved) => println!("{} -> {}", input, resolved),
            Err(e) => eprintln!("error: {}: {}", e.title(), e.message()),
        }
    }

    if failures > 0 {
        return Err(PlaylinkError::Other(format!(
            "{} of {} links could not be resolved",
            failures, total
        )));
    }
    Ok(())
}

pub fn list_rules(ctx: &AppContext) -> Result<()> {
    let registry = ctx.resolver.registry();

    for rule in registry.rules() {
        println!("{}", rule.site());
        for template in rule.templates() {
            println!("  {}", template);
        }
    }

    println!("\n{} rules", registry.len());
    Ok(())
}
