use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use url::Url;

use crate::rules::Rule;
use crate::sites;

/// Ordered, read-only table of rules.
///
/// Lookup walks the rules in registration order, so site-specific rules are
/// registered before generic ones.
#[derive(Debug)]
pub struct Registry {
    rules: Vec<Rule>,
}

impl Registry {
    pub fn new(rules: Vec<Rule>) -> Self {
        debug_assert!(
            duplicate_templates(&rules).is_empty(),
            "templates registered twice: {:?}",
            duplicate_templates(&rules)
        );
        Self { rules }
    }

    /// Every built-in site, built on first use and shared afterwards.
    pub fn builtin() -> Arc<Registry> {
        static BUILTIN: OnceLock<Arc<Registry>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                let registry = Registry::new(sites::rules());
                tracing::debug!("Registered {} rules", registry.len());
                Arc::new(registry)
            })
            .clone()
    }

    /// First rule with a template matching `url`.
    pub fn find_rule(&self, url: &Url) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(url))
    }

    /// Every rule with a template matching `url`, in registration order.
    pub fn matching<'a>(&'a self, url: &'a Url) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules.iter().filter(move |rule| rule.matches(url))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn duplicate_templates(rules: &[Rule]) -> Vec<String> {
    let mut seen = HashSet::new();
    rules
        .iter()
        .flat_map(|rule| rule.templates())
        .filter(|template| !seen.insert(template.as_str().to_string()))
        .map(|template| template.as_str().to_string())
        .collect()
}
