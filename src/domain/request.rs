use url::Url;

/// Caller-facing options of a resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Hops already taken before this call (0 for a fresh resolution).
    pub depth: u32,
    /// Do not send cookies with any request made while resolving.
    pub incognito: bool,
}

impl ExtractOptions {
    pub fn incognito() -> Self {
        Self {
            incognito: true,
            ..Default::default()
        }
    }
}

/// One step of a resolution chain.
///
/// Immutable: the only way to move on is [`ResolutionRequest::hop`], which
/// bumps the depth by one and carries the incognito flag over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    target: Url,
    depth: u32,
    incognito: bool,
}

impl ResolutionRequest {
    pub fn new(target: Url, options: ExtractOptions) -> Self {
        Self {
            target,
            depth: options.depth,
            incognito: options.incognito,
        }
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn incognito(&self) -> bool {
        self.incognito
    }

    /// Request for a URL discovered while resolving this one.
    pub fn hop(&self, next: Url) -> Self {
        Self {
            target: next,
            depth: self.depth + 1,
            incognito: self.incognito,
        }
    }
}
