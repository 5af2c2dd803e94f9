/// Markup returned by the rendering service, or a marker that the fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    body: String,
    ok: bool,
}

impl RenderedDocument {
    #[must_use]
    pub fn succeeded(body: String) -> Self {
        Self { body, ok: true }
    }

    #[must_use]
    pub fn failed() -> Self {
        Self {
            body: String::new(),
            ok: false,
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.body.len()
    }
}
