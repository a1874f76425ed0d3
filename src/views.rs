//! HTML views, compiled into the binary.

use tera::{Context, Tera};

use crate::error::Result;
use crate::youtube::VideoRecord;

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("results.html", include_str!("../templates/results.html")),
    ("embed.html", include_str!("../templates/embed.html")),
];

/// Compiled page templates
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compile the built-in templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    /// Search form
    pub fn home(&self) -> Result<String> {
        Ok(self.tera.render("index.html", &Context::new())?)
    }

    /// Search results, in the order given
    pub fn results(&self, videos: &[VideoRecord]) -> Result<String> {
        let mut context = Context::new();
        context.insert("videos", videos);
        Ok(self.tera.render("results.html", &context)?)
    }

    /// Embedded player for a single video
    pub fn embed(&self, embed_url: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("embed_url", embed_url);
        Ok(self.tera.render("embed.html", &context)?)
    }
}
