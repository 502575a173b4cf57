//! Prompt Composer
//!
//! Renders the embedded templates into a [`PromptPair`]. Rendering does no
//! I/O; the only failure source is a broken template.

use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::embedded;

/// Errors raised while preparing a prompt
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt template not found: {0}")]
    Missing(String),

    #[error("Failed to compile prompt template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Failed to render prompt template: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// The two instructions sent to the provider, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

#[derive(Serialize)]
struct BoostContext<'a> {
    idea: &'a str,
}

#[derive(Serialize)]
struct GenerateContext<'a> {
    domain: &'a str,
    keywords: Option<&'a str>,
    style: &'a str,
}

/// Style used when the caller leaves it blank
pub const DEFAULT_STYLE: &str = "creative";

/// Compiles and renders prompt templates
pub struct PromptComposer {
    hbs: Handlebars<'static>,
}

impl PromptComposer {
    /// Compile every embedded template
    pub fn new() -> Result<Self, PromptError> {
        let mut hbs = Handlebars::new();
        // Ideas are plain text headed to an LLM, not HTML.
        hbs.register_escape_fn(handlebars::no_escape);

        for name in embedded::TEMPLATE_NAMES {
            let template = embedded::get_embedded(name).ok_or_else(|| PromptError::Missing(name.to_string()))?;
            hbs.register_template_string(name, template)?;
        }

        Ok(Self { hbs })
    }

    /// Long-form action-plan prompt with the idea substituted verbatim
    pub fn boost(&self, idea: &str) -> Result<PromptPair, PromptError> {
        debug!(idea_len = idea.len(), "boost: called");
        Ok(PromptPair {
            system: self.hbs.render("boost-system", &())?,
            user: self.hbs.render("boost-user", &BoostContext { idea })?,
        })
    }

    /// Short creative prompt; the keyword clause is dropped when blank
    pub fn generate(&self, domain: &str, keywords: &str, style: &str) -> Result<PromptPair, PromptError> {
        debug!(%domain, %keywords, %style, "generate: called");
        let keywords = keywords.trim();
        let style = style.trim();
        let context = GenerateContext {
            domain: domain.trim(),
            keywords: (!keywords.is_empty()).then_some(keywords),
            style: if style.is_empty() { DEFAULT_STYLE } else { style },
        };

        Ok(PromptPair {
            system: self.hbs.render("generate-system", &())?,
            user: self.hbs.render("generate-user", &context)?,
        })
    }
}
