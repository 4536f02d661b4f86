//! minijinja business card renderer.
//!
//! The template is parsed once when the renderer is built. Rendering only
//! fills in the two fields, it never compiles anything.

use minijinja::{Environment, UndefinedBehavior, context};

use rolodex_core::render::{BUSINESS_CARD_TEMPLATE, BusinessCard, CardRenderer};
use rolodex_types::error::RenderError;

/// `.txt` keeps minijinja's auto-escaping off.
const TEMPLATE_NAME: &str = "business_card.txt";

/// Renders business cards from a precompiled minijinja template.
pub struct TemplateCardRenderer {
    env: Environment<'static>,
}

impl TemplateCardRenderer {
    /// Build a renderer for the standard business card template.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] if the template does not parse.
    /// Callers treat this as a startup failure.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_template(BUSINESS_CARD_TEMPLATE)
    }

    /// Build a renderer for a custom template exposing `name` and `phone`.
    pub fn with_template(source: &'static str) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(TEMPLATE_NAME, source)
            .map_err(|e| RenderError::Template(e.to_string()))?;

        tracing::debug!(template = TEMPLATE_NAME, "compiled business card template");
        Ok(Self { env })
    }
}

impl CardRenderer for TemplateCardRenderer {
    fn render(&self, card: &BusinessCard<'_>) -> Result<String, RenderError> {
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| RenderError::Template(e.to_string()))?;

        template
            .render(context! { name => card.name, phone => card.phone })
            .map_err(|e| RenderError::Render(e.to_string()))
    }
}
