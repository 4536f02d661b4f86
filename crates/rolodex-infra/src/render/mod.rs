//! Business card renderers.

pub mod template;

pub use template::TemplateCardRenderer;
