//! Prompt Loader
//!
//! Loads prompt templates from user override files or falls back to the
//! embedded defaults, then renders them with Handlebars.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::embedded;
use crate::domain::TripContext;

/// Context for rendering prompt templates
///
/// Built from a TripContext with the rendering defaults already applied, so
/// no template ever sees an empty placeholder.
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    pub destination: String,
    pub month: String,
    pub duration_days: u32,
    pub group_size: String,
    pub budget: String,
    pub holiday_type: String,
    pub comments: String,
    /// Itinerary excerpt, when one has been generated
    pub itinerary: Option<String>,
    /// Pre-formatted recent conversation block (chat prompt only)
    pub recent_history: Option<String>,
    /// The current user question (chat prompt only)
    pub question: Option<String>,
}

impl PromptContext {
    /// Build a context from trip preferences
    pub fn from_trip(trip: &TripContext) -> Self {
        debug!(destination = %trip.destination_display(), "PromptContext::from_trip: called");
        Self {
            destination: trip.destination_display().to_string(),
            month: trip.month_display(),
            duration_days: trip.duration_days,
            group_size: trip.group_display().to_string(),
            budget: trip.budget.to_string(),
            holiday_type: trip.holiday_type.to_string(),
            comments: trip.comments.trim().to_string(),
            itinerary: None,
            recent_history: None,
            question: None,
        }
    }

    /// Attach an itinerary excerpt
    pub fn with_itinerary(mut self, excerpt: impl Into<String>) -> Self {
        let excerpt = excerpt.into();
        if !excerpt.trim().is_empty() {
            self.itinerary = Some(excerpt);
        }
        self
    }

    /// Attach a pre-formatted recent conversation block
    pub fn with_history(mut self, history: impl Into<String>) -> Self {
        let history = history.into();
        if !history.trim().is_empty() {
            self.recent_history = Some(history);
        }
        self
    }

    /// Attach the current user question
    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory (`.tripweaver/prompts/`)
    user_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a new prompt loader rooted at the given directory
    ///
    /// Overrides are read from `{root}/.tripweaver/prompts/{name}.pmt` when
    /// that directory exists; everything else uses the embedded defaults.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let user_dir = root.as_ref().join(".tripweaver/prompts");
        let user_dir_exists = user_dir.exists();
        debug!(?user_dir, %user_dir_exists, "PromptLoader::new: called");

        Self {
            hbs: Self::engine(),
            user_dir: if user_dir_exists { Some(user_dir) } else { None },
        }
    }

    /// Create a loader that only uses embedded prompts (for testing)
    pub fn embedded_only() -> Self {
        debug!("PromptLoader::embedded_only: called");
        Self {
            hbs: Self::engine(),
            user_dir: None,
        }
    }

    fn engine() -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        // Prompts are plain text, not HTML
        hbs.register_escape_fn(handlebars::no_escape);
        hbs
    }

    /// Load a template by name
    ///
    /// Checks in order:
    /// 1. User override: `.tripweaver/prompts/{name}.pmt`
    /// 2. Embedded fallback
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "PromptLoader::load_template: called");
        if let Some(ref user_dir) = self.user_dir {
            let path = user_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "PromptLoader::load_template: found user override");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read user prompt {}: {}", path.display(), e));
            }
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!(%name, "PromptLoader::load_template: using embedded");
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &PromptContext) -> Result<String> {
        debug!(%template_name, destination = %context.destination, "PromptLoader::render: called");
        let template = self.load_template(template_name)?;

        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }

    /// The shared system prompt for the planning agents
    pub fn system_prompt(&self) -> Result<String> {
        self.load_template("system")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BudgetTier, Month};

    fn lisbon_trip() -> TripContext {
        TripContext {
            destination: "Lisbon".to_string(),
            month: Some(Month::June),
            duration_days: 5,
            group_size: "2".to_string(),
            budget: BudgetTier::MidRange,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_itinerary_with_trip_fields() {
        let loader = PromptLoader::embedded_only();
        let ctx = PromptContext::from_trip(&lisbon_trip());

        let prompt = loader.render("itinerary", &ctx).unwrap();
        assert!(prompt.contains("Lisbon"));
        assert!(prompt.contains("June"));
        assert!(prompt.contains("5-day"));
        assert!(prompt.contains("mid-range"));
    }

    #[test]
    fn test_render_applies_defaults_for_missing_fields() {
        let loader = PromptLoader::embedded_only();
        let ctx = PromptContext::from_trip(&TripContext::default());

        let prompt = loader.render("weather", &ctx).unwrap();
        assert!(prompt.contains("your destination"));
        assert!(prompt.contains("your travel dates"));
    }

    #[test]
    fn test_render_chat_with_history_and_question() {
        let loader = PromptLoader::embedded_only();
        let ctx = PromptContext::from_trip(&lisbon_trip())
            .with_history("User: hi\nYou: hello...")
            .with_question("Where's good for dinner?");

        let prompt = loader.render("chat", &ctx).unwrap();
        assert!(prompt.contains("Recent conversation:"));
        assert!(prompt.contains("Where's good for dinner?"));
        // No HTML escaping of apostrophes in prompt text
        assert!(!prompt.contains("&#x27;"));
    }

    #[test]
    fn test_chat_omits_empty_history_block() {
        let loader = PromptLoader::embedded_only();
        let ctx = PromptContext::from_trip(&lisbon_trip()).with_question("Is it safe?");

        let prompt = loader.render("chat", &ctx).unwrap();
        assert!(!prompt.contains("Recent conversation:"));
    }

    #[test]
    fn test_user_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let override_dir = dir.path().join(".tripweaver/prompts");
        std::fs::create_dir_all(&override_dir).unwrap();
        std::fs::write(override_dir.join("weather.pmt"), "Custom weather for {{destination}}").unwrap();

        let loader = PromptLoader::new(dir.path());
        let ctx = PromptContext::from_trip(&lisbon_trip());
        let prompt = loader.render("weather", &ctx).unwrap();
        assert_eq!(prompt, "Custom weather for Lisbon");
    }

    #[test]
    fn test_unknown_template() {
        let loader = PromptLoader::embedded_only();
        assert!(loader.load_template("nonexistent-template").is_err());
    }
}
