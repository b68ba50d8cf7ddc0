//! Interactive chat session
//!
//! Rustyline-driven loop over the chat responder. Slash commands manage the
//! session; everything else is a question about the trip.

use std::sync::Arc;

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::Responder;
use crate::domain::{ConversationLog, ResponseSource, TripContext};
use crate::llm::LlmClient;
use crate::prompts::PromptLoader;

/// Outcome of a slash command
enum SlashResult {
    Continue,
    Quit,
}

/// Interactive Q&A session about a planned trip
pub struct ChatSession {
    responder: Responder,
    trip: TripContext,
    /// Itinerary from a preceding plan run, excerpted into chat prompts
    itinerary: Option<String>,
    log: ConversationLog,
}

impl ChatSession {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        prompts: PromptLoader,
        trip: TripContext,
        itinerary: Option<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            responder: Responder::new(llm, prompts, max_tokens),
            trip,
            itinerary,
            log: ConversationLog::new(),
        }
    }

    /// Run the chat main loop
    pub async fn run(&mut self) -> Result<()> {
        self.print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&format!("{} ", ">".bright_green()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    if input.starts_with('/') {
                        match self.handle_slash_command(input) {
                            SlashResult::Continue => continue,
                            SlashResult::Quit => break,
                        }
                    } else {
                        self.answer(input).await;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C shows a fresh prompt
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D exits
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Safe travels!");
        Ok(())
    }

    /// Answer one question and print the response
    async fn answer(&mut self, question: &str) {
        let outcome = self
            .responder
            .respond(question, &self.trip, self.itinerary.as_deref(), &mut self.log)
            .await;

        println!();
        println!("{}", outcome.entry.response);
        if outcome.entry.source == ResponseSource::Fallback {
            if let Some(category) = outcome.fallback_category {
                println!("{}", format!("(offline tip, {})", category).dimmed());
            }
        }
        println!();
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "TripWeaver Chat".bright_cyan().bold());
        println!(
            "Ask me anything about your trip to {}",
            self.trip.destination_display().bright_yellow()
        );
        println!("Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());
        println!();
    }

    fn handle_slash_command(&mut self, input: &str) -> SlashResult {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "/help" | "/h" => {
                self.print_help();
                SlashResult::Continue
            }
            "/quit" | "/q" | "/exit" => SlashResult::Quit,
            "/clear" | "/c" => {
                self.log.clear();
                println!("{}", "Conversation cleared.".dimmed());
                SlashResult::Continue
            }
            "/trip" => {
                self.print_trip();
                SlashResult::Continue
            }
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
                SlashResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:10} Show this help", "/help".yellow());
        println!("  {:10} Show your trip details", "/trip".yellow());
        println!("  {:10} Clear conversation history", "/clear".yellow());
        println!("  {:10} Exit the chat", "/quit".yellow());
        println!();
    }

    fn print_trip(&self) {
        println!();
        println!("{}", "Your Trip:".bright_cyan());
        println!("  Destination: {}", self.trip.destination_display());
        println!("  When:        {}", self.trip.month_display());
        println!("  Duration:    {} days", self.trip.duration_days);
        println!("  Group:       {} people", self.trip.group_display());
        println!("  Budget:      {}", self.trip.budget);
        println!("  Style:       {}", self.trip.holiday_type);
        if !self.trip.comments.trim().is_empty() {
            println!("  Notes:       {}", self.trip.comments.trim());
        }
        println!();
    }
}
