//! Domain types for TripWeaver
//!
//! TripContext describes the trip being planned; ConversationLog holds the
//! chat history for a session.

mod conversation;
mod trip;

pub use conversation::{ConversationEntry, ConversationLog, ResponseSource};
pub use trip::{BudgetTier, HolidayType, Month, TripContext};
