//! Payment card deck shown in a stacked, vertical snapdeck carousel.
//!
//! Cards arrive as the JSON array served by the mock `/cards` endpoint. The
//! deck screen reverses that payload and starts on its last card so the first
//! card of the payload sits on top of the stack.

pub mod card;
pub mod deck;
pub mod error;
pub mod format;

pub use card::{CardNumber, CardRecord, CurrencyType};
pub use deck::CardDeck;
pub use error::{CardsError, Result};
pub use format::{format_amount, mask_card_number};

/// Parse the `/cards` payload.
pub fn parse_cards_json(s: &str) -> Result<Vec<CardRecord>> {
    Ok(serde_json::from_str(s)?)
}
