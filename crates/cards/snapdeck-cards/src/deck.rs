//! Stacked deck ordering and the carousel setup of the wallet screen.

use log::debug;
use snapdeck_carousel_core::{Axis, Carousel, CarouselConfig, SlideLayout};

use crate::card::CardRecord;
use crate::error::{CardsError, Result};

/// Cards in carousel order with the initially shown card.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardDeck {
    cards: Vec<CardRecord>,
    first_item: usize,
}

impl CardDeck {
    /// Deck in payload order, starting on the first card.
    pub fn new(cards: Vec<CardRecord>) -> Self {
        Self {
            cards,
            first_item: 0,
        }
    }

    /// Reverse the payload and start on the last card, so payload card 0 is
    /// the one on top of the stack.
    pub fn stacked(mut cards: Vec<CardRecord>) -> Self {
        cards.reverse();
        let first_item = cards.len().saturating_sub(1);
        debug!("stacked deck of {} cards, first={first_item}", cards.len());
        Self { cards, first_item }
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn first_item(&self) -> usize {
        self.first_item
    }

    /// Card at a carousel data index, e.g. the one reported by before-snap.
    pub fn card(&self, index: usize) -> Result<&CardRecord> {
        self.cards.get(index).ok_or(CardsError::IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Vertical stack carousel of the wallet screen: cards `card_size` tall in
    /// a `slider_size` viewport, spaced by `card_offset`, scroll locked while
    /// snapping and no fading of inactive cards.
    pub fn carousel_config(&self, card_size: f32, slider_size: f32, card_offset: f32) -> CarouselConfig {
        let mut cfg = CarouselConfig::new(card_size, slider_size);
        cfg.axis = Axis::Vertical;
        cfg.layout = SlideLayout::Stack;
        cfg.layout_card_offset = card_offset;
        cfg.first_item = self.first_item;
        cfg.inactive_slide_opacity = 1.0;
        cfg.lock_scroll_while_snapping = true;
        cfg
    }

    /// Unmounted carousel over this deck.
    pub fn carousel(&self, card_size: f32, slider_size: f32, card_offset: f32) -> Result<Carousel> {
        let cfg = self.carousel_config(card_size, slider_size, card_offset);
        Ok(Carousel::new(cfg, self.cards.len())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack_starts_at_zero() {
        let deck = CardDeck::stacked(Vec::new());
        assert!(deck.is_empty());
        assert_eq!(deck.first_item(), 0);
        assert!(matches!(
            deck.card(0),
            Err(CardsError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn invalid_sizes_surface_as_carousel_errors() {
        let deck = CardDeck::default();
        assert!(matches!(
            deck.carousel(0.0, 100.0, 10.0),
            Err(CardsError::Carousel(_))
        ));
    }
}
