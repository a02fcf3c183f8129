use anyhow::Result;
use snapdeck_cards::{parse_cards_json, CardDeck, CardsError, CurrencyType};
use snapdeck_carousel_core::CarouselEvent;
use snapdeck_test_fixtures::cards;

fn mock_cards() -> Result<Vec<snapdeck_cards::CardRecord>> {
    Ok(parse_cards_json(&cards::json("mock-cards")?)?)
}

#[test]
fn mock_payload_parses() -> Result<()> {
    let cards = mock_cards()?;
    assert_eq!(cards.len(), 4);
    let first = &cards[0];
    assert_eq!(first.name, "Everyday");
    assert_eq!(first.currency_type, CurrencyType::Gbp);
    assert_eq!(first.card_number.as_str(), "4929123456781234");
    assert_eq!(first.card_number.masked(), "############ 1234");
    assert_eq!(first.balance_label(), "£ 12,850");
    assert_eq!(first.friends, vec!["Ava", "Noah", "Mia"]);
    assert_eq!(cards[1].weekly_spending_label(), "$ 1,975.5");
    assert!(cards[2].friends.is_empty());
    Ok(())
}

#[test]
fn unknown_currency_is_rejected() -> Result<()> {
    let err = parse_cards_json(&cards::json("malformed-cards")?).unwrap_err();
    assert!(matches!(err, CardsError::Parse(_)));
    assert!(err.to_string().contains("jpy"));
    Ok(())
}

#[test]
fn stacked_deck_starts_on_the_top_card() -> Result<()> {
    let deck = CardDeck::stacked(mock_cards()?);
    assert_eq!(deck.len(), 4);
    assert_eq!(deck.first_item(), 3);
    assert_eq!(deck.card(3)?.name, "Everyday");
    assert_eq!(deck.card(0)?.name, "Holiday");
    Ok(())
}

#[test]
fn wallet_carousel_reports_the_card_being_snapped_to() -> Result<()> {
    let deck = CardDeck::stacked(mock_cards()?);
    let mut carousel = deck.carousel(240.0, 1200.0, 80.0)?;

    let placed = carousel.mount().scroll_target();
    assert_eq!(placed, Some((720.0, false)));
    carousel.on_scroll(720.0);
    assert_eq!(deck.card(carousel.current_index())?.name, "Everyday");

    let target = carousel.snap_to_prev(true, true).scroll_target();
    assert_eq!(target, Some((480.0, true)));
    let out = carousel.on_scroll(480.0);
    let before = out.events.iter().find_map(|e| match e {
        CarouselEvent::BeforeSnap { index } => Some(*index),
        _ => None,
    });
    assert_eq!(before, Some(2));
    assert_eq!(deck.card(2)?.name, "Travel");
    Ok(())
}
