use super::*;

#[test]
fn cards_start_hidden() {
    let cards = RevealedCards::default();
    assert!(!cards.is_revealed(0));
}

#[test]
fn revealing_is_sticky() {
    let mut cards = RevealedCards::default();
    assert!(cards.reveal(2));
    assert!(!cards.reveal(2));
    assert!(cards.is_revealed(2));
    assert!(!cards.is_revealed(1));
}

#[test]
fn reducer_keeps_the_same_state_for_repeat_reveals() {
    let first = Rc::new(RevealedCards::default()).reduce(1);
    assert!(first.is_revealed(1));

    let again = first.clone().reduce(1);
    assert!(Rc::ptr_eq(&first, &again));
}

#[test]
fn card_index_from_attribute() {
    assert_eq!(card_index(Some("3".to_string())), Some(3));
    assert_eq!(card_index(Some(" 0 ".to_string())), Some(0));
    assert_eq!(card_index(Some("x".to_string())), None);
    assert_eq!(card_index(None), None);
}

#[test]
fn floating_icons_stagger_by_half_a_second() {
    assert_eq!(float_delay(0), "0s");
    assert_eq!(float_delay(1), "0.5s");
    assert_eq!(float_delay(3), "1.5s");
}
