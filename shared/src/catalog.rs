//! Hard-coded cards and questions shown on the collection pages.

use crate::models::{Card, Question};

pub const TOTAL_CARDS: usize = 30;
pub const TOTAL_QUESTIONS: usize = 30;

pub const CIDER_CARD_ID: &str = "le-cidre";

const NAMED_CARDS: [(&str, &str, &str); 4] = [
    (CIDER_CARD_ID, "LE CIDRE", "/images/cidre.webp"),
    ("card-2", "L'HERMINE", "/images/hermine.webp"),
    ("card-3", "LE TRISKÈLE", "/images/triskele.webp"),
    ("card-4", "KORRIGAN", "/images/korrigan.webp"),
];

const CIDER_QUESTION: &str = "Le cidre breton devrait-il rester artisanal ou s’industrialiser pour gagner en visibilité internationale ?";

const CIDER_ANSWERS: [&str; 5] = [
    "Préserver un modèle entièrement artisanal",
    "Aller vers une production industrielle assumée",
    "Combiner artisanat et industrie",
    "Prioriser le marché local avant l'international",
    "Autre : ...",
];

pub fn cards() -> Vec<Card> {
    let named = NAMED_CARDS.iter().map(|&(id, name, image)| Card {
        id: id.to_string(),
        name: name.to_string(),
        image: Some(image.to_string()),
        earned: true,
        clickable: id == CIDER_CARD_ID,
    });

    let placeholders = (NAMED_CARDS.len() + 1..=TOTAL_CARDS).map(|n| Card {
        id: format!("card-{}", n),
        name: n.to_string(),
        image: None,
        earned: false,
        clickable: false,
    });

    named.chain(placeholders).collect()
}

pub fn questions() -> Vec<Question> {
    let cider = Question {
        id: CIDER_CARD_ID.to_string(),
        text: Some(CIDER_QUESTION.to_string()),
        answers: CIDER_ANSWERS.iter().map(|a| a.to_string()).collect(),
        clickable: true,
    };

    // Locked placeholders carry neither text nor answers.
    let locked = (2..=TOTAL_QUESTIONS).map(|n| Question {
        id: format!("q-{}", n),
        text: None,
        answers: Vec::new(),
        clickable: false,
    });

    std::iter::once(cider).chain(locked).collect()
}

pub fn find_card(id: &str) -> Option<Card> {
    cards().into_iter().find(|card| card.id == id)
}

/// The poll attached to a card, if the card has one.
pub fn question_for_card(card_id: &str) -> Option<Question> {
    questions()
        .into_iter()
        .find(|question| question.clickable && question.id == card_id)
}
