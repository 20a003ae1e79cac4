#[cfg(test)]
mod tests {
    use crate::breakdown::{breakdown, percentage, total_votes};
    use crate::catalog::{self, CIDER_CARD_ID, TOTAL_CARDS, TOTAL_QUESTIONS};
    use crate::models::{AnswerCount, AnswerShare, VoteRequest, VoteResponse};
    use crate::validation::{is_valid_identity_token, validate_vote_request, MAX_IDENTITY_TOKEN_LENGTH};
    use crate::ValidationError;

    fn counts(pairs: &[(&str, i64)]) -> Vec<AnswerCount> {
        pairs
            .iter()
            .map(|&(answer, count)| AnswerCount { answer: answer.to_string(), count })
            .collect()
    }

    fn share_of<'a>(shares: &'a [AnswerShare], answer: &str) -> &'a AnswerShare {
        shares.iter().find(|s| s.answer == answer).unwrap()
    }

    fn request(card_id: Option<&str>, answer: Option<&str>) -> VoteRequest {
        VoteRequest {
            card_id: card_id.map(str::to_string),
            answer: answer.map(str::to_string),
        }
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(3, 3), 100);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(4, 0), 0);
    }

    #[test]
    fn test_two_thirds_split() {
        let shares = breakdown(&counts(&[("A", 2), ("B", 1)]));
        assert_eq!(shares.len(), 2);
        assert_eq!(share_of(&shares, "A"), &AnswerShare { answer: "A".into(), count: 2, percentage: 67 });
        assert_eq!(share_of(&shares, "B"), &AnswerShare { answer: "B".into(), count: 1, percentage: 33 });
        assert_eq!(total_votes(&shares), 3);
    }

    #[test]
    fn test_empty_breakdown() {
        assert!(breakdown(&[]).is_empty());
    }

    #[test]
    fn test_zero_count_answers_are_omitted() {
        let shares = breakdown(&counts(&[("A", 0), ("B", 4)]));
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].answer, "B");
        assert_eq!(shares[0].percentage, 100);
    }

    #[test]
    fn test_independent_rounding_may_not_sum_to_100() {
        let shares = breakdown(&counts(&[("A", 1), ("B", 1), ("C", 1)]));
        let sum: u32 = shares.iter().map(|s| s.percentage).sum();
        assert_eq!(sum, 99);

        let shares = breakdown(&counts(&[("A", 1), ("B", 1), ("C", 1), ("D", 1), ("E", 1), ("F", 1), ("G", 1), ("H", 1)]));
        let sum: u32 = shares.iter().map(|s| s.percentage).sum();
        assert_eq!(sum, 104);
    }

    #[test]
    fn test_breakdown_is_deterministic() {
        let input = counts(&[("A", 5), ("B", 7), ("C", 1)]);
        assert_eq!(breakdown(&input), breakdown(&input));
    }

    #[test]
    fn test_vote_validation() {
        let vote = validate_vote_request(&request(Some("le-cidre"), Some("Autre : ..."))).unwrap();
        assert_eq!(vote.card_id, "le-cidre");
        assert_eq!(vote.answer, "Autre : ...");

        for bad in [
            request(None, Some("A")),
            request(Some("Q1"), None),
            request(Some(""), Some("A")),
            request(Some("Q1"), Some("")),
            request(None, None),
        ] {
            assert_eq!(validate_vote_request(&bad), Err(ValidationError::MissingField));
        }
    }

    #[test]
    fn test_vote_request_wire_format() {
        let parsed: VoteRequest = serde_json::from_str(r#"{"cardId":"le-cidre","answer":"A"}"#).unwrap();
        assert_eq!(parsed, request(Some("le-cidre"), Some("A")));

        let parsed: VoteRequest = serde_json::from_str(r#"{"answer":"A"}"#).unwrap();
        assert_eq!(parsed.card_id, None);

        let body = serde_json::to_value(VoteResponse {
            success: true,
            percentages: vec![AnswerShare { answer: "A".into(), count: 1, percentage: 100 }],
        })
        .unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["percentages"][0]["percentage"], 100);
    }

    #[test]
    fn test_identity_tokens() {
        assert!(is_valid_identity_token("0b9c1f6e-3a4d-4c56-9a1e-2f0d8b7c6a5e"));
        assert!(is_valid_identity_token("legacy_token-42"));
        assert!(!is_valid_identity_token(""));
        assert!(!is_valid_identity_token("has space"));
        assert!(!is_valid_identity_token("semi;colon"));
        assert!(!is_valid_identity_token(&"a".repeat(MAX_IDENTITY_TOKEN_LENGTH + 1)));
    }

    #[test]
    fn test_card_catalog() {
        let cards = catalog::cards();
        assert_eq!(cards.len(), TOTAL_CARDS);
        assert_eq!(cards[0].id, CIDER_CARD_ID);
        assert_eq!(cards.iter().filter(|c| c.clickable).count(), 1);
        assert_eq!(cards.iter().filter(|c| c.earned).count(), 4);
        assert_eq!(cards[4].id, "card-5");
        assert_eq!(cards[TOTAL_CARDS - 1].id, "card-30");
        assert!(cards[4].image.is_none());

        assert_eq!(catalog::find_card("card-3").unwrap().name, "LE TRISKÈLE");
        assert!(catalog::find_card("card-31").is_none());
    }

    #[test]
    fn test_question_catalog() {
        let questions = catalog::questions();
        assert_eq!(questions.len(), TOTAL_QUESTIONS);
        assert_eq!(questions[0].answers.len(), 5);
        assert!(questions[0].text.is_some());
        assert_eq!(questions[1].id, "q-2");
        assert!(questions[1..].iter().all(|q| !q.clickable && q.text.is_none()));

        assert_eq!(catalog::question_for_card(CIDER_CARD_ID).unwrap().id, CIDER_CARD_ID);
        assert!(catalog::question_for_card("card-2").is_none());
    }
}
