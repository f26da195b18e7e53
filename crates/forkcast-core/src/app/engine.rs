//! Decision engine: fairness-selection logic for the two session rounds.
//!
//! The engine is a pure computation over its inputs plus one injected
//! capability (a [`RandomSource`]). Each round is a single synchronous call:
//! validate, draw, and hand the result back. The cuisine round additionally
//! returns the [`SessionState`] the caller must thread into the restaurant
//! round.

use crate::domain::{DecisionError, Participant, Policy, RoundOutcome, SessionState, SuggestionList};
use crate::ports::RandomSource;

/// Result of the cuisine round: the outcome, plus the session state the
/// caller owns and passes into [`DecisionEngine::decide_restaurant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuisineDecision {
    pub outcome: RoundOutcome,
    pub session: SessionState,
}

/// The two-round decision engine.
///
/// Generic over its random source so production uses the thread RNG while
/// tests drive every probabilistic branch deterministically.
#[derive(Debug)]
pub struct DecisionEngine<R: RandomSource> {
    random: R,
}

impl<R: RandomSource> DecisionEngine<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Decide the cuisine round.
    ///
    /// Fails with [`DecisionError::NoSuggestions`] when both lists are
    /// empty; on success the returned session records the policy, the
    /// decider (`None` under the random policy) and the winning cuisine.
    pub fn decide_cuisine(
        &mut self,
        list_a: &SuggestionList,
        list_b: &SuggestionList,
        policy: Policy,
    ) -> Result<CuisineDecision, DecisionError> {
        let outcome = self.decide_round(list_a, list_b, policy, None)?;
        let session = SessionState::new(
            policy,
            outcome.decider.map(|info| info.who),
            outcome.winner.clone(),
        );
        Ok(CuisineDecision { outcome, session })
    }

    /// Decide the restaurant round, given the cuisine round's session.
    ///
    /// Under the serial policy the decider alternates away from the cuisine
    /// round's decider when there was one; otherwise a fresh coin flip
    /// assigns it. This round is terminal and mutates nothing.
    pub fn decide_restaurant(
        &mut self,
        list_a: &SuggestionList,
        list_b: &SuggestionList,
        policy: Policy,
        session: &SessionState,
    ) -> Result<RoundOutcome, DecisionError> {
        self.decide_round(list_a, list_b, policy, Some(session))
    }

    fn decide_round(
        &mut self,
        list_a: &SuggestionList,
        list_b: &SuggestionList,
        policy: Policy,
        prior: Option<&SessionState>,
    ) -> Result<RoundOutcome, DecisionError> {
        if list_a.is_empty() && list_b.is_empty() {
            return Err(DecisionError::NoSuggestions);
        }

        match policy {
            Policy::Random => {
                // One uniform draw over A's items followed by B's. The order
                // is fixed so a seeded source yields a reproducible winner;
                // it has no fairness impact.
                let union: Vec<&str> = list_a.iter().chain(list_b.iter()).collect();
                let index = self.index_below(union.len());
                let winner = *union.get(index).ok_or(DecisionError::NoSuggestions)?;
                Ok(RoundOutcome::random_draw(winner))
            }
            Policy::Serial => {
                let decider = self.serial_decider(prior);
                let (own, alt) = match decider {
                    Participant::User1 => (list_a, list_b),
                    Participant::User2 => (list_b, list_a),
                };
                self.draw_for_decider(own, alt, decider)
            }
        }
    }

    /// Who decides a serial round.
    ///
    /// Turn alternation: when the prior round used the serial policy and
    /// recorded a decider, the other participant decides now, so neither
    /// participant decides both rounds. Without such a record (first round,
    /// or prior round was random) it is a fresh 50/50 flip.
    fn serial_decider(&mut self, prior: Option<&SessionState>) -> Participant {
        match prior {
            Some(session) if session.policy == Policy::Serial => match session.decider {
                Some(previous) => previous.other(),
                None => self.flip_coin(),
            },
            _ => self.flip_coin(),
        }
    }

    /// Draw from the decider's own list, falling back to the other list
    /// when the decider has no suggestions. The recorded decider stays the
    /// original one either way: fallback is not a re-delegation.
    fn draw_for_decider(
        &mut self,
        own: &SuggestionList,
        alt: &SuggestionList,
        decider: Participant,
    ) -> Result<RoundOutcome, DecisionError> {
        match self.draw_from(own) {
            Some(winner) => Ok(RoundOutcome::decided_by(winner, decider)),
            None => {
                let winner = self.draw_from(alt).ok_or(DecisionError::NoSuggestions)?;
                Ok(RoundOutcome::fallback(winner, decider))
            }
        }
    }

    fn draw_from<'a>(&mut self, list: &'a SuggestionList) -> Option<&'a str> {
        if list.is_empty() {
            return None;
        }
        list.get(self.index_below(list.len()))
    }

    fn flip_coin(&mut self) -> Participant {
        if self.random.next_unit() < 0.5 {
            Participant::User1
        } else {
            Participant::User2
        }
    }

    /// Uniform index in `[0, len)`. `next_unit` never returns 1.0, so the
    /// floor stays in range; the clamp only guards float edge cases.
    fn index_below(&mut self, len: usize) -> usize {
        ((self.random.next_unit() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ScriptedSource, SeededSource};
    use rstest::rstest;
    use std::collections::HashMap;

    fn list(items: &[&str]) -> SuggestionList {
        SuggestionList::from_items(items.iter().copied())
    }

    fn engine(values: &[f64]) -> DecisionEngine<ScriptedSource> {
        DecisionEngine::new(ScriptedSource::new(values.to_vec()))
    }

    #[rstest]
    #[case::random(Policy::Random)]
    #[case::serial(Policy::Serial)]
    fn both_lists_empty_is_a_validation_error(#[case] policy: Policy) {
        let mut engine = engine(&[0.5]);
        let err = engine
            .decide_cuisine(&list(&[]), &list(&[]), policy)
            .unwrap_err();
        assert_eq!(err, DecisionError::NoSuggestions);
    }

    #[rstest]
    #[case::random(Policy::Random)]
    #[case::serial(Policy::Serial)]
    fn restaurant_round_validates_too(#[case] policy: Policy) {
        let mut engine = engine(&[0.5]);
        let err = engine
            .decide_restaurant(&list(&[]), &list(&[]), policy, &SessionState::default())
            .unwrap_err();
        assert_eq!(err, DecisionError::NoSuggestions);
    }

    #[test]
    fn random_draw_indexes_into_the_ordered_union() {
        // Union is [Thai, Sushi, Pizza]; 0.5 * 3 = 1.5 -> index 1.
        let mut engine = engine(&[0.5]);
        let decision = engine
            .decide_cuisine(&list(&["Thai", "Sushi"]), &list(&["Pizza"]), Policy::Random)
            .unwrap();
        assert_eq!(decision.outcome.winner, "Sushi");
        assert!(decision.outcome.decider.is_none());
        assert_eq!(decision.session.policy, Policy::Random);
        assert_eq!(decision.session.decider, None);
        assert_eq!(decision.session.cuisine, "Sushi");
    }

    #[test]
    fn random_draw_near_one_picks_the_last_element() {
        let mut engine = engine(&[0.999_999]);
        let decision = engine
            .decide_cuisine(&list(&["Thai", "Sushi"]), &list(&["Pizza"]), Policy::Random)
            .unwrap();
        assert_eq!(decision.outcome.winner, "Pizza");
    }

    #[rstest]
    #[case::user1_decides(0.2, Participant::User1, "Thai")]
    #[case::user2_decides(0.8, Participant::User2, "Pizza")]
    fn serial_coin_flip_selects_the_decider_and_their_list(
        #[case] coin: f64,
        #[case] decider: Participant,
        #[case] winner: &str,
    ) {
        let mut engine = engine(&[coin, 0.0]);
        let decision = engine
            .decide_cuisine(&list(&["Thai"]), &list(&["Pizza"]), Policy::Serial)
            .unwrap();
        assert_eq!(decision.outcome.winner, winner);
        let info = decision.outcome.decider.unwrap();
        assert_eq!(info.who, decider);
        assert!(!info.via_fallback);
        assert_eq!(decision.session.decider, Some(decider));
    }

    #[test]
    fn empty_decider_list_falls_back_without_re_delegating() {
        // Coin 0.2 empowers user1, whose list is empty: the draw comes from
        // user2's list but the outcome still records user1.
        let mut engine = engine(&[0.2, 0.0]);
        let decision = engine
            .decide_cuisine(&list(&[]), &list(&["Sushi"]), Policy::Serial)
            .unwrap();
        assert_eq!(decision.outcome.winner, "Sushi");
        let info = decision.outcome.decider.unwrap();
        assert_eq!(info.who, Participant::User1);
        assert!(info.via_fallback);
        assert_eq!(decision.session.decider, Some(Participant::User1));
    }

    #[rstest]
    #[case::user1_then_user2(Participant::User1, "Chipotle", Participant::User2)]
    #[case::user2_then_user1(Participant::User2, "Olive Garden", Participant::User1)]
    fn serial_restaurant_decider_alternates(
        #[case] cuisine_decider: Participant,
        #[case] winner: &str,
        #[case] restaurant_decider: Participant,
    ) {
        let session = SessionState::new(Policy::Serial, Some(cuisine_decider), "Thai");
        // No coin flip is consumed: only the draw index.
        let mut engine = engine(&[0.0]);
        let outcome = engine
            .decide_restaurant(
                &list(&["Olive Garden"]),
                &list(&["Chipotle"]),
                Policy::Serial,
                &session,
            )
            .unwrap();
        assert_eq!(outcome.winner, winner);
        let info = outcome.decider.unwrap();
        assert_eq!(info.who, restaurant_decider);
        assert!(!info.via_fallback);
    }

    #[test]
    fn alternated_decider_with_empty_list_still_falls_back() {
        let session = SessionState::new(Policy::Serial, Some(Participant::User1), "Thai");
        let mut engine = engine(&[0.0]);
        let outcome = engine
            .decide_restaurant(&list(&["Olive Garden"]), &list(&[]), Policy::Serial, &session)
            .unwrap();
        assert_eq!(outcome.winner, "Olive Garden");
        let info = outcome.decider.unwrap();
        assert_eq!(info.who, Participant::User2);
        assert!(info.via_fallback);
    }

    #[test]
    fn random_cuisine_round_forces_a_fresh_restaurant_flip() {
        // Prior session used the random policy, so the scripted coin (0.9)
        // must be consumed and empower user2.
        let session = SessionState::new(Policy::Random, None, "Thai");
        let mut engine = engine(&[0.9, 0.0]);
        let outcome = engine
            .decide_restaurant(
                &list(&["Olive Garden"]),
                &list(&["Chipotle"]),
                Policy::Serial,
                &session,
            )
            .unwrap();
        assert_eq!(outcome.decider.unwrap().who, Participant::User2);
        assert_eq!(outcome.winner, "Chipotle");
    }

    #[test]
    fn uniform_draw_is_fair_across_contributors() {
        // A contributes two of the three items; each item should still win
        // about a third of the time.
        let list_a = list(&["Thai", "Sushi"]);
        let list_b = list(&["Pizza"]);
        let mut engine = DecisionEngine::new(SeededSource::new(7));

        let trials = 30_000;
        let mut wins: HashMap<String, u32> = HashMap::new();
        for _ in 0..trials {
            let decision = engine
                .decide_cuisine(&list_a, &list_b, Policy::Random)
                .unwrap();
            let winner = decision.outcome.winner;
            assert!(list_a.contains(&winner) || list_b.contains(&winner));
            *wins.entry(winner).or_default() += 1;
        }

        assert_eq!(wins.len(), 3);
        for (_, count) in wins {
            let freq = f64::from(count) / trials as f64;
            assert!((freq - 1.0 / 3.0).abs() < 0.01, "freq={freq}");
        }
    }

    #[test]
    fn serial_decider_after_random_round_is_an_even_flip() {
        let session = SessionState::new(Policy::Random, None, "Thai");
        let list_a = list(&["Olive Garden"]);
        let list_b = list(&["Chipotle"]);
        let mut engine = DecisionEngine::new(SeededSource::new(11));

        let trials = 20_000;
        let mut user1_decided = 0u32;
        for _ in 0..trials {
            let outcome = engine
                .decide_restaurant(&list_a, &list_b, Policy::Serial, &session)
                .unwrap();
            if outcome.decider.map(|info| info.who) == Some(Participant::User1) {
                user1_decided += 1;
            }
        }

        let freq = f64::from(user1_decided) / trials as f64;
        assert!((freq - 0.5).abs() < 0.02, "freq={freq}");
    }

    #[test]
    fn serial_draw_is_uniform_within_the_decider_list() {
        let list_a = list(&["Thai", "Sushi", "Ramen", "Pho"]);
        let list_b = list(&[]);
        let mut engine = DecisionEngine::new(SeededSource::new(23));

        let trials = 40_000;
        let mut wins: HashMap<String, u32> = HashMap::new();
        for _ in 0..trials {
            let decision = engine
                .decide_cuisine(&list_a, &list_b, Policy::Serial)
                .unwrap();
            *wins.entry(decision.outcome.winner).or_default() += 1;
        }

        // Whoever the coin empowers, every draw lands in A's list (B is
        // empty), and each of the four items wins about a quarter.
        assert_eq!(wins.len(), 4);
        for (_, count) in wins {
            let freq = f64::from(count) / trials as f64;
            assert!((freq - 0.25).abs() < 0.01, "freq={freq}");
        }
    }

    #[test]
    fn winner_is_always_drawn_from_the_inputs() {
        let list_a = list(&["Thai", "Sushi"]);
        let list_b = list(&["Pizza", "Tacos"]);
        let mut engine = DecisionEngine::new(SeededSource::new(99));

        for _ in 0..5_000 {
            let decision = engine
                .decide_cuisine(&list_a, &list_b, Policy::Serial)
                .unwrap();
            let winner = &decision.outcome.winner;
            assert!(list_a.contains(winner) || list_b.contains(winner));
        }
    }

    #[test]
    fn engine_behavior_depends_only_on_the_normalized_list() {
        // Same seed, same normalized content, different upstream formatting:
        // identical outcomes.
        let noisy_a = SuggestionList::parse("  Thai ,, Sushi , ");
        let clean_a = SuggestionList::from_items(["Thai", "Sushi"]);
        let b = list(&["Pizza"]);

        let mut noisy_engine = DecisionEngine::new(SeededSource::new(5));
        let mut clean_engine = DecisionEngine::new(SeededSource::new(5));
        for _ in 0..100 {
            let from_noisy = noisy_engine.decide_cuisine(&noisy_a, &b, Policy::Random).unwrap();
            let from_clean = clean_engine.decide_cuisine(&clean_a, &b, Policy::Random).unwrap();
            assert_eq!(from_noisy, from_clean);
        }
    }
}
