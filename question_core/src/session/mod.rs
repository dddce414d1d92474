//! Game sessions and the engine interface that drives them.
//!
//! A session moves through `Routing -> Scoring -> Guessing -> Finished`. The
//! engine borrows the ontology and bucket index read-only, so any number of
//! independent sessions can share them.

use noun_ontology::{BucketIndex, NounId, Ontology};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::candidates::{prune, CandidateSet};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::guess::{conclude, Outcome};
use crate::question::{Question, ScoredQuestion};
use crate::router::RoutingTree;
use crate::scorer::best_question;

/// Unique identifier for game sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Answering the fixed opening questions.
    Routing,
    /// Adaptive questions over the candidate set.
    Scoring,
    /// Ready for the final guess.
    Guessing,
    /// Outcome decided.
    Finished,
}

/// What the engine wants to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum NextStep {
    /// Ask this question.
    Ask(ScoredQuestion),
    /// Only one noun is left.
    SingleCandidate(NounId),
    /// No noun matches the answers.
    NoCandidates,
    /// Candidates remain but no question tells them apart.
    NoDiscriminatingQuestion,
    /// The question budget is spent.
    BudgetExhausted,
}

/// State of one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    phase: Phase,
    questions_asked: u32,
    budget: u32,
    bucket: Option<String>,
    candidates: CandidateSet,
    last_question: Option<ScoredQuestion>,
    outcome: Option<Outcome>,
}

impl GameSession {
    fn new(budget: u32) -> Self {
        Self {
            id: SessionId::new(),
            phase: Phase::Routing,
            questions_asked: 0,
            budget,
            bucket: None,
            candidates: CandidateSet::new(),
            last_question: None,
            outcome: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Questions answered so far, router questions included.
    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn remaining_questions(&self) -> u32 {
        self.budget.saturating_sub(self.questions_asked)
    }

    /// Bucket chosen by the router, once routing is done.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// The question most recently handed out and not yet answered.
    pub fn last_question(&self) -> Option<&ScoredQuestion> {
        self.last_question.as_ref()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }
}

/// Drives sessions over a shared, read-only ontology.
#[derive(Debug, Clone)]
pub struct GameEngine<'a> {
    ontology: &'a Ontology,
    buckets: &'a BucketIndex,
    tree: RoutingTree,
    config: EngineConfig,
}

impl<'a> GameEngine<'a> {
    /// Create an engine using the standard routing tree.
    pub fn new(ontology: &'a Ontology, buckets: &'a BucketIndex, config: EngineConfig) -> Self {
        Self {
            ontology,
            buckets,
            tree: RoutingTree::standard(),
            config,
        }
    }

    /// Replace the routing tree.
    pub fn with_tree(mut self, tree: RoutingTree) -> Self {
        self.tree = tree;
        self
    }

    pub fn tree(&self) -> &RoutingTree {
        &self.tree
    }

    pub fn ontology(&self) -> &'a Ontology {
        self.ontology
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a new game.
    ///
    /// The budget must cover the longest route through the tree, so routing
    /// alone can never spend more than the budget.
    pub fn initialize_session(&self) -> Result<GameSession, EngineError> {
        if self.ontology.is_empty() {
            return Err(EngineError::EmptyOntology);
        }
        let depth = self.tree.max_depth();
        if (self.config.question_budget as usize) < depth {
            return Err(EngineError::BudgetBelowRouterDepth {
                budget: self.config.question_budget,
                depth,
            });
        }

        let session = GameSession::new(self.config.question_budget);
        info!(session = %session.id, budget = session.budget, "session started");
        Ok(session)
    }

    /// Route a complete opening answer sequence and seed the candidate set.
    ///
    /// Router answers count against the question budget. On `EmptyBucket` the
    /// session stays in `Routing` untouched, so the caller can route again.
    pub fn route_initial<'s>(
        &self,
        session: &'s mut GameSession,
        answers: &[bool],
    ) -> Result<(&'static str, &'s CandidateSet), EngineError> {
        session.expect_phase(Phase::Routing)?;
        let route = self.tree.route(answers)?;
        self.enter_bucket(session, route.bucket, route.consumed)?;
        Ok((route.bucket, &session.candidates))
    }

    /// Seed the candidate set from a bucket reached after `answered` router questions.
    ///
    /// Used directly when the router is walked one answer at a time.
    pub fn enter_bucket<'s>(
        &self,
        session: &'s mut GameSession,
        bucket: &str,
        answered: usize,
    ) -> Result<&'s CandidateSet, EngineError> {
        session.expect_phase(Phase::Routing)?;

        let (candidates, unknown) = CandidateSet::from_bucket(self.buckets.nouns(bucket), self.ontology);
        if !unknown.is_empty() {
            warn!(bucket, dropped = unknown.len(), "bucket lists nouns missing from the ontology");
        }
        if candidates.is_empty() {
            return Err(EngineError::EmptyBucket {
                bucket: bucket.to_string(),
            });
        }

        // capped so a caller-supplied count cannot overrun the budget
        let answered = u32::try_from(answered).unwrap_or(u32::MAX);
        session.questions_asked = session
            .questions_asked
            .saturating_add(answered)
            .min(session.budget);
        session.bucket = Some(bucket.to_string());
        session.candidates = candidates;
        session.phase = Phase::Scoring;

        info!(
            session = %session.id,
            bucket,
            candidates = session.candidates.len(),
            asked = session.questions_asked,
            "routing complete"
        );
        Ok(&session.candidates)
    }

    /// Decide the next step of a scoring round.
    ///
    /// Anything other than [`NextStep::Ask`] moves the session to `Guessing`.
    pub fn next_question(&self, session: &mut GameSession) -> Result<NextStep, EngineError> {
        session.expect_phase(Phase::Scoring)?;

        let step = if session.candidates.is_empty() {
            NextStep::NoCandidates
        } else if let Some(noun) = session.candidates.single() {
            NextStep::SingleCandidate(noun.clone())
        } else if session.questions_asked >= session.budget {
            NextStep::BudgetExhausted
        } else {
            match best_question(&session.candidates, self.ontology) {
                Ok(scored) => NextStep::Ask(scored),
                Err(EngineError::NoDiscriminatingQuestion) => NextStep::NoDiscriminatingQuestion,
                Err(e) => return Err(e),
            }
        };

        match &step {
            NextStep::Ask(scored) => {
                session.last_question = Some(scored.clone());
            }
            other => {
                debug!(session = %session.id, step = ?other, "scoring finished");
                session.last_question = None;
                session.phase = Phase::Guessing;
            }
        }

        Ok(step)
    }

    /// Prune the candidates with the player's answer to `question`.
    ///
    /// `question` must be the one last handed out by [`Self::next_question`].
    pub fn apply_answer<'s>(
        &self,
        session: &'s mut GameSession,
        question: &Question,
        answer: bool,
    ) -> Result<&'s CandidateSet, EngineError> {
        session.expect_phase(Phase::Scoring)?;
        match &session.last_question {
            None => return Err(EngineError::NoPendingQuestion),
            Some(pending) if pending.question != *question => {
                return Err(EngineError::UnexpectedQuestion {
                    expected: pending.question.clone(),
                    actual: question.clone(),
                })
            }
            Some(_) => {}
        }

        let before = session.candidates.len();
        session.candidates = prune(&session.candidates, self.ontology, question, answer);
        session.questions_asked = session.questions_asked.saturating_add(1);
        session.last_question = None;

        debug!(
            session = %session.id,
            question = ?question,
            answer,
            before,
            after = session.candidates.len(),
            asked = session.questions_asked,
            "answer applied"
        );
        Ok(&session.candidates)
    }

    /// Make the final guess. Callable once, after scoring has finished.
    pub fn finalize<R: Rng + ?Sized>(
        &self,
        session: &mut GameSession,
        rng: &mut R,
    ) -> Result<Outcome, EngineError> {
        session.expect_phase(Phase::Guessing)?;

        let outcome = conclude(&session.candidates, rng);
        session.phase = Phase::Finished;
        session.outcome = Some(outcome.clone());

        info!(
            session = %session.id,
            outcome = ?outcome,
            asked = session.questions_asked,
            "session finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RouterNode;
    use noun_ontology::NounRecord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single_bucket_tree() -> RoutingTree {
        RoutingTree::new(vec![RouterNode::Leaf { bucket: "all" }]).unwrap()
    }

    fn example_ontology() -> Ontology {
        Ontology::from_records([
            (NounId::from("A"), NounRecord::new().with_category("cat1")),
            (NounId::from("B"), NounRecord::new()),
            (NounId::from("C"), NounRecord::new().with_category("cat1")),
        ])
    }

    fn bucket_of_all(ontology: &Ontology) -> BucketIndex {
        BucketIndex::new().with_bucket("all", ontology.noun_ids().into_iter().cloned())
    }

    /// Nouns n0..n(2^bits) where noun i has property "p{k}" for each set bit k.
    fn binary_ontology(bits: u32) -> Ontology {
        Ontology::from_records((0..1u32 << bits).map(|i| {
            let mut record = NounRecord::new();
            for k in 0..bits {
                if i & (1 << k) != 0 {
                    record = record.with_property(format!("p{k}"));
                }
            }
            (NounId::new(format!("n{i:02}")), record)
        }))
    }

    /// Play a whole game, answering truthfully about `secret`.
    fn play(engine: &GameEngine<'_>, session: &mut GameSession, secret: &NounId) -> Outcome {
        let record = engine.ontology().get(secret).unwrap().clone();
        loop {
            match engine.next_question(session).unwrap() {
                NextStep::Ask(scored) => {
                    let answer = scored.question.holds_for(&record);
                    engine.apply_answer(session, &scored.question, answer).unwrap();
                }
                _ => break,
            }
        }
        engine
            .finalize(session, &mut StdRng::seed_from_u64(3))
            .unwrap()
    }

    #[test]
    fn test_empty_ontology_rejected() {
        let ontology = Ontology::default();
        let buckets = BucketIndex::new();
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default());

        assert_eq!(engine.initialize_session().unwrap_err(), EngineError::EmptyOntology);
    }

    #[test]
    fn test_new_session_state() {
        let ontology = example_ontology();
        let buckets = bucket_of_all(&ontology);
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default());

        let session = engine.initialize_session().unwrap();
        assert_eq!(session.phase(), Phase::Routing);
        assert_eq!(session.questions_asked(), 0);
        assert_eq!(session.budget(), 20);
        assert!(session.candidates().is_empty());
        assert!(session.bucket().is_none());
    }

    #[test]
    fn test_example_game_answer_no() {
        let ontology = example_ontology();
        let buckets = bucket_of_all(&ontology);
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default())
            .with_tree(single_bucket_tree());

        let mut session = engine.initialize_session().unwrap();
        let (bucket, candidates) = engine.route_initial(&mut session, &[]).unwrap();
        assert_eq!(bucket, "all");
        assert_eq!(candidates.len(), 3);

        let scored = match engine.next_question(&mut session).unwrap() {
            NextStep::Ask(scored) => scored,
            other => panic!("expected a question, got {other:?}"),
        };
        assert_eq!(scored, ScoredQuestion::new(2, Question::category("cat1")));
        assert_eq!(session.last_question(), Some(&scored));

        engine.apply_answer(&mut session, &scored.question, false).unwrap();
        assert_eq!(session.questions_asked(), 1);
        assert!(session.last_question().is_none());

        assert_eq!(
            engine.next_question(&mut session).unwrap(),
            NextStep::SingleCandidate(NounId::from("B"))
        );
        assert_eq!(session.phase(), Phase::Guessing);

        let outcome = engine
            .finalize(&mut session, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(outcome, Outcome::Win(NounId::from("B")));
        assert!(session.is_finished());
        assert_eq!(session.outcome(), Some(&outcome));
    }

    #[test]
    fn test_example_game_answer_yes() {
        let ontology = example_ontology();
        let buckets = bucket_of_all(&ontology);
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default())
            .with_tree(single_bucket_tree());

        let mut session = engine.initialize_session().unwrap();
        engine.route_initial(&mut session, &[]).unwrap();
        engine.next_question(&mut session).unwrap();

        let remaining = engine
            .apply_answer(&mut session, &Question::category("cat1"), true)
            .unwrap();
        let names: Vec<_> = remaining.iter().map(NounId::as_str).collect();
        assert_eq!(names, vec!["A", "C"]);

        // A and C share every attribute
        assert_eq!(
            engine.next_question(&mut session).unwrap(),
            NextStep::NoDiscriminatingQuestion
        );
        let outcome = engine
            .finalize(&mut session, &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert!(matches!(outcome, Outcome::Exhausted { remaining: 2, .. }));
    }

    #[test]
    fn test_router_answers_count_against_budget() {
        let ontology = Ontology::from_records([
            (NounId::from("dog"), NounRecord::new().with_property("barks")),
            (NounId::from("cat"), NounRecord::new()),
        ]);
        let buckets = BucketIndex::new().with_bucket("animals", [NounId::from("dog"), NounId::from("cat")]);
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default());

        let mut session = engine.initialize_session().unwrap();
        let (bucket, _) = engine
            .route_initial(&mut session, &[true, false, true])
            .unwrap();

        assert_eq!(bucket, "animals");
        assert_eq!(session.bucket(), Some("animals"));
        assert_eq!(session.questions_asked(), 3);
        assert_eq!(session.remaining_questions(), 17);
        assert_eq!(session.phase(), Phase::Scoring);
    }

    #[test]
    fn test_empty_bucket_is_recoverable() {
        let ontology = example_ontology();
        let buckets = BucketIndex::new()
            .with_bucket("people", [NounId::from("nobody")])
            .with_bucket("places", [NounId::from("A")]);
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default());

        let mut session = engine.initialize_session().unwrap();
        assert_eq!(
            engine.route_initial(&mut session, &[true, true]).unwrap_err(),
            EngineError::EmptyBucket {
                bucket: "people".to_string()
            }
        );
        assert_eq!(session.phase(), Phase::Routing);
        assert_eq!(session.questions_asked(), 0);

        // Unknown bucket names are empty too
        assert!(matches!(
            engine.route_initial(&mut session, &[true, false, true]),
            Err(EngineError::EmptyBucket { .. })
        ));

        let (bucket, candidates) = engine.route_initial(&mut session, &[false, true]).unwrap();
        assert_eq!(bucket, "places");
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_router_errors_propagate() {
        let ontology = example_ontology();
        let buckets = bucket_of_all(&ontology);
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default());

        let mut session = engine.initialize_session().unwrap();
        assert!(matches!(
            engine.route_initial(&mut session, &[true]),
            Err(EngineError::Router(_))
        ));
    }

    #[test]
    fn test_wrong_phase_is_rejected() {
        let ontology = example_ontology();
        let buckets = bucket_of_all(&ontology);
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default())
            .with_tree(single_bucket_tree());
        let mut session = engine.initialize_session().unwrap();

        assert_eq!(
            engine.next_question(&mut session).unwrap_err(),
            EngineError::InvalidPhase {
                expected: Phase::Scoring,
                actual: Phase::Routing
            }
        );
        assert!(engine
            .finalize(&mut session, &mut StdRng::seed_from_u64(0))
            .is_err());

        engine.route_initial(&mut session, &[]).unwrap();
        assert!(engine.route_initial(&mut session, &[]).is_err());
    }

    #[test]
    fn test_finalize_only_once() {
        let ontology = example_ontology();
        let buckets = bucket_of_all(&ontology);
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default())
            .with_tree(single_bucket_tree());
        let mut session = engine.initialize_session().unwrap();
        engine.route_initial(&mut session, &[]).unwrap();
        engine.next_question(&mut session).unwrap();
        engine.apply_answer(&mut session, &Question::category("cat1"), false).unwrap();
        engine.next_question(&mut session).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        assert!(engine.finalize(&mut session, &mut rng).is_ok());
        assert!(matches!(
            engine.finalize(&mut session, &mut rng),
            Err(EngineError::InvalidPhase { actual: Phase::Finished, .. })
        ));
    }

    #[test]
    fn test_no_candidates_is_forced_loss() {
        // threshold of {1.0} is 1.0, and nothing is strictly above it
        let ontology = Ontology::from_records([
            (NounId::from("pebble"), NounRecord::new().with_metric("weight", 1.0)),
            (NounId::from("shadow"), NounRecord::new()),
        ]);
        let buckets = bucket_of_all(&ontology);
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default())
            .with_tree(single_bucket_tree());
        let mut session = engine.initialize_session().unwrap();
        engine.route_initial(&mut session, &[]).unwrap();

        let scored = match engine.next_question(&mut session).unwrap() {
            NextStep::Ask(scored) => scored,
            other => panic!("expected a question, got {other:?}"),
        };
        assert_eq!(scored.question, Question::metadata("weight", 1.0));
        let remaining = engine
            .apply_answer(&mut session, &scored.question, true)
            .unwrap();
        assert!(remaining.is_empty());

        assert_eq!(engine.next_question(&mut session).unwrap(), NextStep::NoCandidates);
        let outcome = engine
            .finalize(&mut session, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(outcome, Outcome::Loss);
    }

    #[test]
    fn test_budget_exhaustion_guesses_among_remaining() {
        let ontology = binary_ontology(4);
        let buckets = bucket_of_all(&ontology);
        let config = EngineConfig { question_budget: 2 };
        let engine = GameEngine::new(&ontology, &buckets, config).with_tree(single_bucket_tree());
        let mut session = engine.initialize_session().unwrap();
        engine.route_initial(&mut session, &[]).unwrap();

        let outcome = play(&engine, &mut session, &NounId::from("n05"));

        assert_eq!(session.questions_asked(), 2);
        match outcome {
            Outcome::Exhausted { guess, remaining } => {
                assert_eq!(remaining, 4);
                assert!(session.candidates().contains(&guess));
                assert!(session.candidates().contains(&NounId::from("n05")));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_every_secret_is_found_within_budget() {
        let ontology = binary_ontology(5);
        let buckets = bucket_of_all(&ontology);
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default())
            .with_tree(single_bucket_tree());

        for secret in ontology.noun_ids() {
            let mut session = engine.initialize_session().unwrap();
            engine.route_initial(&mut session, &[]).unwrap();

            let outcome = play(&engine, &mut session, secret);

            assert_eq!(outcome, Outcome::Win(secret.clone()));
            // 32 nouns split in halves every round
            assert_eq!(session.questions_asked(), 5);
        }
    }

    #[test]
    fn test_answer_requires_pending_question() {
        let ontology = example_ontology();
        let buckets = bucket_of_all(&ontology);
        let config = EngineConfig { question_budget: 1 };
        let engine = GameEngine::new(&ontology, &buckets, config).with_tree(single_bucket_tree());
        let mut session = engine.initialize_session().unwrap();
        engine.route_initial(&mut session, &[]).unwrap();

        assert_eq!(
            engine
                .apply_answer(&mut session, &Question::category("zzz"), false)
                .unwrap_err(),
            EngineError::NoPendingQuestion
        );
        assert_eq!(session.questions_asked(), 0);
        assert_eq!(session.candidates().len(), 3);
    }

    #[test]
    fn test_answer_must_match_pending_question() {
        let ontology = example_ontology();
        let buckets = bucket_of_all(&ontology);
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default())
            .with_tree(single_bucket_tree());
        let mut session = engine.initialize_session().unwrap();
        engine.route_initial(&mut session, &[]).unwrap();
        engine.next_question(&mut session).unwrap();

        assert_eq!(
            engine
                .apply_answer(&mut session, &Question::property("furry"), true)
                .unwrap_err(),
            EngineError::UnexpectedQuestion {
                expected: Question::category("cat1"),
                actual: Question::property("furry"),
            }
        );
        assert_eq!(session.questions_asked(), 0);

        // the pending question is still answerable, exactly once
        engine.apply_answer(&mut session, &Question::category("cat1"), true).unwrap();
        assert_eq!(
            engine
                .apply_answer(&mut session, &Question::category("cat1"), true)
                .unwrap_err(),
            EngineError::NoPendingQuestion
        );
        assert_eq!(session.questions_asked(), 1);
    }

    #[test]
    fn test_no_answers_accepted_once_budget_is_spent() {
        let ontology = binary_ontology(3);
        let buckets = bucket_of_all(&ontology);
        let config = EngineConfig { question_budget: 1 };
        let engine = GameEngine::new(&ontology, &buckets, config).with_tree(single_bucket_tree());
        let mut session = engine.initialize_session().unwrap();
        engine.route_initial(&mut session, &[]).unwrap();

        let scored = match engine.next_question(&mut session).unwrap() {
            NextStep::Ask(scored) => scored,
            other => panic!("expected a question, got {other:?}"),
        };
        engine.apply_answer(&mut session, &scored.question, true).unwrap();
        assert_eq!(engine.next_question(&mut session).unwrap(), NextStep::BudgetExhausted);

        assert!(engine
            .apply_answer(&mut session, &scored.question, true)
            .is_err());
        assert_eq!(session.questions_asked(), 1);
    }

    #[test]
    fn test_budget_below_router_depth_rejected() {
        let ontology = example_ontology();
        let buckets = bucket_of_all(&ontology);
        let config = EngineConfig { question_budget: 3 };
        let engine = GameEngine::new(&ontology, &buckets, config);

        assert_eq!(
            engine.initialize_session().unwrap_err(),
            EngineError::BudgetBelowRouterDepth { budget: 3, depth: 6 }
        );
    }

    #[test]
    fn test_longest_route_fits_budget() {
        let ontology = Ontology::from_records([
            (NounId::from("vase"), NounRecord::new().with_property("fragile")),
            (NounId::from("coin"), NounRecord::new()),
        ]);
        let buckets = BucketIndex::new().with_bucket("artifacts", [NounId::from("vase"), NounId::from("coin")]);
        let config = EngineConfig { question_budget: 6 };
        let engine = GameEngine::new(&ontology, &buckets, config);
        let mut session = engine.initialize_session().unwrap();

        let (bucket, _) = engine
            .route_initial(&mut session, &[false, false, true, true, false, false])
            .unwrap();
        assert_eq!(bucket, "artifacts");
        assert_eq!(session.questions_asked(), 6);
        assert_eq!(engine.next_question(&mut session).unwrap(), NextStep::BudgetExhausted);

        // an inflated count from a hand-walked route is capped
        let mut other = engine.initialize_session().unwrap();
        engine.enter_bucket(&mut other, "artifacts", 40).unwrap();
        assert_eq!(other.questions_asked(), 6);
    }

    #[test]
    fn test_sessions_are_independent() {
        let ontology = example_ontology();
        let buckets = bucket_of_all(&ontology);
        let engine = GameEngine::new(&ontology, &buckets, EngineConfig::default())
            .with_tree(single_bucket_tree());

        let mut first = engine.initialize_session().unwrap();
        let mut second = engine.initialize_session().unwrap();
        assert_ne!(first.id(), second.id());

        engine.route_initial(&mut first, &[]).unwrap();
        engine.route_initial(&mut second, &[]).unwrap();
        engine.next_question(&mut first).unwrap();
        engine.apply_answer(&mut first, &Question::category("cat1"), true).unwrap();

        assert_eq!(first.candidates().len(), 2);
        assert_eq!(second.candidates().len(), 3);
    }
}
