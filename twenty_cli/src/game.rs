//! The interactive game loop.

use anyhow::Result;
use question_core::{
    render_outcome, render_question, EngineError, GameEngine, NextStep, Outcome, RouteStep,
};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::prompt::{Answer, Console};

/// How an interactive game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameReport {
    /// The player quit before the engine guessed.
    Aborted { questions_asked: u32 },

    /// The engine reached an outcome.
    Finished {
        outcome: Outcome,
        /// Whether the guess was right, as confirmed by the player.
        /// `None` when there was no guess to confirm.
        engine_won: Option<bool>,
        questions_asked: u32,
    },
}

/// Play one game on the console.
pub fn play_game<R, W, G>(
    engine: &GameEngine<'_>,
    console: &mut Console<R, W>,
    rng: &mut G,
) -> Result<GameReport>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut session = engine.initialize_session()?;
    console.say("Think of something, and I'll try to guess it.")?;

    let mut cursor = engine.tree().cursor();
    loop {
        match cursor.current() {
            RouteStep::Ask(question) => match console.ask(question)? {
                Answer::Yes => {
                    cursor.answer(true);
                }
                Answer::No => {
                    cursor.answer(false);
                }
                Answer::Abort => {
                    return Ok(GameReport::Aborted {
                        questions_asked: cursor.answered() as u32,
                    })
                }
            },
            RouteStep::Bucket(bucket) => {
                match engine.enter_bucket(&mut session, bucket, cursor.answered()) {
                    Ok(_) => break,
                    Err(EngineError::EmptyBucket { .. }) => {
                        debug!(bucket, "empty bucket, routing again");
                        console.say("I don't know anything like that yet. Let's start over.")?;
                        cursor = engine.tree().cursor();
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    loop {
        let scored = match engine.next_question(&mut session)? {
            NextStep::Ask(scored) => scored,
            _ => break,
        };

        let answer = match console.ask(&render_question(&scored.question))? {
            Answer::Yes => true,
            Answer::No => false,
            Answer::Abort => {
                return Ok(GameReport::Aborted {
                    questions_asked: session.questions_asked(),
                })
            }
        };
        engine.apply_answer(&mut session, &scored.question, answer)?;
    }

    let outcome = engine.finalize(&mut session, rng)?;
    let verdict = render_outcome(&outcome);

    let engine_won = if outcome.guess().is_some() {
        match console.ask(&verdict)? {
            Answer::Yes => {
                console.say("I got it!")?;
                Some(true)
            }
            Answer::No => {
                console.say("You stumped me. You win!")?;
                Some(false)
            }
            Answer::Abort => None,
        }
    } else {
        console.say(&verdict)?;
        None
    };

    Ok(GameReport::Finished {
        outcome,
        engine_won,
        questions_asked: session.questions_asked(),
    })
}
