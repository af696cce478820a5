//! Quiz session
//!
//! Asks every stored question over a line-based console, scores the answers
//! and records the result.

use log::info;
use std::io::{BufRead, Write};

use crate::error::QuizError;
use crate::quiz::results::QuizSummary;
use crate::storage::{Database, QuestionStore, ScoreRecorder};
use crate::utils::validation::normalize_answer;

pub struct QuizSession<'db> {
    questions: QuestionStore<'db>,
    scores: ScoreRecorder<'db>,
}

impl<'db> QuizSession<'db> {
    pub fn new(db: &'db Database) -> Self {
        Self {
            questions: QuestionStore::new(db),
            scores: ScoreRecorder::new(db),
        }
    }

    /// Runs one full quiz for `username` and records the score.
    ///
    /// End of input marks the remaining questions as incorrect.
    pub fn play<R: BufRead, W: Write>(
        &self,
        username: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<QuizSummary, QuizError> {
        writeln!(output, "Welcome to Digital_Odyssey!")?;

        let questions = self.questions.list()?;
        let mut score = 0u32;
        for question in &questions {
            if ask_question(&question.question, &question.answer, input, output)? {
                score += 1;
            }
        }

        let summary = QuizSummary {
            score,
            total: questions.len() as u32,
        };
        self.scores.record(username, summary.score)?;
        info!(
            "{} finished the quiz with {}/{}",
            username, summary.score, summary.total
        );

        writeln!(output, "You got {} questions correct!", summary.score)?;
        writeln!(output, "You got {:.1}%.", summary.percentage())?;
        Ok(summary)
    }
}

/// Prompts with the question and returns whether the answer matched.
fn ask_question<R: BufRead, W: Write>(
    question: &str,
    correct_answer: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool, QuizError> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    let correct = bytes_read > 0 && normalize_answer(&line) == correct_answer;

    if correct {
        writeln!(output, "Correct!")?;
    } else {
        writeln!(output, "Incorrect!")?;
    }
    Ok(correct)
}
