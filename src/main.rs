//! Digital Odyssey - Entry Point
//!
//! A command-line quiz that keeps questions, salted user credentials and
//! scores in a SQLite database.

use dialoguer::{Input, Password};
use log::info;
use std::io;
use std::process::ExitCode;

use digital_odyssey::auth::CredentialService;
use digital_odyssey::config::AppConfig;
use digital_odyssey::error::AppError;
use digital_odyssey::error::handlers::{error_to_exit_code, handle_error};
use digital_odyssey::quiz::{QuizSession, default_questions};
use digital_odyssey::storage::{Database, QuestionStore, ScoreRecorder};
use digital_odyssey::utils::logging::setup_logging;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            setup_logging("info");
            return fail(AppError::from(e));
        }
    };

    setup_logging(&config.log_level);
    info!("Launching Digital Odyssey...");

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

fn fail(err: AppError) -> ExitCode {
    handle_error(&err);
    ExitCode::from(error_to_exit_code(&err))
}

/// Opens the database, plays one round and closes the database on every path.
fn run(config: &AppConfig) -> Result<(), AppError> {
    let db = Database::open(&config.database_path())?;
    let outcome = play_round(&db, config);
    let closed = db.close();
    outcome?;
    closed?;
    Ok(())
}

fn play_round(db: &Database, config: &AppConfig) -> Result<(), AppError> {
    if let Err(e) = QuestionStore::new(db).seed_if_empty(default_questions()) {
        handle_error(&AppError::from(e));
    }

    let username: String = Input::new()
        .with_prompt("Enter your username")
        .interact_text()?;
    let password = Password::new()
        .with_prompt("Enter your password")
        .interact()?;

    let service = CredentialService::new(db, config.credentials.clone());
    if !service.login(&username, &password) {
        println!("User not found. Registering new user.");
        if !service.register(&username, &password) {
            return Err(AppError::RegistrationFailed(username));
        }
    }

    {
        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        QuizSession::new(db).play(&username, &mut input, &mut output)?;
    }

    match ScoreRecorder::new(db).scores_for(&username) {
        Ok(entries) => {
            if let Some(best) = entries.iter().map(|e| e.score).max() {
                println!("Your best score so far: {}", best);
            }
        }
        Err(e) => handle_error(&AppError::from(e)),
    }

    Ok(())
}
