use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::info;
use quiz_core::model::{Letter, Question};
use services::{Clock, QuizService, QuizSession};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct Args {
    file: PathBuf,
    shuffle: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--file <questions.json>] [--shuffle]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --file questions.json");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_FILE");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut file = std::env::var("QUIZ_FILE")
            .ok()
            .map_or_else(|| PathBuf::from("questions.json"), PathBuf::from);
        let mut shuffle = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" => {
                    let value = args.next().ok_or(ArgsError::MissingValue { flag: "--file" })?;
                    file = PathBuf::from(value);
                }
                "--shuffle" => shuffle = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { file, shuffle })
    }
}

const BAR_WIDTH: usize = 24;

fn progress_bar(fraction: f64) -> String {
    let filled = ((fraction * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Reads one trimmed line from stdin; `None` on end of input.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn render_question(session: &QuizSession, question: &Question) {
    let progress = session.progress();

    println!();
    println!(
        "Question {} of {}  {}",
        progress.completed + 1,
        progress.total,
        progress_bar(progress.fraction)
    );
    println!("{} — {}", question.subject(), question.topic());
    println!();
    println!("{}", question.text());
    println!();
    for (label, option) in question.choices() {
        println!("  {label}. {option}");
    }
}

fn render_feedback(session: &QuizSession, question: &Question) {
    if session.last_was_correct() == Some(true) {
        println!("Correct!");
    } else {
        println!("Incorrect — correct answer: {}", question.answer());
    }
    println!();
    println!("Explanation:");
    println!("{}", question.explanation());
    if let Some(objective) = question.educational_objective() {
        println!();
        println!("Key Point: {objective}");
    }
}

/// Reads answers until a letter matching one of the listed options comes in.
fn read_answer(
    input: &mut impl BufRead,
    option_count: usize,
) -> io::Result<Option<Letter>> {
    loop {
        let Some(raw) = prompt_line(input, "Your answer: ")? else {
            return Ok(None);
        };

        match raw.to_ascii_uppercase().parse::<Letter>() {
            Ok(letter) if letter.index() < option_count => return Ok(Some(letter)),
            _ => println!("Pick one of the listed options."),
        }
    }
}

fn run_quiz(session: &mut QuizSession, input: &mut impl BufRead) -> io::Result<()> {
    loop {
        if session.is_complete() {
            let Ok(summary) = session.summary() else {
                return Ok(());
            };

            println!();
            println!("Quiz Complete!");
            println!(
                "Final Score: {}/{} ({:.1}%)",
                summary.score(),
                summary.total(),
                summary.percent()
            );

            match prompt_line(input, "[r]estart or [q]uit: ")? {
                Some(choice) if choice.eq_ignore_ascii_case("r") => session.restart(),
                _ => return Ok(()),
            }
            continue;
        }

        let Some(question) = session.current_question().cloned() else {
            return Ok(());
        };

        render_question(session, &question);
        let Some(letter) = read_answer(input, question.options().len())? else {
            return Ok(());
        };
        session.select_answer(letter);
        render_feedback(session, &question);

        if prompt_line(input, "Press Enter for the next question... ")?.is_none() {
            return Ok(());
        }
        session.advance();
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let service = QuizService::new(Clock::default_clock()).with_shuffle(args.shuffle);
    let mut session = service.start(&args.file)?;
    info!(
        "loaded {} questions from {}",
        session.total(),
        args.file.display()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_quiz(&mut session, &mut input)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
