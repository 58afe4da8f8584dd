use clap::{Parser, Subcommand};
use log::info;
use rand::seq::SliceRandom;
use rs_wordle_approx::*;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

/// Wordle AI that ranks guesses by approximately evaluating how they split the possible answers.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[arg(short = 'f', long)]
    words_file: String,

    /// Maximum number of (input word, answer word) pairs computed per evaluation.
    #[arg(long, default_value_t = 1_000_000)]
    word_pair_limit: usize,

    /// Sample size of answer words used when the input words must be sampled too.
    #[arg(long, default_value_t = 1_000)]
    candidate_samplesize: usize,

    /// Criterion the AI uses to pick its own guesses.
    #[arg(long, default_value = "mean_entropy")]
    decision_metric: Criterion,

    /// Bonus given to words that may still be the answer when the AI picks a guess.
    #[arg(long, default_value_t = 0.3)]
    candidate_weight: f64,

    /// Strength of the AI in [0, 10].
    #[arg(long, default_value_t = 5.0)]
    strength: f64,

    /// Seed for the random number generator.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of suggestions to print.
    #[arg(short = 'n', long, default_value_t = 20)]
    num_suggest: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the best first guesses.
    Suggest {
        #[arg(long, default_value = "mean_entropy")]
        criterion: Criterion,
    },
    /// Get suggestions and provide feedback from a game you are playing elsewhere.
    Interactive {
        #[arg(long, default_value = "mean_entropy")]
        criterion: Criterion,
    },
    /// Play a game without the AI.
    Play,
    /// Race the AI to guess the same word.
    Challenge {
        #[arg(long, default_value_t = 20)]
        max_round: u32,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let start_time = Instant::now();
    let args = Args::parse();

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let vocabulary = Vocabulary::from_reader(words_reader)?;
    info!(
        "File: {}, {} words of length {}",
        args.words_file,
        vocabulary.len(),
        vocabulary.word_length()
    );

    let mut config = EvaluatorConfig::default()
        .with_word_pair_limit(args.word_pair_limit)
        .with_candidate_samplesize(args.candidate_samplesize)
        .with_decision_metric(args.decision_metric)
        .with_candidate_weight(args.candidate_weight)
        .with_strength(args.strength);
    config.seed = args.seed;
    info!(
        "Word pair limit: {}, answer word sample size: {}",
        config.word_pair_limit, config.candidate_samplesize
    );
    let mut session = Session::new(ApproxEvaluator::new(vocabulary, config)?);

    match args.command {
        Command::Suggest { criterion } => {
            let evaluations = timed("AI evaluation", || {
                session.evaluate(args.num_suggest, criterion)
            })?;
            print_evaluations(&evaluations, criterion);
        }
        Command::Interactive { criterion } => {
            run_interactive(&mut session, args.num_suggest, criterion)?
        }
        Command::Play => run_play(session.evaluator().vocabulary())?,
        Command::Challenge { max_round } => run_challenge(&mut session, max_round)?,
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn timed<T, F: FnOnce() -> T>(label: &str, f: F) -> T {
    let start = Instant::now();
    let result = f();
    info!("{}: {:.3}s", label, start.elapsed().as_secs_f64());
    result
}

fn print_evaluations(evaluations: &[WordEvaluation], criterion: Criterion) {
    println!(
        "* Top {} candidates ordered by {}",
        evaluations.len(),
        criterion
    );
    println!(
        "{:>6}  {:<12} {:>8} {:>8} {:>12}  {}",
        "rank", "word", "max_n", "mean_n", "mean_entropy", "candidate"
    );
    for (index, evaluation) in evaluations.iter().enumerate() {
        println!(
            "{:>6}  {:<12} {:>8} {:>8.3} {:>12.3}  {}",
            index + 1,
            evaluation.word,
            evaluation.max_n,
            evaluation.mean_n,
            evaluation.mean_entropy,
            if evaluation.is_candidate { "*" } else { "" }
        );
    }
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

enum Action {
    Suggest(Option<Criterion>),
    Update(String, String),
    Exit,
}

fn read_action() -> io::Result<Action> {
    loop {
        let input = prompt(
            "\nType:\n  \
             '[s]uggest <criterion>'     to let AI suggest a word (<criterion> is optional)\n  \
             '[u]pdate <word> <result>'  to provide new information\n  \
             '[e]xit'                    to finish the session\n\n\
             where\n  \
             <criterion>  is either 'max_n', 'mean_n', or 'mean_entropy'\n  \
             <result>     is a string of 0 (no match), 1 (partial match), and 2 (exact match)\n\n> ",
        )?;
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(first) = parts.first() else {
            continue;
        };
        match first.chars().next() {
            Some('s') => match parts.get(1) {
                Some(name) => match name.parse::<Criterion>() {
                    Ok(criterion) => return Ok(Action::Suggest(Some(criterion))),
                    Err(e) => println!("{}", e),
                },
                None => return Ok(Action::Suggest(None)),
            },
            Some('u') if parts.len() >= 3 => {
                return Ok(Action::Update(parts[1].to_string(), parts[2].to_string()))
            }
            Some('e') => return Ok(Action::Exit),
            _ => {}
        }
    }
}

fn run_interactive(
    session: &mut Session,
    num_suggest: usize,
    default_criterion: Criterion,
) -> Result<(), Box<dyn Error>> {
    const MAX_SHOWN: usize = 10;
    session.reset();
    loop {
        let candidates = session.candidates();
        match candidates.len() {
            0 => {
                println!("There are no candidate words consistent with the information...");
                break;
            }
            1 => {
                println!("'{}' should be the answer!", candidates[0]);
                break;
            }
            n => {
                let shown: Vec<&str> = candidates
                    .iter()
                    .take(MAX_SHOWN)
                    .map(|word| word.as_ref())
                    .collect();
                let more = if n > MAX_SHOWN { ", ..." } else { "" };
                println!("{} remaining candidates: {}{}", n, shown.join(", "), more);
            }
        }

        match read_action()? {
            Action::Suggest(criterion) => {
                let criterion = criterion.unwrap_or(default_criterion);
                let evaluations =
                    timed("AI evaluation", || session.evaluate(num_suggest, criterion))?;
                print_evaluations(&evaluations, criterion);
            }
            Action::Update(word, result) => {
                if let Err(e) = session.update(&word, &result) {
                    println!("{}", e);
                }
            }
            Action::Exit => break,
        }
    }
    println!("Thank you!");
    Ok(())
}

fn random_answer(vocabulary: &Vocabulary) -> Result<Arc<str>, Box<dyn Error>> {
    vocabulary
        .words()
        .choose(&mut rand::thread_rng())
        .map(Arc::clone)
        .ok_or_else(|| WordleError::EmptyVocabulary.into())
}

/// Reads a guess until it is in the vocabulary. Returns `None` if the player gives up.
fn read_guess(vocabulary: &Vocabulary, message: &str) -> io::Result<Option<String>> {
    loop {
        let input = prompt(message)?;
        if input == "give up" {
            return Ok(None);
        }
        if vocabulary.contains(&input) {
            return Ok(Some(input));
        }
        println!("Invalid word: '{}'", input);
    }
}

fn run_play(vocabulary: &Vocabulary) -> Result<(), Box<dyn Error>> {
    let answer = random_answer(vocabulary)?;
    println!(
        "\nWordle game with {} words. Type your guess, or 'give up' to finish the game.\n",
        vocabulary.len()
    );
    let mut history: Vec<String> = Vec::new();
    for round in 1.. {
        println!("* Round {} *", round);
        let Some(guess) = read_guess(vocabulary, "> ")? else {
            println!("You lose. Answer: '{}'.", answer);
            return Ok(());
        };
        let pattern = judge(&guess, &answer)?;
        history.push(format!("  {}  {}", guess, pattern));
        println!("{}", history.join("\n"));
        if pattern.is_all_correct() {
            println!("Good job! You win! Answer: '{}'", answer);
            break;
        }
    }
    Ok(())
}

fn run_challenge(session: &mut Session, max_round: u32) -> Result<(), Box<dyn Error>> {
    session.reset();
    let vocabulary = session.evaluator().vocabulary().clone();
    let answer = random_answer(&vocabulary)?;
    let blank = " ".repeat(vocabulary.word_length());
    println!(
        "\nWordle game against the AI at strength {}, {} words.\n\
         Type your guess, or 'give up' to finish the game.\n",
        session.evaluator().config().clamped_strength(),
        vocabulary.len()
    );

    let mut info: Vec<String> = Vec::new();
    let mut masked: Vec<String> = Vec::new();
    let mut user_done = false;
    let mut ai_done = false;
    for round in 1..=max_round {
        println!("* Round {} *", round);
        let (ai_word, ai_result) = if ai_done {
            (blank.clone(), blank.clone())
        } else {
            let word = timed("AI thinking", || session.pick_word())?;
            let result = judge(&word, &answer)?.to_string();
            session.update(&word, &result)?;
            (word.to_string(), result)
        };

        let (user_word, user_result) = if user_done {
            (blank.clone(), blank.clone())
        } else {
            let Some(word) = read_guess(&vocabulary, "Your turn > ")? else {
                println!("You lose.");
                break;
            };
            let result = judge(&word, &answer)?.to_string();
            (word, result)
        };

        let hidden = if ai_done {
            ai_word.clone()
        } else {
            "*".repeat(ai_word.len())
        };
        info.push(format!(
            "  {}  {} | {}  {}",
            user_word, user_result, ai_word, ai_result
        ));
        masked.push(format!(
            "  {}  {} | {}  {}",
            user_word, user_result, hidden, ai_result
        ));
        println!("{}", masked.join("\n"));

        let user_wins = user_word == *answer;
        let ai_wins = ai_word == *answer;
        if user_wins && ai_wins {
            println!("Good job! It's a draw.");
            break;
        } else if user_wins {
            println!("{}", if ai_done { "Well done!" } else { "Great job! You win!" });
            user_done = true;
        } else if ai_wins {
            println!("{}", if user_done { "Thanks for waiting." } else { "You lose..." });
            ai_done = true;
        }
        if user_done && ai_done {
            break;
        }
    }
    println!("===============================");
    println!("Answer: '{}'", answer);
    println!("{}", info.join("\n"));
    println!("===============================");
    Ok(())
}
