//! Run one of the example questionnaires and print the answers.
//!
//! ```bash
//! ask --questionnaire coffee --allow-back --allow-skip
//! printf 'Ada\n1\n3\nfun\n' | ask --stdio
//! RUST_LOG=questionnaire=debug ask
//! ```

use clap::{Parser, ValueEnum};
use example_questionnaires::{coffee_order, developer_profile, format_answers};
use questionnaire::{Prompt, StdioTerminal};
use questionnaire_dialoguer::DialoguerTerminal;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Which {
    Developer,
    Coffee,
}

#[derive(Debug, Parser)]
#[command(name = "ask", about = "Answer an example questionnaire on the terminal")]
struct Args {
    /// Which questionnaire to run
    #[arg(long, value_enum, default_value = "developer")]
    questionnaire: Which,

    /// Allow typing `b` to return to the previous question
    #[arg(long)]
    allow_back: bool,

    /// Allow typing `s` to skip a question
    #[arg(long)]
    allow_skip: bool,

    /// Disable colors
    #[arg(long)]
    plain: bool,

    /// Read plain lines from stdin instead of interactive prompts (for piped input)
    #[arg(long)]
    stdio: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(level: &str) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let questions = match args.questionnaire {
        Which::Developer => developer_profile()?,
        Which::Coffee => coffee_order()?,
    };

    let prompt = Prompt::new(questions)
        .allow_back_navigation(args.allow_back)
        .allow_skip(args.allow_skip)
        .with_prelude("Answer the questions below.")
        .with_epilogue("All done!");

    let answers = if args.stdio {
        prompt.run(&mut StdioTerminal::stdin())?
    } else if args.plain {
        prompt.run(&mut DialoguerTerminal::plain())?
    } else {
        prompt.run(&mut DialoguerTerminal::new())?
    };

    println!("{}", format_answers(&answers));
    Ok(())
}
