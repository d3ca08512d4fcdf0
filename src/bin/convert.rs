use clap::Parser;
use std::process::ExitCode;

use grammar_to_json::{
    backends::json::{JsonGenerator, DEFAULT_ENTRYPOINT},
    error::CompileError,
    grammar::{Grammar, Mode, DEFAULT_SAMPLES},
    sampler::{RegexSampler, DEFAULT_MAX_REPEAT},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
enum RegexMode {
    Plain,
    Single,
    Multi,
}

impl std::fmt::Display for RegexMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegexMode::Plain => write!(f, "plain"),
            RegexMode::Single => write!(f, "single"),
            RegexMode::Multi => write!(f, "multi"),
        }
    }
}

impl From<RegexMode> for Mode {
    fn from(mode: RegexMode) -> Self {
        match mode {
            RegexMode::Plain => Mode::Plain,
            RegexMode::Single => Mode::SingleSample,
            RegexMode::Multi => Mode::MultiSample,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grammar in text format
    #[arg(value_name = "GRAMMAR", default_value = "grammar.txt")]
    grammar: String,

    /// Where to write the JSON grammar
    #[arg(short, long, default_value = "grammar.json")]
    output: String,

    /// How tokens starting with 'r' are treated
    #[arg(long, default_value_t = RegexMode::Plain)]
    mode: RegexMode,

    /// Put a literal space between the symbols of every alternative
    #[arg(long, default_value_t = false)]
    spacing: bool,

    /// Number of strings per regex token in multi mode
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Seed for the regex sampler
    #[arg(long)]
    seed: Option<u64>,

    /// Upper bound for unbounded regex repetitions
    #[arg(long, default_value_t = DEFAULT_MAX_REPEAT)]
    max_repeat: u32,

    /// The non-terminal that <start> points to
    #[arg(short, long, default_value = DEFAULT_ENTRYPOINT)]
    entrypoint: String,

    /// Print the compiled grammar to stdout
    #[arg(long, default_value_t = false)]
    print: bool,
}

fn run(args: &Args) -> Result<Grammar, CompileError> {
    let sampler = match args.seed {
        Some(seed) => RegexSampler::seeded(seed),
        None => RegexSampler::from_entropy(),
    };

    let grammar = Grammar::builder()
        .mode(args.mode.into())
        .spacing(args.spacing)
        .samples(args.samples)
        .sampler(sampler.max_repeat(args.max_repeat))
        .text_grammar(&args.grammar)?
        .build();

    JsonGenerator::new()
        .entrypoint(args.entrypoint.as_str())
        .generate(&args.output, &grammar)?;

    Ok(grammar)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(grammar) => {
            if args.print {
                print!("{}", grammar);
            }

            println!(
                "Wrote {} rules with {} alternatives to {}",
                grammar.len(),
                grammar.alternative_count(),
                args.output
            );
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}
