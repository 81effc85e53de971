//! CLI command definitions

use clap::Parser;
use drill_domain::DrillMode;
use std::path::PathBuf;

/// CLI arguments for qa-drill
#[derive(Parser, Debug)]
#[command(name = "qa-drill")]
#[command(author, version, about = "Question/answer drill for the terminal")]
#[command(long_about = r#"
qa-drill reads a sectioned question file and quizzes you on it.

Each subsection starts with a header line (### Verbs by default) and holds
one entry per line, question and answer joined by a separator (";" by
default). Questions are shown one at a time and the answer follows after a
delay, or after you press Return in interactive mode.

Configuration files are loaded from (in priority order):
1. QA_DRILL_* environment variables
2. --config <path>     Explicit config file
3. ./drill.toml        Project-level config
4. ~/.config/qa-drill/config.toml   Global config

Example:
  qa-drill vocabulary.txt -s
  qa-drill vocabulary.txt -l Verbs,Nouns -m linear -n 3
  qa-drill vocabulary.txt -i -r
"#)]
pub struct Cli {
    /// The sectioned question file to drill on
    #[arg(value_name = "FILE", required_unless_present = "show_config")]
    pub file: Option<PathBuf>,

    /// Wait for Return before showing each answer
    #[arg(short, long)]
    pub interactive: bool,

    /// Delay between question and answer, in milliseconds
    #[arg(short = 't', long = "wait", value_name = "MS")]
    pub wait_ms: Option<u64>,

    /// Question order (linear or random)
    #[arg(short, long, value_name = "MODE", value_parser = parse_drill_mode)]
    pub mode: Option<DrillMode>,

    /// List the subsections of the file and exit
    #[arg(short, long)]
    pub summary: bool,

    /// Subsections to drill on, comma separated (all when omitted)
    #[arg(short, long, value_name = "NAME", value_delimiter = ',')]
    pub list: Vec<String>,

    /// Show answers first and reveal the questions
    #[arg(short, long)]
    pub reversed: bool,

    /// Number of passes over the question set
    #[arg(short = 'n', long = "loops", value_name = "LOOPS")]
    pub limit: Option<u32>,

    /// Seed for random question order
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Prefix of a subsection header line
    #[arg(long, value_name = "PREFIX")]
    pub announce: Option<String>,

    /// Separator between question and answer
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and effective settings, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The mode requested on the command line, `-s` taking precedence
    pub fn requested_mode(&self) -> Option<DrillMode> {
        if self.summary {
            Some(DrillMode::Summary)
        } else {
            self.mode
        }
    }
}

/// Accept only the drill orders for `-m`; summary has its own flag
fn parse_drill_mode(s: &str) -> Result<DrillMode, String> {
    let mode: DrillMode = s.parse()?;
    if mode.is_drill() {
        Ok(mode)
    } else {
        Err(format!("'{}' is not a question order, use -s for the summary", s))
    }
}
