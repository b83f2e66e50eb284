//! Command line argument parsing for the winnower CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Winnower - clean, tokenize, and prune text corpora for analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "winnower")]
#[command(about = "Clean, tokenize, and prune text corpora for analysis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WinnowerArgs {
    /// Verbosity level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WinnowerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Preprocess a JSONL corpus and attach the processed text to each record
    Process(ProcessArgs),

    /// Print the corpus document-frequency table
    Stats(StatsArgs),
}

/// Stage-1 filtering options shared by subcommands
#[derive(Args, Debug, Clone)]
pub struct FilterOptions {
    /// Record field holding the raw text
    #[arg(long, default_value = "text")]
    pub text_field: String,

    /// Category tags to keep, comma separated. With a morphological
    /// tokenizer these would be POS tags (NNG,NNP,...); the built-in
    /// whitespace tokenizer emits script classes.
    #[arg(long, value_delimiter = ',', default_value = "HANGUL,ALPHANUM")]
    pub tags: Vec<String>,

    /// Newline-delimited stopword file (defaults to the built-in Korean list)
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Minimum token length in characters
    #[arg(long, default_value_t = 2)]
    pub min_token_length: usize,

    /// Keep tokens that consist entirely of digits
    #[arg(long)]
    pub keep_numeric: bool,

    /// Worker threads (defaults to the number of cores)
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Arguments for preprocessing a corpus
#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    /// Input JSONL file, one record per line
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output JSONL file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Field name the processed text is attached under
    #[arg(long, default_value = "processed_text")]
    pub output_field: String,

    #[command(flatten)]
    pub filter: FilterOptions,

    /// Minimum number of documents a form must appear in
    #[arg(long, default_value_t = 1)]
    pub min_doc_frequency: usize,

    /// Maximum proportion of documents a form may appear in
    #[arg(long, default_value_t = 1.0)]
    pub max_doc_frequency_ratio: f64,
}

/// Arguments for printing document-frequency statistics
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Input JSONL file, one record per line
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub filter: FilterOptions,

    /// Only print the N most frequent forms
    #[arg(long)]
    pub top: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = WinnowerArgs::parse_from(["winnower", "stats", "-i", "corpus.jsonl"]);
        assert_eq!(args.verbosity(), 1);

        let args = WinnowerArgs::parse_from(["winnower", "-vv", "stats", "-i", "corpus.jsonl"]);
        assert_eq!(args.verbosity(), 2);

        let args = WinnowerArgs::parse_from(["winnower", "-q", "stats", "-i", "corpus.jsonl"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_tag_list_parsing() {
        let args = WinnowerArgs::parse_from([
            "winnower",
            "process",
            "-i",
            "in.jsonl",
            "--tags",
            "NNG,NNP,VA",
        ]);

        match args.command {
            Command::Process(process) => {
                assert_eq!(process.filter.tags, vec!["NNG", "NNP", "VA"]);
                assert_eq!(process.output_field, "processed_text");
                assert_eq!(process.min_doc_frequency, 1);
            }
            _ => panic!("expected process subcommand"),
        }
    }
}
