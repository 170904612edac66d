use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use autocomplete::alphabet::Normalization;
use autocomplete::wordlist::{FileFormat, Wordlist};


/// Load a word list and print the words that start with each prefix.
#[derive(StructOpt)]
struct Cli {
    /// The path to the word list, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Prefixes to complete
    #[structopt(required = true)]
    prefixes: Vec<String>,
    /// Split lines on this character and read the word from --column
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word when --delimiter is set
    #[structopt(short, long, default_value = "0")]
    column: usize,
    /// How to rewrite words before storing them: verbatim, lowercase or letters
    #[structopt(short, long, default_value = "verbatim")]
    normalize: Normalization,
    /// Print at most this many completions per prefix
    #[structopt(short, long)]
    limit: Option<usize>,
    /// Print one JSON object per prefix instead of plain lines
    #[structopt(long)]
    json: bool,
}

impl Cli {
    fn file_format(&self) -> FileFormat {
        match self.delimiter {
            Some(delimiter) => FileFormat::builder()
                .delimiter(delimiter)
                .word_column(self.column)
                .normalization(self.normalize)
                .build(),
            None => FileFormat::builder()
                .normalization(self.normalize)
                .build(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::from_args();

    let (wl, _) = Wordlist::from_file(&args.path, &args.file_format())
        .with_context(|| format!("loading {}", args.path.display()))?;

    for prefix in &args.prefixes {
        // The shell hands us prefixes verbatim; store and query must agree.
        let prefix = args.normalize.apply(prefix);
        let start = Instant::now();
        let completion = wl.complete(&prefix, args.limit);
        info!(prefix = %prefix, found = completion.completions.len(),
              millis = start.elapsed().as_secs_f64() * 1000.0, "completed");

        if args.json {
            println!("{}", serde_json::to_string(&completion)?);
        } else {
            completion.completions.iter().for_each(|w| println!("{}", w));
        }
    }
    Ok(())
}
