//! Command-line interface for Punycode encoding/decoding.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// punycode - Convert between Unicode and Punycode (RFC 3492)
#[derive(Parser, Debug)]
#[command(name = "punycode")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  punycode encode mañana
  punycode decode maana-pta
  punycode ascii mañana.com
  echo xn--maana-pta.com | punycode unicode")]
struct Args {
    /// Log conversion details to stderr (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a Unicode string as Punycode
    Encode {
        /// Strings to convert; reads lines from stdin when omitted
        inputs: Vec<String>,
    },
    /// Decode a Punycode string
    Decode {
        /// Strings to convert; reads lines from stdin when omitted
        inputs: Vec<String>,
    },
    /// Convert a domain or email address to its xn-- form
    Ascii {
        /// Strings to convert; reads lines from stdin when omitted
        inputs: Vec<String>,
    },
    /// Convert xn-- labels of a domain or email address to Unicode
    Unicode {
        /// Strings to convert; reads lines from stdin when omitted
        inputs: Vec<String>,
    },
}

type Converter = fn(&[u8]) -> punycode::Result<String>;

impl Command {
    fn split(&self) -> (&[String], Converter) {
        match self {
            Command::Encode { inputs } => (inputs.as_slice(), punycode::raw::encode as Converter),
            Command::Decode { inputs } => (inputs.as_slice(), punycode::raw::decode),
            Command::Ascii { inputs } => (inputs.as_slice(), punycode::raw::to_ascii),
            Command::Unicode { inputs } => (inputs.as_slice(), punycode::raw::to_unicode),
        }
    }
}

fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("punycode=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (inputs, convert) = args.command.split();

    if !inputs.is_empty() {
        for input in inputs {
            match convert(input.as_bytes()) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("Error converting '{}': {}", input, e);
                    std::process::exit(1);
                }
            }
        }
        return;
    }

    // Read from stdin, one input per line. Lines are kept as bytes so that
    // non-UTF-8 input is reported rather than aborting the read.
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    for line in stdin.lock().split(b'\n') {
        let mut line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                std::process::exit(1);
            }
        };
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        match convert(&line) {
            Ok(output) => {
                let _ = writeln!(stdout, "{}", output);
            }
            Err(e) => {
                eprintln!(
                    "Error converting '{}': {}",
                    String::from_utf8_lossy(&line),
                    e
                );
                std::process::exit(1);
            }
        }
    }
}
