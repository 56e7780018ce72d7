use std::{
    io::{stdin, stdout, BufRead, Write},
    num::NonZeroUsize,
    process::ExitCode,
};

use clap::Parser;
use permuter::{
    logging,
    report::{self, Mode},
    Error, Sequence,
};
use tracing::{debug, error, trace};

/// Reads one sequence per line from stdin and prints its next lexicographic permutation.
///
/// Lines are either space separated (`3 1 2`) or bracketed (`[3, 1, 2]`).
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Advance up to N times, printing each arrangement
    #[arg(short = 'n', long, value_name = "N", conflicts_with = "all")]
    steps: Option<NonZeroUsize>,
    /// Print every arrangement up to the last permutation
    #[arg(short, long)]
    all: bool,
    /// Sort each sequence before advancing it
    #[arg(short, long)]
    sort: bool,
    /// Render steps as a table
    #[arg(long)]
    table: bool,
    /// Log more (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn mode(&self) -> Mode {
        match (self.all, self.steps) {
            (true, _) => Mode::All,
            (false, Some(n)) => Mode::Steps(n.get()),
            (false, None) => Mode::Once,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);
    match run(&args, stdin().lock(), stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, input: impl BufRead, mut out: impl Write) -> Result<(), Error> {
    let mode = args.mode();
    debug!(?mode, sort = args.sort, "reading sequences");
    let mut rejected = 0;
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match process_line(&line, args, mode) {
            Ok(rendered) => writeln!(out, "{}", rendered)?,
            Err(Error::Parse(err)) => {
                error!(line = i + 1, "{}", err);
                rejected += 1;
            }
            Err(err) => return Err(err),
        }
    }
    if rejected > 0 {
        return Err(Error::Rejected(rejected));
    }
    Ok(())
}

fn process_line(line: &str, args: &Args, mode: Mode) -> Result<String, Error> {
    let mut sequence = Sequence::parse(line)?;
    if args.sort {
        sequence.sort();
    }
    trace!(%sequence, len = sequence.len(), "advancing");
    let report = report::advance(&mut sequence, mode);
    debug!(
        steps = report.steps.len(),
        exhausted = report.exhausted,
        "advanced"
    );
    Ok(report.render(args.table))
}
