use std::path::PathBuf;
use std::process;

use clap::Parser;

use writer::{Input, SplitError, Splitter, Stats};

#[derive(Parser)]
#[command(
    name = "mdsplit",
    version,
    about = "Split markdown files into chapters at headings"
)]
struct Cli {
    /// Input file or folder; use '-' to read from stdin
    input: String,

    /// Maximum heading level to split at
    #[arg(
        short = 'l',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=6)
    )]
    max_level: u8,

    /// Output folder (default: input file stem, or '<folder>_split')
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Encoding of input and output files
    #[arg(short, long, default_value = "utf-8")]
    encoding: String,

    /// Write a toc.md file per split document
    #[arg(short, long)]
    table_of_contents: bool,

    /// Append previous/next navigation footers to chapter files
    #[arg(short, long)]
    navigation: bool,

    /// Write into the output folder even if it already exists
    #[arg(short, long)]
    force: bool,

    /// Print progress for every file
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    match do_run(&cli) {
        Ok(stats) => println!("{}", stats),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn do_run(cli: &Cli) -> Result<Stats, SplitError> {
    let input = Input::locate(&cli.input)?;
    let encoding = writer::encoding::resolve(&cli.encoding)?;
    let out_path = match &cli.output {
        Some(path) => path.clone(),
        None => input.default_output(),
    };

    let splitter = Splitter {
        out_path,
        max_level: cli.max_level,
        encoding,
        table_of_contents: cli.table_of_contents,
        navigation: cli.navigation,
        force: cli.force,
        verbose: cli.verbose,
    };
    splitter.run(&input)
}
