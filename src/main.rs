use clap::Parser;
use dv::config::Cli;
use dv::layouts::KnownLayout;
use dv::stream::transcode_stream;
use dv::{DvError, DvResult, Transcoder};
use std::io::{self, BufWriter};
use std::process;
use tracing::{debug, warn, Level};

fn main() {
    let program = std::env::args().next().unwrap_or_else(|| "dv".to_string());

    // `--help` goes to stdout with status 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => fail(&DvError::InvalidArguments(
            e.render().to_string().trim_end().to_string(),
        )),
    };

    let level = cli.max_level();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level.unwrap_or(Level::WARN))
        .init();
    if level.is_none() {
        warn!("Unknown log level '{}', using warn", cli.log_level);
    }

    if let Err(e) = run(&cli, &program) {
        fail(&e);
    }
}

fn run(cli: &Cli, program: &str) -> DvResult<u64> {
    let (direction, input) = cli.invocation(program)?;
    let codec = Transcoder::from_layouts(KnownLayout::Qwerty, KnownLayout::Dvorak)?;
    debug!("Tables validated: {} key positions", codec.len());
    debug!("Direction: {}, input: {:?}", direction, input);

    let reader = input.open()?;
    let stdout = io::stdout().lock();
    transcode_stream(&codec, direction, reader, BufWriter::new(stdout))
}

fn fail(e: &DvError) -> ! {
    eprintln!("{}", e);
    process::exit(e.exit_code());
}
