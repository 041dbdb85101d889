use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use clap::Parser;
use log::LevelFilter;

/// Base58 encoder and decoder
#[derive(Parser)]
struct Opts {
    /// Log level (off, error, warn, info, debug, trace)
    #[clap(long, default_value = "warn", global = true)]
    log_level: LevelFilter,

    #[clap(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    Encode(Encode),
    Decode(Decode),
}

/// Encode raw bytes as Base58 text
#[derive(Parser)]
struct Encode {
    /// Read from file instead of stdin
    #[clap(long)]
    input: Option<PathBuf>,
}

impl Encode {
    fn execute(&self) -> Result<(), Error> {
        let data = read_input(self.input.as_deref())?;
        let encoded = limb58::encode(&data).context("failed to encode input")?;
        log::debug!("encoded {} bytes into {} characters", data.len(), encoded.len());
        println!("{}", encoded);
        Ok(())
    }
}

/// Decode Base58 text into raw bytes
#[derive(Parser)]
struct Decode {
    /// Read from file instead of stdin
    #[clap(long)]
    input: Option<PathBuf>,
    /// Print decoded bytes as hexadecimal
    #[clap(long)]
    hex: bool,
}

impl Decode {
    fn execute(&self) -> Result<(), Error> {
        let text = read_input(self.input.as_deref())?;
        let decoded = limb58::decode(&text).context("failed to decode input")?;
        log::debug!("decoded {} characters into {} bytes", text.len(), decoded.len());
        let mut stdout = io::stdout().lock();
        if self.hex {
            writeln!(stdout, "{}", hex::encode(&decoded))?;
        } else {
            stdout.write_all(&decoded)?;
        }
        stdout.flush()?;
        Ok(())
    }
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>, Error> {
    match path {
        Some(path) => {
            log::info!("reading {}", path.display());
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        },
        None => {
            log::info!("reading stdin");
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data).context("failed to read stdin")?;
            Ok(data)
        },
    }
}

fn configure_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] {}",
                record.target(),
                record.level(),
                record.args(),
            )
        })
        .filter(None, level)
        .init();
}

fn main() -> Result<(), Error> {
    let opts: Opts = Opts::parse();
    configure_logger(opts.log_level);

    match opts.subcmd {
        SubCommand::Encode(cmd) => cmd.execute(),
        SubCommand::Decode(cmd) => cmd.execute(),
    }
}
