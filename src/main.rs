use anyhow::{Context, Result};
use base32kit::{decode_with, encode, Alphabet, DecodeOptions};
use clap::Parser;
use std::fs::File;
use std::io;
use std::io::{BufReader, BufWriter, Read, Write};
use std::process::ExitCode;

/// Encode or decode RFC 4648 base32.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// File to read; standard input when omitted.
    #[arg()]
    input: Option<String>,

    /// Decode instead of encoding.
    #[arg(short, long, conflicts_with = "encode")]
    decode: bool,

    /// Encode (the default).
    #[arg(short, long)]
    encode: bool,

    /// Use the Extended Hex alphabet (0-9A-V).
    #[arg(short = 'x', long)]
    hex: bool,

    /// Accept unpadded input when decoding.
    #[arg(short, long, requires = "decode")]
    lenient: bool,
}

fn read_input(input: Option<&str>) -> Result<Vec<u8>> {
    let mut reader = match input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("no such file: {}", path))?;
            Box::new(BufReader::new(file)) as Box<dyn Read>
        }
        None => Box::new(BufReader::new(io::stdin())) as Box<dyn Read>,
    };

    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).context("read error")?;
    Ok(buf)
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

fn run(args: &Args) -> Result<()> {
    let alphabet = if args.hex { Alphabet::Hex } else { Alphabet::Standard };
    let input = read_input(args.input.as_deref())?;
    let mut writer = BufWriter::new(io::stdout());

    if args.decode {
        let options = if args.lenient { DecodeOptions::LENIENT } else { DecodeOptions::STRICT };
        let decoded =
            decode_with(strip_line_ending(&input), alphabet, options).context("invalid input")?;
        writer.write_all(&decoded).context("write error")?;
    } else {
        let encoded = encode(&input, alphabet);
        writer.write_all(&encoded).context("write error")?;
        writer.write_all(b"\n").context("write error")?;
    }
    writer.flush().context("write error")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(io::stderr(), "base32kit: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
