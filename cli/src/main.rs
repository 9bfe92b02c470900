use clap::{Parser, Subcommand};
use hound::WavSpec;
use log::{error, info};
use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use thiserror::Error;

use pagerwave_core::{
    encode_transmission, PcmModulator, DEFAULT_BAUD_RATE, DEFAULT_SAMPLE_RATE, MAX_ADDRESS,
};

#[derive(Parser)]
#[command(name = "pagerwave")]
#[command(about = "POCSAG pager transmission encoder and PCM modulator")]
struct Cli {
    /// Output sample rate in Hz
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE, global = true)]
    sample_rate: u32,

    /// Transmission baud rate (must divide the 38400 Hz symbol rate)
    #[arg(long, default_value_t = DEFAULT_BAUD_RATE, global = true)]
    baud_rate: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a single message to a WAV audio file
    Encode {
        /// Recipient address (0..=2097151)
        #[arg(value_name = "ADDRESS")]
        address: u32,

        /// Message text (7-bit ASCII)
        #[arg(value_name = "MESSAGE")]
        message: String,

        /// Output WAV file
        #[arg(value_name = "OUTPUT.WAV")]
        output: PathBuf,
    },

    /// Read address:text lines and stream raw s16le PCM
    Stream {
        /// Input file with one address:text line per message (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for raw PCM (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum inter-message silence in seconds
        #[arg(long, default_value_t = 1)]
        min_gap: u32,

        /// Maximum inter-message silence in seconds
        #[arg(long, default_value_t = 10)]
        max_gap: u32,
    },
}

#[derive(Debug, Error)]
enum LineError {
    #[error("no address:text separator")]
    MissingSeparator,

    #[error("unparseable address {0:?}")]
    BadAddress(String),

    #[error("address {0} exceeds 21 bits")]
    AddressOutOfRange(u32),
}

/// Split an `address:text` line into its validated parts.
fn parse_line(line: &str) -> Result<(u32, &str), LineError> {
    let (addr, text) = line.split_once(':').ok_or(LineError::MissingSeparator)?;
    let address: u32 = addr
        .trim()
        .parse()
        .map_err(|_| LineError::BadAddress(addr.to_string()))?;
    if address > MAX_ADDRESS {
        return Err(LineError::AddressOutOfRange(address));
    }
    Ok((address, text))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let modulator = PcmModulator::new(cli.sample_rate, cli.baud_rate)?;

    match cli.command {
        Commands::Encode {
            address,
            message,
            output,
        } => encode_command(&modulator, address, &message, &output),
        Commands::Stream {
            input,
            output,
            min_gap,
            max_gap,
        } => stream_command(&modulator, input, output, min_gap, max_gap),
    }
}

fn encode_command(
    modulator: &PcmModulator,
    address: u32,
    message: &str,
    output_path: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let words = encode_transmission(address, message.as_bytes())?;
    let pcm = modulator.modulate(&words);
    info!(
        "encoded {} words ({} PCM bytes) for address {address}",
        words.len(),
        pcm.len()
    );

    let spec = WavSpec {
        channels: 1,
        sample_rate: modulator.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let file = File::create(output_path)?;
    let mut writer = hound::WavWriter::new(BufWriter::new(file), spec)?;
    for bytes in pcm.chunks_exact(2) {
        writer.write_sample(i16::from_le_bytes([bytes[0], bytes[1]]))?;
    }
    writer.finalize()?;

    info!("wrote {}", output_path.display());
    Ok(())
}

fn stream_command(
    modulator: &PcmModulator,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    min_gap: u32,
    max_gap: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    if min_gap > max_gap {
        return Err(format!("--min-gap {min_gap} exceeds --max-gap {max_gap}").into());
    }

    let reader: Box<dyn Read> = match input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut rng = rand::thread_rng();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            continue;
        }

        let (address, text) = match parse_line(line) {
            Ok(parsed) => parsed,
            Err(err) => {
                // Report and move on; one bad line must not kill the stream.
                error!("skipping malformed line: {err}");
                continue;
            }
        };

        let words = encode_transmission(address, text.as_bytes())?;

        // One contiguous buffer: PCM followed by the silence gap, both as
        // little-endian 16-bit samples.
        let gap_secs = rng.gen_range(min_gap..=max_gap);
        let mut buffer = modulator.modulate(&words);
        buffer.resize(buffer.len() + modulator.silence_len_bytes(gap_secs), 0);

        writer.write_all(&buffer)?;
        info!(
            "address {address}: {} words, {} bytes, {gap_secs}s gap",
            words.len(),
            buffer.len()
        );
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_valid() {
        assert!(matches!(parse_line("123:hello"), Ok((123, "hello"))));
        assert!(matches!(parse_line("0:"), Ok((0, ""))));
        // Only the first colon separates; text may contain more.
        assert!(matches!(parse_line("7:a:b"), Ok((7, "a:b"))));
        assert!(matches!(parse_line(" 42 :msg"), Ok((42, "msg"))));
    }

    #[test]
    fn test_parse_line_missing_separator() {
        assert!(matches!(
            parse_line("no separator here"),
            Err(LineError::MissingSeparator)
        ));
    }

    #[test]
    fn test_parse_line_bad_address() {
        assert!(matches!(parse_line("abc:hi"), Err(LineError::BadAddress(_))));
        assert!(matches!(parse_line("-1:hi"), Err(LineError::BadAddress(_))));
    }

    #[test]
    fn test_parse_line_address_out_of_range() {
        assert!(matches!(
            parse_line("2097152:hi"),
            Err(LineError::AddressOutOfRange(2097152))
        ));
        assert!(parse_line("2097151:hi").is_ok());
    }
}
