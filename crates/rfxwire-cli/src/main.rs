use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use rfxwire_core::{
    CommandInput, CommandRequest, IncreaseDecrease, OnOff, PacketType, ValueSelector,
    decode_batch, default_registry, encode_command,
};
use tracing::info;

mod logging;

use logging::{LogFormat, LogLevel, init_logging};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("RFXWIRE_BUILD_COMMIT"),
    " ",
    env!("RFXWIRE_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "rfxwire")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode and build RF transceiver frames (lighting1, lighting3, transmitter responses).",
    long_about = None,
    after_help = "Examples:\n  rfxwire frame decode 0812000100000F10A0\n  rfxwire frame decode --input frames.hex -o decoded.json\n  rfxwire frame encode --packet-type lighting3 --subtype KOPPLA --selector dimming-level --percent 50"
)]
struct Cli {
    /// Log verbosity (logs go to stderr; RFXWIRE_LOG overrides)
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on raw frames given as hex strings.
    Frame {
        #[command(subcommand)]
        command: FrameCommands,
    },
}

#[derive(Subcommand, Debug)]
enum FrameCommands {
    /// Decode frames into JSON with the semantic value of every supported selector.
    Decode(DecodeArgs),
    /// Build an outgoing frame from a semantic command and print it as hex.
    Encode(EncodeArgs),
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Frames as hex strings (separators ' ', ':' and '-' are ignored)
    frames: Vec<String>,

    /// File with one hex frame per line ('#' starts a comment)
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Write the JSON output to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Exit with a non-zero code if any frame fails to decode
    #[arg(long)]
    strict: bool,

    /// Suppress non-error output on stderr
    #[arg(long)]
    quiet: bool,
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("value")
        .required(true)
        .args(["on", "off", "number", "percent", "increase", "decrease"])
))]
struct EncodeArgs {
    /// Packet type of the outgoing frame
    #[arg(long, value_enum)]
    packet_type: OutgoingType,

    /// Subtype name (e.g. KOPPLA, ARC, X10)
    #[arg(long)]
    subtype: String,

    /// Selector the value applies to
    #[arg(long, value_enum, default_value = "command")]
    selector: SelectorArg,

    /// Target address for addressed types (e.g. A.1)
    #[arg(long, default_value = "")]
    device_id: String,

    /// Sequence number echoed back by the transceiver
    #[arg(long, default_value_t = 0)]
    seq: u8,

    #[arg(long)]
    on: bool,
    #[arg(long)]
    off: bool,
    /// Raw command code
    #[arg(long, allow_negative_numbers = true)]
    number: Option<i64>,
    /// Dim percentage (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    percent: Option<u8>,
    #[arg(long)]
    increase: bool,
    #[arg(long)]
    decrease: bool,

    /// Print the built message as JSON instead of hex
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutgoingType {
    Lighting1,
    Lighting3,
}

impl From<OutgoingType> for PacketType {
    fn from(value: OutgoingType) -> Self {
        match value {
            OutgoingType::Lighting1 => PacketType::Lighting1,
            OutgoingType::Lighting3 => PacketType::Lighting3,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SelectorArg {
    RawData,
    SignalLevel,
    Command,
    DimmingLevel,
    Contact,
}

impl From<SelectorArg> for ValueSelector {
    fn from(value: SelectorArg) -> Self {
        match value {
            SelectorArg::RawData => ValueSelector::RawData,
            SelectorArg::SignalLevel => ValueSelector::SignalLevel,
            SelectorArg::Command => ValueSelector::Command,
            SelectorArg::DimmingLevel => ValueSelector::DimmingLevel,
            SelectorArg::Contact => ValueSelector::Contact,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let result = match cli.command {
        Commands::Frame { command } => match command {
            FrameCommands::Decode(args) => cmd_frame_decode(args),
            FrameCommands::Encode(args) => cmd_frame_encode(args),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{:#}", err), None)
    }
}

fn cmd_frame_decode(args: DecodeArgs) -> Result<(), CliError> {
    if args.pretty && args.compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }

    let mut sources = Vec::new();
    if let Some(input) = args.input.as_ref() {
        sources.extend(read_frame_file(input)?);
    }
    sources.extend(args.frames.iter().cloned());
    if sources.is_empty() {
        return Err(CliError::new(
            "no frames given",
            Some("pass hex frames as arguments or use -i/--input".to_string()),
        ));
    }

    let frames = sources
        .iter()
        .map(|source| parse_hex_frame(source))
        .collect::<Result<Vec<_>, _>>()?;
    let report = decode_batch(default_registry(), &frames);
    for rejected in &report.rejected {
        if !args.quiet {
            eprintln!("skipped frame {}: {}", rejected.frame, rejected.error);
        }
    }
    let decoded = &report.decoded;
    let failures = report.rejected.len();

    let json = if args.pretty {
        serde_json::to_string_pretty(decoded)
    } else {
        serde_json::to_string(decoded)
    }
    .context("JSON serialization failed")?;

    match args.output.as_ref() {
        Some(output) => {
            write_output(output, &json)?;
            if !args.quiet {
                eprintln!(
                    "OK: {} frame(s) decoded -> {}",
                    decoded.len(),
                    output.display()
                );
            }
        }
        None => println!("{}", json),
    }
    info!(decoded = decoded.len(), failures, "decode finished");

    if args.strict && failures > 0 {
        return Err(CliError::new(
            format!("{} frame(s) failed to decode", failures),
            Some("drop --strict to skip undecodable frames".to_string()),
        ));
    }
    Ok(())
}

fn cmd_frame_encode(args: EncodeArgs) -> Result<(), CliError> {
    let input = command_input(&args)?;
    let request = CommandRequest {
        packet_type: args.packet_type.into(),
        sub_type: args.subtype.clone(),
        device_id: args.device_id.clone(),
        selector: args.selector.into(),
        input,
        sequence_number: args.seq,
    };

    let message = encode_command(&request).map_err(|err| {
        CliError::new(
            format!("cannot build frame: {}", err),
            Some(encode_hint(&request)),
        )
    })?;

    if args.json {
        let json = serde_json::to_string(&message).context("JSON serialization failed")?;
        println!("{}", json);
    } else {
        println!("{}", hex::encode_upper(message.encode()));
    }
    Ok(())
}

fn command_input(args: &EncodeArgs) -> Result<CommandInput, CliError> {
    let input = if args.on {
        CommandInput::OnOff(OnOff::On)
    } else if args.off {
        CommandInput::OnOff(OnOff::Off)
    } else if let Some(number) = args.number {
        CommandInput::Number(number)
    } else if let Some(percent) = args.percent {
        CommandInput::Percent(percent)
    } else if args.increase {
        CommandInput::IncreaseDecrease(IncreaseDecrease::Increase)
    } else if args.decrease {
        CommandInput::IncreaseDecrease(IncreaseDecrease::Decrease)
    } else {
        return Err(CliError::new(
            "missing command value",
            Some("use one of --on, --off, --number, --percent, --increase, --decrease".to_string()),
        ));
    };
    Ok(input)
}

fn encode_hint(request: &CommandRequest) -> String {
    match request.packet_type {
        PacketType::Lighting1 => {
            "lighting1 takes --selector command, --device-id <A-P>.<1-16> and a subtype such as ARC or X10"
                .to_string()
        }
        _ => "lighting3 takes --selector command or dimming-level and subtype KOPPLA".to_string(),
    }
}

fn parse_hex_frame(source: &str) -> Result<Vec<u8>, CliError> {
    let cleaned: String = source
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();
    let cleaned = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);
    hex::decode(cleaned).map_err(|err| {
        CliError::new(
            format!("invalid hex frame '{}'", source),
            Some(format!("hex error: {}", err)),
        )
    })
}

fn read_frame_file(path: &Path) -> Result<Vec<String>, CliError> {
    if !path.is_file() {
        return Err(CliError::new(
            format!("input file not found: {}", path.display()),
            Some("expected a text file with one hex frame per line".to_string()),
        ));
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    Ok(text
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn write_output(output: &Path, json: &str) -> Result<(), CliError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(output, json)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;
    Ok(())
}
