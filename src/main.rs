//! Purpose: `jsonhelper` CLI entry point for exercising the record type and codec.
//! Role: Binary crate root; parses args, runs one command, prints to stdout.
//! Invariants: Successful commands print exactly one line (or one pretty JSON block).
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Invariants: Decode failures report only that decoding failed; causes go to debug logs.
use std::io::{self, IsTerminal, Read};

use clap::{Args, Parser, Subcommand, error::ErrorKind as ClapErrorKind};
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

use jsonhelper::api::{CodecConfig, DataRecord, Error, ErrorKind, JsonCodec, to_exit_code};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<RunOutcome, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome { exit_code });
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message(clap_error_summary(&err))
                    .with_hint("Run `jsonhelper --help` for usage."));
            }
        },
    };

    let codec = JsonCodec::new(cli.codec_config());
    match cli.command {
        Command::Encode(record) => {
            println!("{}", codec.encode(&record.into_record()));
        }
        Command::Decode { input } => {
            let text = read_input(&input)?;
            let record = codec.decode::<DataRecord>(&text).ok_or_else(|| {
                Error::new(ErrorKind::Decode)
                    .with_message("input is not a valid DataRecord")
                    .with_hint("Set RUST_LOG=debug to log the parse category.")
            })?;
            println!("{}", record.describe());
        }
        Command::Roundtrip(record) => {
            let record = record.into_record();
            let encoded = codec.encode(&record);
            let decoded = codec.decode::<DataRecord>(&encoded);
            let equal = decoded.as_ref() == Some(&record);
            let value = json!({
                "json": encoded,
                "record": decoded.as_ref().map(DataRecord::describe),
                "equal": equal,
            });
            emit_json(&value, codec.config().pretty);
        }
    }
    Ok(RunOutcome::ok())
}

#[derive(Parser, Debug)]
#[command(
    name = "jsonhelper",
    version,
    about = "Encode and decode name/age records as JSON",
    arg_required_else_help = true
)]
struct Cli {
    #[arg(long, global = true, help = "Emit indented JSON")]
    pretty: bool,
    #[arg(
        long,
        global = true,
        help = "Fail decoding when the input has keys the record does not declare"
    )]
    strict_fields: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn codec_config(&self) -> CodecConfig {
        CodecConfig::new()
            .with_pretty(self.pretty)
            .with_reject_unknown_fields(self.strict_fields)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Print a record as JSON")]
    Encode(RecordArgs),
    #[command(about = "Parse JSON into a record and print its description")]
    Decode {
        #[arg(help = "JSON text, or `-` to read stdin")]
        input: String,
    },
    #[command(about = "Encode a record, decode it back and compare")]
    Roundtrip(RecordArgs),
}

#[derive(Args, Debug)]
struct RecordArgs {
    #[arg(long)]
    name: String,
    #[arg(long, allow_negative_numbers = true)]
    age: i32,
}

impl RecordArgs {
    fn into_record(self) -> DataRecord {
        DataRecord::new(self.name, self.age)
    }
}

fn read_input(input: &str) -> Result<String, Error> {
    if input != "-" {
        return Ok(input.to_string());
    }
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read stdin")
            .with_source(err)
    })?;
    Ok(text)
}

fn emit_json(value: &Value, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string());
    println!("{json}");
}

fn emit_error(err: &Error) {
    if io::stderr().is_terminal() {
        eprintln!("{}", error_text(err));
        return;
    }

    let json = serde_json::to_string(&error_json(err)).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::Encode => "encode failed".to_string(),
        ErrorKind::Decode => "decode failed".to_string(),
        ErrorKind::UnknownField => "unknown field".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error) -> String {
    let mut lines = vec![format!("error: {}", error_message(err))];
    if let Some(hint) = err.hint() {
        lines.push(format!("hint: {hint}"));
    }
    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}
