//! Command line front end: encode JSON literals to big-endian hex and back

use std::path::PathBuf;

use bepc::json::{value_from_json_str, value_to_json};
use bepc::{file_io, parse_type_tag, ScalarKind, TypeTag, TypedBuffer};
use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "BEPC CLI - Convert primitive values and arrays to and from big-endian bytes")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON literal as the given type
    Encode {
        /// Target type, e.g. i32, bool[], f64?[]
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// JSON literal, e.g. -1 or [true,false,true]; non-finite floats
        /// are written "NaN", "Infinity" or "-Infinity"
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Write raw bytes to this file instead of printing hex
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Decode bytes as the given type and print JSON
    Decode {
        /// Target type, e.g. i32, bool[], f64?[]
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Hex-encoded bytes
        #[arg(required_unless_present = "input", conflicts_with = "input")]
        hex: Option<String>,

        /// Read raw bytes from this file
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
    /// List every type name with its code and element width
    ///
    /// Bool arrays show "packed": a 2-byte count followed by one bit per
    /// element.
    Kinds,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(command: Commands) -> bepc::Result<()> {
    match command {
        Commands::Encode {
            type_name,
            value,
            output,
        } => handle_encode(&type_name, &value, output),
        Commands::Decode {
            type_name,
            hex,
            input,
        } => handle_decode(&type_name, hex.as_deref(), input),
        Commands::Kinds => {
            handle_kinds();
            Ok(())
        }
    }
}

fn handle_encode(type_name: &str, text: &str, output: Option<PathBuf>) -> bepc::Result<()> {
    let tag = parse_type_tag(type_name)?;
    let value = value_from_json_str(tag, text)?;
    let buffer = TypedBuffer::new(&value)?;
    info!("encoded {} as {} bytes", tag, buffer.len());

    match output {
        Some(path) => file_io::write_buffer(&path, &buffer)?,
        None => println!("{}", hex::encode(buffer.as_bytes())),
    }
    Ok(())
}

fn handle_decode(type_name: &str, hex: Option<&str>, input: Option<PathBuf>) -> bepc::Result<()> {
    let tag = parse_type_tag(type_name)?;
    let buffer = match (hex, input) {
        (_, Some(path)) => file_io::read_buffer(&path)?,
        (Some(text), None) => TypedBuffer::from_bytes(hex::decode(text.trim())?),
        // clap requires one of the two
        (None, None) => TypedBuffer::default(),
    };

    let value = buffer.as_type(tag)?;
    info!("decoded {} bytes as {}", buffer.len(), tag);
    println!("{}", serde_json::to_string(&value_to_json(&value)?)?);
    Ok(())
}

fn handle_kinds() {
    println!("{:<12} {:>6} {:>7}", "TYPE", "CODE", "WIDTH");
    for kind in ScalarKind::ALL {
        for tag in [
            TypeTag::Scalar(kind),
            TypeTag::Array(kind),
            TypeTag::BoxedArray(kind),
        ] {
            let width = match tag {
                TypeTag::Array(ScalarKind::Bool) | TypeTag::BoxedArray(ScalarKind::Bool) => {
                    "packed".to_string()
                }
                _ => kind.width().to_string(),
            };
            println!("{:<12} {:>#6x} {:>7}", tag.to_string(), tag.to_code(), width);
        }
    }
}
