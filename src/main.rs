//! GS1 symbol encoder CLI
//!
//! Command-line tool for encoding GS1 Application Identifier payloads into
//! CC-A/CC-B/CC-C composite component or DataBar Expanded element-width
//! rows.

use clap::{Parser, ValueEnum};
use gs1_compositer::{
    encode_cc_a, encode_cc_b, encode_cc_c, encode_databar_expanded, CcColumns, EncodedSymbol,
    GsEncoderOptions, HumanFormatter, JsonFormatter, SymbolFormatter,
};
use std::process::ExitCode;

/// Encodes GS1 Application Identifier payloads into composite component or
/// DataBar Expanded symbol rows.
#[derive(Parser, Debug)]
#[command(name = "gs1-encode")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The GS1 AI payload to encode, e.g. "0195012345678903"
    payload: String,

    /// Symbol variant to encode
    #[arg(short, long, default_value = "databar-expanded")]
    variant: Variant,

    /// CC-C preferred column count
    #[arg(long, default_value = "4")]
    cc_c_columns: usize,

    /// Output format
    #[arg(short, long, default_value = "human")]
    format: OutputFormat,

    /// Print each row's element count and width
    #[arg(short, long)]
    verbose: bool,
}

/// Symbol variant selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Variant {
    CcA,
    CcB2,
    CcB3,
    CcB4,
    CcC,
    DataBarExpanded,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.verbose {
            "gs1_compositer=debug"
        } else {
            "gs1_compositer=warn"
        })
        .init();

    let options = GsEncoderOptions::new().with_cc_c_columns(args.cc_c_columns);
    let payload = args.payload.as_bytes();

    let result = match args.variant {
        Variant::CcA => encode_cc_a(payload, &options),
        Variant::CcB2 => encode_cc_b(payload, CcColumns::Two, &options),
        Variant::CcB3 => encode_cc_b(payload, CcColumns::Three, &options),
        Variant::CcB4 => encode_cc_b(payload, CcColumns::Four, &options),
        Variant::CcC => encode_cc_c(payload, &options),
        Variant::DataBarExpanded => encode_databar_expanded(payload, &options),
    };

    match result {
        Ok(symbol) => {
            print_symbol(&symbol, &args);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error encoding payload: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_symbol(symbol: &EncodedSymbol, args: &Args) {
    match args.format {
        OutputFormat::Human => {
            let formatter = HumanFormatter { verbose: args.verbose };
            print!("{}", formatter.format_symbol(symbol));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter.format_symbol(symbol));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::try_parse_from(["gs1-encode", "0195012345678903"]).unwrap();
        assert_eq!(args.payload, "0195012345678903");
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_variant_selection() {
        let args = Args::try_parse_from(["gs1-encode", "-v", "--variant", "cc-a", "0195012345678903"]).unwrap();
        assert!(matches!(args.variant, Variant::CcA));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_format_options() {
        let args = Args::try_parse_from(["gs1-encode", "-f", "json", "0195012345678903"]).unwrap();
        assert!(matches!(args.format, OutputFormat::Json));
    }
}
