//! tabletojson CLI - HTML table extraction tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use tabletojson::{is_valid_table_bytes, JsonFormat, OutputMode, TableToJson};

#[derive(Parser)]
#[command(name = "tabletojson")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract the first HTML table of a document to JSON", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    json: JsonArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the first table to JSON
    Json(JsonArgs),

    /// Check that the input contains a table with at least one row
    Validate {
        /// Input HTML file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Show table structure information
    Info {
        /// Input HTML file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct JsonArgs {
    /// Input HTML file (stdin if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Row shape
    #[arg(long, value_enum, default_value = "auto")]
    mode: Mode,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", conflicts_with = "compact")]
    indent: Option<usize>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,
}

impl JsonArgs {
    fn format(&self) -> JsonFormat {
        match (self.compact, self.indent) {
            (true, _) => JsonFormat::Compact,
            (false, Some(width)) => JsonFormat::Indent(width),
            (false, None) => JsonFormat::Pretty,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Records when headers are found, arrays otherwise
    Auto,
    /// Always records (columns named column_N when no headers)
    Records,
    /// Always arrays of cell text
    Rows,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Auto => OutputMode::Auto,
            Mode::Records => OutputMode::Records,
            Mode::Rows => OutputMode::Rows,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Json(args)) => cmd_json(&args),
        Some(Commands::Validate { input }) => cmd_validate(input.as_deref()),
        Some(Commands::Info { input }) => cmd_info(input.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_json(&cli.json),
    };

    if let Err(e) = result {
        eprintln!("{} [{}]: {}", "Error".red().bold(), e.kind(), e);
        std::process::exit(1);
    }
}

/// Read HTML from a file, or stdin when no path is given.
fn read_input(input: Option<&Path>) -> tabletojson::Result<Vec<u8>> {
    match input {
        Some(path) => {
            log::debug!("Reading {}", path.display());
            Ok(fs::read(path)?)
        }
        None => {
            log::debug!("Reading stdin");
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

fn cmd_json(args: &JsonArgs) -> tabletojson::Result<()> {
    let data = read_input(args.input.as_deref())?;

    let output = TableToJson::new()
        .with_mode(args.mode.into())
        .with_format(args.format())
        .extract_bytes(&data)?;
    let json = output.to_json()?;

    if let Some(path) = &args.output {
        fs::write(path, &json)?;
        println!(
            "{} {} ({} rows)",
            "Saved to".green(),
            path.display(),
            output.result().len()
        );
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_validate(input: Option<&Path>) -> tabletojson::Result<()> {
    let data = read_input(input)?;

    if is_valid_table_bytes(&data) {
        println!("{}", "valid".green());
        Ok(())
    } else {
        println!("{}", "invalid".red());
        std::process::exit(1);
    }
}

fn cmd_info(input: Option<&Path>) -> tabletojson::Result<()> {
    let data = read_input(input)?;
    let html = std::str::from_utf8(&data)?;
    let info = tabletojson::inspect(html)?;

    println!("{}", "Table Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if let Some(path) = input {
        println!("{}: {}", "File".bold(), path.display());
    }
    println!("{}: {}", "Rows".bold(), info.row_count);
    println!("{}: {}", "Data rows".bold(), info.data_row_count);
    println!(
        "{}: {}",
        "Header section".bold(),
        if info.has_header_section { "Yes" } else { "No" }
    );
    println!(
        "{}: {}",
        "Body section".bold(),
        if info.has_body_section { "Yes" } else { "No" }
    );

    match (info.headers.names(), info.headers.source()) {
        (Some(names), Some(source)) => {
            println!("{}: {} (from {})", "Headers".bold(), names.join(", "), source);
        }
        _ => println!("{}: {}", "Headers".bold(), "none".dimmed()),
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "tabletojson".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("HTML table to JSON extraction tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_default_is_json() {
        let cli = Cli::try_parse_from(["tabletojson", "table.html"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.json.input, Some(PathBuf::from("table.html")));
        assert_eq!(cli.json.mode, Mode::Auto);
        assert_eq!(cli.json.format(), JsonFormat::Pretty);
    }

    #[test]
    fn test_cli_json_flags() {
        let cli = Cli::try_parse_from([
            "tabletojson",
            "json",
            "--mode",
            "records",
            "--indent",
            "4",
            "-o",
            "out.json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Json(args)) => {
                assert!(args.input.is_none());
                assert_eq!(args.mode, Mode::Records);
                assert_eq!(args.format(), JsonFormat::Indent(4));
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
            }
            _ => panic!("expected json subcommand"),
        }
    }

    #[test]
    fn test_cli_compact_conflicts_with_indent() {
        let result = Cli::try_parse_from(["tabletojson", "--compact", "--indent", "2"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["tabletojson", "--compact"]).unwrap();
        assert_eq!(cli.json.format(), JsonFormat::Compact);
    }

    #[test]
    fn test_mode_conversion() {
        assert_eq!(OutputMode::from(Mode::Rows), OutputMode::Rows);
        assert_eq!(OutputMode::from(Mode::Records), OutputMode::Records);
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<table><tr><td>a</td></tr></table>").unwrap();

        let data = read_input(Some(file.path())).unwrap();
        assert!(is_valid_table_bytes(&data));
    }

    #[test]
    fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("/nonexistent/table.html"))).unwrap_err();
        assert_eq!(err.kind(), tabletojson::ErrorKind::Io);
    }
}
