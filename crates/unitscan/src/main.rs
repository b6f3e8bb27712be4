//! unitscan CLI
//!
//! Zero-copy counting, hashing, splitting and enumeration of code units.

use std::io::{BufWriter, Write};

use unitscan::{init_tracing, parse_scan_options, run_command, CliError, Command};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("unitscan {}", env!("CARGO_PKG_VERSION"));
        }
        name => {
            let Some(command) = Command::parse(name) else {
                eprintln!("Unknown command: {name}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            };

            if args.len() < 3 {
                eprintln!("Usage: unitscan {} <file> [options]", command.name());
                std::process::exit(1);
            }

            if let Err(e) = run(command, &args[2], &args[3..]) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn run(command: Command, path: &str, flags: &[String]) -> Result<(), CliError> {
    let options = parse_scan_options(flags)?;
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_command(command, path, &options, &mut out)?;
    out.flush()?;
    Ok(())
}

fn print_usage() {
    println!("unitscan: zero-copy code unit scanning");
    println!();
    println!("Usage: unitscan <command> <file> [options]");
    println!();
    println!("Commands:");
    println!("  count <file>         Count units equal to --target");
    println!("  hash <file>          Djb2 hash of the units");
    println!("  split <file>         Print the tokens between --sep units");
    println!("  enumerate <file>     Print every unit with its index");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --width=<8|16|32>    Unit width in bits, little-endian (default: 8)");
    println!("  --target=<unit>      Unit to count");
    println!("  --sep=<unit>         Separator for split (default: ',')");
    println!("  --range=<start>:<len>  Only scan this sub-range of units");
    println!();
    println!("A <unit> is a single character or a number (44, 0x2c).");
    println!("Set RUST_LOG=unitscan=debug for diagnostics on stderr.");
}
