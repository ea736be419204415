use clap::Parser;
use context_param_extraction::extract_file;

/// Simple runner: parse a web.xml file, identify all context parameters,
/// and print them as a JSON map.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the web.xml (Java web deployment descriptor) file
    file: std::path::PathBuf,
    /// Exit with an error when malformed context-param blocks were skipped
    #[arg(long)]
    strict: bool,
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    // Parse CLI arguments.
    let args = Args::parse();

    // Run the extraction; both unreadable-source and parse failures are fatal.
    let result = match extract_file(&args.file) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}: {e}", args.file.display());
            std::process::exit(1);
        }
    };

    // Surface the per-block warning the way the caller asked for.
    if result.had_malformed {
        eprintln!(
            "warning: {} has one or more not well formed context-param elements",
            args.file.display()
        );
        if args.strict {
            std::process::exit(2);
        }
    }

    // Output the mapping.
    println!("{}", serde_json::to_string_pretty(&result.params).unwrap());
}
