mod cli;

use clap::Parser;
use cli::{Args, Commands, Format};
use eyre::Result;
use filename_decoder::presets;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let verbose = match &args.command {
        Commands::Decode(a) => a.verbose,
        Commands::Schema(a) => a.verbose,
    };

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::Decode(a) => {
            let schema = presets::submission(a.anchored)?;
            let fields = schema.decode(&a.filename)?;
            match a.format {
                Format::Text => {
                    for (name, value) in fields.iter() {
                        println!("The {name} is {value}");
                    }
                }
                Format::Json => println!("{}", serde_json::to_string(&fields)?),
            }
        }
        Commands::Schema(a) => {
            let schema = presets::submission(a.anchored)?;
            match a.format {
                Format::Text => {
                    for field in schema.fields() {
                        println!("{}: {}", field.name, field.shape);
                    }
                    println!("rule: {}", schema.pattern());
                }
                Format::Json => println!("{}", serde_json::to_string_pretty(schema.fields())?),
            }
        }
    }

    Ok(())
}
