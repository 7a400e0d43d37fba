use chrono::{Local, NaiveDate};
use clap::Parser;
use jotter::application::{capture, init, ConfigService, OpenEntryService};
use jotter::cli::{format_open_outcome, format_render_warning, Cli, Commands};
use jotter::domain::date::parse_date;
use jotter::domain::EntryType;
use jotter::error::JotterError;
use jotter::infrastructure::Config;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JotterError> {
    match cli.command {
        Some(Commands::Init { path, name }) => init::init(&path, name.as_deref()),
        Some(Commands::Capture { message }) => {
            let config = Config::load()?;
            let vault = config.vault();
            let now = Local::now().naive_local();

            let path = capture(&vault, now, &message.join(" "))?;
            println!("Captured to {}", path);
            Ok(())
        }
        Some(Commands::Path { entry, date }) => {
            let date = resolve_date(date.as_deref())?;
            let kind: EntryType = entry.parse()?;

            println!("{}", kind.entry_path(date));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::from_default_path();

            if list {
                let config = service.list()?;
                println!("vault = {}", config.vault_path.display());
                println!("vault-name = {}", config.vault_name);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: jotter config [--list | <key> [<value>]]");
                println!("Valid keys: vault, vault-name, created");
                Ok(())
            }
        }
        None => {
            let config = Config::load()?;
            let date = resolve_date(cli.date.as_deref())?;
            let service = OpenEntryService::new(config);

            let outcome = match cli.entry {
                Some(tag) => {
                    let kind: EntryType = tag.parse()?;
                    service.execute(kind, date, !cli.no_open)?
                }
                None => service.execute_default(date, !cli.no_open)?,
            };

            for warning in &outcome.warnings {
                eprintln!("{}", format_render_warning(warning));
            }
            println!("{}", format_open_outcome(&outcome));
            Ok(())
        }
    }
}

/// Parse --date input or fall back to today
fn resolve_date(arg: Option<&str>) -> Result<NaiveDate, JotterError> {
    match arg {
        Some(input) => parse_date(input),
        None => Ok(Local::now().date_naive()),
    }
}
