use chrono::{Local, NaiveDateTime};
use clap::error::ErrorKind;
use clap::Parser;
use jctl::application::{
    find_by_name, list_entries, resolve_one, ConfigService, EditEntryService, NewEntryService,
    Operator, SearchOutcome, SearchService, TouchService,
};
use jctl::cli::{format_config_list, format_entry_list, Cli, Commands, Console};
use jctl::error::{JctlError, EXIT_UNKNOWN_COMMAND, EXIT_USAGE};
use jctl::infrastructure::{
    slugger_for, templater_for, Config, EditorSession, FileSystemEntryStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                ErrorKind::InvalidSubcommand => EXIT_UNKNOWN_COMMAND,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("jctl: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "jctl=debug" } else { "jctl=warn" };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn run(cli: Cli) -> Result<(), JctlError> {
    let config = Config::from_env()?;
    let store = FileSystemEntryStore::new(config.journal_dir.clone(), &config.extension);
    let mut console = Console::stdio()?;

    match cli.command {
        Commands::Edit { keywords } => {
            let matches = find_by_name(&store, &keywords)?;
            let name = resolve_one(&matches, &keywords.join(" "), &mut console)?;
            edit(&store, &config, &name, &mut console)
        }
        Commands::Search { keywords } => {
            match SearchService::new(&store).execute(&keywords, &mut console)? {
                SearchOutcome::Open(name) => edit(&store, &config, &name, &mut console),
                SearchOutcome::Listed(_) | SearchOutcome::NothingDone => Ok(()),
            }
        }
        Commands::New {
            title,
            layout,
            no_edit,
        } => {
            let slugger = slugger_for(&config);
            let templater = templater_for(&config);
            let layout = layout.unwrap_or_else(|| config.layout.clone());

            let name = NewEntryService::new(&store, slugger.as_ref(), templater.as_ref())
                .execute(&title.join(" "), &layout, now())?;
            console.say(&format!("Created {}", name))?;

            if no_edit {
                Ok(())
            } else {
                edit(&store, &config, &name, &mut console)
            }
        }
        Commands::Touch { keywords } => {
            let matches = find_by_name(&store, &keywords)?;
            let name = resolve_one(&matches, &keywords.join(" "), &mut console)?;

            let current = TouchService::new(&store, &config).refresh(&name, now())?;
            console.say("Timestamp updated.")?;
            if current != name {
                console.say(&format!("Entry renamed to {}", current))?;
            }
            Ok(())
        }
        Commands::Fix { keywords } => {
            let matches = find_by_name(&store, &keywords)?;
            let name = resolve_one(&matches, &keywords.join(" "), &mut console)?;

            let current = TouchService::new(&store, &config).fix(&name)?;
            if current == name {
                console.say(&format!("{} already matches its title and date.", name))?;
            } else {
                console.say(&format!("Entry renamed to {}", current))?;
            }
            Ok(())
        }
        Commands::List { keywords } => {
            let entries = list_entries(&store, &keywords)?;
            print!("{}", format_entry_list(&entries));
            if entries.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(&config.journal_dir);

            if list {
                print!("{}", format_config_list(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                Err(JctlError::Usage(
                    "Usage: jctl config [--list | <key> [<value>]]".to_string(),
                ))
            }
        }
    }
}

fn edit(
    store: &FileSystemEntryStore,
    config: &Config,
    name: &str,
    operator: &mut dyn Operator,
) -> Result<(), JctlError> {
    let editor = EditorSession::new(config.editor_command());
    EditEntryService::new(store, config).execute(name, now(), |path| editor.edit(path), operator)?;
    Ok(())
}
