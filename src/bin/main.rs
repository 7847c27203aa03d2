use character_core::config::FinderConfig;
use character_core::core::types::{Count, WordSet};
use character_core::{CharacterFinder, FinderError};
use crossterm::style::Stylize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

// Commands arrive one per line on stdin. Multi-word names are separated by '|'.
fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    info!("character finder starting");

    let mut config = FinderConfig::default();
    let mut finder = CharacterFinder::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let input = line?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        let (command, args) = input.split_once(' ').unwrap_or((input, ""));
        let args = args.trim();

        match command {
            "EXIT" => break,
            "LOAD_CONFIG" => match FinderConfig::from_path(Path::new(args)) {
                Ok(loaded) => {
                    config = loaded;
                    finder = CharacterFinder::from_config(&config);
                    info!(path = args, "config loaded, counter reset");
                }
                Err(e) => error!(path = args, "could not load config: {}", e),
            },
            "LOAD_TEXT" => match fs::read_to_string(args) {
                Ok(text) => finder.count_capitalized(text.lines()),
                Err(e) => error!(path = args, "could not read text: {}", e),
            },
            "INCREMENT" => {
                let (delta, name) = args.split_once(' ').unwrap_or(("", args));
                match delta.parse::<Count>() {
                    Ok(delta) => finder.increment_name(name, delta),
                    Err(_) => warn!("usage: INCREMENT <delta> <name>"),
                }
            }
            "REMOVE" => finder.remove_words(&names(args)),
            "REMOVE_BELOW" => {
                let (threshold, rest) = args.split_once(' ').unwrap_or((args, ""));
                match threshold.parse::<Count>() {
                    Ok(threshold) => finder.remove_words_below_threshold(&names(rest), threshold),
                    Err(_) => warn!("usage: REMOVE_BELOW <threshold> <name|name>"),
                }
            }
            "REMOVE_PLACES" => finder.remove_places(),
            "REMOVE_TITLES" => finder.remove_titles(),
            "SHOW" => show(&finder, args, &mut stdout)?,
            "BUILD_GROUPS" => {
                finder.build_character_groups(&config.nondescriptors);
                if let Some(groups) = finder.character_groups() {
                    if groups.is_empty() {
                        warn!("no aliases to group; the counter is empty");
                    } else {
                        info!(aliases = groups.len(), groups = groups.primary_aliases().len(), "character groups built");
                    }
                }
            }
            "COMBINE" => report(finder.combine_groups(names(args)).map(|_| Vec::new()), &mut stdout)?,
            "NAME_LIST" => {
                let lines = if args.is_empty() {
                    finder.all_name_list()
                } else {
                    finder.name_list(names(args))
                };
                report(lines, &mut stdout)?;
            }
            "FIRST_NAME_LIST" => report(finder.first_name_list(names(args)), &mut stdout)?,
            "SAVE" => {
                if let Err(e) = finder.save(Path::new(args)) {
                    error!(path = args, "could not save snapshot: {}", e);
                }
            }
            "LOAD" => match character_core::persistence::load_from_disk(Path::new(args)) {
                Ok(loaded) => finder = loaded,
                Err(e) => error!(path = args, "could not load snapshot: {}", e),
            },
            "CLEAR" => finder.clear(),
            other => warn!(command = other, "unknown command"),
        }
        stdout.flush()?;
    }
    info!("character finder shutting down");
    Ok(())
}

fn names(args: &str) -> WordSet {
    args.split('|')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn show(finder: &CharacterFinder, what: &str, stdout: &mut io::Stdout) -> io::Result<()> {
    let set = match what {
        "titled" => finder.titled_names(),
        "plural" => finder.pluralized_names(),
        "surnames" => finder.surnames(),
        "places" => finder.places(Vec::<String>::new()),
        "lonely" => finder.lonely_words(),
        "counter" => {
            writeln!(stdout, "{}", "== counter ==".bold().cyan())?;
            for line in finder.counter_report() {
                writeln!(stdout, "{}", line)?;
            }
            return Ok(());
        }
        other => {
            warn!(set = other, "unknown set; expected titled, plural, surnames, places, lonely or counter");
            return Ok(());
        }
    };
    writeln!(stdout, "{}", format!("== {} ({}) ==", what, set.len()).bold().cyan())?;
    let json = serde_json::to_string(&set).unwrap_or_else(|_| "[]".to_string());
    writeln!(stdout, "{}", json)
}

fn report(result: Result<Vec<String>, FinderError>, stdout: &mut io::Stdout) -> io::Result<()> {
    match result {
        Ok(lines) => {
            for line in lines {
                writeln!(stdout, "{}", line)?;
            }
        }
        Err(e) => writeln!(stdout, "{}", format!("error: {}", e).red())?,
    }
    Ok(())
}
