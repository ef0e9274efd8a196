//! Contact Book - command-line entry point.
//!
//! A thin front end over the library: every command maps to one address
//! book operation and prints its result.

use anyhow::{bail, Context, Result};
use contact_book::{AddressBook, Config, JsonFileStore, Record};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: contact-book <command> [args]

Commands:
  add NAME [PHONE...] [--birthday MM-DD-YYYY]
  add-phone NAME PHONE
  edit-phone NAME OLD NEW
  remove-phone NAME PHONE
  set-birthday NAME MM-DD-YYYY
  show NAME
  search TERM
  delete NAME
  list [CHUNK]
  birthdays [DAYS]";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so command output stays on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        println!("{}", USAGE);
        return Ok(());
    };

    info!(path = %config.storage_path.display(), "Opening address book");
    let mut book = AddressBook::open(JsonFileStore::new(&config.storage_path))
        .with_context(|| format!("failed to load {}", config.storage_path.display()))?;

    match (command.as_str(), rest) {
        ("add", [name, tail @ ..]) => {
            let (phones, birthday) = split_birthday_flag(tail)?;
            let mut record = Record::with_birthday(name.as_str(), birthday.unwrap_or(""))?;
            for phone in phones {
                record.add_phone(phone.as_str())?;
            }
            book.add_record(record)?;
            println!("Contact added.");
        }
        ("add-phone", [name, phone]) => {
            book.edit(name, |r| r.add_phone(phone.as_str()))?;
            println!("Phone added.");
        }
        ("edit-phone", [name, old, new]) => {
            book.edit(name, |r| r.edit_phone(old, new.as_str()))?;
            println!("Phone updated.");
        }
        ("remove-phone", [name, phone]) => {
            book.edit(name, |r| {
                r.remove_phone(phone);
                Ok(())
            })?;
            println!("Phone removed.");
        }
        ("set-birthday", [name, date]) => {
            book.edit(name, |r| r.set_birthday(date.as_str()))?;
            println!("Birthday set.");
        }
        ("show", [name]) => match book.find_by_name(name) {
            Some(record) => {
                println!("{}", record);
                if let Some(birthday) = record.birthday() {
                    println!("Birthday: {}", birthday);
                }
                if let Some(countdown) = record.days_to_birthday(book.today()) {
                    println!("Days to birthday: {}", countdown);
                }
            }
            None => bail!("record not found"),
        },
        ("search", [term]) => {
            let mut found: Vec<&Record> = book.search(term).into_iter().collect();
            found.sort_by(|a, b| a.get_name().cmp(b.get_name()));
            for record in found {
                println!("{}", record);
            }
        }
        ("delete", [name]) => {
            book.delete(name)?;
            println!("Contact deleted.");
        }
        ("list", tail) => {
            let chunk = match tail {
                [] => config.page_size,
                [n] => n.parse().context("CHUNK must be a number")?,
                _ => bail!("{}", USAGE),
            };
            for record in book.iterate(chunk) {
                println!("{}", record);
            }
        }
        ("birthdays", tail) => {
            let window = match tail {
                [] => config.birthday_window_days,
                [n] => n.parse().context("DAYS must be a number")?,
                _ => bail!("{}", USAGE),
            };
            for (record, countdown) in book.upcoming_birthdays(window) {
                println!("{}: {}", record.get_name(), countdown);
            }
        }
        _ => bail!("{}", USAGE),
    }

    Ok(())
}

/// Split trailing `--birthday DATE` off the positional phone list.
fn split_birthday_flag(args: &[String]) -> Result<(&[String], Option<&str>)> {
    match args.iter().position(|a| a == "--birthday") {
        None => Ok((args, None)),
        Some(i) if i + 2 == args.len() => Ok((&args[..i], Some(args[i + 1].as_str()))),
        Some(_) => bail!("--birthday takes one date and must come last"),
    }
}
