//! Small operator CLI around the secret wrappers. Nothing it prints contains a
//! secret unless the operator asks for it explicitly with `--reveal`.

use std::env;

use conceal_rs::config::load_config;
use conceal_rs::logging::setup_logging;
use conceal_rs::secret::hash::content_hash;
use conceal_rs::{generate_uuid, EqualityPolicy, SecretText};

fn print_usage() {
    eprintln!("Commands:\n  uuid [--reveal]\n  hash <text>\n  compare <a> <b> [short-circuit|fixed-time]\n  load-config <path>");
}

fn main() {
    setup_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "uuid" => {
            let reveal = match args.len() {
                2 => false,
                3 if args[2] == "--reveal" => true,
                _ => return print_usage(),
            };
            match generate_uuid() {
                Ok(id) if reveal => println!("{}", id.reveal()),
                Ok(id) => println!("{id}"),
                Err(err) => eprintln!("identifier generation failed: {err}"),
            }
        }
        "hash" => {
            if args.len() != 3 {
                return print_usage();
            }
            println!("{}", content_hash(args[2].as_bytes()));
        }
        "compare" => {
            let policy = match args.len() {
                4 => EqualityPolicy::default(),
                5 => match EqualityPolicy::parse(&args[4]) {
                    Some(policy) => policy,
                    None => return print_usage(),
                },
                _ => return print_usage(),
            };
            let a = SecretText::new(args[2].as_str());
            let b = SecretText::new(args[3].as_str());
            let matches = a.equals_with(&b, policy);
            tracing::debug!(%policy, matches, "compared secrets");
            println!("{}", if matches { "match" } else { "no-match" });
        }
        "load-config" => {
            if args.len() != 3 {
                return print_usage();
            }
            match load_config(&args[2]) {
                Ok(cfg) => match serde_json::to_string_pretty(&cfg) {
                    Ok(printable) => println!("{printable}"),
                    Err(err) => eprintln!("config render failed: {err}"),
                },
                Err(err) => eprintln!("config load failed: {err}"),
            }
        }
        _ => print_usage(),
    }
}
