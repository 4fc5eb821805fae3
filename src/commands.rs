use std::io::{self, Write};

use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::{Catalog, CatalogConfig};
use crate::cli::{CatalogArgs, ChatArgs, DoctorArgs, ReplyArgs};
use crate::diagnostics::{Warning, render_warning, summarize};
use crate::matcher::IntentMatcher;
use crate::report::{build_report, write_report};
use crate::responder::Responder;
use crate::scan::{ScanConfig, scan_intents};

fn load_config(args: &CatalogArgs, strict: bool) -> Result<(String, CatalogConfig, Vec<Warning>)> {
    match &args.catalog {
        None => Ok(("builtin".to_string(), CatalogConfig::builtin()?, Vec::new())),
        Some(path) if path.is_dir() => {
            let outcome = scan_intents(&ScanConfig {
                dir: path.clone(),
                strict,
            })?;
            Ok((
                path.display().to_string(),
                outcome.config,
                outcome.warnings,
            ))
        }
        Some(path) => Ok((
            path.display().to_string(),
            CatalogConfig::load(path)?,
            Vec::new(),
        )),
    }
}

fn load_catalog(args: &CatalogArgs, strict: bool) -> Result<(String, Catalog, Vec<Warning>)> {
    let (source, mut config, warnings) = load_config(args, strict)?;
    if let Some(threshold) = args.threshold {
        config.options.threshold = threshold;
    }
    if let Some(scorer) = args.scorer {
        config.scorer = scorer;
    }
    Ok((source, Catalog::from_config(config)?, warnings))
}

pub fn reply(args: &ReplyArgs) -> Result<()> {
    let (_, catalog, _) = load_catalog(&args.catalog, false)?;
    let responder = Responder::new(catalog);

    if args.verbose {
        let top_k = responder.matcher().catalog().options().top_k;
        for candidate in responder.matcher().rank(&args.input).iter().take(top_k) {
            eprintln!(
                "{:.2}  {} (closest example: {:?})",
                candidate.score, candidate.intent.name, candidate.best_example
            );
        }
    }

    let reply = match args.seed {
        Some(seed) => responder.respond_with(&mut StdRng::seed_from_u64(seed), &args.input),
        None => responder.respond(&args.input),
    };
    println!("{reply}");

    Ok(())
}

pub fn chat(args: &ChatArgs) -> Result<()> {
    let (_, catalog, _) = load_catalog(&args.catalog, false)?;
    let responder = Responder::new(catalog);
    let mut seeded = args.seed.map(StdRng::seed_from_u64);

    println!("STEM Inspires chat. Type 'exit' to leave.");
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        if args.show_score {
            let result = responder.matcher().find_best_intent(input);
            match result.intent {
                Some(intent) => println!("(intent {} scored {:.2})", intent.name, result.score),
                None => println!("(no intent above threshold; best score {:.2})", result.score),
            }
        }

        let reply = match seeded.as_mut() {
            Some(rng) => responder.respond_with(rng, input),
            None => responder.respond(input),
        };
        println!("bot> {reply}");
    }

    Ok(())
}

pub fn doctor(args: &DoctorArgs) -> Result<()> {
    let (source, catalog, load_warnings) = load_catalog(&args.catalog, args.strict)?;
    let matcher = IntentMatcher::new(catalog);
    let report = build_report(source, &matcher, load_warnings);

    println!("{}", summarize(&report));
    if args.verbose {
        for warning in report.warnings.iter().skip(5) {
            println!("{}", render_warning(warning));
        }
    }

    if let Some(path) = &args.report {
        write_report(path, &report)?;
        println!("Report: {}", path.display());
    }

    if args.strict && !report.warnings.is_empty() {
        bail!("doctor found {} warning(s)", report.warnings.len());
    }

    Ok(())
}
