use clap::Parser;
use draft_synergy::cli::{simulation_config, Cli, Commands};
use draft_synergy::index::MatchIndex;
use draft_synergy::logging::init_tracing;
use draft_synergy::pack::PackDatabase;
use draft_synergy::report::{format_index_overview, format_summary, save_summary, PlayabilityMatrix};
use draft_synergy::simulation::{run_simulation, SimulationConfig};
use indicatif::{ProgressBar, ProgressStyle};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Simulate {
            packs,
            trials,
            seed,
            strategies,
            report,
        }) => {
            let config = simulation_config(trials, seed, strategies);
            simulate(&packs, &config, report.as_deref());
        }
        Some(Commands::Matrix { packs, output }) => {
            write_matrix(&packs, &output);
        }
        Some(Commands::Pair { first, second, packs }) => {
            classify_pair(&packs, &first, &second);
        }
        Some(Commands::Synergies { packs }) => {
            list_synergies(&packs);
        }
        None => {
            // Default: run every strategy with top-level args
            let config = simulation_config(cli.trials, cli.seed, Vec::new());
            simulate(&cli.packs, &config, None);
        }
    }
}

fn load_packs(path: &str) -> PackDatabase {
    match PackDatabase::from_file(path) {
        Ok(db) => {
            eprintln!("✓ Loaded {} packs from {}", db.pack_count(), path);
            db
        }
        Err(e) => {
            eprintln!("✗ Failed to load packs from '{}': {}", path, e);
            std::process::exit(1);
        }
    }
}

fn build_index(db: &PackDatabase) -> MatchIndex {
    match MatchIndex::build(db.packs()) {
        Ok(index) => {
            eprintln!(
                "✓ Indexed {} pack pairs ({} synergistic type pairs)",
                index.len(),
                index.synergies().len()
            );
            index
        }
        Err(e) => {
            eprintln!("✗ Failed to build match index: {}", e);
            std::process::exit(1);
        }
    }
}

fn simulate(packs_file: &str, config: &SimulationConfig, report_file: Option<&str>) {
    let db = load_packs(packs_file);
    let index = build_index(&db);

    println!("\n=== Draft Synergy Simulator ===\n");
    println!("Packs: {} ({} packs)", packs_file, db.pack_count());
    println!("Trials per strategy: {}", config.trials);
    if let Some(s) = config.seed {
        println!("Seed: {}", s);
    }
    println!("\nPair verdicts:");
    print!("{}", format_index_overview(&index));
    println!();

    let progress = ProgressBar::new(config.strategies.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let start = std::time::Instant::now();
    let summary = match run_simulation(config, db.packs(), &index, |outcome| {
        progress.set_message(outcome.strategy);
        progress.inc(1);
    }) {
        Ok(summary) => summary,
        Err(e) => {
            progress.abandon();
            eprintln!("✗ Simulation failed: {}", e);
            std::process::exit(1);
        }
    };
    progress.finish_and_clear();
    let elapsed = start.elapsed();

    let text = format_summary(&summary, chrono::Local::now());
    println!("{}", text);

    let total_drafts = summary.trials * summary.outcomes.len() as u64;
    println!(
        "Simulation completed in {:.2?} ({:.0} drafts/sec)",
        elapsed,
        total_drafts as f64 / elapsed.as_secs_f64()
    );

    if let Some(path) = report_file {
        match save_summary(path, &text) {
            Ok(()) => println!("\nSummary saved to: {}", path),
            Err(e) => eprintln!("\n✗ Failed to save summary: {}", e),
        }
    }
}

fn write_matrix(packs_file: &str, output: &str) {
    let db = load_packs(packs_file);
    let index = build_index(&db);
    let matrix = PlayabilityMatrix::from_index(&index);

    match matrix.save(output) {
        Ok(()) => println!("Playability matrix written to: {}", output),
        Err(e) => {
            eprintln!("✗ Failed to write matrix '{}': {}", output, e);
            std::process::exit(1);
        }
    }
}

fn classify_pair(packs_file: &str, first: &str, second: &str) {
    let db = load_packs(packs_file);
    let index = build_index(&db);

    let (a, b) = match (db.find(first), db.find(second)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let verdict = match index.lookup(a, b) {
        Ok(verdict) => verdict,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let join = |items: Vec<String>| if items.is_empty() { "-".to_string() } else { items.join(", ") };

    println!("\n{} + {}: {}\n", a, b, verdict);
    println!(
        "  Shared colours:    {}",
        join(a.matching_colours(b).iter().map(|c| c.to_string()).collect())
    );
    println!(
        "  Shared types:      {}",
        join(a.matching_types(b).iter().map(|t| t.to_string()).collect())
    );
    println!(
        "  Synergistic pairs: {}",
        join(
            a.synergistic_types(b, index.synergies())
                .iter()
                .map(|p| p.to_string())
                .collect()
        )
    );
}

fn list_synergies(packs_file: &str) {
    let db = load_packs(packs_file);
    let index = build_index(&db);

    println!("\n=== Synergistic Type Pairs ===\n");
    for pair in index.synergies().pairs() {
        let (a, b) = pair.types();
        let sources: Vec<&str> = db
            .packs()
            .iter()
            .filter(|p| p.is_single_colour() && p.creature_types().len() == 2)
            .filter(|p| p.creature_types().contains(&a) && p.creature_types().contains(&b))
            .map(|p| p.label())
            .collect();
        println!("  {:20} via {}", pair.to_string(), sources.join(", "));
    }
}
