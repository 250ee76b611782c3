use crate::reports;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use timeforge::config::Config;
use timeforge::error::TfResult;
use timeforge::fitness::Evaluator;
use timeforge::report::SearchReport;
use timeforge::search::{
    AbcSearch, EvolutionarySearch, Mutator, ProgressCallback, SearchOptions, SearchStrategy,
};
use timeforge::timetable::Timetable;
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Elitist evolutionary search
    Ga,
    /// Artificial bee colony
    Abc,
}

#[derive(Args, Debug, Clone)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short = 's', long, value_enum, default_value = "ga")]
    pub strategy: Strategy,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Give up after this many seconds
    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    /// Write the full report as JSON
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

struct ConsoleProgress {
    interval: usize,
    deadline: Option<Instant>,
}

impl ProgressCallback for ConsoleProgress {
    fn on_progress(&self, iteration: usize, best_score: f64, clashes: Option<u64>) -> bool {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                println!("⏱️  Time limit reached at iteration {}", iteration);
                return false;
            }
        }
        if self.interval > 0 && iteration % self.interval == 0 {
            let clashes = clashes.map_or_else(|| "n/a".to_string(), |c| c.to_string());
            println!(
                "Iter {:5} | Best: {:.4} | Clashes: {}",
                iteration, best_score, clashes
            );
        }
        true
    }
}

pub fn run(args: OptimizeArgs, timetable: &Timetable) -> TfResult<()> {
    args.config.validate()?;

    let evaluator = Arc::new(Evaluator::new(args.config.weights.clone()));
    let mutator = Mutator::new(
        args.config.grid.get_days()?,
        args.config.grid.get_time_slots()?,
    );
    let options = SearchOptions::from(&args.config);

    let strategy: Box<dyn SearchStrategy> = match args.strategy {
        Strategy::Ga => Box::new(EvolutionarySearch::new(evaluator.clone(), mutator, options)),
        Strategy::Abc => Box::new(AbcSearch::new(evaluator.clone(), mutator, options)),
    };

    println!(
        "\n🐝 Running {} search over {} sessions",
        strategy.name(),
        timetable.len()
    );

    let callback = ConsoleProgress {
        interval: args.config.search.progress_interval,
        deadline: args
            .time
            .map(|secs| Instant::now() + Duration::from_secs(secs)),
    };
    let outcome = strategy.run(timetable, args.seed, &callback);
    let report = SearchReport::new(strategy.name(), outcome);

    println!("\n=== 🏆 BEST TIMETABLE ===");
    reports::print_timetable(&report.best);
    reports::print_breakdown(&evaluator.breakdown(&report.best), &args.config.weights);
    reports::print_summary(&report);

    if let Some(path) = &args.out {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)?;
        info!("💾 Report written to {}", path.display());
    }

    Ok(())
}
