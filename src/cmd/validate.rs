use crate::reports;
use clap::Args;
use timeforge::config::Config;
use timeforge::error::TfResult;
use timeforge::fitness::Evaluator;
use timeforge::timetable::Timetable;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: ValidateArgs, timetable: &Timetable) -> TfResult<()> {
    args.config.validate()?;

    println!("\n🔎 === TIMETABLE AUDIT === 🔎");
    reports::print_timetable(timetable);

    let evaluator = Evaluator::new(args.config.weights.clone());
    let breakdown = evaluator.breakdown(timetable);
    reports::print_breakdown(&breakdown, &args.config.weights);

    if !breakdown.complete {
        println!("⚠️  Some sessions are unassigned; run `optimize` to schedule them.");
    }

    Ok(())
}
