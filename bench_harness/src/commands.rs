use fundamentals::sorting::{merge_sort, SortAlgorithm};
use log::warn;

use crate::cli::{Command, InputArgs};
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::input::InputGenerator;
use crate::report::{print_catalog, Report, RunKind};
use crate::runner::{time_searches, time_sorts};
use crate::walkthrough;

/// Arrays above this size make the quadratic sorts take minutes.
const QUADRATIC_WARN_SIZE: usize = 50_000;

pub fn execute_command(cmd: Command, args: &InputArgs) -> Result<()> {
    match cmd {
        Command::Sort { algorithms } => {
            let config = HarnessConfig::resolve(args)?;
            let algorithms = config.sorts(algorithms);
            let quadratic = algorithms
                .iter()
                .any(|a| matches!(a, SortAlgorithm::Bubble | SortAlgorithm::Insertion));
            if quadratic && config.size > QUADRATIC_WARN_SIZE {
                warn!("{} elements with an O(n^2) sort selected; expect a long run", config.size);
            }

            let mut generator = InputGenerator::new(&config);
            let input = generator.array();
            let timings = time_sorts(&input, &algorithms)?;
            emit(Report::new(RunKind::Sort, &config, generator.seed(), timings), args.json)?;
        }
        Command::Search { algorithms } => {
            let config = HarnessConfig::resolve(args)?;
            let algorithms = config.searches(algorithms);

            let mut generator = InputGenerator::new(&config);
            let sorted = merge_sort(&generator.array());
            let Some(target) = generator.pick(&sorted) else {
                return Ok(());
            };
            let timings = time_searches(&sorted, target, &algorithms)?;
            let report = Report::new(RunKind::Search, &config, generator.seed(), timings).with_target(target);
            emit(report, args.json)?;
        }
        Command::Structures => {
            for line in walkthrough::structures() {
                println!("{line}");
            }
        }
        Command::List => print_catalog(),
    }
    Ok(())
}

fn emit(report: Report, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        report.print_table();
    }
    Ok(())
}
