use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use serde::Serialize;

use abcompute::compute::{
    GroupObservation, MdeInput, PowerInput, SampleSizeInput, SimulationInput, achieved_power,
    estimate, evaluate_with_hypothesis, handle_json, minimum_detectable_effect, run_n_ab_sims,
};

mod cli;

fn main() {
    let args = cli::Cli::parse();
    // Set up logging level
    let default_filter = match args.verbosity {
        cli::LogLevel::silent => "off",
        cli::LogLevel::normal => "info",
        cli::LogLevel::verbose => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    run(&args).unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    });
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn percent(x: f64) -> String {
    format!("{:.2}%", x * 100.)
}

fn run(args: &cli::Cli) -> Result<()> {
    match &args.command {
        cli::Command::Significance(sig) => {
            let group_a = GroupObservation::new(sig.visitors_a, sig.conversions_a)
                .context("variant A")?;
            let group_b = GroupObservation::new(sig.visitors_b, sig.conversions_b)
                .context("variant B")?;
            info!("Running two-proportion z-test");
            let res = evaluate_with_hypothesis(
                &group_a,
                &group_b,
                sig.design.confidence,
                sig.design.hypothesis.into(),
            )?;
            if args.json {
                return print_json(&res);
            }
            println!("Conversion rate A: {}", percent(res.rate_a));
            println!("Conversion rate B: {}", percent(res.rate_b));
            match res.relative_lift {
                Some(lift) => println!("Lift:              {}", percent(lift)),
                None => println!("Lift:              undefined (no conversions in A)"),
            }
            println!("Z-score:           {:.3}", res.z_score);
            println!("P-value:           {:.4}", res.p_value);
            let confidence = percent(res.confidence_level);
            if res.is_significant {
                println!("Result is statistically significant at {confidence} confidence");
            } else {
                println!("Result is NOT statistically significant at {confidence} confidence");
            }
        }
        cli::Command::SampleSize(ss) => {
            let input = SampleSizeInput {
                baseline_rate: ss.effect.baseline,
                minimum_detectable_effect: ss.mde,
                confidence_level: ss.design.confidence,
                power: ss.power,
                effect_type: ss.effect.effect_type(),
                hypothesis: ss.design.hypothesis.into(),
                formula: ss.effect.formula.into(),
            };
            debug!("{input:?}");
            let res = estimate(&input)?;
            if args.json {
                return print_json(&res);
            }
            println!("Users per variant: {}", res.required_per_group);
            println!("Total users:       {}", res.total_required);
        }
        cli::Command::Power(pw) => {
            let input = PowerInput {
                baseline_rate: pw.effect.baseline,
                minimum_detectable_effect: pw.mde,
                confidence_level: pw.design.confidence,
                n_per_group: pw.n_per_group,
                effect_type: pw.effect.effect_type(),
                hypothesis: pw.design.hypothesis.into(),
                formula: pw.effect.formula.into(),
            };
            let power = achieved_power(&input)?;
            if args.json {
                return print_json(&serde_json::json!({ "power": power }));
            }
            println!("Power: {}", percent(power));
        }
        cli::Command::Mde(mde) => {
            let input = MdeInput {
                baseline_rate: mde.effect.baseline,
                n_per_group: mde.n_per_group,
                confidence_level: mde.design.confidence,
                power: mde.power,
                effect_type: mde.effect.effect_type(),
                hypothesis: mde.design.hypothesis.into(),
                formula: mde.effect.formula.into(),
            };
            let res = minimum_detectable_effect(&input)?;
            if args.json {
                return print_json(&res);
            }
            println!("Minimum detectable effect: {:.6}", res.minimum_detectable_effect);
            println!("Target conversion rate:    {}", percent(res.target_rate));
            println!("Achieved power:            {}", percent(res.achieved_power));
        }
        cli::Command::Simulate(sim) => {
            let input = SimulationInput {
                rate_a: sim.rate_a,
                rate_b: sim.rate_b,
                visitors_per_group: sim.n_per_group,
                confidence_level: sim.design.confidence,
                hypothesis: sim.design.hypothesis.into(),
                n_sims: sim.n_sims,
                seed: sim.seed,
            };
            let res = run_n_ab_sims(&input)?;
            if args.json {
                return print_json(&res);
            }
            println!(
                "Significant: {} of {} ({})",
                res.n_significant,
                res.n_sims,
                percent(res.rejection_rate)
            );
            println!("Mean z-score: {:.3} (sd {:.3})", res.mean_z_score, res.sd_z_score);
        }
        cli::Command::Request(req) => {
            let body = match &req.file {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("Could not read request file: {path}"))?,
                None => {
                    let mut body = String::new();
                    io::stdin().read_to_string(&mut body)?;
                    body
                }
            };
            println!("{}", handle_json(&body)?);
        }
    }
    Ok(())
}
