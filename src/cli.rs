use clap::{Args, Parser, Subcommand, ValueEnum};

use abcompute::compute::{EffectType, HypothesisType, SampleSizeFormula};

#[derive(Parser, Debug)]
#[command(
    name = "abcompute",
    version,
    about = "Significance, sample size and power for conversion rate A/B tests"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(
        long,
        global = true,
        help = "Print results as JSON instead of text"
    )]
    pub json: bool,

    #[arg(
        value_enum,
        long,
        global = true,
        default_value = "normal",
        value_name = "VERBOSITY",
        help = "Verbosity level"
    )]
    pub verbosity: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Two-proportion z-test for an observed experiment
    Significance(SignificanceArgs),
    /// Visitors needed per variant before running an experiment
    SampleSize(SampleSizeArgs),
    /// Power of a design with a fixed number of visitors per variant
    Power(PowerArgs),
    /// Smallest effect a design with a fixed number of visitors can detect
    Mde(MdeArgs),
    /// Monte Carlo estimate of how often a design rejects
    Simulate(SimulateArgs),
    /// Answer a JSON request read from a file, or stdin when no file is given
    Request(RequestArgs),
}

#[derive(Args, Debug)]
pub struct DesignArgs {
    #[arg(
        long,
        short = 'c',
        default_value = "0.95",
        value_name = "CONFIDENCE",
        help = "Confidence level, in (0, 1)"
    )]
    pub confidence: f64,

    #[arg(
        value_enum,
        long,
        default_value = "two-sided",
        value_name = "HYPOTHESIS",
        help = "Alternative hypothesis for variant B against variant A"
    )]
    pub hypothesis: Hypothesis,
}

#[derive(Args, Debug)]
pub struct SignificanceArgs {
    #[arg(long, value_name = "VISITORS_A", help = "Visitors in variant A")]
    pub visitors_a: u64,

    #[arg(long, value_name = "CONVERSIONS_A", help = "Conversions in variant A")]
    pub conversions_a: u64,

    #[arg(long, value_name = "VISITORS_B", help = "Visitors in variant B")]
    pub visitors_b: u64,

    #[arg(long, value_name = "CONVERSIONS_B", help = "Conversions in variant B")]
    pub conversions_b: u64,

    #[command(flatten)]
    pub design: DesignArgs,
}

#[derive(Args, Debug)]
pub struct EffectArgs {
    #[arg(
        long,
        short = 'b',
        value_name = "BASELINE",
        help = "Baseline conversion rate, in (0, 1)"
    )]
    pub baseline: f64,

    #[arg(
        long,
        help = "Interpret the effect as a relative lift of the baseline"
    )]
    pub relative: bool,

    #[arg(
        value_enum,
        long,
        default_value = "standard",
        value_name = "FORMULA",
        help = "Sample size formula"
    )]
    pub formula: Formula,
}

impl EffectArgs {
    pub fn effect_type(&self) -> EffectType {
        if self.relative {
            EffectType::Relative
        } else {
            EffectType::Absolute
        }
    }
}

#[derive(Args, Debug)]
pub struct SampleSizeArgs {
    #[command(flatten)]
    pub effect: EffectArgs,

    #[arg(
        long,
        short = 'e',
        value_name = "MDE",
        help = "Minimum detectable effect"
    )]
    pub mde: f64,

    #[arg(
        long,
        short = 'p',
        default_value = "0.8",
        value_name = "POWER",
        help = "Statistical power, in (0, 1)"
    )]
    pub power: f64,

    #[command(flatten)]
    pub design: DesignArgs,
}

#[derive(Args, Debug)]
pub struct PowerArgs {
    #[command(flatten)]
    pub effect: EffectArgs,

    #[arg(
        long,
        short = 'e',
        value_name = "MDE",
        help = "Effect the design should detect"
    )]
    pub mde: f64,

    #[arg(
        long,
        short = 'n',
        value_name = "N_PER_GROUP",
        help = "Visitors per variant"
    )]
    pub n_per_group: u64,

    #[command(flatten)]
    pub design: DesignArgs,
}

#[derive(Args, Debug)]
pub struct MdeArgs {
    #[command(flatten)]
    pub effect: EffectArgs,

    #[arg(
        long,
        short = 'n',
        value_name = "N_PER_GROUP",
        help = "Visitors per variant"
    )]
    pub n_per_group: u64,

    #[arg(
        long,
        short = 'p',
        default_value = "0.8",
        value_name = "POWER",
        help = "Statistical power, in (0, 1)"
    )]
    pub power: f64,

    #[command(flatten)]
    pub design: DesignArgs,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[arg(long, value_name = "RATE_A", help = "True conversion rate of variant A")]
    pub rate_a: f64,

    #[arg(long, value_name = "RATE_B", help = "True conversion rate of variant B")]
    pub rate_b: f64,

    #[arg(
        long,
        short = 'n',
        value_name = "N_PER_GROUP",
        help = "Visitors per variant"
    )]
    pub n_per_group: u64,

    #[arg(
        long,
        default_value = "1000",
        value_name = "N_SIMS",
        help = "Number of simulated experiments"
    )]
    pub n_sims: usize,

    #[arg(long, default_value = "24601", value_name = "SEED", help = "Random seed")]
    pub seed: u64,

    #[command(flatten)]
    pub design: DesignArgs,
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    #[arg(value_name = "FILE", help = "JSON request file")]
    pub file: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Hypothesis {
    TwoSided,
    BGreater,
    BLess,
}

impl From<Hypothesis> for HypothesisType {
    fn from(h: Hypothesis) -> HypothesisType {
        match h {
            Hypothesis::TwoSided => HypothesisType::NotEqual,
            Hypothesis::BGreater => HypothesisType::TrtGreater,
            Hypothesis::BLess => HypothesisType::TrtLess,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Formula {
    Standard,
    Pooled,
}

impl From<Formula> for SampleSizeFormula {
    fn from(f: Formula) -> SampleSizeFormula {
        match f {
            Formula::Standard => SampleSizeFormula::Standard,
            Formula::Pooled => SampleSizeFormula::Pooled,
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(ValueEnum, Clone, Debug)]
pub enum LogLevel {
    verbose,
    normal,
    silent,
}
