use clap::{Parser, Subcommand, ValueEnum};
use measureit::config::Config;
use measureit::logging;
use measureit::units::{
    self, parse_quantity, parse_unit, parse_value, Category, ConversionEngine, ConversionError,
    OutputFormat, Report, UnitPolicy,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "measureit")]
#[command(about = "Convert temperatures, weights and distances", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: measureit.toml in the working directory, if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Decimals shown for converted values
    #[arg(short, long, global = true)]
    decimals: Option<usize>,

    /// Handling of units that do not belong to the category
    #[arg(long, global = true, value_enum)]
    policy: Option<PolicyArg>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = FormatArg::Plain)]
    format: FormatArg,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available categories
    Categories,

    /// List the units of a category
    Units {
        /// Category (e.g., "Weight")
        category: String,
    },

    /// Convert a value between two units of a category
    Convert {
        /// Category (e.g., "Temperature")
        category: String,

        /// Source unit (e.g., "Celsius")
        from: String,

        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Target unit (default: the second unit of the category)
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Convert a quantity expression such as "12.5 kg"
    Expr {
        /// Quantity expression
        #[arg(allow_hyphen_values = true)]
        quantity: String,

        /// Target unit (default: the second unit of the source unit's category)
        #[arg(short, long)]
        to: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Strict,
    Passthrough,
}

impl From<PolicyArg> for UnitPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => UnitPolicy::Strict,
            PolicyArg::Passthrough => UnitPolicy::Passthrough,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Plain,
    Sentence,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Sentence => OutputFormat::Sentence,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    logging::init(&config.log_level);

    let engine = ConversionEngine::new(config.unit_policy);
    let format = OutputFormat::from(cli.format);

    let outcome = match &cli.command {
        Commands::Categories => list_categories(format),
        Commands::Units { category } => list_units(category, format),
        Commands::Convert {
            category,
            from,
            value,
            to,
        } => convert_labels(&engine, &config, format, category, from, to.as_deref(), value),
        Commands::Expr { quantity, to } => {
            convert_expression(&engine, &config, format, quantity, to.as_deref())
        }
    };

    if let Err(e) = outcome {
        match e.downcast_ref::<ConversionError>() {
            Some(err) => eprintln!("{}", err.notice()),
            None => eprintln!("Error: {}", e),
        }
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::discover(cli.config.as_deref())?;

    // Flags override the file
    if let Some(decimals) = cli.decimals {
        config.decimals = decimals;
    }
    if let Some(policy) = cli.policy {
        config.unit_policy = policy.into();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config.validate()?;

    Ok(config)
}

fn list_categories(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&Category::ALL)?);
        return Ok(());
    }

    for category in Category::ALL {
        println!("{}", category);
    }
    Ok(())
}

fn list_units(category: &str, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let category: Category = category.parse()?;
    let units = units::units_for(category);

    if format == OutputFormat::Json {
        let listing = serde_json::json!({
            "category": category,
            "units": units,
            "default_target": category.default_target(),
        });
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let default_target = category.default_target();
    for unit in units {
        if *unit == default_target {
            println!("{} ({}) [default target]", unit, unit.symbol());
        } else {
            println!("{} ({})", unit, unit.symbol());
        }
    }
    Ok(())
}

fn convert_labels(
    engine: &ConversionEngine,
    config: &Config,
    format: OutputFormat,
    category: &str,
    from: &str,
    to: Option<&str>,
    raw_value: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    // Bad input never reaches the engine
    let value = parse_value(raw_value)?;
    let category: Category = category.parse()?;
    let to = to.unwrap_or_else(|| category.default_target().label());

    let result = engine.convert_labels(category.label(), from, to, raw_value)?;

    let report = Report::new(
        category.label(),
        display_label(from),
        display_label(to),
        value,
        result,
        config.decimals,
    );
    println!("{}", units::render(&report, format)?);
    Ok(())
}

fn convert_expression(
    engine: &ConversionEngine,
    config: &Config,
    format: OutputFormat,
    quantity: &str,
    to: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let quantity = parse_quantity(quantity)?;
    let category = quantity.unit.category();
    let to = to.unwrap_or_else(|| category.default_target().label());

    let result = engine.convert_labels(
        category.label(),
        quantity.unit.label(),
        to,
        &quantity.value.to_string(),
    )?;

    let report = Report::new(
        category.label(),
        quantity.unit.label(),
        display_label(to),
        quantity.value,
        result,
        config.decimals,
    );
    println!("{}", units::render(&report, format)?);
    Ok(())
}

/// Canonical label for known units, the raw label otherwise
fn display_label(label: &str) -> &str {
    parse_unit(label).map_or(label, |unit| unit.label())
}
