use clap::Parser;

use crate::errors::RouteError;
use crate::importance::ImportanceMap;

/// Plan a bus route through a randomly generated town, favouring the
/// location types you rank as important.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Side length of the square town grid, prompted for if omitted
    #[arg(short, long, value_name = "N")]
    size: Option<usize>,

    /// Importance of a location type as Label=weight, may be repeated. Prompted for if omitted
    #[arg(short, long = "weight", value_name = "LABEL=WEIGHT")]
    weights: Vec<String>,

    /// Seed for the town generator, makes runs reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print the grid with the route drawn on it
    #[arg(long, default_value = "false")]
    no_overlay: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cfg {
    pub size: Option<usize>,
    pub importance: Option<ImportanceMap>,
    pub seed: Option<u64>,
    pub overlay: bool,
}

/// Parse the process arguments
pub fn parse() -> Result<Cfg, RouteError> {
    from_cli(Cli::parse())
}

/// Parse an explicit argument list, first item is the program name
pub fn parse_from<I, T>(args: I) -> Result<Cfg, RouteError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    from_cli(Cli::parse_from(args))
}

fn from_cli(cli: Cli) -> Result<Cfg, RouteError> {
    if cli.size == Some(0) {
        return Err(RouteError::InvalidGridSize("0".to_string()));
    }

    let importance = if cli.weights.is_empty() {
        None
    } else {
        Some(ImportanceMap::from_entries(&cli.weights)?)
    };

    Ok(Cfg {
        size: cli.size,
        importance,
        seed: cli.seed,
        overlay: !cli.no_overlay,
    })
}
