use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use ride_fare::config::{DEFAULT_CURRENCY, DEFAULT_NOMINATIM_URL, DEFAULT_RATE_PER_KM};
use ride_fare::geolocation::LocationProvider;
use ride_fare::{
    Coordinate, FareConfig, FixedLocation, LocationError, NominatimConfig, NominatimGeocoder,
    RideSession, Unavailable,
};

/// Estimate the fare of a ride between two places.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Latitude of the pickup point. The default position is used when omitted.
    #[clap(long, requires = "from_lon", allow_hyphen_values = true)]
    from_lat: Option<f64>,

    /// Longitude of the pickup point.
    #[clap(long, requires = "from_lat", allow_hyphen_values = true)]
    from_lon: Option<f64>,

    /// Destination name, resolved with Nominatim.
    #[clap(long, conflicts_with_all = ["to_lat", "to_lon"])]
    to: Option<String>,

    /// Latitude of the destination.
    #[clap(long, requires = "to_lon", allow_hyphen_values = true)]
    to_lat: Option<f64>,

    /// Longitude of the destination.
    #[clap(long, requires = "to_lat", allow_hyphen_values = true)]
    to_lon: Option<f64>,

    /// Price of one kilometer.
    #[clap(long, env = "RIDE_FARE_RATE_PER_KM", default_value_t = DEFAULT_RATE_PER_KM)]
    rate: f64,

    /// Currency label printed in front of the fare.
    #[clap(long, env = "RIDE_FARE_CURRENCY", default_value = DEFAULT_CURRENCY)]
    currency: String,

    #[clap(long, env = "NOMINATIM_URL", default_value = DEFAULT_NOMINATIM_URL)]
    nominatim_url: String,

    /// User-Agent sent to Nominatim.
    #[clap(long, env = "NOMINATIM_USER_AGENT")]
    user_agent: Option<String>,
}

/// The pickup point given on the command line, if any.
enum CommandLineLocation {
    Given(FixedLocation),
    Missing(Unavailable),
}

impl LocationProvider for CommandLineLocation {
    fn current_location(&self) -> Result<Coordinate, LocationError> {
        match self {
            Self::Given(location) => location.current_location(),
            Self::Missing(unavailable) => unavailable.current_location(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = FareConfig::new(cli.rate, cli.currency)?;
    let provider = match (cli.from_lat, cli.from_lon) {
        (Some(latitude), Some(longitude)) => {
            CommandLineLocation::Given(FixedLocation(Coordinate::new(latitude, longitude)?))
        }
        _ => CommandLineLocation::Missing(Unavailable),
    };

    let mut nominatim = NominatimConfig {
        base_url: cli.nominatim_url,
        ..NominatimConfig::default()
    };
    if let Some(user_agent) = cli.user_agent {
        nominatim.user_agent = user_agent;
    }
    let geocoder =
        NominatimGeocoder::new(&nominatim).context("failed to build the geocoding client")?;
    let mut session = RideSession::from_provider(&provider, config, geocoder)?;

    let estimate = match (cli.to, cli.to_lat, cli.to_lon) {
        (Some(query), _, _) => session
            .search(&query)
            .with_context(|| format!("failed to estimate the fare to `{}`", query))?,
        (None, Some(latitude), Some(longitude)) => {
            session.estimate_to(Coordinate::new(latitude, longitude)?)?
        }
        _ => bail!("either `--to` or `--to-lat` and `--to-lon` must be given"),
    };
    info!("Done");

    println!("Source: {}", session.source());
    if let Some(destination) = session.destination() {
        println!("Destination: {}", destination);
    }
    println!("{}", estimate);
    if let Some(url) = session.directions_url() {
        println!("Directions: {}", url);
    }
    Ok(())
}
