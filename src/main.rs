use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use lookangle::config::Config;
use lookangle::{
    compute_look_angle_with, AzimuthMode, CurvatureMode, GeodeticCoordinate, LookAngle,
    LookAngleOptions,
};

/// Print the look angle from a ground station to an observer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Config file (defaults to <config dir>/lookangle/config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ground station as LAT,LON,ALT (degrees, degrees, meters)
    #[arg(long, allow_hyphen_values = true)]
    ground: Option<GeodeticCoordinate>,

    /// Observer as LAT,LON,ALT (degrees, degrees, meters)
    #[arg(long, allow_hyphen_values = true)]
    observer: Option<GeodeticCoordinate>,

    /// Compute the radius of curvature at each point's own latitude
    #[arg(long)]
    per_point_curvature: bool,

    /// Use a quadrant aware arctangent for azimuth
    #[arg(long)]
    quadrant_azimuth: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load_default(),
    };

    let (ground, observer, options) = resolve(&args, config);

    log::debug!(
        "ground {:?}, observer {:?}, options {:?}",
        ground,
        observer,
        options
    );

    let look = compute_look_angle_with(ground, observer, options);
    print!("{}", format_look_angle(&look));

    Ok(())
}

/// Command line values win over config values, which already carry the demo defaults.
fn resolve(
    args: &Args,
    config: Config,
) -> (GeodeticCoordinate, GeodeticCoordinate, LookAngleOptions) {
    let ground = args.ground.unwrap_or_else(|| config.ground.coordinate());
    let observer = args.observer.unwrap_or_else(|| config.observer.coordinate());

    let mut options = config.options;
    if args.per_point_curvature {
        options.curvature = CurvatureMode::PerPoint;
    }
    if args.quadrant_azimuth {
        options.azimuth = AzimuthMode::Quadrant;
    }

    (ground, observer, options)
}

fn format_look_angle(look: &LookAngle) -> String {
    format!(
        "\nAz: {:.2}\nEl: {:.2}\nRange: {:.2}\n\n",
        look.azimuth, look.elevation, look.range
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookangle::compute_look_angle;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("lookangle").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_resolve_defaults() {
        let (ground, observer, options) = resolve(&parse(&[]), Config::default());
        assert_eq!(ground, GeodeticCoordinate::new(40.0, 75.0, 0.0));
        assert_eq!(observer, GeodeticCoordinate::new(40.0, 74.0, 0.0));
        assert_eq!(options, LookAngleOptions::default());
    }

    #[test]
    fn test_resolve_config_over_defaults() {
        let config: Config = toml::from_str(
            "[observer]\nlatitude = 41.5\n\n[options]\ncurvature = \"per-point\"\n",
        )
        .unwrap();
        let (ground, observer, options) = resolve(&parse(&[]), config);

        assert_eq!(ground, GeodeticCoordinate::new(40.0, 75.0, 0.0));
        assert_eq!(observer, GeodeticCoordinate::new(41.5, 74.0, 0.0));
        assert_eq!(options.curvature, CurvatureMode::PerPoint);
        assert_eq!(options.azimuth, AzimuthMode::Legacy);
    }

    #[test]
    fn test_resolve_args_over_config() {
        let config: Config = toml::from_str(
            "[ground]\nlatitude = 10.0\nlongitude = 20.0\n\n[observer]\naltitude = 900.0\n",
        )
        .unwrap();
        let args = parse(&["--ground", "-5,-6,7", "--quadrant-azimuth"]);
        let (ground, observer, options) = resolve(&args, config);

        assert_eq!(ground, GeodeticCoordinate::new(-5.0, -6.0, 7.0));
        // Not given on the command line, so the config value stands
        assert_eq!(observer, GeodeticCoordinate::new(40.0, 74.0, 900.0));
        assert_eq!(options.azimuth, AzimuthMode::Quadrant);
        assert_eq!(options.curvature, CurvatureMode::GroundShared);
    }

    #[test]
    fn test_resolve_flags_over_config_options() {
        let config: Config = toml::from_str(
            "[options]\ncurvature = \"ground-shared\"\nazimuth = \"legacy\"\n",
        )
        .unwrap();
        let args = parse(&["--per-point-curvature", "--quadrant-azimuth"]);
        let (_, _, options) = resolve(&args, config);

        assert_eq!(
            options,
            LookAngleOptions {
                curvature: CurvatureMode::PerPoint,
                azimuth: AzimuthMode::Quadrant,
            }
        );
    }

    #[test]
    fn test_demo_output() {
        let look = compute_look_angle(
            GeodeticCoordinate::new(40.0, 75.0, 0.0),
            GeodeticCoordinate::new(40.0, 74.0, 0.0),
        );
        // Double precision rounds the range up a digit; the single precision build printed 85392.76
        assert_eq!(
            format_look_angle(&look),
            "\nAz: 270.32\nEl: -0.38\nRange: 85392.77\n\n"
        );
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from([
            "lookangle",
            "--ground",
            "-33.9,18.4,10",
            "--observer",
            "-34,18.5,400000",
            "--quadrant-azimuth",
        ])
        .unwrap();

        assert_eq!(args.ground, Some(GeodeticCoordinate::new(-33.9, 18.4, 10.0)));
        assert_eq!(args.observer.unwrap().altitude, 400000.0);
        assert!(args.quadrant_azimuth);
        assert!(!args.per_point_curvature);
        assert!(args.config.is_none());

        assert!(Args::try_parse_from(["lookangle", "--ground", "1,2"]).is_err());
    }

    #[test]
    fn test_no_args() {
        let args = Args::try_parse_from(["lookangle"]).unwrap();
        assert!(args.ground.is_none());
        assert!(args.observer.is_none());
    }
}
