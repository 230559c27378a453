use nalgebra::Vector3;
use std::str::FromStr;

use crate::error::CoordinateParseError;

// WGS84 ellipsoid parameters
pub const SEMI_MAJOR_AXIS: f64 = 6378137.0; // meters
pub const FLATTENING: f64 = 1.0 / 298.257223563;
// Published value, not derived from FLATTENING
pub const ECCENTRICITY: f64 = 8.1819190842621E-2;
pub const ECCENTRICITY_SQ: f64 = ECCENTRICITY * ECCENTRICITY;

/// A point referenced to the WGS84 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticCoordinate {
    pub latitude: f64,  // degrees
    pub longitude: f64, // degrees
    pub altitude: f64,  // meters above the ellipsoid
}

impl GeodeticCoordinate {
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Earth Centered Rotational position using the radius of curvature at this point's
    /// own latitude.
    pub fn to_ecr(&self) -> Vector3<f64> {
        let n = prime_vertical_radius(self.latitude.to_radians());
        self.to_ecr_with_radius(n)
    }

    /// Earth Centered Rotational position using a caller supplied prime vertical radius.
    ///
    /// The look angle calculation shares one radius between both endpoints, so the
    /// radius is taken as a parameter instead of recomputed here.
    pub fn to_ecr_with_radius(&self, n: f64) -> Vector3<f64> {
        let lat_rad = self.latitude.to_radians();
        let lon_rad = self.longitude.to_radians();

        let x = (n + self.altitude) * lat_rad.cos() * lon_rad.cos();
        let y = (n + self.altitude) * lat_rad.cos() * lon_rad.sin();
        let z = (n * (1.0 - ECCENTRICITY_SQ) + self.altitude) * lat_rad.sin();

        Vector3::new(x, y, z)
    }
}

/// Prime vertical radius of curvature at a geodetic latitude given in radians.
pub fn prime_vertical_radius(lat_rad: f64) -> f64 {
    SEMI_MAJOR_AXIS / (1.0 - ECCENTRICITY_SQ * lat_rad.sin().powi(2)).sqrt()
}

/// Parses `"lat,lon,alt"` in degrees, degrees and meters. Values are not range checked.
impl FromStr for GeodeticCoordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(CoordinateParseError::FieldCount(fields.len()));
        }

        let parse = |name: &'static str, value: &str| {
            value
                .parse::<f64>()
                .map_err(|source| CoordinateParseError::InvalidNumber {
                    field: name,
                    value: value.to_string(),
                    source,
                })
        };

        Ok(Self::new(
            parse("latitude", fields[0])?,
            parse("longitude", fields[1])?,
            parse("altitude", fields[2])?,
        ))
    }
}
