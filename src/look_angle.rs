use nalgebra::Vector3;
use serde::Deserialize;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::geodetic::{prime_vertical_radius, GeodeticCoordinate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAngle {
    pub azimuth: f64,   // degrees
    pub elevation: f64, // degrees
    pub range: f64,     // meters
}

/// How the prime vertical radius is chosen for the two endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CurvatureMode {
    /// One radius, taken at the ground latitude, used for both points.
    #[default]
    GroundShared,
    /// Each point uses the radius at its own latitude.
    PerPoint,
}

/// How azimuth is recovered from the horizon vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AzimuthMode {
    /// Single argument arctangent of -east/south. Only resolves the bearing modulo 180
    /// degrees before the negative wrap.
    #[default]
    Legacy,
    /// Two argument arctangent over (east, north). A target with no horizontal offset
    /// gets the same 90 degree value as `Legacy`.
    Quadrant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookAngleOptions {
    pub curvature: CurvatureMode,
    pub azimuth: AzimuthMode,
}

/// Range vector rotated into the south/east/zenith frame of the ground station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopocentricHorizon {
    pub south: f64,
    pub east: f64,
    pub zenith: f64,
}

impl TopocentricHorizon {
    pub fn from_range_vector(range_vec: &Vector3<f64>, lat_rad: f64, lon_rad: f64) -> Self {
        let (sin_lat, cos_lat) = lat_rad.sin_cos();
        let (sin_lon, cos_lon) = lon_rad.sin_cos();

        let south = sin_lat * cos_lon * range_vec.x + sin_lat * sin_lon * range_vec.y
            - cos_lat * range_vec.z;

        let east = -sin_lon * range_vec.x + cos_lon * range_vec.y;

        let zenith = cos_lat * cos_lon * range_vec.x
            + cos_lat * sin_lon * range_vec.y
            + sin_lat * range_vec.z;

        Self {
            south,
            east,
            zenith,
        }
    }

    pub fn range(&self) -> f64 {
        (self.south.powi(2) + self.east.powi(2) + self.zenith.powi(2)).sqrt()
    }

    pub fn to_look_angle(&self, mode: AzimuthMode) -> LookAngle {
        let range = self.range();

        // Coincident points: straight up
        let elevation = if range == 0.0 {
            FRAC_PI_2
        } else {
            (self.zenith / range).asin()
        };

        let azimuth = match mode {
            AzimuthMode::Legacy => {
                if self.south == 0.0 {
                    FRAC_PI_2
                } else {
                    (-self.east / self.south).atan()
                }
            }
            AzimuthMode::Quadrant => {
                // No horizontal component: atan2 would pick 0 or 180 from the signs of zero
                if self.south == 0.0 && self.east == 0.0 {
                    FRAC_PI_2
                } else {
                    self.east.atan2(-self.south)
                }
            }
        };
        let azimuth = if azimuth < 0.0 {
            azimuth + 2.0 * PI
        } else {
            azimuth
        };

        LookAngle {
            azimuth: fold_full_turn(azimuth.to_degrees()),
            elevation: elevation.to_degrees(),
            range,
        }
    }
}

// Wrapping a tiny negative angle can round up to exactly one full turn
fn fold_full_turn(degrees: f64) -> f64 {
    if degrees >= 360.0 {
        degrees - 360.0
    } else {
        degrees
    }
}

/// Look angle from `ground` to `observer` using the legacy modes.
pub fn compute_look_angle(ground: GeodeticCoordinate, observer: GeodeticCoordinate) -> LookAngle {
    compute_look_angle_with(ground, observer, LookAngleOptions::default())
}

pub fn compute_look_angle_with(
    ground: GeodeticCoordinate,
    observer: GeodeticCoordinate,
    options: LookAngleOptions,
) -> LookAngle {
    let lat_ground = ground.latitude.to_radians();
    let lon_ground = ground.longitude.to_radians();

    let n_ground = prime_vertical_radius(lat_ground);
    let n_observer = match options.curvature {
        CurvatureMode::GroundShared => n_ground,
        CurvatureMode::PerPoint => prime_vertical_radius(observer.latitude.to_radians()),
    };

    let ground_ecr = ground.to_ecr_with_radius(n_ground);
    let observer_ecr = observer.to_ecr_with_radius(n_observer);

    let range_vec = observer_ecr - ground_ecr;

    TopocentricHorizon::from_range_vector(&range_vec, lat_ground, lon_ground)
        .to_look_angle(options.azimuth)
}
