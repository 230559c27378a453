//! Azimuth, elevation and slant range between two points on the WGS84 ellipsoid.
//!
//! Both points are converted to Earth Centered Rotational coordinates, the difference is
//! rotated into the south/east/zenith horizon frame of the ground point, and the result
//! is expressed as spherical look angles.

pub mod config;
pub mod error;
pub mod geodetic;
pub mod look_angle;

pub use geodetic::GeodeticCoordinate;
pub use look_angle::{
    compute_look_angle, compute_look_angle_with, AzimuthMode, CurvatureMode, LookAngle,
    LookAngleOptions,
};
