//! Compiled-in points of interest.
//!
//! Real locations in Santa Marta, Colombia. The sequencer copies this list
//! on every run; nothing mutates it.

use crate::geo::PointOfInterest;

pub const SANTA_MARTA: &[PointOfInterest] = &[
    PointOfInterest::new("Ocean Mall", 11.232024, -74.199805),
    PointOfInterest::new("Buena vista", 11.227931, -74.17257),
    PointOfInterest::new("Clínica los nogales", 11.234355, -74.177125),
    PointOfInterest::new("Olimpica av. del libertador", 11.239942, -74.181132),
    PointOfInterest::new("Kia Fujiyama", 11.238293, -74.212313),
    PointOfInterest::new("Zona Franca", 11.19718, -74.189283),
    PointOfInterest::new("Antonio nariño", 11.221661, -74.173054),
];
