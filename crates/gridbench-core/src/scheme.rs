//! Tessellation schemes and their reference cell areas.
//!
//! Average cell area per resolution is a published property of each grid,
//! not something derived here. Lookups outside the tables return `None`; no
//! interpolation is attempted.

use std::fmt;
use std::str::FromStr;

/// Average H3 hexagon area in km² for resolutions 0 through 15.
static H3_AVERAGE_AREA_KM2: &[(u8, f64)] = &[
    (0, 4357449.416078381),
    (1, 609788.441794133),
    (2, 86801.780398997),
    (3, 12393.434655088),
    (4, 1770.347654491),
    (5, 252.903858182),
    (6, 36.129062164),
    (7, 5.161293360),
    (8, 0.737327598),
    (9, 0.105332513),
    (10, 0.015047502),
    (11, 0.002149643),
    (12, 0.000307092),
    (13, 0.000043870),
    (14, 0.000006267),
    (15, 0.000000895),
];

/// Average S2 cell area in km² for levels 0 through 13.
static S2_AVERAGE_AREA_KM2: &[(u8, f64)] = &[
    (0, 85011012.19),
    (1, 21252753.05),
    (2, 5313188.26),
    (3, 1328297.07),
    (4, 332074.27),
    (5, 83018.57),
    (6, 20754.64),
    (7, 5188.66),
    (8, 1297.17),
    (9, 324.29),
    (10, 81.07),
    (11, 20.27),
    (12, 5.07),
    (13, 1.27),
];

/// The two grid systems under benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemeKind {
    /// Hierarchical hexagonal grid.
    H3,
    /// Adaptive quad-cell covering of the sphere.
    S2,
}

impl SchemeKind {
    /// All schemes in report order.
    pub const ALL: [SchemeKind; 2] = [SchemeKind::H3, SchemeKind::S2];

    /// Returns the lowercase name used in file names and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeKind::H3 => "h3",
            SchemeKind::S2 => "s2",
        }
    }

    /// Returns the finest resolution the grid defines.
    pub fn max_resolution(&self) -> u8 {
        match self {
            SchemeKind::H3 => 15,
            SchemeKind::S2 => 30,
        }
    }

    /// Returns the reference average cell area in km² at `resolution`.
    ///
    /// # Example
    ///
    /// ```
    /// use gridbench_core::SchemeKind;
    ///
    /// assert_eq!(SchemeKind::S2.average_area_km2(13), Some(1.27));
    /// assert_eq!(SchemeKind::S2.average_area_km2(14), None);
    /// ```
    pub fn average_area_km2(&self, resolution: u8) -> Option<f64> {
        let table = match self {
            SchemeKind::H3 => H3_AVERAGE_AREA_KM2,
            SchemeKind::S2 => S2_AVERAGE_AREA_KM2,
        };
        table
            .binary_search_by_key(&resolution, |&(r, _)| r)
            .ok()
            .map(|i| table[i].1)
    }

    /// Returns the finest resolution present in the area table.
    pub fn max_tabulated_resolution(&self) -> u8 {
        let table = match self {
            SchemeKind::H3 => H3_AVERAGE_AREA_KM2,
            SchemeKind::S2 => S2_AVERAGE_AREA_KM2,
        };
        table.last().map(|&(r, _)| r).unwrap_or(0)
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a scheme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScheme(pub String);

impl fmt::Display for UnknownScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheme {:?} (expected \"h3\" or \"s2\")", self.0)
    }
}

impl std::error::Error for UnknownScheme {}

impl FromStr for SchemeKind {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h3" => Ok(SchemeKind::H3),
            "s2" => Ok(SchemeKind::S2),
            _ => Err(UnknownScheme(s.to_string())),
        }
    }
}
