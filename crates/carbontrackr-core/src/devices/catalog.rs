//! Static appliance catalog: wattage presets and the AC power table.
//!
//! All tables here are fixed reference data; there is no runtime write path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named wattage preset for a device type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerPreset {
    pub label: &'static str,
    pub watts: u32,
}

/// A device type with its selectable wattage presets.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeviceType {
    pub id: &'static str,
    pub name: &'static str,
    pub presets: &'static [PowerPreset],
}

pub static DEVICE_TYPES: [DeviceType; 5] = [
    DeviceType {
        id: "smartphone",
        name: "Smartphone",
        presets: &[
            PowerPreset { label: "Low", watts: 5 },
            PowerPreset { label: "Medium", watts: 20 },
            PowerPreset { label: "High", watts: 30 },
        ],
    },
    DeviceType {
        id: "laptop",
        name: "Laptop",
        presets: &[
            PowerPreset { label: "Low", watts: 30 },
            PowerPreset { label: "Medium", watts: 50 },
            PowerPreset { label: "High", watts: 100 },
        ],
    },
    DeviceType {
        id: "tv",
        name: "TV",
        presets: &[
            PowerPreset { label: "Low", watts: 40 },
            PowerPreset { label: "Medium", watts: 80 },
            PowerPreset { label: "High", watts: 150 },
        ],
    },
    DeviceType {
        id: "refrigerator",
        name: "Refrigerator",
        presets: &[
            PowerPreset { label: "Low", watts: 50 },
            PowerPreset { label: "Medium", watts: 100 },
            PowerPreset { label: "High", watts: 200 },
        ],
    },
    DeviceType {
        id: "washing",
        name: "Washing Machine",
        presets: &[
            PowerPreset { label: "Low", watts: 500 },
            PowerPreset { label: "Medium", watts: 1000 },
            PowerPreset { label: "High", watts: 2000 },
        ],
    },
];

/// Look up a device type by its id.
pub fn device_type(id: &str) -> Option<&'static DeviceType> {
    DEVICE_TYPES.iter().find(|d| d.id == id)
}

/// Air-conditioner capacity in tons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcTonnage {
    #[serde(rename = "1.0")]
    One,
    #[serde(rename = "1.5")]
    OneAndHalf,
    #[serde(rename = "2.0")]
    Two,
}

impl AcTonnage {
    fn row(self) -> usize {
        match self {
            Self::One => 0,
            Self::OneAndHalf => 1,
            Self::Two => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "1.0",
            Self::OneAndHalf => "1.5",
            Self::Two => "2.0",
        }
    }
}

impl fmt::Display for AcTonnage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcTonnage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.0" | "1" => Ok(Self::One),
            "1.5" => Ok(Self::OneAndHalf),
            "2.0" | "2" => Ok(Self::Two),
            other => Err(format!("unknown AC tonnage {:?}", other)),
        }
    }
}

/// AC draw in watts by tonnage row and BEE star-rating column (1 to 5 stars).
const AC_POWER_TABLE: [[u32; 5]; 3] = [
    [1065, 980, 875, 780, 700],
    [1590, 1460, 1315, 1170, 1050],
    [2120, 1945, 1750, 1560, 1400],
];

/// Rated draw for an AC; `None` for a star rating outside 1 to 5.
pub fn ac_watts(tonnage: AcTonnage, star_rating: u8) -> Option<u32> {
    if !(1..=5).contains(&star_rating) {
        return None;
    }
    Some(AC_POWER_TABLE[tonnage.row()][usize::from(star_rating - 1)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ac_table_lookup() {
        assert_eq!(ac_watts(AcTonnage::One, 5), Some(700));
        assert_eq!(ac_watts(AcTonnage::OneAndHalf, 3), Some(1315));
        assert_eq!(ac_watts(AcTonnage::Two, 1), Some(2120));
    }

    #[test]
    fn higher_star_rating_draws_less() {
        for tonnage in [AcTonnage::One, AcTonnage::OneAndHalf, AcTonnage::Two] {
            for stars in 1..5 {
                assert!(ac_watts(tonnage, stars) > ac_watts(tonnage, stars + 1));
            }
        }
    }

    #[test]
    fn invalid_star_rating() {
        assert_eq!(ac_watts(AcTonnage::One, 0), None);
        assert_eq!(ac_watts(AcTonnage::One, 6), None);
    }

    #[test]
    fn tonnage_round_trips() {
        for s in ["1.0", "1.5", "2.0"] {
            assert_eq!(s.parse::<AcTonnage>().unwrap().as_str(), s);
        }
        assert!("3.0".parse::<AcTonnage>().is_err());
    }

    #[test]
    fn catalog_lookup() {
        assert_eq!(device_type("laptop").unwrap().name, "Laptop");
        assert!(device_type("toaster").is_none());
    }
}
