// Literal chart and map datasets, shared by both languages

use crate::telemetry::{Location, PatientStatus};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DailyCases {
    pub date: &'static str,
    pub cases: u32,
    pub recovered: u32,
    pub deaths: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DistrictShare {
    pub name: &'static str,
    pub cases: u32,
    /// Hex colour of the pie slice
    pub color: &'static str,
}

pub const DAILY_CASES: [DailyCases; 5] = [
    DailyCases {
        date: "May 19",
        cases: 23,
        recovered: 45,
        deaths: 1,
    },
    DailyCases {
        date: "May 20",
        cases: 34,
        recovered: 52,
        deaths: 0,
    },
    DailyCases {
        date: "May 21",
        cases: 28,
        recovered: 38,
        deaths: 2,
    },
    DailyCases {
        date: "May 22",
        cases: 41,
        recovered: 61,
        deaths: 1,
    },
    DailyCases {
        date: "May 23",
        cases: 28,
        recovered: 44,
        deaths: 0,
    },
];

pub const DISTRICT_SHARES: [DistrictShare; 5] = [
    DistrictShare {
        name: "Mumbai",
        cases: 234,
        color: "#FF6B6B",
    },
    DistrictShare {
        name: "Pune",
        cases: 156,
        color: "#4ECDC4",
    },
    DistrictShare {
        name: "Nagpur",
        cases: 89,
        color: "#45B7D1",
    },
    DistrictShare {
        name: "Nashik",
        cases: 67,
        color: "#FFA07A",
    },
    DistrictShare {
        name: "Others",
        cases: 145,
        color: "#98D8C8",
    },
];

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub daily: &'static [DailyCases],
    pub districts: &'static [DistrictShare],
    pub total_cases: u32,
    pub total_recovered: u32,
    pub total_deaths: u32,
}

impl ChartData {
    pub fn literal() -> Self {
        Self {
            daily: &DAILY_CASES,
            districts: &DISTRICT_SHARES,
            total_cases: DAILY_CASES.iter().map(|d| d.cases).sum(),
            total_recovered: DAILY_CASES.iter().map(|d| d.recovered).sum(),
            total_deaths: DAILY_CASES.iter().map(|d| d.deaths).sum(),
        }
    }
}

/// Maharashtra, as the map opens
pub const MAP_CENTER: Location = Location {
    lat: 19.7515,
    lng: 75.7139,
};
pub const MAP_ZOOM: u8 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hotspot {
    pub city: &'static str,
    pub location: Location,
    pub status: PatientStatus,
    pub count: u32,
}

impl Hotspot {
    /// Marker colour: red for critical, orange for warning, green otherwise
    pub fn color(&self) -> &'static str {
        match self.status {
            PatientStatus::Critical => "red",
            PatientStatus::Warning => "orange",
            _ => "green",
        }
    }

    pub fn radius(&self) -> u32 {
        self.count + 5
    }
}

const fn hotspot(
    city: &'static str,
    lat: f64,
    lng: f64,
    status: PatientStatus,
    count: u32,
) -> Hotspot {
    Hotspot {
        city,
        location: Location { lat, lng },
        status,
        count,
    }
}

pub const HOTSPOTS: [Hotspot; 5] = [
    hotspot("Mumbai", 19.0760, 72.8777, PatientStatus::Critical, 15),
    hotspot("Pune", 18.5204, 73.8567, PatientStatus::Warning, 8),
    hotspot("Nagpur", 21.1458, 79.0882, PatientStatus::Stable, 3),
    hotspot("Nashik", 19.9975, 73.7898, PatientStatus::Warning, 6),
    hotspot("Aurangabad", 19.8762, 75.3433, PatientStatus::Stable, 2),
];

#[derive(Clone, Debug, Serialize)]
pub struct ContainmentZone {
    pub name: &'static str,
    pub color: &'static str,
    pub polygon: &'static [Location],
}

pub const CONTAINMENT_ZONES: [ContainmentZone; 1] = [ContainmentZone {
    name: "Containment Zone - Bandra Area",
    color: "red",
    polygon: &[
        Location {
            lat: 19.0760,
            lng: 72.8777,
        },
        Location {
            lat: 19.0860,
            lng: 72.8877,
        },
        Location {
            lat: 19.0960,
            lng: 72.8777,
        },
        Location {
            lat: 19.0860,
            lng: 72.8677,
        },
    ],
}];

/// Hotspot as the map draws it, with colour and radius resolved
#[derive(Clone, Debug, Serialize)]
pub struct MapMarker {
    #[serde(flatten)]
    pub hotspot: Hotspot,
    pub color: &'static str,
    pub radius: u32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub center: Location,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
    pub containment_zones: &'static [ContainmentZone],
}

impl MapData {
    pub fn literal() -> Self {
        Self {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            markers: HOTSPOTS
                .iter()
                .map(|h| MapMarker {
                    hotspot: *h,
                    color: h.color(),
                    radius: h.radius(),
                })
                .collect(),
            containment_zones: &CONTAINMENT_ZONES,
        }
    }
}
