//! Vehicle profile passed to the routing service.

/// The means of travel a route is computed for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[non_exhaustive]
pub enum RoutingProfile {
    /// Private vehicle.
    #[default]
    Car,
    /// Bicycle.
    Bike,
    /// On foot.
    Foot,
}

impl RoutingProfile {
    /// Profile name as routing services spell it (`profile=car`).
    pub fn as_str(self) -> &'static str {
        match self {
            RoutingProfile::Car  => "car",
            RoutingProfile::Bike => "bike",
            RoutingProfile::Foot => "foot",
        }
    }
}

impl std::fmt::Display for RoutingProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoutingProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car"          => Ok(RoutingProfile::Car),
            "bike"         => Ok(RoutingProfile::Bike),
            "foot" | "walk" => Ok(RoutingProfile::Foot),
            other => Err(format!("unknown routing profile {other:?}: expected car, bike, or foot")),
        }
    }
}
