use std::fmt;
use std::str::FromStr;

/// A way of travelling between stops and what one kilometre of it costs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportMode {
    /// Short menu/config key (`car`, `bike`, `walk`).
    pub key: &'static str,
    pub name: &'static str,
    pub speed_km_per_h: f64,
    pub cost_per_km: f64,
    pub co2_per_km: f64,
}

impl TransportMode {
    pub const CAR: TransportMode = TransportMode {
        key: "car",
        name: "Car",
        speed_km_per_h: 50.0,
        cost_per_km: 4.0,
        co2_per_km: 120.0,
    };
    pub const BIKE: TransportMode = TransportMode {
        key: "bike",
        name: "Bicycle",
        speed_km_per_h: 15.0,
        cost_per_km: 0.0,
        co2_per_km: 0.0,
    };
    pub const WALK: TransportMode = TransportMode {
        key: "walk",
        name: "Walking",
        speed_km_per_h: 5.0,
        cost_per_km: 0.0,
        co2_per_km: 0.0,
    };

    pub const ALL: [TransportMode; 3] = [Self::CAR, Self::BIKE, Self::WALK];

    /// Hours needed to cover `distance_km`.
    pub fn travel_time(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_km_per_h
    }

    /// Cost in NOK.
    pub fn travel_cost(&self, distance_km: f64) -> f64 {
        distance_km * self.cost_per_km
    }

    /// Emissions in grams.
    pub fn travel_co2(&self, distance_km: f64) -> f64 {
        distance_km * self.co2_per_km
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.key == key)
            .ok_or_else(|| format!("unknown transport mode '{}', expected car, bike or walk", s))
    }
}

/// The quantity the optimizer minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    Fastest,
    Cheapest,
    LowestCo2,
}

pub type ObjectiveFn = fn(&TransportMode, f64) -> f64;

impl Objective {
    pub const ALL: [Objective; 3] = [Objective::Fastest, Objective::Cheapest, Objective::LowestCo2];

    /// Resolves the objective to the cost-model function once, so matrix loops do not re-match.
    pub fn cost_fn(self) -> ObjectiveFn {
        match self {
            Objective::Fastest => TransportMode::travel_time,
            Objective::Cheapest => TransportMode::travel_cost,
            Objective::LowestCo2 => TransportMode::travel_co2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Objective::Fastest => "FASTEST",
            Objective::Cheapest => "CHEAPEST",
            Objective::LowestCo2 => "LOWEST_CO2",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Objective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|objective| objective.as_str() == key).ok_or_else(|| {
            format!("unknown objective '{}', expected FASTEST, CHEAPEST or LOWEST_CO2", s)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_cost_model() {
        let car = TransportMode::CAR;
        assert_eq!(car.travel_time(100.0), 2.0);
        assert_eq!(car.travel_cost(10.0), 40.0);
        assert_eq!(car.travel_co2(10.0), 1200.0);
    }

    #[test]
    fn bike_and_walk_are_free_and_clean() {
        for mode in [TransportMode::BIKE, TransportMode::WALK] {
            assert_eq!(mode.travel_cost(12.5), 0.0);
            assert_eq!(mode.travel_co2(12.5), 0.0);
        }
        assert_eq!(TransportMode::WALK.travel_time(10.0), 2.0);
    }

    #[test]
    fn objective_selects_cost_model_function() {
        let mode = TransportMode::CAR;
        assert_eq!((Objective::Fastest.cost_fn())(&mode, 25.0), 0.5);
        assert_eq!((Objective::Cheapest.cost_fn())(&mode, 25.0), 100.0);
        assert_eq!((Objective::LowestCo2.cost_fn())(&mode, 25.0), 3000.0);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Bike".parse::<TransportMode>().unwrap(), TransportMode::BIKE);
        assert_eq!("lowest_co2".parse::<Objective>().unwrap(), Objective::LowestCo2);
        assert!("plane".parse::<TransportMode>().is_err());
        assert!("SHORTEST".parse::<Objective>().is_err());
    }
}
