use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Range-checked constructor, used for depot input coming from users or the environment.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        check_range("latitude", latitude, 90.0)?;
        check_range("longitude", longitude, 180.0)?;
        Ok(Self::new(latitude, longitude))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

fn check_range(field: &'static str, value: f64, bound: f64) -> Result<f64, ValidationError> {
    if (-bound..=bound).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange { field, value, min: -bound, max: bound })
    }
}

/// Delivery priority class. Weights multiply the objective, so a lower weight is served sooner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn weight(self) -> f64 {
        match self {
            Priority::High => 0.6,
            Priority::Medium => 1.0,
            Priority::Low => 1.2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            other => Err(ValidationError::UnknownPriority(other.to_string())),
        }
    }
}

/// A validated delivery destination. Fields are private so a `Stop` can only exist once it passed
/// validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    name: String,
    location: Coordinate,
    priority: Priority,
    weight_kg: f64,
}

impl Stop {
    /// Validates every field and reports all failures at once.
    pub fn try_new(
        name: &str,
        latitude: f64,
        longitude: f64,
        priority: Priority,
        weight_kg: f64,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let name = name.trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyName);
        }
        if let Err(err) = check_range("latitude", latitude, 90.0) {
            errors.push(err);
        }
        if let Err(err) = check_range("longitude", longitude, 180.0) {
            errors.push(err);
        }
        if weight_kg < 0.0 || weight_kg.is_nan() {
            errors.push(ValidationError::NegativeWeight(weight_kg));
        }

        if errors.is_empty() {
            Ok(Self {
                name: name.to_string(),
                location: Coordinate::new(latitude, longitude),
                priority,
                weight_kg,
            })
        } else {
            Err(errors)
        }
    }

    /// Builds a stop from raw text fields in `customer, latitude, longitude, priority, weight_kg`
    /// order.
    pub fn parse(fields: &[&str]) -> Result<Self, Vec<ValidationError>> {
        if fields.len() != 5 {
            return Err(vec![ValidationError::FieldCount { expected: 5, found: fields.len() }]);
        }

        let mut errors = Vec::new();
        let latitude = parse_number("latitude", fields[1], &mut errors);
        let longitude = parse_number("longitude", fields[2], &mut errors);
        let priority = fields[3].parse::<Priority>().map_err(|err| errors.push(err)).ok();
        let weight_kg = parse_number("weight_kg", fields[4], &mut errors);

        match (latitude, longitude, priority, weight_kg) {
            (Some(lat), Some(lon), Some(priority), Some(weight)) if errors.is_empty() => {
                Self::try_new(fields[0], lat, lon, priority, weight)
            }
            _ => {
                // still report range and name problems on the fields that did parse
                if let Err(mut field_errors) = Self::try_new(
                    fields[0],
                    latitude.unwrap_or(0.0),
                    longitude.unwrap_or(0.0),
                    priority.unwrap_or(Priority::Medium),
                    weight_kg.unwrap_or(0.0),
                ) {
                    errors.append(&mut field_errors);
                }
                Err(errors)
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn priority_weight(&self) -> f64 {
        self.priority.weight()
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

fn parse_number(field: &'static str, raw: &str, errors: &mut Vec<ValidationError>) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            errors.push(ValidationError::NotNumeric { field, value: raw.to_string() });
            None
        }
    }
}

/// Stop indices in visiting order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    pub order: Vec<usize>,
    /// Sum of the weighted objective values of the selected legs.
    pub weighted_cost: f64,
}

impl Route {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// One row of the route report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub cumulative_distance_km: f64,
    pub eta_hours: f64,
    pub cost_leg_nok: f64,
    pub co2_leg_g: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteTotals {
    pub distance_km: f64,
    pub time_h: f64,
    pub cost_nok: f64,
    pub co2_g: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteReport {
    pub route: Route,
    pub legs: Vec<RouteLeg>,
    pub totals: RouteTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_priority_labels_to_weights() {
        let stop = Stop::try_new("Test Customer", 59.91, 10.75, "High".parse().unwrap(), 1.5)
            .unwrap();
        assert_eq!(stop.priority_weight(), 0.6);
        assert_eq!("Medium".parse::<Priority>().unwrap().weight(), 1.0);
        assert_eq!("Low".parse::<Priority>().unwrap().weight(), 1.2);
    }

    #[test]
    fn rejects_unknown_priority() {
        let result = Stop::parse(&["Test Customer", "59.91", "10.75", "Urgent", "1.0"]);
        assert_eq!(
            result.unwrap_err(),
            vec![ValidationError::UnknownPriority("Urgent".to_string())]
        );
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let errors = Stop::try_new("Bad Coords", 200.0, 10.75, Priority::Medium, 1.0).unwrap_err();
        assert!(matches!(errors[0], ValidationError::OutOfRange { field: "latitude", .. }));
    }

    #[test]
    fn collects_every_field_error() {
        let errors = Stop::parse(&["Bad Customer", "abc", "xyz", "Low", "-5"]).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::NegativeWeight(-5.0)));
    }

    #[test]
    fn rejects_wrong_field_count() {
        let errors = Stop::parse(&["Only", "59.9"]).unwrap_err();
        assert_eq!(errors, vec![ValidationError::FieldCount { expected: 5, found: 2 }]);
    }

    #[test]
    fn trims_name_and_parses_text_fields() {
        let stop = Stop::parse(&["  Anna ", " 59.92", "10.70 ", "Low", "2"]).unwrap();
        assert_eq!(stop.name(), "Anna");
        assert_eq!(stop.location(), Coordinate::new(59.92, 10.70));
        assert_eq!(stop.priority(), Priority::Low);
        assert_eq!(stop.weight_kg(), 2.0);
    }

    #[test]
    fn checks_depot_coordinate_range() {
        assert!(Coordinate::try_new(59.91, 10.75).is_ok());
        assert!(Coordinate::try_new(59.91, 190.0).is_err());
    }
}
