use super::city::CityId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error types for Route operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("Route is empty")]
    EmptyRoute,
}

/// Route represents a walk through the graph returned by a search
///
/// A route is an ordered sequence of cities:
/// (c1) - (c2) - (c3) ... - (cn)
///
/// Invariants:
/// - cities.len() >= 1
/// - consecutive cities are adjacent in the store the route was found in
///   (checked by `path_cost`, not here)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "Vec<CityId>", into = "Vec<CityId>")]
pub struct Route {
    cities: Vec<CityId>,
}

impl Route {
    /// Create a route consisting of a single city
    pub fn new(start: CityId) -> Self {
        Self {
            cities: vec![start],
        }
    }

    /// Create a route from a sequence of cities
    ///
    /// # Errors
    /// Returns an error if the sequence is empty
    pub fn from_cities(cities: Vec<CityId>) -> Result<Self, RouteError> {
        if cities.is_empty() {
            return Err(RouteError::EmptyRoute);
        }
        Ok(Self { cities })
    }

    /// Return a new route with `next` appended
    pub fn extend(&self, next: CityId) -> Self {
        let mut cities = Vec::with_capacity(self.cities.len() + 1);
        cities.extend_from_slice(&self.cities);
        cities.push(next);
        Self { cities }
    }

    /// Get the first city
    pub fn start(&self) -> &CityId {
        &self.cities[0]
    }

    /// Get the last city
    pub fn end(&self) -> &CityId {
        &self.cities[self.cities.len() - 1]
    }

    /// Number of cities on the route
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of edges traversed
    pub fn hop_count(&self) -> usize {
        self.cities.len() - 1
    }

    /// Cities in order
    pub fn cities(&self) -> &[CityId] {
        &self.cities
    }

    /// Consecutive (from, to) pairs along the route
    pub fn legs(&self) -> impl Iterator<Item = (&CityId, &CityId)> + '_ {
        self.cities.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Check if the route passes through a city
    pub fn contains(&self, city: &CityId) -> bool {
        self.cities.contains(city)
    }

    /// Check if `a` and `b` are consecutive on the route, in either direction
    pub fn has_leg(&self, a: &CityId, b: &CityId) -> bool {
        self.legs()
            .any(|(from, to)| (from == a && to == b) || (from == b && to == a))
    }
}

impl TryFrom<Vec<CityId>> for Route {
    type Error = RouteError;

    fn try_from(cities: Vec<CityId>) -> Result<Self, Self::Error> {
        Self::from_cities(cities)
    }
}

impl From<Route> for Vec<CityId> {
    fn from(route: Route) -> Self {
        route.cities
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, city) in self.cities.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{}", city)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(labels: &[&str]) -> Route {
        Route::from_cities(labels.iter().map(|l| CityId::new(*l)).collect()).unwrap()
    }

    #[test]
    fn test_route_single_city() {
        let r = Route::new(CityId::new("A"));

        assert_eq!(r.hop_count(), 0);
        assert_eq!(r.city_count(), 1);
        assert_eq!(r.start(), r.end());
        assert_eq!(r.legs().count(), 0);
    }

    #[test]
    fn test_route_empty_rejected() {
        assert_eq!(Route::from_cities(Vec::new()), Err(RouteError::EmptyRoute));
    }

    #[test]
    fn test_route_extend_leaves_original() {
        let a = Route::new(CityId::new("A"));
        let ab = a.extend(CityId::new("B"));

        assert_eq!(a.city_count(), 1);
        assert_eq!(ab.cities(), &[CityId::new("A"), CityId::new("B")]);
        assert_eq!(ab.end(), &CityId::new("B"));
    }

    #[test]
    fn test_route_legs() {
        let r = route(&["A", "B", "C"]);
        let legs: Vec<(&str, &str)> = r.legs().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        assert_eq!(legs, vec![("A", "B"), ("B", "C")]);
    }

    #[test]
    fn test_route_has_leg_either_direction() {
        let r = route(&["A", "B", "C"]);
        let (a, b, c) = (CityId::new("A"), CityId::new("B"), CityId::new("C"));

        assert!(r.has_leg(&a, &b));
        assert!(r.has_leg(&b, &a));
        assert!(r.has_leg(&c, &b));
        assert!(!r.has_leg(&a, &c));
        assert!(r.contains(&c));
    }

    #[test]
    fn test_route_display() {
        assert_eq!(route(&["A", "B", "C"]).to_string(), "A → B → C");
        assert_eq!(route(&["A"]).to_string(), "A");
    }

    #[test]
    fn test_route_serde() {
        let r = route(&["A", "B"]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"["A","B"]"#);

        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
        assert!(serde_json::from_str::<Route>("[]").is_err());
    }
}
