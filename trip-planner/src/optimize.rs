//! Route optimization over a trip's park order.
//!
//! A heuristic travelling-salesman pass: nearest-neighbor construction
//! followed by 2-opt improvement. The first stop is treated as the trip's
//! anchor and is never moved; the result approximately minimizes
//! [`geo::route_distance`] but makes no optimality guarantee.

use tracing::{debug, trace};

use crate::domain::ParkStop;
use crate::geo;

/// Reorder parks to approximately minimize total route distance.
///
/// Returns a new ordering; the input is not mutated. Lists of two or fewer
/// stops are returned unchanged. Stops without coordinates participate
/// with zero-distance edges, which can make the "optimum" degenerate for
/// coordinate-poor trips; callers get a valid permutation regardless.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::{Coordinate, ParkStop};
/// use trip_planner::{geo, optimize};
///
/// let park = |id: &str, lat: f64, lng: f64| {
///     ParkStop::new(id, id.to_string(), "Utah", 2)
///         .unwrap()
///         .with_coordinates(Coordinate::new(lat, lng).unwrap())
/// };
///
/// // Zion, Arches, Bryce Canyon: visiting Arches in the middle backtracks
/// let scrambled = vec![
///     park("zion", 37.3, -113.05),
///     park("arch", 38.7, -109.57),
///     park("brca", 37.6, -112.18),
/// ];
/// let optimized = optimize::optimize_route(&scrambled);
/// assert!(geo::route_distance(&optimized) <= geo::route_distance(&scrambled));
/// assert_eq!(optimized[0].park_id, "zion");
/// ```
pub fn optimize_route(parks: &[ParkStop]) -> Vec<ParkStop> {
    if parks.len() <= 2 {
        return parks.to_vec();
    }

    let before = geo::route_distance(parks);
    let route = two_opt(nearest_neighbor(parks));
    let after = geo::route_distance(&route);
    debug!(stops = parks.len(), before, after, "optimized route");

    route
}

/// Greedy construction: starting from the anchored first stop, repeatedly
/// append the closest unvisited stop. Ties break toward input order.
fn nearest_neighbor(parks: &[ParkStop]) -> Vec<ParkStop> {
    let mut remaining = parks.to_vec();
    let mut route = Vec::with_capacity(parks.len());
    route.push(remaining.remove(0));

    while !remaining.is_empty() {
        let current = route[route.len() - 1].coordinates;
        let mut nearest = 0;
        let mut nearest_distance = f64::INFINITY;

        for (index, candidate) in remaining.iter().enumerate() {
            let d = geo::distance(current, candidate.coordinates);
            if d < nearest_distance {
                nearest_distance = d;
                nearest = index;
            }
        }

        route.push(remaining.remove(nearest));
    }

    route
}

/// 2-opt improvement: reverse interior segments, keeping a reversal only
/// when it strictly shortens the route, and repeat full passes until a
/// pass makes no improving move.
fn two_opt(mut route: Vec<ParkStop>) -> Vec<ParkStop> {
    if route.len() < 4 {
        return route;
    }

    let mut best_distance = geo::route_distance(&route);
    let mut improved = true;

    while improved {
        improved = false;

        for i in 1..route.len() - 2 {
            for j in i + 1..route.len() - 1 {
                let mut candidate = route.clone();
                candidate[i..=j].reverse();

                let candidate_distance = geo::route_distance(&candidate);
                if candidate_distance < best_distance {
                    trace!(i, j, candidate_distance, "2-opt reversal kept");
                    route = candidate;
                    best_distance = candidate_distance;
                    improved = true;
                }
            }
        }
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinate;

    fn park(id: &str, lat: f64, lng: f64) -> ParkStop {
        ParkStop::new(id, format!("{id} National Park"), "Utah", 2)
            .unwrap()
            .with_coordinates(Coordinate::new(lat, lng).unwrap())
    }

    fn bare_park(id: &str) -> ParkStop {
        ParkStop::new(id, format!("{id} National Park"), "Utah", 2).unwrap()
    }

    fn ids(parks: &[ParkStop]) -> Vec<&str> {
        parks.iter().map(|p| p.park_id.as_str()).collect()
    }

    #[test]
    fn short_lists_unchanged() {
        assert!(optimize_route(&[]).is_empty());

        let one = vec![park("zion", 37.3, -113.05)];
        assert_eq!(ids(&optimize_route(&one)), ids(&one));

        let two = vec![park("zion", 37.3, -113.05), park("arch", 38.7, -109.57)];
        assert_eq!(ids(&optimize_route(&two)), ids(&two));
    }

    #[test]
    fn first_stop_stays_anchored() {
        let parks = vec![
            park("zion", 37.3, -113.05),
            park("arch", 38.7, -109.57),
            park("brca", 37.6, -112.18),
            park("cany", 38.2, -109.93),
        ];
        let optimized = optimize_route(&parks);
        assert_eq!(optimized[0].park_id, "zion");
    }

    #[test]
    fn result_is_permutation() {
        let parks = vec![
            park("zion", 37.3, -113.05),
            park("arch", 38.7, -109.57),
            park("brca", 37.6, -112.18),
            park("cany", 38.2, -109.93),
            park("care", 38.37, -111.26),
        ];
        let optimized = optimize_route(&parks);

        let mut before = ids(&parks);
        let mut after = ids(&optimized);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn never_longer_than_input() {
        // Deliberately zig-zag order across Utah
        let parks = vec![
            park("zion", 37.3, -113.05),
            park("arch", 38.7, -109.57),
            park("brca", 37.6, -112.18),
            park("cany", 38.2, -109.93),
        ];
        assert!(geo::route_distance(&optimize_route(&parks)) <= geo::route_distance(&parks));
    }

    #[test]
    fn untangles_a_backtracking_route() {
        // West-east order is zion, brca, care, cany, arch; scramble it
        let scrambled = vec![
            park("zion", 37.3, -113.05),
            park("arch", 38.7, -109.57),
            park("brca", 37.6, -112.18),
            park("cany", 38.2, -109.93),
            park("care", 38.37, -111.26),
        ];
        let optimized = optimize_route(&scrambled);
        assert_eq!(ids(&optimized), vec!["zion", "brca", "care", "cany", "arch"]);
    }

    #[test]
    fn nearest_neighbor_ties_break_by_input_order() {
        // Two candidates equidistant from the anchor: the earlier one wins
        let parks = vec![
            park("anchor", 40.0, -110.0),
            park("east", 40.0, -109.0),
            park("west", 40.0, -111.0),
        ];
        let route = nearest_neighbor(&parks);
        assert_eq!(ids(&route), vec!["anchor", "east", "west"]);
    }

    #[test]
    fn stops_without_coordinates_are_kept() {
        let parks = vec![
            park("zion", 37.3, -113.05),
            bare_park("mystery"),
            park("arch", 38.7, -109.57),
            park("brca", 37.6, -112.18),
        ];
        let optimized = optimize_route(&parks);

        assert_eq!(optimized.len(), 4);
        assert!(optimized.iter().any(|p| p.park_id == "mystery"));
        // Zero-distance edges make the coordinate-less stop "closest"
        assert_eq!(optimized[1].park_id, "mystery");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Coordinate;
    use proptest::prelude::*;

    fn any_parks() -> impl Strategy<Value = Vec<ParkStop>> {
        proptest::collection::vec((25.0f64..49.0, -124.0f64..-67.0), 3..8).prop_map(|coords| {
            coords
                .into_iter()
                .enumerate()
                .map(|(i, (lat, lng))| {
                    ParkStop::new(format!("park-{i}"), format!("Park {i}"), "Utah", 2)
                        .unwrap()
                        .with_coordinates(Coordinate::new(lat, lng).unwrap())
                })
                .collect()
        })
    }

    proptest! {
        /// Optimization never increases route distance
        #[test]
        fn monotone(parks in any_parks()) {
            let optimized = optimize_route(&parks);
            prop_assert!(
                geo::route_distance(&optimized) <= geo::route_distance(&parks) + 1e-9
            );
        }

        /// The result is a permutation with the first stop anchored
        #[test]
        fn permutation_with_anchor(parks in any_parks()) {
            let optimized = optimize_route(&parks);
            prop_assert_eq!(optimized[0].park_id.clone(), parks[0].park_id.clone());

            let mut before: Vec<_> = parks.iter().map(|p| p.park_id.clone()).collect();
            let mut after: Vec<_> = optimized.iter().map(|p| p.park_id.clone()).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }
    }
}
