use serde::Serialize;

use crate::entities::CandidateUser;
use crate::utils::geo::{Coordinate, haversine_distance};

/// Candidates further than this are never shown
pub const MATCH_RADIUS_KM: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult {
    pub candidate: CandidateUser,
    pub distance_km: f64,
}

/// Candidates within `radius_km` of `origin`, nearest first. Equal distances
/// keep roster order.
pub fn find_matches(
    origin: Coordinate,
    candidates: &[CandidateUser],
    radius_km: f64,
) -> Vec<MatchResult> {
    let mut matches: Vec<MatchResult> = candidates
        .iter()
        .map(|c| MatchResult {
            candidate: c.clone(),
            distance_km: haversine_distance(origin, c.coordinate),
        })
        .filter(|m| m.distance_km <= radius_km)
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    matches
}
