use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::utils::geo::Coordinate;

/// A simulated user that can show up in the feed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateUser {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub coordinate: Coordinate,
    pub description: String,
}

impl CandidateUser {
    fn new(id: u32, name: &str, age: u32, lat: f64, lng: f64, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
            coordinate: Coordinate {
                latitude: lat,
                longitude: lng,
            },
            description: description.to_string(),
        }
    }
}

/// The built-in roster of five users around Mendoza
pub fn default_roster() -> Arc<[CandidateUser]> {
    Arc::from(vec![
        CandidateUser::new(1, "Sofía", 24, -34.9085, -68.8272, "Amo cafés y caminatas."),
        CandidateUser::new(2, "Camila", 27, -34.9150, -68.8500, "Runner y fan de series."),
        CandidateUser::new(3, "María", 22, -34.9000, -68.8000, "Amante de perros y arte."),
        CandidateUser::new(4, "Lucía", 30, -34.9300, -68.8200, "Cine y buena comida."),
        CandidateUser::new(5, "Ana", 26, -34.8900, -68.8400, "Yoga y plantas."),
    ])
}

/// Parse a roster from a JSON array of candidates
pub fn parse_roster(json: &str) -> AppResult<Arc<[CandidateUser]>> {
    let candidates: Vec<CandidateUser> = serde_json::from_str(json)?;
    validate_roster(&candidates)?;
    Ok(Arc::from(candidates))
}

/// Load a roster file, used to swap the built-in users for another set
pub async fn load_roster(path: &Path) -> AppResult<Arc<[CandidateUser]>> {
    let json = tokio::fs::read_to_string(path).await?;
    let roster = parse_roster(&json)?;
    tracing::info!(path = %path.display(), count = roster.len(), "Loaded candidate roster");
    Ok(roster)
}

fn validate_roster(candidates: &[CandidateUser]) -> AppResult<()> {
    let mut seen = HashSet::new();
    for c in candidates {
        if !seen.insert(c.id) {
            return Err(AppError::InvalidRoster(format!("duplicate id {}", c.id)));
        }
        if c.age == 0 {
            return Err(AppError::InvalidRoster(format!(
                "candidate {} must have a positive age",
                c.id
            )));
        }
        c.coordinate
            .validate()
            .map_err(|e| AppError::InvalidRoster(format!("candidate {}: {}", c.id, e)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_is_valid() {
        let roster = default_roster();
        assert_eq!(roster.len(), 5);
        assert!(validate_roster(&roster).is_ok());
        let ids: Vec<u32> = roster.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_parse_roster() {
        let json = r#"[
            {"id": 7, "name": "Eva", "age": 31,
             "coordinate": {"latitude": 10.0, "longitude": 20.0},
             "description": "Test"}
        ]"#;

        let roster = parse_roster(json).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Eva");
        assert_eq!(roster[0].coordinate.longitude, 20.0);
    }

    #[test]
    fn test_parse_roster_rejects_duplicates() {
        let json = r#"[
            {"id": 1, "name": "A", "age": 20, "coordinate": {"latitude": 0.0, "longitude": 0.0}, "description": ""},
            {"id": 1, "name": "B", "age": 21, "coordinate": {"latitude": 0.0, "longitude": 0.0}, "description": ""}
        ]"#;

        assert!(matches!(parse_roster(json), Err(AppError::InvalidRoster(_))));
    }

    #[test]
    fn test_parse_roster_rejects_bad_values() {
        let zero_age = r#"[{"id": 1, "name": "A", "age": 0, "coordinate": {"latitude": 0.0, "longitude": 0.0}, "description": ""}]"#;
        assert!(matches!(parse_roster(zero_age), Err(AppError::InvalidRoster(_))));

        let bad_lat = r#"[{"id": 1, "name": "A", "age": 20, "coordinate": {"latitude": 95.0, "longitude": 0.0}, "description": ""}]"#;
        assert!(matches!(parse_roster(bad_lat), Err(AppError::InvalidRoster(_))));

        assert!(matches!(parse_roster("{}"), Err(AppError::Json(_))));
    }

    #[tokio::test]
    async fn test_load_roster_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        let json = serde_json::to_string(&*default_roster()).unwrap();
        tokio::fs::write(&path, json).await.unwrap();

        let roster = load_roster(&path).await.unwrap();
        assert_eq!(&*roster, &*default_roster());
    }
}
