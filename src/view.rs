use std::fmt;

use serde::Serialize;

use crate::session::{MATCH_RADIUS_KM, Screen, Session};

pub const NO_MATCHES: &str = "No hay chicas cerca en este momento.";

#[derive(Debug, Serialize)]
pub struct MatchView {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub description: String,
    pub distance_km: f64,
    pub distance_label: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub display_name: String,
    pub age_label: String,
    pub description: String,
    pub photo_count: usize,
    pub can_add_photo: bool,
    pub location_granted: bool,
}

/// Snapshot of what the current screen needs to draw
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub screen: Screen,
    pub notice: String,
    pub profile: ProfileView,
    pub radius_label: String,
    pub matches: Vec<MatchView>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        let profile = session.profile();

        Self {
            screen: session.screen(),
            notice: session.notice().to_string(),
            profile: ProfileView {
                display_name: if profile.name.is_empty() {
                    "Tu perfil".to_string()
                } else {
                    profile.name.clone()
                },
                age_label: if profile.age.is_empty() {
                    String::new()
                } else {
                    format!("{} años", profile.age)
                },
                description: profile.description.clone(),
                photo_count: profile.photos.len(),
                can_add_photo: session.can_add_photo(),
                location_granted: session.location_granted(),
            },
            radius_label: format!("Mostrando chicas dentro de {} km", MATCH_RADIUS_KM),
            matches: session
                .matches()
                .iter()
                .map(|m| MatchView {
                    id: m.candidate.id,
                    name: m.candidate.name.clone(),
                    age: m.candidate.age,
                    description: m.candidate.description.clone(),
                    distance_km: m.distance_km,
                    distance_label: format!("{:.1} km", m.distance_km),
                })
                .collect(),
        }
    }
}

impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.screen {
            Screen::Welcome => writeln!(f, "[Bienvenida] start para iniciar")?,
            Screen::Intro => writeln!(f, "[Intro] create para crear tu perfil")?,
            Screen::ProfileEditing => {
                writeln!(f, "[Perfil] {} {}", self.profile.display_name, self.profile.age_label)?;
                writeln!(f, "  fotos: {}/3", self.profile.photo_count)?;
                writeln!(
                    f,
                    "  ubicación: {}",
                    if self.profile.location_granted { "sí" } else { "no" }
                )?;
            }
            Screen::Feed => {
                writeln!(f, "[Feed] {} {}", self.profile.display_name, self.profile.age_label)?;
                writeln!(f, "  {}", self.radius_label)?;
                if self.matches.is_empty() {
                    writeln!(f, "  {NO_MATCHES}")?;
                }
                for m in &self.matches {
                    writeln!(
                        f,
                        "  #{} {}, {} - {} ({})",
                        m.id, m.name, m.age, m.description, m.distance_label
                    )?;
                }
            }
        }
        if !self.notice.is_empty() {
            writeln!(f, "  > {}", self.notice)?;
        }
        Ok(())
    }
}
