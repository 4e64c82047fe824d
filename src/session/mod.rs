pub mod matches;
pub mod notice;

use std::sync::Arc;

use serde::Serialize;

use crate::entities::{CandidateUser, Photo, Profile, ProfileField};
use crate::error::{LocationError, SessionError, SessionResult};
use crate::host::location::LocationService;
use crate::utils::geo::Coordinate;

pub use matches::{MATCH_RADIUS_KM, MatchResult, find_matches};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Welcome,
    Intro,
    ProfileEditing,
    Feed,
}

/// Navigation triggers coming from the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Start,
    CreateProfile,
    Finish,
    Edit,
}

impl Screen {
    /// Transition table, ignoring the finish guard
    pub fn next(self, action: Action) -> Option<Screen> {
        match (self, action) {
            (Screen::Welcome, Action::Start) => Some(Screen::Intro),
            (Screen::Intro, Action::CreateProfile) => Some(Screen::ProfileEditing),
            (Screen::ProfileEditing, Action::Finish) => Some(Screen::Feed),
            (Screen::Feed, Action::Edit) => Some(Screen::ProfileEditing),
            _ => None,
        }
    }
}

/// Handle for an in-flight location request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationTicket {
    pub seq: u64,
    pub issued_on: Screen,
}

/// One user's onboarding session: screen, profile, derived matches and the
/// single notice line shown to the user.
#[derive(Debug, Clone)]
pub struct Session {
    screen: Screen,
    profile: Profile,
    matches: Vec<MatchResult>,
    notice: String,
    location_granted: bool,
    candidates: Arc<[CandidateUser]>,
    location_seq: u64,
}

impl Session {
    pub fn new(candidates: Arc<[CandidateUser]>) -> Self {
        Self {
            screen: Screen::Welcome,
            profile: Profile::default(),
            matches: Vec::new(),
            notice: String::new(),
            location_granted: false,
            candidates,
            location_seq: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    pub fn notice(&self) -> &str {
        &self.notice
    }

    pub fn location_granted(&self) -> bool {
        self.location_granted
    }

    pub fn candidates(&self) -> &[CandidateUser] {
        &self.candidates
    }

    // ============ Navigation ============

    pub fn start(&mut self) -> SessionResult<Screen> {
        self.navigate(Action::Start)
    }

    pub fn create_profile(&mut self) -> SessionResult<Screen> {
        self.navigate(Action::CreateProfile)
    }

    /// Leave the profile form for the feed once name, age and location are set
    pub fn finish(&mut self) -> SessionResult<Screen> {
        if self.screen != Screen::ProfileEditing {
            return self.navigate(Action::Finish);
        }

        if self.profile.name.is_empty() || self.profile.age.is_empty() {
            return Err(self.reject(SessionError::MissingNameOrAge));
        }
        if !self.location_granted || self.profile.coordinate.is_none() {
            return Err(self.reject(SessionError::LocationNotGranted));
        }

        self.navigate(Action::Finish)
    }

    /// Back from the feed to the profile form, clearing the notice
    pub fn edit(&mut self) -> SessionResult<Screen> {
        let screen = self.navigate(Action::Edit)?;
        self.notice.clear();
        Ok(screen)
    }

    fn navigate(&mut self, action: Action) -> SessionResult<Screen> {
        let from = self.screen;
        let Some(to) = from.next(action) else {
            tracing::warn!(?from, ?action, "Rejected screen transition");
            return Err(SessionError::InvalidTransition { from, action });
        };
        self.screen = to;
        tracing::debug!(?from, ?to, "Screen changed");
        Ok(to)
    }

    fn reject(&mut self, error: SessionError) -> SessionError {
        self.notice = notice::for_error(&error).to_string();
        tracing::debug!(%error, "Profile not complete");
        error
    }

    // ============ Profile editing ============

    pub fn update_profile_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.profile.set_field(field, value.into());
    }

    pub fn add_photo(&mut self, data: Vec<u8>) {
        let before = self.profile.photos.len();
        self.profile.add_photo(Photo::new(data));
        if self.profile.photos.len() == before {
            tracing::debug!(count = before, "Photo dropped, profile already full");
        }
    }

    pub fn can_add_photo(&self) -> bool {
        self.profile.can_add_photo()
    }

    // ============ Location ============

    /// Start a location request. Returns `None` when the host has no location
    /// capability; the caller resolves the ticket with [`Session::resolve_location`].
    pub fn request_location(&mut self, service: &dyn LocationService) -> Option<LocationTicket> {
        if !service.is_supported() {
            self.notice = notice::LOCATION_UNSUPPORTED.to_string();
            tracing::warn!("Location requested on a host without location support");
            return None;
        }

        self.location_seq += 1;
        self.notice = notice::LOCATION_ACQUIRING.to_string();
        let ticket = LocationTicket {
            seq: self.location_seq,
            issued_on: self.screen,
        };
        tracing::debug!(seq = ticket.seq, "Location request issued");
        Some(ticket)
    }

    /// Apply the outcome of a location request. Results are applied in arrival
    /// order, including ones that land after the user navigated away.
    pub fn resolve_location(
        &mut self,
        ticket: LocationTicket,
        result: Result<Coordinate, LocationError>,
    ) {
        if ticket.issued_on != self.screen || ticket.seq != self.location_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.location_seq,
                issued_on = ?ticket.issued_on,
                screen = ?self.screen,
                "Applying late location result"
            );
        }

        match result {
            Ok(coordinate) => {
                self.set_coordinate(coordinate);
                self.location_granted = true;
                self.notice = notice::LOCATION_GRANTED.to_string();
            }
            Err(error) => {
                tracing::warn!(seq = ticket.seq, %error, "Location request failed");
                self.notice = notice::LOCATION_FAILED.to_string();
            }
        }
    }

    fn set_coordinate(&mut self, coordinate: Coordinate) {
        if self.profile.coordinate == Some(coordinate) {
            return;
        }
        self.profile.coordinate = Some(coordinate);
        self.recompute_matches();
    }

    /// Rebuild the match list from the current coordinate. Does nothing while
    /// no coordinate is known.
    pub fn recompute_matches(&mut self) {
        let Some(origin) = self.profile.coordinate else {
            return;
        };
        self.matches = find_matches(origin, &self.candidates, MATCH_RADIUS_KM);
        tracing::debug!(
            latitude = origin.latitude,
            longitude = origin.longitude,
            count = self.matches.len(),
            "Matches recomputed"
        );
    }

    // ============ Feed ============

    pub fn send_friend_request(&mut self, candidate_id: u32) -> SessionResult<()> {
        if self.screen != Screen::Feed {
            return Err(SessionError::UnknownCandidate(candidate_id));
        }
        let name = self
            .matches
            .iter()
            .find(|m| m.candidate.id == candidate_id)
            .map(|m| m.candidate.name.clone())
            .ok_or(SessionError::UnknownCandidate(candidate_id))?;

        self.notice = notice::friend_request_sent(&name);
        tracing::info!(candidate_id, "Friend request sent");
        Ok(())
    }
}
