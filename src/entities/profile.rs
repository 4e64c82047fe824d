use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::geo::Coordinate;

pub const MAX_PHOTOS: usize = 3;

/// Editable text fields of the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Age,
    Description,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Photo {
    pub id: Uuid,
    #[serde(skip_serializing)]
    pub data: Vec<u8>,
    pub added_at: DateTime<Utc>,
}

impl Photo {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            data,
            added_at: Utc::now(),
        }
    }
}

/// The user's own in-progress profile. Age is kept as typed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Profile {
    pub name: String,
    pub age: String,
    pub description: String,
    pub photos: Vec<Photo>,
    pub coordinate: Option<Coordinate>,
}

impl Profile {
    pub fn set_field(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Age => self.age = value,
            ProfileField::Description => self.description = value,
        }
    }

    /// Append then keep the first three, so a fourth photo is dropped
    pub fn add_photo(&mut self, photo: Photo) {
        self.photos.push(photo);
        self.photos.truncate(MAX_PHOTOS);
    }

    pub fn can_add_photo(&self) -> bool {
        self.photos.len() < MAX_PHOTOS
    }
}
