//! User entity - a marketplace member and their published skills

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User entity
///
/// Skill lists are ordered and kept exactly as the owner typed them: no case
/// folding, no trimming, no de-duplication. Only empty entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub availability: Option<String>,
    pub location: Option<String>,
    pub photo_url: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Visibility given to freshly registered accounts
    pub const DEFAULT_IS_PUBLIC: bool = true;

    /// Check whether any offered skill contains `fragment` (case-sensitive)
    pub fn offers_skill_matching(&self, fragment: &str) -> bool {
        self.skills_offered.iter().any(|skill| skill.contains(fragment))
    }

    /// Check whether `skill` is one of the published offered skills
    pub fn offers(&self, skill: &str) -> bool {
        self.skills_offered.iter().any(|s| s == skill)
    }

    /// Apply a profile patch, returning `true` if anything changed
    pub fn apply_patch(&mut self, patch: ProfilePatch) -> bool {
        let before = self.clone();
        let patch = patch.normalized();

        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(availability) = patch.availability {
            self.availability = non_empty(availability);
        }
        if let Some(location) = patch.location {
            self.location = non_empty(location);
        }
        if let Some(photo_url) = patch.photo_url {
            self.photo_url = non_empty(photo_url);
        }
        if let Some(is_public) = patch.is_public {
            self.is_public = is_public;
        }
        if let Some(skills) = patch.skills_offered {
            self.skills_offered = skills;
        }
        if let Some(skills) = patch.skills_wanted {
            self.skills_wanted = skills;
        }

        let changed = *self != before;
        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }
}

/// Data needed to create a user; the store assigns the id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub is_public: bool,
}

impl NewUser {
    pub fn new(name: String, email: String) -> Self {
        Self {
            name,
            email,
            is_public: User::DEFAULT_IS_PUBLIC,
        }
    }
}

/// Partial profile update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub availability: Option<String>,
    pub location: Option<String>,
    pub photo_url: Option<String>,
    pub is_public: Option<bool>,
    pub skills_offered: Option<Vec<String>>,
    pub skills_wanted: Option<Vec<String>>,
}

impl ProfilePatch {
    /// Check whether the patch names no field at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Canonical form stored by every backend
    ///
    /// Empty skill entries are dropped. Blank optional text becomes the empty
    /// string, which clears the field.
    pub fn normalized(self) -> Self {
        Self {
            availability: self.availability.map(clear_if_blank),
            location: self.location.map(clear_if_blank),
            photo_url: self.photo_url.map(clear_if_blank),
            skills_offered: self.skills_offered.map(normalize_skills),
            skills_wanted: self.skills_wanted.map(normalize_skills),
            ..self
        }
    }
}

/// Drop empty entries from a skill list, keeping order and spelling
pub fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    skills.into_iter().filter(|skill| !skill.is_empty()).collect()
}

fn clear_if_blank(value: String) -> String {
    if value.trim().is_empty() {
        String::new()
    } else {
        value
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
