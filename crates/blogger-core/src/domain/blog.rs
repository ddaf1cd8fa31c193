use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blog entity - an independently owned aggregate that posts belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub website_url: String,
    pub created_at: DateTime<Utc>,
}

/// Editable fields of a blog.
#[derive(Debug, Clone)]
pub struct BlogData {
    pub name: String,
    pub description: String,
    pub website_url: String,
}

impl Blog {
    /// Create a new blog with generated ID and timestamp.
    pub fn new(data: BlogData) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            website_url: data.website_url,
            created_at: Utc::now(),
        }
    }

    /// Overwrite the editable fields. Returns `true` when the name changed.
    pub fn update_data(&mut self, data: BlogData) -> bool {
        let renamed = self.name != data.name;
        self.name = data.name;
        self.description = data.description;
        self.website_url = data.website_url;
        renamed
    }
}
