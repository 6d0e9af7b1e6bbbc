//! Response bodies of the endpoints we call.
//!
//! Only the fields the tool reads are modelled; everything else in the
//! payloads is ignored by serde.

use serde::Deserialize;

/// Body of `GET /user`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserResponse {
    /// The API refused the request.
    Error { error: serde_json::Value },
    /// The authenticated user.
    User { data: UserData },
}

/// The `data` object of a user response.
#[derive(Debug, Deserialize)]
pub struct UserData {
    pub username: String,
    pub level: u32,
}

/// One page of `GET /subjects`.
#[derive(Debug, Deserialize)]
pub struct SubjectPage {
    pub data: Vec<Subject>,
    pub pages: Pages,
    pub total_count: u64,
}

/// Pagination block of a collection response.
#[derive(Debug, Deserialize)]
pub struct Pages {
    /// `None` on the last page.
    pub next_url: Option<String>,
    pub per_page: u64,
}

/// A learnable item: radical, kanji or vocabulary.
#[derive(Debug, Deserialize)]
pub struct Subject {
    /// Type tag, e.g. `"kanji"`.
    pub object: String,
    pub data: SubjectData,
}

/// The fields of a subject we care about.
#[derive(Debug, Deserialize)]
pub struct SubjectData {
    pub slug: Option<String>,
    pub level: Option<u32>,
}

impl Subject {
    /// Check whether this subject is a kanji.
    pub fn is_kanji(&self) -> bool {
        self.object == "kanji"
    }
}
