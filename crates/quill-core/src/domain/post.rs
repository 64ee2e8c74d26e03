use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Post entity - a published blog article.
///
/// `body` holds sanitized HTML; raw editor markup never reaches a `Post`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub author: String,
    pub img_url: String,
}

/// A post that has not been stored yet. The store assigns the id on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub author: String,
    pub img_url: String,
}

/// Publication date display string, e.g. "April 05, 2024".
pub fn display_date(at: DateTime<Local>) -> String {
    at.format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn display_date_matches_long_form() {
        let at = Local.with_ymd_and_hms(2024, 4, 5, 12, 0, 0).unwrap();
        assert_eq!(display_date(at), "April 05, 2024");
    }
}
