use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

/// A music group as served to clients and fed to the recommendation model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    /// Genre tags, order as stored; may be empty
    pub genres: Vec<String>,
    /// Opaque reference to the group's main image
    pub image_url: String,
}

/// Raw shape of a `groups` table row
///
/// Genres are stored as a JSON-encoded string array in a text column;
/// a NULL column means the group has no genres.
#[derive(Debug, FromRow)]
pub struct GroupRow {
    pub id: i64,
    pub name: String,
    pub genres: Option<String>,
    pub main_image_url: String,
}

impl TryFrom<GroupRow> for Group {
    type Error = AppError;

    fn try_from(row: GroupRow) -> Result<Self, Self::Error> {
        let genres = match row.genres {
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw).map_err(|e| {
                AppError::InvalidInput(format!("malformed genres for group {}: {}", row.id, e))
            })?,
            None => Vec::new(),
        };

        Ok(Group {
            id: row.id,
            name: row.name,
            genres,
            image_url: row.main_image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, genres: Option<&str>) -> GroupRow {
        GroupRow {
            id,
            name: format!("group-{}", id),
            genres: genres.map(str::to_owned),
            main_image_url: format!("https://img.example/{}.jpg", id),
        }
    }

    #[test]
    fn test_row_with_genres() {
        let group = Group::try_from(row(1, Some(r#"["rock","pop"]"#))).unwrap();
        assert_eq!(group.id, 1);
        assert_eq!(group.genres, vec!["rock", "pop"]);
        assert_eq!(group.image_url, "https://img.example/1.jpg");
    }

    #[test]
    fn test_row_with_null_genres() {
        let group = Group::try_from(row(2, None)).unwrap();
        assert!(group.genres.is_empty());
    }

    #[test]
    fn test_row_with_empty_genre_array() {
        let group = Group::try_from(row(3, Some("[]"))).unwrap();
        assert!(group.genres.is_empty());
    }

    #[test]
    fn test_row_with_malformed_genres() {
        let result = Group::try_from(row(4, Some("rock, pop")));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_group_serializes_for_clients() {
        let group = Group::try_from(row(5, Some(r#"["jazz"]"#))).unwrap();
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["genres"][0], "jazz");
        assert!(json["image_url"].is_string());
    }
}
