use serde::{Deserialize, Serialize};
use validator::Validate;

/// Reaction a user holds on a post or comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LikeStatus {
    #[default]
    None,
    Like,
    Dislike,
}

/// Request body of the like-status endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLikeDto {
    pub like_status: LikeStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_status_wire_names() {
        let dto: CreateLikeDto = serde_json::from_str(r#"{"likeStatus":"Dislike"}"#).unwrap();
        assert_eq!(dto.like_status, LikeStatus::Dislike);

        let rejected = serde_json::from_str::<CreateLikeDto>(r#"{"likeStatus":"Love"}"#);
        assert!(rejected.is_err());
    }
}
