use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use common::error::{AppError, Res};
use db::dtos::review::ReviewCreateRequest;
use db::models::review::{LINK_STATUS_COMPLETED, Review, ReviewLink};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dtos::review::SubmitReviewRequest;

const TOKEN_PREFIX: &str = "rvw_";

/// Mints a fresh single-use link token.
pub fn new_token() -> String {
    format!(
        "{}{}",
        TOKEN_PREFIX,
        URL_SAFE_NO_PAD.encode(Uuid::new_v4().as_bytes())
    )
}

pub fn validate_rating(rating: i32) -> Res<()> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "Rating must be between 1 and 5".to_string(),
        ))
    }
}

/// A link grants exactly one submission; a used one is a conflict.
pub fn ensure_link_pending(link: &ReviewLink) -> Res<()> {
    if link.status == LINK_STATUS_COMPLETED {
        return Err(AppError::Conflict(
            "A review was already submitted for this link".to_string(),
        ));
    }
    Ok(())
}

/// Resolves a token to its pending link. Unknown tokens are 404.
pub async fn resolve_pending_link(pool: &PgPool, token: &str) -> Res<ReviewLink> {
    let link = db::review::get_link_by_token(pool, token)
        .await?
        .ok_or_else(|| AppError::NotFound("Review link not found".to_string()))?;

    ensure_link_pending(&link)?;

    Ok(link)
}

/// Submits the review behind a token and burns the link.
///
/// The pending-status check precedes the insert and is not atomic with
/// it; two concurrent submissions on the same token can both pass it.
pub async fn submit_review(pool: &PgPool, token: &str, req: SubmitReviewRequest) -> Res<Review> {
    validate_rating(req.rating)?;
    if req.reviewer_name.trim().is_empty() {
        return Err(AppError::BadRequest("reviewer_name is required".to_string()));
    }

    let link = resolve_pending_link(pool, token).await?;

    let review = db::review::insert_review(
        pool,
        ReviewCreateRequest {
            vendor_id: link.vendor_id,
            link_id: link.id,
            reviewer_name: req.reviewer_name.trim().to_string(),
            rating: req.rating,
            comment: req.comment,
        },
    )
    .await?;

    db::review::mark_link_completed(pool, link.id).await?;

    Ok(review)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use db::models::review::LINK_STATUS_PENDING;

    use super::*;

    fn link_with_status(status: &str) -> ReviewLink {
        ReviewLink {
            id: Uuid::new_v4(),
            vendor_id: Uuid::new_v4(),
            token: new_token(),
            recipient_email: "pair@example.com".to_string(),
            status: status.to_string(),
            created_at: NaiveDateTime::default(),
            completed_at: None,
        }
    }

    #[test]
    fn pending_link_passes_the_gate() {
        assert!(ensure_link_pending(&link_with_status(LINK_STATUS_PENDING)).is_ok());
    }

    #[test]
    fn completed_link_is_rejected_as_already_submitted() {
        let result = ensure_link_pending(&link_with_status(LINK_STATUS_COMPLETED));
        match result {
            Err(AppError::Conflict(message)) => assert!(message.contains("already submitted")),
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[test]
    fn tokens_carry_the_prefix_and_are_unique() {
        let a = new_token();
        let b = new_token();
        assert!(a.starts_with("rvw_"));
        assert!(b.starts_with("rvw_"));
        assert_ne!(a, b);
    }

    #[test]
    fn tokens_are_url_safe() {
        let token = new_token();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        );
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}
