//! Role create/update flows.

use sqlx::PgPool;
use tracing::info;

use super::{AccessError, queries};
use crate::models::access::{CreateAccess, UpdateAccess};
use crate::text::capitalize_words;

/// Guard the shared input constraints: a non-blank name, at least one
/// capability row, flags in 0..=1.
fn validate_input(
    name: &str,
    details: &[crate::models::access::AccessDetailInput],
) -> Result<(), AccessError> {
    if name.trim().is_empty() {
        return Err(AccessError::Validation("Name is required".into()));
    }
    if details.is_empty() {
        return Err(AccessError::Validation(
            "At least one access detail is required".into(),
        ));
    }
    for detail in details {
        for flag in [detail.m_created, detail.m_updated, detail.m_deleted] {
            if !(0..=1).contains(&flag) {
                return Err(AccessError::Validation(
                    "Permission flags must be 0 or 1".into(),
                ));
            }
        }
    }
    Ok(())
}

/// Create a role and its capability matrix.
///
/// Name uniqueness is case-insensitive; name and description are
/// normalized to word-capitalized form before the write.
pub async fn create_access(
    pool: &PgPool,
    input: &CreateAccess,
    actor_id: i64,
) -> Result<i64, AccessError> {
    validate_input(&input.name, &input.access_detail)?;

    if queries::find_access_by_name_ci(pool, &input.name)
        .await?
        .is_some()
    {
        return Err(AccessError::DuplicateName);
    }

    let name = capitalize_words(&input.name);
    let description = capitalize_words(&input.description);

    let access_id =
        queries::insert_access_with_details(pool, &name, &description, &input.access_detail, actor_id)
            .await?;

    info!(access_id, name = %name, "access created");
    Ok(access_id)
}

/// Update a role in place and replace its capability matrix.
///
/// A name collision only counts against a *different* role id, so saving a
/// role under its own name (any casing) always passes. Replacement detail
/// rows inherit `created_by` from the role's original creator.
pub async fn update_access(
    pool: &PgPool,
    input: &UpdateAccess,
    actor_id: i64,
) -> Result<(), AccessError> {
    validate_input(&input.name, &input.access_detail)?;

    let access = queries::get_access(pool, input.id)
        .await?
        .ok_or(AccessError::NotFound)?;

    if let Some(existing) = queries::find_access_by_name_ci(pool, &input.name).await?
        && existing.id != input.id
    {
        return Err(AccessError::DuplicateName);
    }

    let name = capitalize_words(&input.name);
    let description = capitalize_words(&input.description);

    queries::replace_access_with_details(
        pool,
        input.id,
        &name,
        &description,
        input.status,
        &input.access_detail,
        access.created_by,
        actor_id,
    )
    .await?;

    info!(access_id = input.id, name = %name, "access updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::access::AccessDetailInput;

    fn detail() -> AccessDetailInput {
        AccessDetailInput {
            menu_id: 1,
            m_created: 1,
            m_updated: 0,
            m_deleted: 0,
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = validate_input("   ", &[detail()]).unwrap_err();
        assert!(matches!(err, AccessError::Validation(_)));
    }

    #[test]
    fn empty_detail_list_is_rejected() {
        let err = validate_input("Operator", &[]).unwrap_err();
        assert!(matches!(err, AccessError::Validation(_)));
    }

    #[test]
    fn out_of_range_flag_is_rejected() {
        let mut bad = detail();
        bad.m_deleted = 2;
        let err = validate_input("Operator", &[bad]).unwrap_err();
        assert!(matches!(err, AccessError::Validation(_)));
    }

    #[test]
    fn valid_input_passes() {
        assert!(validate_input("Operator", &[detail()]).is_ok());
    }
}
