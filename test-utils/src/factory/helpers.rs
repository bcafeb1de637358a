//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a test session together with the account and person it belongs to.
///
/// All entities are created with default values. The account is an individual
/// account, not attached to any institute.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((person, account, progress))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_session_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::mwd_person::Model,
        entity::mwd_account::Model,
        entity::mwd_answer_progress::Model,
    ),
    DbErr,
> {
    let (person, account) = crate::factory::account::create_account(db).await?;
    let progress =
        crate::factory::answer_progress::create_answer_progress(db, &account.ac_gid).await?;

    Ok((person, account, progress))
}

/// Creates a test session for an account belonging to an institute turn.
///
/// # Arguments
/// - `db` - Database connection
/// - `ins_seq` - Institute the account is attached to
/// - `tur_seq` - Turn the account is attached to
/// - `name` - Name of the test taker
///
/// # Returns
/// - `Ok((person, account, progress))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_turn_session(
    db: &DatabaseConnection,
    ins_seq: i32,
    tur_seq: i32,
    name: &str,
) -> Result<
    (
        entity::mwd_person::Model,
        entity::mwd_account::Model,
        entity::mwd_answer_progress::Model,
    ),
    DbErr,
> {
    let person = crate::factory::person::PersonFactory::new(db)
        .name(name)
        .build()
        .await?;
    let account = crate::factory::account::AccountFactory::new(db, person.pe_seq)
        .institute(ins_seq, tur_seq)
        .build()
        .await?;
    let progress =
        crate::factory::answer_progress::create_answer_progress(db, &account.ac_gid).await?;

    Ok((person, account, progress))
}
