use crate::server::{
    error::{auth::AuthError, AppError},
    model::pagination::ListParams,
    util::password::{PasswordHasher, Sha256PasswordHasher},
};
use test_utils::{builder::TestBuilder, factory};
