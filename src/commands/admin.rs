//! Create-admin command - bootstraps an administrator account.
//!
//! Registration over HTTP always yields the `user` role, so the first admin
//! has to come from here.

use crate::cli::args::CreateAdminArgs;
use crate::config::Config;
use crate::domain::{NewUser, Password, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, UserRepository, UserStore};

/// Execute the create-admin command
pub async fn execute(args: CreateAdminArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config.database_url)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let users = UserStore::new(db.get_connection());
    let admin = create_admin(&users, args).await?;

    tracing::info!(user_id = %admin.id, email = %admin.email, "Administrator created");
    println!("Created admin {} ({})", admin.email, admin.id);

    Ok(())
}

/// Hash the password and insert the account with the admin role.
pub async fn create_admin(
    users: &dyn UserRepository,
    args: CreateAdminArgs,
) -> AppResult<User> {
    if args.email.trim().is_empty() || args.name.trim().is_empty() {
        return Err(AppError::validation("Email and name are required"));
    }

    let password = Password::new(&args.password)?;
    let new_user = NewUser::regular(args.email, args.name, password.into_string())
        .with_role(UserRole::Admin);

    users.create(new_user).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockUserRepository;
    use chrono::Utc;
    use uuid::Uuid;

    fn args(email: &str) -> CreateAdminArgs {
        CreateAdminArgs {
            email: email.to_string(),
            name: "Root".to_string(),
            password: "s3cret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_admin_sets_role_and_hashes() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().times(1).returning(|new_user| {
            assert_eq!(new_user.role, UserRole::Admin);
            assert_ne!(new_user.password_hash, "s3cret");
            assert!(Password::from_hash(new_user.password_hash.clone()).verify("s3cret"));

            let now = Utc::now();
            Ok(User {
                id: Uuid::new_v4(),
                email: new_user.email,
                password_hash: new_user.password_hash,
                name: new_user.name,
                avatar: new_user.avatar,
                role: new_user.role,
                created_at: now,
                updated_at: now,
            })
        });

        let admin = create_admin(&repo, args("root@example.com")).await.unwrap();
        assert!(admin.is_admin());
    }

    #[tokio::test]
    async fn test_create_admin_rejects_blank_email() {
        let repo = MockUserRepository::new();
        let err = create_admin(&repo, args("  ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
