//! Entity store integration tests

#[cfg(test)]
mod tests {
    use crate::common::{AccessFactory, RoleFactory, TestDatabase, UserFactory};
    use crate::{assert_err, assert_ok};
    use chrono::{TimeZone, Utc};
    use rolekeeper::RbacError;
    use rolekeeper::core::models::{
        Access, Role, RoleAccess, RoleAccessKey, User, UserRole, UserRoleKey,
    };
    use rolekeeper::storage::EntityStore;

    #[tokio::test]
    async fn test_user_round_trip() {
        let db = TestDatabase::new().await;

        let mut alice = User::new("alice", "9998887776", "a@x.com");
        assert_ok!(db.db().create(&mut alice).await);
        assert_eq!(alice.id, 1);

        let fetched = assert_ok!(EntityStore::<User>::get(db.db(), alice.id).await);
        assert_eq!(fetched, alice);
    }

    #[tokio::test]
    async fn test_generated_ids_increase() {
        let db = TestDatabase::new().await;

        let first = db.insert_role(RoleFactory::create()).await;
        let second = db.insert_role(RoleFactory::create()).await;
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let db = TestDatabase::new().await;

        let err = assert_err!(EntityStore::<Access>::get(db.db(), 42).await);
        assert!(matches!(err, RbacError::NotFound(msg) if msg.contains("42")));
    }

    #[tokio::test]
    async fn test_duplicate_names_violate_constraint() {
        let db = TestDatabase::new().await;

        db.insert_user(UserFactory::named("alice")).await;
        let mut again = UserFactory::named("alice");
        let err = assert_err!(db.db().create(&mut again).await);
        assert!(matches!(err, RbacError::ConstraintViolation(_)));

        db.insert_role(Role::new("admin")).await;
        let mut again = Role::new("admin");
        let err = assert_err!(db.db().create(&mut again).await);
        assert!(matches!(err, RbacError::ConstraintViolation(_)));

        db.insert_access(Access::new("read")).await;
        let mut again = Access::new("read");
        let err = assert_err!(db.db().create(&mut again).await);
        assert!(matches!(err, RbacError::ConstraintViolation(_)));

        // the failed inserts left nothing behind
        let stats = db.db().stats().await.unwrap();
        assert_eq!((stats.users, stats.roles, stats.accesses), (1, 1, 1));
    }

    #[tokio::test]
    async fn test_update_existing_user() {
        let db = TestDatabase::new().await;
        let mut user = db.insert_user(UserFactory::named("bob")).await;

        user.email_id = "bob@new.example.com".to_string();
        user.mobile = "1234567890".to_string();
        assert_ok!(db.db().update(&user).await);

        let fetched = EntityStore::<User>::get(db.db(), user.id).await.unwrap();
        assert_eq!(fetched, user);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = TestDatabase::new().await;

        let ghost = User {
            id: 99,
            ..UserFactory::create()
        };
        let err = assert_err!(db.db().update(&ghost).await);
        assert!(matches!(err, RbacError::NotFound(_)));

        let ghost = Role {
            id: 99,
            name: "ghost".to_string(),
        };
        let err = assert_err!(db.db().update(&ghost).await);
        assert!(matches!(err, RbacError::NotFound(_)));

        let err = assert_err!(db.db().update(&UserRole::new(1, 1, None)).await);
        assert!(matches!(err, RbacError::NotFound(_)));

        let err = assert_err!(db.db().update(&RoleAccess::new(1, 1)).await);
        assert!(matches!(err, RbacError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rename_onto_existing_name_violates_constraint() {
        let db = TestDatabase::new().await;
        db.insert_access(Access::new("read")).await;
        let mut write = db.insert_access(Access::new("write")).await;

        write.name = "read".to_string();
        let err = assert_err!(db.db().update(&write).await);
        assert!(matches!(err, RbacError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let db = TestDatabase::new().await;
        let role = db.insert_role(RoleFactory::create()).await;

        assert_ok!(EntityStore::<Role>::delete(db.db(), role.id).await);
        assert_ok!(EntityStore::<Role>::delete(db.db(), role.id).await);
        assert_ok!(EntityStore::<Role>::delete(db.db(), 12345).await);

        let err = assert_err!(EntityStore::<Role>::get(db.db(), role.id).await);
        assert!(matches!(err, RbacError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_all_empty_and_ordered() {
        let db = TestDatabase::new().await;

        let users = EntityStore::<User>::get_all(db.db()).await.unwrap();
        assert!(users.is_empty());

        let first = db.insert_user(UserFactory::create()).await;
        let second = db.insert_user(UserFactory::create()).await;

        let users = EntityStore::<User>::get_all(db.db()).await.unwrap();
        assert_eq!(users, vec![first, second]);
    }

    #[tokio::test]
    async fn test_assignment_round_trip_and_expiry_update() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;
        let role = db.insert_role(RoleFactory::create()).await;
        db.assign(user.id, role.id, None).await;

        let key = UserRoleKey {
            user_id: user.id,
            role_id: role.id,
        };
        let stored = EntityStore::<UserRole>::get(db.db(), key).await.unwrap();
        assert_eq!(stored, UserRole::new(user.id, role.id, None));

        let expiry = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert_ok!(
            db.db()
                .update(&UserRole::new(user.id, role.id, Some(expiry)))
                .await
        );

        let stored = EntityStore::<UserRole>::get(db.db(), key).await.unwrap();
        assert_eq!(stored.expiry_date, Some(expiry));
    }

    #[tokio::test]
    async fn test_duplicate_association_violates_constraint() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;
        let role = db.insert_role(RoleFactory::create()).await;
        let access = db.insert_access(AccessFactory::create()).await;

        db.assign(user.id, role.id, None).await;
        let mut again = UserRole::new(user.id, role.id, None);
        let err = assert_err!(db.db().create(&mut again).await);
        assert!(matches!(err, RbacError::ConstraintViolation(_)));

        db.grant(role.id, access.id).await;
        let mut again = RoleAccess::new(role.id, access.id);
        let err = assert_err!(db.db().create(&mut again).await);
        assert!(matches!(err, RbacError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_association_to_missing_row_violates_constraint() {
        let db = TestDatabase::new().await;
        let role = db.insert_role(RoleFactory::create()).await;

        let mut assignment = UserRole::new(77, role.id, None);
        let err = assert_err!(db.db().create(&mut assignment).await);
        assert!(matches!(err, RbacError::ConstraintViolation(_)));

        let mut grant = RoleAccess::new(role.id, 88);
        let err = assert_err!(db.db().create(&mut grant).await);
        assert!(matches!(err, RbacError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_grant_update_touches_existing_row() {
        let db = TestDatabase::new().await;
        let role = db.insert_role(RoleFactory::create()).await;
        let access = db.insert_access(AccessFactory::create()).await;
        db.grant(role.id, access.id).await;

        assert_ok!(db.db().update(&RoleAccess::new(role.id, access.id)).await);

        let key = RoleAccessKey {
            role_id: role.id,
            access_id: access.id,
        };
        let stored = EntityStore::<RoleAccess>::get(db.db(), key).await.unwrap();
        assert_eq!(stored.key(), key);
    }

    #[tokio::test]
    async fn test_deleting_user_cascades_to_assignments() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;
        let role = db.insert_role(RoleFactory::create()).await;
        db.assign(user.id, role.id, None).await;

        assert_ok!(EntityStore::<User>::delete(db.db(), user.id).await);

        let assignments = EntityStore::<UserRole>::get_all(db.db()).await.unwrap();
        assert!(assignments.is_empty());
        // the role itself survives
        assert_ok!(EntityStore::<Role>::get(db.db(), role.id).await);
    }

    #[tokio::test]
    async fn test_deleting_role_cascades_to_both_association_tables() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;
        let role = db.insert_role(RoleFactory::create()).await;
        let access = db.insert_access(AccessFactory::create()).await;
        db.assign(user.id, role.id, None).await;
        db.grant(role.id, access.id).await;

        assert_ok!(EntityStore::<Role>::delete(db.db(), role.id).await);

        let stats = db.db().stats().await.unwrap();
        assert_eq!(stats.user_roles, 0);
        assert_eq!(stats.role_accesses, 0);
        assert_eq!((stats.users, stats.accesses), (1, 1));
    }

    #[tokio::test]
    async fn test_deleting_access_cascades_to_grants() {
        let db = TestDatabase::new().await;
        let role = db.insert_role(RoleFactory::create()).await;
        let access = db.insert_access(AccessFactory::create()).await;
        db.grant(role.id, access.id).await;

        assert_ok!(EntityStore::<Access>::delete(db.db(), access.id).await);

        let grants = EntityStore::<RoleAccess>::get_all(db.db()).await.unwrap();
        assert!(grants.is_empty());
    }

    #[tokio::test]
    async fn test_stats_count_every_table() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;
        let admin = db.insert_role(RoleFactory::create()).await;
        let viewer = db.insert_role(RoleFactory::create()).await;
        let access = db.insert_access(AccessFactory::create()).await;
        db.assign(user.id, admin.id, None).await;
        db.assign(user.id, viewer.id, None).await;
        db.grant(admin.id, access.id).await;

        let stats = db.db().stats().await.unwrap();
        assert_eq!(stats.users, 1);
        assert_eq!(stats.roles, 2);
        assert_eq!(stats.accesses, 1);
        assert_eq!(stats.user_roles, 2);
        assert_eq!(stats.role_accesses, 1);
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;

        assert_ok!(db.db().migrate().await);

        let fetched = assert_ok!(EntityStore::<User>::get(db.db(), user.id).await);
        assert_eq!(fetched, user);
    }
}
