//! Association resolver integration tests

#[cfg(test)]
mod tests {
    use crate::common::{AccessFactory, RoleFactory, TestDatabase, UserFactory};
    use crate::{assert_err, assert_ok};
    use chrono::{Duration, TimeZone, Utc};
    use rolekeeper::RbacError;
    use rolekeeper::core::models::{Access, Role, RoleAccess, User};
    use rolekeeper::storage::EntityStore;

    #[tokio::test]
    async fn test_alice_can_delete_users() {
        let db = TestDatabase::new().await;

        let alice = db
            .insert_user(User::new("alice", "9998887776", "a@x.com"))
            .await;
        let admin = db.insert_role(Role::new("admin")).await;
        let delete_user = db.insert_access(Access::new("delete_user")).await;
        assert_eq!((alice.id, admin.id, delete_user.id), (1, 1, 1));

        db.grant(admin.id, delete_user.id).await;
        db.assign(alice.id, admin.id, None).await;

        let names = assert_ok!(db.resolver().access_names_for_user(alice.id).await);
        assert_eq!(names, vec!["delete_user"]);
    }

    #[tokio::test]
    async fn test_user_without_roles_has_no_access_names() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;

        let names = assert_ok!(db.resolver().access_names_for_user(user.id).await);
        assert!(names.is_empty());

        let roles = assert_ok!(db.resolver().user_roles_for_user(user.id).await);
        assert!(roles.is_empty());
    }

    #[tokio::test]
    async fn test_access_names_are_deduplicated_and_sorted() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;
        let editor = db.insert_role(RoleFactory::create()).await;
        let viewer = db.insert_role(RoleFactory::create()).await;
        let write = db.insert_access(Access::new("write")).await;
        let read = db.insert_access(Access::new("read")).await;

        db.grant(editor.id, read.id).await;
        db.grant(editor.id, write.id).await;
        db.grant(viewer.id, read.id).await;
        db.assign(user.id, editor.id, None).await;
        db.assign(user.id, viewer.id, None).await;

        let names = db.resolver().access_names_for_user(user.id).await.unwrap();
        assert_eq!(names, vec!["read", "write"]);
    }

    #[tokio::test]
    async fn test_expired_assignment_grants_nothing() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;
        let current = db.insert_role(RoleFactory::create()).await;
        let lapsed = db.insert_role(RoleFactory::create()).await;
        let read = db.insert_access(Access::new("read")).await;
        let purge = db.insert_access(Access::new("purge")).await;

        db.grant(current.id, read.id).await;
        db.grant(lapsed.id, purge.id).await;
        db.assign(user.id, current.id, Some(Utc::now() + Duration::days(30)))
            .await;
        db.assign(user.id, lapsed.id, Some(Utc::now() - Duration::days(1)))
            .await;

        let resolver = db.resolver();

        let names = resolver.access_names_for_user(user.id).await.unwrap();
        assert_eq!(names, vec!["read"]);

        let roles = resolver.user_roles_for_user(user.id).await.unwrap();
        assert_eq!(roles, vec![current]);
    }

    #[tokio::test]
    async fn test_resolution_time_is_explicit() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;
        let role = db.insert_role(RoleFactory::create()).await;
        let access = db.insert_access(AccessFactory::create()).await;
        let expiry = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        db.grant(role.id, access.id).await;
        db.assign(user.id, role.id, Some(expiry)).await;

        let resolver = db.resolver();

        let before = resolver
            .access_names_for_user_at(user.id, expiry - Duration::hours(1))
            .await
            .unwrap();
        assert_eq!(before, vec![access.name.clone()]);

        let at_expiry = resolver
            .access_names_for_user_at(user.id, expiry)
            .await
            .unwrap();
        assert_eq!(at_expiry, vec![access.name.clone()]);

        let after = resolver
            .access_names_for_user_at(user.id, expiry + Duration::seconds(1))
            .await
            .unwrap();
        assert!(after.is_empty());

        let roles_after = resolver
            .user_roles_for_user_at(user.id, expiry + Duration::seconds(1))
            .await
            .unwrap();
        assert!(roles_after.is_empty());
    }

    #[tokio::test]
    async fn test_user_roles_ordered_by_id() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;
        let first = db.insert_role(RoleFactory::create()).await;
        let second = db.insert_role(RoleFactory::create()).await;

        db.assign(user.id, second.id, None).await;
        db.assign(user.id, first.id, None).await;

        let roles = db.resolver().user_roles_for_user(user.id).await.unwrap();
        assert_eq!(roles, vec![first, second]);
    }

    #[tokio::test]
    async fn test_role_accesses() {
        let db = TestDatabase::new().await;
        let role = db.insert_role(RoleFactory::create()).await;
        let empty = db.insert_role(RoleFactory::create()).await;
        let read = db.insert_access(AccessFactory::create()).await;
        let write = db.insert_access(AccessFactory::create()).await;

        db.grant(role.id, write.id).await;
        db.grant(role.id, read.id).await;

        let resolver = db.resolver();
        let accesses = resolver.role_accesses_for_role(role.id).await.unwrap();
        assert_eq!(accesses, vec![read, write]);

        let none = resolver.role_accesses_for_role(empty.id).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_missing_root_is_not_found() {
        let db = TestDatabase::new().await;
        let resolver = db.resolver();

        let err = assert_err!(resolver.role_accesses_for_role(5).await);
        assert!(matches!(err, RbacError::NotFound(_)));

        let err = assert_err!(resolver.user_roles_for_user(5).await);
        assert!(matches!(err, RbacError::NotFound(_)));

        let err = assert_err!(resolver.access_names_for_user(5).await);
        assert!(matches!(err, RbacError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_deleted_role_cascades_and_is_not_found() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;
        let role = db.insert_role(RoleFactory::create()).await;
        let access = db.insert_access(AccessFactory::create()).await;
        db.grant(role.id, access.id).await;
        db.assign(user.id, role.id, None).await;

        EntityStore::<Role>::delete(db.db(), role.id).await.unwrap();

        let grants = EntityStore::<RoleAccess>::get_all(db.db()).await.unwrap();
        assert!(grants.iter().all(|grant| grant.role_id != role.id));

        let resolver = db.resolver();
        let err = assert_err!(resolver.role_accesses_for_role(role.id).await);
        assert!(matches!(err, RbacError::NotFound(_)));

        // the user lost the role along with its accesses
        let names = resolver.access_names_for_user(user.id).await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_dangling_grant_is_integrity_error() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;
        let role = db.insert_role(RoleFactory::create()).await;
        let access = db.insert_access(AccessFactory::create()).await;
        db.grant(role.id, access.id).await;
        db.assign(user.id, role.id, None).await;

        db.disable_foreign_keys().await;
        EntityStore::<Access>::delete(db.db(), access.id)
            .await
            .unwrap();

        let resolver = db.resolver();

        let err = assert_err!(resolver.role_accesses_for_role(role.id).await);
        assert!(matches!(err, RbacError::Integrity(_)));

        let err = assert_err!(resolver.access_names_for_user(user.id).await);
        assert!(matches!(err, RbacError::Integrity(_)));
    }

    #[tokio::test]
    async fn test_dangling_assignment_is_integrity_error() {
        let db = TestDatabase::new().await;
        let user = db.insert_user(UserFactory::create()).await;
        let role = db.insert_role(RoleFactory::create()).await;
        db.assign(user.id, role.id, None).await;

        db.disable_foreign_keys().await;
        EntityStore::<Role>::delete(db.db(), role.id).await.unwrap();

        let resolver = db.resolver();

        let err = assert_err!(resolver.user_roles_for_user(user.id).await);
        assert!(matches!(err, RbacError::Integrity(msg) if msg.contains("role")));

        let err = assert_err!(resolver.access_names_for_user(user.id).await);
        assert!(matches!(err, RbacError::Integrity(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_role_deletes_resolve_consistently() {
        let db = TestDatabase::on_file(4).await;
        let user = db.insert_user(UserFactory::create()).await;

        let mut role_ids = Vec::new();
        for _ in 0..20 {
            let role = db.insert_role(RoleFactory::create()).await;
            let access = db.insert_access(AccessFactory::create()).await;
            db.grant(role.id, access.id).await;
            db.assign(user.id, role.id, None).await;
            role_ids.push(role.id);
        }

        let store = db.db_arc();
        let deleter = tokio::spawn(async move {
            for role_id in role_ids {
                EntityStore::<Role>::delete(store.as_ref(), role_id).await?;
                tokio::task::yield_now().await;
            }
            Ok::<_, RbacError>(())
        });

        let resolver = db.resolver();
        let mut rounds = 0;
        while rounds < 300 || !deleter.is_finished() {
            let names = resolver.access_names_for_user(user.id).await;
            assert!(names.is_ok(), "round {}: {:?}", rounds, names);

            let roles = resolver.user_roles_for_user(user.id).await;
            assert!(roles.is_ok(), "round {}: {:?}", rounds, roles);
            rounds += 1;
        }

        assert_ok!(deleter.await.unwrap());
        let names = assert_ok!(resolver.access_names_for_user(user.id).await);
        assert!(names.is_empty());
    }
}
