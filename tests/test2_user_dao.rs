#![cfg(feature = "sqlite")]

// The user DAO and account service are the consumers of record for the
// template: they exercise the engine the way application code does,
// without ever touching a connection, statement, or cursor.

use sql_template::prelude::*;
use tempfile::tempdir;

fn unique_db_path(prefix: &str) -> String {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(format!("{prefix}.db"));
    std::mem::forget(dir);
    path.to_string_lossy().into_owned()
}

#[derive(Debug, Clone, PartialEq)]
struct User {
    id: i64,
    account: String,
    password: String,
    email: String,
}

struct UserRowMapper;

impl RowMapper for UserRowMapper {
    type Output = User;

    fn map_row(&self, row: &SqlRow) -> Result<User, DataAccessError> {
        Ok(User {
            id: *row
                .try_get("id")?
                .as_int()
                .ok_or_else(|| DataAccessError::Mapping("id is not an integer".to_string()))?,
            account: text(row, "account")?,
            password: text(row, "password")?,
            email: text(row, "email")?,
        })
    }
}

fn text(row: &SqlRow, col: &str) -> Result<String, DataAccessError> {
    row.try_get(col)?
        .as_text()
        .map(str::to_string)
        .ok_or_else(|| DataAccessError::Mapping(format!("column {col} is not text")))
}

struct UserDao {
    template: SqlTemplate,
}

impl UserDao {
    fn new(template: SqlTemplate) -> Self {
        Self { template }
    }

    async fn insert(
        &self,
        account: &str,
        password: &str,
        email: &str,
    ) -> Result<usize, DataAccessError> {
        self.template
            .update(
                "INSERT INTO users (account, password, email) VALUES (?1, ?2, ?3)",
                &[
                    SqlValue::Text(account.to_string()),
                    SqlValue::Text(password.to_string()),
                    SqlValue::Text(email.to_string()),
                ],
            )
            .await
    }

    async fn update(&self, user: &User) -> Result<usize, DataAccessError> {
        self.template
            .update(
                "UPDATE users SET account = ?1, password = ?2, email = ?3 WHERE id = ?4",
                &[
                    SqlValue::Text(user.account.clone()),
                    SqlValue::Text(user.password.clone()),
                    SqlValue::Text(user.email.clone()),
                    SqlValue::Int(user.id),
                ],
            )
            .await
    }

    async fn find_all(&self) -> Result<Vec<User>, DataAccessError> {
        self.template
            .query(
                "SELECT id, account, password, email FROM users ORDER BY id",
                &UserRowMapper,
                &[],
            )
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<User, DataAccessError> {
        self.template
            .query_for_object(
                "SELECT id, account, password, email FROM users WHERE id = ?1",
                &UserRowMapper,
                &[SqlValue::Int(id)],
            )
            .await
    }

    async fn find_by_account(&self, account: &str) -> Result<User, DataAccessError> {
        self.template
            .query_for_object(
                "SELECT id, account, password, email FROM users WHERE account = ?1",
                &UserRowMapper,
                &[SqlValue::Text(account.to_string())],
            )
            .await
    }
}

struct UserHistoryDao {
    template: SqlTemplate,
}

impl UserHistoryDao {
    fn new(template: SqlTemplate) -> Self {
        Self { template }
    }

    async fn log(&self, user: &User, changed_by: &str) -> Result<(), DataAccessError> {
        self.template
            .update(
                "INSERT INTO user_history (user_id, account, password, email, changed_by)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                &[
                    SqlValue::Int(user.id),
                    SqlValue::Text(user.account.clone()),
                    SqlValue::Text(user.password.clone()),
                    SqlValue::Text(user.email.clone()),
                    SqlValue::Text(changed_by.to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    async fn count_for_user(&self, user_id: i64) -> Result<i64, DataAccessError> {
        let count: fn(&SqlRow) -> Result<i64, DataAccessError> =
            |row| Ok(*row.try_get("cnt")?.as_int().unwrap_or(&0));
        self.template
            .query_for_object(
                "SELECT COUNT(*) AS cnt FROM user_history WHERE user_id = ?1",
                &count,
                &[SqlValue::Int(user_id)],
            )
            .await
    }
}

struct UserAccountService {
    users: UserDao,
    history: UserHistoryDao,
}

impl UserAccountService {
    async fn change_password(
        &self,
        id: i64,
        new_password: &str,
        changed_by: &str,
    ) -> Result<(), DataAccessError> {
        let mut user = self.users.find_by_id(id).await?;
        user.password = new_password.to_string();
        self.update_user(&user).await?;
        self.history.log(&user, changed_by).await
    }

    /// An update that must touch exactly one row; anything else is a
    /// data error, not a success.
    async fn update_user(&self, user: &User) -> Result<(), DataAccessError> {
        let affected = self.users.update(user).await?;
        if affected != 1 {
            return Err(DataAccessError::UnexpectedRowCount {
                expected: 1,
                actual: affected,
            });
        }
        Ok(())
    }
}

async fn service(prefix: &str) -> Result<UserAccountService, DataAccessError> {
    let pool = ConnectionPool::sqlite_builder(unique_db_path(prefix))
        .build()
        .await?;
    let template = SqlTemplate::with_pool(pool);
    template
        .batch(
            "CREATE TABLE users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                account TEXT NOT NULL,
                password TEXT NOT NULL,
                email TEXT NOT NULL
            );
            CREATE TABLE user_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                account TEXT NOT NULL,
                password TEXT NOT NULL,
                email TEXT NOT NULL,
                changed_by TEXT NOT NULL
            );",
        )
        .await?;
    Ok(UserAccountService {
        users: UserDao::new(template.clone()),
        history: UserHistoryDao::new(template),
    })
}

#[tokio::test]
async fn insert_and_find_users() -> Result<(), DataAccessError> {
    let service = service("dao_find").await?;

    service.users.insert("alice", "p1", "a@x.com").await?;
    service.users.insert("bob", "p2", "b@x.com").await?;

    let all = service.users.find_all().await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].account, "alice");
    assert_eq!(all[1].account, "bob");

    let bob = service.users.find_by_account("bob").await?;
    assert_eq!(bob, all[1]);
    assert_eq!(service.users.find_by_id(bob.id).await?, bob);

    Ok(())
}

#[tokio::test]
async fn change_password_updates_user_and_appends_history() -> Result<(), DataAccessError> {
    let service = service("dao_password").await?;

    service.users.insert("alice", "p1", "a@x.com").await?;
    let alice = service.users.find_by_account("alice").await?;

    service.change_password(alice.id, "p2", "admin").await?;

    let reread = service.users.find_by_id(alice.id).await?;
    assert_eq!(reread.password, "p2");
    assert_eq!(service.history.count_for_user(alice.id).await?, 1);

    Ok(())
}

#[tokio::test]
async fn lookups_of_missing_users_fail_with_no_result() -> Result<(), DataAccessError> {
    let service = service("dao_missing").await?;

    let err = service.users.find_by_id(42).await.unwrap_err();
    assert!(matches!(err, DataAccessError::NoResult));

    let err = service
        .change_password(42, "p2", "admin")
        .await
        .unwrap_err();
    assert!(matches!(err, DataAccessError::NoResult));

    Ok(())
}

#[tokio::test]
async fn exact_count_assertion_rejects_zero_row_updates() -> Result<(), DataAccessError> {
    let service = service("dao_count").await?;

    let ghost = User {
        id: 999,
        account: "ghost".to_string(),
        password: "p".to_string(),
        email: "g@x.com".to_string(),
    };
    let err = service.update_user(&ghost).await.unwrap_err();
    assert!(matches!(
        err,
        DataAccessError::UnexpectedRowCount {
            expected: 1,
            actual: 0
        }
    ));

    Ok(())
}
