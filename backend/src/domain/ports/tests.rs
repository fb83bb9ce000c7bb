//! Port-level coverage: tri-state read results and conflict reporting,
//! exercised through a stub adapter as an HTTP-tier consumer would see them.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rstest::rstest;

use super::*;
use crate::domain::{Email, NewUser, User, UserId};
use crate::test_support::sample_new_user;

#[derive(Default)]
struct StubState {
    users: Vec<User>,
    fail_with: Option<UserPersistenceError>,
}

/// In-memory `UserRepository` mirroring the adapter contract: lookups are
/// case-insensitive on email, inserts assign ids and reject duplicates.
#[derive(Default)]
struct StubUserRepository {
    state: Mutex<StubState>,
}

impl StubUserRepository {
    fn failing_with(error: UserPersistenceError) -> Self {
        Self {
            state: Mutex::new(StubState {
                users: Vec::new(),
                fail_with: Some(error),
            }),
        }
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        if let Some(error) = &state.fail_with {
            return Err(error.clone());
        }
        Ok(state
            .users
            .iter()
            .find(|user| user.email.normalized() == email.normalized())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state.lock().expect("state lock");
        if let Some(error) = &state.fail_with {
            return Err(error.clone());
        }
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    async fn insert(&self, new_user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut state = self.state.lock().expect("state lock");
        if let Some(error) = &state.fail_with {
            return Err(error.clone());
        }
        if state
            .users
            .iter()
            .any(|user| user.email.normalized() == new_user.email.normalized())
        {
            return Err(UserPersistenceError::duplicate_email(
                new_user.email.as_str(),
            ));
        }
        let next_id = i32::try_from(state.users.len()).expect("stub id fits i32") + 1;
        let user = User {
            id: UserId::new(next_id),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            password: new_user.password.clone(),
        };
        state.users.push(user.clone());
        Ok(user)
    }
}

fn repository() -> Arc<dyn UserRepository> {
    Arc::new(StubUserRepository::default())
}

#[tokio::test]
async fn inserted_user_is_found_under_any_casing() {
    let repo = repository();
    let created = repo
        .insert(&sample_new_user())
        .await
        .expect("insert should succeed");

    let recased = Email::new("JacksonRose@Hotmail.COM").expect("valid email");
    let found = repo
        .find_by_email(&recased)
        .await
        .expect("lookup should succeed");

    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn missing_email_is_not_found_rather_than_an_error() {
    let repo = repository();

    let missing = Email::new("nobody@example.com").expect("valid email");
    let found = repo
        .find_by_email(&missing)
        .await
        .expect("lookup should succeed");

    assert!(found.is_none());
}

#[tokio::test]
async fn duplicate_email_insert_is_a_conflict_not_a_silent_success() {
    let repo = repository();
    repo.insert(&sample_new_user())
        .await
        .expect("first insert should succeed");

    let err = repo
        .insert(&sample_new_user())
        .await
        .expect_err("second insert should conflict");

    assert!(matches!(err, UserPersistenceError::DuplicateEmail { .. }));
}

#[tokio::test]
async fn failures_stay_distinguishable_from_absence() {
    let repo: Arc<dyn UserRepository> = Arc::new(StubUserRepository::failing_with(
        UserPersistenceError::connection("pool exhausted"),
    ));

    let missing = Email::new("nobody@example.com").expect("valid email");
    let err = repo
        .find_by_email(&missing)
        .await
        .expect_err("failure should surface as an error");

    assert_eq!(
        err,
        UserPersistenceError::connection("pool exhausted")
    );
}

#[rstest]
#[case(
    UserPersistenceError::connection("refused"),
    "user repository connection failed: refused"
)]
#[case(
    UserPersistenceError::query("syntax error"),
    "user repository query failed: syntax error"
)]
#[case(
    UserPersistenceError::duplicate_email("a@x.com"),
    "email address is already registered: a@x.com"
)]
fn port_errors_render_their_context(
    #[case] error: UserPersistenceError,
    #[case] expected: &str,
) {
    assert_eq!(error.to_string(), expected);
}

#[rstest]
fn property_and_reservation_errors_render_their_context() {
    assert_eq!(
        PropertyPersistenceError::query("bad statement").to_string(),
        "property repository query failed: bad statement"
    );
    assert_eq!(
        ReservationPersistenceError::connection("refused").to_string(),
        "reservation repository connection failed: refused"
    );
}
