//! Builds an `AppState` backed by in-memory repositories.

use std::{path::PathBuf, sync::Arc};

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::user::User,
    test_utils::{
        FailingRepo, InMemoryNewsletterRepo, InMemoryReservationRepo, InMemoryUserRepo,
        test_config,
    },
    use_cases::{
        newsletter::{NewsletterRepo, NewsletterUseCases},
        reservation::{ReservationRepo, ReservationUseCases},
        user::{AuthUseCases, UserRepo},
    },
};

/// The repositories behind a built `AppState`, for assertions on stored records.
pub struct TestRepos {
    pub users: Arc<InMemoryUserRepo>,
    pub reservations: Arc<InMemoryReservationRepo>,
    pub newsletter: Arc<InMemoryNewsletterRepo>,
}

/// # Example
///
/// ```ignore
/// let (app_state, repos) = TestAppStateBuilder::new()
///     .with_user(create_test_user(|u| u.password = Some("p1".into())))
///     .build_with_repos();
/// ```
#[derive(Default)]
pub struct TestAppStateBuilder {
    users: Vec<User>,
    subscribers: Vec<String>,
    public_dir: Option<PathBuf>,
    failing_storage: bool,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_subscriber(mut self, email: &str) -> Self {
        self.subscribers.push(email.to_string());
        self
    }

    pub fn with_public_dir(mut self, dir: PathBuf) -> Self {
        self.public_dir = Some(dir);
        self
    }

    /// Every repository call fails with a database error.
    pub fn with_failing_storage(mut self) -> Self {
        self.failing_storage = true;
        self
    }

    pub fn build(self) -> AppState {
        self.build_with_repos().0
    }

    /// With failing storage the returned repos are unused and stay empty.
    pub fn build_with_repos(self) -> (AppState, TestRepos) {
        let repos = TestRepos {
            users: Arc::new(InMemoryUserRepo::with_users(self.users)),
            reservations: Arc::new(InMemoryReservationRepo::new()),
            newsletter: Arc::new(InMemoryNewsletterRepo::with_emails(self.subscribers)),
        };

        let (user_repo, reservation_repo, newsletter_repo) = if self.failing_storage {
            let failing = Arc::new(FailingRepo);
            (
                failing.clone() as Arc<dyn UserRepo>,
                failing.clone() as Arc<dyn ReservationRepo>,
                failing as Arc<dyn NewsletterRepo>,
            )
        } else {
            (
                repos.users.clone() as Arc<dyn UserRepo>,
                repos.reservations.clone() as Arc<dyn ReservationRepo>,
                repos.newsletter.clone() as Arc<dyn NewsletterRepo>,
            )
        };

        let mut config = test_config();
        if let Some(dir) = self.public_dir {
            config.public_dir = dir;
        }

        let app_state = AppState {
            config: Arc::new(config),
            auth_use_cases: Arc::new(AuthUseCases::new(user_repo)),
            reservation_use_cases: Arc::new(ReservationUseCases::new(reservation_repo)),
            newsletter_use_cases: Arc::new(NewsletterUseCases::new(newsletter_repo)),
        };

        (app_state, repos)
    }
}
