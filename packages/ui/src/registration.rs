//! # Sign-up submission flow
//!
//! [`RegistrationForm`] turns a submitted [`FormState`] into side effects:
//!
//! 1. Passwords differ: warn, no request.
//! 2. Otherwise `POST /users` with name, email and password.
//! 3. Success: navigate to [`ME_PATH`], no notification.
//! 4. Failure: one error notification, worded by [`Message`] for the error kind.
//!
//! Every attempt makes at most one request, one navigation and one notification.
//! Nothing is retried. Field edits stay possible while a request is pending, but a
//! second submit during that window is dropped with [`SubmitOutcome::InFlight`].

use std::cell::Cell;
use std::rc::Rc;

use api::{RegisterError, UsersApi};

use crate::form::FormState;
use crate::i18n::{Locale, Message};
use crate::services::{Navigator, Notifier, Severity};

/// Landing route after a successful sign-up.
pub const ME_PATH: &str = "/me";

/// The log-in screen, linked from the form.
pub const LOGIN_PATH: &str = "/login";

/// What a call to [`RegistrationForm::submit`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Account created; navigated to [`ME_PATH`].
    Registered,
    /// Passwords differ; warned without contacting the server.
    PasswordMismatch,
    /// The server refused or could not be reached; an error was shown.
    Failed(RegisterError),
    /// Another submission is still pending; nothing happened.
    InFlight,
}

impl SubmitOutcome {
    /// False for [`SubmitOutcome::InFlight`]: the earlier submission is still pending
    /// and will report its own outcome.
    pub fn ends_submission(&self) -> bool {
        !matches!(self, SubmitOutcome::InFlight)
    }
}

/// Submission logic for the sign-up form.
///
/// Clones share the in-flight flag, so a clone moved into an async task still
/// sees submissions started from the original.
#[derive(Clone)]
pub struct RegistrationForm<A, N, V> {
    api: A,
    notifier: N,
    navigator: V,
    locale: Locale,
    in_flight: Rc<Cell<bool>>,
}

impl<A, N, V> RegistrationForm<A, N, V>
where
    A: UsersApi,
    N: Notifier,
    V: Navigator,
{
    pub fn new(api: A, notifier: N, navigator: V) -> Self {
        Self {
            api,
            notifier,
            navigator,
            locale: Locale::default(),
            in_flight: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn submit(&self, state: &FormState) -> SubmitOutcome {
        let Some(_guard) = InFlightGuard::enter(&self.in_flight) else {
            tracing::debug!("sign-up already in flight, ignoring submit");
            return SubmitOutcome::InFlight;
        };

        if !state.passwords_match() {
            self.show(Severity::Warn, &Message::PasswordMismatch);
            return SubmitOutcome::PasswordMismatch;
        }

        let user = state.to_new_user();
        match self.api.create_user(&user).await {
            Ok(()) => {
                tracing::info!(email = %user.email, "sign-up succeeded");
                self.navigator.go_to(ME_PATH);
                SubmitOutcome::Registered
            }
            Err(err) => {
                self.show(Severity::Error, &Message::from(&err));
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn show(&self, severity: Severity, message: &Message) {
        self.notifier.notify(severity, &message.text(self.locale));
    }
}

/// Holds the in-flight flag for the life of one submission.
struct InFlightGuard {
    flag: Rc<Cell<bool>>,
}

impl InFlightGuard {
    fn enter(flag: &Rc<Cell<bool>>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag: flag.clone() })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use api::NewUser;

    use super::*;
    use crate::form::Field;

    struct FakeApi {
        result: Result<(), RegisterError>,
        calls: RefCell<Vec<NewUser>>,
    }

    impl FakeApi {
        fn returning(result: Result<(), RegisterError>) -> Self {
            Self {
                result,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl UsersApi for FakeApi {
        async fn create_user(&self, user: &NewUser) -> Result<(), RegisterError> {
            self.calls.borrow_mut().push(user.clone());
            tokio::task::yield_now().await;
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<(Severity, String)>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, severity: Severity, message: &str) {
            self.0.borrow_mut().push((severity, message.to_string()));
        }
    }

    #[derive(Default)]
    struct RecordingNavigator(RefCell<Vec<String>>);

    impl Navigator for RecordingNavigator {
        fn go_to(&self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    fn kim() -> FormState {
        FormState::new()
            .with_field(Field::Name, "Kim")
            .with_field(Field::Email, "kim@example.com")
            .with_field(Field::Password, "secret123")
            .with_field(Field::PasswordRepeat, "secret123")
    }

    #[tokio::test]
    async fn test_password_mismatch_warns_without_request() {
        let api = FakeApi::returning(Ok(()));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let form = RegistrationForm::new(&api, &notifier, &navigator);

        let state = kim().with_field(Field::PasswordRepeat, "secret124");
        assert_eq!(form.submit(&state).await, SubmitOutcome::PasswordMismatch);

        assert!(api.calls.borrow().is_empty());
        assert!(navigator.0.borrow().is_empty());
        assert_eq!(
            *notifier.0.borrow(),
            vec![(Severity::Warn, "Passwords do not match.".to_string())]
        );
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_success_navigates_to_me() {
        let api = FakeApi::returning(Ok(()));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let form = RegistrationForm::new(&api, &notifier, &navigator);

        assert_eq!(form.submit(&kim()).await, SubmitOutcome::Registered);

        assert_eq!(
            *api.calls.borrow(),
            vec![NewUser::new("Kim", "kim@example.com", "secret123")]
        );
        assert_eq!(*navigator.0.borrow(), vec!["/me".to_string()]);
        assert!(notifier.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_conflict_shows_email_in_use() {
        let api = FakeApi::returning(Err(RegisterError::Conflict));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let form = RegistrationForm::new(&api, &notifier, &navigator);

        assert_eq!(
            form.submit(&kim()).await,
            SubmitOutcome::Failed(RegisterError::Conflict)
        );

        assert_eq!(api.calls.borrow().len(), 1);
        assert!(navigator.0.borrow().is_empty());
        assert_eq!(
            *notifier.0.borrow(),
            vec![(
                Severity::Error,
                "This email address is already in use.".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_server_error_includes_detail() {
        let api = FakeApi::returning(Err(RegisterError::Server {
            status: 500,
            message: "db down".to_string(),
        }));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let form = RegistrationForm::new(&api, &notifier, &navigator);

        form.submit(&kim()).await;

        let shown = notifier.0.borrow();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, Severity::Error);
        assert!(shown[0].1.contains("db down"));
        assert!(navigator.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_network_error_is_generic() {
        let api = FakeApi::returning(Err(RegisterError::Network("refused".to_string())));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let form = RegistrationForm::new(&api, &notifier, &navigator).with_locale(Locale::Ko);

        form.submit(&kim()).await;

        assert_eq!(
            *notifier.0.borrow(),
            vec![(
                Severity::Error,
                "네트워크 오류가 발생했습니다. 나중에 다시 시도하세요.".to_string()
            )]
        );
        assert!(navigator.0.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_form_usable_after_failure() {
        let api = FakeApi::returning(Err(RegisterError::Conflict));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let form = RegistrationForm::new(&api, &notifier, &navigator);

        let state = kim();
        form.submit(&state).await;
        form.submit(&state).await;

        assert_eq!(api.calls.borrow().len(), 2);
        assert_eq!(notifier.0.borrow().len(), 2);
        assert_eq!(state.email, "kim@example.com");
    }

    #[tokio::test]
    async fn test_second_submit_while_pending_is_dropped() {
        let api = FakeApi::returning(Ok(()));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let form = RegistrationForm::new(&api, &notifier, &navigator);
        let state = kim();

        let (first, second) = tokio::join!(form.submit(&state), form.submit(&state));

        assert_eq!(first, SubmitOutcome::Registered);
        assert_eq!(second, SubmitOutcome::InFlight);
        assert_eq!(api.calls.borrow().len(), 1);
        assert_eq!(navigator.0.borrow().len(), 1);
        assert!(notifier.0.borrow().is_empty());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_mismatch_while_pending_is_dropped_without_warning() {
        let api = FakeApi::returning(Err(RegisterError::Conflict));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let form = RegistrationForm::new(&api, &notifier, &navigator);
        let first = kim();
        let mismatched = kim().with_field(Field::PasswordRepeat, "typo");

        let (first, second) = tokio::join!(form.submit(&first), form.submit(&mismatched));

        assert_eq!(first, SubmitOutcome::Failed(RegisterError::Conflict));
        assert_eq!(second, SubmitOutcome::InFlight);
        assert_eq!(api.calls.borrow().len(), 1);
        // Only the conflict from the first submission is shown.
        assert_eq!(
            *notifier.0.borrow(),
            vec![(
                Severity::Error,
                "This email address is already in use.".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_only_settled_outcomes_end_submission() {
        let api = FakeApi::returning(Ok(()));
        let notifier = RecordingNotifier::default();
        let navigator = RecordingNavigator::default();
        let form = RegistrationForm::new(&api, &notifier, &navigator);
        let state = kim();

        let (first, second) = tokio::join!(form.submit(&state), form.submit(&state));

        assert!(first.ends_submission());
        assert!(!second.ends_submission());
        assert!(SubmitOutcome::PasswordMismatch.ends_submission());
        assert!(SubmitOutcome::Failed(RegisterError::Conflict).ends_submission());
    }
}
