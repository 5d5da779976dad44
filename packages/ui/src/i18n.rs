//! User-facing text for the sign-up screen, in English and Korean.

use api::RegisterError;

/// Display language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    /// Pick a locale from a BCP-47 tag such as `ko-KR` or `en_US`.
    /// Anything unrecognised is English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "ko" => Locale::Ko,
            _ => Locale::En,
        }
    }
}

/// A notification the sign-up flow can raise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    PasswordMismatch,
    EmailInUse,
    /// Carries the server's own error text.
    ServerError(String),
    NetworkError,
}

impl Message {
    pub fn text(&self, locale: Locale) -> String {
        match (self, locale) {
            (Message::PasswordMismatch, Locale::En) => "Passwords do not match.".to_string(),
            (Message::PasswordMismatch, Locale::Ko) => "비밀번호가 일치하지 않습니다.".to_string(),
            (Message::EmailInUse, Locale::En) => {
                "This email address is already in use.".to_string()
            }
            (Message::EmailInUse, Locale::Ko) => "이 이메일 주소는 이미 사용 중입니다.".to_string(),
            (Message::ServerError(detail), Locale::En) => format!("Server error: {detail}"),
            (Message::ServerError(detail), Locale::Ko) => format!("서버 오류: {detail}"),
            (Message::NetworkError, Locale::En) => {
                "A network error occurred. Please try again later.".to_string()
            }
            (Message::NetworkError, Locale::Ko) => {
                "네트워크 오류가 발생했습니다. 나중에 다시 시도하세요.".to_string()
            }
        }
    }
}

impl From<&RegisterError> for Message {
    fn from(err: &RegisterError) -> Self {
        match err {
            RegisterError::Conflict => Message::EmailInUse,
            RegisterError::Server { message, .. } => Message::ServerError(message.clone()),
            RegisterError::Network(_) => Message::NetworkError,
        }
    }
}

/// Static labels on the sign-up page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Labels {
    pub heading: &'static str,
    pub google: &'static str,
    pub or: &'static str,
    pub name: &'static str,
    pub name_placeholder: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub password_repeat: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub have_account: &'static str,
    pub log_in: &'static str,
    pub login_heading: &'static str,
    pub no_account: &'static str,
    pub me_heading: &'static str,
    pub me_welcome: &'static str,
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                heading: "Sign up",
                google: "Continue with Google",
                or: "or",
                name: "Name",
                name_placeholder: "Jane Doe",
                email: "Email",
                password: "Password",
                password_repeat: "Confirm password",
                submit: "Sign up",
                submitting: "Signing up...",
                have_account: "Already a member?",
                log_in: "Log in",
                login_heading: "Log in",
                no_account: "Not a member yet?",
                me_heading: "My account",
                me_welcome: "Your account has been created.",
            },
            Locale::Ko => Self {
                heading: "회원가입",
                google: "구글로 시작하기",
                or: "또는",
                name: "이름",
                name_placeholder: "김링크",
                email: "이메일",
                password: "비밀번호",
                password_repeat: "비밀번호 확인",
                submit: "회원가입",
                submitting: "가입 중...",
                have_account: "이미 회원이신가요?",
                log_in: "로그인하기",
                login_heading: "로그인",
                no_account: "아직 회원이 아니신가요?",
                me_heading: "내 정보",
                me_welcome: "회원가입이 완료되었습니다.",
            },
        }
    }
}
