//! Login form mock-up. Nothing here talks to a backend.

use clima_core::Screen;

pub const SCREEN_ID: &str = "login";

const SOCIAL_PROVIDERS: &[&str] = &["Google", "Facebook", "Apple"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Sign-in is not wired to any service.
    Unavailable,
}

impl LoginOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unavailable => "Sign-in is not available yet",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginModel {
    email: String,
    password: String,
    remember_me: bool,
    outcome: Option<LoginOutcome>,
}

impl LoginModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn set_password(&mut self, password: &str) {
        self.password = password.to_string();
    }

    pub fn toggle_remember_me(&mut self) -> bool {
        self.remember_me = !self.remember_me;
        self.remember_me
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    /// "Log In" pressed. The outcome is kept and shown under the button.
    pub fn submit(&mut self) -> LoginOutcome {
        tracing::info!("Log in pressed; no sign-in backend configured");
        let outcome = LoginOutcome::Unavailable;
        self.outcome = Some(outcome);
        outcome
    }
}

impl Screen for LoginModel {
    fn id(&self) -> &'static str {
        SCREEN_ID
    }

    fn title(&self) -> String {
        "Log in to Spotify".to_string()
    }

    fn render(&self) -> String {
        let mut lines = vec![self.title(), String::new()];

        for provider in SOCIAL_PROVIDERS {
            lines.push(format!("( Continue with {} )", provider));
        }

        lines.push(String::new());
        lines.push("---------- or ----------".to_string());
        lines.push(String::new());

        if self.email.is_empty() {
            lines.push("Email or username: ".to_string());
        } else {
            lines.push(format!("Email or username: {}", self.email));
        }
        lines.push(format!(
            "Password: {}",
            "•".repeat(self.password.chars().count())
        ));

        let check = if self.remember_me { "(•)" } else { "( )" };
        lines.push(format!("{} Remember me", check));
        lines.push(String::new());
        lines.push("[ Log In ]".to_string());
        if let Some(outcome) = self.outcome {
            lines.push(outcome.message().to_string());
        }
        lines.push("Forgot your password?".to_string());
        lines.push(String::new());
        lines.push("Don't have an account? Sign up for Spotify".to_string());

        lines.join("\n")
    }
}
