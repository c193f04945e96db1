//! Form Validation Errors
//!
//! Value object constructors report the first rule a field breaks as a
//! [`ValidationError`]. The message is rendered per [`Locale`] at the edge.

use std::fmt;

use kernel::Locale;

/// Form field being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    UserName,
    Password,
    Nickname,
    Email,
}

impl Field {
    /// Human-readable label used inside messages
    pub const fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Field::UserName, Locale::En) => "Username",
            (Field::Password, Locale::En) => "Password",
            (Field::Nickname, Locale::En) => "Nickname",
            (Field::Email, Locale::En) => "Email address",
            (Field::UserName, Locale::Zh) => "用户名",
            (Field::Password, Locale::Zh) => "密码",
            (Field::Nickname, Locale::Zh) => "昵称",
            (Field::Email, Locale::Zh) => "邮箱地址",
        }
    }
}

/// Rule a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    /// Minimum length in characters
    MinLength(usize),
    /// Maximum length in characters
    MaxLength(usize),
    EmailFormat,
}

/// First violated rule of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Field,
    pub rule: Rule,
}

impl ValidationError {
    pub const fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }

    pub const fn required(field: Field) -> Self {
        Self::new(field, Rule::Required)
    }

    /// Localized message
    ///
    /// ## Examples
    /// ```rust
    /// use auth::domain::validation::{Field, Rule, ValidationError};
    /// use kernel::Locale;
    ///
    /// let err = ValidationError::new(Field::Password, Rule::MinLength(6));
    /// assert_eq!(err.message(Locale::Zh), "密码长度必须至少为6个字符");
    /// ```
    pub fn message(&self, locale: Locale) -> String {
        let label = self.field.label(locale);
        match (self.rule, locale) {
            (Rule::Required, Locale::En) => format!("{label} is a required field"),
            (Rule::MinLength(n), Locale::En) => {
                format!("{label} must be at least {n} characters in length")
            }
            (Rule::MaxLength(n), Locale::En) => {
                format!("{label} must be a maximum of {n} characters in length")
            }
            (Rule::EmailFormat, Locale::En) => format!("{label} must be a valid email address"),
            (Rule::Required, Locale::Zh) => format!("{label}为必填字段"),
            (Rule::MinLength(n), Locale::Zh) => format!("{label}长度必须至少为{n}个字符"),
            (Rule::MaxLength(n), Locale::Zh) => format!("{label}长度不能超过{n}个字符"),
            (Rule::EmailFormat, Locale::Zh) => format!("{label}必须是一个有效的邮箱"),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(Locale::En))
    }
}

impl std::error::Error for ValidationError {}
