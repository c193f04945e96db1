//! HTML Pages
//!
//! Minimal inline shells. Forms post url-encoded fields; the JSON envelope
//! answer is meant for a script on the page.

use axum::response::Html;
use kernel::Locale;

use crate::domain::entity::auth_session::SessionUser;
use crate::domain::validation::Field;
use crate::presentation::messages;

/// Escape text for HTML element and attribute content
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn shell(locale: Locale, title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        lang = locale.code(),
        title = escape_html(title),
    ))
}

fn input(label: &str, name: &str, kind: &str) -> String {
    format!(
        "<label>{label} <input type=\"{kind}\" name=\"{name}\"></label><br>\n",
        label = escape_html(label),
    )
}

fn form(action: &str, fields: &[String], submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n{fields}<button type=\"submit\">{submit}</button>\n</form>",
        fields = fields.concat(),
        submit = escape_html(submit),
    )
}

pub fn login_page(locale: Locale) -> Html<String> {
    let title = messages::login_title(locale);
    let body = form(
        "/login",
        &[
            input(Field::UserName.label(locale), "username", "text"),
            input(Field::Password.label(locale), "password", "password"),
        ],
        title,
    );
    shell(locale, title, &body)
}

pub fn register_page(locale: Locale) -> Html<String> {
    let title = messages::register_title(locale);
    let body = form(
        "/register",
        &[
            input(Field::UserName.label(locale), "username", "text"),
            input(Field::Password.label(locale), "password", "password"),
            input(messages::confirm_password_label(locale), "confirm_password", "password"),
            input(Field::Nickname.label(locale), "nickname", "text"),
            input(Field::Email.label(locale), "email", "email"),
        ],
        title,
    );
    shell(locale, title, &body)
}

pub fn reset_password_page(locale: Locale) -> Html<String> {
    shell(locale, messages::reset_password_title(locale), "")
}

pub fn index_page(locale: Locale, user: &SessionUser) -> Html<String> {
    let body = format!(
        "<p>{greeting}, {nickname}</p>\n<p><a href=\"/logout\">{logout}</a></p>",
        greeting = escape_html(messages::greeting(locale)),
        nickname = escape_html(user.nickname.as_str()),
        logout = escape_html(messages::logout_label(locale)),
    );
    shell(locale, messages::INDEX_TITLE, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        email::Email, nickname::Nickname, user_id::UserId, user_name::UserName,
    };

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_index_page_escapes_nickname() {
        let user = SessionUser {
            id: UserId::new(1),
            username: UserName::from_db("alice"),
            nickname: Nickname::from_db("<b>A</b>"),
            email: Email::from_db("a@x.com"),
        };
        let Html(html) = index_page(Locale::En, &user);
        assert!(html.contains("<title>Index site</title>"));
        assert!(html.contains("&lt;b&gt;A&lt;/b&gt;"));
        assert!(!html.contains("<b>A</b>"));
    }

    #[test]
    fn test_register_page_fields() {
        let Html(html) = register_page(Locale::Zh);
        assert!(html.contains("<title>创建帐号</title>"));
        for name in ["username", "password", "confirm_password", "nickname", "email"] {
            assert!(html.contains(&format!("name=\"{name}\"")));
        }
        assert!(html.contains("<label>确认密码 <input type=\"password\" name=\"confirm_password\">"));
    }

    #[test]
    fn test_confirm_password_has_own_label() {
        let Html(html) = register_page(Locale::En);
        assert!(html.contains(
            "<label>Confirm password <input type=\"password\" name=\"confirm_password\">"
        ));
        assert!(html.contains("<label>Password <input type=\"password\" name=\"password\">"));
    }
}
