//! Localized success messages and page titles

use kernel::Locale;

pub fn login_success(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Login successful",
        Locale::Zh => "登录成功~(￣▽￣)／",
    }
}

pub fn register_success(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Registration successful",
        Locale::Zh => "注册成功",
    }
}

pub fn invalid_form(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Invalid form submission",
        Locale::Zh => "表单数据无效",
    }
}

pub fn login_title(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Login",
        Locale::Zh => "登录",
    }
}

pub fn register_title(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Create account",
        Locale::Zh => "创建帐号",
    }
}

pub fn reset_password_title(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Reset password",
        Locale::Zh => "找回密码页",
    }
}

/// Same in every locale
pub const INDEX_TITLE: &str = "Index site";

pub fn greeting(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Welcome back",
        Locale::Zh => "欢迎回来",
    }
}

pub fn logout_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Log out",
        Locale::Zh => "退出登录",
    }
}

pub fn confirm_password_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Confirm password",
        Locale::Zh => "确认密码",
    }
}
