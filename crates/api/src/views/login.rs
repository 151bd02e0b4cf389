use super::{escape, layout, notices};
use crate::controllers::Notice;

/// Sign-in form. `username` is echoed back after a failed attempt.
pub fn render(username: &str, notice: Option<&Notice>) -> String {
    let shown: Vec<&Notice> = notice.into_iter().collect();
    let body = format!(
        r#"{header}
{notices}
<main class="narrow">
<h1>Sign In</h1>
<form class="card" method="post" action="/auth" data-submit-once>
<label for="username">Username</label>
<input type="text" id="username" name="username" autocomplete="username" required value="{username}">
<label for="password">Password</label>
<input type="password" id="password" name="password" autocomplete="current-password" required>
<button type="submit" class="button" data-busy-label="Signing in...">Sign In</button>
</form>
</main>"#,
        header = layout::header(false),
        notices = notices(&shown),
        username = escape(username),
    );
    layout::page("Sign In | nova.", &body)
}
