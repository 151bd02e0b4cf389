use super::escape;

/// Full HTML document around `body`.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/site.css">
<script src="/static/site.js" defer></script>
<noscript><style>[data-reveal]{{opacity:1;transform:none}}</style></noscript>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Site header. `signed_in` switches the auth links.
pub fn header(signed_in: bool) -> String {
    let auth = if signed_in {
        r#"<li><a href="/admin">Admin</a></li>
<li><form method="post" action="/auth/logout"><button type="submit" class="button">Sign Out</button></form></li>"#
    } else {
        r#"<li><a href="/auth" class="button">Sign In</a></li>"#
    };
    format!(
        r##"<header class="site-header">
<a href="/#home" class="brand">nova.</a>
<nav><ul>
<li><a href="/#home">Home</a></li>
<li><a href="/#portfolio">Portfolio</a></li>
<li><a href="/#about">About</a></li>
<li><a href="/#contact">Contact</a></li>
{auth}
</ul></nav>
</header>"##
    )
}
