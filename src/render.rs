use crate::types::GitHubRepo;

pub const NO_DESCRIPTION: &str = "No description available";

const STYLESHEET: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            max-width: 1200px;
            margin: 0 auto;
            padding: 2rem;
            background-color: #f6f8fa;
            color: #24292e;
        }
        .header {
            text-align: center;
            padding: 2rem;
            margin-bottom: 3rem;
            background-color: #24292e;
            color: white;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .repo-grid {
            display: grid;
            gap: 1.5rem;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
        }
        .repo-card {
            background-color: white;
            padding: 1.5rem;
            border-radius: 8px;
            border: 1px solid #e1e4e8;
            box-shadow: 0 2px 4px rgba(0,0,0,0.05);
            transition: transform 0.2s;
        }
        .repo-card:hover {
            transform: translateY(-2px);
        }
        .repo-name {
            color: #0366d6;
            text-decoration: none;
            font-size: 1.2rem;
            font-weight: 600;
            margin-bottom: 0.5rem;
            display: block;
        }
        .repo-name:hover {
            text-decoration: underline;
        }
        .repo-description {
            color: #586069;
            margin: 0.8rem 0;
            font-size: 0.9rem;
            line-height: 1.5;
        }
        .repo-meta {
            display: flex;
            gap: 1rem;
            color: #586069;
            font-size: 0.9rem;
            align-items: center;
        }
        .repo-language::before {
            content: '●';
            margin-right: 4px;
        }
        .repo-stars::before {
            content: '★';
            margin-right: 4px;
        }
"#;

/// Render the portfolio page for `username`.
///
/// Cards appear in the order given; callers sort beforehand. Every value
/// taken from the API is escaped before it reaches the markup.
pub fn render_portfolio(username: &str, repos: &[GitHubRepo]) -> String {
    let username = escape_html(username);

    let mut cards = String::new();
    for repo in repos {
        render_card(&mut cards, repo);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{username}'s GitHub Portfolio</title>
    <style>{STYLESHEET}    </style>
</head>
<body>
    <div class="header">
        <h1>{username}'s GitHub Portfolio</h1>
    </div>
    <div class="repo-grid">
{cards}    </div>
</body>
</html>
"#
    )
}

fn render_card(out: &mut String, repo: &GitHubRepo) {
    let url = escape_html(&repo.html_url);
    let name = escape_html(&repo.name);
    let description = escape_html(repo.display_description().unwrap_or(NO_DESCRIPTION));
    let language = repo
        .display_language()
        .map(|l| {
            format!(
                "                <span class=\"repo-language\">{}</span>\n",
                escape_html(l)
            )
        })
        .unwrap_or_default();
    let stars = format_thousands(repo.stargazers_count);

    out.push_str(&format!(
        r#"        <div class="repo-card">
            <a href="{url}" class="repo-name" target="_blank" rel="noopener noreferrer">{name}</a>
            <p class="repo-description">{description}</p>
            <div class="repo-meta">
{language}                <span class="repo-stars">{stars}</span>
            </div>
        </div>
"#
    ));
}

/// Escape text for use in element content and double- or single-quoted
/// attribute values.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `1234567` becomes `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
