use std::fmt::Write as _;

use crate::post::{site_short_name, Post};
use crate::state::StatsSummary;
use crate::view_model::format_with_commas;

/// Builds the self-contained static HTML page for the given posts.
///
/// `posts` is the full derived view (not just the visible slice); counters
/// use comma grouping and are shown only when greater than zero. Every
/// interpolated string is HTML-escaped, including URLs in attribute position.
pub fn build_static_page(
    posts: &[Post],
    stats: Option<&StatsSummary>,
    last_updated: Option<&str>,
) -> String {
    let mut cards = String::new();
    for post in posts {
        push_card(&mut cards, post);
    }

    let site_counts = stats
        .filter(|stats| !stats.by_site.is_empty())
        .map(|stats| {
            let line = stats
                .by_site
                .iter()
                .map(|(site, count)| {
                    format!(
                        "{} {}",
                        escape_html(site_short_name(site)),
                        format_with_commas(*count)
                    )
                })
                .collect::<Vec<_>>()
                .join(" · ");
            format!("            <p>{line}</p>\n")
        })
        .unwrap_or_default();

    let updated = last_updated.map(escape_html).unwrap_or_else(|| "N/A".into());

    format!(
        r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>한국 커뮤니티 핫이슈</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 0; padding: 20px; background: #f5f5f5; }}
        .container {{ max-width: 1200px; margin: 0 auto; }}
        .header {{ text-align: center; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 2rem; border-radius: 10px; margin-bottom: 2rem; }}
        .post-card {{ background: white; border-radius: 10px; padding: 1rem; margin: 1rem 0; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
        .site-badge {{ padding: 4px 8px; border-radius: 4px; color: white; font-size: 0.9em; }}
        .bobae {{ background: #e74c3c; }}
        .dcinside {{ background: #9b59b6; }}
        .ppomppu {{ background: #3498db; }}
        .fmkorea {{ background: #f39c12; }}
        .post-title a {{ text-decoration: none; color: #333; font-weight: bold; }}
        .post-title a:hover {{ color: #667eea; }}
        .post-meta {{ display: flex; justify-content: space-between; align-items: center; margin-top: 0.5rem; font-size: 0.9em; color: #666; }}
        .post-stats span {{ margin-right: 10px; }}
    </style>
</head>
<body>
    <div class="container">
        <header class="header">
            <h1>커뮤니티 핫이슈</h1>
            <p>실시간 업데이트 - 총 {count}개의 인기 게시물</p>
{site_counts}        </header>

        <div class="posts-container">
{cards}        </div>

        <footer style="text-align: center; margin-top: 2rem; color: #666;">
            <p>마지막 업데이트: {updated}</p>
        </footer>
    </div>
</body>
</html>
"#,
        count = posts.len(),
    )
}

fn push_card(out: &mut String, post: &Post) {
    let mut counters = String::new();
    for (icon, count) in [
        ("👀", post.views),
        ("❤️", post.likes),
        ("💬", post.comments),
    ] {
        if let Some(count) = count.filter(|count| *count > 0) {
            let _ = write!(
                counters,
                "<span>{icon} {}</span>",
                format_with_commas(count)
            );
        }
    }

    let _ = write!(
        out,
        r#"        <div class="post-card">
            <div class="post-title">
                <span class="site-badge {class}">{badge}</span>
                <a href="{url}" target="_blank" rel="noopener noreferrer">{title}</a>
            </div>
            <div class="post-meta">
                <span class="post-author">👤 {author}</span>
                <div class="post-stats">{counters}</div>
            </div>
        </div>
"#,
        class = escape_html(&post.site),
        badge = escape_html(site_short_name(&post.site)),
        url = escape_html(&post.url),
        title = escape_html(&post.title),
        author = escape_html(post.author.as_deref().unwrap_or("익명")),
    );
}

/// Escapes the five HTML metacharacters, making the text safe in both
/// element and attribute position.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
