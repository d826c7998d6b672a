use chrono::{Datelike, NaiveDate};

use quill_core::{Article, Error, Result};

/// A parsed permalink scheme such as `{year}/{month}/{day}/{title}`.
/// Tokens expand from the article's publication date and slug; anything
/// outside braces is kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct PermalinkTemplate {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Year,
    Month,
    Day,
    Title,
}

impl PermalinkTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| Error::Permalink(format!("Unclosed token in '{}'", template)))?;
            let token = &after[..close];
            segments.push(match token {
                "year" => Segment::Year,
                "month" => Segment::Month,
                "day" => Segment::Day,
                "title" => Segment::Title,
                other => {
                    return Err(Error::Permalink(format!("Unknown token '{{{}}}'", other)));
                }
            });
            rest = &after[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Expand the template for one article, e.g.
    /// `2013/05/01/some-title`.
    pub fn expand(&self, article: &Article) -> String {
        let date = article.published_at.date_naive();
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Year => out.push_str(&format!("{:04}", date.year())),
                Segment::Month => out.push_str(&format!("{:02}", date.month())),
                Segment::Day => out.push_str(&format!("{:02}", date.day())),
                Segment::Title => out.push_str(&article.slug),
            }
        }
        out
    }

    /// The article's published route under the blog prefix, with the
    /// trailing slash directory indexes expect.
    pub fn route(&self, prefix: &str, article: &Article) -> String {
        let prefix = prefix.trim_matches('/');
        if prefix.is_empty() {
            format!("/{}/", self.expand(article))
        } else {
            format!("/{}/{}/", prefix, self.expand(article))
        }
    }
}

/// Parse a blog source filename of the `{year}-{month}-{day}-{title}`
/// scheme (an optional directory part and extension are ignored) into
/// the publication date and slug.
pub fn parse_source_filename(name: &str) -> Result<(NaiveDate, String)> {
    let base = name.rsplit('/').next().unwrap_or(name);
    let stem = base.split('.').next().unwrap_or(base);

    let mut parts = stem.splitn(4, '-');
    let (year, month, day, title) = match (parts.next(), parts.next(), parts.next(), parts.next())
    {
        (Some(y), Some(m), Some(d), Some(t)) if !t.is_empty() => (y, m, d, t),
        _ => {
            return Err(Error::Permalink(format!(
                "Source name '{}' does not match {{year}}-{{month}}-{{day}}-{{title}}",
                name
            )));
        }
    };

    let parse_num = |s: &str| {
        s.parse::<u32>()
            .map_err(|_| Error::Permalink(format!("Invalid date component '{}' in '{}'", s, name)))
    };
    let (year, month, day) = (parse_num(year)? as i32, parse_num(month)?, parse_num(day)?);

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::Permalink(format!("Invalid date in '{}'", name)))?;

    Ok((date, title.to_string()))
}
