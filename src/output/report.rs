// Report builder: ranks posts and authors by suspicion.
//
// Both sorts are stable: posts with equal scores keep their input order, and
// users with equal totals keep their username order (the grouping order).
// The user report is cut to the top 20 after sorting.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{ScoredPost, UserAggregate};
use crate::scoring::keywords::KeywordLexicon;

/// Maximum rows in the user report.
pub const USER_REPORT_LIMIT: usize = 20;

/// Both ranked reports for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Reports {
    /// Every post, highest suspicion first.
    pub posts: Vec<ScoredPost>,
    /// Top authors by summed suspicion, at most `USER_REPORT_LIMIT` rows.
    pub users: Vec<UserAggregate>,
}

/// Build both reports from a scored batch (in input order).
pub fn build_reports(posts: Vec<ScoredPost>) -> Reports {
    let posts = rank_posts(posts);
    let users = rank_users(&posts, USER_REPORT_LIMIT);
    Reports { posts, users }
}

/// Sort posts by suspicion score, descending. Ties keep input order.
pub fn rank_posts(mut posts: Vec<ScoredPost>) -> Vec<ScoredPost> {
    posts.sort_by(|a, b| descending(a.suspicion_score, b.suspicion_score));
    posts
}

/// Sum suspicion per username and keep the `limit` highest totals.
///
/// Users are grouped in username order before the (stable) descending sort,
/// so equal totals are ordered by username.
pub fn rank_users(posts: &[ScoredPost], limit: usize) -> Vec<UserAggregate> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for post in posts {
        *totals.entry(post.username.as_str()).or_default() += post.suspicion_score;
    }

    let mut users: Vec<UserAggregate> = totals
        .into_iter()
        .map(|(username, total)| UserAggregate {
            username: username.to_string(),
            total_suspicion_score: total,
        })
        .collect();

    users.sort_by(|a, b| descending(a.total_suspicion_score, b.total_suspicion_score));
    users.truncate(limit);
    users
}

/// How many posts hit each lexicon keyword, most frequent first.
///
/// Keywords no post contains are left out. Ties keep the order in which the
/// keywords first appear in `posts`.
pub fn keyword_hits<'a>(
    posts: &[ScoredPost],
    lexicon: &'a KeywordLexicon,
) -> Vec<(&'a str, usize)> {
    let mut hits: Vec<(&'a str, usize)> = Vec::new();
    for post in posts {
        for keyword in lexicon.matches(&post.cleaned_content) {
            match hits.iter_mut().find(|(k, _)| *k == keyword) {
                Some((_, count)) => *count += 1,
                None => hits.push((keyword, 1)),
            }
        }
    }

    hits.sort_by(|a, b| b.1.cmp(&a.1));
    hits
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
