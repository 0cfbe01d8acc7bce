// Engagement anomaly detection.
//
// Amplification campaigns push reposts without generating conversation, so a
// post reposted far more than it is replied to is suspicious. The +1 in the
// denominator avoids division by zero and dampens low-comment noise; the
// repost floor keeps a single repost on a zero-comment post from tripping it.

/// Ratio above which engagement counts as anomalous.
pub const RATIO_THRESHOLD: f64 = 20.0;
/// Reposts must exceed this for the ratio to matter.
pub const MIN_REPOSTS: i64 = 10;

/// Engagement signal for one post.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngagementSignal {
    pub repost_to_comment_ratio: f64,
    pub is_suspicious: bool,
}

/// `reposts / (comments + 1)`.
pub fn repost_to_comment_ratio(comments: i64, reposts: i64) -> f64 {
    reposts as f64 / (comments as f64 + 1.0)
}

/// Both conditions are required: ratio above 20 and more than 10 reposts.
pub fn is_suspicious_engagement(ratio: f64, reposts: i64) -> bool {
    ratio > RATIO_THRESHOLD && reposts > MIN_REPOSTS
}

/// Compute the ratio and the anomaly flag together.
pub fn assess_engagement(comments: i64, reposts: i64) -> EngagementSignal {
    let ratio = repost_to_comment_ratio(comments, reposts);
    EngagementSignal {
        repost_to_comment_ratio: ratio,
        is_suspicious: is_suspicious_engagement(ratio, reposts),
    }
}
