// Keyword risk scoring against a fixed weighted lexicon.
//
// Matching is substring presence on lowercased text: each keyword counts at
// most once per post no matter how often it appears, and keywords are matched
// independently ("terrorist" and "terrorism" can both hit).

/// The built-in lexicon: campaign-rhetoric terms weighted 1 (mild) to 3 (severe).
pub const DEFAULT_KEYWORDS: &[(&str, u32)] = &[
    ("genocide", 3),
    ("fascist", 3),
    ("nazi", 3),
    ("apartheid", 3),
    ("terrorism", 2),
    ("terrorist", 2),
    ("propaganda", 2),
    ("warmonger", 2),
    ("occupation", 2),
    ("siege", 2),
    ("human rights violation", 2),
    ("boycott", 1),
    ("shame", 1),
    ("fail", 1),
    ("dictator", 1),
    ("oppression", 1),
];

/// An immutable keyword -> weight table. Build once per run and share.
#[derive(Debug, Clone)]
pub struct KeywordLexicon {
    entries: Vec<(String, u32)>,
}

impl Default for KeywordLexicon {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl KeywordLexicon {
    /// Build a lexicon from (keyword, weight) pairs. Keywords are lowercased.
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(keyword, weight)| (keyword.to_lowercase(), weight))
                .collect(),
        }
    }

    /// Sum of weights of every keyword present in `text`.
    pub fn score(&self, text: &str) -> u32 {
        let lower = text.to_lowercase();
        self.entries
            .iter()
            .filter(|(keyword, _)| lower.contains(keyword.as_str()))
            .map(|(_, weight)| weight)
            .sum()
    }

    /// The keywords present in `text`, in lexicon order.
    pub fn matches(&self, text: &str) -> Vec<&str> {
        let lower = text.to_lowercase();
        self.entries
            .iter()
            .filter(|(keyword, _)| lower.contains(keyword.as_str()))
            .map(|(keyword, _)| keyword.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
