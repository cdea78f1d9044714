//! Static lookup tables for synthetic content and keyword surfacing.
//!
//! Topics are matched on their normalized form (trimmed, lowercase). Every
//! table has a `default` entry used when the topic is not recognized.

use trendscope_core::{Sentiment, Source};

/// Candidate bodies for one topic, grouped by sentiment.
struct ContentPools {
    topic: &'static str,
    positive: &'static [&'static str],
    neutral: &'static [&'static str],
    negative: &'static [&'static str],
}

impl ContentPools {
    fn for_sentiment(&self, sentiment: Sentiment) -> &'static [&'static str] {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

const CONTENT_POOLS: &[ContentPools] = &[
    ContentPools {
        topic: "apple vision pro",
        positive: &[
            "The Apple Vision Pro is absolutely groundbreaking! The spatial computing experience feels like the future of technology.",
            "I'm blown away by the display quality and immersive experience of the Vision Pro. Worth every penny.",
            "Apple has outdone themselves with the Vision Pro. The eye and hand tracking is incredibly intuitive.",
        ],
        neutral: &[
            "The Apple Vision Pro has impressive features but the price point may limit mass adoption.",
            "While the technology is advanced, it remains to be seen if it will replace existing devices.",
            "The Vision Pro introduces interesting concepts, though it's still a first-generation product with expected limitations.",
        ],
        negative: &[
            "The Apple Vision Pro is ridiculously overpriced for what it offers. Classic Apple tax at work.",
            "The battery life and comfort issues make the Vision Pro impractical for extended use.",
            "I'm disappointed by the limited app ecosystem and the restrictive Apple environment.",
        ],
    },
    ContentPools {
        topic: "climate change",
        positive: &[
            "The recent advances in renewable energy technology are giving us real hope in the fight against climate change.",
            "It's inspiring to see countries coming together to address climate change with actionable policies.",
            "The shift towards sustainable practices in major corporations shows real progress in our climate goals.",
        ],
        neutral: &[
            "Climate data shows mixed progress - some regions improving while others face increased challenges.",
            "The economic implications of climate policy need to be balanced with environmental goals.",
            "New technologies offer potential solutions, but implementation timelines remain uncertain.",
        ],
        negative: &[
            "Despite all the talk, major polluters continue to avoid meaningful action on climate change.",
            "The current policies are far too weak to address the severity of the climate crisis.",
            "Corporate greenwashing is distracting from the lack of substantive climate progress.",
        ],
    },
    ContentPools {
        topic: "ai ethics",
        positive: &[
            "The new AI transparency frameworks are a major step forward for ethical AI development.",
            "Companies implementing responsible AI practices are seeing better outcomes and user trust.",
            "The multidisciplinary approach to AI ethics is creating more fair and accountable systems.",
        ],
        neutral: &[
            "Current AI regulations provide a framework, but questions remain about enforcement and effectiveness.",
            "The balance between innovation and ethical constraints continues to be debated among experts.",
            "Different cultural perspectives on AI ethics create challenges for global standards.",
        ],
        negative: &[
            "The current AI oversight is completely inadequate to prevent serious ethical violations.",
            "Major tech companies are ignoring ethical considerations in their race to deploy AI systems.",
            "Algorithmic bias continues to cause real harm while meaningful regulation lags behind.",
        ],
    },
];

const DEFAULT_CONTENT: ContentPools = ContentPools {
    topic: "default",
    positive: &[
        "This is revolutionary and could change everything in the industry!",
        "I'm extremely impressed with the innovation and thoughtfulness behind this.",
        "The potential applications are endless and very exciting.",
    ],
    neutral: &[
        "This has both advantages and disadvantages that need to be considered.",
        "The data shows mixed results that require further analysis.",
        "It's an interesting development, though not necessarily groundbreaking.",
    ],
    negative: &[
        "This is a major disappointment that fails to deliver on its promises.",
        "The negative implications far outweigh any potential benefits.",
        "I'm concerned about the serious problems this creates.",
    ],
};

const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "apple vision pro",
        &["AR/VR", "Spatial Computing", "Apple", "headset", "immersive"],
    ),
    (
        "climate change",
        &[
            "global warming",
            "sustainability",
            "renewable energy",
            "carbon emissions",
            "policy",
        ],
    ),
    (
        "ai ethics",
        &["bias", "regulation", "transparency", "accountability", "privacy"],
    ),
];

const DEFAULT_KEYWORDS: &[&str] = &["trending", "popular", "viral", "discussion", "technology"];

const POSITIVE_PREFIXES: &[&str] = &[
    "Impressive: ",
    "Game-Changing: ",
    "Revolutionary: ",
    "Must See: ",
    "Amazing: ",
];

const NEUTRAL_PREFIXES: &[&str] = &[
    "Analyzing: ",
    "Exploring: ",
    "Deep Dive: ",
    "Understanding: ",
    "The Truth About: ",
];

const NEGATIVE_PREFIXES: &[&str] = &[
    "Disappointing: ",
    "Overrated: ",
    "The Problem With: ",
    "Why I'm Skeptical About: ",
    "Concerns About: ",
];

const YOUTUBE_AUTHORS: &[&str] = &[
    "TechReviewer",
    "DigitalInsights",
    "FutureTech",
    "TrendWatcher",
    "InnovationHub",
];

const REDDIT_AUTHORS: &[&str] = &[
    "u/techgeek",
    "u/future_visionary",
    "u/digital_nomad",
    "u/trendspotter",
    "u/innovation_seeker",
];

const TWITTER_AUTHORS: &[&str] = &[
    "@TechTrends",
    "@FutureInsight",
    "@DigitalPulse",
    "@TrendRadar",
    "@InnovateDaily",
];

/// Number of title templates available per platform.
pub(crate) const TITLE_TEMPLATE_COUNT: usize = 3;

/// Lookup key for a user-entered topic.
#[must_use]
pub fn normalize_topic(topic: &str) -> String {
    topic.trim().to_lowercase()
}

/// Keywords surfaced for a topic. Not derived from item content.
#[must_use]
pub fn top_keywords(topic: &str) -> &'static [&'static str] {
    let key = normalize_topic(topic);
    TOPIC_KEYWORDS
        .iter()
        .find(|(topic, _)| *topic == key)
        .map_or(DEFAULT_KEYWORDS, |(_, keywords)| *keywords)
}

/// Content pool for an already-normalized topic key.
pub(crate) fn content_pool(topic_key: &str, sentiment: Sentiment) -> &'static [&'static str] {
    CONTENT_POOLS
        .iter()
        .find(|pools| pools.topic == topic_key)
        .unwrap_or(&DEFAULT_CONTENT)
        .for_sentiment(sentiment)
}

pub(crate) fn title_prefixes(sentiment: Sentiment) -> &'static [&'static str] {
    match sentiment {
        Sentiment::Positive => POSITIVE_PREFIXES,
        Sentiment::Neutral => NEUTRAL_PREFIXES,
        Sentiment::Negative => NEGATIVE_PREFIXES,
    }
}

pub(crate) fn authors(source: Source) -> &'static [&'static str] {
    match source {
        Source::Youtube => YOUTUBE_AUTHORS,
        Source::Reddit => REDDIT_AUTHORS,
        Source::Twitter => TWITTER_AUTHORS,
    }
}

/// Render one of the per-platform title templates.
///
/// `prefix` is only used by the first YouTube template.
pub(crate) fn render_title(source: Source, template: usize, topic: &str, prefix: &str) -> String {
    match (source, template % TITLE_TEMPLATE_COUNT) {
        (Source::Youtube, 0) => format!("{prefix}{topic} - Full Review"),
        (Source::Youtube, 1) => format!("{topic} Explained | What You Need To Know"),
        (Source::Youtube, _) => {
            format!("The REAL Truth About {topic} That No One Is Talking About")
        }
        (Source::Reddit, 0) => format!("[Discussion] My thoughts on {topic} after extensive research"),
        (Source::Reddit, 1) => format!("Can we talk about {topic}? My personal experience"),
        (Source::Reddit, _) => format!("{topic}: An in-depth analysis and discussion"),
        (Source::Twitter, 0) => format!("{topic} - Thread: Here's what you should know \u{1f9f5}"),
        (Source::Twitter, 1) => {
            format!("I've been researching {topic} for months. Here's my take.")
        }
        (Source::Twitter, _) => format!("{topic} is changing everything. Let me explain why."),
    }
}

/// Whether a template consumes a sentiment prefix.
pub(crate) fn template_uses_prefix(source: Source, template: usize) -> bool {
    source == Source::Youtube && template % TITLE_TEMPLATE_COUNT == 0
}
