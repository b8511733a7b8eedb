//! Fixed figures behind the vacancy analytics screen.

pub struct KeyMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
    /// Rendered in the "good news" colour.
    pub positive: bool,
}

pub struct MatchBucket {
    pub range: &'static str,
    pub candidates: u64,
}

pub struct PipelineStage {
    pub title: &'static str,
    pub count: u32,
    pub top_candidates: &'static [(&'static str, u8)],
}

pub const ANALYZED_VACANCY: &str = "Senior Frontend Developer";
pub const ANALYZED_SUBTITLE: &str = "Engineering • Posted Oct 15, 2025";

pub const KEY_METRICS: &[KeyMetric] = &[
    KeyMetric {
        label: "Total Applicants",
        value: "75",
        note: "+12 this week",
        positive: true,
    },
    KeyMetric {
        label: "Average Match %",
        value: "72%",
        note: "Above target",
        positive: true,
    },
    KeyMetric {
        label: "Days Open",
        value: "13 days",
        note: "On track",
        positive: false,
    },
];

pub const MATCH_DISTRIBUTION: &[MatchBucket] = &[
    MatchBucket {
        range: "0-30%",
        candidates: 12,
    },
    MatchBucket {
        range: "30-70%",
        candidates: 28,
    },
    MatchBucket {
        range: "70-100%",
        candidates: 35,
    },
];

/// (passed, failed) automated screening counts.
pub const SCREENING_RESULTS: (u32, u32) = (63, 12);

pub const PIPELINE: &[PipelineStage] = &[
    PipelineStage {
        title: "Screening",
        count: 15,
        top_candidates: &[("John Smith", 82), ("Sarah Johnson", 76), ("Mike Chen", 71)],
    },
    PipelineStage {
        title: "HR Review",
        count: 8,
        top_candidates: &[("Emily Davis", 88), ("Alex Rivera", 79)],
    },
    PipelineStage {
        title: "Interview",
        count: 5,
        top_candidates: &[("Chris Taylor", 91), ("Jessica Lee", 85)],
    },
    PipelineStage {
        title: "Offer",
        count: 2,
        top_candidates: &[("David Kim", 94)],
    },
];
