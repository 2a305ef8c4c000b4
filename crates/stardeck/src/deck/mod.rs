pub mod builtin;
pub mod nav;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A full presentation: an ordered, non-empty sequence of typed slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    pub slides: Vec<SlideRecord>,
}

impl Deck {
    /// The compiled-in pitch deck.
    pub fn builtin() -> Self {
        builtin::deck()
    }

    /// Load a deck from a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let deck = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid deck file {}", path.display()))?;
        Ok(deck)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let deck: Deck = serde_json::from_str(json)?;
        deck.validate()?;
        Ok(deck)
    }

    /// Catalog invariants: at least one slide, ids unique.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            anyhow::bail!("Deck contains no slides");
        }
        let mut seen = HashSet::new();
        for slide in &self.slides {
            if !seen.insert(slide.id.as_str()) {
                anyhow::bail!("Duplicate slide id: {}", slide.id);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// One slide: identity, display strings, and a content payload whose shape
/// is fixed by its kind tag.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideRecord {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub content: SlideContent,
}

/// Tagged union over slide payloads. Each kind carries its own shape; a deck
/// file with a tag we don't know lands in `Unknown` and renders as a
/// placeholder instead of failing the whole deck.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideContent {
    Cover(CoverContent),
    Problem(ProblemContent),
    Solution(SolutionContent),
    Demo(DemoContent),
    Market(MarketContent),
    Business(BusinessContent),
    TechStack(TechStackContent),
    Competition(CompetitionContent),
    Traction(TractionContent),
    Funding(FundingContent),
    Roadmap(RoadmapContent),
    Team(TeamContent),
    CallToAction(CtaContent),
    Unknown { kind: String, raw: Value },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoverContent {
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProblemContent {
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SolutionContent {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DemoContent {
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketContent {
    pub stats: Vec<Stat>,
    pub chart: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessContent {
    pub tiers: Vec<Tier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TechStackContent {
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompetitionContent {
    pub competitors: Vec<Competitor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub speed: String,
    pub quality: String,
    pub effort: String,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TractionContent {
    pub testimonials: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FundingContent {
    pub amount: String,
    pub allocation: Vec<Allocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub label: String,
    pub percentage: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoadmapContent {
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub quarter: String,
    pub goal: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamContent {
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CtaContent {
    pub text: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl SlideContent {
    /// Serialized `type` tag for this payload.
    pub fn kind_tag(&self) -> &str {
        match self {
            Self::Cover(_) => "COVER",
            Self::Problem(_) => "PROBLEM",
            Self::Solution(_) => "SOLUTION",
            Self::Demo(_) => "DEMO",
            Self::Market(_) => "MARKET",
            Self::Business(_) => "BUSINESS",
            Self::TechStack(_) => "TECH_STACK",
            Self::Competition(_) => "COMPETITION",
            Self::Traction(_) => "TRACTION",
            Self::Funding(_) => "FUNDING",
            Self::Roadmap(_) => "ROADMAP",
            Self::Team(_) => "TEAM",
            Self::CallToAction(_) => "CTA",
            Self::Unknown { kind, .. } => kind,
        }
    }

    fn from_parts(kind: String, raw: Value) -> serde_json::Result<Self> {
        Ok(match kind.as_str() {
            "COVER" => Self::Cover(serde_json::from_value(raw)?),
            "PROBLEM" => Self::Problem(serde_json::from_value(raw)?),
            "SOLUTION" => Self::Solution(serde_json::from_value(raw)?),
            "DEMO" => Self::Demo(serde_json::from_value(raw)?),
            "MARKET" => Self::Market(serde_json::from_value(raw)?),
            "BUSINESS" => Self::Business(serde_json::from_value(raw)?),
            "TECH_STACK" => Self::TechStack(serde_json::from_value(raw)?),
            "COMPETITION" => Self::Competition(serde_json::from_value(raw)?),
            "TRACTION" => Self::Traction(serde_json::from_value(raw)?),
            "FUNDING" => Self::Funding(serde_json::from_value(raw)?),
            "ROADMAP" => Self::Roadmap(serde_json::from_value(raw)?),
            "TEAM" => Self::Team(serde_json::from_value(raw)?),
            "CTA" => Self::CallToAction(serde_json::from_value(raw)?),
            _ => Self::Unknown { kind, raw },
        })
    }

    fn to_value(&self) -> serde_json::Result<Value> {
        match self {
            Self::Cover(c) => serde_json::to_value(c),
            Self::Problem(c) => serde_json::to_value(c),
            Self::Solution(c) => serde_json::to_value(c),
            Self::Demo(c) => serde_json::to_value(c),
            Self::Market(c) => serde_json::to_value(c),
            Self::Business(c) => serde_json::to_value(c),
            Self::TechStack(c) => serde_json::to_value(c),
            Self::Competition(c) => serde_json::to_value(c),
            Self::Traction(c) => serde_json::to_value(c),
            Self::Funding(c) => serde_json::to_value(c),
            Self::Roadmap(c) => serde_json::to_value(c),
            Self::Team(c) => serde_json::to_value(c),
            Self::CallToAction(c) => serde_json::to_value(c),
            Self::Unknown { raw, .. } => Ok(raw.clone()),
        }
    }
}

/// Wire form of a slide: the `type` tag and the payload travel as siblings of
/// `id`/`title`/`subtitle`, matching the exported `slide_data.json` layout.
#[derive(Serialize, Deserialize)]
struct RawSlide {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    content: Value,
}

impl Serialize for SlideRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawSlide {
            id: self.id.clone(),
            kind: self.content.kind_tag().to_string(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            content: self.content.to_value().map_err(S::Error::custom)?,
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SlideRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSlide::deserialize(deserializer)?;
        let content = SlideContent::from_parts(raw.kind, raw.content).map_err(|e| {
            D::Error::custom(format!("slide {}: invalid content payload: {e}", raw.id))
        })?;
        Ok(SlideRecord {
            id: raw.id,
            title: raw.title,
            subtitle: raw.subtitle,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cover_slide(id: &str) -> SlideRecord {
        SlideRecord {
            id: id.to_string(),
            title: "Title".to_string(),
            subtitle: None,
            content: SlideContent::Cover(CoverContent {
                tags: vec!["#One".to_string()],
            }),
        }
    }

    #[test]
    fn test_empty_deck_rejected() {
        let deck = Deck {
            title: "Empty".to_string(),
            slides: vec![],
        };
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let deck = Deck {
            title: "Dup".to_string(),
            slides: vec![cover_slide("a"), cover_slide("a")],
        };
        let err = deck.validate().unwrap_err().to_string();
        assert!(err.contains("Duplicate slide id"), "unexpected error: {err}");
    }

    #[test]
    fn test_slide_round_trip() {
        let slide = SlideRecord {
            id: "funding".to_string(),
            title: "Fuel Our Rocket".to_string(),
            subtitle: Some("Seed round".to_string()),
            content: SlideContent::Funding(FundingContent {
                amount: "$1.5M".to_string(),
                allocation: vec![
                    Allocation {
                        label: "Engineering".to_string(),
                        percentage: 50.0,
                    },
                    Allocation {
                        label: "Marketing".to_string(),
                        percentage: 30.0,
                    },
                ],
            }),
        };
        let json = serde_json::to_string(&slide).unwrap();
        let back: SlideRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(slide, back);
    }

    #[test]
    fn test_type_tag_in_wire_form() {
        let json = serde_json::to_value(cover_slide("cover")).unwrap();
        assert_eq!(json["type"], "COVER");
        assert!(json["content"]["tags"].is_array());
        // Absent subtitle is omitted, not serialized as null
        assert!(json.get("subtitle").is_none());
    }

    #[test]
    fn test_unknown_type_preserved() {
        let json = r#"{
            "id": "mystery",
            "type": "HOLOGRAM",
            "title": "From the Future",
            "content": { "beams": [1, 2, 3] }
        }"#;
        let slide: SlideRecord = serde_json::from_str(json).unwrap();
        match &slide.content {
            SlideContent::Unknown { kind, raw } => {
                assert_eq!(kind, "HOLOGRAM");
                assert_eq!(raw["beams"][2], 3);
            }
            other => panic!("expected Unknown, got {other:?}"),
        }
        // Round-trips back to the original tag and payload
        let back = serde_json::to_value(&slide).unwrap();
        assert_eq!(back["type"], "HOLOGRAM");
        assert_eq!(back["content"]["beams"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_sample_deck_parses() {
        let json = include_str!("../../../../sample-decks/minimal.json");
        let deck = Deck::from_json_str(json).unwrap();
        assert_eq!(deck.title, "Nebula Coffee");
        assert_eq!(deck.len(), 5);
        assert!(matches!(deck.slides[0].content, SlideContent::Cover(_)));
        assert!(
            matches!(&deck.slides[3].content, SlideContent::Unknown { kind, .. } if kind == "HOLOGRAM"),
            "unrecognized kinds must survive as Unknown"
        );
    }

    #[test]
    fn test_known_type_bad_payload_is_error() {
        let json = r#"{
            "id": "market",
            "type": "MARKET",
            "title": "Bad",
            "content": { "stats": "not-a-list" }
        }"#;
        assert!(serde_json::from_str::<SlideRecord>(json).is_err());
    }
}
