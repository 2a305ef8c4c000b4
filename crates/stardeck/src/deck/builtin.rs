//! The compiled-in pitch deck: one slide of every kind, in presentation order.

use super::*;

fn s(text: &str) -> String {
    text.to_string()
}

pub fn deck() -> Deck {
    Deck {
        title: s("CasTo Cosmic Distributor"),
        slides: vec![
            SlideRecord {
                id: s("cover"),
                title: s("CasTo Cosmic Distributor \u{26A1}"),
                subtitle: Some(s("World-Class Digital Creator & AI Gaming Visionary")),
                content: SlideContent::Cover(CoverContent {
                    tags: vec![s("#Viral"), s("#Gaming"), s("#AI")],
                }),
            },
            SlideRecord {
                id: s("problem"),
                title: s("The Editing Black Hole"),
                subtitle: None,
                content: SlideContent::Problem(ProblemContent {
                    bullets: vec![
                        s("Hours wasted cutting dead air"),
                        s("Complex software learning curve"),
                        s("Missed viral trends due to delay"),
                        s("Inconsistent subtitle quality"),
                    ],
                }),
            },
            SlideRecord {
                id: s("solution"),
                title: s("Warp Speed Virality"),
                subtitle: None,
                content: SlideContent::Solution(SolutionContent {
                    features: vec![
                        Feature {
                            title: s("Auto-Trim"),
                            desc: s("AI detects highlights"),
                        },
                        Feature {
                            title: s("Instant VFX"),
                            desc: s("Cosmic particle effects"),
                        },
                        Feature {
                            title: s("Smart Captions"),
                            desc: s("Automated kinetic text"),
                        },
                    ],
                }),
            },
            SlideRecord {
                id: s("demo"),
                title: s("CasTo AI In Action"),
                subtitle: Some(s("Live AI-Powered Hook Generator")),
                content: SlideContent::Demo(DemoContent {
                    placeholder: s("Upload raw footage -> AI Magic -> Viral Clip"),
                }),
            },
            SlideRecord {
                id: s("market"),
                title: s("A Universe of Creators"),
                subtitle: None,
                content: SlideContent::Market(MarketContent {
                    stats: vec![
                        Stat {
                            label: s("TikTok Users"),
                            value: s("1B+"),
                        },
                        Stat {
                            label: s("Gaming Creators"),
                            value: s("50M+"),
                        },
                        Stat {
                            label: s("Daily Uploads"),
                            value: s("34M"),
                        },
                    ],
                    chart: vec![
                        ChartPoint {
                            label: s("2022"),
                            value: 20.0,
                        },
                        ChartPoint {
                            label: s("2023"),
                            value: 45.0,
                        },
                        ChartPoint {
                            label: s("2024"),
                            value: 75.0,
                        },
                        ChartPoint {
                            label: s("2025"),
                            value: 120.0,
                        },
                    ],
                }),
            },
            SlideRecord {
                id: s("business"),
                title: s("Monetization Orbit"),
                subtitle: None,
                content: SlideContent::Business(BusinessContent {
                    tiers: vec![
                        Tier {
                            name: s("Creator"),
                            price: s("$9/mo"),
                            features: vec![s("100 Mins/mo"), s("720p Export"), s("Basic VFX")],
                            highlight: false,
                        },
                        Tier {
                            name: s("Pro"),
                            price: s("$29/mo"),
                            features: vec![
                                s("Unlimited Mins"),
                                s("4K Export"),
                                s("Custom Branding"),
                            ],
                            highlight: true,
                        },
                        Tier {
                            name: s("Enterprise"),
                            price: s("Custom"),
                            features: vec![
                                s("API Access"),
                                s("Dedicated Support"),
                                s("White Label"),
                            ],
                            highlight: false,
                        },
                    ],
                }),
            },
            SlideRecord {
                id: s("tech"),
                title: s("Powered by Generative AI"),
                subtitle: None,
                content: SlideContent::TechStack(TechStackContent {
                    stack: vec![
                        s("Input Stream"),
                        s("Multimodal AI"),
                        s("FFmpeg Processing"),
                        s("TikTok API"),
                    ],
                }),
            },
            SlideRecord {
                id: s("competition"),
                title: s("Lightyears Ahead"),
                subtitle: None,
                content: SlideContent::Competition(CompetitionContent {
                    competitors: vec![
                        Competitor {
                            name: s("Manual Editing"),
                            speed: s("Slow"),
                            quality: s("High"),
                            effort: s("High"),
                            highlight: false,
                        },
                        Competitor {
                            name: s("Generic AI"),
                            speed: s("Fast"),
                            quality: s("Low"),
                            effort: s("Low"),
                            highlight: false,
                        },
                        Competitor {
                            name: s("CasTo AI"),
                            speed: s("Instant"),
                            quality: s("Viral"),
                            effort: s("Zero"),
                            highlight: true,
                        },
                    ],
                }),
            },
            SlideRecord {
                id: s("traction"),
                title: s("Why CasTo?"),
                subtitle: None,
                content: SlideContent::Traction(TractionContent {
                    testimonials: vec![
                        s("Cosmic Digital Branding \u{2014} uniquely blends creativity, \
                           strategy, and AI innovation."),
                        s("Viral-First Approach \u{2014} turning TikTok trends and gaming \
                           content into market-leading sensations."),
                        s("Trusted & Influential \u{2014} recognized across social, gaming, \
                           and AI creator communities."),
                    ],
                }),
            },
            SlideRecord {
                id: s("funding"),
                title: s("Fuel Our Rocket"),
                subtitle: None,
                content: SlideContent::Funding(FundingContent {
                    amount: s("$1.5M"),
                    allocation: vec![
                        Allocation {
                            label: s("Engineering"),
                            percentage: 50.0,
                        },
                        Allocation {
                            label: s("Marketing"),
                            percentage: 30.0,
                        },
                        Allocation {
                            label: s("Ops"),
                            percentage: 20.0,
                        },
                    ],
                }),
            },
            SlideRecord {
                id: s("roadmap"),
                title: s("The Galaxy Map"),
                subtitle: None,
                content: SlideContent::Roadmap(RoadmapContent {
                    milestones: vec![
                        Milestone {
                            quarter: s("Q1 2024"),
                            goal: s("Mobile App Launch"),
                        },
                        Milestone {
                            quarter: s("Q2 2024"),
                            goal: s("1M Users"),
                        },
                        Milestone {
                            quarter: s("Q3 2024"),
                            goal: s("Enterprise API"),
                        },
                        Milestone {
                            quarter: s("Q4 2024"),
                            goal: s("CasTo Live Studio"),
                        },
                    ],
                }),
            },
            SlideRecord {
                id: s("team"),
                title: s("Mission Control"),
                subtitle: None,
                content: SlideContent::Team(TeamContent {
                    name: s("CasTo"),
                    role: s("World-Class Digital Creator & AI Gaming Visionary"),
                    bio: s("Creator & AI Gaming Specialist \u{2014} TikTok innovator, Clash \
                           Royale strategist, turning gameplay into viral content with \
                           AI-powered precision.\n\nMarketing & Sales Maestro \u{2014} driving \
                           engagement, community growth, and digital brand domination across \
                           multiple platforms.\n\nAI & Semiotics Expert \u{2014} crafting \
                           cosmic-level content, decoding social signals, and transforming \
                           ordinary interactions into viral experiences.\n\nProven Reach & \
                           Authority \u{2014} over 586K hours of live streaming, 20K+ active \
                           Discord community members, and a growing global creator network."),
                    photo: None,
                }),
            },
            SlideRecord {
                id: s("cta"),
                title: s("Join the Revolution"),
                subtitle: None,
                content: SlideContent::CallToAction(CtaContent {
                    text: s("Connect with CasTo"),
                    email: s("Ecastoo@icloud.com"),
                    phone: Some(s("+20 102 213 4445")),
                }),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_deck_is_valid() {
        let deck = deck();
        deck.validate().expect("builtin deck must pass validation");
        assert_eq!(deck.len(), 13);
    }

    #[test]
    fn test_builtin_deck_covers_every_kind() {
        let deck = deck();
        let tags: Vec<&str> = deck.slides.iter().map(|sl| sl.content.kind_tag()).collect();
        for expected in [
            "COVER",
            "PROBLEM",
            "SOLUTION",
            "DEMO",
            "MARKET",
            "BUSINESS",
            "TECH_STACK",
            "COMPETITION",
            "TRACTION",
            "FUNDING",
            "ROADMAP",
            "TEAM",
            "CTA",
        ] {
            assert!(tags.contains(&expected), "missing slide kind {expected}");
        }
    }

    #[test]
    fn test_builtin_deck_round_trips_through_json() {
        let deck = deck();
        let json = serde_json::to_string_pretty(&deck).unwrap();
        let back = Deck::from_json_str(&json).unwrap();
        assert_eq!(deck, back);
    }
}
