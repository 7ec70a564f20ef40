use serde::Deserialize;
use thiserror::Error;

use crate::count_up::easing::Easing;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("section `{0}` has no entries")]
    EmptySection(&'static str),
    #[error("testimonial from {name} has rating {rating}, expected 1..=5")]
    RatingOutOfRange { name: String, rating: u8 },
    #[error("stat `{label}` fills {percent}%, expected 0..=100")]
    PercentOutOfRange { label: String, percent: u8 },
    #[error("stat `{label}` counts up to {target}, expected a non-negative target")]
    NegativeTarget { label: String, target: i64 },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub links: Links,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub features: Features,
    pub community: Community,
    pub resources: Resources,
    pub course: Course,
    pub testimonials: Testimonials,
    pub cta: CallToAction,
    pub footer: Footer,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub long_name: String,
    pub tagline: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Links {
    pub facebook_group: String,
    pub discord: String,
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub github: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavLink {
    pub anchor: String,
    pub label: String,
    #[serde(default)]
    pub icon: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SectionHeading {
    pub eyebrow: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub headline_top: String,
    pub headline_bottom: String,
    pub subtitle: String,
    pub stats: Vec<HeroStat>,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroStat {
    pub icon: String,
    pub label: String,
    pub value: StatValue,
}

/// A hero pill either counts up to a number or shows fixed text like `24/7`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(i64),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Features {
    pub heading: SectionHeading,
    pub items: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Community {
    pub heading: SectionHeading,
    pub channels: Vec<Channel>,
    pub stats_title: String,
    pub stats: Vec<CommunityStat>,
    pub stats_footnote: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Channel {
    pub icon: String,
    pub name: String,
    pub accent: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CommunityStat {
    pub icon: String,
    pub label: String,
    pub target: i64,
    pub percent: u8,
    pub accent: String,
    #[serde(default)]
    pub easing: Easing,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Resources {
    pub heading: SectionHeading,
    pub videos: Vec<Video>,
    pub articles: Vec<Article>,
    pub challenges: Vec<Challenge>,
    pub sessions: Vec<SharingSession>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Video {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub duration: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Article {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum Level {
    Pemula,
    Menengah,
    Lanjutan,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Pemula => "Pemula",
            Level::Menengah => "Menengah",
            Level::Lanjutan => "Lanjutan",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Level::Pemula => "level-beginner",
            Level::Menengah => "level-intermediate",
            Level::Lanjutan => "level-advanced",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Challenge {
    pub title: String,
    pub description: String,
    pub level: Level,
    pub estimate: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SharingSession {
    pub title: String,
    pub description: String,
    pub speaker: String,
    pub role: String,
    pub date: String,
    pub time: String,
    pub speaker_image: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Course {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    pub technologies: Vec<String>,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonials {
    pub heading: SectionHeading,
    pub quote: String,
    pub items: Vec<Testimonial>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub rating: u8,
    pub text: String,
}

impl Testimonial {
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CallToAction {
    pub title: String,
    pub tiles: Vec<CtaTile>,
    pub discord_label: String,
    pub facebook_label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CtaTile {
    pub value: String,
    pub label: String,
    pub note: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Footer {
    pub quick_nav_title: String,
    pub quick_nav: Vec<NavLink>,
    pub languages_title: String,
    pub languages: Vec<String>,
    pub newsletter_title: String,
    pub newsletter_blurb: String,
    pub copyright: String,
}

impl SiteContent {
    /// The copy compiled into the bundle.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        non_empty("features", &self.features.items)?;
        non_empty("community.stats", &self.community.stats)?;
        non_empty("resources.videos", &self.resources.videos)?;
        non_empty("resources.articles", &self.resources.articles)?;
        non_empty("resources.challenges", &self.resources.challenges)?;
        non_empty("resources.sessions", &self.resources.sessions)?;
        non_empty("testimonials", &self.testimonials.items)?;

        for stat in &self.hero.stats {
            if let StatValue::Count(target) = stat.value {
                check_target(&stat.label, target)?;
            }
        }
        for stat in &self.community.stats {
            check_target(&stat.label, stat.target)?;
            if stat.percent > 100 {
                return Err(ContentError::PercentOutOfRange {
                    label: stat.label.clone(),
                    percent: stat.percent,
                });
            }
        }
        for t in &self.testimonials.items {
            if !(1..=5).contains(&t.rating) {
                return Err(ContentError::RatingOutOfRange {
                    name: t.name.clone(),
                    rating: t.rating,
                });
            }
        }
        Ok(())
    }
}

fn non_empty<T>(section: &'static str, items: &[T]) -> Result<(), ContentError> {
    if items.is_empty() {
        return Err(ContentError::EmptySection(section));
    }
    Ok(())
}

fn check_target(label: &str, target: i64) -> Result<(), ContentError> {
    if target < 0 {
        return Err(ContentError::NegativeTarget {
            label: label.to_string(),
            target,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn edited(edit: impl FnOnce(&mut Value)) -> String {
        let mut value: Value = serde_json::from_str(SITE_JSON).unwrap();
        edit(&mut value);
        value.to_string()
    }

    #[test]
    fn bundled_content_loads() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.brand.name, "IMPHNEN");
        assert_eq!(content.features.items.len(), 6);
        assert_eq!(content.community.stats.len(), 4);
        assert_eq!(content.testimonials.items.len(), 3);
        assert_eq!(content.hero.stats[0].value, StatValue::Count(169_000));
        assert_eq!(content.hero.stats[2].value, StatValue::Text("24/7".to_string()));
        assert_eq!(content.resources.challenges[3].level, Level::Lanjutan);
        assert_eq!(content.nav[0].href(), "#features");
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let json = edited(|v| v["testimonials"]["items"][0]["rating"] = 6.into());
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::RatingOutOfRange { rating: 6, .. })
        ));
    }

    #[test]
    fn rejects_negative_stat_target() {
        let json = edited(|v| v["community"]["stats"][1]["target"] = (-1).into());
        let err = SiteContent::from_json(&json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "stat `Event Bulanan` counts up to -1, expected a non-negative target"
        );

        let json = edited(|v| v["hero"]["stats"][0]["value"] = (-5).into());
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::NegativeTarget { target: -5, .. })
        ));
    }

    #[test]
    fn rejects_overfull_progress_bar() {
        let json = edited(|v| v["community"]["stats"][0]["percent"] = 101.into());
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::PercentOutOfRange { percent: 101, .. })
        ));
    }

    #[test]
    fn rejects_empty_tab() {
        let json = edited(|v| v["resources"]["sessions"] = Value::Array(vec![]));
        assert!(matches!(
            SiteContent::from_json(&json),
            Err(ContentError::EmptySection("resources.sessions"))
        ));
    }

    #[test]
    fn stat_easing_defaults_to_linear() {
        let content = SiteContent::load().unwrap();
        assert!(content.community.stats.iter().all(|s| s.easing == Easing::Linear));

        let json = edited(|v| v["community"]["stats"][2]["easing"] = "ease-out-cubic".into());
        let content = SiteContent::from_json(&json).unwrap();
        assert_eq!(content.community.stats[2].easing, Easing::EaseOutCubic);

        let json = edited(|v| v["community"]["stats"][2]["easing"] = "bounce".into());
        assert!(matches!(SiteContent::from_json(&json), Err(ContentError::Parse(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn testimonial_initial_handles_empty_names() {
        let mut t = SiteContent::load().unwrap().testimonials.items[0].clone();
        assert_eq!(t.initial(), "U");
        t.name.clear();
        assert_eq!(t.initial(), "");
    }
}
