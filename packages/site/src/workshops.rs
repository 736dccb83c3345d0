//! Workshop calendar and learning series shown on the workshops page, plus
//! the per-language date, time and price formatting they need.

use crate::i18n::t;
use crate::lang::Lang;
use chrono::{Datelike, NaiveDate, NaiveTime};

/// Price of one session in a multi-session series, in dollars.
pub const SERIES_PRICE_PER_SESSION: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
}

impl Accent {
    pub fn name(self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Red => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Ai,
    Safety,
    Devices,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workshop {
    /// Key segment under `workshops.` for the title and description.
    pub slug: &'static str,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub location: &'static str,
    pub spots_left: u32,
    pub max_participants: u32,
    pub topic: Topic,
    pub accent: Accent,
}

impl Workshop {
    pub fn title_key(&self) -> String {
        format!("workshops.{}.title", self.slug)
    }

    pub fn desc_key(&self) -> String {
        format!("workshops.{}.desc", self.slug)
    }

    pub fn is_full(&self) -> bool {
        self.spots_left == 0
    }

    /// "3 spots left" / "3 places restantes", or "Full" / "Complet".
    pub fn availability(&self, lang: Lang) -> String {
        if self.is_full() {
            t(lang, "workshops.full")
        } else {
            format!("{} {}", self.spots_left, t(lang, "workshops.spots_left"))
        }
    }

    pub fn capacity(&self, lang: Lang) -> String {
        format!(
            "{} {} {}",
            t(lang, "workshops.max"),
            self.max_participants,
            t(lang, "workshops.participants")
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Series {
    pub slug: &'static str,
    pub sessions: u32,
    pub topic_count: u32,
    pub topic: Topic,
    pub accent: Accent,
}

impl Series {
    pub fn title_key(&self) -> String {
        format!("workshops.series.{}.title", self.slug)
    }

    pub fn desc_key(&self) -> String {
        format!("workshops.series.{}.desc", self.slug)
    }

    pub fn topic_keys(&self) -> Vec<String> {
        (1..=self.topic_count)
            .map(|n| format!("workshops.series.{}.topic{n}", self.slug))
            .collect()
    }

    pub fn price(&self) -> u32 {
        self.sessions * SERIES_PRICE_PER_SESSION
    }
}

#[allow(clippy::too_many_arguments)]
fn workshop(
    slug: &'static str,
    (year, month, day): (i32, u32, u32),
    start: (u32, u32),
    end: (u32, u32),
    location: &'static str,
    (spots_left, max_participants): (u32, u32),
    topic: Topic,
    accent: Accent,
) -> Option<Workshop> {
    Some(Workshop {
        slug,
        date: NaiveDate::from_ymd_opt(year, month, day)?,
        start: NaiveTime::from_hms_opt(start.0, start.1, 0)?,
        end: NaiveTime::from_hms_opt(end.0, end.1, 0)?,
        location,
        spots_left,
        max_participants,
        topic,
        accent,
    })
}

/// Upcoming single-session workshops, in date order.
pub fn upcoming() -> Vec<Workshop> {
    [
        workshop(
            "chatgpt",
            (2024, 2, 15),
            (14, 0),
            (16, 0),
            "Atwater Library",
            (6, 8),
            Topic::Ai,
            Accent::Purple,
        ),
        workshop(
            "online_safety",
            (2024, 2, 20),
            (10, 0),
            (12, 0),
            "NDG Senior Centre",
            (3, 10),
            Topic::Safety,
            Accent::Red,
        ),
        workshop(
            "smartphone",
            (2024, 2, 25),
            (13, 30),
            (15, 30),
            "Westmount Library",
            (2, 6),
            Topic::Devices,
            Accent::Blue,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn series() -> [Series; 3] {
    [
        Series {
            slug: "ai",
            sessions: 4,
            topic_count: 4,
            topic: Topic::Ai,
            accent: Accent::Purple,
        },
        Series {
            slug: "digital",
            sessions: 6,
            topic_count: 6,
            topic: Topic::Devices,
            accent: Accent::Blue,
        },
        Series {
            slug: "safety",
            sessions: 3,
            topic_count: 3,
            topic: Topic::Safety,
            accent: Accent::Green,
        },
    ]
}

/// "February 15, 2024" / "15 février 2024".
pub fn format_date(lang: Lang, date: NaiveDate) -> String {
    let month = t(lang, &format!("month.{}", date.month()));
    match lang {
        Lang::En => format!("{month} {}, {}", date.day(), date.year()),
        Lang::Fr if date.day() == 1 => format!("1er {month} {}", date.year()),
        Lang::Fr => format!("{} {month} {}", date.day(), date.year()),
    }
}

/// "2:00 PM - 4:00 PM" / "14 h 00 - 16 h 00".
pub fn format_time_range(lang: Lang, start: NaiveTime, end: NaiveTime) -> String {
    let pattern = match lang {
        Lang::En => "%-I:%M %p",
        Lang::Fr => "%H h %M",
    };
    format!("{} - {}", start.format(pattern), end.format(pattern))
}

/// "$80" / "80 $".
pub fn format_price(lang: Lang, dollars: u32) -> String {
    match lang {
        Lang::En => format!("${dollars}"),
        Lang::Fr => format!("{dollars} $"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn upcoming_lists_three_sorted_workshops() {
        let items = upcoming();
        assert_eq!(items.len(), 3);
        assert!(items.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(items.iter().all(|w| w.spots_left <= w.max_participants));
    }

    #[test]
    fn every_content_key_is_translated() {
        let catalog = Catalog::global();
        let mut keys = Vec::new();
        for w in upcoming() {
            keys.push(w.title_key());
            keys.push(w.desc_key());
        }
        for s in series() {
            keys.push(s.title_key());
            keys.push(s.desc_key());
            keys.extend(s.topic_keys());
        }
        for key in keys {
            for lang in Lang::ALL {
                assert!(catalog.contains(lang, &key), "{lang} is missing {key}");
            }
        }
    }

    #[test]
    fn series_price_is_per_session() {
        let prices: Vec<_> = series().iter().map(Series::price).collect();
        assert_eq!(prices, vec![80, 120, 60]);
    }

    #[test]
    fn availability_and_capacity() {
        let mut w = upcoming().remove(0);
        assert_eq!(w.availability(Lang::En), "6 spots left");
        assert_eq!(w.availability(Lang::Fr), "6 places restantes");
        assert_eq!(w.capacity(Lang::En), "Max 8 participants");
        w.spots_left = 0;
        assert!(w.is_full());
        assert_eq!(w.availability(Lang::Fr), "Complet");
    }

    #[test]
    fn dates_follow_language_conventions() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        assert_eq!(format_date(Lang::En, date), "February 15, 2024");
        assert_eq!(format_date(Lang::Fr, date), "15 février 2024");
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_date(Lang::Fr, first), "1er mars 2024");
    }

    #[test]
    fn times_follow_language_conventions() {
        let start = NaiveTime::from_hms_opt(13, 30, 0).unwrap();
        let end = NaiveTime::from_hms_opt(15, 30, 0).unwrap();
        assert_eq!(format_time_range(Lang::En, start, end), "1:30 PM - 3:30 PM");
        assert_eq!(format_time_range(Lang::Fr, start, end), "13 h 30 - 15 h 30");
    }

    #[test]
    fn prices_follow_language_conventions() {
        assert_eq!(format_price(Lang::En, 80), "$80");
        assert_eq!(format_price(Lang::Fr, 80), "80 $");
    }
}
