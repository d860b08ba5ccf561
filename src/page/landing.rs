use std::time::{Duration, Instant};

use super::reveal::{Entrance, Reveal};

/// The three animated parts of the landing hero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HeroPart {
    Title,
    Subtitle,
    Link,
}

/// Start, duration (ms) and rise (rows) of each hero part. Each part starts
/// before the previous one has settled.
const TIMELINE: [(HeroPart, u64, u64, u16); 3] = [
    (HeroPart::Title, 200, 1200, 3),
    // 600 ms before the title ends.
    (HeroPart::Subtitle, 800, 800, 2),
    // 400 ms before the subtitle ends.
    (HeroPart::Link, 1200, 800, 1),
];

/// The landing screen: hero with a staggered entrance.
#[derive(Debug, Clone)]
pub struct LandingPage {
    parts: [(HeroPart, Reveal, u16); 3],
}

impl LandingPage {
    pub fn mount(now: Instant) -> Self {
        let parts = TIMELINE.map(|(part, start, duration, rise)| {
            let mut reveal = Reveal::new(Duration::from_millis(duration))
                .with_delay(Duration::from_millis(start));
            reveal.trigger(now);
            (part, reveal, rise)
        });
        Self { parts }
    }

    pub fn entrance(&self, part: HeroPart, now: Instant) -> Entrance {
        self.parts
            .iter()
            .find(|(p, _, _)| *p == part)
            .map(|(_, reveal, rise)| reveal.entrance(now, *rise))
            .unwrap_or(Entrance::SETTLED)
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.parts.iter().all(|(_, reveal, _)| reveal.is_done(now))
    }
}
