//! Onboarding carousel: a forward-only walk over a slide deck.
//!
//! The carousel never loops. Advancing past the last slide reports
//! [`Advance::Finished`] and the shell moves on to Login.

use ratatui::style::Color;

/// One page of the onboarding deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub description: &'static str,
    /// Accent used for the slide border and glyph.
    pub accent: Color,
    pub glyph: &'static str,
}

/// The product's built-in four-slide deck.
pub fn default_deck() -> Vec<Slide> {
    vec![
        Slide {
            title: "Smarter Care. Simpler Clinics.",
            description: "Experience the next generation of patient care management designed for Silica medical practices.",
            accent: Color::Cyan,
            glyph: "\u{26a1}",
        },
        Slide {
            title: "Designed for Providers",
            description: "Every interaction is optimized with Silica's ergonomic interface to reduce visual fatigue and cognitive load.",
            accent: Color::Yellow,
            glyph: "\u{25a6}",
        },
        Slide {
            title: "Gold Standard Security",
            description: "Medical-grade security with a trust-focused interface that prioritizes patient data integrity.",
            accent: Color::Green,
            glyph: "\u{26e8}",
        },
        Slide {
            title: "Your Clinic. One Calm System.",
            description: "Ready to transform your practice? Let's get started with your clinical workspace on Silica.",
            accent: Color::LightRed,
            glyph: "\u{2665}",
        },
    ]
}

/// Result of pressing the carousel button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the slide at this index.
    Moved(usize),
    /// Already on the last slide; control goes back to the shell.
    Finished,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<Slide>,
    index: usize,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The slide on screen. `None` only for an empty deck.
    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.slides.len()
    }

    pub fn advance(&mut self) -> Advance {
        if self.index + 1 < self.slides.len() {
            self.index += 1;
            Advance::Moved(self.index)
        } else {
            Advance::Finished
        }
    }

    /// Progress dots: `true` marks the current slide.
    pub fn progress(&self) -> Vec<bool> {
        (0..self.slides.len()).map(|i| i == self.index).collect()
    }

    pub fn button_caption(&self) -> &'static str {
        if self.is_last() {
            "Begin Practice"
        } else {
            "Explore Silica"
        }
    }
}
