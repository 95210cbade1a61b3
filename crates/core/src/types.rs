//! Domain types for the generated slide deck.

use serde::{Deserialize, Serialize};

use crate::extract;
use crate::markdown::{self, Section};

/// An ordered deck of slides; the sole persisted artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Slides in source order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self { slides: Vec::new() }
    }

    /// Build a deck from presentation Markdown.
    ///
    /// One slide per `## ` section, in source order. A document without
    /// recognizable headings yields an empty deck, not an error.
    pub fn from_markdown(source: &str) -> Self {
        let source = markdown::normalize_source(source);

        let mut deck = Self::new();
        for section in markdown::split_sections(&source) {
            deck.add_slide(Slide::from_section(&section));
        }

        log::debug!("built deck with {} slides", deck.slides.len());
        deck
    }

    /// Add a slide to the deck.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// A single output slide. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// Slide title, from the section heading line.
    pub title: String,

    /// Bullet lines for the content placeholder, in extraction order.
    pub bullets: Vec<String>,

    /// Speaker notes, when the section carries a non-empty notes block.
    pub notes: Option<String>,
}

impl Slide {
    /// Build a slide from one Markdown section.
    pub fn from_section(section: &Section) -> Self {
        Self {
            title: section.title.clone(),
            bullets: extract::extract_bullets(&section.body, &section.title),
            notes: extract::extract_notes(&section.body),
        }
    }

    /// Whether this slide has speaker notes.
    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }
}
