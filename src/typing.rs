// Typewriter effect for the hero heading: types a phrase, holds it, deletes
// it, then moves on to the next phrase forever.

use crate::dom_helpers;
use wasm_bindgen::prelude::*;

pub const PHRASES: [&str; 4] = [
    "Full Stack Developer & AI Enthusiast",
    "Django & JavaScript Expert",
    "Machine Learning Explorer",
    "Problem Solver & Innovator",
];

const HEADING_SELECTOR: &str = ".hero-content h2";
const CURSOR_STYLE_ID: &str = "typing-cursor-styles";
const CURSOR_CSS: &str = "
    .cursor {
        animation: blink 1s infinite;
    }
    @keyframes blink {
        0%, 50% { opacity: 1; }
        51%, 100% { opacity: 0; }
    }
";

/// One tick's output: the prefix to show and how long to wait before the
/// next tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: i32,
}

#[derive(Clone, Debug)]
pub struct TypingEffect {
    phrases: Vec<&'static str>,
    phrase_index: usize,
    char_count: usize,
    deleting: bool,
}

impl TypingEffect {
    pub const START_DELAY_MS: i32 = 1000;
    pub const TYPE_DELAY_MS: i32 = 100;
    pub const DELETE_DELAY_MS: i32 = 50;
    pub const HOLD_DELAY_MS: i32 = 2000;
    pub const NEXT_PHRASE_DELAY_MS: i32 = 500;

    pub fn new(phrases: &[&'static str]) -> Self {
        TypingEffect {
            phrases: phrases.to_vec(),
            phrase_index: 0,
            char_count: 0,
            deleting: false,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn tick(&mut self) -> TypingStep {
        let phrase = match self.phrases.get(self.phrase_index) {
            Some(phrase) => *phrase,
            None => {
                return TypingStep {
                    text: String::new(),
                    delay_ms: TypingEffect::HOLD_DELAY_MS,
                }
            }
        };
        let length = phrase.chars().count();

        if self.deleting {
            self.char_count = self.char_count.saturating_sub(1);
        } else {
            self.char_count = (self.char_count + 1).min(length);
        }
        let text: String = phrase.chars().take(self.char_count).collect();

        let delay_ms = if !self.deleting && self.char_count == length {
            self.deleting = true;
            TypingEffect::HOLD_DELAY_MS
        } else if self.deleting && self.char_count == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            TypingEffect::NEXT_PHRASE_DELAY_MS
        } else if self.deleting {
            TypingEffect::DELETE_DELAY_MS
        } else {
            TypingEffect::TYPE_DELAY_MS
        };

        TypingStep { text, delay_ms }
    }
}

pub fn init_typing_effect() -> Result<(), JsValue> {
    let document = dom_helpers::document()?;
    let heading = match document.query_selector(HEADING_SELECTOR)? {
        Some(heading) => heading,
        None => return Ok(()),
    };
    dom_helpers::inject_style_once(&document, CURSOR_STYLE_ID, CURSOR_CSS)?;

    let mut effect = TypingEffect::new(&PHRASES);
    dom_helpers::schedule_repeating(TypingEffect::START_DELAY_MS, move || {
        let step = effect.tick();
        heading.set_text_content(Some(&step.text));
        if let Ok(cursor) = document.create_element("span") {
            cursor.set_class_name("cursor");
            cursor.set_text_content(Some("|"));
            let _ = heading.append_child(&cursor);
        }
        Some(step.delay_ms)
    })
}
