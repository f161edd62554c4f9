use std::cell::Cell;
use std::rc::Rc;

use fltk::{app, enums::Align, frame::Frame, prelude::*};

pub const STATUS_BAR_HEIGHT: i32 = 22;
pub const STATUS_TIMEOUT_SECS: f64 = 2.0;

/// Counts transient messages so an expiring timer only clears its own text.
#[derive(Debug, Clone, Default)]
pub struct MessageGeneration {
    current: Rc<Cell<u64>>,
}

impl MessageGeneration {
    pub fn advance(&self) -> u64 {
        let next = self.current.get() + 1;
        self.current.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current.get() == ticket
    }
}

#[derive(Clone)]
pub struct StatusBar {
    frame: Frame,
    generation: MessageGeneration,
}

impl StatusBar {
    pub fn new() -> Self {
        let mut frame = Frame::default();
        frame.set_frame(fltk::enums::FrameType::ThinDownBox);
        frame.set_align(Align::Left | Align::Inside);
        frame.set_label_size(12);
        Self {
            frame,
            generation: MessageGeneration::default(),
        }
    }

    pub fn widget(&self) -> &Frame {
        &self.frame
    }

    /// Text that stays until replaced.
    pub fn set_text(&mut self, text: &str) {
        self.generation.advance();
        self.frame.set_label(text);
        self.frame.redraw();
    }

    /// Text cleared after `timeout` seconds unless a newer message replaced it.
    pub fn show_message(&mut self, text: &str, timeout: f64) {
        let ticket = self.generation.advance();
        self.frame.set_label(text);
        self.frame.redraw();

        let mut frame = self.frame.clone();
        let generation = self.generation.clone();
        app::add_timeout3(timeout, move |_| {
            if generation.is_current(ticket) {
                frame.set_label("");
                frame.redraw();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_message_is_current() {
        let generation = MessageGeneration::default();
        let first = generation.advance();
        assert!(generation.is_current(first));

        let second = generation.advance();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let generation = MessageGeneration::default();
        let timer_side = generation.clone();
        let ticket = generation.advance();
        assert!(timer_side.is_current(ticket));
        generation.advance();
        assert!(!timer_side.is_current(ticket));
    }
}
