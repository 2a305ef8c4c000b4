//! Ephemeral per-visit state owned by the running deck: the Demo slide's
//! input/output session and the Team slide's substituted portrait. Nothing
//! here survives the process; nothing is shared between slides.

use crossbeam_channel::{Receiver, Sender, unbounded};
use eframe::egui;

/// Result of a background hook-generation request, tagged with the request
/// generation that issued it.
pub struct HookReply {
    pub generation: u64,
    pub text: String,
}

/// Local state of the Demo slide. Created fresh each time the Demo slide
/// becomes current and dropped when the deck navigates away; dropping the
/// receiver orphans any in-flight request (its send simply fails).
pub struct DemoSession {
    pub input: String,
    pub output: String,
    pub generating: bool,
    /// Monotonic tag; replies whose tag no longer matches are discarded.
    pub generation: u64,
    pub tx: Sender<HookReply>,
    pub rx: Receiver<HookReply>,
}

impl DemoSession {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            input: String::new(),
            output: String::new(),
            generating: false,
            generation: 0,
            tx,
            rx,
        }
    }

    /// A new request may be issued only on explicit user action, with
    /// non-empty input, and with no request already outstanding.
    pub fn can_generate(&self) -> bool {
        !self.generating && !self.input.trim().is_empty()
    }

    /// Drain the reply channel, applying the newest reply that still matches
    /// the live generation. Stale replies are dropped on the floor.
    pub fn poll(&mut self) {
        while let Ok(reply) = self.rx.try_recv() {
            if reply.generation == self.generation {
                self.output = reply.text;
                self.generating = false;
            }
        }
    }
}

impl Default for DemoSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Session-scoped state threaded into the slide dispatcher.
#[derive(Default)]
pub struct SessionState {
    pub demo: Option<DemoSession>,
    /// Replacing this handle drops the previous one, which releases the old
    /// texture; it is never written to disk.
    pub team_photo: Option<egui::TextureHandle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_generate_requires_input_and_idle() {
        let mut session = DemoSession::new();
        assert!(!session.can_generate(), "empty input must block generation");
        session.input = "   ".to_string();
        assert!(!session.can_generate(), "whitespace input must block generation");
        session.input = "clutch play".to_string();
        assert!(session.can_generate());
        session.generating = true;
        assert!(!session.can_generate(), "in-flight request must block re-entry");
    }

    #[test]
    fn test_poll_applies_matching_reply() {
        let mut session = DemoSession::new();
        session.generating = true;
        session.generation = 3;
        session
            .tx
            .send(HookReply {
                generation: 3,
                text: "CAPTION\n#a #b #c".to_string(),
            })
            .unwrap();
        session.poll();
        assert_eq!(session.output, "CAPTION\n#a #b #c");
        assert!(!session.generating);
    }

    #[test]
    fn test_poll_discards_stale_reply() {
        let mut session = DemoSession::new();
        session.generating = true;
        session.generation = 5;
        session
            .tx
            .send(HookReply {
                generation: 4,
                text: "stale".to_string(),
            })
            .unwrap();
        session.poll();
        assert_eq!(session.output, "", "stale reply must not be applied");
        assert!(session.generating, "stale reply must not clear the flag");
    }
}
