// Unit-test helper: a listener that records every callback

use bdic_core::Flow;

use crate::listener::RuleListener;

/// Records every callback; stops when a stem or candidate equals `stop_at`.
#[derive(Default)]
pub struct Recorder {
    pub matches: Vec<(String, String)>,
    pub suggestions: Vec<String>,
    pub stop_at: Option<String>,
}

impl Recorder {
    pub fn stopping_at(word: &str) -> Self {
        Self {
            stop_at: Some(word.to_string()),
            ..Self::default()
        }
    }

    fn flow(&self, word: &str) -> Flow {
        Flow::continue_if(self.stop_at.as_deref() != Some(word))
    }
}

impl RuleListener for Recorder {
    fn handle_match(&mut self, stem: &str, flag: &str) -> Flow {
        self.matches.push((stem.to_string(), flag.to_string()));
        self.flow(stem)
    }

    fn handle_suggestion(&mut self, candidate: &str) -> Flow {
        self.suggestions.push(candidate.to_string());
        self.flow(candidate)
    }
}
