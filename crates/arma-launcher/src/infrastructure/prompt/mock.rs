//! Scripted [`UserPrompt`] for tests.
//!
//! Confirmations are answered with a fixed [`Confirmation`]; every notice and
//! question is recorded.

use std::sync::Mutex;

use crate::application::interaction::{Confirmation, UserPrompt};

/// A prompt that never blocks.
#[derive(Debug)]
pub struct ScriptedPrompt {
    answer: Confirmation,
    notices: Mutex<Vec<(String, String)>>,
    questions: Mutex<Vec<(String, String)>>,
}

impl ScriptedPrompt {
    pub fn new(answer: Confirmation) -> Self {
        Self {
            answer,
            notices: Mutex::new(Vec::new()),
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Answers every confirmation with OK.
    pub fn accepting() -> Self {
        Self::new(Confirmation::Accept)
    }

    /// Answers every confirmation with Cancel.
    pub fn cancelling() -> Self {
        Self::new(Confirmation::Cancel)
    }

    /// `(title, message)` of every notice shown, in order.
    pub fn notices(&self) -> Vec<(String, String)> {
        self.notices.lock().expect("lock poisoned").clone()
    }

    /// `(title, message)` of every confirmation asked, in order.
    pub fn questions(&self) -> Vec<(String, String)> {
        self.questions.lock().expect("lock poisoned").clone()
    }

    pub fn notify_count(&self) -> usize {
        self.notices.lock().expect("lock poisoned").len()
    }

    pub fn confirm_count(&self) -> usize {
        self.questions.lock().expect("lock poisoned").len()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn notify(&self, title: &str, message: &str) {
        self.notices
            .lock()
            .expect("lock poisoned")
            .push((title.to_string(), message.to_string()));
    }

    fn confirm(&self, title: &str, message: &str) -> Confirmation {
        self.questions
            .lock()
            .expect("lock poisoned")
            .push((title.to_string(), message.to_string()));
        self.answer
    }
}
