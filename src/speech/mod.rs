pub mod synth;

use crate::{
    core::FlashdeckError,
    deck::SpeechRequest,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Speaking,
}

/// Seam over the platform speech engine. The real implementation is
/// `synth::TtsSynth`; tests drive the player with a fake.
pub trait SpeechSynth {
    /// Starts synthesizing `text`, picking a voice for the language tag on a
    /// best-effort basis.
    fn speak(&mut self, text: &str, language: &str) -> Result<(), FlashdeckError>;

    /// Cancels the in-flight utterance, if any. A cancelled utterance never
    /// reports completion and never reports an error.
    fn cancel(&mut self);

    /// True once the utterance started by the most recent `speak` has
    /// finished. Consumes the completion, so it reports each finish once.
    fn poll_finished(&mut self) -> bool;
}

/// The single utterance channel. One player is owned by the app; starting a
/// new utterance preempts the previous one, and dropping the player cancels
/// whatever is left so no callback outlives the view.
pub struct SpeechPlayer {
    synth: Option<Box<dyn SpeechSynth>>,
    state: PlaybackState,
}

impl SpeechPlayer {
    /// Opens the platform engine. When no engine is available the player
    /// stays usable and every `speak` is a silent no-op.
    pub fn new() -> Self {
        match synth::TtsSynth::new() {
            Ok(synth) => Self::with_synth(Box::new(synth)),
            Err(e) => {
                log::warn!("Speech synthesis unavailable: {}", e);
                Self::disabled()
            }
        }
    }

    pub fn with_synth(synth: Box<dyn SpeechSynth>) -> Self {
        Self { synth: Some(synth), state: PlaybackState::Idle }
    }

    pub fn disabled() -> Self {
        Self { synth: None, state: PlaybackState::Idle }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_speaking(&self) -> bool {
        self.state == PlaybackState::Speaking
    }

    /// Cancels whatever is playing and starts the requested utterance.
    /// Synthesis failures reset the state and are only logged; pronunciation
    /// is an enhancement, not a required path.
    pub fn speak(&mut self, request: &SpeechRequest) {
        let Some(synth) = self.synth.as_mut() else {
            return;
        };

        synth.cancel();
        match synth.speak(&request.text, &request.language) {
            Ok(()) => self.state = PlaybackState::Speaking,
            Err(e) => {
                log::warn!("Failed to speak \"{}\": {}", request.text, e);
                self.state = PlaybackState::Idle;
            }
        }
    }

    /// Applies completion events from the engine thread. Called once per
    /// frame from the update loop.
    pub fn poll(&mut self) {
        if self.state != PlaybackState::Speaking {
            return;
        }
        if let Some(synth) = self.synth.as_mut() {
            if synth.poll_finished() {
                self.state = PlaybackState::Idle;
            }
        }
    }
}

impl Drop for SpeechPlayer {
    fn drop(&mut self) {
        if let Some(synth) = self.synth.as_mut() {
            synth.cancel();
        }
        self.state = PlaybackState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        Mutex,
    };

    use super::*;

    #[derive(Default)]
    struct FakeInner {
        next_id: u64,
        current: Option<u64>,
        finished: Vec<u64>,
        spoken: Vec<(String, String)>,
        fail_next: bool,
    }

    #[derive(Clone, Default)]
    struct FakeSynth {
        inner: Arc<Mutex<FakeInner>>,
    }

    impl FakeSynth {
        /// Marks the in-flight utterance as completed, as the engine thread
        /// would. Cancelled utterances have no in-flight entry, so completing
        /// after a cancel reports nothing.
        fn complete_current(&self) {
            let mut inner = self.inner.lock().unwrap();
            if let Some(id) = inner.current.take() {
                inner.finished.push(id);
            }
        }

        fn fail_next(&self) {
            self.inner.lock().unwrap().fail_next = true;
        }

        fn spoken(&self) -> Vec<(String, String)> {
            self.inner.lock().unwrap().spoken.clone()
        }

        fn finished_count(&self) -> usize {
            self.inner.lock().unwrap().finished.len()
        }
    }

    impl SpeechSynth for FakeSynth {
        fn speak(&mut self, text: &str, language: &str) -> Result<(), FlashdeckError> {
            let mut inner = self.inner.lock().unwrap();
            if inner.fail_next {
                inner.fail_next = false;
                return Err(FlashdeckError::Custom("synthesis failed".to_string()));
            }
            inner.next_id += 1;
            inner.current = Some(inner.next_id);
            inner.spoken.push((text.to_string(), language.to_string()));
            Ok(())
        }

        fn cancel(&mut self) {
            self.inner.lock().unwrap().current = None;
        }

        fn poll_finished(&mut self) -> bool {
            self.inner.lock().unwrap().finished.pop().is_some()
        }
    }

    fn request(text: &str) -> SpeechRequest {
        SpeechRequest { text: text.to_string(), language: "en-US".to_string() }
    }

    #[test]
    fn test_speak_and_complete() {
        let fake = FakeSynth::default();
        let mut player = SpeechPlayer::with_synth(Box::new(fake.clone()));

        player.speak(&request("hello"));
        assert!(player.is_speaking());
        assert_eq!(fake.spoken(), vec![("hello".to_string(), "en-US".to_string())]);

        fake.complete_current();
        player.poll();
        assert_eq!(player.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_second_speak_preempts_first() {
        let fake = FakeSynth::default();
        let mut player = SpeechPlayer::with_synth(Box::new(fake.clone()));

        player.speak(&request("first"));
        player.speak(&request("second"));
        assert!(player.is_speaking());

        // Only the second utterance can ever complete; the first was
        // cancelled before it finished and reports nothing.
        fake.complete_current();
        fake.complete_current();
        player.poll();
        assert_eq!(player.state(), PlaybackState::Idle);
        assert_eq!(fake.finished_count(), 0);

        player.poll();
        assert_eq!(player.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_synthesis_error_degrades_to_idle() {
        let fake = FakeSynth::default();
        let mut player = SpeechPlayer::with_synth(Box::new(fake.clone()));

        fake.fail_next();
        player.speak(&request("broken"));
        assert_eq!(player.state(), PlaybackState::Idle);

        // The player recovers on the next request.
        player.speak(&request("fine"));
        assert!(player.is_speaking());
    }

    #[test]
    fn test_missing_engine_is_a_noop() {
        let mut player = SpeechPlayer::disabled();
        player.speak(&request("anything"));
        assert_eq!(player.state(), PlaybackState::Idle);
        player.poll();
        assert_eq!(player.state(), PlaybackState::Idle);
    }
}
