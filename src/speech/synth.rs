use std::sync::{
    mpsc::{
        channel,
        Receiver,
        Sender,
    },
    Arc,
    Mutex,
};

use tts::{
    Tts,
    UtteranceId,
    Voice,
};

use super::SpeechSynth;
use crate::core::FlashdeckError;

/// Speech backend over the platform text-to-speech engine. Completion
/// callbacks arrive on an engine thread; they are matched against the current
/// utterance and forwarded over a channel that the UI thread drains, so stale
/// events from preempted utterances never surface.
pub struct TtsSynth {
    tts: Tts,
    voices: Vec<Voice>,
    supports_callbacks: bool,
    current: Arc<Mutex<Option<UtteranceId>>>,
    finished: Receiver<()>,
}

impl TtsSynth {
    pub fn new() -> Result<Self, FlashdeckError> {
        let mut tts = Tts::default()?;
        let features = tts.supported_features();

        // Fixed playback profile: the engine's normal rate and pitch at full
        // volume, applied once up front.
        if features.rate {
            tts.set_rate(tts.normal_rate())?;
        }
        if features.pitch {
            tts.set_pitch(tts.normal_pitch())?;
        }
        if features.volume {
            tts.set_volume(tts.max_volume())?;
        }

        let voices = if features.voice { tts.voices().unwrap_or_default() } else { Vec::new() };

        let current: Arc<Mutex<Option<UtteranceId>>> = Arc::new(Mutex::new(None));
        let (sender, finished) = channel::<()>();

        if features.utterance_callbacks {
            register_callbacks(&tts, &current, sender)?;
        }

        Ok(Self {
            tts,
            voices,
            supports_callbacks: features.utterance_callbacks,
            current,
            finished,
        })
    }

    /// Best-effort voice lookup: exact tag match first, then any voice whose
    /// primary language subtag matches.
    fn voice_for(&self, language: &str) -> Option<&Voice> {
        let primary = language.split('-').next().unwrap_or(language);
        self.voices
            .iter()
            .find(|v| v.language().as_str().eq_ignore_ascii_case(language))
            .or_else(|| {
                self.voices
                    .iter()
                    .find(|v| v.language().primary_language().eq_ignore_ascii_case(primary))
            })
    }
}

fn register_callbacks(
    tts: &Tts,
    current: &Arc<Mutex<Option<UtteranceId>>>,
    sender: Sender<()>,
) -> Result<(), FlashdeckError> {
    let on_end = Arc::clone(current);
    tts.on_utterance_end(Some(Box::new(move |id| {
        if let Ok(mut cur) = on_end.lock() {
            // Only the utterance we are still tracking may report completion;
            // anything else was preempted and already forgotten.
            if cur.as_ref() == Some(&id) {
                *cur = None;
                let _ = sender.send(());
            }
        }
    })))?;

    let on_stop = Arc::clone(current);
    tts.on_utterance_stop(Some(Box::new(move |id| {
        if let Ok(mut cur) = on_stop.lock() {
            if cur.as_ref() == Some(&id) {
                *cur = None;
            }
        }
    })))?;

    Ok(())
}

impl SpeechSynth for TtsSynth {
    fn speak(&mut self, text: &str, language: &str) -> Result<(), FlashdeckError> {
        if let Some(voice) = self.voice_for(language).cloned() {
            if let Err(e) = self.tts.set_voice(&voice) {
                log::warn!("Failed to select a voice for {}: {}", language, e);
            }
        } else if !self.voices.is_empty() {
            log::warn!("No voice available for {}; using the engine default", language);
        }

        // Drop completion events left over from an earlier utterance.
        while self.finished.try_recv().is_ok() {}

        let id = self.tts.speak(text, true)?;
        if let Ok(mut cur) = self.current.lock() {
            *cur = id;
        }
        Ok(())
    }

    fn cancel(&mut self) {
        // Forget the utterance before stopping it so its stop callback finds
        // nothing to match and no completion can slip through afterwards.
        if let Ok(mut cur) = self.current.lock() {
            *cur = None;
        }
        if let Err(e) = self.tts.stop() {
            log::warn!("Failed to cancel utterance: {}", e);
        }
        while self.finished.try_recv().is_ok() {}
    }

    fn poll_finished(&mut self) -> bool {
        if self.finished.try_recv().is_ok() {
            return true;
        }

        // Engines without utterance callbacks (and utterances the engine did
        // not hand back an id for) can only be observed by asking directly.
        let tracking = self.current.lock().map(|cur| cur.is_some()).unwrap_or(false);
        if !self.supports_callbacks || !tracking {
            return !self.tts.is_speaking().unwrap_or(false);
        }

        false
    }
}

impl Drop for TtsSynth {
    fn drop(&mut self) {
        let _ = self.tts.stop();
        if self.supports_callbacks {
            let _ = self.tts.on_utterance_end(None);
            let _ = self.tts.on_utterance_stop(None);
        }
    }
}
