use std::sync::{Arc, Mutex};
use tagline::{Profile, ReportEngine, Speech, TaglineBuilder};

#[derive(Clone)]
struct RecordingSpeech {
    spoken: Arc<Mutex<Vec<String>>>,
}

impl RecordingSpeech {
    fn new() -> Self {
        Self {
            spoken: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Speech for RecordingSpeech {
    fn engine_name(&self) -> &str {
        "recording"
    }

    fn speak(&self, text: &str) -> tagline::Result<()> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

struct FailingSpeech;

impl Speech for FailingSpeech {
    fn engine_name(&self) -> &str {
        "failing"
    }

    fn speak(&self, _text: &str) -> tagline::Result<()> {
        Err(tagline::TaglineError::SpeechError {
            reason: "engine exited with status 1".to_string(),
        })
    }
}

fn test_profile() -> Profile {
    Profile {
        project_name: "Orbit Metrics".to_string(),
        author: "J. Ngata".to_string(),
        year_started: 2018,
        current_year: 2026,
        satisfaction_scores: vec![10.0, 20.0, 30.0],
        ..Profile::default()
    }
}

#[test]
fn test_end_to_end_tagline_render() {
    let profile = test_profile();
    let tagline = TaglineBuilder::new(&profile).render().unwrap();

    assert!(tagline.text.contains("Orbit Metrics"));
    assert!(tagline.text.contains("J. Ngata"));
    assert!(tagline.text.contains("8 (since 2018)"));
    assert_eq!(tagline.stats.count, 3);
    assert_eq!(tagline.stats.mean, 20.0);
    assert_eq!(tagline.stats.minimum, 10.0);
    assert_eq!(tagline.stats.maximum, 30.0);
}

#[test]
fn test_engine_speaks_the_rendered_text_once() {
    let speech = RecordingSpeech::new();
    let spoken = speech.spoken.clone();

    let engine = ReportEngine::new(test_profile(), Some(Box::new(speech)));
    let tagline = engine.run().unwrap();

    let spoken = spoken.lock().unwrap();
    assert_eq!(spoken.len(), 1);
    assert_eq!(spoken[0], tagline.text);
}

#[test]
fn test_engine_output_is_identical_with_and_without_speech() {
    let with_speech = ReportEngine::new(test_profile(), Some(Box::new(RecordingSpeech::new())))
        .run()
        .unwrap();
    let without_speech = ReportEngine::new(test_profile(), None).run().unwrap();

    assert_eq!(with_speech.text, without_speech.text);
    assert_eq!(with_speech.stats, without_speech.stats);
}

#[test]
fn test_engine_degrades_gracefully_when_speech_fails() {
    let engine = ReportEngine::new(test_profile(), Some(Box::new(FailingSpeech)));
    let result = engine.run();

    // A broken collaborator must never turn a successful render into an error.
    assert!(result.is_ok());
}

#[test]
fn test_engine_runs_are_deterministic() {
    let first = ReportEngine::new(test_profile(), None).run().unwrap();
    let second = ReportEngine::new(test_profile(), None).run().unwrap();
    assert_eq!(first.text, second.text);
}
