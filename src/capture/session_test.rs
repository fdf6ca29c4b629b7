// Tests for the capture session state machine, driven by a scripted
// engine stub playing the platform side of the protocol

use std::sync::Arc;

use super::*;
use crate::capture::engine::{EngineEvent, ResultBatch, ResultSegment};
use crate::capture::stub::{ScriptedEngine, StubStreamProvider};

fn new_session(engine: &Arc<ScriptedEngine>) -> (CaptureSession, SessionChannels) {
    CaptureSession::new(engine.clone(), None, CaptureConfig::default())
        .expect("supported engine")
}

fn new_session_with_streams(
    engine: &Arc<ScriptedEngine>,
    streams: &Arc<StubStreamProvider>,
) -> (CaptureSession, SessionChannels) {
    CaptureSession::new(
        engine.clone(),
        Some(streams.clone() as Arc<dyn DeviceStreamProvider>),
        CaptureConfig::default(),
    )
    .expect("supported engine")
}

fn drain(session: &mut CaptureSession, channels: &mut SessionChannels) {
    while let Ok(event) = channels.engine_events.try_recv() {
        session.handle_event(event);
    }
}

fn final_segment(text: &str) -> ResultSegment {
    ResultSegment {
        transcript: text.to_string(),
        is_final: true,
    }
}

fn interim_segment(text: &str) -> ResultSegment {
    ResultSegment {
        transcript: text.to_string(),
        is_final: false,
    }
}

#[test]
fn test_unsupported_platform_is_fatal_at_creation() {
    let engine = Arc::new(ScriptedEngine::unsupported());
    let result = CaptureSession::new(engine, None, CaptureConfig::default());
    assert!(matches!(result, Err(CaptureError::Unsupported)));
}

#[test]
fn test_initialize_starts_and_engine_confirms() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut session, mut channels) = new_session(&engine);

    let outcome = session.initialize();
    assert!(outcome.is_done());
    assert_eq!(engine.start_count(), 1);
    assert_eq!(session.state(), CaptureState::Starting);

    engine.publish(EngineEvent::Started);
    drain(&mut session, &mut channels);
    assert_eq!(session.state(), CaptureState::Active);
}

#[test]
fn test_engine_end_triggers_restart_while_alive() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut session, mut channels) = new_session(&engine);
    session.initialize();
    engine.publish(EngineEvent::Started);
    drain(&mut session, &mut channels);

    let starts_before = engine.start_count();
    engine.publish(EngineEvent::Ended);
    drain(&mut session, &mut channels);

    assert!(engine.start_count() >= starts_before + 1);
    assert_eq!(session.state(), CaptureState::Starting);
}

#[test]
fn test_engine_end_respects_disabled_auto_restart() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut session, mut channels) = new_session(&engine);
    session.initialize();
    engine.publish(EngineEvent::Started);
    drain(&mut session, &mut channels);

    session.set_auto_restart(false);
    let starts_before = engine.start_count();
    engine.publish(EngineEvent::Ended);
    drain(&mut session, &mut channels);

    assert_eq!(engine.start_count(), starts_before);
    assert_eq!(session.state(), CaptureState::Idle);
}

#[test]
fn test_engine_error_restarts_unconditionally() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut session, mut channels) = new_session(&engine);
    session.initialize();
    engine.publish(EngineEvent::Started);
    drain(&mut session, &mut channels);

    // Even with auto-restart off, an engine error re-arms capture
    session.set_auto_restart(false);
    let starts_before = engine.start_count();
    engine.publish(EngineEvent::Error("no-speech".to_string()));
    drain(&mut session, &mut channels);

    assert!(engine.start_count() >= starts_before + 1);
}

#[test]
fn test_synchronously_refused_start_is_a_no_op() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut session, _channels) = new_session(&engine);

    engine.refuse_starts(true);
    let outcome = session.try_start();

    assert!(matches!(outcome, BestEffort::Ignored(_)));
    assert_eq!(engine.start_count(), 0);
    assert_eq!(session.state(), CaptureState::Idle);
}

#[test]
fn test_stop_detaches_before_engine_stop() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut session, mut channels) = new_session(&engine);
    session.initialize();
    engine.publish(EngineEvent::Started);
    drain(&mut session, &mut channels);

    let old_sink = engine.current_sink();
    let starts_before = engine.start_count();

    session.stop();
    assert_eq!(engine.stop_count(), 1);
    assert_eq!(session.state(), CaptureState::Idle);

    // A late end from the stopped handle must not trigger a new start
    old_sink.publish(EngineEvent::Ended);
    drain(&mut session, &mut channels);
    assert_eq!(engine.start_count(), starts_before);
    assert_eq!(session.state(), CaptureState::Idle);
}

#[test]
fn test_device_switch_releases_old_stream_before_new_handle() {
    let engine = Arc::new(ScriptedEngine::new());
    let streams = Arc::new(StubStreamProvider::new());
    let (mut session, _channels) = new_session_with_streams(&engine, &streams);
    session.initialize();

    session.set_device(Some("mic-a".to_string()));
    session.set_device(Some("mic-b".to_string()));

    assert_eq!(
        streams.log(),
        vec!["open:mic-a", "release:mic-a", "open:mic-b"]
    );
    // Each switch stopped the old handle and created a fresh one
    assert_eq!(engine.stop_count(), 2);
    assert_eq!(engine.handle_count(), 3);
}

#[test]
fn test_same_device_twice_performs_no_teardown() {
    let engine = Arc::new(ScriptedEngine::new());
    let streams = Arc::new(StubStreamProvider::new());
    let (mut session, _channels) = new_session_with_streams(&engine, &streams);
    session.initialize();
    session.set_device(Some("mic-a".to_string()));

    let handles_before = engine.handle_count();
    let log_before = streams.log();

    let outcome = session.set_device(Some("mic-a".to_string()));

    assert!(matches!(outcome, BestEffort::Ignored(_)));
    assert_eq!(engine.handle_count(), handles_before);
    assert_eq!(streams.log(), log_before);
}

#[test]
fn test_stream_acquisition_failure_degrades_silently() {
    let engine = Arc::new(ScriptedEngine::new());
    let streams = Arc::new(StubStreamProvider::new());
    let (mut session, _channels) = new_session_with_streams(&engine, &streams);
    session.initialize();

    streams.fail_acquisition(true);
    let starts_before = engine.start_count();
    let outcome = session.set_device(Some("mic-c".to_string()));

    // Capture proceeds on the default device
    assert!(outcome.is_done());
    assert!(engine.start_count() > starts_before);
    assert!(streams.log().iter().all(|entry| entry != "open:mic-c"));
}

#[test]
fn test_stale_handle_events_are_dropped_after_device_switch() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut session, mut channels) = new_session(&engine);
    session.initialize();
    let old_sink = engine.current_sink();

    session.set_device(Some("mic-b".to_string()));
    assert_eq!(session.state(), CaptureState::Starting);

    old_sink.publish(EngineEvent::Started);
    drain(&mut session, &mut channels);
    // The replaced handle's confirmation must not flip the new handle's state
    assert_eq!(session.state(), CaptureState::Starting);
}

#[test]
fn test_dispose_drops_events_and_blocks_restart() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut session, mut channels) = new_session(&engine);
    session.initialize();
    engine.publish(EngineEvent::Started);
    drain(&mut session, &mut channels);

    let sink = engine.current_sink();
    let starts_before = engine.start_count();
    session.dispose();
    assert!(!session.is_alive());
    assert_eq!(engine.stop_count(), 1);

    sink.publish(EngineEvent::Ended);
    drain(&mut session, &mut channels);
    assert_eq!(engine.start_count(), starts_before);

    let outcome = session.try_start();
    assert!(matches!(outcome, BestEffort::Ignored(_)));
}

#[test]
fn test_result_batch_publishes_corrected_transcript() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut session, mut channels) = new_session(&engine);
    session.initialize();
    engine.publish(EngineEvent::Started);

    engine.publish(EngineEvent::Result(ResultBatch {
        result_index: 0,
        segments: vec![final_segment("what is "), interim_segment("reactt")],
    }));
    drain(&mut session, &mut channels);

    // The near-miss token is auto-corrected against the vocabulary
    assert_eq!(session.latest_transcript(), "what is react");
    assert_eq!(*channels.transcripts.borrow(), "what is react");
}

#[test]
fn test_final_segments_precede_interim_segments() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut session, mut channels) = new_session(&engine);
    session.initialize();

    engine.publish(EngineEvent::Result(ResultBatch {
        result_index: 2,
        segments: vec![interim_segment("later"), final_segment("first ")],
    }));
    drain(&mut session, &mut channels);

    assert_eq!(session.latest_transcript(), "first later");
}

#[test]
fn test_transcript_replaces_previous_value() {
    let engine = Arc::new(ScriptedEngine::new());
    let (mut session, mut channels) = new_session(&engine);
    session.initialize();

    engine.publish(EngineEvent::Result(ResultBatch {
        result_index: 0,
        segments: vec![final_segment("tell me about sql")],
    }));
    engine.publish(EngineEvent::Result(ResultBatch {
        result_index: 1,
        segments: vec![final_segment("tell me about nosql")],
    }));
    drain(&mut session, &mut channels);

    assert_eq!(session.latest_transcript(), "tell me about nosql");

    session.reset_transcript();
    assert_eq!(session.latest_transcript(), "");
}
