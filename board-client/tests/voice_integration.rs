//! Voice Capture Integration Tests
//!
//! Exercises the public voice API end to end over the scripted platform:
//! - Permission check before recording
//! - Record, stop, post-process
//! - Recorder misuse surfaced as errors

use board_client::voice::MicrophoneAccess;
use board_client::{
    AudioProcessor, AudioProcessorOptions, AudioRecorder, FailSafe, PermissionManager,
    PermissionState, PermissionStatus, RecorderError, RecorderState, ScriptedPlatform,
};

fn speech_chunks() -> Vec<Vec<u8>> {
    vec![b"push ".to_vec(), b"four ".to_vec(), b"onto the stack".to_vec()]
}

// ============================================================================
// Permission → Record → Process Workflow
// ============================================================================

#[tokio::test]
async fn test_check_permission_then_record() {
    let platform = ScriptedPlatform::new()
        .with_permission(PermissionState::Granted)
        .with_chunks(speech_chunks());

    let permissions = PermissionManager::new(platform.clone());
    let status = permissions.get_permission_status().await;
    assert_eq!(
        status,
        FailSafe::Resolved(PermissionStatus {
            microphone: PermissionState::Granted
        })
    );

    let mut recorder = AudioRecorder::new(platform.clone());
    recorder.start_recording().await.expect("start");
    let blob = recorder.stop_recording().await.expect("stop");

    let processor = AudioProcessor::new(AudioProcessorOptions {
        noise_reduction: Some(true),
        gain_control: None,
    });
    let processed = processor.process_audio(blob);
    let converted = processor.convert_to_format(processed, "audio/wav");

    assert_eq!(converted.data(), b"push four onto the stack");
    assert_eq!(platform.active_streams(), 0);
}

#[tokio::test]
async fn test_prompt_then_request_permission() {
    let platform = ScriptedPlatform::new().with_permission(PermissionState::Prompt);
    let permissions = PermissionManager::new(platform.clone());

    let status = permissions.get_permission_status().await.into_value();
    assert_eq!(status.microphone, PermissionState::Prompt);

    let granted = permissions.request_microphone_permission().await;
    assert_eq!(granted, FailSafe::Resolved(true));
    assert_eq!(platform.active_streams(), 0);
}

#[tokio::test]
async fn test_unsupported_permissions_api_is_fail_safe() {
    let platform = ScriptedPlatform::new().with_failing_permission_query();
    let permissions = PermissionManager::new(platform);

    let status = permissions.get_permission_status().await;

    assert!(status.is_defaulted());
    assert!(status.reason().is_some_and(|r| !r.is_empty()));
    assert_eq!(*status.value(), PermissionStatus::FAIL_SAFE);
}

// ============================================================================
// Recorder Lifecycle
// ============================================================================

#[tokio::test]
async fn test_recorder_full_lifecycle() {
    let platform = ScriptedPlatform::new().with_chunks(speech_chunks());
    let mut recorder = AudioRecorder::new(platform.clone());
    assert_eq!(recorder.state(), RecorderState::Idle);

    recorder.start_recording().await.expect("start");
    assert!(matches!(
        recorder.start_recording().await,
        Err(RecorderError::AlreadyRecording)
    ));

    let blob = recorder.stop_recording().await.expect("stop");
    assert_eq!(blob.len(), b"push four onto the stack".len());
    assert_eq!(recorder.state(), RecorderState::Stopped);

    assert!(matches!(
        recorder.stop_recording().await,
        Err(RecorderError::NoActiveRecording)
    ));

    recorder.start_recording().await.expect("restart");
    assert_eq!(recorder.state(), RecorderState::Recording);
    let again = recorder.stop_recording().await.expect("stop again");
    assert_eq!(again, blob);

    assert_eq!(platform.acquisitions(), 2);
    assert_eq!(platform.releases(), 2);
}

#[tokio::test]
async fn test_recording_with_unavailable_microphone() {
    let platform = ScriptedPlatform::new().with_access(MicrophoneAccess::Unavailable);
    let mut recorder = AudioRecorder::new(platform);

    let err = recorder.start_recording().await.unwrap_err();

    assert!(matches!(err, RecorderError::StartFailed(_)));
    assert!(err.to_string().starts_with("failed to start recording"));
}

#[tokio::test]
async fn test_silent_recording_yields_empty_blob() {
    let mut recorder = AudioRecorder::new(ScriptedPlatform::new());

    recorder.start_recording().await.expect("start");
    let blob = recorder.stop_recording().await.expect("stop");

    assert!(blob.is_empty());
    assert_eq!(blob.mime_type(), "audio/webm");
}
