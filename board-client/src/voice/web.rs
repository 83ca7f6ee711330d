//! Browser media backend.
//!
//! Wraps `navigator.mediaDevices.getUserMedia`, `MediaRecorder` and
//! `navigator.permissions` behind [`MediaPlatform`].

use async_trait::async_trait;
use futures::channel::oneshot;
use js_sys::{Object, Reflect, Uint8Array};
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    BlobEvent, DomException, MediaRecorder, MediaStream, MediaStreamConstraints, MediaStreamTrack,
    PermissionState as WebPermissionState, PermissionStatus as WebPermissionStatus,
};

use super::error::PlatformError;
use super::platform::{CaptureStream, ChunkSink, MediaPlatform, PermissionState};

/// [`MediaPlatform`] backed by the browser's media APIs.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMediaPlatform;

impl WebMediaPlatform {
    /// Create the browser platform.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl MediaPlatform for WebMediaPlatform {
    type Stream = WebCaptureStream;

    async fn acquire_microphone(&self) -> Result<Self::Stream, PlatformError> {
        let devices = window()?
            .navigator()
            .media_devices()
            .map_err(|e| PlatformError::Unavailable(js_message(&e)))?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);

        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| PlatformError::Unavailable(js_message(&e)))?;
        let stream = JsFuture::from(promise).await.map_err(|e| media_error(&e))?;
        let stream: MediaStream = stream.dyn_into().map_err(|_| {
            PlatformError::Capture("getUserMedia did not resolve to a MediaStream".to_string())
        })?;

        Ok(WebCaptureStream {
            stream,
            recorder: None,
            on_data: None,
        })
    }

    async fn query_microphone_permission(&self) -> Result<PermissionState, PlatformError> {
        let permissions = window()?
            .navigator()
            .permissions()
            .map_err(|e| PlatformError::Unavailable(js_message(&e)))?;

        let descriptor = Object::new();
        Reflect::set(
            &descriptor,
            &JsValue::from_str("name"),
            &JsValue::from_str("microphone"),
        )
        .map_err(|e| PlatformError::Unavailable(js_message(&e)))?;

        let promise = permissions
            .query(&descriptor)
            .map_err(|e| PlatformError::Unavailable(js_message(&e)))?;
        let status = JsFuture::from(promise)
            .await
            .map_err(|e| PlatformError::Unavailable(js_message(&e)))?;
        let status: WebPermissionStatus = status.dyn_into().map_err(|_| {
            PlatformError::Unavailable("permissions.query returned no status".to_string())
        })?;

        match status.state() {
            WebPermissionState::Granted => Ok(PermissionState::Granted),
            WebPermissionState::Denied => Ok(PermissionState::Denied),
            WebPermissionState::Prompt => Ok(PermissionState::Prompt),
            _ => Err(PlatformError::Unavailable(
                "unrecognised permission state".to_string(),
            )),
        }
    }
}

/// A microphone `MediaStream` plus the `MediaRecorder` recording it.
pub struct WebCaptureStream {
    stream: MediaStream,
    recorder: Option<MediaRecorder>,
    on_data: Option<Closure<dyn FnMut(BlobEvent)>>,
}

impl std::fmt::Debug for WebCaptureStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebCaptureStream")
            .field("recording", &self.recorder.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait(?Send)]
impl CaptureStream for WebCaptureStream {
    fn start(&mut self, sink: ChunkSink) -> Result<(), PlatformError> {
        let recorder = MediaRecorder::new_with_media_stream(&self.stream)
            .map_err(|e| PlatformError::Capture(js_message(&e)))?;

        // Blob contents are read asynchronously; each read holds its own sink
        // clone so the channel stays open until the last chunk lands.
        let on_data = Closure::<dyn FnMut(BlobEvent)>::new(move |event: BlobEvent| {
            let Some(blob) = event.data() else {
                return;
            };
            let sink = sink.clone();
            spawn_local(async move {
                match JsFuture::from(blob.array_buffer()).await {
                    Ok(buffer) => {
                        let _ = sink.send(Uint8Array::new(&buffer).to_vec());
                    }
                    Err(e) => warn!(error = %js_message(&e), "dropping unreadable audio chunk"),
                }
            });
        });
        recorder.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));
        recorder
            .start()
            .map_err(|e| PlatformError::Capture(js_message(&e)))?;

        self.recorder = Some(recorder);
        self.on_data = Some(on_data);
        Ok(())
    }

    async fn stop(&mut self) -> Result<(), PlatformError> {
        let recorder = self
            .recorder
            .take()
            .ok_or_else(|| PlatformError::Capture("stream is not recording".to_string()))?;

        let (stopped_tx, stopped_rx) = oneshot::channel::<()>();
        let on_stop = Closure::once(move || {
            let _ = stopped_tx.send(());
        });
        recorder.set_onstop(Some(on_stop.as_ref().unchecked_ref()));
        recorder
            .stop()
            .map_err(|e| PlatformError::Capture(js_message(&e)))?;

        stopped_rx
            .await
            .map_err(|_| PlatformError::Capture("recorder never signalled stop".to_string()))?;

        recorder.set_ondataavailable(None);
        recorder.set_onstop(None);
        drop(on_stop);
        self.on_data = None;
        Ok(())
    }

    fn release(&mut self) {
        for track in self.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

fn window() -> Result<web_sys::Window, PlatformError> {
    web_sys::window().ok_or_else(|| PlatformError::Unavailable("no browser window".to_string()))
}

fn media_error(value: &JsValue) -> PlatformError {
    match value.dyn_ref::<DomException>() {
        Some(e) if e.name() == "NotAllowedError" || e.name() == "SecurityError" => {
            PlatformError::PermissionDenied
        }
        _ => PlatformError::Unavailable(js_message(value)),
    }
}

fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(e) = value.dyn_ref::<DomException>() {
        return format!("{}: {}", e.name(), e.message());
    }
    if let Some(e) = value.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{value:?}")
}
