//! Web Speech API adapter.
//!
//! The constructor is looked up at runtime (`SpeechRecognition`, then the
//! `webkitSpeechRecognition` prefix). When neither exists the caller falls
//! back to `NoSpeech` and the mic button stays inert.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use askme_core::event_bus::EventBus;
use askme_core::ports::SpeechPort;
use askme_types::{AskError, Result, VoiceError, event::UiEvent};

use crate::js::{describe, error_name};

const CONSTRUCTOR_NAMES: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

#[wasm_bindgen]
extern "C" {
    /// A `SpeechRecognition` instance, accessed structurally.
    type Recognizer;

    #[wasm_bindgen(method, setter = lang)]
    fn set_lang(this: &Recognizer, lang: &str);

    #[wasm_bindgen(method, setter = interimResults)]
    fn set_interim_results(this: &Recognizer, value: bool);

    #[wasm_bindgen(method, setter = maxAlternatives)]
    fn set_max_alternatives(this: &Recognizer, value: u32);

    #[wasm_bindgen(method, setter = onresult)]
    fn set_onresult(this: &Recognizer, handler: Option<&Function>);

    #[wasm_bindgen(method, setter = onend)]
    fn set_onend(this: &Recognizer, handler: Option<&Function>);

    #[wasm_bindgen(method, catch)]
    fn start(this: &Recognizer) -> std::result::Result<(), JsValue>;
}

pub struct WebSpeechRecognizer {
    recognizer: Recognizer,
    listening: Rc<Cell<bool>>,
    _onresult: Closure<dyn FnMut(JsValue)>,
    _onend: Closure<dyn FnMut(JsValue)>,
}

impl WebSpeechRecognizer {
    /// Whether the page exposes a speech-recognition constructor.
    pub fn is_available() -> bool {
        find_constructor().is_some()
    }

    /// Build a single-shot recognizer for `language`. Each final transcript
    /// is published on `bus` as `UiEvent::Transcript`.
    pub fn new(language: &str, bus: EventBus) -> Result<Self> {
        let ctor = find_constructor()
            .ok_or_else(|| AskError::JsInterop("speech recognition not available".to_string()))?;
        let instance = Reflect::construct(&ctor, &js_sys::Array::new())
            .map_err(|e| AskError::JsInterop(describe(&e)))?;
        let recognizer: Recognizer = instance.unchecked_into();

        recognizer.set_lang(language);
        recognizer.set_interim_results(false);
        recognizer.set_max_alternatives(1);

        let onresult = Closure::wrap(Box::new(move |event: JsValue| {
            match top_transcript(&event) {
                Some(text) => bus.emit(UiEvent::Transcript(text)),
                None => log::warn!("Speech result without a transcript"),
            }
        }) as Box<dyn FnMut(JsValue)>);
        recognizer.set_onresult(Some(onresult.as_ref().unchecked_ref()));

        let listening = Rc::new(Cell::new(false));
        let listening_clone = listening.clone();
        let onend = Closure::wrap(Box::new(move |_event: JsValue| {
            listening_clone.set(false);
        }) as Box<dyn FnMut(JsValue)>);
        recognizer.set_onend(Some(onend.as_ref().unchecked_ref()));

        log::info!("Speech recognition ready ({})", language);
        Ok(Self {
            recognizer,
            listening,
            _onresult: onresult,
            _onend: onend,
        })
    }
}

impl SpeechPort for WebSpeechRecognizer {
    fn is_supported(&self) -> bool {
        true
    }

    fn start(&self) -> std::result::Result<(), VoiceError> {
        if self.listening.get() {
            return Err(VoiceError::AlreadyActive);
        }
        match self.recognizer.start() {
            Ok(()) => {
                self.listening.set(true);
                Ok(())
            }
            Err(e) if error_name(&e).as_deref() == Some("InvalidStateError") => {
                Err(VoiceError::AlreadyActive)
            }
            Err(e) => Err(VoiceError::Failed(describe(&e))),
        }
    }

    fn is_listening(&self) -> bool {
        self.listening.get()
    }
}

fn find_constructor() -> Option<Function> {
    let window = web_sys::window()?;
    CONSTRUCTOR_NAMES.iter().find_map(|name| {
        Reflect::get(&window, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok())
    })
}

/// `event.results[0][0].transcript`
fn top_transcript(event: &JsValue) -> Option<String> {
    let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let first = Reflect::get_u32(&results, 0).ok()?;
    let alternative = Reflect::get_u32(&first, 0).ok()?;
    Reflect::get(&alternative, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}
