//! Hidden `<input type="file">` used by the canvas UI to pick a document.
//!
//! The chosen file is read into memory as soon as it is selected, so the
//! upload can happen later without touching the DOM again.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement};

use askme_types::{AskError, Result, api::UploadFile};

use crate::js::{describe, interop};

const INPUT_ID: &str = "askme_file_input";

pub struct FilePicker {
    input: HtmlInputElement,
    selected: Rc<RefCell<Option<UploadFile>>>,
    _onchange: Closure<dyn FnMut(Event)>,
}

impl FilePicker {
    /// Attach a hidden file input to the document body.
    pub fn new(accept: &str) -> Result<Self> {
        let document = gloo_utils::document();
        let input: HtmlInputElement = document
            .create_element("input")
            .map_err(interop)?
            .dyn_into()
            .map_err(|_| AskError::JsInterop("created element is not an input".to_string()))?;
        input.set_type("file");
        input.set_id(INPUT_ID);
        input.set_accept(accept);
        input.style().set_property("display", "none").map_err(interop)?;
        gloo_utils::body().append_child(&input).map_err(interop)?;

        let selected: Rc<RefCell<Option<UploadFile>>> = Rc::new(RefCell::new(None));
        let selected_clone = selected.clone();
        let input_clone = input.clone();
        let onchange = Closure::wrap(Box::new(move |_event: Event| {
            let file = input_clone.files().and_then(|list| list.get(0));
            let slot = selected_clone.clone();
            match file {
                Some(file) => wasm_bindgen_futures::spawn_local(async move {
                    match read_file(&file).await {
                        Ok(upload) => {
                            log::debug!("Picked {} ({} bytes)", upload.name, upload.bytes.len());
                            *slot.borrow_mut() = Some(upload);
                        }
                        Err(e) => {
                            log::error!("Could not read {}: {}", file.name(), e);
                            *slot.borrow_mut() = None;
                        }
                    }
                }),
                None => *slot.borrow_mut() = None,
            }
        }) as Box<dyn FnMut(Event)>);
        input.set_onchange(Some(onchange.as_ref().unchecked_ref()));

        Ok(Self {
            input,
            selected,
            _onchange: onchange,
        })
    }

    /// Open the browser's file dialog.
    pub fn open(&self) {
        self.input.click();
    }

    /// The currently selected file, if any.
    pub fn selected(&self) -> Option<UploadFile> {
        self.selected.borrow().clone()
    }

    pub fn selected_name(&self) -> Option<String> {
        self.selected.borrow().as_ref().map(|f| f.name.clone())
    }
}

impl Drop for FilePicker {
    fn drop(&mut self) {
        self.input.set_onchange(None);
        self.input.remove();
    }
}

async fn read_file(file: &File) -> Result<UploadFile> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| AskError::JsInterop(describe(&e)))?;
    let mime = file.type_();
    Ok(UploadFile {
        name: file.name(),
        mime: if mime.is_empty() { None } else { Some(mime) },
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}
