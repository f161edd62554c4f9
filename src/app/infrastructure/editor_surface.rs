use std::cell::Cell;
use std::ffi::c_void;
use std::rc::Rc;

use fltk::app::Sender;
use fltk::text::TextBuffer;

use crate::app::controllers::session::TextSurface;
use crate::app::domain::messages::Message;

type ModifyCb = dyn FnMut(i32, i32, i32, i32, *const std::ffi::c_char);

type RawModifyCb = unsafe extern "C" fn(
    std::ffi::c_int,
    std::ffi::c_int,
    std::ffi::c_int,
    std::ffi::c_int,
    *const std::ffi::c_char,
    *mut c_void,
);

unsafe extern "C" {
    fn Fl_Text_Buffer_add_modify_callback(buf: *mut c_void, cb: Option<RawModifyCb>, cb_arg: *mut c_void);
    fn Fl_Text_Buffer_remove_modify_callback(buf: *mut c_void, cb: Option<RawModifyCb>, cb_arg: *mut c_void);
    fn Fl_Text_Buffer_text(buf: *mut c_void) -> *mut std::ffi::c_char;
    fn free(ptr: *mut c_void);
}

/// Fixed C entry point for the buffer modify callback. Being a single function
/// pointer, it can be matched again on removal.
///
/// # Safety
///
/// `cb_arg` must be the `Box<ModifyCb>` pointer created in
/// [`EditorSurface::new`], still registered with the buffer.
unsafe extern "C" fn modify_shim(
    pos: std::ffi::c_int,
    n_inserted: std::ffi::c_int,
    n_deleted: std::ffi::c_int,
    n_restyled: std::ffi::c_int,
    deleted_text: *const std::ffi::c_char,
    cb_arg: *mut c_void,
) {
    if cb_arg.is_null() {
        tracing::warn!("modify_shim called with null callback argument");
        return;
    }
    // SAFETY: non-null, and only ever the pointer registered in EditorSurface::new,
    // which stays alive until Drop unregisters it.
    unsafe {
        let cb: &mut Box<ModifyCb> = &mut *(cb_arg as *mut Box<ModifyCb>);
        cb(pos, n_inserted, n_deleted, n_restyled, deleted_text);
    }
}

/// Copy the buffer text out of FLTK and free the C allocation.
///
/// `TextBuffer::text()` copies FLTK's malloc'd string without freeing it, so a
/// save of a large document would leak the whole document each time.
pub fn buffer_text_no_leak(buf: &TextBuffer) -> String {
    // SAFETY: the buffer pointer is valid while `buf` is. Fl_Text_Buffer_text
    // returns a malloc'd NUL-terminated copy (or null), which we own and free.
    unsafe {
        let ptr = Fl_Text_Buffer_text(buf.as_ptr() as *mut c_void);
        if ptr.is_null() {
            return String::new();
        }
        let result = std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned();
        free(ptr as *mut c_void);
        result
    }
}

/// The FLTK text buffer seen as a [`TextSurface`].
///
/// User edits send [`Message::BufferModified`]; text replaced through
/// [`TextSurface::set_text`] does not.
pub struct EditorSurface {
    buffer: TextBuffer,
    suppress: Rc<Cell<bool>>,
    modify_cb_data: *mut c_void,
}

impl EditorSurface {
    pub fn new(buffer: TextBuffer, sender: Sender<Message>) -> Self {
        let suppress = Rc::new(Cell::new(false));
        let quiet = suppress.clone();

        let cb: Box<ModifyCb> = Box::new(
            move |_pos: i32,
                  inserted: i32,
                  deleted: i32,
                  _restyled: i32,
                  _deleted_text: *const std::ffi::c_char| {
                if (inserted > 0 || deleted > 0) && !quiet.get() {
                    sender.send(Message::BufferModified);
                }
            },
        );
        let modify_cb_data = Box::into_raw(Box::new(cb)) as *mut c_void;

        // SAFETY: modify_cb_data stays valid until Drop removes the callback
        // and reclaims the box.
        unsafe {
            Fl_Text_Buffer_add_modify_callback(
                buffer.as_ptr() as *mut c_void,
                Some(modify_shim),
                modify_cb_data,
            );
        }

        Self {
            buffer,
            suppress,
            modify_cb_data,
        }
    }

    pub fn select_all(&mut self) {
        let len = self.buffer.length();
        self.buffer.select(0, len);
    }
}

impl TextSurface for EditorSurface {
    fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    fn set_text(&mut self, text: &str) {
        // The modify callback fires synchronously inside set_text.
        self.suppress.set(true);
        self.buffer.set_text(text);
        self.suppress.set(false);
    }
}

impl Drop for EditorSurface {
    fn drop(&mut self) {
        if self.modify_cb_data.is_null() {
            return;
        }
        // SAFETY: unregister first so FLTK never calls modify_shim with a freed
        // pointer, then rebuild the box to free it. Same shim pointer as on add.
        unsafe {
            Fl_Text_Buffer_remove_modify_callback(
                self.buffer.as_ptr() as *mut c_void,
                Some(modify_shim),
                self.modify_cb_data,
            );
            let _ = Box::from_raw(self.modify_cb_data as *mut Box<ModifyCb>);
        }
        self.modify_cb_data = std::ptr::null_mut();
    }
}
