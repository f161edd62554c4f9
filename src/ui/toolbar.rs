use fltk::{
    app::Sender,
    button::Button,
    enums::FrameType,
    frame::Frame,
    group::{Pack, PackType},
    prelude::*,
};

use crate::app::domain::messages::Message;

pub const TOOLBAR_HEIGHT: i32 = 30;

const BUTTON_WIDTH: i32 = 56;
const GROUP_GAP: i32 = 12;

struct ToolAction {
    label: &'static str,
    tooltip: &'static str,
    message: Message,
}

const FILE_ACTIONS: &[ToolAction] = &[
    ToolAction { label: "New", tooltip: "Create a new file", message: Message::FileNew },
    ToolAction { label: "Open", tooltip: "Open an existing file", message: Message::FileOpen },
    ToolAction { label: "Save", tooltip: "Save the document to disk", message: Message::FileSave },
];

const EDIT_ACTIONS: &[ToolAction] = &[
    ToolAction { label: "Cut", tooltip: "Cut the current selection's contents to the clipboard", message: Message::EditCut },
    ToolAction { label: "Copy", tooltip: "Copy the current selection's contents to the clipboard", message: Message::EditCopy },
    ToolAction { label: "Paste", tooltip: "Paste the clipboard's contents into the current selection", message: Message::EditPaste },
];

/// File and Edit button groups, left aligned.
pub fn build_toolbar(sender: &Sender<Message>) -> Pack {
    let mut pack = Pack::default().with_size(0, TOOLBAR_HEIGHT);
    pack.set_type(PackType::Horizontal);
    pack.set_spacing(2);

    for (i, actions) in [FILE_ACTIONS, EDIT_ACTIONS].iter().enumerate() {
        if i > 0 {
            Frame::default().with_size(GROUP_GAP, TOOLBAR_HEIGHT);
        }
        for action in actions.iter() {
            let mut btn = Button::default()
                .with_size(BUTTON_WIDTH, TOOLBAR_HEIGHT)
                .with_label(action.label);
            btn.set_frame(FrameType::FlatBox);
            btn.set_down_frame(FrameType::DownBox);
            btn.set_tooltip(action.tooltip);
            btn.clear_visible_focus();
            let s = *sender;
            let message = action.message;
            btn.set_callback(move |_| s.send(message));
        }
    }

    pack.end();
    pack
}
