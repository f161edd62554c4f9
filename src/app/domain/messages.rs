/// All messages that can be sent through the FLTK channel.
/// Each menu, toolbar and window callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileExit,
    WindowClose,

    // Edit
    EditCut,
    EditCopy,
    EditPaste,
    SelectAll,

    // Format
    ChooseFont,
    ChooseTextColor,
    ChooseBackgroundColor,

    // Help
    ShowAbout,
    ShowAboutFltk,

    /// The editor buffer changed through user input.
    BufferModified,
}
