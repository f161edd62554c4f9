use fltk::dialog::{FileDialogType, NativeFileChooser, NativeFileChooserOptions};

/// Filter offered by the open and save dialogs.
///
/// FLTK format: one "Description\tPattern" per line.
pub fn text_files_filter() -> String {
    ["Text Files\t*.txt", "All Files\t*"].join("\n")
}

fn run_chooser(mut nfc: NativeFileChooser, directory: Option<&str>) -> Option<String> {
    nfc.set_filter(&text_files_filter());
    if let Some(dir) = directory {
        if let Err(e) = nfc.set_directory(&dir) {
            tracing::debug!("could not seed dialog directory {}: {:?}", dir, e);
        }
    }
    nfc.show();
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

pub fn native_open_dialog(directory: Option<&str>) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Open File");
    run_chooser(nfc, directory)
}

pub fn native_save_dialog(directory: Option<&str>) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title("Save File");
    nfc.set_option(NativeFileChooserOptions::SaveAsConfirm);
    run_chooser(nfc, directory)
}
