use fltk::{
    app::{self, Sender},
    enums::{Color, Event},
    group::{Flex, Pack},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::session::{APP_NAME, UNTITLED_NAME};
use crate::app::domain::settings::WindowGeometry;
use super::menu::build_menu;
use super::status_bar::{StatusBar, STATUS_BAR_HEIGHT};
use super::toolbar::{build_toolbar, TOOLBAR_HEIGHT};

const MENU_HEIGHT: i32 = 30;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub toolbar: Pack,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub status_bar: StatusBar,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let geometry = WindowGeometry::default();
    let mut wind = Window::new(
        geometry.x,
        geometry.y,
        geometry.width,
        geometry.height,
        None,
    );
    wind.set_label(&format!("{} - {}", UNTITLED_NAME, APP_NAME));
    wind.set_xclass(APP_NAME);

    let mut flex = Flex::new(0, 0, geometry.width, geometry.height, None);
    flex.set_type(fltk::group::FlexType::Column);

    let mut menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    build_menu(&mut menu, sender);
    flex.fixed(&menu, MENU_HEIGHT);

    let toolbar = build_toolbar(sender);
    flex.fixed(&toolbar, TOOLBAR_HEIGHT);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.set_selection_color(Color::from_rgb(173, 216, 230));

    let status_bar = StatusBar::new();
    flex.fixed(status_bar.widget(), STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // The close button routes through the discard gate instead of closing directly.
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        toolbar,
        text_editor,
        buffer,
        status_bar,
    }
}

/// Move and size the window to a persisted geometry.
pub fn apply_geometry(wind: &mut Window, geometry: &WindowGeometry) {
    wind.resize(geometry.x, geometry.y, geometry.width, geometry.height);
}

pub fn current_geometry(wind: &Window) -> WindowGeometry {
    WindowGeometry {
        x: wind.x(),
        y: wind.y(),
        width: wind.w(),
        height: wind.h(),
    }
}
