use crate::constants::{
    CURSOR_BLOB_ID, CURSOR_DOT_ID, INTRO_HINT_ID, LOADING_CLASS, MENU_OPEN_CLASS, OVERLAY_HEADER_ID,
    OVERLAY_ID, OVERLAY_MENU_ID, SCROLLED_CLASS,
};
use crate::dom::{html_element, set_class, set_style};
use reveal_core::{AppState, CursorFrame, HeaderLayout, MenuLayout, OverlayFrame, OverlayTheme};
use web_sys as web;

/// Handles to the overlay markup. Every element is optional; writes to a
/// missing one are skipped.
pub struct OverlayElements {
    root: Option<web::HtmlElement>,
    header: Option<web::HtmlElement>,
    menu: Option<web::HtmlElement>,
    hint: Option<web::HtmlElement>,
    cursor_dot: Option<web::HtmlElement>,
    cursor_blob: Option<web::HtmlElement>,
    // Last values written, so steady frames touch no styles
    last_header: Option<HeaderLayout>,
    last_menu: Option<MenuLayout>,
    last_theme: Option<OverlayTheme>,
    last_opacity: Option<f32>,
    last_hint: Option<f32>,
    last_cursor: Option<CursorFrame>,
    last_state: Option<AppState>,
}

#[inline]
fn header_style(h: &HeaderLayout) -> [(&'static str, String); 3] {
    [
        ("top", format!("{:.3}%", h.top_pct)),
        ("left", format!("{:.3}%", h.left_pct)),
        (
            "transform",
            format!(
                "translate({:.3}%, {:.3}%) scale({:.4})",
                h.x_pct, h.y_pct, h.scale
            ),
        ),
    ]
}

#[inline]
fn menu_style(m: &MenuLayout) -> [(&'static str, String); 3] {
    [
        ("top", format!("{:.3}%", m.top_pct)),
        ("left", format!("{:.3}%", m.left_pct)),
        (
            "transform",
            format!("translate({:.3}%, {:.3}%)", m.x_pct, m.y_pct),
        ),
    ]
}

fn write_styles(el: &Option<web::HtmlElement>, styles: &[(&'static str, String)]) {
    if let Some(el) = el {
        for (prop, value) in styles {
            set_style(el, prop, value);
        }
    }
}

impl OverlayElements {
    pub fn find(document: &web::Document) -> Self {
        Self {
            root: html_element(document, OVERLAY_ID),
            header: html_element(document, OVERLAY_HEADER_ID),
            menu: html_element(document, OVERLAY_MENU_ID),
            hint: html_element(document, INTRO_HINT_ID),
            cursor_dot: html_element(document, CURSOR_DOT_ID),
            cursor_blob: html_element(document, CURSOR_BLOB_ID),
            last_header: None,
            last_menu: None,
            last_theme: None,
            last_opacity: None,
            last_hint: None,
            last_cursor: None,
            last_state: None,
        }
    }

    pub fn apply(&mut self, frame: &OverlayFrame, cursor: &CursorFrame, state: AppState) {
        if self.last_header != Some(frame.header) {
            write_styles(&self.header, &header_style(&frame.header));
            self.last_header = Some(frame.header);
        }
        if self.last_menu != Some(frame.menu) {
            write_styles(&self.menu, &menu_style(&frame.menu));
            self.last_menu = Some(frame.menu);
        }

        if let Some(root) = &self.root {
            if self.last_opacity != Some(frame.opacity) {
                set_style(root, "opacity", &format!("{:.3}", frame.opacity));
                set_style(
                    root,
                    "visibility",
                    if frame.visible { "visible" } else { "hidden" },
                );
            }
            set_class(root, SCROLLED_CLASS, frame.is_scrolled);
            if self.last_theme != Some(frame.theme) {
                for theme in [OverlayTheme::LightOnDark, OverlayTheme::DarkOnLight] {
                    set_class(root, theme.css_class(), theme == frame.theme);
                }
            }
            if self.last_state != Some(state) {
                set_class(root, MENU_OPEN_CLASS, state.is_menu_open);
                set_class(root, LOADING_CLASS, state.is_loading);
            }
        }
        self.last_opacity = Some(frame.opacity);
        self.last_theme = Some(frame.theme);
        self.last_state = Some(state);

        if self.last_hint != Some(frame.hint_opacity) {
            if let Some(hint) = &self.hint {
                set_style(hint, "opacity", &format!("{:.3}", frame.hint_opacity));
            }
            self.last_hint = Some(frame.hint_opacity);
        }

        if self.last_cursor != Some(*cursor) {
            self.apply_cursor(cursor);
            self.last_cursor = Some(*cursor);
        }
    }

    fn apply_cursor(&self, c: &CursorFrame) {
        let opacity = format!("{:.3}", c.opacity);
        if let Some(dot) = &self.cursor_dot {
            set_style(
                dot,
                "transform",
                &format!("translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%)", c.dot.x, c.dot.y),
            );
            set_style(dot, "opacity", &opacity);
        }
        if let Some(blob) = &self.cursor_blob {
            set_style(
                blob,
                "transform",
                &format!(
                    "translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%) scale({:.3})",
                    c.blob.x, c.blob.y, c.blob_scale
                ),
            );
            set_style(blob, "opacity", &opacity);
        }
    }
}
