//! UI module for the widget.

mod footer;
mod form;
mod header;
mod layout;
mod result;

pub use layout::draw_ui;
