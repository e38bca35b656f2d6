mod option_list;
mod options_render;

pub use option_list::OptionList;
pub use options_render::render_popup;
