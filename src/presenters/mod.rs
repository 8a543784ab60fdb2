pub mod block;
pub mod text;

pub use block::hex_dump::BlockHexPresenter;
pub use text::uniform_listing::TextUniformPresenter;
