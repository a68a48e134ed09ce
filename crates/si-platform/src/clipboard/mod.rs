mod host;

pub use host::{ClipboardRsClipboard, ClipboardRsPasteboard};
