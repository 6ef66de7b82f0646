//! Host capabilities
//!
//! Clipboard, file export and preference storage are provided by whatever
//! front end drives the composer. Each sits behind a small trait so the
//! composer can run against in-memory stand-ins.

mod clipboard;
mod download;
mod preferences;

pub use clipboard::{Clipboard, CommandClipboard, MemoryClipboard};
pub use download::{DirectoryDownloader, DownloadedFile, Downloader, MARKDOWN_MIME, MemoryDownloader};
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
