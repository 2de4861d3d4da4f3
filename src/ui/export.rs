use std::fs;
use std::io;
use std::path::Path;

use crate::engine::session::ChatSession;

pub const EXPORT_FILE_NAME: &str = "chat_history.txt";

pub fn write_export(path: &Path, session: &ChatSession) -> io::Result<()> {
    fs::write(path, session.export())
}
