use anyhow::Result;
use serde::Serialize;
use slotdesk_config::AppConfig;
use slotdesk_core::MessageCatalog;
use std::io::{self, Write};

pub mod completions;
pub mod messages;
pub mod slots;
pub mod validate;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
    pub catalog: &'a MessageCatalog,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
