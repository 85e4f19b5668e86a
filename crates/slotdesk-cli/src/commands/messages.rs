use crate::commands::{print_json, Context};
use anyhow::Result;

pub fn list_messages(ctx: &Context<'_>) -> Result<()> {
    let entries = ctx.catalog.entries();
    if ctx.json {
        print_json(&entries)?;
    } else {
        println!("# locale {}", ctx.catalog.locale().as_str());
        for entry in entries {
            println!("{}\t{}", entry.code, entry.message);
        }
    }
    Ok(())
}
