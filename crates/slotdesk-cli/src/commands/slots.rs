use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use slotdesk_config::load_form;
use slotdesk_core::rules::{slots_between, validate_plan_days};
use slotdesk_core::time::parse_date;
use slotdesk_core::{validate, SlotDto};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SlotsArgs {
    /// Form definition (TOML)
    pub file: PathBuf,
    /// First day to plan (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: String,
    #[arg(long)]
    pub days: Option<i64>,
}

pub fn list_slots(ctx: &Context<'_>, args: SlotsArgs) -> Result<()> {
    let from = parse_date(&args.from).map_err(|err| invalid_input(err.to_string()))?;
    let days = args.days.unwrap_or(ctx.config.plan_days);
    let days = validate_plan_days(days).map_err(|err| invalid_input(err.to_string()))?;

    let form =
        load_form(&args.file).with_context(|| format!("load form {}", args.file.display()))?;
    let result = validate(&form.config);
    if !result.is_valid() {
        let messages: Vec<&str> = result
            .violations()
            .iter()
            .map(|code| ctx.catalog.render(*code))
            .collect();
        return Err(invalid_input(format!(
            "form {} is invalid: {}",
            form.title.as_str(),
            messages.join(" ")
        )));
    }

    let slots = slots_between(&form.config, from, days)?;
    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();

    if ctx.json {
        print_json(&dtos)?;
        return Ok(());
    }
    if dtos.is_empty() {
        println!("no slots");
        return Ok(());
    }
    for slot in dtos {
        println!(
            "{} {}-{} capacity {}",
            slot.date, slot.start, slot.end, slot.capacity
        );
    }
    Ok(())
}
