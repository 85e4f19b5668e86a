use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use slotdesk_config::load_form;
use slotdesk_core::{validate, ValidationReportDto};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Form definition (TOML)
    pub file: PathBuf,
}

pub fn validate_form(ctx: &Context<'_>, args: ValidateArgs) -> Result<()> {
    let form =
        load_form(&args.file).with_context(|| format!("load form {}", args.file.display()))?;
    let result = validate(&form.config);
    debug!(
        form = form.title.as_str(),
        violations = result.violations().len(),
        "form validated"
    );

    let report = ValidationReportDto::new(&result, ctx.catalog);
    if ctx.json {
        print_json(&report)?;
    } else if report.valid {
        println!("ok {}", form.title.as_str());
    } else {
        for violation in &report.violations {
            println!("{}: {}", violation.code, violation.message);
        }
    }

    if report.valid {
        Ok(())
    } else {
        Err(invalid_input(format!(
            "form {} has {} violation(s)",
            form.title.as_str(),
            report.violations.len()
        )))
    }
}
