use crate::cli::Context;
use crate::core::compute_sha256;
use crate::core::error::Result;
use crate::sequencer::Sequencer;
use crate::wheel::WheelFile;
use colored::Colorize;
use serde::Serialize;

#[derive(Serialize)]
struct ListedWheel<'a> {
    #[serde(flatten)]
    wheel: &'a WheelFile,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha256: Option<String>,
}

pub async fn execute(ctx: Context, json: bool, hashes: bool) -> Result<()> {
    let sequencer = Sequencer::new(ctx.working_dir, ctx.config);
    let wheels = sequencer.wheels()?;

    let mut listed = Vec::with_capacity(wheels.len());
    for wheel in &wheels {
        let sha256 = if hashes {
            Some(compute_sha256(&wheel.path).await?)
        } else {
            None
        };
        listed.push(ListedWheel { wheel, sha256 });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }

    if listed.is_empty() {
        println!(
            "{} No files matching {} in {}",
            "ℹ".blue().bold(),
            sequencer.config().packages.wheel_pattern.yellow(),
            sequencer.working_dir().display()
        );
        return Ok(());
    }

    println!("{}", "Wheels to install:".bold());
    for entry in &listed {
        let wheel = entry.wheel;
        match &wheel.name {
            Some(name) => println!(
                "  {} {} ({} {})",
                "•".cyan(),
                wheel.display_name,
                name.distribution.cyan(),
                name.version.yellow()
            ),
            None => println!("  {} {}", "•".cyan(), wheel.display_name),
        }

        if let Some(sha256) = &entry.sha256 {
            println!("    sha256: {}", sha256.dimmed());
        }
    }

    Ok(())
}
