use crate::cli::Context;
use crate::core::error::{Result, WheelSetupError};
use crate::core::ProcessExecutor;
use crate::sequencer::Sequencer;
use colored::Colorize;

pub async fn execute(ctx: Context) -> Result<()> {
    println!("{}", "Running environment checks...".bold());
    println!();

    let config_source = ctx.config_source.clone();
    let sequencer = Sequencer::new(ctx.working_dir, ctx.config);
    let layout = sequencer.layout();
    let mut all_ok = true;

    // Config
    match &config_source {
        Some(path) => println!("Config: {}", path.display().to_string().yellow()),
        None => println!("Config: {}", "built-in defaults".yellow()),
    }

    // Activation script
    print!("Checking activation script... ");
    if layout.has_activation_script() {
        println!(
            "{} ({})",
            "✓".green(),
            layout.activation_script().display().to_string().yellow()
        );
    } else {
        println!("{}", "✗ Not found".red());
        println!(
            "  Expected {}",
            layout.activation_script().display().to_string().yellow()
        );
        println!(
            "  Create it with {}",
            format!("python -m venv {}", sequencer.config().venv.dir).cyan()
        );
        all_ok = false;
    }

    // Python + pip
    print!("Checking python... ");
    let python = layout.python();
    if python.is_file() {
        println!("{} ({})", "✓".green(), python.display().to_string().yellow());

        print!("Checking pip... ");
        match sequencer.activate() {
            Ok(env) => {
                let invocation = sequencer.pip_version_invocation(&env);
                match ProcessExecutor::capture(&invocation).await {
                    Ok(out) if out.exit_code == 0 => {
                        println!("{} ({})", "✓".green(), out.stdout.trim().yellow())
                    }
                    Ok(out) => {
                        println!("{}", "✗ pip is not usable".red());
                        if !out.stderr.trim().is_empty() {
                            println!("  {}", out.stderr.trim());
                        }
                        all_ok = false;
                    }
                    Err(e) => {
                        println!("{} {}", "✗".red(), e);
                        all_ok = false;
                    }
                }
            }
            Err(WheelSetupError::MissingActivationScript(_)) => {
                println!("{}", "○ Skipped (no activation script)".yellow());
            }
            Err(e) => {
                println!("{} {}", "✗".red(), e);
                all_ok = false;
            }
        }
    } else {
        println!("{}", "✗ Not found".red());
        all_ok = false;
    }

    // Wheels
    print!("Checking wheels... ");
    match sequencer.wheels() {
        Ok(wheels) if wheels.is_empty() => {
            println!(
                "{} No files matching {}",
                "○".yellow(),
                sequencer.config().packages.wheel_pattern.yellow()
            );
        }
        Ok(wheels) => {
            println!("{} {} wheel(s) found", "✓".green(), wheels.len());
            for wheel in &wheels {
                println!("  - {} ({})", wheel.display_name.cyan(), wheel.label().yellow());
            }
        }
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            all_ok = false;
        }
    }

    println!();
    if all_ok {
        println!("{}", "All checks passed!".green().bold());
    } else {
        println!(
            "{}",
            "Some checks failed. Please fix the issues above."
                .yellow()
                .bold()
        );
    }

    Ok(())
}
