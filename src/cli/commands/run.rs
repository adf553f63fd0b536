use crate::cli::Context;
use crate::core::error::Result;
use crate::core::{operator_pause, ProcessExecutor};
use crate::sequencer::Sequencer;
use std::io;

pub async fn execute(ctx: Context) -> Result<()> {
    let sequencer = Sequencer::new(ctx.working_dir, ctx.config);

    let mut pause = operator_pause(ctx.no_pause);

    let mut stdout = io::stdout();
    let report = sequencer
        .run(&mut ProcessExecutor, pause.as_mut(), &mut stdout)
        .await?;

    let failed = report.failed_installs();
    if !failed.is_empty() {
        tracing::warn!("{} wheel install(s) exited with errors", failed.len());
    }

    std::process::exit(report.exit_code());
}
