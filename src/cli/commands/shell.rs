use crate::cli::Context;
use crate::core::error::Result;
use crate::core::ProcessExecutor;
use crate::sequencer::Sequencer;
use std::io;

pub async fn execute(ctx: Context) -> Result<()> {
    let sequencer = Sequencer::new(ctx.working_dir, ctx.config);

    let exit_code = sequencer
        .run_shell(&mut ProcessExecutor, &mut io::stdout())
        .await?;

    std::process::exit(exit_code);
}
