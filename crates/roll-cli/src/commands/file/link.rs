use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::file::FileLinkArgs;
use crate::commands::shared::notify::surfaced;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LinkResponse {
    file_id: i64,
    url: String,
    opened: bool,
}

pub fn handle(args: &FileLinkArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let url = ctx
        .client
        .download_url(&ctx.session, args.file_id)
        .map_err(surfaced)?;
    if args.open {
        open::that(&url).context("failed to open the download link")?;
    }
    output(
        &LinkResponse {
            file_id: args.file_id,
            url,
            opened: args.open,
        },
        flags.format,
    )
}
