use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Demo => commands::demo::handle(ctx, flags),
        Commands::Learn(args) => commands::learn::handle(args, ctx, flags),
        Commands::Cast(args) => commands::cast::handle(args, ctx, flags),
        Commands::Exam { action } => commands::exam::handle(action, ctx, flags),
        Commands::Befriend(args) => commands::befriend::handle(args, ctx, flags),
        Commands::Member(args) => commands::member::handle(args, ctx, flags),
        Commands::Spells(args) => commands::spells::handle(args, ctx, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
