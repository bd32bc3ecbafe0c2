use clap::Parser;
use miette::Result;
use imscli::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Restore default SIGPIPE so piping into `head` exits quietly instead of panicking.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    imscli::core::logging::init(global.verbose);

    match cli.command {
        Commands::Start(cmd) => imscli::cli::commands::start::run(cmd, &global),
        Commands::Stop(cmd) => imscli::cli::commands::stop::run(cmd, &global),
        Commands::Query(cmd) => imscli::cli::commands::query::run(cmd, &global),
        Commands::Profiles(cmd) => imscli::cli::commands::profiles::run(cmd, &global),
        Commands::Completions(args) => imscli::cli::commands::completions::run(args),
    }
}
