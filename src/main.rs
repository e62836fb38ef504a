use clap::Parser;
use pystrap::config::toml_config::TomlConfig;
use pystrap::core::project;
use pystrap::utils::{logger, validation::Validate};
use pystrap::{Cli, Command, Installer, Launcher, ProjectLayout, Settings, SystemRunner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting pystrap");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        tracing::error!("❌ pystrap failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> pystrap::Result<()> {
    let root = project::find_project_root(cli.project_root.as_deref())?;
    tracing::debug!("Project root: {}", root.display());

    let config = TomlConfig::load_optional(&root, cli.config.as_deref())?;
    if let Some(config) = &config {
        config.validate_config()?;
    }

    match cli.command {
        Command::Install { interpreter } => {
            let settings = Settings::resolve(config.as_ref(), interpreter.as_deref());
            let layout = ProjectLayout::new(root, &settings.venv_dir, &settings.requirements);

            let installer = Installer::new(SystemRunner, layout, settings.base_interpreter);
            installer.run().await?;

            tracing::info!("✅ Dependencies installed successfully");
            println!("✅ Dependencies installed successfully!");
        }
        Command::Run {
            fallback_interpreter,
            args,
        } => {
            let settings = Settings::resolve(config.as_ref(), None);
            let layout = ProjectLayout::new(root, &settings.venv_dir, &settings.requirements);

            let launcher = Launcher::new(
                SystemRunner,
                layout,
                settings.entry_module,
                fallback_interpreter,
                args,
            );
            launcher.run().await?;

            tracing::info!("✅ Application exited cleanly");
        }
    }

    Ok(())
}
