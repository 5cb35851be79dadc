use clap::Parser;
use tagline::utils::error::ErrorSeverity;
use tagline::utils::{logger, validation::Validate};
use tagline::{adapters, run_self_check, CliConfig, Profile, ReportEngine};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tagline CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let profile = match load_profile(&config) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("Failed to load profile: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = profile.validate() {
        tracing::error!("Profile validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if config.check {
        match run_self_check(&profile) {
            Ok(()) => {
                println!("✅ Self-check passed.");
            }
            Err(e) => {
                tracing::error!("Self-check failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
        return;
    }

    let speech = if config.speak {
        Some(adapters::speech::detect())
    } else {
        None
    };

    let engine = ReportEngine::new(profile, speech);

    match engine.run() {
        Ok(_) => {
            tracing::info!("Tagline composed successfully");
        }
        Err(e) => {
            tracing::error!("Tagline composition failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::High => 1,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

fn load_profile(config: &CliConfig) -> tagline::Result<Profile> {
    match &config.profile {
        Some(path) => {
            tracing::info!("Loading profile overrides from {}", path);
            Profile::from_file(path)
        }
        None => Ok(Profile::default()),
    }
}
