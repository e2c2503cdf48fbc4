use anyhow::Context;
use clap::Parser;
use pawplan::config::{Command, DemoModeAction, ExportTarget};
use pawplan::core::pages::{build_view, Page};
use pawplan::core::report::{export_clients, export_plans};
use pawplan::core::share::share_link;
use pawplan::utils::error::{ErrorSeverity, PawPlanError};
use pawplan::utils::logger::{self, LogFormat};
use pawplan::utils::validation::Validate;
use pawplan::{
    preview_plan, CliConfig, ConfigProvider, DemoStore, LocalStorage, SignupRequest,
    StoreSettings, TomlConfig,
};
use serde::Serialize;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    let log_format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, log_format);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let result = match &config.config {
        Some(path) => {
            let toml_config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file {}", path))?;
            if let Err(e) = toml_config.validate() {
                exit_with(&e);
            }
            tracing::debug!("Using TOML config from {}", path);
            run(&toml_config, &config.command)
        }
        None => run(&config, &config.command),
    };

    if let Err(e) = result {
        exit_with(&e);
    }

    Ok(())
}

fn run<C: ConfigProvider>(provider: &C, command: &Command) -> pawplan::Result<()> {
    let storage = LocalStorage::new(provider.data_dir().to_string());
    let store = DemoStore::with_settings(storage, StoreSettings::from_config(provider));

    match command {
        Command::Plans => {
            for plan in store.plans()? {
                println!("{} | {} | ${}/month", plan.id, plan.name, plan.price);
                println!("    {}", plan.description);
                for service in &plan.services {
                    println!("    ✓ {}", service);
                }
                println!(
                    "    {} clients • ${} monthly revenue",
                    plan.client_count, plan.revenue
                );
            }
        }
        Command::Clients => {
            for client in store.clients()? {
                println!(
                    "{} | {} <{}> | plan: {} | pets: {} | member since {}",
                    client.id,
                    client.name,
                    client.email,
                    client.plan,
                    client.pets.len(),
                    client.join_date.format("%B %-d, %Y")
                );
            }
        }
        Command::Metrics => {
            let metrics = store.metrics()?;
            println!("Total revenue: ${}", metrics.total_revenue);
            println!("Total clients: {}", metrics.total_clients);
            println!("Plans: {}", metrics.plan_count);
        }
        Command::CreatePlan {
            name,
            price,
            services,
        } => {
            let plan = store.create_plan(name, *price, services.clone())?;
            println!("✅ Plan created successfully! ({})", plan.id);
        }
        Command::FindPlan { id } => {
            let plan = store.get_plan(id)?;
            print_json(&plan)?;
        }
        Command::ShareLink { id } => {
            let plan = store.get_plan(id)?;
            println!("{}", share_link(provider.share_origin(), &plan.id)?);
        }
        Command::Preview {
            name,
            price,
            services,
        } => {
            print_json(&preview_plan(name.as_deref(), price.as_deref(), services))?;
        }
        Command::Signup {
            name,
            email,
            phone,
            pet_name,
            pet_type,
            pet_age,
            plan_id,
        } => {
            let request = SignupRequest {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                pet_name: pet_name.clone(),
                pet_type: pet_type.clone(),
                pet_age: pet_age.clone(),
                plan_id: plan_id.clone(),
            };
            let receipt = store.submit_signup(&request)?;
            println!(
                "✅ Account created successfully! Continue at {}",
                receipt.redirect_to
            );
        }
        Command::DemoMode { action } => {
            let enabled = match action {
                DemoModeAction::Status => store.is_demo_mode()?,
                DemoModeAction::On => {
                    store.set_demo_mode(true)?;
                    true
                }
                DemoModeAction::Off => {
                    store.set_demo_mode(false)?;
                    false
                }
                DemoModeAction::Toggle => store.toggle_demo_mode()?,
            };
            println!("Demo mode: {}", if enabled { "on" } else { "off" });
        }
        Command::Export { target, format } => {
            let output = match target {
                ExportTarget::Plans => export_plans(&store.plans()?, *format)?,
                ExportTarget::Clients => export_clients(&store.clients()?, *format)?,
            };
            print!("{}", output);
        }
        Command::Reset => {
            store.reset()?;
            println!("Demo data cleared; it will be re-seeded on next use");
        }
        Command::Page { path, link } => {
            let view = build_view(&store, Page::from_path(path), link.as_deref())?;
            print_json(&view)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> pawplan::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn exit_with(e: &PawPlanError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
