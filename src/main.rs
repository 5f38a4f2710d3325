//! clima: forecast, tip calculator, login mock-up and store viewer screens.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::sync::mpsc;

use clima_core::{App, AppError, Config, Screen};
use clima_ui::app_services;
use clima_ui::services::{request_product, request_weather_fetch};
use clima_ui::{register_screens, ForecastModel, LoginModel, StoreModel, TipsModel};

#[derive(Parser)]
#[command(name = "clima")]
#[command(version)]
#[command(about = "Five-day forecast and a few small screens for the terminal")]
struct Cli {
    /// Config file (default: <config dir>/clima/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Screen to show; the forecast when omitted
    #[command(subcommand)]
    screen: Option<ScreenCommand>,
}

#[derive(Debug, PartialEq, Subcommand)]
enum ScreenCommand {
    /// Five-day forecast for the configured location
    Clima,

    /// Tip calculator
    Propinas {
        /// Consumption amount, e.g. 150.00
        #[arg(short, long)]
        amount: Option<String>,

        /// Tip percentages, applied in order. Preset values select the
        /// preset button; anything else is submitted as a custom rate.
        #[arg(short, long = "rate", value_name = "PERCENT")]
        rates: Vec<String>,
    },

    /// Login form mock-up
    Login {
        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        password: Option<String>,

        /// Tick "Remember me"
        #[arg(long)]
        remember_me: bool,

        /// Press "Log In"
        #[arg(long)]
        submit: bool,
    },

    /// Product viewer
    Tienda {
        /// Product id (default: store.product_id from config)
        #[arg(long)]
        id: Option<u32>,
    },
}

impl ScreenCommand {
    fn id(&self) -> &'static str {
        match self {
            ScreenCommand::Clima => clima_ui::models::forecast_model::SCREEN_ID,
            ScreenCommand::Propinas { .. } => clima_ui::models::tips_model::SCREEN_ID,
            ScreenCommand::Login { .. } => clima_ui::models::login_model::SCREEN_ID,
            ScreenCommand::Tienda { .. } => clima_ui::models::store_model::SCREEN_ID,
        }
    }

    /// The command a screen runs with when it is shown as the root.
    fn defaults_for(id: &str) -> Option<Self> {
        match id {
            clima_ui::models::forecast_model::SCREEN_ID => Some(ScreenCommand::Clima),
            clima_ui::models::tips_model::SCREEN_ID => Some(ScreenCommand::Propinas {
                amount: None,
                rates: Vec::new(),
            }),
            clima_ui::models::login_model::SCREEN_ID => Some(ScreenCommand::Login {
                email: None,
                password: None,
                remember_me: false,
                submit: false,
            }),
            clima_ui::models::store_model::SCREEN_ID => Some(ScreenCommand::Tienda { id: None }),
            _ => None,
        }
    }
}

/// Resolve the named screen, or the registered root when none is named.
fn select_command(app: &App, given: Option<ScreenCommand>) -> Result<ScreenCommand, AppError> {
    let screen = app.resolve(given.as_ref().map(ScreenCommand::id))?;
    tracing::info!("Showing screen: {}", screen.name);

    match given {
        Some(command) => Ok(command),
        None => ScreenCommand::defaults_for(screen.id)
            .ok_or_else(|| AppError::UnknownScreen(screen.id.to_string())),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    clima_core::init()?;

    let cli = Cli::parse();
    let (config, _) = Config::load_validated(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let mut app = App::new(config);
    register_screens(&mut app)?;

    let command = select_command(&app, cli.screen)?;

    let result = match command {
        ScreenCommand::Clima => show_forecast(app.config()).await,
        ScreenCommand::Propinas { amount, rates } => {
            show_tips(app.config(), amount.as_deref(), &rates);
            Ok(())
        }
        ScreenCommand::Login {
            email,
            password,
            remember_me,
            submit,
        } => {
            show_login(email, password, remember_me, submit);
            Ok(())
        }
        ScreenCommand::Tienda { id } => show_store(app.config(), id).await,
    };

    app.shutdown();

    result.map_err(|e| anyhow::anyhow!("{} ({})", e.user_message(), e))
}

async fn show_forecast(config: &Config) -> Result<(), AppError> {
    let locale = app_services::locale(config)?;
    let fetcher = app_services::weather_fetcher(config)?;

    let mut model = ForecastModel::new(locale);
    println!("{}", model.render());

    let (tx, mut rx) = mpsc::unbounded_channel();
    request_weather_fetch(&tx, fetcher, Local::now().date_naive());
    drop(tx);

    if let Some(msg) = rx.recv().await {
        model.handle_message(msg);
    }
    println!("{}", model.render());
    Ok(())
}

fn show_tips(config: &Config, amount: Option<&str>, rates: &[String]) {
    let mut model = TipsModel::new(config.tips.preset_rates.clone());
    if let Some(amount) = amount {
        model.set_amount(amount);
    }

    for rate in rates {
        let preset = rate
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(|value| model.presets().iter().position(|p| *p == value));

        match preset {
            Some(index) => {
                model.select_preset(index);
            }
            None => {
                model.set_custom_rate(rate);
                model.submit_custom();
            }
        }
    }

    println!("{}", model.render());
}

fn show_login(email: Option<String>, password: Option<String>, remember_me: bool, submit: bool) {
    let mut model = LoginModel::new();
    if let Some(email) = email {
        model.set_email(&email);
    }
    if let Some(password) = password {
        model.set_password(&password);
    }
    if remember_me {
        model.toggle_remember_me();
    }
    if submit {
        model.submit();
    }
    println!("{}", model.render());
}

async fn show_store(config: &Config, id: Option<u32>) -> Result<(), AppError> {
    let client = app_services::product_client(config)?;

    let mut model = StoreModel::new();
    println!("{}", model.render());

    let (tx, mut rx) = mpsc::unbounded_channel();
    request_product(&tx, client, id.unwrap_or(config.store.product_id));
    drop(tx);

    if let Some(msg) = rx.recv().await {
        model.handle_message(msg);
    }
    println!("{}", model.render());
    Ok(())
}
