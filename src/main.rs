//! Interactive console to try every validator and calculator operation by hand.

use anyhow::Result;
use derive_more::Display;
use dotenv::dotenv;
use fieldguard::calculator::{self, CalcError};
use fieldguard::config::Settings;
use fieldguard::validation::{api, credentials, database, Verdict};
use inquire::{CustomType, InquireError, Password, Select, Text};
use log::info;
use serde_json::Value;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// Runs the menu once. Returns None when the menu wants to stop,
    /// Some(()) to be shown again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu in a loop, reporting errors, until it asks to stop
    /// or the prompt can no longer be answered.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                if ends_session(&error) {
                    info!("Leaving menu: {error}");
                    break;
                }
                eprintln!("Error: {error}");
            }
        }
    }
}

/// Errors after which prompting again cannot succeed: no terminal,
/// Esc or Ctrl-C.
fn ends_session(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<InquireError>(),
        Some(
            InquireError::NotTTY
                | InquireError::OperationCanceled
                | InquireError::OperationInterrupted
        )
    )
}

#[derive(EnumIter, Display, Clone, Copy)]
enum Check {
    #[display("API: endpoint")]
    Endpoint,
    #[display("API: HTTP method")]
    HttpMethod,
    #[display("API: status code")]
    StatusCode,
    #[display("API: response time")]
    ResponseTime,
    #[display("API: categorize status code")]
    StatusCategory,
    #[display("DB: table name")]
    TableName,
    #[display("DB: column name")]
    ColumnName,
    #[display("DB: email value")]
    EmailValue,
    #[display("DB: record id")]
    RecordId,
    #[display("DB: date")]
    Date,
    #[display("DB: query limit")]
    QueryLimit,
    #[display("DB: query offset")]
    QueryOffset,
    #[display("Credentials: email")]
    Email,
    #[display("Credentials: password strength")]
    PasswordStrength,
    #[display("Credentials: username")]
    Username,
    #[display("Credentials: login")]
    Login,
    #[display("Calculator")]
    Calculator,
    #[display("Quit")]
    Quit,
}

#[derive(EnumIter, Display, Clone, Copy)]
enum Operation {
    #[display("a + b")]
    Add,
    #[display("a - b")]
    Subtract,
    #[display("a * b")]
    Multiply,
    #[display("a / b")]
    Divide,
    #[display("√a")]
    SquareRoot,
}

struct Console {
    settings: Settings,
}

/// Reads a raw JSON scalar so that non-integer inputs can be rejected
/// the same way an API payload would be.
fn prompt_json(message: &str) -> Result<Value> {
    let raw = Text::new(message)
        .with_help_message("JSON value, e.g. 42, 4.2 or \"42\"")
        .prompt()?;
    Ok(serde_json::from_str(&raw)?)
}

fn show(verdict: &Verdict) {
    let mark = if verdict.is_valid { "[+]" } else { "[!]" };
    println!("{mark} {verdict}");
}

impl Console {
    fn calculate(&self) -> Result<()> {
        let operation = Select::new("Operation:", Operation::iter().collect()).prompt()?;
        let a: f64 = CustomType::new("a:").prompt()?;

        let result: Result<f64, CalcError> = match operation {
            Operation::SquareRoot => calculator::square_root(a),
            binary => {
                let b: f64 = CustomType::new("b:").prompt()?;
                match binary {
                    Operation::Add => Ok(calculator::add(a, b)),
                    Operation::Subtract => Ok(calculator::subtract(a, b)),
                    Operation::Multiply => Ok(calculator::multiply(a, b)),
                    _ => calculator::divide(a, b),
                }
            }
        };

        println!("= {}", result?);
        Ok(())
    }
}

impl Menu for Console {
    fn enter(&mut self) -> Result<MenuExit> {
        let choice = Select::new("What do you want to check?", Check::iter().collect()).prompt()?;

        let verdict = match choice {
            Check::Endpoint => api::validate_endpoint(&Text::new("Endpoint:").prompt()?),
            Check::HttpMethod => api::validate_http_method(&Text::new("Method:").prompt()?),
            Check::StatusCode => api::validate_status_code(&prompt_json("Status code:")?),
            Check::ResponseTime => {
                let ms: f64 = CustomType::new("Response time (ms):").prompt()?;
                api::validate_response_time_within(ms, self.settings.max_response_time_ms)
            }
            Check::StatusCategory => {
                let code: i64 = CustomType::new("Status code:").prompt()?;
                println!("{}", api::categorize_status_code(code));
                return Ok(MENU_LOOP);
            }
            Check::TableName => database::validate_table_name(&Text::new("Table:").prompt()?),
            Check::ColumnName => database::validate_column_name(&Text::new("Column:").prompt()?),
            Check::EmailValue => {
                database::validate_email_column_value(&Text::new("Email:").prompt()?)
            }
            Check::RecordId => database::validate_record_id(&prompt_json("Record id:")?),
            Check::Date => database::validate_date_format(&Text::new("Date:").prompt()?),
            Check::QueryLimit => database::validate_query_limit(&prompt_json("Limit:")?),
            Check::QueryOffset => database::validate_query_offset(&prompt_json("Offset:")?),
            Check::Email => {
                let email = Text::new("Email:").prompt()?;
                if credentials::validate_email(&email) {
                    Verdict::accept("Email is valid")
                } else {
                    Verdict::reject("Invalid email format")
                }
            }
            Check::PasswordStrength => credentials::validate_password_strength(
                &Password::new("Password:").without_confirmation().prompt()?,
            ),
            Check::Username => credentials::validate_username(&Text::new("Username:").prompt()?),
            Check::Login => {
                let username = Text::new("Username:").prompt()?;
                let password = Password::new("Password:")
                    .without_confirmation()
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .prompt()?;
                credentials::validate_login(&username, &password)
            }
            Check::Calculator => {
                self.calculate()?;
                return Ok(MENU_LOOP);
            }
            Check::Quit => return Ok(MENU_EXIT),
        };

        show(&verdict);
        Ok(MENU_LOOP)
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    let (settings, defaulted) = Settings::from_env()?;
    env_logger::builder().filter_level(settings.log_level).init();
    settings.warn_defaults(&defaulted);

    info!(
        "Starting console, max response time {}ms",
        settings.max_response_time_ms
    );
    Console { settings }.enter_loop();
    Ok(())
}
