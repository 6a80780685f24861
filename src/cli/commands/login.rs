use std::io::{BufRead, Write};

use crate::cli::context::{self, Session};
use crate::cli::output;
use crate::cli::views::dashboard::user_badge;
use crate::core::errors::{MonitorError, Result};
use crate::core::services::auth_service::AuthService;

/// Execute the `ethics-monitor login` command.
///
/// Missing username or password are read from stdin. The token is always
/// stored durably; `--remember` keeps the identity across reboots too.
pub fn execute(username: Option<&str>, password_stdin: bool, remember: bool) -> Result<()> {
    let session = Session::open()?;

    let username = match username {
        Some(u) => u.trim().to_string(),
        None => prompt("Username: ")?,
    };
    let password = if password_stdin {
        read_line()?
    } else {
        prompt("Password: ")?
    };
    if username.is_empty() || password.is_empty() {
        return Err(MonitorError::InvalidInput {
            detail: "username and password are required".into(),
        });
    }

    let rt = context::runtime()?;
    let sp = output::spinner(&format!("Signing in to {}...", session.client.base_url()));
    let login = match rt.block_on(session.auth.login(&username, &password, remember)) {
        Ok(login) => login,
        Err(e) => {
            output::clear_spinner(sp);
            return Err(e);
        }
    };
    output::finish_spinner(sp, &format!("Signed in as {}", user_badge(&login.identity)));

    if !remember {
        println!("  Identity kept until reboot. Use --remember to keep it longer.");
    }
    if AuthService::is_admin(Some(&login.identity)) {
        println!("  Admin views: ethics-monitor logs | reports");
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    eprint!("{label}");
    std::io::stderr().flush()?;
    read_line()
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
