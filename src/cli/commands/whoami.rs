use crate::cli::context::Session;
use crate::cli::output;
use crate::cli::views::dashboard::user_badge;
use crate::core::errors::Result;

/// Execute the `ethics-monitor whoami` command.
pub fn execute() -> Result<()> {
    let session = Session::open()?;
    session.auth.require_auth()?;

    match session.auth.load_identity()? {
        Some(identity) => {
            output::header(&user_badge(&identity));
            println!("  Username: {}", identity.username);
            println!("  Email:    {}", identity.email);
            println!("  Role:     {}", identity.role);
        }
        None => output::warning("Signed in, but no identity is cached. Run 'ethics-monitor login' again."),
    }
    Ok(())
}
